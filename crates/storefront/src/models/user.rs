//! User domain types.
//!
//! These types represent validated domain objects handed out by the user
//! repository; the password hash never leaves the repository.

use chrono::NaiveDate;

use emporium_core::{Email, UserId};

/// A storefront account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// User's email address (unique).
    pub email: Email,
    pub first_name: String,
    pub last_name: String,
    /// Contact and shipping details, filled in from the profile overlay.
    pub profile: Profile,
}

impl User {
    /// "First Last", trimmed.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Profile details attached to every account.
///
/// Empty until the user saves the profile form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Profile {
    pub date_of_birth: Option<NaiveDate>,
    pub country: Option<String>,
    pub contact_number: Option<String>,
    pub pincode: Option<String>,
    /// Flat, house no., building, company, apartment
    pub address_line1: Option<String>,
    /// Area, street, sector, village
    pub address_line2: Option<String>,
    pub landmark: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
}

impl Profile {
    /// Whether the user has ever saved the profile form.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.date_of_birth.is_none() && self.address_line1.is_none() && self.city.is_none()
    }
}
