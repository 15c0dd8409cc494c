//! Business logic services for storefront.
//!
//! # Services
//!
//! - `auth` - Account registration, password login, profile updates
//! - `checkout` - Turning a basket into recorded orders

pub mod auth;
pub mod checkout;

pub use auth::{AuthError, AuthService, ProfileUpdate};
pub use checkout::{CheckoutError, CheckoutService};
