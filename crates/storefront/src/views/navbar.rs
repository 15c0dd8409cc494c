//! Navbar view model.

use emporium_core::CurrencyCode;

/// A currency selector entry.
#[derive(Debug, Clone)]
pub struct CurrencyOption {
    pub code: &'static str,
    pub symbol: &'static str,
    pub selected: bool,
}

/// The persistent top bar.
#[derive(Debug, Clone)]
pub struct NavbarView {
    pub item_count: u32,
    /// First name of the logged-in user; `None` shows the login control.
    pub greeting: Option<String>,
    pub currencies: Vec<CurrencyOption>,
}

impl NavbarView {
    #[must_use]
    pub fn new(item_count: u32, greeting: Option<String>, currency: CurrencyCode) -> Self {
        Self {
            item_count,
            greeting,
            currencies: CurrencyCode::ALL
                .into_iter()
                .map(|code| CurrencyOption {
                    code: code.code(),
                    symbol: code.symbol(),
                    selected: code == currency,
                })
                .collect(),
        }
    }
}
