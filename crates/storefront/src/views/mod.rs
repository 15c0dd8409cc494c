//! Layout composition.
//!
//! Every page is the same layout: navbar, one routed main region, the
//! path-driven profile overlay, the flag-driven basket, login and order
//! success overlays, and the footer. [`compose`] builds the whole tree from
//! the request path and the visitor's providers.

pub mod catalog;
pub mod navbar;
pub mod orders;
pub mod overlays;

use askama::Template;
use askama_web::WebTemplate;
use axum::http::StatusCode;

pub use catalog::{ProductCardView, ProductGridView};
pub use navbar::{CurrencyOption, NavbarView};
pub use orders::{OrderRowView, OrdersPageView};
pub use overlays::{
    BasketLineView, BasketModalView, LoginModalView, OrderSuccessModalView, ProfileFormView,
    ProfileModalView,
};

use crate::filters;
use crate::providers::Providers;
use crate::state::AppState;

/// Store name shown in the navbar, title and footer.
pub const STORE_NAME: &str = "Emporium";

/// Page selected by the current path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    /// The product grid with the profile overlay on top.
    Profile,
    Orders,
    NotFound,
}

impl Page {
    /// Resolve a request path. A trailing slash is ignored.
    #[must_use]
    pub fn resolve(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "" => Self::Home,
            "/profile" => Self::Profile,
            "/orders" => Self::Orders,
            _ => Self::NotFound,
        }
    }

    #[must_use]
    pub const fn shows_profile_overlay(self) -> bool {
        matches!(self, Self::Profile)
    }

    #[must_use]
    pub const fn status(self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::OK,
        }
    }
}

/// What the main region holds.
#[derive(Debug, Clone)]
pub enum MainContent {
    ProductGrid(ProductGridView),
    Orders(OrdersPageView),
    Empty,
}

/// The full page.
#[derive(Template, WebTemplate)]
#[template(path = "layout.html")]
pub struct LayoutTemplate {
    pub store_name: &'static str,
    /// Local path every form posts back to.
    pub return_to: String,
    pub navbar: NavbarView,
    pub main: MainContent,
    pub profile: Option<ProfileModalView>,
    pub basket: Option<BasketModalView>,
    pub login: Option<LoginModalView>,
    pub order_success: Option<OrderSuccessModalView>,
}

impl LayoutTemplate {
    /// Number of overlays this page mounts.
    #[must_use]
    pub fn overlay_count(&self) -> usize {
        [
            self.profile.is_some(),
            self.basket.is_some(),
            self.login.is_some(),
            self.order_success.is_some(),
        ]
        .into_iter()
        .filter(|mounted| *mounted)
        .count()
    }

    /// Show a rejected profile submission with its error.
    pub fn show_profile_error(&mut self, form: ProfileFormView, error: String) {
        self.profile = Some(ProfileModalView {
            form: Some(form),
            error: Some(error),
        });
    }
}

/// Build the layout for `path` from the visitor's providers.
pub async fn compose(path: &str, state: &AppState, providers: &Providers) -> LayoutTemplate {
    let page = Page::resolve(path);
    let currency = providers.currency.currency();
    let user = providers.auth.user();

    let main = match page {
        Page::Home | Page::Profile => {
            MainContent::ProductGrid(ProductGridView::new(state.catalog(), currency))
        }
        Page::Orders => MainContent::Orders(match user {
            Some(user) => OrdersPageView::history(&state.orders().list_for_user(&user.email).await),
            None => OrdersPageView::LoginRequired,
        }),
        Page::NotFound => MainContent::Empty,
    };

    let profile = if page.shows_profile_overlay() {
        let form = match user {
            Some(current) => state
                .users()
                .get_by_id(current.id)
                .await
                .map(|user| ProfileFormView::from(&user)),
            None => None,
        };
        Some(ProfileModalView { form, error: None })
    } else {
        None
    };

    let flags = providers.overlays.flags();
    // The navbar counts the same lines the basket shows
    let basket = BasketModalView::new(providers.cart.cart(), state.catalog(), currency);

    LayoutTemplate {
        store_name: STORE_NAME,
        return_to: path.to_string(),
        navbar: NavbarView::new(
            basket.item_count(),
            user.map(|u| u.first_name.clone()),
            currency,
        ),
        main,
        profile,
        basket: flags.basket_open.then_some(basket),
        login: providers.auth.login_open().then(|| LoginModalView {
            error: providers.auth.error().map(String::from),
        }),
        order_success: flags.order_success_open.then_some(OrderSuccessModalView),
    }
}
