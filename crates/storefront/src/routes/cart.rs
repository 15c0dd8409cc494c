//! Basket and checkout handlers.
//!
//! The basket lives in the visitor's session (see
//! [`crate::providers::CartProvider`]); every handler mutates it and
//! redirects back to the page the form was posted from.

use axum::{Form, extract::State, response::Redirect};
use serde::Deserialize;
use tracing::instrument;

use emporium_core::ProductId;

use crate::catalog::Product;
use crate::error::{AppError, Result, add_breadcrumb};
use crate::providers::Providers;
use crate::services::CheckoutService;
use crate::state::AppState;

use super::{ReturnForm, safe_return_to};

// =============================================================================
// Form Types
// =============================================================================

/// Add-to-basket form.
#[derive(Debug, Deserialize)]
pub struct AddForm {
    pub product_id: String,
    /// Defaults to 1.
    pub quantity: Option<u32>,
    pub return_to: Option<String>,
}

/// Quantity update form. Zero removes the line.
#[derive(Debug, Deserialize)]
pub struct UpdateForm {
    pub product_id: String,
    pub quantity: u32,
    pub return_to: Option<String>,
}

/// Line removal form.
#[derive(Debug, Deserialize)]
pub struct RemoveForm {
    pub product_id: String,
    pub return_to: Option<String>,
}

/// Resolve a posted product id against the catalog.
fn find_product<'a>(state: &'a AppState, raw: &str) -> Result<&'a Product> {
    ProductId::parse(raw)
        .ok()
        .and_then(|id| state.catalog().get(&id))
        .ok_or_else(|| AppError::NotFound(format!("product {raw}")))
}

// =============================================================================
// Basket Routes
// =============================================================================

/// Add a product to the basket.
#[instrument(skip(state, providers, form), fields(product_id = %form.product_id))]
pub async fn add(
    State(state): State<AppState>,
    mut providers: Providers,
    Form(form): Form<AddForm>,
) -> Result<Redirect> {
    let quantity = form.quantity.unwrap_or(1);
    if quantity == 0 {
        return Err(AppError::BadRequest("quantity must be at least 1".to_string()));
    }
    let product = find_product(&state, &form.product_id)?;

    providers.cart.add(product.id.clone(), quantity).await?;

    add_breadcrumb(
        "cart",
        "Added to basket",
        Some(&[("product_id", product.id.as_str())]),
    );
    tracing::debug!(quantity, "Added to basket");

    Ok(Redirect::to(&safe_return_to(form.return_to.as_deref())))
}

/// Set a line's quantity.
#[instrument(skip(state, providers, form), fields(product_id = %form.product_id, quantity = form.quantity))]
pub async fn update(
    State(state): State<AppState>,
    mut providers: Providers,
    Form(form): Form<UpdateForm>,
) -> Result<Redirect> {
    let product_id = if form.quantity == 0 {
        ProductId::parse(&form.product_id).map_err(|e| AppError::BadRequest(e.to_string()))?
    } else {
        find_product(&state, &form.product_id)?.id.clone()
    };

    providers.cart.set_quantity(product_id, form.quantity).await?;
    Ok(Redirect::to(&safe_return_to(form.return_to.as_deref())))
}

/// Remove a line from the basket.
#[instrument(skip(providers, form), fields(product_id = %form.product_id))]
pub async fn remove(mut providers: Providers, Form(form): Form<RemoveForm>) -> Result<Redirect> {
    let product_id =
        ProductId::parse(&form.product_id).map_err(|e| AppError::BadRequest(e.to_string()))?;

    providers.cart.remove(&product_id).await?;
    Ok(Redirect::to(&safe_return_to(form.return_to.as_deref())))
}

/// Empty the basket.
#[instrument(skip_all)]
pub async fn clear(mut providers: Providers, Form(form): Form<ReturnForm>) -> Result<Redirect> {
    providers.cart.clear().await?;
    Ok(Redirect::to(&safe_return_to(form.return_to.as_deref())))
}

// =============================================================================
// Checkout
// =============================================================================

/// Place the basket as orders.
///
/// - Logged out: open the login overlay and keep the basket open.
/// - Empty basket: nothing is ordered; the basket stays open.
/// - Otherwise: one order per line, then the basket is cleared and closed
///   and the order success overlay opens.
#[instrument(skip_all)]
pub async fn checkout(
    State(state): State<AppState>,
    mut providers: Providers,
    Form(form): Form<ReturnForm>,
) -> Result<Redirect> {
    let back = Redirect::to(&safe_return_to(form.return_to.as_deref()));

    let Some(user) = providers.auth.user().cloned() else {
        providers.auth.set_login_open(true).await?;
        providers.overlays.set_basket_open(true).await?;
        return Ok(back);
    };

    if providers.cart.cart().is_empty() {
        providers.overlays.set_basket_open(true).await?;
        return Ok(back);
    }

    let orders = CheckoutService::new(state.catalog(), state.orders())
        .place_order(&user, providers.cart.cart(), providers.currency.currency())
        .await?;

    providers.cart.clear().await?;
    providers.overlays.set_basket_open(false).await?;
    providers.overlays.set_order_success_open(true).await?;

    let count = orders.len().to_string();
    add_breadcrumb("checkout", "Order placed", Some(&[("orders", count.as_str())]));

    Ok(back)
}
