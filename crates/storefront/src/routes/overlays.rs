//! Overlay open/close handlers.
//!
//! The basket and order success flags belong to the layout's overlay
//! provider; the login flag belongs to the auth provider. The profile
//! overlay follows the path and has no flag.

use axum::{
    Form,
    extract::Path,
    response::Redirect,
};
use tracing::instrument;

use crate::error::{AppError, Result, add_breadcrumb};
use crate::models::Overlay;
use crate::providers::Providers;

use super::{ReturnForm, safe_return_to};

async fn set_open(providers: &mut Providers, overlay: Overlay, open: bool) -> Result<()> {
    match overlay {
        Overlay::Basket => providers.overlays.set_basket_open(open).await?,
        Overlay::OrderSuccess => providers.overlays.set_order_success_open(open).await?,
        Overlay::Login => providers.auth.set_login_open(open).await?,
        Overlay::Profile => {
            return Err(AppError::NotFound("overlay profile".to_string()));
        }
    }
    Ok(())
}

fn resolve(slug: &str) -> Result<Overlay> {
    Overlay::toggleable_from_slug(slug).ok_or_else(|| AppError::NotFound(format!("overlay {slug}")))
}

/// Open an overlay.
#[instrument(skip(providers, form))]
pub async fn open(
    Path(overlay): Path<String>,
    mut providers: Providers,
    Form(form): Form<ReturnForm>,
) -> Result<Redirect> {
    let overlay = resolve(&overlay)?;
    set_open(&mut providers, overlay, true).await?;
    add_breadcrumb("overlay", "Opened overlay", Some(&[("overlay", overlay.slug())]));
    Ok(Redirect::to(&safe_return_to(form.return_to.as_deref())))
}

/// Close an overlay.
#[instrument(skip(providers, form))]
pub async fn close(
    Path(overlay): Path<String>,
    mut providers: Providers,
    Form(form): Form<ReturnForm>,
) -> Result<Redirect> {
    let overlay = resolve(&overlay)?;
    set_open(&mut providers, overlay, false).await?;
    Ok(Redirect::to(&safe_return_to(form.return_to.as_deref())))
}

/// Close the order success overlay, then navigate to `/orders`.
#[instrument(skip(providers))]
pub async fn view_orders(mut providers: Providers) -> Result<Redirect> {
    providers.overlays.set_order_success_open(false).await?;
    add_breadcrumb("navigation", "Viewed orders after checkout", None);
    Ok(Redirect::to("/orders"))
}
