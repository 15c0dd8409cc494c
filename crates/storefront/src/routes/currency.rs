//! Currency selection handler.

use axum::{Form, response::Redirect};
use serde::Deserialize;
use tracing::instrument;

use emporium_core::CurrencyCode;

use crate::error::{AppError, Result};
use crate::providers::Providers;

use super::safe_return_to;

/// Currency selector form.
#[derive(Debug, Deserialize)]
pub struct CurrencyForm {
    pub currency: String,
    pub return_to: Option<String>,
}

/// Select the display currency.
#[instrument(skip(providers), fields(currency = %form.currency))]
pub async fn select(mut providers: Providers, Form(form): Form<CurrencyForm>) -> Result<Redirect> {
    let currency: CurrencyCode = form
        .currency
        .parse()
        .map_err(|e: emporium_core::CurrencyError| AppError::BadRequest(e.to_string()))?;

    providers.currency.set(currency).await?;
    tracing::debug!(%currency, "Currency selected");
    Ok(Redirect::to(&safe_return_to(form.return_to.as_deref())))
}
