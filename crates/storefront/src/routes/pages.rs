//! Page rendering.

use axum::{
    http::Uri,
    extract::State,
    response::{IntoResponse, Response},
};
use tracing::instrument;

use crate::providers::Providers;
use crate::state::AppState;
use crate::views::{Page, compose};

/// Render the layout for the requested path.
///
/// Unknown paths still render the navbar, overlays and footer around an
/// empty main region, with status 404.
#[instrument(skip(state, uri, providers), fields(path = %uri.path()))]
pub async fn page(State(state): State<AppState>, uri: Uri, providers: Providers) -> Response {
    let path = uri.path();
    let layout = compose(path, &state, &providers).await;
    (Page::resolve(path).status(), layout).into_response()
}
