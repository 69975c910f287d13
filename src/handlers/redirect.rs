use crate::error::{ApiError, Result};
use crate::{db, shortcode, AppState};
use axum::extract::{Path, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

/// GET /:key
///
/// Resolve the shortcode and send the visitor on. This is the one public
/// route: it is reachable without the trusted-client check.
pub async fn redirect(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
) -> Result<Response> {
    if !shortcode::is_valid(&key) {
        return Err(ApiError::InvalidShortcode);
    }

    let Some(link) = db::get_link(&state.db, &key).await? else {
        return Err(ApiError::NotFound);
    };

    // Stored urls are unvalidated; one that is not a legal header value
    // must answer 500 here rather than panic inside `Redirect::to`.
    let location = HeaderValue::try_from(link.url).map_err(|_| {
        tracing::error!("stored url for '{}' is not a legal Location header", key);
        ApiError::InvalidRedirectTarget
    })?;

    Ok((StatusCode::SEE_OTHER, [(header::LOCATION, location)]).into_response())
}
