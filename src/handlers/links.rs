use crate::error::{ApiError, Result};
use crate::models::ShortLink;
use crate::{db, shortcode, AppState};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;

// ── Payload types ──────────────────────────────────────────────────────────

/// Body of POST `/`. Both fields are deserialized as optional so that a
/// missing field surfaces as the API's own 400 instead of a serde rejection.
#[derive(Debug, Deserialize)]
pub struct CreateLinkRequest {
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    shortcode: Option<String>,
}

/// Wire shape of a stored mapping, shared by the create response and the
/// listing.
#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub shortcode: String,
    pub url: String,
}

impl From<ShortLink> for LinkResponse {
    fn from(link: ShortLink) -> Self {
        Self {
            shortcode: link.key,
            url: link.url,
        }
    }
}

// ── Handlers ───────────────────────────────────────────────────────────────

/// POST /
///
/// Register a shortcode, or re-point it if it already exists.
pub async fn create_link(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateLinkRequest>,
) -> Result<(StatusCode, Json<LinkResponse>)> {
    // Absent and empty fields are rejected alike.
    let url = body.url.as_deref().filter(|s| !s.is_empty());
    let code = body.shortcode.as_deref().filter(|s| !s.is_empty());

    let (Some(url), Some(code)) = (url, code) else {
        return Err(ApiError::MissingFields);
    };

    if !shortcode::is_valid(code) {
        return Err(ApiError::InvalidShortcode);
    }

    let link = db::upsert_link(&state.db, code, url).await?;

    Ok((StatusCode::CREATED, Json(link.into())))
}

/// GET /
///
/// Every stored mapping as a JSON array.
pub async fn list_links(State(state): State<Arc<AppState>>) -> Result<Json<Vec<LinkResponse>>> {
    let links = db::list_links(&state.db).await?;

    Ok(Json(links.into_iter().map(LinkResponse::from).collect()))
}

/// DELETE /:key
pub async fn delete_link(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
) -> Result<Json<Value>> {
    if !shortcode::is_valid(&key) {
        return Err(ApiError::InvalidShortcode);
    }

    if db::delete_link(&state.db, &key).await? {
        Ok(Json(json!({
            "message": format!("Shortcode '{key}' deleted successfully")
        })))
    } else {
        Err(ApiError::NotFound)
    }
}
