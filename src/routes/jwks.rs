use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;

use crate::app_state::AppState;
use crate::errors::JwksRouteError;
use crate::services::build_jwk_set;

/// `GET /jwks.json`
///
/// Publishes the public half of the partner signing key so relying parties
/// can verify partner JWTs. Safe to cache for a day; the key rotates with a
/// deployment, not at runtime.
pub async fn jwks(State(state): State<AppState>) -> Result<impl IntoResponse, JwksRouteError> {
    let config = state.config.read().await;
    let set = build_jwk_set(&config).map_err(|e| {
        log::error!("error generating JWKS: {e}");
        JwksRouteError::InternalServerError
    })?;

    Ok((
        [(header::CACHE_CONTROL, "public, max-age=86400")],
        Json(set),
    ))
}
