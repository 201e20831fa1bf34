use axum::extract::State;
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use axum::response::IntoResponse;
use axum::Json;

use crate::app_state::AppState;
use crate::domain::UserDataResponse;
use crate::errors::UserDataError;
use crate::services::sign_partner_jwt;

/// `POST /api/user/user-data`
///
/// Authenticated by the session token in the `Authorization` header.
/// Returns the credential-subject candidate for the token's subject plus a
/// fresh partner JWT scoped to "issue".
pub async fn user_data(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, UserDataError> {
    let header = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(UserDataError::Unauthorized)?;
    // The browser client sends the bare token; tolerate a Bearer prefix too.
    let token = header.strip_prefix("Bearer ").unwrap_or(header);

    let claims = state
        .token_service
        .read()
        .await
        .verify_session_access_token(token)
        .await
        .map_err(|e| {
            log::warn!("session token rejected: {e}");
            UserDataError::Unauthorized
        })?;

    if claims.sub.is_empty() {
        return Err(UserDataError::MissingUserId);
    }

    let response = state
        .user_data_provider
        .read()
        .await
        .user_data(&claims.sub)
        .await
        .map_err(|e| {
            log::error!("user data lookup failed for {}: {e}", claims.sub);
            UserDataError::InternalServerError
        })?;

    let jwt = {
        let config = state.config.read().await;
        sign_partner_jwt(&config, "issue").map_err(|e| {
            log::error!("partner JWT signing failed: {e}");
            UserDataError::InternalServerError
        })?
    };

    Ok(Json(UserDataResponse { jwt, response }))
}
