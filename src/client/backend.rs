use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::Client;
use serde_json::json;

use crate::domain::{BackendApi, FetchError, UserDataResponse, VerifyLoginResponse};
use crate::session::SessionStore;

/// HTTP client for this service's own backend.
///
/// Every outgoing request picks up the current session token from the
/// shared store, the same way the original front end attached it in a
/// request interceptor. The store read is synchronous, so building a
/// request never awaits.
#[derive(Clone)]
pub struct BackendClient {
    http: Client,
    base_url: String,
    session: SessionStore,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>, session: SessionStore) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
            session,
        }
    }
}

#[async_trait]
impl BackendApi for BackendClient {
    /// `POST /api/auth/airkit`: exchange an AIR access token for a backend
    /// session token. The AIR token rides in the Bearer header; the session
    /// token (if any) is intentionally NOT attached here.
    async fn verify_login(
        &self,
        airkit_token: &str,
        name: Option<&str>,
    ) -> Result<VerifyLoginResponse, FetchError> {
        let response = self
            .http
            .post(format!("{}/api/auth/airkit", self.base_url))
            .header(AUTHORIZATION, format!("Bearer {airkit_token}"))
            .json(&json!({ "name": name }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }
        Ok(response.json().await?)
    }

    /// `POST /api/user/user-data` with the session token attached.
    async fn fetch_user_data(&self) -> Result<UserDataResponse, FetchError> {
        let mut request = self
            .http
            .post(format!("{}/api/user/user-data", self.base_url));
        if let Some(token) = self.session.access_token() {
            request = request.header(AUTHORIZATION, token);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }
        Ok(response.json().await?)
    }
}
