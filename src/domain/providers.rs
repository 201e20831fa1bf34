use async_trait::async_trait;
use serde_json::{Map, Value};
use thiserror::Error;

use super::user_data::{UserDataResponse, VerifyLoginResponse};
use super::IssueCredentialRequest;

/// Opaque failure from an external collaborator (AIR service, wallet,
/// issuance SDK). Carries a message for the logs; callers only branch on
/// which operation failed, never on the content.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct ProviderError(pub String);

impl ProviderError {
    pub fn new(message: impl Into<String>) -> Self {
        ProviderError(message.into())
    }
}

/// Failure of a backend HTTP round trip (verify call or user-data fetch).
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed")]
    Request(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(reqwest::StatusCode),
}

/// Source of the candidate credential-subject data for one user.
///
/// The demo implementation returns hardcoded data; a real deployment swaps
/// in one backed by an actual backend without touching the route.
#[async_trait]
pub trait UserDataProvider: Send + Sync {
    async fn user_data(&self, user_id: &str) -> Result<Map<String, Value>, ProviderError>;
}

/// The AIR account service: identity-provider login plus token/profile reads.
#[async_trait]
pub trait AirService: Send + Sync {
    fn is_logged_in(&self) -> bool;
    async fn login(&self) -> Result<(), ProviderError>;
    async fn get_access_token(&self) -> Result<String, ProviderError>;
    async fn get_user_info(&self) -> Result<AirUserInfo, ProviderError>;
}

#[derive(Debug, Clone, Default)]
pub struct AirUserInfo {
    pub email: Option<String>,
}

/// A chain wallet connection (connect modal and friends).
#[async_trait]
pub trait WalletConnector: Send + Sync {
    fn is_connected(&self) -> bool;
    fn address(&self) -> Option<String>;
    async fn connect(&self) -> Result<(), ProviderError>;
}

/// The external SDK's credential-issuance operation.
#[async_trait]
pub trait CredentialIssuer: Send + Sync {
    async fn issue_credential(
        &self,
        request: IssueCredentialRequest,
    ) -> Result<(), ProviderError>;
}

/// The backend as seen from the flow controller: login verification and the
/// authenticated user-data fetch.
#[async_trait]
pub trait BackendApi: Send + Sync {
    async fn verify_login(
        &self,
        airkit_token: &str,
        name: Option<&str>,
    ) -> Result<VerifyLoginResponse, FetchError>;

    async fn fetch_user_data(&self) -> Result<UserDataResponse, FetchError>;
}
