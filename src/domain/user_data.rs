use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of `POST /api/user/user-data`: the candidate credential-subject data
/// plus the partner JWT required by the issuance call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDataResponse {
    pub jwt: String,
    pub response: Map<String, Value>,
}

/// Body of the login verification call (`POST /api/auth/airkit`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyLoginResponse {
    #[serde(rename = "accessToken", default)]
    pub access_token: String,
    #[serde(rename = "walletAddress", default)]
    pub wallet_address: String,
}
