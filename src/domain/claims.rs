use serde::{Deserialize, Serialize};

/// Claims of the session JWT that authenticates the browser to this backend.
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    #[serde(default)]
    pub sub: String,
    pub iat: usize,
    pub exp: usize,
}

/// Claims of the partner JWT that authorizes an issuance request to the
/// external credential service. Signed with the partner key, not the
/// session secret.
#[derive(Debug, Serialize, Deserialize)]
pub struct PartnerClaims {
    #[serde(rename = "partnerId")]
    pub partner_id: String,
    pub scope: String,
    pub iat: usize,
    pub exp: usize,
}
