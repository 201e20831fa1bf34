//! Session-token issuance and validation.
//!
//! The session JWT authenticates the browser to this backend. It is a
//! symmetric (HS256) token minted by the login verification handler and
//! checked on every protected request; it is unrelated to the partner JWT,
//! which has its own signer and audience.

use std::sync::Arc;

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use tokio::sync::RwLock;

use crate::domain::SessionClaims;
use crate::utils::config::Config;

#[derive(Clone)]
pub struct TokenService {
    cfg: Arc<RwLock<Config>>,
}

impl TokenService {
    pub fn new(cfg: Arc<RwLock<Config>>) -> Self {
        Self { cfg }
    }

    /// Mint a session JWT for the given subject (wallet address or AIR
    /// account id).
    pub async fn issue_session(&self, sub: &str) -> Result<String, jsonwebtoken::errors::Error> {
        let (secret, ttl_seconds) = {
            let config = self.cfg.read().await;
            (config.session_secret().to_vec(), config.session_ttl_seconds())
        };

        let now = Utc::now();
        let exp = now + Duration::seconds(ttl_seconds);
        let claims = SessionClaims {
            sub: sub.to_owned(),
            iat: now.timestamp() as usize,
            exp: exp.timestamp() as usize,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(&secret),
        )
    }

    /// Validate a session token and return its claims. Signature and expiry
    /// failures both come back as a jsonwebtoken error; callers map them to
    /// Unauthorized without inspecting the cause.
    pub async fn verify_session_access_token(
        &self,
        token: &str,
    ) -> Result<SessionClaims, jsonwebtoken::errors::Error> {
        let secret = self.cfg.read().await.session_secret().to_vec();
        decode::<SessionClaims>(
            token,
            &DecodingKey::from_secret(&secret),
            &Validation::default(),
        )
        .map(|data| data.claims)
    }
}
