use std::str::FromStr;

use chrono::{Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use thiserror::Error;

use crate::domain::PartnerClaims;
use crate::utils::config::Config;

#[derive(Error, Debug)]
pub enum SigningError {
    #[error("unsupported signing algorithm")]
    UnsupportedAlgorithm,
    #[error("bad signing key or claims")]
    Token(#[from] jsonwebtoken::errors::Error),
    #[error("invalid token lifetime")]
    BadLifetime,
}

/// Sign a short-lived partner JWT asserting `{ partnerId, scope }`.
///
/// This token authorizes one issuance request to the external credential
/// service; a fresh one is minted per user-data response. A malformed key
/// or an algorithm the key cannot serve surfaces as `SigningError`, which
/// the endpoint treats as a 500.
pub fn sign_partner_jwt(config: &Config, scope: &str) -> Result<String, SigningError> {
    let algorithm = Algorithm::from_str(config.signing_algorithm())
        .map_err(|_| SigningError::UnsupportedAlgorithm)?;

    let key = EncodingKey::from_ec_pem(config.partner_private_key_pem().as_bytes())?;

    let now = Utc::now();
    let exp = now
        .checked_add_signed(Duration::seconds(config.partner_jwt_ttl_seconds()))
        .ok_or(SigningError::BadLifetime)?;

    let claims = PartnerClaims {
        partner_id: config.partner_id().to_owned(),
        scope: scope.to_owned(),
        iat: now.timestamp() as usize,
        exp: exp.timestamp() as usize,
    };

    let mut header = Header::new(algorithm);
    header.kid = Some(config.partner_id().to_owned());

    Ok(encode(&header, &claims, &key)?)
}
