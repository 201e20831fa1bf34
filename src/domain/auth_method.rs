use std::str::FromStr;

/// How the user proves who they are before issuance.
///
/// Selected once from configuration, never at runtime: `Wallet` gates
/// issuance on a connected chain wallet, `Airkit` relies on the AIR account
/// login alone and treats any wallet connection as cosmetic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthMethod {
    Wallet,
    Airkit,
}

pub struct ParseAuthMethodError;

impl FromStr for AuthMethod {
    type Err = ParseAuthMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "wallet" => Ok(AuthMethod::Wallet),
            "airkit" => Ok(AuthMethod::Airkit),
            _ => Err(ParseAuthMethodError),
        }
    }
}
