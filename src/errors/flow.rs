use thiserror::Error;

use crate::domain::{FetchError, ProviderError};

/// Which part of the flow broke; drives where "Retry" sends the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlowStage {
    Login,
    Verify,
    Fetch,
    Issue,
}

/// Failure inside one flow invocation. Logged with full detail at the
/// controller boundary; the UI only ever sees the resulting `Failed` step.
#[derive(Error, Debug)]
pub enum FlowError {
    #[error("AIR login failed")]
    Login(#[source] ProviderError),

    #[error("login did not complete")]
    LoginIncomplete,

    #[error("wallet connection failed")]
    WalletConnect(#[source] ProviderError),

    #[error("login verification failed")]
    Verify(#[source] FetchError),

    #[error("Invalid login")]
    InvalidLogin,

    #[error("user data fetch failed")]
    Fetch(#[source] FetchError),

    #[error("credential issuance failed")]
    Issue(#[source] ProviderError),

    #[error("{0} timed out")]
    Timeout(&'static str, FlowStage),
}

impl FlowError {
    pub fn stage(&self) -> FlowStage {
        match self {
            FlowError::Login(_) | FlowError::LoginIncomplete | FlowError::WalletConnect(_) => {
                FlowStage::Login
            }
            FlowError::Verify(_) | FlowError::InvalidLogin => FlowStage::Verify,
            FlowError::Fetch(_) => FlowStage::Fetch,
            FlowError::Issue(_) => FlowStage::Issue,
            FlowError::Timeout(_, stage) => *stage,
        }
    }
}
