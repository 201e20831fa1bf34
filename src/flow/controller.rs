//! The issuance flow controller.
//!
//! Drives one user through login -> verify -> data fetch -> preview ->
//! confirm -> issue against the injected collaborators. All I/O is async
//! and sequential within one invocation; external calls that can hang
//! (login verification, issuance) run under a timeout.
//!
//! Error policy: internal helpers return `FlowError`, the public methods
//! catch it, log the cause, and park the flow in `Failed { stage }` so the
//! UI only ever renders a generic retry state.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::timeout;

use crate::domain::{
    normalize_credential_subject, AirService, AuthMethod, BackendApi, CredentialIssuer,
    IssueCredentialRequest, UserDataResponse, WalletConnector,
};
use crate::errors::{FlowError, FlowStage};
use crate::session::SessionStore;
use crate::utils::Config;

use super::step::FlowStep;

/// The slice of configuration the controller needs.
#[derive(Clone, Debug)]
pub struct FlowConfig {
    pub auth_method: AuthMethod,
    pub credential_id: String,
    pub issuer_did: String,
    pub call_timeout: Duration,
}

impl From<&Config> for FlowConfig {
    fn from(config: &Config) -> Self {
        Self {
            auth_method: config.auth_method(),
            credential_id: config.issue_program_id().to_owned(),
            issuer_did: config.issuer_did().to_owned(),
            call_timeout: Duration::from_secs(config.call_timeout_seconds()),
        }
    }
}

pub struct IssuanceFlow {
    config: FlowConfig,
    air: Arc<dyn AirService>,
    wallet: Arc<dyn WalletConnector>,
    backend: Arc<dyn BackendApi>,
    issuer: Arc<dyn CredentialIssuer>,
    session: SessionStore,
    step: FlowStep,
    user_data: Option<UserDataResponse>,
    in_flight: bool,
}

impl IssuanceFlow {
    pub fn new(
        config: FlowConfig,
        air: Arc<dyn AirService>,
        wallet: Arc<dyn WalletConnector>,
        backend: Arc<dyn BackendApi>,
        issuer: Arc<dyn CredentialIssuer>,
        session: SessionStore,
    ) -> Self {
        Self {
            config,
            air,
            wallet,
            backend,
            issuer,
            session,
            step: FlowStep::Unauthenticated,
            user_data: None,
            in_flight: false,
        }
    }

    pub fn step(&self) -> &FlowStep {
        &self.step
    }

    pub fn user_data(&self) -> Option<&UserDataResponse> {
        self.user_data.as_ref()
    }

    /// All authorization inputs hold at once: AIR login active, wallet
    /// connected (wallet-mode only), session token present.
    pub fn is_authorized(&self) -> bool {
        let wallet_ok = match self.config.auth_method {
            AuthMethod::Wallet => self.wallet.is_connected(),
            AuthMethod::Airkit => true,
        };
        self.air.is_logged_in() && wallet_ok && self.session.access_token().is_some()
    }

    /// Recompute the Authorizing -> Preview transition. Call whenever any
    /// authorization input may have changed (login completed, wallet
    /// connected, token stored); the check is not one-shot.
    pub fn reevaluate(&mut self) -> &FlowStep {
        if matches!(self.step, FlowStep::Unauthenticated | FlowStep::Authorizing)
            && self.is_authorized()
            && self.user_data.is_some()
        {
            self.step = FlowStep::Preview;
        }
        &self.step
    }

    /// User pressed "Connect Wallet" / "Login".
    pub async fn connect_or_login(&mut self) -> FlowStep {
        if self.in_flight || self.step.is_terminal() {
            return self.step.clone();
        }

        self.step = FlowStep::Authorizing;
        self.in_flight = true;
        let result = self.authorize().await;
        self.in_flight = false;

        match result {
            Ok(()) => {
                self.reevaluate();
            }
            Err(e) => {
                log::error!("authorization failed: {e}");
                self.step = FlowStep::Failed { stage: e.stage() };
            }
        }
        self.step.clone()
    }

    /// User pressed "Confirm" on the preview. Re-derives the credential
    /// subject from freshly fetched data on every attempt, so a retry never
    /// resends stale or partially mutated state.
    pub async fn confirm(&mut self) -> FlowStep {
        if self.in_flight || !matches!(self.step, FlowStep::Preview) {
            return self.step.clone();
        }
        if !self.is_authorized() {
            // Wallet or login dropped since the preview was rendered; send
            // the user back through authorization instead of issuing.
            self.step = FlowStep::Unauthenticated;
            return self.connect_or_login().await;
        }

        self.step = FlowStep::Issuing;
        self.in_flight = true;
        let result = self.issue().await;
        self.in_flight = false;

        match result {
            Ok(()) => self.step = FlowStep::Success,
            Err(e) => {
                log::error!("issuance failed: {e}");
                self.step = FlowStep::Failed { stage: e.stage() };
            }
        }
        self.step.clone()
    }

    /// User pressed "Retry" after a failure. Login and verification
    /// failures restart authorization; fetch failures re-fetch; issuance
    /// failures re-confirm.
    pub async fn retry(&mut self) -> FlowStep {
        let stage = match &self.step {
            FlowStep::Failed { stage } => *stage,
            _ => return self.step.clone(),
        };

        match stage {
            FlowStage::Login | FlowStage::Verify => {
                self.step = FlowStep::Unauthenticated;
                self.connect_or_login().await
            }
            FlowStage::Fetch => {
                self.in_flight = true;
                let result = self.fetch_user_data().await;
                self.in_flight = false;
                match result {
                    Ok(_) => self.step = FlowStep::Preview,
                    Err(e) => {
                        log::error!("user data refetch failed: {e}");
                        self.step = FlowStep::Failed { stage: e.stage() };
                    }
                }
                self.step.clone()
            }
            FlowStage::Issue => {
                self.step = FlowStep::Preview;
                self.confirm().await
            }
        }
    }

    async fn authorize(&mut self) -> Result<(), FlowError> {
        if !self.air.is_logged_in() {
            self.air.login().await.map_err(FlowError::Login)?;
            if !self.air.is_logged_in() {
                return Err(FlowError::LoginIncomplete);
            }
        }

        if self.config.auth_method == AuthMethod::Wallet {
            if !self.wallet.is_connected() {
                self.wallet
                    .connect()
                    .await
                    .map_err(FlowError::WalletConnect)?;
            }
            if !self.wallet.is_connected() {
                // User dismissed the connect modal; stay in Authorizing and
                // wait for the next trigger.
                return Ok(());
            }
        }

        if self.session.access_token().is_none() {
            self.exchange_air_token().await?;
        }

        if self.user_data.is_none() {
            self.fetch_user_data().await?;
        }
        Ok(())
    }

    /// Exchange the AIR access token for a backend session token.
    async fn exchange_air_token(&mut self) -> Result<(), FlowError> {
        let airkit_token = self
            .air
            .get_access_token()
            .await
            .map_err(FlowError::Login)?;
        let name = match self.air.get_user_info().await {
            Ok(info) => info.email,
            Err(e) => {
                log::warn!("could not read AIR account email: {e}");
                None
            }
        };

        let verified = timeout(
            self.config.call_timeout,
            self.backend.verify_login(&airkit_token, name.as_deref()),
        )
        .await
        .map_err(|_| FlowError::Timeout("login verification", FlowStage::Verify))?
        .map_err(FlowError::Verify)?;

        if verified.access_token.is_empty() {
            return Err(FlowError::InvalidLogin);
        }
        self.session.set_access_token(verified.access_token);
        Ok(())
    }

    async fn fetch_user_data(&mut self) -> Result<UserDataResponse, FlowError> {
        let data = timeout(self.config.call_timeout, self.backend.fetch_user_data())
            .await
            .map_err(|_| FlowError::Timeout("user data fetch", FlowStage::Fetch))?
            .map_err(FlowError::Fetch)?;
        self.user_data = Some(data.clone());
        Ok(data)
    }

    async fn issue(&mut self) -> Result<(), FlowError> {
        // Always refetch: the jwt in the payload is short-lived and the
        // subject must be derived from current data.
        let data = self.fetch_user_data().await?;

        let request = IssueCredentialRequest {
            auth_token: data.jwt,
            credential_id: self.config.credential_id.clone(),
            credential_subject: normalize_credential_subject(&data.response),
            issuer_did: self.config.issuer_did.clone(),
        };

        timeout(
            self.config.call_timeout,
            self.issuer.issue_credential(request),
        )
        .await
        .map_err(|_| FlowError::Timeout("credential issuance", FlowStage::Issue))?
        .map_err(FlowError::Issue)?;
        Ok(())
    }
}
