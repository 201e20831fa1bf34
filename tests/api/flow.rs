//! End-to-end drive of the issuance flow against a real server:
//! AIR login (mocked) -> airkit verify (stubbed route) -> user-data fetch
//! (real route) -> credential issuance (mocked SDK).

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::json;

use issuance_service::client::BackendClient;
use issuance_service::domain::{
    AirService, AirUserInfo, AuthMethod, CredentialIssuer, IssueCredentialRequest, ProviderError,
    SubjectValue, WalletConnector,
};
use issuance_service::flow::{FlowConfig, FlowStep, IssuanceFlow};
use issuance_service::session::SessionStore;

use crate::helpers::TestApp;

const WALLET_ADDRESS: &str = "0xabcde12345678901234567890123456789054321";

struct StubAir {
    logged_in: AtomicBool,
}

#[async_trait]
impl AirService for StubAir {
    fn is_logged_in(&self) -> bool {
        self.logged_in.load(Ordering::SeqCst)
    }
    async fn login(&self) -> Result<(), ProviderError> {
        self.logged_in.store(true, Ordering::SeqCst);
        Ok(())
    }
    async fn get_access_token(&self) -> Result<String, ProviderError> {
        Ok("airkit-token".into())
    }
    async fn get_user_info(&self) -> Result<AirUserInfo, ProviderError> {
        Ok(AirUserInfo {
            email: Some("johndoe@mail.com".into()),
        })
    }
}

struct StubWallet;

#[async_trait]
impl WalletConnector for StubWallet {
    fn is_connected(&self) -> bool {
        true
    }
    fn address(&self) -> Option<String> {
        Some(WALLET_ADDRESS.into())
    }
    async fn connect(&self) -> Result<(), ProviderError> {
        Ok(())
    }
}

#[derive(Default)]
struct RecordingIssuer {
    calls: AtomicUsize,
    last_request: Mutex<Option<IssueCredentialRequest>>,
}

#[async_trait]
impl CredentialIssuer for RecordingIssuer {
    async fn issue_credential(&self, request: IssueCredentialRequest) -> Result<(), ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(request);
        Ok(())
    }
}

#[tokio::test]
async fn full_flow_issues_a_credential_through_the_real_backend() {
    // Stand up the real routes plus a stub for the external verify endpoint.
    // The stub mints a real session token so the user-data fetch passes.
    let airkit_stub = Router::new().route(
        "/api/auth/airkit",
        post(|| async {
            let token = TestApp::mint_session_token(WALLET_ADDRESS).await;
            Json(json!({
                "accessToken": token,
                "walletAddress": WALLET_ADDRESS,
            }))
        }),
    );
    let app = TestApp::with_extra_routes(airkit_stub).await;

    let session = SessionStore::new();
    let backend = Arc::new(BackendClient::new(app.address.clone(), session.clone()));
    let issuer = Arc::new(RecordingIssuer::default());

    let mut flow = IssuanceFlow::new(
        FlowConfig {
            auth_method: AuthMethod::Airkit,
            credential_id: "program-1".into(),
            issuer_did: "did:key:issuer".into(),
            call_timeout: Duration::from_secs(5),
        },
        Arc::new(StubAir {
            logged_in: AtomicBool::new(false),
        }),
        Arc::new(StubWallet),
        backend,
        issuer.clone(),
        session.clone(),
    );

    let step = flow.connect_or_login().await;
    assert_eq!(step, FlowStep::Preview);
    assert!(session.access_token().is_some());

    let step = flow.confirm().await;
    assert_eq!(step, FlowStep::Success);
    assert_eq!(issuer.calls.load(Ordering::SeqCst), 1);

    let request = issuer.last_request.lock().unwrap().clone().unwrap();
    assert_eq!(request.credential_id, "program-1");
    assert_eq!(request.issuer_did, "did:key:issuer");
    assert_eq!(
        request.credential_subject["id"],
        SubjectValue::Text(format!("did:ethr:{WALLET_ADDRESS}"))
    );
    assert_eq!(
        request.credential_subject["total_balance"],
        SubjectValue::Text("21".into())
    );
    // The partner JWT rode along from the user-data response.
    assert_eq!(request.auth_token.split('.').count(), 3);
}
