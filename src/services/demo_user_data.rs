use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::domain::{ProviderError, UserDataProvider};

/// Hardcoded demo data, keyed by the session subject.
///
/// Stands in for a real backend call; swap the provider in `AppState` to
/// change where the credential-subject candidate comes from. The shape must
/// match the credentialSubject schema of the configured issuance program:
/// `id` (URI, required) and `total_balance` (string, optional).
#[derive(Default)]
pub struct DemoUserDataProvider;

#[async_trait]
impl UserDataProvider for DemoUserDataProvider {
    async fn user_data(&self, user_id: &str) -> Result<Map<String, Value>, ProviderError> {
        let mut data = Map::new();
        data.insert("id".into(), Value::String(format!("did:ethr:{user_id}")));
        data.insert("total_balance".into(), Value::String("21".into()));
        Ok(data)
    }
}
