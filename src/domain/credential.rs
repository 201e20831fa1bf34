use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// A credential-subject value after normalization: only strings and numbers
/// survive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SubjectValue {
    Text(String),
    Number(Number),
}

pub type CredentialSubject = BTreeMap<String, SubjectValue>;

/// Everything the external SDK needs to issue one credential.
#[derive(Debug, Clone, Serialize)]
pub struct IssueCredentialRequest {
    pub auth_token: String,
    pub credential_id: String,
    pub credential_subject: CredentialSubject,
    pub issuer_did: String,
}

/// Normalize raw candidate data into the subject mapping sent to the
/// issuance call.
///
/// Rules: null entries are dropped; strings and numbers pass through;
/// non-array objects are replaced with their JSON serialization. Arrays and
/// booleans fall through every branch and are silently discarded, matching
/// the upstream behavior this service has to stay wire-compatible with.
pub fn normalize_credential_subject(response: &Map<String, Value>) -> CredentialSubject {
    let mut subject = CredentialSubject::new();
    for (key, value) in response {
        match value {
            Value::String(s) => {
                subject.insert(key.clone(), SubjectValue::Text(s.clone()));
            }
            Value::Number(n) => {
                subject.insert(key.clone(), SubjectValue::Number(n.clone()));
            }
            Value::Object(obj) => {
                let serialized = serde_json::to_string(&Value::Object(obj.clone()))
                    .unwrap_or_default();
                subject.insert(key.clone(), SubjectValue::Text(serialized));
            }
            Value::Null | Value::Bool(_) | Value::Array(_) => {}
        }
    }
    subject
}
