use serde_json::{Map, Value};

use super::format_address;

/// The credential preview card: title, shortened source address, and the
/// key/value data points that will end up in the credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialCardView {
    pub title: String,
    pub source: String,
    pub entries: Vec<(String, String)>,
}

pub fn credential_card(title: &str, source: &str, data: &Map<String, Value>) -> CredentialCardView {
    let entries = data
        .iter()
        .filter(|(_, value)| !value.is_null())
        .map(|(key, value)| {
            let rendered = match value {
                Value::String(s) => s.clone(),
                // Objects (and anything else non-scalar) render as JSON.
                other => serde_json::to_string(other).unwrap_or_default(),
            };
            (key.clone(), rendered)
        })
        .collect();

    CredentialCardView {
        title: title.to_owned(),
        source: format_address(source),
        entries,
    }
}
