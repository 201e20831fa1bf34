use std::sync::{Arc, RwLock};

/// Process-wide holder of the session access token.
///
/// Cloning is cheap and every clone observes the same token. Reads and
/// writes are synchronous so non-async code (the outgoing-request wrapper)
/// can consult it without an executor. Exactly one code path writes it: the
/// verify-call success handler.
#[derive(Clone, Default)]
pub struct SessionStore {
    access_token: Arc<RwLock<Option<String>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn access_token(&self) -> Option<String> {
        self.access_token
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn set_access_token(&self, token: String) {
        *self
            .access_token
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(token);
    }

    /// Logout: forget the session token.
    pub fn clear(&self) {
        *self
            .access_token
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = None;
    }
}
