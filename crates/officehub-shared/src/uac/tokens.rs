use secrecy::{ExposeSecret as _, SecretString};
use std::fmt::Debug;

/// Access and refresh credentials issued by the server on login
#[derive(serde::Deserialize, Clone)]
pub struct TokenPair {
    pub access: SecretString,
    pub refresh: SecretString,
}

impl TokenPair {
    pub fn new<A: Into<String>, R: Into<String>>(access: A, refresh: R) -> Self {
        Self {
            access: SecretString::from(access.into()),
            refresh: SecretString::from(refresh.into()),
        }
    }
}

impl Debug for TokenPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenPair")
            .field("has_access", &!self.access.expose_secret().is_empty())
            .field("has_refresh", &!self.refresh.expose_secret().is_empty())
            .finish()
    }
}
