use chrono::{DateTime, Utc};
use secrecy::SecretString;

use crate::id::DbId;

/// Vault entry metadata, the secret value is only sent by the reveal endpoint
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
pub struct Credential {
    pub id: DbId,
    pub name: String,
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Value already decrypted by the server
#[derive(Debug, serde::Deserialize, Clone)]
pub struct RevealedSecret {
    pub password: SecretString,
}
