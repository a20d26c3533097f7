use chrono::{DateTime, Utc};

use crate::{
    id::DbId,
    uac::{Role, SubscriptionStatus},
};

#[derive(Debug, Default, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct PlatformStats {
    pub total_organizations: u64,
    pub active_organizations: u64,
    pub trial_organizations: u64,
    pub suspended_organizations: u64,
    pub total_users: u64,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
pub struct OrganizationRecord {
    pub id: DbId,
    pub name: String,
    pub subscription_status: SubscriptionStatus,
    #[serde(default)]
    pub user_count: u64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub trial_ends_at: Option<DateTime<Utc>>,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
pub struct PlatformUser {
    pub id: DbId,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub organization_name: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub is_platform_admin: bool,
    #[serde(default)]
    pub is_active: bool,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
pub struct SubscriptionRecord {
    pub id: DbId,
    pub organization_name: String,
    pub plan: String,
    pub status: SubscriptionStatus,
    #[serde(default)]
    pub renews_at: Option<DateTime<Utc>>,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
pub struct QuotaUsage {
    pub organization_name: String,
    pub api_calls_used: u64,
    pub api_calls_limit: u64,
    #[serde(default)]
    pub storage_used_mb: u64,
    #[serde(default)]
    pub storage_limit_mb: u64,
}

#[derive(Debug, Default, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct PlatformSettings {
    pub trial_length_days: u32,
    pub default_user_limit: u32,
    pub maintenance_mode: bool,
}

impl QuotaUsage {
    /// Fraction of the API call quota used, `0.0` when there is no limit
    pub fn api_usage_ratio(&self) -> f32 {
        if self.api_calls_limit == 0 {
            0.0
        } else {
            self.api_calls_used as f32 / self.api_calls_limit as f32
        }
    }
}
