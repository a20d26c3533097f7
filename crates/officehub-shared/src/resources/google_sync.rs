use chrono::{DateTime, Utc};

#[derive(Debug, Default, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SyncSettings {
    pub is_connected: bool,
    pub connected_email: Option<String>,
    pub calendar_sync_enabled: bool,
    pub gmail_sync_enabled: bool,
    pub drive_sync_enabled: bool,
    pub contacts_sync_enabled: bool,
    pub last_synced_at: Option<DateTime<Utc>>,
}

/// `Some` are the toggles being changed
#[derive(Debug, Default, serde::Serialize, Clone, PartialEq, Eq)]
pub struct SyncSettingsUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calendar_sync_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gmail_sync_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drive_sync_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contacts_sync_enabled: Option<bool>,
}

#[derive(Debug, serde::Deserialize, Clone, PartialEq, Eq)]
pub struct GoogleConnectUrl {
    pub authorization_url: String,
}

impl SyncSettingsUpdate {
    /// Returns None if the toggles match
    pub fn from_diff(from: &SyncSettings, to: &SyncSettings) -> Option<Self> {
        let changed = |a: bool, b: bool| (a != b).then_some(b);
        let result = Self {
            calendar_sync_enabled: changed(from.calendar_sync_enabled, to.calendar_sync_enabled),
            gmail_sync_enabled: changed(from.gmail_sync_enabled, to.gmail_sync_enabled),
            drive_sync_enabled: changed(from.drive_sync_enabled, to.drive_sync_enabled),
            contacts_sync_enabled: changed(from.contacts_sync_enabled, to.contacts_sync_enabled),
        };
        if result == Self::default() {
            None
        } else {
            Some(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_changed_toggles_are_sent() {
        // Arrange
        let from = SyncSettings::default();
        let to = SyncSettings {
            drive_sync_enabled: true,
            ..Default::default()
        };

        // Act
        let actual = SyncSettingsUpdate::from_diff(&from, &to).unwrap();

        // Assert
        assert_eq!(
            serde_json::to_string(&actual).unwrap(),
            r#"{"drive_sync_enabled":true}"#
        );
        assert!(SyncSettingsUpdate::from_diff(&to, &to).is_none());
    }
}
