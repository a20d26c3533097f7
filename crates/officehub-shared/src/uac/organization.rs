use chrono::{DateTime, Utc};

use crate::id::DbId;

/// The tenant the user belongs to
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
pub struct Organization {
    pub id: DbId,
    pub name: String,
    pub subscription_status: SubscriptionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trial_ends_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,
}

#[derive(
    Debug,
    serde::Serialize,
    serde::Deserialize,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::EnumIter,
    strum::Display,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubscriptionStatus {
    Active,
    Trial,
    Suspended,
    Cancelled,
}

impl SubscriptionStatus {
    #[must_use]
    pub fn is_trial(&self) -> bool {
        matches!(self, Self::Trial)
    }

    #[must_use]
    pub fn is_active_or_trial(&self) -> bool {
        match self {
            SubscriptionStatus::Active | SubscriptionStatus::Trial => true,
            SubscriptionStatus::Suspended | SubscriptionStatus::Cancelled => false,
        }
    }
}

impl Organization {
    /// Whole days left in the trial, None if not on a trial or no end date
    /// was provided
    pub fn trial_days_left(&self, now: DateTime<Utc>) -> Option<i64> {
        if !self.subscription_status.is_trial() {
            return None;
        }
        self.trial_ends_at
            .map(|ends| (ends - now).num_days().max(0))
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeDelta;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::active(SubscriptionStatus::Active, false, true)]
    #[case::trial(SubscriptionStatus::Trial, true, true)]
    #[case::suspended(SubscriptionStatus::Suspended, false, false)]
    #[case::cancelled(SubscriptionStatus::Cancelled, false, false)]
    fn status_predicates(
        #[case] status: SubscriptionStatus,
        #[case] is_trial: bool,
        #[case] is_active_or_trial: bool,
    ) {
        assert_eq!(status.is_trial(), is_trial);
        assert_eq!(status.is_active_or_trial(), is_active_or_trial);
    }

    #[test]
    fn trial_days_left_only_for_trials() {
        // Arrange
        let now = Utc::now();
        let mut org = Organization {
            id: 1.into(),
            name: "Acme".into(),
            subscription_status: SubscriptionStatus::Trial,
            trial_ends_at: Some(now + TimeDelta::days(3) + TimeDelta::hours(1)),
            email: None,
            phone: None,
            address: None,
            tax_id: None,
        };

        // Act / Assert
        assert_eq!(org.trial_days_left(now), Some(3));
        org.subscription_status = SubscriptionStatus::Active;
        assert_eq!(org.trial_days_left(now), None);
    }
}
