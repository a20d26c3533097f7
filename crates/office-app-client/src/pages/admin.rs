//! Pages of the platform administration area
//!
//! Only reachable by platform administrators, see the gates in
//! [`officehub_client_core::routing`]

mod organizations;
mod quota;
mod settings;

use chrono::{DateTime, Utc};
use officehub_client_core::Route;
use officehub_shared::resources::{OrganizationRecord, PlatformStats, PlatformUser, SubscriptionRecord};

use super::{
    data_state::{AwaitingType, DataState},
    private, DisplayablePage,
};
use crate::{
    app::wake_fn,
    displayable_page_common,
    ui_helpers::{display_opt, readonly_checkbox_no_text, ui_table},
    DataShared,
};

pub use organizations::UiAdminOrganizations;
pub use quota::UiAdminQuota;
pub use settings::UiAdminSettings;

fn display_date(value: Option<DateTime<Utc>>) -> String {
    value
        .map(|x| x.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_string())
}

#[derive(Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiAdminDashboard {
    #[serde(skip)]
    stats: DataState<PlatformStats>,
}

impl DisplayablePage for UiAdminDashboard {
    displayable_page_common!(Route::AdminDashboard, reset_all);

    fn show(&mut self, ui: &mut egui::Ui, data_shared: &mut DataShared) {
        if ui.button("Refresh").clicked() {
            self.stats = DataState::None;
        }
        let client = data_shared.client.clone();
        let ctx = ui.ctx().clone();
        self.stats.egui_get(ui, None, || {
            AwaitingType(client.admin_dashboard_stats(wake_fn(ctx)))
        });
        let Some(stats) = self.stats.present() else {
            return;
        };
        egui::Grid::new("platform_stats")
            .num_columns(2)
            .striped(true)
            .spacing([32.0, 6.0])
            .show(ui, |ui| {
                for (label, value) in [
                    ("Organizations", stats.total_organizations),
                    ("Active", stats.active_organizations),
                    ("On trial", stats.trial_organizations),
                    ("Suspended", stats.suspended_organizations),
                    ("Users", stats.total_users),
                ] {
                    ui.label(label);
                    ui.label(value.to_string());
                    ui.end_row();
                }
            });
    }
}

#[derive(Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiAdminTrials {
    #[serde(skip)]
    trials: DataState<Vec<OrganizationRecord>>,
}

impl DisplayablePage for UiAdminTrials {
    displayable_page_common!(Route::AdminTrials, reset_all);

    fn show(&mut self, ui: &mut egui::Ui, data_shared: &mut DataShared) {
        let client = data_shared.client.clone();
        let ctx = ui.ctx().clone();
        self.trials.egui_get(ui, None, || {
            AwaitingType(client.admin_list_trials(wake_fn(ctx)))
        });
        let Some(trials) = self.trials.present() else {
            return;
        };
        let now = Utc::now();
        ui_table(
            ui,
            "admin_trials_table",
            &["Organization", "Users", "Started", "Ends", "Days left"],
            trials,
            |row, org| {
                row.col(|ui| {
                    ui.label(&org.name);
                });
                row.col(|ui| {
                    ui.label(org.user_count.to_string());
                });
                row.col(|ui| {
                    ui.label(display_date(org.created_at));
                });
                row.col(|ui| {
                    ui.label(display_date(org.trial_ends_at));
                });
                row.col(|ui| {
                    let days = org
                        .trial_ends_at
                        .map(|ends| (ends - now).num_days().max(0).to_string());
                    ui.label(display_opt(days.as_deref()));
                });
            },
        );
    }
}

#[derive(Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiAdminUsers {
    filter: String,
    #[serde(skip)]
    users: DataState<Vec<PlatformUser>>,
}

fn user_matches(user: &PlatformUser, filter: &str) -> bool {
    let filter = filter.trim().to_lowercase();
    if filter.is_empty() {
        return true;
    }
    [
        user.email.as_str(),
        user.first_name.as_str(),
        user.last_name.as_str(),
        user.organization_name.as_deref().unwrap_or_default(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(&filter))
}

impl DisplayablePage for UiAdminUsers {
    displayable_page_common!(Route::AdminUsers);

    fn reset_to_default(&mut self, _: private::Token) {
        self.users = DataState::None;
    }

    fn show(&mut self, ui: &mut egui::Ui, data_shared: &mut DataShared) {
        ui.horizontal(|ui| {
            ui.label("Search");
            ui.text_edit_singleline(&mut self.filter);
        });
        let client = data_shared.client.clone();
        let ctx = ui.ctx().clone();
        self.users.egui_get(ui, None, || {
            AwaitingType(client.admin_list_users(wake_fn(ctx)))
        });
        let Some(users) = self.users.present() else {
            return;
        };
        let shown: Vec<&PlatformUser> = users
            .iter()
            .filter(|user| user_matches(user, &self.filter))
            .collect();
        ui_table(
            ui,
            "admin_users_table",
            &["Name", "Email", "Organization", "Role", "Platform Admin", "Active"],
            &shown,
            |row, user| {
                row.col(|ui| {
                    ui.label(format!("{} {}", user.first_name, user.last_name));
                });
                row.col(|ui| {
                    ui.label(&user.email);
                });
                row.col(|ui| {
                    ui.label(display_opt(user.organization_name.as_deref()));
                });
                row.col(|ui| {
                    let role = user.role.map(|x| x.to_string());
                    ui.label(display_opt(role.as_deref()));
                });
                row.col(|ui| readonly_checkbox_no_text(ui, user.is_platform_admin));
                row.col(|ui| readonly_checkbox_no_text(ui, user.is_active));
            },
        );
    }
}

#[derive(Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiAdminSubscriptions {
    #[serde(skip)]
    subscriptions: DataState<Vec<SubscriptionRecord>>,
}

impl DisplayablePage for UiAdminSubscriptions {
    displayable_page_common!(Route::AdminSubscriptions, reset_all);

    fn show(&mut self, ui: &mut egui::Ui, data_shared: &mut DataShared) {
        let client = data_shared.client.clone();
        let ctx = ui.ctx().clone();
        self.subscriptions.egui_get(ui, None, || {
            AwaitingType(client.admin_list_subscriptions(wake_fn(ctx)))
        });
        let Some(subscriptions) = self.subscriptions.present() else {
            return;
        };
        ui_table(
            ui,
            "admin_subscriptions_table",
            &["Organization", "Plan", "Status", "Renews"],
            subscriptions,
            |row, subscription| {
                row.col(|ui| {
                    ui.label(&subscription.organization_name);
                });
                row.col(|ui| {
                    ui.label(&subscription.plan);
                });
                row.col(|ui| {
                    ui.label(subscription.status.to_string());
                });
                row.col(|ui| {
                    ui.label(display_date(subscription.renews_at));
                });
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::empty("", true)]
    #[case::email("ACME.COM", true)]
    #[case::organization("books", true)]
    #[case::last_name("silva", true)]
    #[case::no_match("zebra", false)]
    fn user_search(#[case] filter: &str, #[case] expected: bool) {
        // Arrange
        let user: PlatformUser = serde_json::from_str(
            r#"{"id":3,"email":"ana@acme.com","first_name":"Ana","last_name":"Silva",
                "organization_name":"Acme Books"}"#,
        )
        .unwrap();

        // Act / Assert
        assert_eq!(user_matches(&user, filter), expected);
    }
}
