use officehub_client_core::Route;
use officehub_shared::{
    id::DbId, req_args::OrganizationStatusReqArgs, resources::OrganizationRecord,
    uac::SubscriptionStatus,
};
use strum::IntoEnumIterator as _;
use tracing::info;

use super::display_date;
use crate::{
    app::wake_fn,
    displayable_page_common,
    pages::{
        data_state::{AwaitingType, DataState},
        DisplayablePage,
    },
    ui_helpers::ui_table,
    DataShared,
};

#[derive(Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiAdminOrganizations {
    status_filter: Option<SubscriptionStatus>,
    #[serde(skip)]
    organizations: DataState<Vec<OrganizationRecord>>,
    /// Status picked for an organization but not yet applied
    #[serde(skip)]
    pending: Option<(DbId, SubscriptionStatus)>,
    #[serde(skip)]
    save: DataState<OrganizationRecord>,
}

impl UiAdminOrganizations {
    fn check_outcome(&mut self, data_shared: &mut DataShared) {
        match self.save.take_outcome() {
            Some(Ok(saved)) => {
                info!(id = %saved.id, status = %saved.subscription_status, "organization status changed");
                data_shared.notifications.push_success(format!(
                    "{} is now {}",
                    saved.name, saved.subscription_status
                ));
                self.organizations = DataState::None;
            }
            Some(Err(e)) => data_shared.notify_error(e),
            None => {}
        }
    }
}

impl DisplayablePage for UiAdminOrganizations {
    displayable_page_common!(Route::AdminOrganizations);

    fn reset_to_default(&mut self, _: super::private::Token) {
        *self = Self {
            status_filter: self.status_filter,
            ..Default::default()
        };
    }

    fn show(&mut self, ui: &mut egui::Ui, data_shared: &mut DataShared) {
        self.check_outcome(data_shared);
        ui.horizontal(|ui| {
            ui.label("Status");
            egui::ComboBox::from_id_salt("organization_status_filter")
                .selected_text(self.status_filter.map_or("All".to_string(), |x| x.to_string()))
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut self.status_filter, None, "All");
                    for status in SubscriptionStatus::iter() {
                        ui.selectable_value(
                            &mut self.status_filter,
                            Some(status),
                            status.to_string(),
                        );
                    }
                });
            if ui.button("Refresh").clicked() {
                self.organizations = DataState::None;
            }
        });

        let client = data_shared.client.clone();
        let ctx = ui.ctx().clone();
        self.organizations.egui_get(ui, None, || {
            AwaitingType(client.admin_list_organizations(wake_fn(ctx)))
        });
        let Some(organizations) = self.organizations.present() else {
            return;
        };
        let shown: Vec<&OrganizationRecord> = organizations
            .iter()
            .filter(|org| {
                self.status_filter
                    .map_or(true, |status| status == org.subscription_status)
            })
            .collect();

        let is_busy = self.save.is_awaiting();
        let pending = &mut self.pending;
        let mut to_apply = None;
        ui_table(
            ui,
            "admin_organizations_table",
            &["Organization", "Users", "Created", "Trial ends", "Status"],
            &shown,
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
                    let mut status = match pending {
                        Some((id, status)) if *id == org.id => *status,
                        _ => org.subscription_status,
                    };
                    ui.add_enabled_ui(!is_busy, |ui| {
                        egui::ComboBox::from_id_salt(("organization_status", org.id))
                            .selected_text(status.to_string())
                            .show_ui(ui, |ui| {
                                for option in SubscriptionStatus::iter() {
                                    ui.selectable_value(&mut status, option, option.to_string());
                                }
                            });
                    });
                    if status != org.subscription_status {
                        *pending = Some((org.id, status));
                        if ui.button("Apply").clicked() {
                            to_apply = Some((org.id, status));
                        }
                        if ui.button("Cancel").clicked() {
                            *pending = None;
                        }
                    } else if pending.is_some_and(|(id, _)| id == org.id) {
                        *pending = None;
                    }
                });
            },
        );

        if let Some((id, subscription_status)) = to_apply {
            self.pending = None;
            self.save = data_shared
                .client
                .admin_set_organization_status(
                    id,
                    &OrganizationStatusReqArgs {
                        subscription_status,
                    },
                    wake_fn(ui.ctx().clone()),
                )
                .into();
        }
    }
}
