use officehub_client_core::Route;
use officehub_shared::{
    id::DbId,
    resources::{Client as OfficeClient, ClientDraft},
    uac::validate_email,
};
use tracing::info;

use super::{
    data_state::{AwaitingType, DataState},
    DisplayablePage,
};
use crate::{
    app::wake_fn,
    displayable_page_common,
    ui_helpers::{display_opt, ui_confirm_button, ui_optional_text_edit, ui_table},
    DataShared,
};

#[derive(Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiClients {
    show_inactive: bool,
    #[serde(skip)]
    clients: DataState<Vec<OfficeClient>>,
    #[serde(skip)]
    draft: Option<ClientDraft>,
    #[serde(skip)]
    create: DataState<OfficeClient>,
    #[serde(skip)]
    delete: DataState<()>,
    #[serde(skip)]
    armed_delete: Option<DbId>,
}

fn draft_error(draft: &ClientDraft) -> Option<&'static str> {
    if draft.name.trim().is_empty() {
        return Some("A name is required");
    }
    if let Some(email) = draft.email.as_deref() {
        if validate_email(email).is_err() {
            return Some("Email address is not valid");
        }
    }
    None
}

impl UiClients {
    fn ui_draft(&mut self, ui: &mut egui::Ui, data_shared: &mut DataShared) {
        let Some(draft) = self.draft.as_mut() else {
            if ui.button("New Client").clicked() {
                self.draft = Some(Default::default());
            }
            return;
        };

        let mut should_send = false;
        let mut should_cancel = false;
        egui::Frame::group(ui.style()).show(ui, |ui| {
            egui::Grid::new("client_form")
                .num_columns(2)
                .spacing([12.0, 6.0])
                .show(ui, |ui| {
                    ui.label("Name");
                    ui.text_edit_singleline(&mut draft.name);
                    ui.end_row();
                    ui.label("Email");
                    ui_optional_text_edit(ui, &mut draft.email, "Optional");
                    ui.end_row();
                    ui.label("Phone");
                    ui_optional_text_edit(ui, &mut draft.phone, "Optional");
                    ui.end_row();
                    ui.label("Tax ID");
                    ui_optional_text_edit(ui, &mut draft.tax_id, "Optional");
                    ui.end_row();
                });
            let error = draft_error(draft);
            if let Some(error) = error {
                ui.weak(error);
            }
            ui.horizontal(|ui| {
                should_send = ui
                    .add_enabled(
                        error.is_none() && !self.create.is_awaiting(),
                        egui::Button::new("Create"),
                    )
                    .clicked();
                should_cancel = ui.button("Cancel").clicked();
            });
        });

        if should_cancel {
            self.draft = None;
        } else if should_send {
            self.create = data_shared
                .client
                .create_client(draft, wake_fn(ui.ctx().clone()))
                .into();
        }
    }

    fn check_outcomes(&mut self, data_shared: &mut DataShared) {
        match self.create.take_outcome() {
            Some(Ok(created)) => {
                info!(id = %created.id, "client created");
                data_shared
                    .notifications
                    .push_success(format!("Client {} created", created.name));
                self.draft = None;
                self.clients = DataState::None;
            }
            Some(Err(e)) => data_shared.notify_error(e),
            None => {}
        }
        match self.delete.take_outcome() {
            Some(Ok(())) => {
                data_shared.notifications.push_success("Client deleted");
                self.clients = DataState::None;
            }
            Some(Err(e)) => data_shared.notify_error(e),
            None => {}
        }
    }
}

impl DisplayablePage for UiClients {
    displayable_page_common!(Route::Clients);

    fn reset_to_default(&mut self, _: super::private::Token) {
        *self = Self {
            show_inactive: self.show_inactive,
            ..Default::default()
        };
    }

    fn show(&mut self, ui: &mut egui::Ui, data_shared: &mut DataShared) {
        self.check_outcomes(data_shared);
        ui.horizontal(|ui| {
            ui.checkbox(&mut self.show_inactive, "Show inactive");
            if ui.button("Refresh").clicked() {
                self.clients = DataState::None;
            }
        });
        self.ui_draft(ui, data_shared);
        ui.add_space(8.0);

        let client = data_shared.client.clone();
        let ctx = ui.ctx().clone();
        self.clients.egui_get(ui, None, || {
            AwaitingType(client.list_clients(wake_fn(ctx)))
        });
        let Some(clients) = self.clients.present() else {
            return;
        };
        let shown: Vec<&OfficeClient> = clients
            .iter()
            .filter(|c| self.show_inactive || c.is_active)
            .collect();

        let is_busy = self.delete.is_awaiting();
        let mut to_delete = None;
        ui_table(
            ui,
            "clients_table",
            &["Name", "Email", "Phone", "Type", "Tax ID", "Actions"],
            &shown,
            |row, client| {
                row.col(|ui| {
                    if client.is_active {
                        ui.label(&client.name);
                    } else {
                        ui.weak(&client.name);
                    }
                });
                row.col(|ui| {
                    ui.label(display_opt(client.email.as_deref()));
                });
                row.col(|ui| {
                    ui.label(display_opt(client.phone.as_deref()));
                });
                row.col(|ui| {
                    ui.label(display_opt(client.client_type.as_deref()));
                });
                row.col(|ui| {
                    ui.label(display_opt(client.tax_id.as_deref()));
                });
                row.col(|ui| {
                    ui.add_enabled_ui(!is_busy, |ui| {
                        if ui_confirm_button(ui, "Delete", client.id, &mut self.armed_delete) {
                            to_delete = Some(client.id);
                        }
                    });
                });
            },
        );

        if let Some(id) = to_delete {
            self.delete = data_shared
                .client
                .delete_client(id, wake_fn(ui.ctx().clone()))
                .into();
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::blank_name("  ", None, Some("A name is required"))]
    #[case::bad_email("Acme", Some("acme"), Some("Email address is not valid"))]
    #[case::no_email("Acme", None, None)]
    #[case::good_email("Acme", Some("books@acme.com"), None)]
    fn draft_validation(
        #[case] name: &str,
        #[case] email: Option<&str>,
        #[case] expected: Option<&str>,
    ) {
        // Arrange
        let draft = ClientDraft {
            name: name.into(),
            email: email.map(Into::into),
            ..Default::default()
        };

        // Act
        let actual = draft_error(&draft);

        // Assert
        assert_eq!(actual, expected);
    }
}
