use officehub_client_core::Route;
use officehub_shared::{
    id::DbId,
    resources::{Credential, RevealedSecret},
};
use secrecy::{ExposeSecret as _, SecretString};
use tracing::info;

use super::{
    data_state::{AwaitingType, DataState},
    DisplayablePage,
};
use crate::{
    app::wake_fn,
    displayable_page_common,
    ui_helpers::{display_opt, ui_confirm_button, ui_table},
    DataShared,
};

const HIDDEN: &str = "••••••••";

#[derive(Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiCredentials {
    #[serde(skip)]
    credentials: DataState<Vec<Credential>>,
    /// Credential whose secret was asked for
    #[serde(skip)]
    reveal_for: Option<DbId>,
    #[serde(skip)]
    reveal: DataState<RevealedSecret>,
    /// Never persisted, dropped when leaving the page
    #[serde(skip)]
    revealed: Option<(DbId, SecretString)>,
    #[serde(skip)]
    delete: DataState<()>,
    #[serde(skip)]
    armed_delete: Option<DbId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VaultAction {
    Reveal(DbId),
    Hide,
    Copy,
    Delete(DbId),
}

impl UiCredentials {
    fn check_outcomes(&mut self, data_shared: &mut DataShared) {
        match self.reveal.take_outcome() {
            Some(Ok(secret)) => {
                if let Some(id) = self.reveal_for.take() {
                    info!(%id, "credential revealed");
                    self.revealed = Some((id, secret.password));
                }
            }
            Some(Err(e)) => {
                self.reveal_for = None;
                data_shared.notify_error(e);
            }
            None => {}
        }
        match self.delete.take_outcome() {
            Some(Ok(())) => {
                data_shared.notifications.push_success("Credential deleted");
                self.credentials = DataState::None;
            }
            Some(Err(e)) => data_shared.notify_error(e),
            None => {}
        }
    }

    fn perform(&mut self, action: VaultAction, ctx: &egui::Context, data_shared: &mut DataShared) {
        match action {
            VaultAction::Reveal(id) => {
                self.revealed = None;
                self.reveal_for = Some(id);
                self.reveal = data_shared
                    .client
                    .reveal_credential(id, wake_fn(ctx.clone()))
                    .into();
            }
            VaultAction::Hide => self.revealed = None,
            VaultAction::Copy => {
                if let Some((_, secret)) = self.revealed.as_ref() {
                    ctx.copy_text(secret.expose_secret().to_string());
                    data_shared.notifications.push_success("Copied to clipboard");
                }
            }
            VaultAction::Delete(id) => {
                if self.revealed.as_ref().is_some_and(|(x, _)| *x == id) {
                    self.revealed = None;
                }
                self.delete = data_shared
                    .client
                    .delete_credential(id, wake_fn(ctx.clone()))
                    .into();
            }
        }
    }
}

impl DisplayablePage for UiCredentials {
    displayable_page_common!(Route::Credentials, reset_all);

    fn show(&mut self, ui: &mut egui::Ui, data_shared: &mut DataShared) {
        self.check_outcomes(data_shared);
        if ui.button("Refresh").clicked() {
            self.credentials = DataState::None;
        }

        let client = data_shared.client.clone();
        let ctx = ui.ctx().clone();
        self.credentials.egui_get(ui, None, || {
            AwaitingType(client.list_credentials(wake_fn(ctx)))
        });
        let Some(credentials) = self.credentials.present() else {
            return;
        };

        let revealed = self.revealed.as_ref();
        let reveal_for = self.reveal_for;
        let armed_delete = &mut self.armed_delete;
        let mut action = None;
        ui_table(
            ui,
            "credentials_table",
            &["Name", "Client", "Username", "URL", "Password", "Actions"],
            credentials,
            |row, credential| {
                let secret = revealed
                    .filter(|(id, _)| *id == credential.id)
                    .map(|(_, secret)| secret);
                row.col(|ui| {
                    ui.label(&credential.name);
                });
                row.col(|ui| {
                    ui.label(display_opt(credential.client_name.as_deref()));
                });
                row.col(|ui| {
                    ui.label(display_opt(credential.username.as_deref()));
                });
                row.col(|ui| match credential.url.as_deref() {
                    Some(url) if !url.is_empty() => {
                        ui.hyperlink(url);
                    }
                    _ => {
                        ui.label("-");
                    }
                });
                row.col(|ui| match secret {
                    Some(secret) => {
                        ui.monospace(secret.expose_secret());
                    }
                    None if reveal_for == Some(credential.id) => {
                        ui.spinner();
                    }
                    None => {
                        ui.monospace(HIDDEN);
                    }
                });
                row.col(|ui| {
                    if secret.is_some() {
                        if ui.button("Copy").clicked() {
                            action = Some(VaultAction::Copy);
                        }
                        if ui.button("Hide").clicked() {
                            action = Some(VaultAction::Hide);
                        }
                    } else if ui
                        .add_enabled(reveal_for.is_none(), egui::Button::new("Reveal"))
                        .clicked()
                    {
                        action = Some(VaultAction::Reveal(credential.id));
                    }
                    if ui_confirm_button(ui, "Delete", credential.id, armed_delete) {
                        action = Some(VaultAction::Delete(credential.id));
                    }
                });
            },
        );

        if let Some(action) = action {
            let ctx = ui.ctx().clone();
            self.perform(action, &ctx, data_shared);
        }
    }
}
