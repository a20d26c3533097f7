use officehub_client_core::{Location, Route};
use officehub_shared::resources::{GoogleConnectUrl, SyncSettings, SyncSettingsUpdate};
use tracing::{info, warn};

use super::{
    data_state::{AwaitingType, DataState},
    DisplayablePage,
};
use crate::{app::wake_fn, displayable_page_common, DataShared};

#[derive(Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiGoogleSync {
    #[serde(skip)]
    settings: DataState<SyncSettings>,
    /// Toggles as edited, compared against `settings` to find changes
    #[serde(skip)]
    edited: Option<SyncSettings>,
    #[serde(skip)]
    save: DataState<SyncSettings>,
    #[serde(skip)]
    connect: DataState<GoogleConnectUrl>,
    #[serde(skip)]
    disconnect: DataState<()>,
}

/// What the OAuth callback told us through the query string
#[derive(Debug, PartialEq, Eq)]
enum CallbackOutcome {
    Connected,
    Failed(String),
}

impl CallbackOutcome {
    fn from_location(location: &Location) -> Option<Self> {
        if let Some(error) = location.query_value("error") {
            let message = if error.is_empty() {
                "Google account could not be connected".to_string()
            } else {
                format!("Google account could not be connected: {}", error.replace('_', " "))
            };
            return Some(Self::Failed(message));
        }
        match location.query_value("connected") {
            Some("true" | "1") => Some(Self::Connected),
            _ => None,
        }
    }
}

impl UiGoogleSync {
    fn check_callback(&mut self, data_shared: &mut DataShared) {
        let Some(outcome) = CallbackOutcome::from_location(data_shared.location()) else {
            return;
        };
        info!(?outcome, "google callback");
        match outcome {
            CallbackOutcome::Connected => data_shared
                .notifications
                .push_success("Google account connected"),
            CallbackOutcome::Failed(message) => data_shared.notify_error(message),
        }
        // Drops the query so it is only reported once
        data_shared.navigate(Route::GoogleSync);
        self.settings = DataState::None;
    }

    fn check_outcomes(&mut self, ctx: &egui::Context, data_shared: &mut DataShared) {
        match self.save.take_outcome() {
            Some(Ok(settings)) => {
                data_shared.notifications.push_success("Sync settings saved");
                self.edited = Some(settings.clone());
                self.settings = DataState::Present(settings);
            }
            Some(Err(e)) => data_shared.notify_error(e),
            None => {}
        }
        match self.connect.take_outcome() {
            Some(Ok(GoogleConnectUrl { authorization_url })) => {
                info!("opening google authorization page");
                ctx.open_url(egui::OpenUrl::same_tab(authorization_url));
            }
            Some(Err(e)) => data_shared.notify_error(e),
            None => {}
        }
        match self.disconnect.take_outcome() {
            Some(Ok(())) => {
                data_shared
                    .notifications
                    .push_success("Google account disconnected");
                self.settings = DataState::None;
                self.edited = None;
            }
            Some(Err(e)) => data_shared.notify_error(e),
            None => {}
        }
    }

    fn ui_connection(&mut self, ui: &mut egui::Ui, data_shared: &mut DataShared) {
        let Some(settings) = self.settings.present() else {
            return;
        };
        let is_busy = self.connect.is_awaiting() || self.disconnect.is_awaiting();
        ui.horizontal(|ui| {
            if settings.is_connected {
                ui.label(format!(
                    "Connected as {}",
                    settings.connected_email.as_deref().unwrap_or("unknown account")
                ));
                if ui
                    .add_enabled(!is_busy, egui::Button::new("Disconnect"))
                    .clicked()
                {
                    self.disconnect = data_shared
                        .client
                        .google_disconnect(wake_fn(ui.ctx().clone()))
                        .into();
                }
            } else {
                ui.label("No Google account connected");
                if ui
                    .add_enabled(!is_busy, egui::Button::new("Connect Google Account"))
                    .clicked()
                {
                    self.connect = data_shared
                        .client
                        .google_connect_url(wake_fn(ui.ctx().clone()))
                        .into();
                }
            }
            if is_busy {
                ui.spinner();
            }
        });
        if let Some(last) = settings.last_synced_at {
            ui.weak(format!("Last synced {}", last.format("%Y-%m-%d %H:%M UTC")));
        }
    }

    fn ui_toggles(&mut self, ui: &mut egui::Ui, data_shared: &mut DataShared) {
        let Some(settings) = self.settings.present() else {
            return;
        };
        if !settings.is_connected {
            return;
        }
        let edited = self.edited.get_or_insert_with(|| settings.clone());
        ui.add_space(8.0);
        ui.checkbox(&mut edited.calendar_sync_enabled, "Calendar");
        ui.checkbox(&mut edited.gmail_sync_enabled, "Gmail");
        ui.checkbox(&mut edited.drive_sync_enabled, "Drive");
        ui.checkbox(&mut edited.contacts_sync_enabled, "Contacts");

        let update = SyncSettingsUpdate::from_diff(settings, edited);
        ui.horizontal(|ui| {
            let can_save = update.is_some() && !self.save.is_awaiting();
            if ui
                .add_enabled(can_save, egui::Button::new("Save"))
                .clicked()
            {
                if let Some(update) = update.as_ref() {
                    self.save = data_shared
                        .client
                        .update_sync_settings(update, wake_fn(ui.ctx().clone()))
                        .into();
                }
            }
            if ui
                .add_enabled(update.is_some(), egui::Button::new("Undo"))
                .clicked()
            {
                self.edited = None;
            }
        });
    }
}

impl DisplayablePage for UiGoogleSync {
    displayable_page_common!(Route::GoogleSync, reset_all);

    fn show(&mut self, ui: &mut egui::Ui, data_shared: &mut DataShared) {
        let ctx = ui.ctx().clone();
        self.check_callback(data_shared);
        self.check_outcomes(&ctx, data_shared);

        let client = data_shared.client.clone();
        self.settings.egui_get(ui, None, || {
            AwaitingType(client.get_sync_settings(wake_fn(ctx)))
        });
        if self.settings.is_present() {
            self.ui_connection(ui, data_shared);
            self.ui_toggles(ui, data_shared);
        } else if self.edited.take().is_some() {
            warn!("discarded unsaved sync toggles");
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::nothing("/google-sync", None)]
    #[case::connected("/google-sync?connected=true", Some(CallbackOutcome::Connected))]
    #[case::not_connected("/google-sync?connected=false", None)]
    #[case::error(
        "/google-sync?error=access_denied",
        Some(CallbackOutcome::Failed(
            "Google account could not be connected: access denied".into()
        ))
    )]
    #[case::error_encoded(
        "/google-sync?error=access%20denied",
        Some(CallbackOutcome::Failed(
            "Google account could not be connected: access denied".into()
        ))
    )]
    #[case::error_wins(
        "/google-sync?connected=true&error=",
        Some(CallbackOutcome::Failed("Google account could not be connected".into()))
    )]
    fn callback_outcome(#[case] location: &str, #[case] expected: Option<CallbackOutcome>) {
        // Arrange
        let location = Location::parse(location);

        // Act
        let actual = CallbackOutcome::from_location(&location);

        // Assert
        assert_eq!(actual, expected);
    }
}
