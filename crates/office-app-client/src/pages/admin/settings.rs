use officehub_client_core::Route;
use officehub_shared::resources::PlatformSettings;
use tracing::info;

use crate::{
    app::wake_fn,
    displayable_page_common,
    pages::{
        data_state::{AwaitingType, DataState},
        DisplayablePage,
    },
    DataShared,
};

#[derive(Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiAdminSettings {
    #[serde(skip)]
    settings: DataState<PlatformSettings>,
    #[serde(skip)]
    edited: Option<PlatformSettings>,
    #[serde(skip)]
    save: DataState<PlatformSettings>,
}

impl DisplayablePage for UiAdminSettings {
    displayable_page_common!(Route::AdminSettings, reset_all);

    fn show(&mut self, ui: &mut egui::Ui, data_shared: &mut DataShared) {
        match self.save.take_outcome() {
            Some(Ok(saved)) => {
                info!(?saved, "platform settings saved");
                data_shared
                    .notifications
                    .push_success("Platform settings saved");
                self.edited = Some(saved.clone());
                self.settings = DataState::Present(saved);
            }
            Some(Err(e)) => data_shared.notify_error(e),
            None => {}
        }

        let client = data_shared.client.clone();
        let ctx = ui.ctx().clone();
        self.settings.egui_get(ui, None, || {
            AwaitingType(client.admin_settings(wake_fn(ctx)))
        });
        let Some(settings) = self.settings.present() else {
            return;
        };
        let edited = self.edited.get_or_insert_with(|| settings.clone());

        egui::Grid::new("platform_settings_form")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                ui.label("Trial length (days)");
                ui.add(egui::DragValue::new(&mut edited.trial_length_days).range(1..=365));
                ui.end_row();
                ui.label("Default user limit");
                ui.add(egui::DragValue::new(&mut edited.default_user_limit).range(1..=10_000));
                ui.end_row();
                ui.label("Maintenance mode");
                ui.checkbox(&mut edited.maintenance_mode, "");
                ui.end_row();
            });
        if edited.maintenance_mode {
            ui.colored_label(
                ui.visuals().warn_fg_color,
                "Tenants cannot use the application while maintenance mode is on",
            );
        }

        let has_changes = *edited != *settings;
        let mut should_save = false;
        ui.horizontal(|ui| {
            should_save = ui
                .add_enabled(
                    has_changes && !self.save.is_awaiting(),
                    egui::Button::new("Save"),
                )
                .clicked();
            if ui
                .add_enabled(has_changes, egui::Button::new("Undo"))
                .clicked()
            {
                *edited = settings.clone();
            }
        });
        if should_save {
            self.save = data_shared
                .client
                .admin_update_settings(edited, wake_fn(ui.ctx().clone()))
                .into();
        }
    }
}
