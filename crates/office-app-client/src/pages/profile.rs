use officehub_client_core::Route;
use officehub_shared::uac::{Identity, IdentityUpdate};
use tracing::info;

use super::{data_state::DataState, DisplayablePage};
use crate::{
    app::wake_fn, displayable_page_common, ui_helpers::ui_optional_text_edit, DataShared,
};

#[derive(Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiProfile {
    /// Copy of the session identity being edited
    #[serde(skip)]
    edited: Option<Identity>,
    #[serde(skip)]
    save: DataState<Identity>,
}

impl UiProfile {
    fn check_outcome(&mut self, data_shared: &mut DataShared) {
        match self.save.take_outcome() {
            Some(Ok(saved)) => {
                info!(id = %saved.id, "profile updated");
                let update = data_shared
                    .session
                    .identity()
                    .and_then(|current| IdentityUpdate::from_diff(current, &saved));
                if let Some(update) = update {
                    data_shared.session.update_identity(update);
                }
                data_shared.notifications.push_success("Profile saved");
                self.edited = None;
            }
            Some(Err(e)) => data_shared.notify_error(e),
            None => {}
        }
    }
}

impl DisplayablePage for UiProfile {
    displayable_page_common!(Route::Profile, reset_all);

    fn show(&mut self, ui: &mut egui::Ui, data_shared: &mut DataShared) {
        self.check_outcome(data_shared);
        let Some(current) = data_shared.session.identity().cloned() else {
            ui.label("Not signed in");
            return;
        };
        let edited = self.edited.get_or_insert_with(|| current.clone());

        egui::Grid::new("profile_form")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                ui.label("First name");
                ui.text_edit_singleline(&mut edited.first_name);
                ui.end_row();
                ui.label("Last name");
                ui.text_edit_singleline(&mut edited.last_name);
                ui.end_row();
                ui.label("Email");
                ui.text_edit_singleline(&mut edited.email);
                ui.end_row();
                ui.label("Phone");
                ui_optional_text_edit(ui, &mut edited.phone, "Optional");
                ui.end_row();
                ui.label("Role");
                ui.label(&edited.role);
                ui.end_row();
            });

        let update = IdentityUpdate::from_diff(&current, edited);
        let validation = update.as_ref().map(IdentityUpdate::is_valid);
        if let Some(Err(e)) = validation.as_ref() {
            ui.weak(e.to_string());
        }
        let can_save = matches!(validation, Some(Ok(()))) && !self.save.is_awaiting();

        let mut should_save = false;
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            should_save = ui
                .add_enabled(can_save, egui::Button::new("Save"))
                .clicked();
            if ui
                .add_enabled(update.is_some(), egui::Button::new("Undo"))
                .clicked()
            {
                self.edited = None;
            }
            if self.save.is_awaiting() {
                ui.spinner();
            }
        });

        if let (true, Some(update)) = (should_save, update) {
            self.save = data_shared
                .client
                .update_profile(&update, wake_fn(ui.ctx().clone()))
                .into();
        }
    }
}
