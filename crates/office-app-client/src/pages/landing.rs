use officehub_client_core::Route;

use super::DisplayablePage;
use crate::{displayable_page_common, DataShared};

const FEATURES: [(&str, &str); 6] = [
    ("Clients", "Keep every client's details in one place."),
    ("Tasks", "Assign work, set due dates and track time with a timer."),
    ("Reports", "See where the time goes across the office."),
    ("Credential Vault", "Share client portal passwords safely with your team."),
    ("Google Workspace", "Sync calendars, mail, drive and contacts."),
    ("Roles", "Admins, partners, managers and staff each see what they need."),
];

#[derive(Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct UiLanding {}

impl DisplayablePage for UiLanding {
    displayable_page_common!(Route::Landing, reset_all);

    fn show(&mut self, ui: &mut egui::Ui, data_shared: &mut DataShared) {
        ui.label(
            egui::RichText::new("Run your professional office from one place").size(20.0),
        );
        ui.add_space(12.0);
        egui::Grid::new("landing_features")
            .num_columns(2)
            .spacing([24.0, 8.0])
            .show(ui, |ui| {
                for (title, description) in FEATURES {
                    ui.strong(title);
                    ui.label(description);
                    ui.end_row();
                }
            });
        ui.add_space(12.0);
        ui.horizontal(|ui| {
            if data_shared.session.is_authenticated() {
                if ui.button("Go to Dashboard").clicked() {
                    data_shared.navigate(Route::TENANT_ROOT);
                }
            } else {
                if ui.button("Start Free Trial").clicked() {
                    data_shared.navigate(Route::Signup);
                }
                if ui.button("Login").clicked() {
                    data_shared.navigate(Route::Login);
                }
            }
        });
    }
}
