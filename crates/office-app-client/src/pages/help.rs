use officehub_client_core::Route;

use super::DisplayablePage;
use crate::{displayable_page_common, DataShared};

const TOPICS: [(&str, &str, Route); 5] = [
    (
        "Tracking time",
        "Start the timer on a task from the Tasks page. It keeps running if you close the \
         application and stops when you press Stop.",
        Route::Tasks,
    ),
    (
        "Adding clients",
        "Use New Client on the Clients page. Only the name is required.",
        Route::Clients,
    ),
    (
        "Stored passwords",
        "Passwords in the vault stay hidden until you reveal them and are never saved on this \
         device.",
        Route::Credentials,
    ),
    (
        "Google Workspace",
        "Connect a Google account and choose what to sync from the Google Sync page.",
        Route::GoogleSync,
    ),
    (
        "Your details",
        "Change your name, email or phone on the Profile page.",
        Route::Profile,
    ),
];

#[derive(Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct UiHelp {}

impl DisplayablePage for UiHelp {
    displayable_page_common!(Route::Help, reset_all);

    fn show(&mut self, ui: &mut egui::Ui, data_shared: &mut DataShared) {
        for (heading, body, route) in TOPICS {
            ui.add_space(8.0);
            ui.strong(heading);
            ui.label(body);
            if ui.link(format!("Go to {}", route.title())).clicked() {
                data_shared.navigate(route);
            }
        }
        ui.add_space(12.0);
        ui.weak("Still stuck? Contact your office administrator or our support team.");
    }
}
