use officehub_client_core::Route;
use officehub_shared::{req_args::PasswordResetReqArgs, uac::validate_email};

use super::{data_state::DataState, DisplayablePage};
use crate::{app::wake_fn, displayable_page_common, DataShared};

#[derive(Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiPasswordReset {
    #[serde(skip)]
    email: String,
    #[serde(skip)]
    request: DataState<()>,
}

impl DisplayablePage for UiPasswordReset {
    displayable_page_common!(Route::PasswordReset, reset_all);

    fn show(&mut self, ui: &mut egui::Ui, data_shared: &mut DataShared) {
        ui.vertical_centered(|ui| {
            ui.set_max_width(360.0);
            match self.request.take_outcome() {
                Some(Ok(())) => self.request = DataState::Present(()),
                Some(Err(e)) => self.request = DataState::Failed(e),
                None => {}
            }
            if self.request.is_present() {
                // Same answer whether or not the account exists
                ui.label(
                    "If an account exists for that email you will receive a link to reset \
                     your password shortly.",
                );
            } else {
                ui.label("Enter the email you use to log in.");
                ui.add(egui::TextEdit::singleline(&mut self.email).hint_text("Email"));
                let is_ready =
                    validate_email(self.email.trim()).is_ok() && !self.request.is_awaiting();
                if ui
                    .add_enabled(is_ready, egui::Button::new("Send Reset Link"))
                    .clicked()
                {
                    let args = PasswordResetReqArgs {
                        email: self.email.trim().to_string(),
                    };
                    let rx = data_shared
                        .client
                        .request_password_reset(&args, wake_fn(ui.ctx().clone()));
                    self.request = rx.into();
                }
                if self.request.is_awaiting() {
                    ui.spinner();
                }
                if let DataState::Failed(e) = &self.request {
                    ui.colored_label(ui.visuals().error_fg_color, e);
                }
            }
            ui.separator();
            if ui.link("Back to login").clicked() {
                data_shared.navigate(Route::Login);
            }
        });
    }
}
