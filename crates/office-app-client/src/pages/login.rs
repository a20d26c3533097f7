use officehub_client_core::Route;
use officehub_shared::{req_args::LoginReqArgs, uac::LoginResponse};
use secrecy::{ExposeSecret as _, SecretString};
use tracing::info;

use super::{data_state::DataState, DisplayablePage};
use crate::{app::wake_fn, displayable_page_common, ui_helpers::ui_password_edit, DataShared};

#[derive(Debug, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiLogin {
    /// Kept between runs for convenience
    email: String,
    #[serde(skip)]
    password: SecretString,
    #[serde(skip)]
    login_attempt: DataState<LoginResponse>,
}

impl Default for UiLogin {
    fn default() -> Self {
        Self {
            email: Default::default(),
            password: SecretString::from(""),
            login_attempt: Default::default(),
        }
    }
}

impl UiLogin {
    fn is_allowed_to_login(&self) -> bool {
        !self.email.trim().is_empty()
            && !self.password.expose_secret().is_empty()
            && !self.login_attempt.is_awaiting()
    }

    fn login_prompt(&mut self, ui: &mut egui::Ui, data_shared: &mut DataShared) {
        let mut lost_focus = ui
            .add(egui::TextEdit::singleline(&mut self.email).hint_text("Email"))
            .lost_focus();
        lost_focus =
            ui_password_edit(ui, &mut self.password, "Password").lost_focus() || lost_focus;

        let submit_by_enter = lost_focus && ui.input(|i| i.key_pressed(egui::Key::Enter));
        let submit_by_click = ui
            .add_enabled(self.is_allowed_to_login(), egui::Button::new("Login"))
            .clicked();
        if (submit_by_enter || submit_by_click) && self.is_allowed_to_login() {
            self.send_login_attempt(ui, data_shared);
        }
    }

    fn check_outcome(&mut self, data_shared: &mut DataShared) {
        match self.login_attempt.take_outcome() {
            Some(Ok(response)) => {
                info!("login succeeded");
                self.password = SecretString::from("");
                data_shared.complete_login(response);
            }
            Some(Err(e)) => {
                info!("login failed");
                data_shared.notify_error(e.clone());
                // Also kept next to the form until the next attempt
                self.login_attempt = DataState::Failed(e);
            }
            None => {}
        }
    }

    fn check_login_attempt(&mut self, ui: &mut egui::Ui, data_shared: &mut DataShared) {
        if self.login_attempt.is_awaiting() {
            ui.spinner();
        }
        self.check_outcome(data_shared);
        if let DataState::Failed(e) = &self.login_attempt {
            ui.colored_label(ui.visuals().error_fg_color, e);
        }
    }

    fn send_login_attempt(&mut self, ui: &mut egui::Ui, data_shared: &mut DataShared) {
        let args = LoginReqArgs::new(self.email.trim(), self.password.clone());
        let rx = data_shared.client.login(args, wake_fn(ui.ctx().clone()));
        self.login_attempt = rx.into();
    }
}

impl DisplayablePage for UiLogin {
    displayable_page_common!(Route::Login);

    fn reset_to_default(&mut self, _: super::private::Token) {
        self.password = SecretString::from("");
        self.login_attempt = Default::default();
    }

    fn show(&mut self, ui: &mut egui::Ui, data_shared: &mut DataShared) {
        ui.vertical_centered(|ui| {
            ui.set_max_width(360.0);
            self.login_prompt(ui, data_shared);
            self.check_login_attempt(ui, data_shared);

            ui.separator();
            if ui.link("Forgot your password?").clicked() {
                data_shared.navigate(Route::PasswordReset);
            }
            if ui.link("New here? Start a free trial").clicked() {
                data_shared.navigate(Route::Signup);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use futures::channel::oneshot;

    use crate::notifications::NotificationKind;

    use super::*;

    #[test]
    fn failed_login_is_notified() {
        // Arrange
        let mut data_shared = DataShared::default();
        let (tx, rx) = oneshot::channel();
        tx.send(Err(anyhow::anyhow!("connection refused"))).unwrap();
        let mut page = UiLogin {
            login_attempt: rx.into(),
            ..Default::default()
        };

        // Act
        page.check_outcome(&mut data_shared);

        // Assert
        let DataState::Failed(inline) = &page.login_attempt else {
            panic!("expected a failed attempt, got {:?}", page.login_attempt);
        };
        let notified = data_shared.notifications.items();
        assert_eq!(notified.len(), 1);
        assert_eq!(notified[0].kind, NotificationKind::Error);
        assert_eq!(&notified[0].message, inline);
        assert!(!data_shared.session.is_authenticated());
    }
}
