use officehub_client_core::Route;
use officehub_shared::{req_args::SignupReqArgs, uac::validate_email, uac::LoginResponse};
use secrecy::{ExposeSecret as _, SecretString};

use super::{data_state::DataState, DisplayablePage};
use crate::{app::wake_fn, displayable_page_common, ui_helpers::ui_password_edit, DataShared};

pub(super) const MIN_PASSWORD_LENGTH: usize = 8;

#[derive(Debug, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiSignup {
    #[serde(skip)]
    organization_name: String,
    #[serde(skip)]
    first_name: String,
    #[serde(skip)]
    last_name: String,
    #[serde(skip)]
    email: String,
    #[serde(skip)]
    password: SecretString,
    #[serde(skip)]
    password_check: SecretString,
    #[serde(skip)]
    signup_attempt: DataState<LoginResponse>,
}

impl Default for UiSignup {
    fn default() -> Self {
        Self {
            organization_name: Default::default(),
            first_name: Default::default(),
            last_name: Default::default(),
            email: Default::default(),
            password: SecretString::from(""),
            password_check: SecretString::from(""),
            signup_attempt: Default::default(),
        }
    }
}

impl UiSignup {
    fn args(&self) -> SignupReqArgs {
        SignupReqArgs {
            organization_name: self.organization_name.trim().to_string(),
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            password_check: self.password_check.clone(),
        }
    }

    /// Problem to show the user before anything is sent, if any
    fn validation_error(&self) -> Option<&'static str> {
        let args = self.args();
        if args.organization_name.is_empty()
            || args.first_name.is_empty()
            || args.last_name.is_empty()
            || args.email.is_empty()
        {
            return Some("All fields are required");
        }
        if validate_email(&args.email).is_err() {
            return Some("Please enter a valid email address");
        }
        if args.password.expose_secret().len() < MIN_PASSWORD_LENGTH {
            return Some("Password must be at least 8 characters");
        }
        if !args.passwords_match() {
            return Some("Passwords do not match");
        }
        None
    }

    fn show_form(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("signup_grid")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                ui.label("Organization");
                ui.text_edit_singleline(&mut self.organization_name);
                ui.end_row();
                ui.label("First name");
                ui.text_edit_singleline(&mut self.first_name);
                ui.end_row();
                ui.label("Last name");
                ui.text_edit_singleline(&mut self.last_name);
                ui.end_row();
                ui.label("Email");
                ui.text_edit_singleline(&mut self.email);
                ui.end_row();
                ui.label("Password");
                ui_password_edit(ui, &mut self.password, "At least 8 characters");
                ui.end_row();
                ui.label("Confirm password");
                ui_password_edit(ui, &mut self.password_check, "");
                ui.end_row();
            });
    }
}

impl DisplayablePage for UiSignup {
    displayable_page_common!(Route::Signup, reset_all);

    fn show(&mut self, ui: &mut egui::Ui, data_shared: &mut DataShared) {
        ui.label("Start your free trial. No credit card required.");
        ui.add_space(8.0);
        self.show_form(ui);

        let validation_error = self.validation_error();
        if let Some(msg) = validation_error {
            ui.weak(msg);
        }
        let is_ready = validation_error.is_none() && !self.signup_attempt.is_awaiting();
        if ui
            .add_enabled(is_ready, egui::Button::new("Create Account"))
            .clicked()
        {
            let rx = data_shared
                .client
                .signup(self.args(), wake_fn(ui.ctx().clone()));
            self.signup_attempt = rx.into();
        }

        if self.signup_attempt.is_awaiting() {
            ui.spinner();
        }
        match self.signup_attempt.take_outcome() {
            Some(Ok(response)) => {
                data_shared.notifications.push_success("Welcome to OfficeHub!");
                *self = Default::default();
                data_shared.complete_login(response);
                return;
            }
            Some(Err(e)) => self.signup_attempt = DataState::Failed(e),
            None => {}
        }
        if let DataState::Failed(e) = &self.signup_attempt {
            ui.colored_label(ui.visuals().error_fg_color, e);
        }

        ui.separator();
        if ui.link("Already have an account? Login").clicked() {
            data_shared.navigate(Route::Login);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> UiSignup {
        UiSignup {
            organization_name: "Acme Accounting".into(),
            first_name: "Jo".into(),
            last_name: "Bloggs".into(),
            email: "jo@example.com".into(),
            password: SecretString::from("correct horse"),
            password_check: SecretString::from("correct horse"),
            signup_attempt: Default::default(),
        }
    }

    #[test]
    fn complete_form_is_valid() {
        assert_eq!(filled().validation_error(), None);
    }

    #[test]
    fn mismatched_passwords() {
        // Arrange
        let mut page = filled();
        page.password_check = SecretString::from("battery staple");

        // Act / Assert
        assert_eq!(page.validation_error(), Some("Passwords do not match"));
    }

    #[test]
    fn short_password() {
        // Arrange
        let mut page = filled();
        page.password = SecretString::from("short");
        page.password_check = SecretString::from("short");

        // Act / Assert
        assert_eq!(
            page.validation_error(),
            Some("Password must be at least 8 characters")
        );
    }

    #[test]
    fn blank_name_is_missing() {
        // Arrange
        let mut page = filled();
        page.first_name = "   ".into();

        // Act / Assert
        assert_eq!(page.validation_error(), Some("All fields are required"));
    }
}
