use officehub_client_core::Route;
use officehub_shared::{
    req_args::ChangePasswordReqArgs,
    uac::{validate_email, Organization},
};
use secrecy::{ExposeSecret as _, SecretString};
use tracing::info;

use super::{
    data_state::{AwaitingType, DataState},
    signup::MIN_PASSWORD_LENGTH,
    DisplayablePage,
};
use crate::{
    app::wake_fn,
    displayable_page_common,
    ui_helpers::{ui_optional_text_edit, ui_password_edit},
    DataShared,
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
enum SettingsTab {
    #[default]
    Organization,
    Password,
    Appearance,
}

impl SettingsTab {
    const ALL: [Self; 3] = [Self::Organization, Self::Password, Self::Appearance];

    fn label(&self) -> &'static str {
        match self {
            SettingsTab::Organization => "Organization",
            SettingsTab::Password => "Password",
            SettingsTab::Appearance => "Appearance",
        }
    }
}

#[derive(Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiSettings {
    tab: SettingsTab,
    #[serde(skip)]
    organization: DataState<Organization>,
    #[serde(skip)]
    edited: Option<Organization>,
    #[serde(skip)]
    save_organization: DataState<Organization>,
    #[serde(skip)]
    password: PasswordForm,
}

#[derive(Debug)]
struct PasswordForm {
    current_password: SecretString,
    new_password: SecretString,
    confirmation_password: SecretString,
    data_state: DataState<()>,
}

impl Default for PasswordForm {
    fn default() -> Self {
        Self {
            current_password: SecretString::from(""),
            new_password: SecretString::from(""),
            confirmation_password: SecretString::from(""),
            data_state: Default::default(),
        }
    }
}

impl PasswordForm {
    /// Reason the form cannot be sent yet
    fn validation_error(&self) -> Option<&'static str> {
        let new_password = self.new_password.expose_secret();
        if self.current_password.expose_secret().is_empty() || new_password.is_empty() {
            Some("Enter your current and new password")
        } else if new_password.len() < MIN_PASSWORD_LENGTH {
            Some("New password must be at least 8 characters")
        } else if new_password != self.confirmation_password.expose_secret() {
            Some("New passwords do not match")
        } else {
            None
        }
    }

    fn show(&mut self, ui: &mut egui::Ui, data_shared: &mut DataShared) {
        match self.data_state.take_outcome() {
            Some(Ok(())) => {
                data_shared
                    .notifications
                    .push_success("Password successfully changed");
                *self = Default::default();
            }
            Some(Err(e)) => data_shared.notify_error(e),
            None => {}
        }

        let mut lost_focus =
            ui_password_edit(ui, &mut self.current_password, "Current Password").lost_focus();
        ui.add_space(4.0);
        lost_focus =
            ui_password_edit(ui, &mut self.new_password, "New Password").lost_focus() || lost_focus;
        ui.add_space(4.0);
        lost_focus = ui_password_edit(ui, &mut self.confirmation_password, "Confirm New Password")
            .lost_focus()
            || lost_focus;

        let error = self.validation_error();
        if let Some(error) = error {
            ui.weak(error);
        }
        let is_ready_to_send = error.is_none() && !self.data_state.is_awaiting();
        let mut should_send =
            lost_focus && is_ready_to_send && ui.input(|i| i.key_pressed(egui::Key::Enter));
        ui.add_space(8.0);
        if ui
            .add_enabled(is_ready_to_send, egui::Button::new("Change Password"))
            .clicked()
        {
            should_send = true;
        }
        if self.data_state.is_awaiting() {
            ui.spinner();
        }

        if should_send {
            let args = ChangePasswordReqArgs {
                current_password: self.current_password.clone(),
                new_password: self.new_password.clone(),
                new_password_check: self.confirmation_password.clone(),
            };
            self.data_state = data_shared
                .client
                .change_password(&args, wake_fn(ui.ctx().clone()))
                .into();
        }
    }
}

fn organization_error(organization: &Organization) -> Option<&'static str> {
    if organization.name.trim().is_empty() {
        return Some("The organization needs a name");
    }
    match organization.email.as_deref() {
        Some(email) if validate_email(email).is_err() => Some("Email address is not valid"),
        _ => None,
    }
}

impl UiSettings {
    fn ui_organization(&mut self, ui: &mut egui::Ui, data_shared: &mut DataShared) {
        match self.save_organization.take_outcome() {
            Some(Ok(saved)) => {
                info!(id = %saved.id, "organization updated");
                data_shared.session.update_organization(saved.clone());
                data_shared
                    .notifications
                    .push_success("Organization details saved");
                self.edited = Some(saved.clone());
                self.organization = DataState::Present(saved);
            }
            Some(Err(e)) => data_shared.notify_error(e),
            None => {}
        }

        let client = data_shared.client.clone();
        let ctx = ui.ctx().clone();
        self.organization.egui_get(ui, None, || {
            AwaitingType(client.get_organization(wake_fn(ctx)))
        });
        let Some(organization) = self.organization.present() else {
            return;
        };
        let edited = self.edited.get_or_insert_with(|| organization.clone());

        egui::Grid::new("organization_form")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                ui.label("Name");
                ui.text_edit_singleline(&mut edited.name);
                ui.end_row();
                ui.label("Email");
                ui_optional_text_edit(ui, &mut edited.email, "Optional");
                ui.end_row();
                ui.label("Phone");
                ui_optional_text_edit(ui, &mut edited.phone, "Optional");
                ui.end_row();
                ui.label("Address");
                ui_optional_text_edit(ui, &mut edited.address, "Optional");
                ui.end_row();
                ui.label("Tax ID");
                ui_optional_text_edit(ui, &mut edited.tax_id, "Optional");
                ui.end_row();
                ui.label("Subscription");
                ui.label(edited.subscription_status.to_string());
                ui.end_row();
            });

        let error = organization_error(edited);
        if let Some(error) = error {
            ui.weak(error);
        }
        let has_changes = *edited != *organization;
        let mut should_save = false;
        ui.horizontal(|ui| {
            should_save = ui
                .add_enabled(
                    has_changes && error.is_none() && !self.save_organization.is_awaiting(),
                    egui::Button::new("Save"),
                )
                .clicked();
            if ui
                .add_enabled(has_changes, egui::Button::new("Undo"))
                .clicked()
            {
                *edited = organization.clone();
            }
        });
        if should_save {
            self.save_organization = data_shared
                .client
                .update_organization(edited, wake_fn(ui.ctx().clone()))
                .into();
        }
    }
}

impl DisplayablePage for UiSettings {
    displayable_page_common!(Route::Settings);

    fn reset_to_default(&mut self, _: super::private::Token) {
        *self = Self {
            tab: self.tab,
            ..Default::default()
        };
    }

    fn show(&mut self, ui: &mut egui::Ui, data_shared: &mut DataShared) {
        ui.horizontal(|ui| {
            for tab in SettingsTab::ALL {
                ui.selectable_value(&mut self.tab, tab, tab.label());
            }
        });
        ui.separator();
        match self.tab {
            SettingsTab::Organization => self.ui_organization(ui, data_shared),
            SettingsTab::Password => self.password.show(ui, data_shared),
            SettingsTab::Appearance => {
                let ctx = ui.ctx().clone();
                ctx.settings_ui(ui);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use officehub_shared::uac::SubscriptionStatus;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::empty("", "", "", Some("Enter your current and new password"))]
    #[case::short("old", "short", "short", Some("New password must be at least 8 characters"))]
    #[case::mismatch("old", "long enough", "long enougH", Some("New passwords do not match"))]
    #[case::ready("old", "long enough", "long enough", None)]
    fn password_validation(
        #[case] current: &str,
        #[case] new: &str,
        #[case] confirmation: &str,
        #[case] expected: Option<&str>,
    ) {
        // Arrange
        let form = PasswordForm {
            current_password: current.into(),
            new_password: new.into(),
            confirmation_password: confirmation.into(),
            ..Default::default()
        };

        // Act
        let actual = form.validation_error();

        // Assert
        assert_eq!(actual, expected);
    }

    #[rstest]
    #[case::ok("Acme", None, None)]
    #[case::no_name(" ", None, Some("The organization needs a name"))]
    #[case::bad_email("Acme", Some("nope"), Some("Email address is not valid"))]
    fn organization_validation(
        #[case] name: &str,
        #[case] email: Option<&str>,
        #[case] expected: Option<&str>,
    ) {
        // Arrange
        let organization = Organization {
            id: 1.into(),
            name: name.into(),
            subscription_status: SubscriptionStatus::Active,
            trial_ends_at: None,
            email: email.map(Into::into),
            phone: None,
            address: None,
            tax_id: None,
        };

        // Act / Assert
        assert_eq!(organization_error(&organization), expected);
    }
}
