use futures::channel::oneshot;
use officehub_shared::{
    const_config::path::{
        PATH_API_CHANGE_PASSWORD, PATH_API_LOGOUT, PATH_API_ORGANIZATION,
        PATH_API_ORGANIZATION_UPDATE, PATH_API_PROFILE_UPDATE, PATH_PASSWORD_RESET,
    },
    req_args::{ChangePasswordReqArgs, PasswordResetReqArgs},
    uac::{Identity, IdentityUpdate, Organization},
};
use secrecy::ExposeSecret as _;

use crate::{
    client::{UiCallBack, NO_ARGS},
    Client,
};

mod clients;
mod google_sync;
mod platform_admin;
mod reference;
mod tasks;
mod vault;

impl Client {
    /// Always answers the same whether or not the email is known
    #[tracing::instrument(skip(ui_notify))]
    pub fn request_password_reset<F>(
        &self,
        args: &PasswordResetReqArgs,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<()>>
    where
        F: UiCallBack,
    {
        self.send_request_expect_empty(PATH_PASSWORD_RESET, Some(args), ui_notify)
    }

    #[tracing::instrument(skip(args, ui_notify))]
    pub fn change_password<F>(
        &self,
        args: &ChangePasswordReqArgs,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<()>>
    where
        F: UiCallBack,
    {
        let args = serde_json::json!({
            "current_password": args.current_password.expose_secret(),
            "new_password": args.new_password.expose_secret(),
            "new_password_confirm": args.new_password_check.expose_secret()
        });
        self.send_request_expect_empty(PATH_API_CHANGE_PASSWORD, Some(&args), ui_notify)
    }

    /// Returns the identity as stored by the server after the change
    #[tracing::instrument(skip(ui_notify))]
    pub fn update_profile<F>(
        &self,
        args: &IdentityUpdate,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Identity>>
    where
        F: UiCallBack,
    {
        self.send_request_expect_json(PATH_API_PROFILE_UPDATE, Some(args), ui_notify)
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn get_organization<F>(&self, ui_notify: F) -> oneshot::Receiver<anyhow::Result<Organization>>
    where
        F: UiCallBack,
    {
        self.send_request_expect_json(PATH_API_ORGANIZATION, NO_ARGS, ui_notify)
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn update_organization<F>(
        &self,
        args: &Organization,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Organization>>
    where
        F: UiCallBack,
    {
        self.send_request_expect_json(PATH_API_ORGANIZATION_UPDATE, Some(args), ui_notify)
    }

    /// The local session is cleared by the caller whether or not the server
    /// hears about it
    #[tracing::instrument]
    pub fn logout_no_wait(&self) {
        self.send_request_no_wait(PATH_API_LOGOUT, NO_ARGS);
        self.set_access_token(None);
    }
}
