use futures::channel::oneshot;
use officehub_shared::{
    const_config::path::{
        PATH_API_GOOGLE_CONNECT, PATH_API_GOOGLE_DISCONNECT, PATH_API_GOOGLE_SYNC_SETTINGS,
        PATH_API_GOOGLE_SYNC_SETTINGS_UPDATE,
    },
    resources::{GoogleConnectUrl, SyncSettings, SyncSettingsUpdate},
};

use crate::{
    client::{UiCallBack, NO_ARGS},
    Client,
};

impl Client {
    #[tracing::instrument(skip(ui_notify))]
    pub fn get_sync_settings<F>(
        &self,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<SyncSettings>>
    where
        F: UiCallBack,
    {
        self.send_request_expect_json(PATH_API_GOOGLE_SYNC_SETTINGS, NO_ARGS, ui_notify)
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn update_sync_settings<F>(
        &self,
        args: &SyncSettingsUpdate,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<SyncSettings>>
    where
        F: UiCallBack,
    {
        self.send_request_expect_json(PATH_API_GOOGLE_SYNC_SETTINGS_UPDATE, Some(args), ui_notify)
    }

    /// URL of the consent screen the user has to be sent to
    #[tracing::instrument(skip(ui_notify))]
    pub fn google_connect_url<F>(
        &self,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<GoogleConnectUrl>>
    where
        F: UiCallBack,
    {
        self.send_request_expect_json(PATH_API_GOOGLE_CONNECT, NO_ARGS, ui_notify)
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn google_disconnect<F>(&self, ui_notify: F) -> oneshot::Receiver<anyhow::Result<()>>
    where
        F: UiCallBack,
    {
        self.send_request_expect_empty(PATH_API_GOOGLE_DISCONNECT, NO_ARGS, ui_notify)
    }
}
