use futures::channel::oneshot;
use officehub_shared::{
    const_config::path::{PATH_API_CLIENTS, PATH_API_CLIENT_CREATE, PATH_API_CLIENT_DELETE},
    id::DbId,
    resources::{Client as OfficeClient, ClientDraft},
};

use crate::{
    client::{UiCallBack, NO_ARGS},
    Client,
};

impl Client {
    #[tracing::instrument(skip(ui_notify))]
    pub fn list_clients<F>(
        &self,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Vec<OfficeClient>>>
    where
        F: UiCallBack,
    {
        self.send_request_expect_list(PATH_API_CLIENTS, NO_ARGS, ui_notify)
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn create_client<F>(
        &self,
        args: &ClientDraft,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<OfficeClient>>
    where
        F: UiCallBack,
    {
        self.send_request_expect_json(PATH_API_CLIENT_CREATE, Some(args), ui_notify)
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn delete_client<F>(&self, id: DbId, ui_notify: F) -> oneshot::Receiver<anyhow::Result<()>>
    where
        F: UiCallBack,
    {
        self.send_request_expect_empty(PATH_API_CLIENT_DELETE.for_item(id), NO_ARGS, ui_notify)
    }
}
