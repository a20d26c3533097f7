use futures::channel::oneshot;
use officehub_shared::{
    const_config::path::{
        PATH_API_CREDENTIALS, PATH_API_CREDENTIAL_DELETE, PATH_API_CREDENTIAL_REVEAL,
    },
    id::DbId,
    resources::{Credential, RevealedSecret},
};

use crate::{
    client::{UiCallBack, NO_ARGS},
    Client,
};

impl Client {
    /// Listing never includes the secrets, see [`Client::reveal_credential`]
    #[tracing::instrument(skip(ui_notify))]
    pub fn list_credentials<F>(
        &self,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Vec<Credential>>>
    where
        F: UiCallBack,
    {
        self.send_request_expect_list(PATH_API_CREDENTIALS, NO_ARGS, ui_notify)
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn reveal_credential<F>(
        &self,
        id: DbId,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<RevealedSecret>>
    where
        F: UiCallBack,
    {
        self.send_request_expect_json(
            PATH_API_CREDENTIAL_REVEAL.for_action(id, "reveal"),
            NO_ARGS,
            ui_notify,
        )
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn delete_credential<F>(
        &self,
        id: DbId,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<()>>
    where
        F: UiCallBack,
    {
        self.send_request_expect_empty(PATH_API_CREDENTIAL_DELETE.for_item(id), NO_ARGS, ui_notify)
    }
}
