use futures::channel::oneshot;
use officehub_shared::{
    const_config::path::{
        PATH_API_TASKS, PATH_API_TASK_ACTION, PATH_API_TASK_CREATE, PATH_API_TASK_DELETE,
        PATH_API_TASK_UPDATE,
    },
    id::DbId,
    resources::{Task, TaskDraft, TaskStatusUpdate},
};

use crate::{
    client::{UiCallBack, NO_ARGS},
    Client,
};

impl Client {
    #[tracing::instrument(skip(ui_notify))]
    pub fn list_tasks<F>(&self, ui_notify: F) -> oneshot::Receiver<anyhow::Result<Vec<Task>>>
    where
        F: UiCallBack,
    {
        self.send_request_expect_list(PATH_API_TASKS, NO_ARGS, ui_notify)
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn create_task<F>(
        &self,
        args: &TaskDraft,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Task>>
    where
        F: UiCallBack,
    {
        self.send_request_expect_json(PATH_API_TASK_CREATE, Some(args), ui_notify)
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn update_task_status<F>(
        &self,
        id: DbId,
        args: &TaskStatusUpdate,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Task>>
    where
        F: UiCallBack,
    {
        self.send_request_expect_json(PATH_API_TASK_UPDATE.for_item(id), Some(args), ui_notify)
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn delete_task<F>(&self, id: DbId, ui_notify: F) -> oneshot::Receiver<anyhow::Result<()>>
    where
        F: UiCallBack,
    {
        self.send_request_expect_empty(PATH_API_TASK_DELETE.for_item(id), NO_ARGS, ui_notify)
    }

    /// The server records the start time, the returned task carries it
    #[tracing::instrument(skip(ui_notify))]
    pub fn start_timer<F>(&self, id: DbId, ui_notify: F) -> oneshot::Receiver<anyhow::Result<Task>>
    where
        F: UiCallBack,
    {
        self.send_request_expect_json(
            PATH_API_TASK_ACTION.for_action(id, "start-timer"),
            NO_ARGS,
            ui_notify,
        )
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn stop_timer<F>(&self, id: DbId, ui_notify: F) -> oneshot::Receiver<anyhow::Result<Task>>
    where
        F: UiCallBack,
    {
        self.send_request_expect_json(
            PATH_API_TASK_ACTION.for_action(id, "stop-timer"),
            NO_ARGS,
            ui_notify,
        )
    }
}
