use futures::channel::oneshot;
use officehub_shared::{
    const_config::path::{
        PATH_API_EMPLOYEES, PATH_API_REPORT_SUMMARY, PATH_API_TEMPLATES, PATH_API_WORK_TYPES,
    },
    resources::{Employee, ReportSummary, TaskTemplate, WorkType},
};

use crate::{
    client::{UiCallBack, NO_ARGS},
    Client,
};

impl Client {
    #[tracing::instrument(skip(ui_notify))]
    pub fn list_templates<F>(
        &self,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Vec<TaskTemplate>>>
    where
        F: UiCallBack,
    {
        self.send_request_expect_list(PATH_API_TEMPLATES, NO_ARGS, ui_notify)
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn list_work_types<F>(
        &self,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Vec<WorkType>>>
    where
        F: UiCallBack,
    {
        self.send_request_expect_list(PATH_API_WORK_TYPES, NO_ARGS, ui_notify)
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn list_employees<F>(
        &self,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Vec<Employee>>>
    where
        F: UiCallBack,
    {
        self.send_request_expect_list(PATH_API_EMPLOYEES, NO_ARGS, ui_notify)
    }

    /// Headline numbers only, reports themselves are produced by the server
    #[tracing::instrument(skip(ui_notify))]
    pub fn report_summary<F>(&self, ui_notify: F) -> oneshot::Receiver<anyhow::Result<ReportSummary>>
    where
        F: UiCallBack,
    {
        self.send_request_expect_json(PATH_API_REPORT_SUMMARY, NO_ARGS, ui_notify)
    }
}
