//! Calls only platform administrators are allowed to make. The server rejects
//! them for anyone else regardless of what the client shows

use futures::channel::oneshot;
use officehub_shared::{
    const_config::path::{
        PATH_API_ADMIN_DASHBOARD, PATH_API_ADMIN_ORGANIZATIONS,
        PATH_API_ADMIN_ORGANIZATION_STATUS, PATH_API_ADMIN_QUOTA, PATH_API_ADMIN_SETTINGS,
        PATH_API_ADMIN_SETTINGS_UPDATE, PATH_API_ADMIN_SUBSCRIPTIONS, PATH_API_ADMIN_TRIALS,
        PATH_API_ADMIN_USERS,
    },
    id::DbId,
    req_args::OrganizationStatusReqArgs,
    resources::{
        OrganizationRecord, PlatformSettings, PlatformStats, PlatformUser, QuotaUsage,
        SubscriptionRecord,
    },
};

use crate::{
    client::{UiCallBack, NO_ARGS},
    Client,
};

impl Client {
    #[tracing::instrument(skip(ui_notify))]
    pub fn admin_dashboard_stats<F>(
        &self,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<PlatformStats>>
    where
        F: UiCallBack,
    {
        self.send_request_expect_json(PATH_API_ADMIN_DASHBOARD, NO_ARGS, ui_notify)
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn admin_list_organizations<F>(
        &self,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Vec<OrganizationRecord>>>
    where
        F: UiCallBack,
    {
        self.send_request_expect_list(PATH_API_ADMIN_ORGANIZATIONS, NO_ARGS, ui_notify)
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn admin_set_organization_status<F>(
        &self,
        id: DbId,
        args: &OrganizationStatusReqArgs,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<OrganizationRecord>>
    where
        F: UiCallBack,
    {
        self.send_request_expect_json(
            PATH_API_ADMIN_ORGANIZATION_STATUS.for_action(id, "status"),
            Some(args),
            ui_notify,
        )
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn admin_list_trials<F>(
        &self,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Vec<OrganizationRecord>>>
    where
        F: UiCallBack,
    {
        self.send_request_expect_list(PATH_API_ADMIN_TRIALS, NO_ARGS, ui_notify)
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn admin_list_users<F>(
        &self,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Vec<PlatformUser>>>
    where
        F: UiCallBack,
    {
        self.send_request_expect_list(PATH_API_ADMIN_USERS, NO_ARGS, ui_notify)
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn admin_list_subscriptions<F>(
        &self,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Vec<SubscriptionRecord>>>
    where
        F: UiCallBack,
    {
        self.send_request_expect_list(PATH_API_ADMIN_SUBSCRIPTIONS, NO_ARGS, ui_notify)
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn admin_quota<F>(&self, ui_notify: F) -> oneshot::Receiver<anyhow::Result<Vec<QuotaUsage>>>
    where
        F: UiCallBack,
    {
        self.send_request_expect_list(PATH_API_ADMIN_QUOTA, NO_ARGS, ui_notify)
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn admin_settings<F>(
        &self,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<PlatformSettings>>
    where
        F: UiCallBack,
    {
        self.send_request_expect_json(PATH_API_ADMIN_SETTINGS, NO_ARGS, ui_notify)
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn admin_update_settings<F>(
        &self,
        args: &PlatformSettings,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<PlatformSettings>>
    where
        F: UiCallBack,
    {
        self.send_request_expect_json(PATH_API_ADMIN_SETTINGS_UPDATE, Some(args), ui_notify)
    }
}
