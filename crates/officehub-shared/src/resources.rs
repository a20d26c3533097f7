//! Records exchanged with the REST API by the feature pages

mod clients;
mod credentials;
mod google_sync;
mod platform_admin;
mod reference;
mod tasks;

pub use clients::{Client, ClientDraft};
pub use credentials::{Credential, RevealedSecret};
pub use google_sync::{GoogleConnectUrl, SyncSettings, SyncSettingsUpdate};
pub use platform_admin::{
    OrganizationRecord, PlatformSettings, PlatformStats, PlatformUser, QuotaUsage,
    SubscriptionRecord,
};
pub use reference::{Employee, ReportSummary, TaskTemplate, WorkType};
pub use tasks::{Task, TaskDraft, TaskPriority, TaskStatus, TaskStatusUpdate};
