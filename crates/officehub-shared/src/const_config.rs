//! Stores settings that are not expected to need to change but grouped together
//! for discoverability and reuse. Each constant should be prefixed by the module
//! name to allow importing the constant only and still be readable

use officehub_time::Seconds;

pub const PANIC_ON_RARE_ERR: bool = true;

pub mod client {
    use super::*;

    pub const CLIENT_DEFAULT_SERVER_ADDRESS: &str = "http://localhost:8000";
    /// How long a notification stays on screen if not dismissed
    pub const CLIENT_NOTIFICATION_LIFETIME: Seconds = Seconds::new(6);
    /// Interval between repaints when nothing else triggers one (drives the
    /// running task timers)
    pub const CLIENT_REPAINT_INTERVAL: Seconds = Seconds::new(1);
    /// Upper bound on chained redirects while resolving a route
    pub const CLIENT_MAX_REDIRECTS: usize = 4;
}

pub mod storage {
    pub const STORAGE_KEY_ACCESS_TOKEN: &str = "access_token";
    pub const STORAGE_KEY_REFRESH_TOKEN: &str = "refresh_token";
    pub const STORAGE_KEY_USER: &str = "user";
    pub const STORAGE_KEY_ORGANIZATION: &str = "organization";

    pub const STORAGE_ALL_SESSION_KEYS: [&str; 4] = [
        STORAGE_KEY_ACCESS_TOKEN,
        STORAGE_KEY_REFRESH_TOKEN,
        STORAGE_KEY_USER,
        STORAGE_KEY_ORGANIZATION,
    ];
}

pub mod error {
    pub const ERROR_NETWORK_MESSAGE: &str =
        "Unable to connect to the server. Please check your internet connection and try again.";
    pub const ERROR_GENERIC_MESSAGE: &str = "Something went wrong. Please try again.";
}

pub mod path {
    mod path_spec;
    pub use path_spec::{PathSpec, ResolvedPath};

    // Authentication
    pub const PATH_LOGIN: PathSpec = PathSpec::post("/api/auth/login/");
    pub const PATH_SIGNUP: PathSpec = PathSpec::post("/api/auth/signup/");
    pub const PATH_PASSWORD_RESET: PathSpec = PathSpec::post("/api/auth/password-reset/");
    pub const PATH_API_LOGOUT: PathSpec = PathSpec::post("/api/auth/logout/");
    pub const PATH_API_PROFILE_UPDATE: PathSpec = PathSpec::patch("/api/auth/profile/");
    pub const PATH_API_CHANGE_PASSWORD: PathSpec = PathSpec::post("/api/auth/change-password/");

    // Organization
    pub const PATH_API_ORGANIZATION: PathSpec = PathSpec::get("/api/organization/");
    pub const PATH_API_ORGANIZATION_UPDATE: PathSpec = PathSpec::patch("/api/organization/");

    // Tasks
    pub const PATH_API_TASKS: PathSpec = PathSpec::get("/api/tasks/");
    pub const PATH_API_TASK_CREATE: PathSpec = PathSpec::post("/api/tasks/");
    pub const PATH_API_TASK_UPDATE: PathSpec = PathSpec::patch("/api/tasks/");
    pub const PATH_API_TASK_DELETE: PathSpec = PathSpec::delete("/api/tasks/");
    pub const PATH_API_TASK_ACTION: PathSpec = PathSpec::post("/api/tasks/");

    // Clients
    pub const PATH_API_CLIENTS: PathSpec = PathSpec::get("/api/clients/");
    pub const PATH_API_CLIENT_CREATE: PathSpec = PathSpec::post("/api/clients/");
    pub const PATH_API_CLIENT_DELETE: PathSpec = PathSpec::delete("/api/clients/");

    // Reference data
    pub const PATH_API_TEMPLATES: PathSpec = PathSpec::get("/api/task-templates/");
    pub const PATH_API_WORK_TYPES: PathSpec = PathSpec::get("/api/work-types/");
    pub const PATH_API_EMPLOYEES: PathSpec = PathSpec::get("/api/users/");
    pub const PATH_API_REPORT_SUMMARY: PathSpec = PathSpec::get("/api/reports/summary/");

    // Credential vault
    pub const PATH_API_CREDENTIALS: PathSpec = PathSpec::get("/api/credentials/");
    pub const PATH_API_CREDENTIAL_REVEAL: PathSpec = PathSpec::get("/api/credentials/");
    pub const PATH_API_CREDENTIAL_DELETE: PathSpec = PathSpec::delete("/api/credentials/");

    // Google Workspace sync
    pub const PATH_API_GOOGLE_SYNC_SETTINGS: PathSpec =
        PathSpec::get("/api/google/sync-settings/");
    pub const PATH_API_GOOGLE_SYNC_SETTINGS_UPDATE: PathSpec =
        PathSpec::patch("/api/google/sync-settings/");
    pub const PATH_API_GOOGLE_CONNECT: PathSpec = PathSpec::get("/api/google/connect/");
    pub const PATH_API_GOOGLE_DISCONNECT: PathSpec = PathSpec::post("/api/google/disconnect/");

    // Platform administration
    pub const PATH_API_ADMIN_DASHBOARD: PathSpec = PathSpec::get("/api/platform-admin/dashboard/");
    pub const PATH_API_ADMIN_ORGANIZATIONS: PathSpec =
        PathSpec::get("/api/platform-admin/organizations/");
    pub const PATH_API_ADMIN_ORGANIZATION_STATUS: PathSpec =
        PathSpec::post("/api/platform-admin/organizations/");
    pub const PATH_API_ADMIN_TRIALS: PathSpec = PathSpec::get("/api/platform-admin/trials/");
    pub const PATH_API_ADMIN_USERS: PathSpec = PathSpec::get("/api/platform-admin/users/");
    pub const PATH_API_ADMIN_SUBSCRIPTIONS: PathSpec =
        PathSpec::get("/api/platform-admin/subscriptions/");
    pub const PATH_API_ADMIN_QUOTA: PathSpec = PathSpec::get("/api/platform-admin/quota/");
    pub const PATH_API_ADMIN_SETTINGS: PathSpec = PathSpec::get("/api/platform-admin/settings/");
    pub const PATH_API_ADMIN_SETTINGS_UPDATE: PathSpec =
        PathSpec::patch("/api/platform-admin/settings/");
}

#[cfg(test)]
mod tests {
    use static_assertions::const_assert;

    use super::client::{CLIENT_NOTIFICATION_LIFETIME, CLIENT_REPAINT_INTERVAL};

    // A notification should survive at least a few repaints
    const_assert!(CLIENT_NOTIFICATION_LIFETIME.as_u64() > 2 * CLIENT_REPAINT_INTERVAL.as_u64());
}
