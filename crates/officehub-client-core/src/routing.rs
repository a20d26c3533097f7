//! Route table, legacy redirects and the gates deciding what may be shown
//!
//! The gates only decide what the client displays. Access control is enforced
//! by the server.

use officehub_shared::const_config::client::CLIENT_MAX_REDIRECTS;
use strum::IntoEnumIterator as _;
use tracing::{error, instrument};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    serde::Serialize,
    serde::Deserialize,
    strum::EnumIter,
)]
pub enum Route {
    // Public
    #[default]
    Landing,
    Login,
    Signup,
    PasswordReset,
    Privacy,
    Terms,
    Cookies,

    // Tenant
    Dashboard,
    Clients,
    Tasks,
    Reports,
    WorkTypes,
    Employees,
    Templates,
    Credentials,
    GoogleSync,
    Settings,
    Profile,
    Help,

    // Platform administration
    AdminDashboard,
    AdminOrganizations,
    AdminTrials,
    AdminUsers,
    AdminSubscriptions,
    AdminSettings,
    AdminQuota,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteKind {
    /// Shown regardless of the session
    Public,
    /// Only shown when not logged in (login, signup, ...)
    PublicOnly,
    Protected,
    PlatformAdmin,
}

/// The parts of the session the gates look at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GateState {
    pub is_authenticated: bool,
    pub is_loading: bool,
    pub is_platform_admin: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Placeholder,
    Redirect(Route),
    Render,
}

/// Outcome of resolving a path through redirects and gates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Session not loaded yet
    Placeholder,
    Show(Route),
}

impl Route {
    pub const LANDING: Route = Route::Landing;
    pub const TENANT_ROOT: Route = Route::Dashboard;

    pub fn path(&self) -> &'static str {
        match self {
            Route::Landing => "/home",
            Route::Login => "/login",
            Route::Signup => "/signup",
            Route::PasswordReset => "/reset-password",
            Route::Privacy => "/privacy",
            Route::Terms => "/terms",
            Route::Cookies => "/cookies",
            Route::Dashboard => "/",
            Route::Clients => "/clients",
            Route::Tasks => "/tasks",
            Route::Reports => "/reports",
            Route::WorkTypes => "/work-types",
            Route::Employees => "/employees",
            Route::Templates => "/templates",
            Route::Credentials => "/credentials",
            Route::GoogleSync => "/google-sync",
            Route::Settings => "/settings",
            Route::Profile => "/profile",
            Route::Help => "/help",
            Route::AdminDashboard => "/platform-admin",
            Route::AdminOrganizations => "/platform-admin/organizations",
            Route::AdminTrials => "/platform-admin/trials",
            Route::AdminUsers => "/platform-admin/users",
            Route::AdminSubscriptions => "/platform-admin/subscriptions",
            Route::AdminSettings => "/platform-admin/settings",
            Route::AdminQuota => "/platform-admin/quota",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Landing => "Welcome",
            Route::Login => "Login",
            Route::Signup => "Sign Up",
            Route::PasswordReset => "Reset Password",
            Route::Privacy => "Privacy Policy",
            Route::Terms => "Terms of Service",
            Route::Cookies => "Cookie Policy",
            Route::Dashboard => "Dashboard",
            Route::Clients => "Clients",
            Route::Tasks => "Tasks",
            Route::Reports => "Reports",
            Route::WorkTypes => "Work Types",
            Route::Employees => "Employees",
            Route::Templates => "Templates",
            Route::Credentials => "Credential Vault",
            Route::GoogleSync => "Google Sync",
            Route::Settings => "Settings",
            Route::Profile => "Profile",
            Route::Help => "Help",
            Route::AdminDashboard => "Platform Admin",
            Route::AdminOrganizations => "Organizations",
            Route::AdminTrials => "Trials",
            Route::AdminUsers => "Users",
            Route::AdminSubscriptions => "Subscriptions",
            Route::AdminSettings => "Platform Settings",
            Route::AdminQuota => "Quota Monitor",
        }
    }

    pub fn kind(&self) -> RouteKind {
        match self {
            Route::Landing | Route::Privacy | Route::Terms | Route::Cookies => RouteKind::Public,
            Route::Login | Route::Signup | Route::PasswordReset => RouteKind::PublicOnly,
            Route::Dashboard
            | Route::Clients
            | Route::Tasks
            | Route::Reports
            | Route::WorkTypes
            | Route::Employees
            | Route::Templates
            | Route::Credentials
            | Route::GoogleSync
            | Route::Settings
            | Route::Profile
            | Route::Help => RouteKind::Protected,
            Route::AdminDashboard
            | Route::AdminOrganizations
            | Route::AdminTrials
            | Route::AdminUsers
            | Route::AdminSubscriptions
            | Route::AdminSettings
            | Route::AdminQuota => RouteKind::PlatformAdmin,
        }
    }

    /// Exact match after dropping any query string, fragment and trailing slash
    pub fn from_path(path: &str) -> Option<Self> {
        let path = normalize(path);
        Self::iter().find(|route| route.path() == path)
    }
}

/// Path plus query parameters, used for links coming from outside the client
/// (such as the Google OAuth callback)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Location {
    pub path: String,
    pub query: Vec<(String, String)>,
}

impl Location {
    pub fn parse(value: &str) -> Self {
        let without_fragment = value.split('#').next().unwrap_or_default();
        let (path, query) = match without_fragment.split_once('?') {
            Some((path, query)) => (path, query),
            None => (without_fragment, ""),
        };
        // Decoded the same way a browser decodes a query string
        let query = url::form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect();
        Self {
            path: normalize(path).to_string(),
            query,
        }
    }

    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

fn normalize(path: &str) -> &str {
    let path = path.split(&['?', '#'][..]).next().unwrap_or_default();
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

/// Paths from earlier versions of the product that still need to work
pub fn legacy_redirect(path: &str) -> Option<String> {
    let path = normalize(path);
    match path {
        "/dashboard" => return Some(Route::Dashboard.path().to_string()),
        "/vault" => return Some(Route::Credentials.path().to_string()),
        "/sync" => return Some(Route::GoogleSync.path().to_string()),
        "/admin" => return Some(Route::AdminDashboard.path().to_string()),
        _ => {}
    }
    if let Some(rest) = path.strip_prefix("/dashboard/") {
        return Some(format!("/{rest}"));
    }
    if let Some(rest) = path.strip_prefix("/admin/") {
        return Some(format!("{}/{rest}", Route::AdminDashboard.path()));
    }
    None
}

pub fn protected_gate(state: GateState) -> GateDecision {
    if state.is_loading {
        GateDecision::Placeholder
    } else if state.is_authenticated {
        GateDecision::Render
    } else {
        GateDecision::Redirect(Route::LANDING)
    }
}

pub fn public_only_gate(state: GateState) -> GateDecision {
    if state.is_loading {
        GateDecision::Placeholder
    } else if state.is_authenticated {
        GateDecision::Redirect(Route::TENANT_ROOT)
    } else {
        GateDecision::Render
    }
}

/// Logged in users without the flag go to the tenant dashboard, not an error
pub fn platform_admin_gate(state: GateState) -> GateDecision {
    if state.is_loading {
        GateDecision::Placeholder
    } else if !state.is_authenticated {
        GateDecision::Redirect(Route::LANDING)
    } else if !state.is_platform_admin {
        GateDecision::Redirect(Route::TENANT_ROOT)
    } else {
        GateDecision::Render
    }
}

pub fn gate_for(route: Route, state: GateState) -> GateDecision {
    match route.kind() {
        RouteKind::Public => GateDecision::Render,
        RouteKind::PublicOnly => public_only_gate(state),
        RouteKind::Protected => protected_gate(state),
        RouteKind::PlatformAdmin => platform_admin_gate(state),
    }
}

/// Applies legacy redirects then gates until a route can be shown
///
/// Unknown paths go to the landing page
#[instrument(ret)]
pub fn resolve(path: &str, state: GateState) -> Resolution {
    let path = legacy_redirect(path).unwrap_or_else(|| path.to_string());
    let mut route = Route::from_path(&path).unwrap_or(Route::LANDING);
    for _ in 0..=CLIENT_MAX_REDIRECTS {
        match gate_for(route, state) {
            GateDecision::Placeholder => return Resolution::Placeholder,
            GateDecision::Render => return Resolution::Show(route),
            GateDecision::Redirect(next) => route = next,
        }
    }
    error!(?route, ?state, "too many redirects, falling back to landing page");
    Resolution::Show(Route::LANDING)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    const LOADING: GateState = GateState {
        is_authenticated: false,
        is_loading: true,
        is_platform_admin: false,
    };
    const LOADING_AUTHENTICATED: GateState = GateState {
        is_authenticated: true,
        is_loading: true,
        is_platform_admin: true,
    };
    const ANONYMOUS: GateState = GateState {
        is_authenticated: false,
        is_loading: false,
        is_platform_admin: false,
    };
    const TENANT_USER: GateState = GateState {
        is_authenticated: true,
        is_loading: false,
        is_platform_admin: false,
    };
    const PLATFORM_ADMIN: GateState = GateState {
        is_authenticated: true,
        is_loading: false,
        is_platform_admin: true,
    };

    #[rstest]
    #[case::loading(LOADING, GateDecision::Placeholder)]
    #[case::loading_authenticated(LOADING_AUTHENTICATED, GateDecision::Placeholder)]
    #[case::anonymous(ANONYMOUS, GateDecision::Redirect(Route::Landing))]
    #[case::tenant_user(TENANT_USER, GateDecision::Render)]
    fn protected(#[case] state: GateState, #[case] expected: GateDecision) {
        assert_eq!(protected_gate(state), expected);
    }

    #[rstest]
    #[case::loading(LOADING, GateDecision::Placeholder)]
    #[case::anonymous(ANONYMOUS, GateDecision::Render)]
    #[case::tenant_user(TENANT_USER, GateDecision::Redirect(Route::Dashboard))]
    #[case::platform_admin(PLATFORM_ADMIN, GateDecision::Redirect(Route::Dashboard))]
    fn public_only(#[case] state: GateState, #[case] expected: GateDecision) {
        assert_eq!(public_only_gate(state), expected);
    }

    #[rstest]
    #[case::loading(LOADING_AUTHENTICATED, GateDecision::Placeholder)]
    #[case::anonymous(ANONYMOUS, GateDecision::Redirect(Route::Landing))]
    #[case::tenant_user(TENANT_USER, GateDecision::Redirect(Route::Dashboard))]
    #[case::platform_admin(PLATFORM_ADMIN, GateDecision::Render)]
    fn platform_admin(#[case] state: GateState, #[case] expected: GateDecision) {
        assert_eq!(platform_admin_gate(state), expected);
    }

    #[test]
    fn redirect_targets_are_distinct() {
        assert_eq!(Route::LANDING.path(), "/home");
        assert_eq!(Route::TENANT_ROOT.path(), "/");
    }

    #[test]
    fn every_path_round_trips() {
        for route in Route::iter() {
            assert_eq!(Route::from_path(route.path()), Some(route), "{route:?}");
        }
    }

    #[test]
    fn paths_are_unique() {
        let mut paths: Vec<_> = Route::iter().map(|x| x.path()).collect();
        let count = paths.len();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), count);
    }

    #[rstest]
    #[case::trailing_slash("/clients/", Some(Route::Clients))]
    #[case::query("/google-sync?connected=true", Some(Route::GoogleSync))]
    #[case::root("/", Some(Route::Dashboard))]
    #[case::empty("", Some(Route::Dashboard))]
    #[case::unknown("/nope", None)]
    #[case::prefix_only("/platform-admin/users/7", None)]
    fn from_path(#[case] path: &str, #[case] expected: Option<Route>) {
        assert_eq!(Route::from_path(path), expected);
    }

    #[rstest]
    #[case::dashboard("/dashboard", Some("/"))]
    #[case::dashboard_child("/dashboard/tasks", Some("/tasks"))]
    #[case::dashboard_child_slash("/dashboard/clients/", Some("/clients"))]
    #[case::vault("/vault", Some("/credentials"))]
    #[case::sync("/sync", Some("/google-sync"))]
    #[case::admin("/admin", Some("/platform-admin"))]
    #[case::admin_child("/admin/trials", Some("/platform-admin/trials"))]
    #[case::current("/tasks", None)]
    fn legacy(#[case] path: &str, #[case] expected: Option<&str>) {
        assert_eq!(legacy_redirect(path).as_deref(), expected);
    }

    #[rstest]
    #[case::loading_anything(LOADING, "/tasks", Resolution::Placeholder)]
    #[case::public_while_loading(LOADING, "/terms", Resolution::Show(Route::Terms))]
    #[case::anonymous_protected(ANONYMOUS, "/tasks", Resolution::Show(Route::Landing))]
    #[case::anonymous_admin(ANONYMOUS, "/platform-admin", Resolution::Show(Route::Landing))]
    #[case::anonymous_login(ANONYMOUS, "/login", Resolution::Show(Route::Login))]
    #[case::user_login(TENANT_USER, "/login", Resolution::Show(Route::Dashboard))]
    #[case::user_admin(TENANT_USER, "/platform-admin/users", Resolution::Show(Route::Dashboard))]
    #[case::admin_admin(PLATFORM_ADMIN, "/platform-admin/users", Resolution::Show(Route::AdminUsers))]
    #[case::legacy_then_gate(ANONYMOUS, "/dashboard/tasks", Resolution::Show(Route::Landing))]
    #[case::legacy_admin(PLATFORM_ADMIN, "/admin/quota", Resolution::Show(Route::AdminQuota))]
    #[case::unknown(TENANT_USER, "/does-not-exist", Resolution::Show(Route::Landing))]
    fn resolve_path(#[case] state: GateState, #[case] path: &str, #[case] expected: Resolution) {
        assert_eq!(resolve(path, state), expected);
    }

    #[test]
    fn location_parse() {
        // Act
        let actual = Location::parse("/google-sync/?connected=true&email=a%40b.co#top");

        // Assert
        assert_eq!(actual.path, "/google-sync");
        assert_eq!(actual.query_value("connected"), Some("true"));
        assert_eq!(actual.query_value("email"), Some("a@b.co"));
        assert_eq!(actual.query_value("error"), None);
    }

    #[rstest]
    #[case::percent_space("?error=access%20denied", "access denied")]
    #[case::plus_space("?error=access+denied", "access denied")]
    #[case::underscore_kept("?error=access_denied", "access_denied")]
    #[case::no_value("?error", "")]
    #[case::empty_pairs_skipped("?&&error=x&", "x")]
    fn location_query_is_decoded(#[case] query: &str, #[case] expected: &str) {
        // Act
        let actual = Location::parse(&format!("/google-sync{query}"));

        // Assert
        assert_eq!(actual.query_value("error"), Some(expected));
    }
}
