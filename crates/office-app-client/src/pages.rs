use officehub_client_core::Route;
use tracing::info;

use crate::DataShared;

pub mod admin;
pub mod clients;
pub mod credentials;
pub mod dashboard;
pub mod data_state;
pub mod google_sync;
pub mod help;
pub mod landing;
pub mod legal;
pub mod login;
mod macros;
pub mod password_reset;
pub mod profile;
pub mod reference;
pub mod reports;
pub mod settings;
pub mod signup;
pub mod tasks;

mod private {
    /// Used to make some trait methods private
    pub struct Token;
}

/// Trait for types that can be treated as pages to display
///
/// It uses Default and serde Traits as super traits to ensure all these types
/// implement these traits
pub trait DisplayablePage: Default + serde::Serialize + serde::de::DeserializeOwned {
    /// Route the page is shown for
    fn route() -> Route;

    /// Displays the page
    fn show(&mut self, ui: &mut egui::Ui, data_shared: &mut DataShared);

    /// Clears anything loaded from the server so it is fetched again when the
    /// page is next shown
    fn reset_to_default(&mut self, _: private::Token);

    fn title(&self) -> &'static str {
        Self::route().title()
    }

    fn leave_page(&mut self) {
        info!("Leave Page {}", self.title());
        self.reset_to_default(private::Token {});
    }
}

/// State of every page, only the one for the current route is displayed
#[derive(Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Pages {
    landing: landing::UiLanding,
    login: login::UiLogin,
    signup: signup::UiSignup,
    password_reset: password_reset::UiPasswordReset,
    privacy: legal::UiPrivacy,
    terms: legal::UiTerms,
    cookies: legal::UiCookies,
    dashboard: dashboard::UiDashboard,
    clients: clients::UiClients,
    tasks: tasks::UiTasks,
    reports: reports::UiReports,
    work_types: reference::UiWorkTypes,
    employees: reference::UiEmployees,
    templates: reference::UiTemplates,
    credentials: credentials::UiCredentials,
    google_sync: google_sync::UiGoogleSync,
    settings: settings::UiSettings,
    profile: profile::UiProfile,
    help: help::UiHelp,
    admin_dashboard: admin::UiAdminDashboard,
    admin_organizations: admin::UiAdminOrganizations,
    admin_trials: admin::UiAdminTrials,
    admin_users: admin::UiAdminUsers,
    admin_subscriptions: admin::UiAdminSubscriptions,
    admin_settings: admin::UiAdminSettings,
    admin_quota: admin::UiAdminQuota,
}

macro_rules! do_on_page {
    ($pages:expr, $route:expr, $page:ident, $body:expr) => {
        match $route {
            Route::Landing => { let $page = &mut $pages.landing; $body }
            Route::Login => { let $page = &mut $pages.login; $body }
            Route::Signup => { let $page = &mut $pages.signup; $body }
            Route::PasswordReset => { let $page = &mut $pages.password_reset; $body }
            Route::Privacy => { let $page = &mut $pages.privacy; $body }
            Route::Terms => { let $page = &mut $pages.terms; $body }
            Route::Cookies => { let $page = &mut $pages.cookies; $body }
            Route::Dashboard => { let $page = &mut $pages.dashboard; $body }
            Route::Clients => { let $page = &mut $pages.clients; $body }
            Route::Tasks => { let $page = &mut $pages.tasks; $body }
            Route::Reports => { let $page = &mut $pages.reports; $body }
            Route::WorkTypes => { let $page = &mut $pages.work_types; $body }
            Route::Employees => { let $page = &mut $pages.employees; $body }
            Route::Templates => { let $page = &mut $pages.templates; $body }
            Route::Credentials => { let $page = &mut $pages.credentials; $body }
            Route::GoogleSync => { let $page = &mut $pages.google_sync; $body }
            Route::Settings => { let $page = &mut $pages.settings; $body }
            Route::Profile => { let $page = &mut $pages.profile; $body }
            Route::Help => { let $page = &mut $pages.help; $body }
            Route::AdminDashboard => { let $page = &mut $pages.admin_dashboard; $body }
            Route::AdminOrganizations => { let $page = &mut $pages.admin_organizations; $body }
            Route::AdminTrials => { let $page = &mut $pages.admin_trials; $body }
            Route::AdminUsers => { let $page = &mut $pages.admin_users; $body }
            Route::AdminSubscriptions => { let $page = &mut $pages.admin_subscriptions; $body }
            Route::AdminSettings => { let $page = &mut $pages.admin_settings; $body }
            Route::AdminQuota => { let $page = &mut $pages.admin_quota; $body }
        }
    };
}

impl Pages {
    pub fn show(&mut self, route: Route, ui: &mut egui::Ui, data_shared: &mut DataShared) {
        do_on_page!(self, route, page, page.show(ui, data_shared))
    }

    pub fn leave(&mut self, route: Route) {
        do_on_page!(self, route, page, page.leave_page())
    }

    /// True if the page for `route` shows a timer that is counting
    pub fn has_running_timer(&self, route: Route) -> bool {
        match route {
            Route::Tasks => self.tasks.has_running_timer(),
            Route::Dashboard => self.dashboard.has_running_timer(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator as _;

    use super::*;

    fn route_of<P: DisplayablePage>(_: &P) -> Route {
        P::route()
    }

    #[test]
    fn every_route_has_its_own_page() {
        let mut pages = Pages::default();
        for route in Route::iter() {
            do_on_page!(pages, route, page, assert_eq!(route_of(page), route))
        }
    }

    #[test]
    fn pages_without_data_have_no_running_timer() {
        let pages = Pages::default();
        for route in Route::iter() {
            assert!(!pages.has_running_timer(route), "{route:?}");
        }
    }
}
