use officehub_client_core::{
    routing::resolve, Client, Location, MemoryStorage, Resolution, Route, SessionStorage,
    SessionStore, UiCallBack,
};
use officehub_shared::{const_config::client::CLIENT_REPAINT_INTERVAL, uac::LoginResponse};
use tracing::{info, instrument, warn};

use crate::notifications::Notifications;
use crate::pages::Pages;
use crate::shell;
use crate::StartupConfig;

const SESSION_EXPIRED_MESSAGE: &str = "Your session has expired. Please log in again.";

/// We derive Deserialize/Serialize so we can persist app state on shutdown.
#[derive(Debug, Default, serde::Deserialize, serde::Serialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct OfficeApp {
    data_shared: DataShared,
    pages: Pages,
    /// Route whose page was rendered on the last frame
    #[serde(skip)]
    shown_route: Option<Route>,
}

#[derive(Debug, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct DataShared {
    #[serde(skip)]
    pub session: SessionStore<Box<dyn SessionStorage>>,
    #[serde(skip)]
    pub client: Client,
    #[serde(skip)]
    pub notifications: Notifications,
    /// Where the user asked to go, including any query
    #[serde(skip)]
    location: Location,
    /// Restored on the next start when no other location is given
    last_path: String,
}

impl Default for DataShared {
    fn default() -> Self {
        Self {
            session: SessionStore::new(Box::new(MemoryStorage::new())),
            client: Default::default(),
            notifications: Default::default(),
            location: Location::parse(Route::LANDING.path()),
            last_path: Route::TENANT_ROOT.path().to_string(),
        }
    }
}

impl DataShared {
    pub fn navigate(&mut self, route: Route) {
        self.navigate_to_path(route.path());
    }

    #[instrument(skip(self))]
    pub fn navigate_to_path(&mut self, path: &str) {
        self.location = Location::parse(path);
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Starts the session returned by a successful login or signup
    #[instrument(skip(self, response))]
    pub fn complete_login(&mut self, response: LoginResponse) {
        let LoginResponse {
            tokens,
            user,
            organization,
        } = response;
        info!(user_id = %user.id, "login completed");
        self.client.set_access_token(Some(tokens.access.clone()));
        self.session.login(user, tokens, organization);
        self.navigate(Route::TENANT_ROOT);
    }

    /// Ends the session locally and tells the server without waiting for it
    #[instrument(skip(self))]
    pub fn logout(&mut self) {
        if self.session.is_authenticated() {
            self.client.logout_no_wait();
        }
        self.client.set_access_token(None);
        self.session.logout();
        self.navigate(Route::LANDING);
    }

    /// Reports a failed request to the user
    pub fn notify_error(&mut self, message: impl Into<String>) {
        self.notifications.push_error(message);
    }

    fn check_session_rejected(&mut self) {
        if self.client.take_session_rejected() && self.session.is_authenticated() {
            warn!("server rejected the session, logging out");
            self.logout();
            self.notifications.push_error(SESSION_EXPIRED_MESSAGE);
        }
    }
}

impl eframe::App for OfficeApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        info!("Saving with key: {}", eframe::APP_KEY);
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    /// Called each time the UI needs repainting, which may be many times per
    /// second. Put your widgets into a `SidePanel`, `TopPanel`,
    /// `CentralPanel`, `Window` or `Area`.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.data_shared.check_session_rejected();

        let gate_state = self.data_shared.session.gate_state();
        match resolve(&self.data_shared.location.path, gate_state) {
            Resolution::Placeholder => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.centered_and_justified(|ui| ui.spinner());
                });
            }
            Resolution::Show(route) => self.show_route(ctx, route),
        }

        self.data_shared.notifications.show(ctx);

        if let Some(route) = self.shown_route {
            if self.pages.has_running_timer(route) {
                ctx.request_repaint_after(CLIENT_REPAINT_INTERVAL.into());
            }
        }
    }
}

impl OfficeApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, startup: StartupConfig) -> Self {
        // Load previous app state (if any).
        // Note that you must enable the `persistence` feature for this to work.
        let mut result: Self = if let Some(storage) = cc.storage {
            info!("Storage found. Loading...");
            match eframe::get_value(storage, eframe::APP_KEY) {
                Some(value) => {
                    info!("Loaded succeeded");
                    value
                }
                None => {
                    warn!("Load failed");
                    Default::default()
                }
            }
        } else {
            info!("No storage found");
            Default::default()
        };
        result.start(startup);
        result
    }

    fn start(&mut self, startup: StartupConfig) {
        let StartupConfig {
            server_address,
            storage,
            initial_path,
        } = startup;
        let data_shared = &mut self.data_shared;
        data_shared.client = Client::new(server_address);
        data_shared.session = SessionStore::new(storage);
        data_shared.session.initialize();
        data_shared
            .client
            .set_access_token(data_shared.session.access_token().cloned());
        let path = initial_path.unwrap_or_else(|| data_shared.last_path.clone());
        data_shared.navigate_to_path(&path);
    }

    fn show_route(&mut self, ctx: &egui::Context, route: Route) {
        if self.data_shared.location.path != route.path() {
            // Redirected, keep what is displayed in sync
            self.data_shared.navigate(route);
        }
        if self.shown_route != Some(route) {
            if let Some(previous) = self.shown_route {
                self.pages.leave(previous);
            }
            info!(?route, "showing route");
            self.shown_route = Some(route);
            sync_browser_url(route);
            self.data_shared.last_path = route.path().to_string();
        }

        shell::show(ctx, route, &mut self.data_shared, |ui, data_shared| {
            self.pages.show(route, ui, data_shared)
        });
    }
}

#[cfg(target_arch = "wasm32")]
fn sync_browser_url(route: Route) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        return;
    };
    officehub_shared::log_err_as_error!(history.replace_state_with_url(
        &eframe::wasm_bindgen::JsValue::NULL,
        "",
        Some(route.path())
    ));
}

#[cfg(not(target_arch = "wasm32"))]
fn sync_browser_url(_route: Route) {}

#[inline]
pub fn wake_fn(ctx: egui::Context) -> impl UiCallBack {
    move || ctx.request_repaint()
}
