//! Settings that only need to be known while the app is being created

use officehub_client_core::SessionStorage;
use tracing::info;

pub struct StartupConfig {
    pub server_address: String,
    pub storage: Box<dyn SessionStorage>,
    /// Path (and query) the user navigated to, if any
    pub initial_path: Option<String>,
}

impl StartupConfig {
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_cli(cli: &crate::cli::Cli) -> Self {
        let storage_path = cli.storage_path();
        info!(?storage_path, server_address = cli.server_address, "native startup");
        Self {
            server_address: cli.server_address.clone(),
            storage: Box::new(officehub_client_core::FileStorage::open(storage_path)),
            initial_path: None,
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn from_browser() -> Self {
        use officehub_shared::const_config::client::CLIENT_DEFAULT_SERVER_ADDRESS;

        let initial_path = web_sys::window().and_then(|window| {
            let location = window.location();
            let path = location.pathname().ok()?;
            let search = location.search().unwrap_or_default();
            Some(format!("{path}{search}"))
        });
        info!(?initial_path, "web startup");
        Self {
            server_address: CLIENT_DEFAULT_SERVER_ADDRESS.to_string(),
            storage: Box::new(officehub_client_core::LocalStorage::default()),
            initial_path,
        }
    }
}
