#![warn(unused_crate_dependencies)]

#[cfg(target_arch = "wasm32")]
mod suppress_wasm_warnings {
    // Only used in binary and triggers unused warning
    use wasm_bindgen_futures as _;
}

mod app;
pub mod background_worker;
#[cfg(not(target_arch = "wasm32"))]
pub mod cli;
mod notifications;
mod pages;
mod shell;
mod startup;
pub mod tracing;
mod ui_helpers;

pub use app::{DataShared, OfficeApp};
pub use pages::DisplayablePage;
pub use startup::StartupConfig;

/// Function is here to ensure lib also uses the log create to prevent the warning that it is not used
#[cfg(target_arch = "wasm32")]
pub fn wasm_log_level() -> log::LevelFilter {
    log::LevelFilter::Debug
}
