//! Stores functionality that should be shared between different clients
//! NB: The assumption is made that the async runtime has already been started
//! before any functions from this library which send requests are called

#![warn(unused_crate_dependencies)]

mod client;
pub mod errors;
pub mod navigation;
pub mod routing;
pub mod session;
pub mod timer;

pub use client::{Client, UiCallBack};
pub use reqwest::StatusCode;
pub use errors::{error_message, user_message, ApiError, ApiErrorBody};
pub use navigation::{visible_menu, MenuItem, MENU_ITEMS};
pub use routing::{GateDecision, GateState, Location, Resolution, Route, RouteKind};
pub use session::{MemoryStorage, Session, SessionStorage, SessionStore, StorageError};
pub use timer::TaskTimer;

#[cfg(not(target_arch = "wasm32"))]
pub use session::FileStorage;

#[cfg(target_arch = "wasm32")]
pub use session::LocalStorage;
