//! Domain types and constants shared by the OfficeHub clients

#![warn(unused_crate_dependencies)]

pub mod const_config;
pub mod envelope;
pub mod errors;
pub mod id;
mod macros;
pub mod req_args;
pub mod resources;
pub mod uac;

pub use envelope::ListEnvelope;

#[cfg(not(target_arch = "wasm32"))]
pub mod telemetry;
