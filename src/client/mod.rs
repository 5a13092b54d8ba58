//! The `Client` ties the connector tables, the engine and the web client together.
//! Hosts typically hold one `Client` and call `exec_batch` per workflow step execution.

// region:    --- Modules

mod builder;
mod client_impl;
mod client_types;
mod config;
mod service_target;

pub use builder::*;
pub use client_types::*;
pub use config::*;
pub use service_target::*;

// endregion: --- Modules
