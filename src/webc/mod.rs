//! The web client layer: a reqwest-backed `HttpExecutor` and its error type.

// region:    --- Modules

mod error;
mod web_client;

pub use self::error::Error;
pub(crate) use self::error::Result;
pub use web_client::*;

// endregion: --- Modules
