//! Resolver constructs used to decide where a connector request goes.

// region:    --- Modules

mod endpoint;

pub use endpoint::*;

// endregion: --- Modules
