//! The generic connector engine: request compiler, response unwrapper and batch driver.
//! All per-service behavior comes from the `connector::ServiceConfig` tables.

// region:    --- Modules

mod batch_driver;
mod field_values;
mod http_executor;
mod item;
mod request_compiler;
mod response_unwrapper;

pub use batch_driver::*;
pub use field_values::*;
pub use http_executor::*;
pub use item::*;
pub use request_compiler::*;
pub use response_unwrapper::*;

// endregion: --- Modules
