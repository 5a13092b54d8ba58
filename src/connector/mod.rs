//! Connectors are static service tables driven by the generic `engine`.
//! Each `ConnectorKind` resolves to one `ServiceConfig`.

// region:    --- Modules

mod connector_kind;
mod connectors;
mod credentials;
mod form_schema;
mod service_config;

pub use connector_kind::*;
pub use credentials::*;
pub use form_schema::*;
pub use service_config::*;

// endregion: --- Modules
