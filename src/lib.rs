//! biodiv-connect - Biodiversity service connectors for workflow-automation hosts.
//!
//! Each connector (BOLD, GloBI, GlobalNames, Wikidata) is a static `ServiceConfig` table.
//! One generic engine compiles host field values into a GET request, runs it,
//! and unwraps the JSON envelope into the payload a workflow step needs.

// region:    --- Modules

mod error;

pub use error::{Error, Result};

pub mod client;
pub mod connector;
pub mod engine;
pub mod resolver;
pub mod webc;

// -- Flatten
pub use client::{Client, ClientBuilder, ClientConfig, ServiceTarget};
pub use connector::ConnectorKind;
pub use engine::{FieldValues, Item, RequestSpec};

// endregion: --- Modules
