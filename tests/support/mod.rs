//! Some support utilities for the tests
//! Note: Must be imported in each test file

#![allow(unused)] // For test support

use biodiv_connect::resolver::Endpoint;
use biodiv_connect::{Client, ConnectorKind, Item};
use serde_json::Value;
use wiremock::MockServer;

pub type Result<T> = core::result::Result<T, Box<dyn std::error::Error>>;

// region:    --- Tracing

/// Install a test subscriber once. Filter with `RUST_LOG` (e.g. `RUST_LOG=biodiv_connect=debug`).
pub fn init_tracing() {
	let _ = tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
		.with_test_writer()
		.try_init();
}

// endregion: --- Tracing

// region:    --- Common Clients

/// A client whose `resource` endpoints of `connector` point to the mock server.
pub fn client_for_mock(server: &MockServer, connector: ConnectorKind, resources: &[&str]) -> Client {
	resources
		.iter()
		.fold(Client::builder(), |builder, resource| {
			builder.with_endpoint(connector, *resource, Endpoint::from_owned(server.uri()))
		})
		.build()
}

// endregion: --- Common Clients

// region:    --- Seeders

pub fn seed_items(values: Vec<Value>) -> Vec<Item> {
	Item::from_values(values)
}

// endregion: --- Seeders
