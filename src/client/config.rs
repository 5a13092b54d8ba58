use crate::connector::ConnectorKind;
use crate::resolver::Endpoint;
use std::collections::HashMap;

/// The client configuration used in the configuration builder stage.
#[derive(Debug, Default, Clone)]
pub struct ClientConfig {
	/// Endpoint overrides, per (connector, resource).
	endpoints: HashMap<(ConnectorKind, String), Endpoint>,
	/// Extra headers sent with every request (e.g. a `User-Agent` identifying the host).
	headers: Vec<(String, String)>,
}

/// Chainable setters
impl ClientConfig {
	/// Replace the base URL of one connector resource (e.g. a mirror or a local test server).
	#[must_use]
	pub fn with_endpoint(mut self, connector: ConnectorKind, resource: impl Into<String>, endpoint: Endpoint) -> Self {
		self.endpoints.insert((connector, resource.into()), endpoint);
		self
	}

	#[must_use]
	pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.headers.push((name.into(), value.into()));
		self
	}
}

/// Getters
impl ClientConfig {
	#[must_use]
	pub fn endpoint(&self, connector: ConnectorKind, resource: &str) -> Option<&Endpoint> {
		self.endpoints.get(&(connector, resource.to_string()))
	}

	#[must_use]
	pub fn headers(&self) -> &[(String, String)] {
		&self.headers
	}
}
