use crate::client::client_types::ClientInner;
use crate::client::{Client, ClientConfig};
use crate::connector::ConnectorKind;
use crate::resolver::Endpoint;
use crate::webc::WebClient;
use std::sync::Arc;

/// The builder for the `Client` structure.
///
/// - `ClientBuilder::default()`
/// - `Client::builder()`
#[derive(Debug, Default)]
pub struct ClientBuilder {
	reqwest_client: Option<reqwest::Client>,
	config: Option<ClientConfig>,
}

/// Builder methods
impl ClientBuilder {
	/// Use a custom reqwest client (timeouts, proxies, connection pool).
	#[must_use]
	pub fn with_reqwest(mut self, reqwest_client: reqwest::Client) -> Self {
		self.reqwest_client = Some(reqwest_client);
		self
	}

	/// Set the `ClientConfig` for this builder, replacing any previous one.
	#[must_use]
	pub fn with_config(mut self, config: ClientConfig) -> Self {
		self.config = Some(config);
		self
	}

	#[must_use]
	pub fn with_endpoint(mut self, connector: ConnectorKind, resource: impl Into<String>, endpoint: Endpoint) -> Self {
		let config = self.config.take().unwrap_or_default();
		self.config = Some(config.with_endpoint(connector, resource, endpoint));
		self
	}

	#[must_use]
	pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		let config = self.config.take().unwrap_or_default();
		self.config = Some(config.with_header(name, value));
		self
	}

	/// Build a new immutable `Client`.
	#[must_use]
	pub fn build(self) -> Client {
		let config = self.config.unwrap_or_default();
		let web_client = match self.reqwest_client {
			Some(reqwest_client) => WebClient::from_reqwest_client(reqwest_client),
			None => WebClient::default(),
		}
		.with_default_headers(config.headers().to_vec());

		let inner = ClientInner { web_client, config };
		Client { inner: Arc::new(inner) }
	}
}
