use crate::Result;
use crate::connector::{ConnectorKind, ResourceConfig};
use crate::resolver::Endpoint;

/// A `ServiceTarget` represents the destination of a connector call.
///
/// This structure contains:
/// - `connector`: The service being called.
/// - `resource`: The resource of that service (e.g. `specimen`, `taxon`).
/// - `endpoint`: The base URL the resource path is joined to.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ServiceTarget {
	pub connector: ConnectorKind,
	pub resource: String,
	pub endpoint: Endpoint,
}

impl ServiceTarget {
	/// Target a resource at its default endpoint.
	///
	/// Fails with `Error::UnsupportedResource` if the connector does not know the resource.
	pub fn new(connector: ConnectorKind, resource: impl Into<String>) -> Result<Self> {
		let resource = resource.into();
		let endpoint = Endpoint::from_static(connector.service_config().resource(&resource)?.base_url);
		Ok(Self {
			connector,
			resource,
			endpoint,
		})
	}

	#[must_use]
	pub fn with_endpoint(mut self, endpoint: Endpoint) -> Self {
		self.endpoint = endpoint;
		self
	}

	pub fn resource_config(&self) -> Result<&'static ResourceConfig> {
		self.connector.service_config().resource(&self.resource)
	}
}
