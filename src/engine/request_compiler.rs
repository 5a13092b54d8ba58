//! Turns a (resource, operation, field values) triple into one HTTP GET request.

use crate::client::ServiceTarget;
use crate::connector::{BindingTarget, ConnectorKind, PathSegment};
use crate::engine::FieldValues;
use crate::resolver::Endpoint;
use crate::{Error, Result};

// region:    --- RequestSpec

/// A fully resolved GET request, ready for an `HttpExecutor`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSpec {
	/// Base URL plus path, without the query string. Path segments are already percent-encoded.
	pub url: String,
	pub headers: Vec<(String, String)>,
	/// Ordered query parameters. Values are raw; `to_url` encodes them.
	pub query: Vec<(String, String)>,
}

impl RequestSpec {
	/// The value of the query parameter `name`, if sent.
	#[must_use]
	pub fn query_value(&self, name: &str) -> Option<&str> {
		self.query.iter().find(|(k, _)| k == name).map(|(_, v)| v.as_str())
	}

	/// The final URL, with the query parameters form-encoded.
	pub fn to_url(&self) -> Result<reqwest::Url> {
		let url = if self.query.is_empty() {
			reqwest::Url::parse(&self.url)
		} else {
			reqwest::Url::parse_with_params(&self.url, &self.query)
		};
		url.map_err(|err| Error::InvalidUrl {
			url: self.url.clone(),
			cause: err.to_string(),
		})
	}
}

// endregion: --- RequestSpec

// region:    --- Compile

const ACCEPT_JSON: (&str, &str) = ("Accept", "application/json");

/// Compile a request for `resource` of `connector` at its default endpoint.
pub fn compile_request(
	connector: ConnectorKind,
	resource: &str,
	operation: &str,
	fields: &FieldValues,
) -> Result<RequestSpec> {
	let target = ServiceTarget::new(connector, resource)?;
	compile(&target, operation, fields)
}

/// Compile a request for a resolved `ServiceTarget`.
///
/// - Fails with `Error::UnsupportedResource` / `Error::UnsupportedOperation` for unknown resources or operations.
/// - Emits the fixed query parameters first, then one parameter per bound field with a non-empty value.
/// - Percent-encodes every field value interpolated into the path.
/// - An `Endpoint` bound field with a value replaces `target.endpoint`.
pub fn compile(target: &ServiceTarget, operation: &str, fields: &FieldValues) -> Result<RequestSpec> {
	let config = target.connector.service_config();
	let resource = config.resource(&target.resource)?;
	config.check_operation(operation)?;

	// -- Endpoint
	let endpoint_override = resource.bindings.iter().find_map(|b| match b.target {
		BindingTarget::Endpoint => fields.rendered(b.field).map(Endpoint::from_owned),
		BindingTarget::Query(_) => None,
	});
	let endpoint = endpoint_override.as_ref().unwrap_or(&target.endpoint);

	// -- Path
	let mut segments: Vec<String> = Vec::with_capacity(resource.path.len());
	for segment in resource.path {
		match *segment {
			PathSegment::Literal(literal) => segments.push(literal.to_string()),
			PathSegment::Field { field, required } => match fields.rendered(field) {
				Some(value) => segments.push(urlencoding::encode(&value).into_owned()),
				None if required => {
					return Err(Error::MissingPathParameter {
						connector: config.kind,
						resource: resource.name.to_string(),
						field,
					});
				}
				None => (),
			},
		}
	}
	let url = endpoint.join_segments(&segments);

	// -- Query
	let mut query: Vec<(String, String)> = resource
		.fixed_query
		.iter()
		.map(|(k, v)| ((*k).to_string(), (*v).to_string()))
		.collect();
	for binding in resource.bindings {
		if let BindingTarget::Query(param) = binding.target
			&& let Some(value) = fields.rendered(binding.field)
		{
			query.push((param.to_string(), value));
		}
	}

	Ok(RequestSpec {
		url,
		headers: vec![(ACCEPT_JSON.0.to_string(), ACCEPT_JSON.1.to_string())],
		query,
	})
}

// endregion: --- Compile

// region:    --- Tests


// endregion: --- Tests
