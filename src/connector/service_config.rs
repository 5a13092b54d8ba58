use crate::connector::{ConnectorKind, FieldSpec, FormSchema, OptionSpec};
use crate::{Error, Result};

/// The only operation every connector implements.
pub const OPERATION_GET: &str = "get";

// region:    --- ServiceConfig

/// The static table describing one external service.
///
/// The request compiler, the response unwrapper, and the form schema are all derived from this table.
/// There is no per-service code beyond it.
#[derive(Debug)]
pub struct ServiceConfig {
	pub kind: ConnectorKind,
	pub display_name: &'static str,
	pub description: &'static str,
	pub resources: &'static [ResourceConfig],
	/// The form fields the host renders. Bindings in `resources` refer to these by `FieldSpec::name`.
	pub fields: &'static [FieldSpec],
}

impl ServiceConfig {
	/// Look up a resource by id, failing with `Error::UnsupportedResource` when unknown.
	pub fn resource(&self, resource: &str) -> Result<&'static ResourceConfig> {
		self.resources
			.iter()
			.find(|r| r.name == resource)
			.ok_or_else(|| Error::UnsupportedResource {
				connector: self.kind,
				resource: resource.to_string(),
			})
	}

	/// Ensure the operation is one this service supports.
	pub fn check_operation(&self, operation: &str) -> Result<()> {
		if operation == OPERATION_GET {
			Ok(())
		} else {
			Err(Error::UnsupportedOperation {
				connector: self.kind,
				operation: operation.to_string(),
			})
		}
	}

	/// The declarative form schema for the host UI.
	#[must_use]
	pub fn form_schema(&self) -> FormSchema {
		let resources = self
			.resources
			.iter()
			.map(|r| OptionSpec {
				name: r.display_name,
				value: r.name,
				description: r.description,
			})
			.collect();

		FormSchema {
			name: self.kind.as_lower_str(),
			display_name: self.display_name,
			description: self.description,
			resources,
			operations: vec![OptionSpec {
				name: "Get",
				value: OPERATION_GET,
				description: "Perform a GET request",
			}],
			fields: self.fields,
		}
	}
}

// endregion: --- ServiceConfig

// region:    --- ResourceConfig

/// How one resource of a service maps to an HTTP GET request and back.
#[derive(Debug)]
pub struct ResourceConfig {
	pub name: &'static str,
	pub display_name: &'static str,
	pub description: &'static str,
	/// Default base URL, used unless overridden by the client config or an `BindingTarget::Endpoint` field.
	pub base_url: &'static str,
	/// Path segments appended to the base URL, separated by `/`.
	pub path: &'static [PathSegment],
	/// Query parameters always sent first, in order (e.g. `format=json`).
	pub fixed_query: &'static [(&'static str, &'static str)],
	/// Field bindings, emitted in order after `fixed_query`.
	pub bindings: &'static [FieldBinding],
	/// Steps to descend from the response envelope to the payload. Empty means identity.
	pub unwrap_path: &'static [PathStep],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSegment {
	Literal(&'static str),
	/// Percent-encoded field value. When not `required` and empty, the segment is dropped.
	Field { field: &'static str, required: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldBinding {
	pub field: &'static str,
	pub target: BindingTarget,
}

impl FieldBinding {
	pub const fn query(field: &'static str, param: &'static str) -> Self {
		Self {
			field,
			target: BindingTarget::Query(param),
		}
	}

	pub const fn endpoint(field: &'static str) -> Self {
		Self {
			field,
			target: BindingTarget::Endpoint,
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingTarget {
	/// Sent as a query parameter under this name.
	Query(&'static str),
	/// Replaces the resource base URL (e.g. a SPARQL server).
	Endpoint,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathStep {
	Key(&'static str),
	Index(usize),
}

// endregion: --- ResourceConfig
