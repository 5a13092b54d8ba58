use crate::connector::ConnectorKind;
use crate::webc;
use derive_more::{Display, From};
use value_ext::JsonValueExtError;

/// biodiv-connect main Result type alias (with biodiv_connect::Error)
pub type Result<T> = core::result::Result<T, Error>;

/// Main biodiv-connect error
#[derive(Debug, From, Display)]
#[allow(missing_docs)]
pub enum Error {
	// -- Connector Resolution
	#[display("Unknown connector '{name}'. Expected one of: bold, globi, globalnames, wikidata")]
	UnknownConnector { name: String },

	// -- Request Compilation
	#[display("Resource '{resource}' is not supported by the {connector} connector")]
	UnsupportedResource { connector: ConnectorKind, resource: String },

	#[display("Operation '{operation}' is not supported by the {connector} connector (only 'get')")]
	UnsupportedOperation { connector: ConnectorKind, operation: String },

	#[display("Field '{field}' is required in the URL path of {connector} resource '{resource}' but has no value")]
	MissingPathParameter {
		connector: ConnectorKind,
		resource: String,
		field: &'static str,
	},

	#[display("Invalid request URL '{url}': {cause}")]
	InvalidUrl { url: String, cause: String },

	// -- Response Unwrapping
	#[display(
		"Unexpected response shape from {connector} resource '{resource}': expected {expected} at '{path}'.\nBody: {body}"
	)]
	UnexpectedResponseShape {
		connector: ConnectorKind,
		resource: String,
		/// The unwrap path walked so far, including the failing step (e.g. `/results/bindings/0`).
		path: String,
		expected: &'static str,
		/// The value found at the parent of the failing step.
		body: serde_json::Value,
	},

	// -- Web Call
	#[display("Web call failed for '{url}'.\nCause: {webc_error}")]
	WebCall { url: String, webc_error: webc::Error },

	// -- Credentials
	#[display("Environment variable '{name}' is missing or empty")]
	MissingEnvVar { name: &'static str },

	// -- Externals
	#[display("{_0}")]
	#[from]
	JsonValueExt(JsonValueExtError),

	#[display("{_0}")]
	#[from]
	SerdeJson(serde_json::Error),
}

// region:    --- Error Boilerplate

impl std::error::Error for Error {}

// endregion: --- Error Boilerplate
