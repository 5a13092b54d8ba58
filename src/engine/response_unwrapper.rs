//! Descends from a response envelope to the payload a workflow step wants.

use crate::connector::{ConnectorKind, PathStep};
use crate::{Error, Result};
use serde_json::Value;

/// Unwrap `body` along the unwrap path of `resource`.
///
/// Fails with `Error::UnsupportedResource` for unknown resources, and with
/// `Error::UnexpectedResponseShape` when a key or index of the path is missing
/// or applied to the wrong JSON type.
pub fn unwrap_response(connector: ConnectorKind, resource: &str, body: Value) -> Result<Value> {
	let resource_config = connector.service_config().resource(resource)?;

	let mut value = body;
	let mut walked = String::new();

	for step in resource_config.unwrap_path {
		walked.push('/');
		value = match (*step, value) {
			(PathStep::Key(key), Value::Object(mut map)) => {
				walked.push_str(key);
				match map.remove(key) {
					Some(child) => child,
					None => {
						return Err(shape_error(connector, resource, walked, "object key", Value::Object(map)));
					}
				}
			}
			(PathStep::Index(idx), Value::Array(mut values)) => {
				walked.push_str(&idx.to_string());
				if idx < values.len() {
					values.swap_remove(idx)
				} else {
					return Err(shape_error(connector, resource, walked, "array index", Value::Array(values)));
				}
			}
			(PathStep::Key(key), other) => {
				walked.push_str(key);
				return Err(shape_error(connector, resource, walked, "object", other));
			}
			(PathStep::Index(idx), other) => {
				walked.push_str(&idx.to_string());
				return Err(shape_error(connector, resource, walked, "array", other));
			}
		};
	}

	Ok(value)
}

fn shape_error(connector: ConnectorKind, resource: &str, path: String, expected: &'static str, body: Value) -> Error {
	Error::UnexpectedResponseShape {
		connector,
		resource: resource.to_string(),
		path,
		expected,
		body,
	}
}

// region:    --- Tests


// endregion: --- Tests
