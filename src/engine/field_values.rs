//! Field values supplied by the host, and the lookups that produce them per item.

use crate::connector::{PathSegment, ResourceConfig};
use crate::engine::Item;
use serde_json::{Map, Value};
use std::collections::HashMap;
use value_ext::JsonValueExt;

// region:    --- FieldValues

/// The field id -> value mapping for one item.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldValues {
	inner: HashMap<String, Value>,
}

/// Constructors
impl FieldValues {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Chainable insert.
	#[must_use]
	pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
		self.inner.insert(field.into(), value.into());
		self
	}

	/// Build from a JSON object. Any other JSON value yields empty field values.
	#[must_use]
	pub fn from_json(value: Value) -> Self {
		match value {
			Value::Object(map) => map.into_iter().collect(),
			_ => Self::default(),
		}
	}
}

/// Accessors
impl FieldValues {
	pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
		self.inner.insert(field.into(), value.into());
	}

	#[must_use]
	pub fn get(&self, field: &str) -> Option<&Value> {
		self.inner.get(field)
	}

	/// The value rendered as a request string, or `None` when empty or undefined.
	#[must_use]
	pub fn rendered(&self, field: &str) -> Option<String> {
		self.get(field).and_then(render_value)
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.inner.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.inner.is_empty()
	}
}

impl<K: Into<String>> FromIterator<(K, Value)> for FieldValues {
	fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
		Self {
			inner: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
		}
	}
}

impl From<HashMap<String, Value>> for FieldValues {
	fn from(inner: HashMap<String, Value>) -> Self {
		Self { inner }
	}
}

impl From<Map<String, Value>> for FieldValues {
	fn from(map: Map<String, Value>) -> Self {
		map.into_iter().collect()
	}
}

/// Render a field value as it goes on the wire.
///
/// - strings as-is, `None` when empty
/// - booleans as `true`/`false`, numbers as their JSON text
/// - arrays joined with `,`, `None` when empty
/// - objects as compact JSON
/// - `null` is `None`
#[must_use]
pub fn render_value(value: &Value) -> Option<String> {
	match value {
		Value::Null => None,
		Value::String(s) if s.is_empty() => None,
		Value::String(s) => Some(s.clone()),
		Value::Bool(b) => Some(b.to_string()),
		Value::Number(n) => Some(n.to_string()),
		Value::Array(values) => {
			let parts: Vec<String> = values.iter().filter_map(render_value).collect();
			if parts.is_empty() { None } else { Some(parts.join(",")) }
		}
		Value::Object(_) => Some(value.to_string()),
	}
}

// endregion: --- FieldValues

// region:    --- ParameterLookup

/// The host's parameter lookup, keyed by (field id, item index).
pub trait ParameterLookup {
	fn get_parameter(&self, field: &str, item_index: usize) -> Option<Value>;

	/// Collect every field the resource reads (path placeholders and bindings) for one item.
	fn field_values(&self, resource: &ResourceConfig, item_index: usize) -> FieldValues {
		let path_fields = resource.path.iter().filter_map(|segment| match segment {
			PathSegment::Field { field, .. } => Some(*field),
			PathSegment::Literal(_) => None,
		});
		let bound_fields = resource.bindings.iter().map(|b| b.field);

		path_fields
			.chain(bound_fields)
			.filter_map(|field| self.get_parameter(field, item_index).map(|value| (field, value)))
			.collect()
	}
}

/// Same field values for every item.
impl ParameterLookup for FieldValues {
	fn get_parameter(&self, field: &str, _item_index: usize) -> Option<Value> {
		self.get(field).cloned()
	}
}

/// One `FieldValues` per item, by position.
impl ParameterLookup for [FieldValues] {
	fn get_parameter(&self, field: &str, item_index: usize) -> Option<Value> {
		self.get(item_index).and_then(|values| values.get(field)).cloned()
	}
}

impl ParameterLookup for Vec<FieldValues> {
	fn get_parameter(&self, field: &str, item_index: usize) -> Option<Value> {
		self.as_slice().get_parameter(field, item_index)
	}
}

/// Reads the fields from the input items themselves (`item.json.<field>`),
/// falling back to `defaults` when an item does not carry the field.
#[derive(Debug, Clone)]
pub struct ItemFields<'a> {
	items: &'a [Item],
	defaults: FieldValues,
}

impl<'a> ItemFields<'a> {
	#[must_use]
	pub fn new(items: &'a [Item]) -> Self {
		Self {
			items,
			defaults: FieldValues::default(),
		}
	}

	#[must_use]
	pub fn with_defaults(mut self, defaults: FieldValues) -> Self {
		self.defaults = defaults;
		self
	}
}

impl ParameterLookup for ItemFields<'_> {
	fn get_parameter(&self, field: &str, item_index: usize) -> Option<Value> {
		self.items
			.get(item_index)
			.and_then(|item| item.json.x_get::<Value>(field).ok())
			.or_else(|| self.defaults.get(field).cloned())
	}
}

// endregion: --- ParameterLookup

// region:    --- Tests


// endregion: --- Tests
