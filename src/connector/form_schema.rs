//! Declarative form schema a host renders for each connector.
//!
//! These types carry no runtime behavior. They are serialized as-is for the host UI.

use serde::Serialize;

/// The form a host renders for one connector (resource selector, operation selector, fields).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSchema {
	pub name: &'static str,
	pub display_name: &'static str,
	pub description: &'static str,
	pub resources: Vec<OptionSpec>,
	pub operations: Vec<OptionSpec>,
	pub fields: &'static [FieldSpec],
}

impl FormSchema {
	/// The fields displayed when `resource` is selected.
	pub fn fields_for(&self, resource: &str) -> impl Iterator<Item = &'static FieldSpec> {
		self.fields.iter().filter(move |f| f.shows_for(resource))
	}
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionSpec {
	pub name: &'static str,
	pub value: &'static str,
	pub description: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSpec {
	/// The field id, as used by the parameter lookup.
	pub name: &'static str,
	pub display_name: &'static str,
	pub kind: FieldKind,
	pub default: DefaultValue,
	pub required: bool,
	pub description: &'static str,
	/// Resources this field is displayed for. Empty means all of them.
	pub show_for: &'static [&'static str],
}

impl FieldSpec {
	#[must_use]
	pub fn shows_for(&self, resource: &str) -> bool {
		self.show_for.is_empty() || self.show_for.contains(&resource)
	}
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(tag = "type", content = "options", rename_all = "camelCase")]
pub enum FieldKind {
	String,
	Boolean,
	Options(&'static [OptionSpec]),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DefaultValue {
	None,
	Str(&'static str),
	Bool(bool),
}

// region:    --- Tests


// endregion: --- Tests
