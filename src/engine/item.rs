use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One unit of host data flowing in or out of a connector execution.
///
/// Items carry no identity beyond their position in the batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Item {
	pub json: Value,
}

impl Item {
	#[must_use]
	pub const fn new(json: Value) -> Self {
		Self { json }
	}

	/// Wrap each result value as one output item, keeping the order.
	#[must_use]
	pub fn from_values(values: Vec<Value>) -> Vec<Item> {
		values.into_iter().map(Item::new).collect()
	}
}

impl From<Value> for Item {
	fn from(json: Value) -> Self {
		Self { json }
	}
}
