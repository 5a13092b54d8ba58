use crate::connector::ServiceConfig;
use crate::connector::connectors::{bold, global_names, globi, wikidata};
use crate::{Error, Result};
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// `ConnectorKind` is an enum that represents the different external services a connector can talk to.
#[derive(Debug, Clone, Copy, Display, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum ConnectorKind {
	/// Barcode of Life Data System public API.
	Bold,
	/// Global Biotic Interactions.
	Globi,
	/// GlobalNames parser and verifier.
	GlobalNames,
	/// Wikidata SPARQL endpoint (or any compatible `server`).
	Wikidata,
}

/// Serialization implementations
impl ConnectorKind {
	/// All the connector kinds, in display order.
	pub const ALL: &'static [ConnectorKind] = &[Self::Bold, Self::Globi, Self::GlobalNames, Self::Wikidata];

	/// Serialize to a static str
	#[must_use]
	pub const fn as_str(&self) -> &'static str {
		match self {
			Self::Bold => "BOLD",
			Self::Globi => "GloBI",
			Self::GlobalNames => "GlobalNames",
			Self::Wikidata => "Wikidata",
		}
	}

	/// Serialize to a static str, as used for host node names.
	#[must_use]
	pub const fn as_lower_str(&self) -> &'static str {
		match self {
			Self::Bold => "bold",
			Self::Globi => "globi",
			Self::GlobalNames => "globalnames",
			Self::Wikidata => "wikidata",
		}
	}
}

/// Utilities
impl ConnectorKind {
	/// The static service table driving the request compiler and the response unwrapper.
	#[must_use]
	pub fn service_config(&self) -> &'static ServiceConfig {
		match self {
			Self::Bold => &bold::SERVICE_CONFIG,
			Self::Globi => &globi::SERVICE_CONFIG,
			Self::GlobalNames => &global_names::SERVICE_CONFIG,
			Self::Wikidata => &wikidata::SERVICE_CONFIG,
		}
	}
}

/// From name implementations
impl ConnectorKind {
	/// Resolve a connector from a host node name.
	///
	/// Matching is case-insensitive and ignores `-`, `_`, and spaces,
	/// so `"Global Names"`, `"global-names"`, and `"globalnames"` all resolve to `GlobalNames`.
	pub fn from_name(name: &str) -> Result<Self> {
		let normalized: String = name
			.chars()
			.filter(|c| !matches!(c, '-' | '_' | ' '))
			.flat_map(char::to_lowercase)
			.collect();

		Self::ALL
			.iter()
			.find(|kind| kind.as_lower_str() == normalized)
			.copied()
			.ok_or_else(|| Error::UnknownConnector { name: name.to_string() })
	}
}

// region:    --- Tests


// endregion: --- Tests
