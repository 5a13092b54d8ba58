//! Credential types a host can store for the connectors.
//!
//! None of the current connectors authenticate. The TaxonWorks credential type is declared
//! so hosts can store it alongside them.

use crate::connector::{DefaultValue, FieldKind, FieldSpec};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

// region:    --- CredentialSchema

/// Declarative description of a credential form.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialSchema {
	pub name: &'static str,
	pub display_name: &'static str,
	pub properties: &'static [FieldSpec],
}

const fn secret_field(name: &'static str, display_name: &'static str) -> FieldSpec {
	FieldSpec {
		name,
		display_name,
		kind: FieldKind::String,
		default: DefaultValue::Str(""),
		required: false,
		description: "",
		show_for: &[],
	}
}

pub static TAXONWORKS_CREDENTIAL_SCHEMA: CredentialSchema = CredentialSchema {
	name: "taxonWorksApi",
	display_name: "TaxonWorks API",
	properties: &[
		secret_field("projectToken", "Project Token"),
		secret_field("projectId", "Project ID"),
		secret_field("userToken", "User Token"),
	],
};

// endregion: --- CredentialSchema

// region:    --- TaxonWorksCredentials

#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxonWorksCredentials {
	pub project_token: String,
	pub project_id: String,
	pub user_token: String,
}

impl TaxonWorksCredentials {
	pub const PROJECT_TOKEN_ENV_NAME: &str = "TAXONWORKS_PROJECT_TOKEN";
	pub const PROJECT_ID_ENV_NAME: &str = "TAXONWORKS_PROJECT_ID";
	pub const USER_TOKEN_ENV_NAME: &str = "TAXONWORKS_USER_TOKEN";

	pub fn from_env() -> Result<Self> {
		Self::from_lookup(|name| std::env::var(name).ok())
	}

	/// Build from any name -> value source (host credential store, env, test map).
	/// Missing or blank values fail with `Error::MissingEnvVar`.
	pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
		let value = |name: &'static str| match lookup(name) {
			Some(value) if !value.trim().is_empty() => Ok(value),
			_ => Err(Error::MissingEnvVar { name }),
		};

		Ok(Self {
			project_token: value(Self::PROJECT_TOKEN_ENV_NAME)?,
			project_id: value(Self::PROJECT_ID_ENV_NAME)?,
			user_token: value(Self::USER_TOKEN_ENV_NAME)?,
		})
	}
}

// Tokens must not leak through logs.
impl std::fmt::Debug for TaxonWorksCredentials {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("TaxonWorksCredentials")
			.field("project_token", &"REDACTED")
			.field("project_id", &self.project_id)
			.field("user_token", &"REDACTED")
			.finish()
	}
}

// endregion: --- TaxonWorksCredentials
