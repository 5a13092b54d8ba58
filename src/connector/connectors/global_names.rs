//! GlobalNames parser and verifier.
//!
//! Note: Both resources put the scientific name in the URL path, so it is always percent-encoded.

use crate::connector::{
	ConnectorKind, DefaultValue, FieldBinding, FieldKind, FieldSpec, PathSegment, PathStep, ResourceConfig,
	ServiceConfig,
};

const PARSER_BASE_URL: &str = "https://parser.globalnames.org/";
const VERIFIER_BASE_URL: &str = "https://verifier.globalnames.org/";

const RESOURCES: &[ResourceConfig] = &[
	ResourceConfig {
		name: "parse",
		display_name: "Parse",
		description: "Parse a scientific name into its components",
		base_url: PARSER_BASE_URL,
		path: &[
			PathSegment::Literal("api"),
			PathSegment::Literal("v1"),
			PathSegment::Field {
				field: "name",
				required: true,
			},
		],
		fixed_query: &[],
		bindings: &[
			FieldBinding::query("withDetails", "with_details"),
			FieldBinding::query("cultivars", "cultivars"),
		],
		// The parser answers with one result per name, and only one name is sent.
		unwrap_path: &[PathStep::Index(0)],
	},
	ResourceConfig {
		name: "verify",
		display_name: "Verify",
		description: "Verify a scientific name against biodiversity data sources",
		base_url: VERIFIER_BASE_URL,
		path: &[
			PathSegment::Literal("api"),
			PathSegment::Literal("v0"),
			PathSegment::Literal("verifications"),
			PathSegment::Field {
				field: "name",
				required: true,
			},
		],
		fixed_query: &[],
		bindings: &[],
		unwrap_path: &[],
	},
];

const FIELDS: &[FieldSpec] = &[
	FieldSpec {
		name: "name",
		display_name: "Name",
		kind: FieldKind::String,
		default: DefaultValue::Str(""),
		required: true,
		description: "Scientific name (e.g. Aedes aegypti)",
		show_for: &[],
	},
	FieldSpec {
		name: "withDetails",
		display_name: "With Details",
		kind: FieldKind::Boolean,
		default: DefaultValue::Bool(false),
		required: false,
		description: "Return the detailed parse of every name element",
		show_for: &["parse"],
	},
	FieldSpec {
		name: "cultivars",
		display_name: "Cultivars",
		kind: FieldKind::Boolean,
		default: DefaultValue::Bool(false),
		required: false,
		description: "Parse cultivar names following the ICNCP code",
		show_for: &["parse"],
	},
];

pub(in crate::connector) static SERVICE_CONFIG: ServiceConfig = ServiceConfig {
	kind: ConnectorKind::GlobalNames,
	display_name: "GlobalNames",
	description: "Parse and verify scientific names with GlobalNames",
	resources: RESOURCES,
	fields: FIELDS,
};
