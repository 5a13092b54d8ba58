//! Wikidata SPARQL query service.
//!
//! e.g., `https://query.wikidata.org/sparql?format=json&query=SELECT...`

use crate::connector::{
	ConnectorKind, DefaultValue, FieldBinding, FieldKind, FieldSpec, PathSegment, PathStep, ResourceConfig,
	ServiceConfig,
};

pub const DEFAULT_SERVER: &str = "https://query.wikidata.org";

const RESOURCES: &[ResourceConfig] = &[ResourceConfig {
	name: "query",
	display_name: "Query",
	description: "Run a SPARQL query and return the first binding",
	base_url: DEFAULT_SERVER,
	path: &[PathSegment::Literal("sparql")],
	fixed_query: &[("format", "json")],
	bindings: &[FieldBinding::endpoint("server"), FieldBinding::query("query", "query")],
	unwrap_path: &[PathStep::Key("results"), PathStep::Key("bindings"), PathStep::Index(0)],
}];

const FIELDS: &[FieldSpec] = &[
	FieldSpec {
		name: "server",
		display_name: "Server",
		kind: FieldKind::String,
		default: DefaultValue::Str(DEFAULT_SERVER),
		required: false,
		description: "SPARQL server base URL",
		show_for: &[],
	},
	FieldSpec {
		name: "query",
		display_name: "Query",
		kind: FieldKind::String,
		default: DefaultValue::Str(""),
		required: true,
		description: "SPARQL query (e.g. SELECT * WHERE {?s ?p ?o} LIMIT 1)",
		show_for: &[],
	},
];

pub(in crate::connector) static SERVICE_CONFIG: ServiceConfig = ServiceConfig {
	kind: ConnectorKind::Wikidata,
	display_name: "Wikidata",
	description: "Query Wikidata (or any SPARQL 1.1 server) with SPARQL",
	resources: RESOURCES,
	fields: FIELDS,
};
