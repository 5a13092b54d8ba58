//! GloBI (Global Biotic Interactions) web API.
//!
//! - `interaction`: `https://api.globalbioticinteractions.org/interaction?sourceTaxon=Homo%20sapiens&interactionType=eats`
//! - `taxon`: `https://api.globalbioticinteractions.org/taxon/Homo%20sapiens/eats/Rattus?type=json`

use crate::connector::{
	ConnectorKind, DefaultValue, FieldBinding, FieldKind, FieldSpec, OptionSpec, PathSegment, ResourceConfig,
	ServiceConfig,
};

const BASE_URL: &str = "https://api.globalbioticinteractions.org/";

const RESOURCES: &[ResourceConfig] = &[
	ResourceConfig {
		name: "interaction",
		display_name: "Interaction",
		description: "Search interactions by source taxon, target taxon and interaction type",
		base_url: BASE_URL,
		path: &[PathSegment::Literal("interaction")],
		fixed_query: &[],
		bindings: &[
			FieldBinding::query("sourceTaxon", "sourceTaxon"),
			FieldBinding::query("targetTaxon", "targetTaxon"),
			FieldBinding::query("interactionType", "interactionType"),
			FieldBinding::query("type", "type"),
			FieldBinding::query("includeObservations", "includeObservations"),
		],
		unwrap_path: &[],
	},
	ResourceConfig {
		name: "taxon",
		display_name: "Taxon",
		description: "Interactions of a taxon, addressed by URL path",
		base_url: BASE_URL,
		path: &[
			PathSegment::Literal("taxon"),
			PathSegment::Field {
				field: "sourceTaxon",
				required: true,
			},
			PathSegment::Field {
				field: "interactionType",
				required: true,
			},
			PathSegment::Field {
				field: "targetTaxon",
				required: false,
			},
		],
		fixed_query: &[],
		bindings: &[
			FieldBinding::query("type", "type"),
			FieldBinding::query("includeObservations", "includeObservations"),
		],
		unwrap_path: &[],
	},
];

const INTERACTION_TYPE_OPTIONS: &[OptionSpec] = &[
	OptionSpec {
		name: "Eats",
		value: "eats",
		description: "",
	},
	OptionSpec {
		name: "Eaten By",
		value: "eatenBy",
		description: "",
	},
	OptionSpec {
		name: "Preys On",
		value: "preysOn",
		description: "",
	},
	OptionSpec {
		name: "Preyed Upon By",
		value: "preyedUponBy",
		description: "",
	},
	OptionSpec {
		name: "Parasite Of",
		value: "parasiteOf",
		description: "",
	},
	OptionSpec {
		name: "Has Parasite",
		value: "hasParasite",
		description: "",
	},
	OptionSpec {
		name: "Pollinates",
		value: "pollinates",
		description: "",
	},
	OptionSpec {
		name: "Pollinated By",
		value: "pollinatedBy",
		description: "",
	},
	OptionSpec {
		name: "Interacts With",
		value: "interactsWith",
		description: "",
	},
];

const TYPE_OPTIONS: &[OptionSpec] = &[
	OptionSpec {
		name: "JSON",
		value: "json",
		description: "",
	},
	OptionSpec {
		name: "JSON.v2",
		value: "json.v2",
		description: "Interactions as a list of objects",
	},
	OptionSpec {
		name: "CSV",
		value: "csv",
		description: "",
	},
];

const FIELDS: &[FieldSpec] = &[
	FieldSpec {
		name: "sourceTaxon",
		display_name: "Source Taxon",
		kind: FieldKind::String,
		default: DefaultValue::Str(""),
		required: false,
		description: "Taxon name or id the interaction originates from (e.g. Homo sapiens)",
		show_for: &[],
	},
	FieldSpec {
		name: "interactionType",
		display_name: "Interaction Type",
		kind: FieldKind::Options(INTERACTION_TYPE_OPTIONS),
		default: DefaultValue::Str("interactsWith"),
		required: false,
		description: "",
		show_for: &[],
	},
	FieldSpec {
		name: "targetTaxon",
		display_name: "Target Taxon",
		kind: FieldKind::String,
		default: DefaultValue::Str(""),
		required: false,
		description: "Taxon name or id the interaction points to",
		show_for: &[],
	},
	FieldSpec {
		name: "type",
		display_name: "Response Type",
		kind: FieldKind::Options(TYPE_OPTIONS),
		default: DefaultValue::Str("json"),
		required: false,
		description: "",
		show_for: &[],
	},
	FieldSpec {
		name: "includeObservations",
		display_name: "Include Observations",
		kind: FieldKind::Boolean,
		default: DefaultValue::Bool(false),
		required: false,
		description: "Include individual observations instead of taxon-level summaries",
		show_for: &[],
	},
];

pub(in crate::connector) static SERVICE_CONFIG: ServiceConfig = ServiceConfig {
	kind: ConnectorKind::Globi,
	display_name: "GloBI",
	description: "Query species interactions from Global Biotic Interactions",
	resources: RESOURCES,
	fields: FIELDS,
};
