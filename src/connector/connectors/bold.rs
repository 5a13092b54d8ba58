//! BOLD (Barcode of Life Data System) public API.
//!
//! e.g., `http://www.boldsystems.org/index.php/API_Public/specimen?format=json&taxon=Aves&geo=Canada`

use crate::connector::{
	ConnectorKind, DefaultValue, FieldBinding, FieldKind, FieldSpec, OptionSpec, PathSegment, PathStep, ResourceConfig,
	ServiceConfig,
};

const BASE_URL: &str = "http://www.boldsystems.org/index.php/API_Public/";

const FIXED_QUERY: &[(&str, &str)] = &[("format", "json")];

// combined and specimen responses are wrapped as `{"bold_records": {"records": ...}}`
const RECORDS_PATH: &[PathStep] = &[PathStep::Key("bold_records"), PathStep::Key("records")];

const SEARCH_BINDINGS: &[FieldBinding] = &[
	FieldBinding::query("taxon", "taxon"),
	FieldBinding::query("ids", "ids"),
	FieldBinding::query("bin", "bin"),
	FieldBinding::query("container", "container"),
	FieldBinding::query("institutions", "institutions"),
	FieldBinding::query("researchers", "researchers"),
	FieldBinding::query("geo", "geo"),
];

const MARKER_BINDINGS: &[FieldBinding] = &[
	FieldBinding::query("taxon", "taxon"),
	FieldBinding::query("ids", "ids"),
	FieldBinding::query("bin", "bin"),
	FieldBinding::query("container", "container"),
	FieldBinding::query("institutions", "institutions"),
	FieldBinding::query("researchers", "researchers"),
	FieldBinding::query("geo", "geo"),
	FieldBinding::query("marker", "marker"),
];

const STATS_BINDINGS: &[FieldBinding] = &[
	FieldBinding::query("taxon", "taxon"),
	FieldBinding::query("ids", "ids"),
	FieldBinding::query("bin", "bin"),
	FieldBinding::query("container", "container"),
	FieldBinding::query("institutions", "institutions"),
	FieldBinding::query("researchers", "researchers"),
	FieldBinding::query("geo", "geo"),
	FieldBinding::query("dataType", "dataType"),
];

const RESOURCES: &[ResourceConfig] = &[
	ResourceConfig {
		name: "combined",
		display_name: "Combined",
		description: "Specimen and sequence data in one record",
		base_url: BASE_URL,
		path: &[PathSegment::Literal("combined")],
		fixed_query: FIXED_QUERY,
		bindings: MARKER_BINDINGS,
		unwrap_path: RECORDS_PATH,
	},
	ResourceConfig {
		name: "sequence",
		display_name: "Sequence",
		description: "DNA sequences",
		base_url: BASE_URL,
		path: &[PathSegment::Literal("sequence")],
		fixed_query: FIXED_QUERY,
		bindings: MARKER_BINDINGS,
		unwrap_path: &[],
	},
	ResourceConfig {
		name: "specimen",
		display_name: "Specimen",
		description: "Specimen data",
		base_url: BASE_URL,
		path: &[PathSegment::Literal("specimen")],
		fixed_query: FIXED_QUERY,
		bindings: SEARCH_BINDINGS,
		unwrap_path: RECORDS_PATH,
	},
	ResourceConfig {
		name: "stats",
		display_name: "Stats",
		description: "Summary statistics for the matching records",
		base_url: BASE_URL,
		path: &[PathSegment::Literal("stats")],
		fixed_query: FIXED_QUERY,
		bindings: STATS_BINDINGS,
		unwrap_path: &[],
	},
];

const DATA_TYPE_OPTIONS: &[OptionSpec] = &[
	OptionSpec {
		name: "Overview",
		value: "overview",
		description: "Counts of specimens, species, BINs and countries",
	},
	OptionSpec {
		name: "Drill Down",
		value: "drill_down",
		description: "Overview plus the top entries for each category",
	},
];

const fn text_field(name: &'static str, display_name: &'static str, description: &'static str) -> FieldSpec {
	FieldSpec {
		name,
		display_name,
		kind: FieldKind::String,
		default: DefaultValue::Str(""),
		required: false,
		description,
		show_for: &[],
	}
}

const FIELDS: &[FieldSpec] = &[
	text_field("taxon", "Taxon", "Pipe-separated taxon names (e.g. Aves|Reptilia)"),
	text_field("ids", "IDs", "Sample IDs, process IDs, museum IDs or field IDs"),
	text_field("bin", "BIN", "Barcode Index Number URIs"),
	text_field("container", "Container", "Project or dataset codes"),
	text_field("institutions", "Institutions", "Specimen storing sites"),
	text_field("researchers", "Researchers", "Collectors and specimen identifiers"),
	text_field("geo", "Geography", "Countries or provinces/states"),
	FieldSpec {
		show_for: &["combined", "sequence"],
		..text_field("marker", "Marker", "Genetic marker codes (e.g. COI-5P)")
	},
	FieldSpec {
		name: "dataType",
		display_name: "Data Type",
		kind: FieldKind::Options(DATA_TYPE_OPTIONS),
		default: DefaultValue::Str("overview"),
		required: false,
		description: "Level of detail of the returned statistics",
		show_for: &["stats"],
	},
];

pub(in crate::connector) static SERVICE_CONFIG: ServiceConfig = ServiceConfig {
	kind: ConnectorKind::Bold,
	display_name: "BOLD",
	description: "Query the Barcode of Life Data System public API",
	resources: RESOURCES,
	fields: FIELDS,
};
