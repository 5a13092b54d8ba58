pub(super) mod bold;
pub(super) mod global_names;
pub(super) mod globi;
pub(super) mod wikidata;
