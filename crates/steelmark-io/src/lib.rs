pub mod catalog;
pub mod object;

pub use catalog::{export_catalog, import_catalog};
pub use object::{InterchangeObject, from_json, resolve_grade, to_json};
