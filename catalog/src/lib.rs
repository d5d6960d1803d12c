mod catalog;
mod entry;
mod filter;

pub use crate::{
	catalog::{Catalog, CatalogError, FaceData, SourceKey},
	entry::{style_name, FontEntry, FontHandle},
	filter::{filter, filter_indices},
};

// Re-exported so callers can describe faces without depending on `fontdb`
pub use fontdb::{Database, Stretch, Style, Weight};
