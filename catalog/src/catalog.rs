use crate::entry::{FontEntry, FontHandle};
use crate::filter::{filter, filter_indices};
use fontdb::{Database, Source};
use itertools::Itertools;
use std::path::PathBuf;

/// Errors produced while building or reading from the [`Catalog`]
#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
	#[error("no fonts were found on this system")]
	NoFontsAvailable,

	#[error("unable to read font data for {name}")]
	FaceDataUnavailable { name: String },
}

/// Raw font file contents plus the index of the face inside of it (non-zero
/// only for font collections)
#[derive(Debug, Clone, PartialEq)]
pub struct FaceData {
	pub bytes: Vec<u8>,
	pub index: u32,
}

/// Identifies where a face's bytes come from. Faces of one font collection
/// share the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SourceKey {
	File(PathBuf),
	Memory(FontHandle),
}

/// Every installed font face, sorted by display name. Built once and never
/// mutated afterwards.
pub struct Catalog {
	db: Database,
	entries: Vec<FontEntry>,
}

impl Catalog {
	/// Enumerate the fonts installed on the host
	pub fn load() -> Result<Self, CatalogError> {
		let start = instant::Instant::now();

		let mut db = Database::new();
		db.load_system_fonts();

		let catalog = Self::from_database(db)?;
		tracing::info!(
			"Loaded {} font faces. Took: {:?}",
			catalog.len(),
			start.elapsed()
		);
		Ok(catalog)
	}

	/// Build a catalog out of an already populated font database
	pub fn from_database(db: Database) -> Result<Self, CatalogError> {
		if db.faces().next().is_none() {
			return Err(CatalogError::NoFontsAvailable);
		}

		let entries = db.faces().map(FontEntry::from_face).collect();
		Ok(Self {
			entries: sort_entries(entries),
			db,
		})
	}

	/// Build a catalog without any backing font data
	pub fn from_entries(entries: Vec<FontEntry>) -> Self {
		Self {
			db: Database::new(),
			entries: sort_entries(entries),
		}
	}

	#[inline]
	pub fn entries(&self) -> &[FontEntry] { &self.entries }

	#[inline]
	pub fn get(&self, i: usize) -> Option<&FontEntry> { self.entries.get(i) }

	#[inline]
	pub fn len(&self) -> usize { self.entries.len() }

	#[inline]
	pub fn is_empty(&self) -> bool { self.entries.is_empty() }

	/// Entries matching `query`, in catalog order
	pub fn filter(&self, query: &str) -> Vec<&FontEntry> { filter(&self.entries, query) }

	/// Same as [`Catalog::filter`], but yields positions into [`Catalog::entries`]
	pub fn filter_indices(&self, query: &str) -> Vec<usize> {
		filter_indices(&self.entries, query)
	}

	/// Where the bytes of `entry` live, plus its index inside of them
	pub fn face_source(&self, entry: &FontEntry) -> Result<(SourceKey, u32), CatalogError> {
		let handle = entry.handle();
		let face = self
			.db
			.face(handle.0)
			.ok_or_else(|| CatalogError::FaceDataUnavailable {
				name: entry.family_name.clone(),
			})?;

		let key = match &face.source {
			Source::File(path) | Source::SharedFile(path, _) => SourceKey::File(path.clone()),
			_ => SourceKey::Memory(handle),
		};
		Ok((key, face.index))
	}

	/// Read the font file backing `entry`. This touches the disk, so callers
	/// should only do it for faces that are actually about to be drawn.
	pub fn face_data(&self, entry: &FontEntry) -> Result<FaceData, CatalogError> {
		let FontHandle(id) = entry.handle();
		self.db
			.with_face_data(id, |bytes, index| FaceData {
				bytes: bytes.to_vec(),
				index,
			})
			.ok_or_else(|| CatalogError::FaceDataUnavailable {
				name: entry.family_name.clone(),
			})
	}
}

fn sort_entries(entries: Vec<FontEntry>) -> Vec<FontEntry> {
	entries
		.into_iter()
		.sorted_by(|a, b| a.family_name.cmp(&b.family_name))
		.collect()
}
