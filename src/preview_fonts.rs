use catalog::{Catalog, CatalogError, FontEntry, SourceKey};
use egui::{Context, FontData, FontDefinitions, FontFamily};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FaceState {
	/// Asked for during this frame, not loaded yet
	Requested,

	/// Handed to egui, usable starting next frame
	Pending,

	/// Registered with egui
	Active,

	/// Could not be read or parsed, drawn with the default font forever
	Failed,
}

/// Fonts of catalog entries registered with egui so that previews can be
/// drawn with them. Loading a face is expensive (disk read plus egui
/// rebuilding its fonts), so faces are only loaded when asked for, in one
/// batch at the end of a frame.
pub struct PreviewFonts {
	definitions: FontDefinitions,

	/// Default proportional stack, used behind every face for glyphs it lacks
	fallback: Vec<String>,

	states: HashMap<usize, FaceState>,

	/// Bytes of every font file read so far. Registered faces stay for the
	/// rest of the process, so the bytes are leaked once per file and every
	/// face of a collection borrows the same slice.
	sources: HashMap<SourceKey, &'static [u8]>,
}

impl Default for PreviewFonts {
	fn default() -> Self { Self::new(FontDefinitions::default()) }
}

impl PreviewFonts {
	pub fn new(definitions: FontDefinitions) -> Self {
		let fallback = definitions
			.families
			.get(&FontFamily::Proportional)
			.cloned()
			.unwrap_or_default();

		Self {
			definitions,
			fallback,
			states: HashMap::new(),
			sources: HashMap::new(),
		}
	}

	fn key(i: usize) -> String { format!("font_book:{}", i) }

	/// Font family of catalog entry `i` if it is usable this frame. Otherwise
	/// the face is queued for loading and `None` is returned.
	pub fn family(&mut self, i: usize) -> Option<FontFamily> {
		match self.states.get(&i) {
			Some(FaceState::Active) => Some(FontFamily::Name(Self::key(i).into())),
			Some(_) => None,
			None => {
				self.states.insert(i, FaceState::Requested);
				None
			}
		}
	}

	/// Must be called at the start of every frame. Fonts handed to egui last
	/// frame have been applied by now.
	pub fn begin_frame(&mut self) {
		self.states
			.values_mut()
			.filter(|state| **state == FaceState::Pending)
			.for_each(|state| *state = FaceState::Active);
	}

	/// Adds face `index` of `bytes` to the font definitions as catalog entry
	/// `i`. egui panics on fonts it can't parse, so the face is checked with
	/// the same parser first. Returns false (and marks the entry failed) if
	/// it doesn't parse.
	pub fn register(&mut self, i: usize, bytes: &'static [u8], index: u32) -> bool {
		if let Err(err) = ab_glyph::FontRef::try_from_slice_and_index(bytes, index) {
			tracing::warn!("Unable to parse font #{}: {}", i, err);
			self.states.insert(i, FaceState::Failed);
			return false;
		}

		let key = Self::key(i);

		let mut font_data = FontData::from_static(bytes);
		font_data.index = index;
		self.definitions
			.font_data
			.insert(key.clone(), font_data.into());

		let mut stack = vec![key.clone()];
		stack.extend(self.fallback.iter().cloned());
		self.definitions
			.families
			.insert(FontFamily::Name(key.into()), stack);

		self.states.insert(i, FaceState::Pending);
		true
	}

	/// Bytes of the file backing `entry`, reading it only the first time
	fn source_bytes(
		&mut self, catalog: &Catalog, entry: &FontEntry,
	) -> Result<(&'static [u8], u32), CatalogError> {
		let (source, index) = catalog.face_source(entry)?;
		if let Some(bytes) = self.sources.get(&source).copied() {
			return Ok((bytes, index));
		}

		let face = catalog.face_data(entry)?;
		let bytes: &'static [u8] = Box::leak(face.bytes.into_boxed_slice());
		self.sources.insert(source, bytes);
		Ok((bytes, face.index))
	}

	/// Loads every requested face. Returns the new font definitions if
	/// anything was added to them.
	pub fn load_requested(&mut self, catalog: &Catalog) -> Option<FontDefinitions> {
		let requested: Vec<usize> = self
			.states
			.iter()
			.filter(|(_, state)| **state == FaceState::Requested)
			.map(|(i, _)| *i)
			.collect();

		if requested.is_empty() {
			return None;
		}

		let mut loaded: usize = 0;
		for i in requested {
			let Some(entry) = catalog.get(i) else {
				self.states.insert(i, FaceState::Failed);
				continue;
			};

			match self.source_bytes(catalog, entry) {
				Ok((bytes, index)) => {
					tracing::trace!("Loading font: {}", entry.family_name);
					if self.register(i, bytes, index) {
						loaded += 1;
					}
				}
				Err(err) => {
					tracing::warn!("{}", err);
					self.states.insert(i, FaceState::Failed);
				}
			}
		}

		if loaded == 0 {
			return None;
		}

		tracing::debug!("Registering {} new fonts", loaded);
		// font bytes are borrowed, so this only copies the tables around them
		Some(self.definitions.clone())
	}

	/// Must be called at the end of every frame
	pub fn flush(&mut self, ctx: &Context, catalog: &Catalog) {
		if let Some(definitions) = self.load_requested(catalog) {
			ctx.set_fonts(definitions);
			// the new fonts only show up on the next frame
			ctx.request_repaint();
		}
	}

	/// Number of faces registered with egui
	pub fn active_count(&self) -> usize {
		self.states
			.values()
			.filter(|state| **state == FaceState::Active)
			.count()
	}

	/// Number of faces that could not be loaded
	pub fn failed_count(&self) -> usize {
		self.states
			.values()
			.filter(|state| **state == FaceState::Failed)
			.count()
	}

	/// Number of distinct font files read
	pub fn source_count(&self) -> usize { self.sources.len() }
}
