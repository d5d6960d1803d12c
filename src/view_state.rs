use crate::consts::*;

/// Everything the user can change about what is shown. Lives only as long
/// as the window does.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
	/// Text entered into the search field
	pub search_query: String,

	/// Text drawn in each font
	pub preview_text: String,

	/// Size previews are drawn at, always within [`PREVIEW_SIZE_RANGE`]
	preview_size: u32,

	/// Catalog index of the selected font
	pub selected: Option<usize>,
}

impl Default for ViewState {
	fn default() -> Self {
		Self {
			search_query: String::new(),
			preview_text: DEFAULT_PREVIEW_TEXT.to_owned(),
			preview_size: DEFAULT_PREVIEW_SIZE,
			selected: None,
		}
	}
}

impl ViewState {
	#[inline]
	pub fn preview_size(&self) -> u32 { self.preview_size }

	/// Sets the preview size, clamping it into [`PREVIEW_SIZE_RANGE`].
	/// Returns whether the size actually changed.
	pub fn set_preview_size(&mut self, size: u32) -> bool {
		let size = size.clamp(PREVIEW_SIZE_MIN, PREVIEW_SIZE_MAX);
		let changed = size != self.preview_size;
		self.preview_size = size;
		changed
	}

	/// Label displayed next to the size slider
	pub fn size_label(&self) -> String { format!("{} pt", self.preview_size) }

	/// Height of a single list cell at the current preview size
	pub fn row_height(&self) -> f32 {
		(CELL_PADDING * 2.0)
			+ NAME_SIZE
			+ LINE_GAP
			+ (self.preview_size as f32 * PREVIEW_LINE_HEIGHT)
	}

	/// Drops the selection if it is no longer among the `shown` catalog indices
	pub fn retain_selection(&mut self, shown: &[usize]) {
		if let Some(selected) = self.selected {
			if !shown.contains(&selected) {
				self.selected = None;
			}
		}
	}
}
