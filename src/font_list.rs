use crate::consts::*;
use crate::lazy_render::{LazyRender, PreviewFont};
use crate::preview_fonts::PreviewFonts;
use crate::view_state::ViewState;
use catalog::{Catalog, FontEntry};
use egui::{FontFamily, FontId, Response, ScrollArea, Sense, Ui};
use emath::{vec2, Align2};
use epaint::Color32;

/// Scrollable list of the fonts matching the current search query
pub struct FontList {
	/// Catalog indices of the displayed entries, in catalog order
	shown: Vec<usize>,

	/// Query `shown` was computed from
	applied_query: String,

	lazy: LazyRender,
}

impl FontList {
	/// Creates a list displaying the entire catalog
	pub fn new(catalog: &Catalog) -> Self {
		Self {
			shown: (0..catalog.len()).collect(),
			applied_query: String::new(),
			lazy: LazyRender::default(),
		}
	}

	#[inline]
	pub fn shown(&self) -> &[usize] { &self.shown }

	#[inline]
	pub fn lazy(&self) -> &LazyRender { &self.lazy }

	/// Recomputes the displayed entries if `query` differs from the last one.
	/// A new set of entries counts as a new list, so every row goes back to
	/// being painted cheaply first.
	pub fn apply_query(&mut self, catalog: &Catalog, query: &str) -> bool {
		if self.applied_query == query {
			return false;
		}

		self.shown = catalog.filter_indices(query);
		self.applied_query = query.to_owned();
		self.lazy.reset();

		tracing::debug!(
			"Query {:?} matched {} of {} fonts",
			query,
			self.shown.len(),
			catalog.len()
		);
		true
	}

	/// Draws the visible rows
	pub fn show(
		&mut self, ui: &mut Ui, catalog: &Catalog, state: &mut ViewState,
		fonts: &mut PreviewFonts,
	) {
		if self.shown.is_empty() {
			ui.centered_and_justified(|ui| {
				ui.label("No fonts match your search");
			});
			return;
		}

		let row_height = state.row_height();
		let preview_size = state.preview_size() as f32;

		ScrollArea::vertical()
			.auto_shrink([false; 2])
			.show_rows(ui, row_height, self.shown.len(), |ui, row_range| {
				ui.spacing_mut().item_spacing.y = 0.0;

				let mut first_paints = false;
				for row in row_range {
					let i = self.shown[row];
					let Some(entry) = catalog.get(i) else {
						continue;
					};

					let family = match self.lazy.observe(i) {
						PreviewFont::Default => {
							first_paints = true;
							None
						}
						PreviewFont::Derived => fonts.family(i),
					};
					let preview_font =
						FontId::new(preview_size, family.unwrap_or(FontFamily::Proportional));

					let selected = state.selected == Some(i);
					let response = paint_row(
						ui,
						entry,
						&state.preview_text,
						preview_font,
						row_height,
						selected,
					);

					if response.clicked() {
						state.selected = Some(i);
					}
				}

				// rows painted for the first time need a second pass to get their own font
				if first_paints {
					ui.ctx().request_repaint();
				}
			});
	}
}

/// Paints a two line cell: the font's name, then `preview_text` in `preview_font`
fn paint_row(
	ui: &mut Ui, entry: &FontEntry, preview_text: &str, preview_font: FontId, row_height: f32,
	selected: bool,
) -> Response {
	let (rect, response) =
		ui.allocate_exact_size(vec2(ui.available_width(), row_height), Sense::click());

	let visuals = ui.visuals();
	let (background, foreground): (Option<Color32>, Color32) = if selected {
		(
			Some(visuals.selection.bg_fill),
			visuals.selection.stroke.color,
		)
	} else if response.hovered() {
		(Some(visuals.faint_bg_color), visuals.text_color())
	} else {
		(None, visuals.text_color())
	};

	let painter = ui.painter_at(rect);
	if let Some(background) = background {
		painter.rect_filled(rect, 0.0, background);
	}

	let name_pos = rect.min + vec2(CELL_PADDING, CELL_PADDING);
	painter.text(
		name_pos,
		Align2::LEFT_TOP,
		&entry.family_name,
		FontId::proportional(NAME_SIZE),
		foreground,
	);
	painter.text(
		name_pos + vec2(0.0, NAME_SIZE + LINE_GAP),
		Align2::LEFT_TOP,
		preview_text,
		preview_font,
		foreground,
	);

	response.on_hover_text(format!(
		"{}\nStyle: {}\nWeight: {}{}",
		entry.logical_name,
		entry.style_name,
		entry.weight,
		match entry.monospaced {
			true => "\nMonospaced",
			false => "",
		}
	))
}
