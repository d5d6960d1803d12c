use crate::consts::*;
use crate::font_list::FontList;
use crate::preview_fonts::PreviewFonts;
use crate::style::style;
use crate::view_state::ViewState;
use catalog::{Catalog, CatalogError};
use egui::{
	Button, CentralPanel, Context, FontDefinitions, FontId, Slider, TextEdit, TopBottomPanel,
	Window,
};
use std::ops::BitXorAssign;

/// Used to store the opened of windows/widgets
#[derive(Default)]
struct Opened {
	pub info: bool,
}

/// The actual application
pub struct FontBookApp {
	/// Every installed font
	catalog: Catalog,

	/// Query, preview text, size and selection
	state: ViewState,

	/// Displayed subset of `catalog`
	list: FontList,

	/// Fonts of catalog entries that have been loaded into egui
	fonts: PreviewFonts,

	/// Stores whether or not dark mode is enabled
	dark_mode: bool,

	/// Stores opened windows/elements for later reference
	opened: Opened,

	/// Set when the theme changed and the style has to be re-applied
	style_changed: bool,
}

impl FontBookApp {
	/// Create new instance of [`FontBookApp`], enumerating the installed fonts
	pub fn new(cc: &eframe::CreationContext<'_>) -> Result<Self, CatalogError> {
		let catalog = Catalog::load()?;
		cc.egui_ctx.set_style(style(false));

		tracing::info!("egui app initialized.");
		Ok(Self::with_catalog(catalog))
	}

	/// Create an app displaying `catalog`
	pub fn with_catalog(catalog: Catalog) -> Self {
		Self {
			list: FontList::new(&catalog),
			catalog,
			state: ViewState::default(),
			fonts: PreviewFonts::new(FontDefinitions::default()),
			dark_mode: false,
			opened: Opened::default(),
			style_changed: true,
		}
	}

	#[inline]
	pub fn catalog(&self) -> &Catalog { &self.catalog }

	#[inline]
	pub fn state(&self) -> &ViewState { &self.state }

	#[inline]
	pub fn state_mut(&mut self) -> &mut ViewState { &mut self.state }

	#[inline]
	pub fn list(&self) -> &FontList { &self.list }

	#[inline]
	pub fn fonts(&self) -> &PreviewFonts { &self.fonts }

	/// Catalog indices currently displayed
	#[inline]
	pub fn shown(&self) -> &[usize] { self.list.shown() }

	/// Brings the displayed list in line with the search query
	pub fn sync_query(&mut self) {
		if self.list.apply_query(&self.catalog, &self.state.search_query) {
			self.state.retain_selection(self.list.shown());
		}
	}

	/// Top bar: search field, font count and general options
	fn top_bar(&mut self, ctx: &Context) {
		TopBottomPanel::top("top_bar").show(ctx, |ui| {
			ui.horizontal(|ui| {
				// Toggles dark/light mode
				let theme_toggled = ui
					.add(Button::new(match self.dark_mode {
						true => "🌞",
						false => "🌙",
					}))
					.on_hover_text(match self.dark_mode {
						true => "Turn the Lights on!",
						false => "Turn the Lights off.",
					})
					.clicked();
				self.dark_mode.bitxor_assign(theme_toggled);
				self.style_changed |= theme_toggled;

				// Toggles opening the Info window
				self.opened.info.bitxor_assign(
					ui.add(Button::new("Info"))
						.on_hover_text(match self.opened.info {
							true => "Close Info Window",
							false => "Open Info Window",
						})
						.clicked(),
				);

				ui.label(format!(
					"{} of {} fonts",
					self.list.shown().len(),
					self.catalog.len()
				));

				let search_changed = ui
					.add(
						TextEdit::singleline(&mut self.state.search_query)
							.hint_text("🔍 Search Fonts")
							.desired_width(f32::INFINITY),
					)
					.changed();

				if search_changed {
					self.sync_query();
				}
			});
		});
	}

	/// Bottom bar: preview size slider
	fn size_bar(&mut self, ctx: &Context) {
		TopBottomPanel::bottom("size_bar").show(ctx, |ui| {
			ui.horizontal(|ui| {
				ui.label("Font Size:");

				let mut size = self.state.preview_size();
				if ui
					.add(Slider::new(&mut size, PREVIEW_SIZE_RANGE).show_value(false))
					.changed()
				{
					self.state.set_preview_size(size);
				}

				ui.label(self.state.size_label());
			});
		});
	}

	/// Text field holding the text every font previews
	fn preview_bar(&mut self, ctx: &Context) {
		TopBottomPanel::bottom("preview_bar").show(ctx, |ui| {
			ui.add(
				TextEdit::singleline(&mut self.state.preview_text)
					.font(FontId::proportional(PREVIEW_FIELD_SIZE))
					.desired_width(f32::INFINITY),
			);
		});
	}

	/// Lays out and draws one frame
	pub fn ui(&mut self, ctx: &Context) {
		self.fonts.begin_frame();

		if self.style_changed {
			ctx.set_style(style(self.dark_mode));
			self.style_changed = false;
		}

		self.top_bar(ctx);

		// Window with information about the build
		Window::new("Info")
			.open(&mut self.opened.info)
			.default_pos([200.0, 200.0])
			.resizable(false)
			.collapsible(false)
			.show(ctx, |ui| {
				ui.label(BUILD_INFO);
				ui.label(format!("Installed fonts: {}", self.catalog.len()));
			});

		// bottom panels stack upwards in the order they are added
		self.size_bar(ctx);
		self.preview_bar(ctx);

		CentralPanel::default().show(ctx, |ui| {
			self.list
				.show(ui, &self.catalog, &mut self.state, &mut self.fonts);
		});

		self.fonts.flush(ctx, &self.catalog);
	}
}

impl eframe::App for FontBookApp {
	/// Called each time the UI needs repainting, which may be many times per
	/// second.
	fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) { self.ui(ctx); }
}
