use egui::{Style, Visuals};
use emath::vec2;
use epaint::{Color32, Rounding, Shadow, Stroke};

/// Selection palette shared by both themes
const SELECTION_BG: Color32 = Color32::from_rgb(38, 117, 191);
const SELECTION_FG: Color32 = Color32::WHITE;

fn visuals(dark_mode: bool) -> Visuals {
	let mut visuals = match dark_mode {
		true => Visuals::dark(),
		false => Visuals::light(),
	};

	visuals.selection.bg_fill = SELECTION_BG;
	visuals.selection.stroke = Stroke::new(1.0, SELECTION_FG);
	visuals.window_rounding = Rounding::same(1.5);
	visuals.window_shadow = Shadow::NONE; // no shadow
	visuals.popup_shadow = Shadow::NONE; // no shadow
	visuals
}

/// Builds the application style for the light or dark theme
pub fn style(dark_mode: bool) -> Style {
	let mut style = Style {
		visuals: visuals(dark_mode),
		..Default::default()
	};

	style.spacing.item_spacing = vec2(10.0, 10.0);
	style.spacing.slider_width = 240.0;
	style
}
