use font_book::{consts::*, FontBookApp};
use tracing::Level;

cfg_if::cfg_if! {
	if #[cfg(debug_assertions)] {
		const LOG_LEVEL: Level = Level::DEBUG;
	} else {
		const LOG_LEVEL: Level = Level::INFO;
	}
}

/// Builds the app, failing if no fonts could be enumerated
fn create_app(
	cc: &eframe::CreationContext<'_>,
) -> Result<Box<dyn eframe::App>, Box<dyn std::error::Error + Send + Sync>> {
	let app = FontBookApp::new(cc).map_err(|err| {
		tracing::error!("Unable to start: {}", err);
		err
	})?;
	Ok(Box::new(app))
}

fn main() -> eframe::Result<()> {
	tracing_subscriber::fmt().with_max_level(LOG_LEVEL).init();

	let options = eframe::NativeOptions {
		viewport: egui::ViewportBuilder::default()
			.with_title(WINDOW_TITLE)
			.with_inner_size(WINDOW_SIZE),
		..Default::default()
	};

	eframe::run_native(WINDOW_TITLE, options, Box::new(create_app))
}
