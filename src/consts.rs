use std::ops::RangeInclusive;

use const_format::formatc;
use shadow_rs::shadow;
use static_assertions::const_assert;
shadow!(build);

// Constant string that has a string containing information about the build.
pub const BUILD_INFO: &str = formatc!(
	"Commit: {} ({})\nBuild Date: {}\nRust Channel: {}\nRust Version: {}",
	&build::SHORT_COMMIT,
	&build::BRANCH,
	&build::BUILD_TIME,
	&build::RUST_CHANNEL,
	&build::RUST_VERSION,
);

/// Title of the main window
pub const WINDOW_TITLE: &str = "Font Book";

/// Initial size of the main window
pub const WINDOW_SIZE: [f32; 2] = [1000.0, 700.0];

// Hard-Coded limits

/// Smallest size (in points) text can be previewed at
pub const PREVIEW_SIZE_MIN: u32 = 8;

/// Largest size (in points) text can be previewed at
pub const PREVIEW_SIZE_MAX: u32 = 72;

const_assert!(PREVIEW_SIZE_MAX > PREVIEW_SIZE_MIN);

/// Range of acceptable preview sizes
pub const PREVIEW_SIZE_RANGE: RangeInclusive<u32> = PREVIEW_SIZE_MIN..=PREVIEW_SIZE_MAX;

// Default values

/// Size previews start out at
pub const DEFAULT_PREVIEW_SIZE: u32 = 24;

const_assert!(DEFAULT_PREVIEW_SIZE >= PREVIEW_SIZE_MIN);
const_assert!(PREVIEW_SIZE_MAX >= DEFAULT_PREVIEW_SIZE);

/// Text shown in every row before the user types anything
pub const DEFAULT_PREVIEW_TEXT: &str = "The quick brown fox jumps over the lazy dog";

/// Size of the text inside of the preview text field itself
pub const PREVIEW_FIELD_SIZE: f32 = 24.0;

// List cell layout

/// Padding around the contents of each list cell
pub const CELL_PADDING: f32 = 10.0;

/// Size of the font name line in each cell
pub const NAME_SIZE: f32 = 14.0;

/// Vertical gap between the name line and the preview line
pub const LINE_GAP: f32 = 4.0;

/// Line height of preview text relative to its size
pub const PREVIEW_LINE_HEIGHT: f32 = 1.3;
