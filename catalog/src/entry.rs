use fontdb::{FaceInfo, Stretch, Style, Weight, ID};

/// Opaque reference to a face inside the font database
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontHandle(pub(crate) ID);

impl FontHandle {
	/// Handle that refers to no face at all. Looking up its data always
	/// fails, which makes it suitable for catalogs built from plain names.
	pub fn detached() -> Self { Self(ID::dummy()) }
}

/// An installed font face plus the names it is displayed and searched by
#[derive(Debug, Clone, PartialEq)]
pub struct FontEntry {
	handle: FontHandle,

	/// Face display name, e.g. `Arial Bold Italic`
	pub family_name: String,

	/// PostScript name of the face, e.g. `Arial-BoldItalicMT`. `fontdb` skips
	/// faces without one.
	pub logical_name: String,

	pub style_name: String,
	pub weight: u16,
	pub italic: bool,
	pub monospaced: bool,

	// lowercased copies so filtering doesn't allocate per keystroke
	family_lower: String,
	logical_lower: String,
}

impl FontEntry {
	pub fn new(handle: FontHandle, family_name: &str, logical_name: &str) -> Self {
		Self {
			handle,
			family_name: family_name.to_owned(),
			logical_name: logical_name.to_owned(),
			style_name: String::from("Regular"),
			weight: Weight::NORMAL.0,
			italic: false,
			monospaced: false,
			family_lower: family_name.to_lowercase(),
			logical_lower: logical_name.to_lowercase(),
		}
	}

	/// Builds an entry from a face indexed by `fontdb`
	pub(crate) fn from_face(face: &FaceInfo) -> Self {
		let family = face
			.families
			.first()
			.map(|(name, _)| name.as_str())
			.unwrap_or("Unknown");

		let style = style_name(face.weight, face.style, face.stretch);
		let family_name = match style.as_str() {
			"Regular" => family.to_owned(),
			_ => format!("{} {}", family, style),
		};

		let mut entry = Self::new(FontHandle(face.id), &family_name, &face.post_script_name);
		entry.style_name = style;
		entry.weight = face.weight.0;
		entry.italic = face.style != Style::Normal;
		entry.monospaced = face.monospaced;
		entry
	}

	#[inline]
	pub fn handle(&self) -> FontHandle { self.handle }

	/// Returns true if either name contains `needle`. `needle` must already
	/// be lowercase.
	#[inline]
	pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
		self.family_lower.contains(needle) || self.logical_lower.contains(needle)
	}
}

fn weight_name(weight: Weight) -> Option<&'static str> {
	match weight.0 {
		0..=149 => Some("Thin"),
		150..=249 => Some("ExtraLight"),
		250..=349 => Some("Light"),
		350..=449 => None,
		450..=549 => Some("Medium"),
		550..=649 => Some("SemiBold"),
		650..=749 => Some("Bold"),
		750..=849 => Some("ExtraBold"),
		_ => Some("Black"),
	}
}

fn stretch_name(stretch: Stretch) -> Option<&'static str> {
	match stretch {
		Stretch::UltraCondensed => Some("UltraCondensed"),
		Stretch::ExtraCondensed => Some("ExtraCondensed"),
		Stretch::Condensed => Some("Condensed"),
		Stretch::SemiCondensed => Some("SemiCondensed"),
		Stretch::Normal => None,
		Stretch::SemiExpanded => Some("SemiExpanded"),
		Stretch::Expanded => Some("Expanded"),
		Stretch::ExtraExpanded => Some("ExtraExpanded"),
		Stretch::UltraExpanded => Some("UltraExpanded"),
	}
}

/// Human readable style of a face, `Regular` when nothing sets it apart
pub fn style_name(weight: Weight, style: Style, stretch: Stretch) -> String {
	let slant = match style {
		Style::Normal => None,
		Style::Italic => Some("Italic"),
		Style::Oblique => Some("Oblique"),
	};

	let parts: Vec<&str> = [stretch_name(stretch), weight_name(weight), slant]
		.into_iter()
		.flatten()
		.collect();

	match parts.is_empty() {
		true => String::from("Regular"),
		false => parts.join(" "),
	}
}
