use catalog::{Catalog, FontEntry, FontHandle};

const FAMILIES: [&str; 12] = [
	"Noto Sans",
	"Noto Serif",
	"DejaVu Sans",
	"DejaVu Sans Mono",
	"Liberation Serif",
	"Liberation Mono",
	"Ubuntu",
	"Cantarell",
	"Source Code Pro",
	"Fira Sans",
	"Inter",
	"Roboto",
];

const STYLES: [&str; 6] = ["", "Bold", "Italic", "Bold Italic", "Light", "Black"];

/// Builds a catalog about the size of a typical desktop installation
pub fn synthetic_catalog() -> Catalog {
	let entries = FAMILIES
		.iter()
		.flat_map(|family| {
			STYLES.iter().map(move |style| {
				let family_name = match style.is_empty() {
					true => family.to_string(),
					false => format!("{} {}", family, style),
				};
				let logical_name = family_name.replace(' ', "");
				FontEntry::new(FontHandle::detached(), &family_name, &logical_name)
			})
		})
		.cycle()
		.take(FAMILIES.len() * STYLES.len() * 6)
		.collect();

	Catalog::from_entries(entries)
}
