use crate::entry::FontEntry;

/// Returns every entry whose display name or logical name contains `query`,
/// ignoring case. Order of `entries` is preserved and an empty query matches
/// everything.
pub fn filter<'a>(entries: &'a [FontEntry], query: &str) -> Vec<&'a FontEntry> {
	let needle = query.to_lowercase();
	entries
		.iter()
		.filter(|entry| entry.matches_lowercase(&needle))
		.collect()
}

/// Positions of the entries [`filter`] would return
pub fn filter_indices(entries: &[FontEntry], query: &str) -> Vec<usize> {
	let needle = query.to_lowercase();
	entries
		.iter()
		.enumerate()
		.filter(|(_, entry)| entry.matches_lowercase(&needle))
		.map(|(i, _)| i)
		.collect()
}
