use std::collections::HashSet;

/// Which font a preview line gets painted with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewFont {
	/// The default proportional font, nothing needs to be loaded
	Default,

	/// The entry's own font at the selected size
	Derived,
}

/// Tracks which catalog entries have been painted in the current list so
/// that a row's first paint never has to wait on loading its font.
#[derive(Debug, Default)]
pub struct LazyRender {
	seen: HashSet<usize>,
}

impl LazyRender {
	/// Records that catalog entry `i` is being painted and returns the font
	/// it should be painted with.
	pub fn observe(&mut self, i: usize) -> PreviewFont {
		match self.seen.insert(i) {
			true => PreviewFont::Default,
			false => PreviewFont::Derived,
		}
	}

	/// Forget every entry, as if the list was just created
	pub fn reset(&mut self) { self.seen.clear(); }

	#[inline]
	pub fn seen_count(&self) -> usize { self.seen.len() }
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn first_paint_is_default() {
		let mut lazy = LazyRender::default();
		assert_eq!(lazy.observe(4), PreviewFont::Default);
		assert_eq!(lazy.observe(4), PreviewFont::Derived);
		assert_eq!(lazy.observe(4), PreviewFont::Derived);
		assert_eq!(lazy.observe(2), PreviewFont::Default);
		assert_eq!(lazy.seen_count(), 2);
	}

	#[test]
	fn reset() {
		let mut lazy = LazyRender::default();
		lazy.observe(1);
		assert_eq!(lazy.observe(1), PreviewFont::Derived);

		lazy.reset();
		assert_eq!(lazy.seen_count(), 0);
		assert_eq!(lazy.observe(1), PreviewFont::Default);
	}
}
