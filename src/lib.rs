pub mod consts;
mod font_book_app;
mod font_list;
mod lazy_render;
mod preview_fonts;
mod style;
mod view_state;

pub use crate::{
	font_book_app::FontBookApp,
	font_list::FontList,
	lazy_render::{LazyRender, PreviewFont},
	preview_fonts::PreviewFonts,
	style::style,
	view_state::ViewState,
};
