use catalog::{Catalog, Database, FontEntry, FontHandle};
use egui::{vec2, Context, FontDefinitions, Pos2, RawInput, Rect};
use font_book::{consts::*, FontBookApp};

fn app() -> FontBookApp {
	FontBookApp::with_catalog(Catalog::from_entries(
		[
			("Georgia", "Georgia"),
			("Arial", "ArialMT"),
			("Courier New", "CourierNewPSMT"),
		]
		.iter()
		.map(|(family, logical)| FontEntry::new(FontHandle::detached(), family, logical))
		.collect(),
	))
}

fn run_frame(ctx: &Context, app: &mut FontBookApp) {
	let input = RawInput {
		screen_rect: Some(Rect::from_min_size(Pos2::ZERO, vec2(1000.0, 700.0))),
		..Default::default()
	};
	let _ = ctx.run(input, |ctx| app.ui(ctx));
}

#[test]
fn shows_everything_at_start() {
	let app = app();
	assert_eq!(app.shown(), &[0, 1, 2]);
	assert_eq!(app.state().preview_size(), DEFAULT_PREVIEW_SIZE);
	assert_eq!(app.state().preview_text, DEFAULT_PREVIEW_TEXT);
}

#[test]
fn lazy_font_loading() {
	let ctx = Context::default();
	let mut app = app();

	// first paint only records the rows
	assert_eq!(app.list().lazy().seen_count(), 0);
	run_frame(&ctx, &mut app);
	assert_eq!(app.list().lazy().seen_count(), 3);

	// later paints try to load their fonts, which don't exist on disk
	run_frame(&ctx, &mut app);
	assert_eq!(app.fonts().failed_count(), 3);
	assert_eq!(app.fonts().active_count(), 0);

	// and they stay on the default font without panicking
	run_frame(&ctx, &mut app);
	assert_eq!(app.fonts().failed_count(), 3);
}

#[test]
fn searching() {
	let ctx = Context::default();
	let mut app = app();
	run_frame(&ctx, &mut app);

	app.state_mut().search_query = String::from("RI");
	app.sync_query();
	assert_eq!(app.shown(), &[0, 1]);

	// a new query starts a new list
	assert_eq!(app.list().lazy().seen_count(), 0);

	run_frame(&ctx, &mut app);
	assert_eq!(app.list().lazy().seen_count(), 2);

	app.state_mut().search_query.clear();
	app.sync_query();
	assert_eq!(app.shown(), &[0, 1, 2]);
}

#[test]
fn size_does_not_change_entries() {
	let ctx = Context::default();
	let mut app = app();
	app.state_mut().search_query = String::from("new");
	app.sync_query();
	let before = app.shown().to_vec();

	for size in [PREVIEW_SIZE_MIN, 40, PREVIEW_SIZE_MAX] {
		app.state_mut().set_preview_size(size);
		run_frame(&ctx, &mut app);
		assert_eq!(app.shown(), before.as_slice());
	}
}

#[test]
fn selection_cleared_when_filtered_out() {
	let mut app = app();

	app.state_mut().selected = Some(2);
	app.state_mut().search_query = String::from("arial");
	app.sync_query();
	assert_eq!(app.state().selected, None);

	app.state_mut().selected = Some(0);
	app.state_mut().search_query = String::from("a");
	app.sync_query();
	assert_eq!(app.state().selected, Some(0));
}

#[test]
fn no_matches() {
	let ctx = Context::default();
	let mut app = app();
	app.state_mut().search_query = String::from("helvetica");
	app.sync_query();
	assert!(app.shown().is_empty());
	run_frame(&ctx, &mut app);
	assert_eq!(app.list().lazy().seen_count(), 0);
}

fn push_u16(out: &mut Vec<u8>, value: u16) { out.extend(value.to_be_bytes()); }

fn push_u32(out: &mut Vec<u8>, value: u32) { out.extend(value.to_be_bytes()); }

/// A font file whose only table is `name`. Enough for font enumeration to
/// list it, but not a face anything can draw with.
fn name_only_font(family: &str, post_script: &str) -> Vec<u8> {
	let names = [(1u16, family), (6u16, post_script)];
	let strings: Vec<Vec<u8>> = names
		.iter()
		.map(|(_, s)| s.encode_utf16().flat_map(|u| u.to_be_bytes()).collect())
		.collect();

	let mut name = Vec::new();
	push_u16(&mut name, 0); // format
	push_u16(&mut name, names.len() as u16);
	push_u16(&mut name, 6 + 12 * names.len() as u16);
	let mut offset: u16 = 0;
	for ((name_id, _), string) in names.iter().zip(&strings) {
		push_u16(&mut name, 3); // windows
		push_u16(&mut name, 1); // unicode BMP
		push_u16(&mut name, 0x0409); // en-US
		push_u16(&mut name, *name_id);
		push_u16(&mut name, string.len() as u16);
		push_u16(&mut name, offset);
		offset += string.len() as u16;
	}
	strings.iter().for_each(|string| name.extend(string));

	let mut font = Vec::new();
	push_u32(&mut font, 0x0001_0000);
	push_u16(&mut font, 1); // table count
	push_u16(&mut font, 16);
	push_u16(&mut font, 0);
	push_u16(&mut font, 0);
	font.extend(b"name");
	push_u32(&mut font, 0); // checksum
	push_u32(&mut font, 12 + 16);
	push_u32(&mut font, name.len() as u32);
	font.extend(name);
	font
}

fn app_with_fonts(fonts: Vec<Vec<u8>>) -> FontBookApp {
	let mut db = Database::new();
	fonts.into_iter().for_each(|data| db.load_font_data(data));
	FontBookApp::with_catalog(Catalog::from_database(db).expect("fonts should have loaded"))
}

#[test]
fn real_face_becomes_active() {
	let hack = FontDefinitions::default().font_data["Hack"].font.to_vec();
	let ctx = Context::default();
	let mut app = app_with_fonts(vec![hack]);
	assert_eq!(app.catalog().len(), 1);

	for _ in 0..3 {
		run_frame(&ctx, &mut app);
	}

	assert_eq!(app.fonts().active_count(), 1);
	assert_eq!(app.fonts().failed_count(), 0);
	assert_eq!(app.fonts().source_count(), 1);

	// drawing with it keeps working
	run_frame(&ctx, &mut app);
	assert_eq!(app.fonts().active_count(), 1);
}

#[test]
fn unparsable_face_stays_on_default_font() {
	let ctx = Context::default();
	let mut app = app_with_fonts(vec![name_only_font("Broken", "Broken-Regular")]);
	assert_eq!(app.catalog().entries()[0].family_name, "Broken");

	for _ in 0..4 {
		run_frame(&ctx, &mut app);
	}

	assert_eq!(app.fonts().failed_count(), 1);
	assert_eq!(app.fonts().active_count(), 0);
}

#[test]
fn mixed_faces() {
	let hack = FontDefinitions::default().font_data["Hack"].font.to_vec();
	let ctx = Context::default();
	let mut app = app_with_fonts(vec![hack, name_only_font("Broken", "Broken-Regular")]);
	assert_eq!(app.catalog().len(), 2);

	for _ in 0..4 {
		run_frame(&ctx, &mut app);
	}

	assert_eq!(app.fonts().active_count(), 1);
	assert_eq!(app.fonts().failed_count(), 1);
}
