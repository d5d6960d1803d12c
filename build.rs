fn main() {
	// rebuild if new commit
	println!("cargo:rerun-if-changed=.git/logs/HEAD");

	shadow_rs::new().expect("Could not initialize shadow_rs");
}
