use std::fs;
use std::path::Path;

use bgljson::bgl::{ExtractedJson, JsonSink};
use serde_json::json;

use crate::cmd::extract::{DirSink, archive_name, discover_archives};

fn touch(path: &Path) {
	if let Some(parent) = path.parent() {
		fs::create_dir_all(parent).expect("parent dir created");
	}
	fs::write(path, b"").expect("file written");
}

#[test]
fn single_file_is_taken_regardless_of_extension() {
	let dir = tempfile::tempdir().expect("tempdir");
	let file = dir.path().join("scenery.dat");
	touch(&file);

	let found = discover_archives(&file, "bgl", false).expect("discovery succeeds");
	assert_eq!(found, Some(vec![file]));
}

#[test]
fn directory_listing_filters_extension_and_respects_recursion() {
	let dir = tempfile::tempdir().expect("tempdir");
	let root = dir.path();
	touch(&root.join("b.bgl"));
	touch(&root.join("a.BGL"));
	touch(&root.join("notes.txt"));
	touch(&root.join("nested").join("c.bgl"));

	let flat = discover_archives(root, "bgl", false).expect("discovery succeeds").expect("dir exists");
	assert_eq!(flat, vec![root.join("a.BGL"), root.join("b.bgl")]);

	let deep = discover_archives(root, "bgl", true).expect("discovery succeeds").expect("dir exists");
	assert_eq!(deep, vec![root.join("a.BGL"), root.join("b.bgl"), root.join("nested").join("c.bgl")]);
}

#[test]
fn missing_input_is_reported_as_none() {
	let dir = tempfile::tempdir().expect("tempdir");
	let found = discover_archives(&dir.path().join("absent.bgl"), "bgl", true).expect("discovery succeeds");
	assert_eq!(found, None);
}

#[test]
fn archive_name_is_file_stem() {
	assert_eq!(archive_name(Path::new("/scenery/world/airport_ksea.bgl")), "airport_ksea");
}

#[test]
fn dir_sink_writes_pretty_json_in_source_key_order() {
	let dir = tempfile::tempdir().expect("tempdir");
	let mut sink = DirSink::new(dir.path());
	sink.accept(ExtractedJson {
		archive: "ksea".to_owned(),
		object_id: "00ff".to_owned(),
		ordinal: 3,
		value: serde_json::from_str(r#"{"zeta":1,"alpha":[true]}"#).expect("json parses"),
	})
	.expect("sink accepts");

	let text = fs::read_to_string(dir.path().join("ksea_00ff_3.json")).expect("file exists");
	assert_eq!(text, "{\n  \"zeta\": 1,\n  \"alpha\": [\n    true\n  ]\n}");
	assert_eq!(sink.written, 1);
	assert_eq!(serde_json::from_str::<serde_json::Value>(&text).expect("reparses"), json!({"zeta": 1, "alpha": [true]}));
}

#[cfg(unix)]
#[test]
fn unreadable_subdirectory_does_not_abort_discovery() {
	use std::os::unix::fs::PermissionsExt;

	let dir = tempfile::tempdir().expect("tempdir");
	let root = dir.path();
	let locked = root.join("locked");
	touch(&root.join("a.bgl"));
	touch(&locked.join("hidden.bgl"));
	fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).expect("permissions set");

	let found = discover_archives(root, "bgl", true);
	fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).expect("permissions restored");

	let found = found.expect("discovery succeeds").expect("dir exists");
	assert_eq!(found.first(), Some(&root.join("a.bgl")));
}
