use bgljson_testkit::{ArchiveBuilder, MODEL_DATA, ObjectSpec, object_id, riff_stream};

use crate::bgl::{Archive, ObjectIter, Record};

fn only_record(bytes: &[u8]) -> Record {
	let archive = Archive::parse(bytes).expect("archive parses");
	archive.records().next().expect("one record")
}

#[test]
fn yields_entries_with_resolved_payloads() {
	let bytes = ArchiveBuilder::new()
		.model_record(vec![
			ObjectSpec::new(object_id(0x10), b"first".to_vec()),
			ObjectSpec::new(object_id(0x20), b"second!".to_vec()),
		])
		.build();

	let entries: Vec<_> = ObjectIter::new(&bytes, &only_record(&bytes)).collect();
	assert_eq!(entries.len(), 2);
	assert_eq!(entries[0].payload, b"first");
	assert_eq!(entries[1].payload, b"second!");
	assert_eq!(entries[0].id_hex(), "101112131415161718191a1b1c1d1e1f");
	assert_eq!(entries[1].relative_offset, 48 + 5);
}

#[test]
fn empty_object_table_yields_nothing() {
	let bytes = ArchiveBuilder::new().model_record(Vec::new()).build();
	let mut iter = ObjectIter::new(&bytes, &only_record(&bytes));
	assert!(iter.table().is_some(), "table header is in bounds");
	assert!(iter.next().is_none());
	assert_eq!(iter.entries_read(), 0);
}

#[test]
fn oversized_subrecord_size_stops_at_buffer_boundary() {
	let bytes = ArchiveBuilder::new()
		.model_record_with_size(
			vec![
				ObjectSpec::new(object_id(1), vec![0xAA; 4]),
				ObjectSpec::new(object_id(2), vec![0xBB; 4]),
			],
			10_000,
		)
		.build();

	let mut iter = ObjectIter::new(&bytes, &only_record(&bytes));
	let ids: Vec<[u8; 16]> = iter.by_ref().map(|entry| entry.id).collect();
	assert_eq!(ids, vec![object_id(1), object_id(2)]);
	assert_eq!(iter.entries_read(), 2);
}

#[test]
fn out_of_bounds_payload_is_counted_but_not_yielded() {
	let bytes = ArchiveBuilder::new()
		.model_record(vec![
			ObjectSpec::new(object_id(1), vec![1; 8]).with_declared_size(0x00FF_FFFF),
			ObjectSpec::new(object_id(2), vec![2; 8]),
		])
		.build();

	let mut iter = ObjectIter::new(&bytes, &only_record(&bytes));
	let entries: Vec<_> = iter.by_ref().collect();
	assert_eq!(entries.len(), 1);
	assert_eq!(entries[0].id, object_id(2));
	assert_eq!(iter.skipped(), 1);
	assert_eq!(iter.entries_read(), 2);
}

#[test]
fn record_with_unreadable_model_header_is_skipped() {
	let bytes = ArchiveBuilder::new().dangling_record(MODEL_DATA, 0xFFFF_FFF0).build();
	let mut iter = ObjectIter::new(&bytes, &only_record(&bytes));
	assert!(iter.table().is_none());
	assert!(iter.next().is_none());
}

#[test]
fn scene_payload_requires_riff_magic() {
	let bytes = ArchiveBuilder::new()
		.model_record(vec![
			ObjectSpec::new(object_id(1), riff_stream(&[])),
			ObjectSpec::new(object_id(2), b"MDLX-not-riff".to_vec()),
		])
		.build();

	let entries: Vec<_> = ObjectIter::new(&bytes, &only_record(&bytes)).collect();
	assert!(entries[0].scene_payload().is_some());
	assert!(entries[1].scene_payload().is_none());
}
