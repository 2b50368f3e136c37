use bgljson_testkit::{ArchiveBuilder, MODEL_DATA, ObjectSpec, object_id};

use crate::bgl::{Archive, BglError};

#[test]
fn filters_model_data_records_preserving_order() {
	let bytes = ArchiveBuilder::new()
		.model_record(vec![ObjectSpec::new(object_id(1), vec![0; 4])])
		.raw_record(0x0003, vec![0; 8])
		.model_record(Vec::new())
		.build();
	let archive = Archive::parse(&bytes).expect("archive parses");

	let offsets: Vec<u32> = archive.model_data_records().map(|record| record.payload_offset).collect();
	let all: Vec<u32> = archive.records().map(|record| record.payload_offset).collect();
	assert_eq!(offsets, vec![all[0], all[2]]);
	assert_eq!(archive.records_of_type(0x0003).count(), 1);
}

#[test]
fn record_stats_count_types_and_truncation() {
	let mut bytes = ArchiveBuilder::new()
		.raw_record(0x0003, Vec::new())
		.raw_record(0x0003, Vec::new())
		.raw_record(MODEL_DATA, Vec::new())
		.build();
	bytes[0x14..0x18].copy_from_slice(&9_u32.to_le_bytes());

	let stats = Archive::parse(&bytes).expect("archive parses").scan_record_stats();
	assert_eq!(stats.declared, 9);
	assert_eq!(stats.read, 3);
	assert_eq!(stats.by_type.get(&0x0003), Some(&2));
	assert_eq!(stats.by_type.get(&MODEL_DATA), Some(&1));
}

#[test]
fn rejects_bad_magic() {
	let mut bytes = ArchiveBuilder::new().model_record(Vec::new()).build();
	bytes[0] = 0;
	assert!(matches!(Archive::parse(&bytes), Err(BglError::BadMagic { .. })));
}
