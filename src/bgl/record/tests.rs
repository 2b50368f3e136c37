use bgljson_testkit::{ArchiveBuilder, HEADER_SIZE, MODEL_DATA, header_bytes};

use crate::bgl::bytes::Cursor;
use crate::bgl::{Record, RecordIter};

#[test]
fn parses_descriptor_fields() {
	let mut bytes = Vec::new();
	bytes.extend_from_slice(&0x2B_u32.to_le_bytes());
	bytes.extend_from_slice(&[0xAA; 8]);
	bytes.extend_from_slice(&0x1000_u32.to_le_bytes());
	bytes.extend_from_slice(&0x0200_u32.to_le_bytes());

	let record = Record::parse(&mut Cursor::at(&bytes, 0)).expect("descriptor parses");
	assert_eq!(record.record_type, 0x2B);
	assert_eq!(record.payload_offset, 0x1000);
	assert_eq!(record.payload_size, 0x0200);
	assert_eq!(record.table_offset, 0);
	assert!(record.is_model_data());
}

#[test]
fn enumerates_records_in_file_order() {
	let bytes = ArchiveBuilder::new()
		.raw_record(0x0003, vec![1, 2, 3, 4])
		.model_record(Vec::new())
		.raw_record(0x0065, vec![0; 8])
		.build();

	let types: Vec<u32> = RecordIter::new(&bytes, HEADER_SIZE, 3).map(|record| record.record_type).collect();
	assert_eq!(types, vec![0x0003, MODEL_DATA, 0x0065]);
}

#[test]
fn stops_at_truncated_descriptor() {
	let mut bytes = header_bytes(5);
	bytes.extend_from_slice(&ArchiveBuilder::new().raw_record(7, Vec::new()).build()[HEADER_SIZE..HEADER_SIZE + Record::SIZE]);
	bytes.extend_from_slice(&[0_u8; Record::SIZE - 1]);

	let records: Vec<Record> = RecordIter::new(&bytes, HEADER_SIZE, 5).collect();
	assert_eq!(records.len(), 1);
	assert_eq!(records[0].record_type, 7);
}
