use std::path::PathBuf;

use bgljson::bgl::{BglFile, ChunkScanner, ExtractOptions, GlbBlockIter, ObjectIter, Record, Result};
use serde::Serialize;

use crate::cmd::util::{parse_u32_literal, render_record_type};

#[derive(clap::Args)]
pub struct Args {
	/// Archive file to summarize.
	pub path: PathBuf,
	/// Record type whose object tables are summarized.
	#[arg(long, default_value = "0x2B", value_parser = parse_u32_literal)]
	pub record_type: u32,
	/// Emit the report as JSON.
	#[arg(long)]
	pub json: bool,
}

#[derive(Debug, Serialize)]
struct InfoReport {
	path: String,
	header_size: u32,
	record_count: u32,
	records_read: u32,
	record_types: Vec<TypeCount>,
	model_records: Vec<ModelRecordReport>,
}

#[derive(Debug, Serialize)]
struct TypeCount {
	record_type: String,
	count: u32,
}

#[derive(Debug, Serialize)]
struct ModelRecordReport {
	table_offset: usize,
	payload_offset: u32,
	subrecord_offset: Option<u32>,
	subrecord_size: Option<u32>,
	entries: usize,
	skipped: usize,
	scene_payloads: usize,
	glb_blocks: usize,
}

/// Print header fields, record-type counts, and per-record object statistics.
pub fn run(args: Args) -> Result<()> {
	let Args { path, record_type, json } = args;

	let file = BglFile::open(&path)?;
	let archive = file.archive();
	let stats = archive.scan_record_stats();
	let options = ExtractOptions {
		record_type,
		..ExtractOptions::for_model_data()
	};

	let report = InfoReport {
		path: path.display().to_string(),
		header_size: file.header.header_size,
		record_count: stats.declared,
		records_read: stats.read,
		record_types: stats
			.by_type
			.iter()
			.map(|(record_type, count)| TypeCount {
				record_type: render_record_type(*record_type),
				count: *count,
			})
			.collect(),
		model_records: archive
			.records_of_type(record_type)
			.map(|record| model_record_report(file.bytes(), &record, &options))
			.collect(),
	};

	if json {
		println!("{}", serde_json::to_string_pretty(&report)?);
	} else {
		print_report(&report);
	}

	Ok(())
}

fn model_record_report(bytes: &[u8], record: &Record, options: &ExtractOptions) -> ModelRecordReport {
	let mut objects = ObjectIter::new(bytes, record);
	let table = objects.table();
	let mut scene_payloads = 0;
	let mut glb_blocks = 0;

	for entry in objects.by_ref() {
		let Some(stream) = entry.scene_payload() else {
			continue;
		};
		scene_payloads += 1;
		glb_blocks += ChunkScanner::new(stream, options.chunk_tag)
			.map(|chunk| GlbBlockIter::in_chunk(chunk, options.block_signature).count())
			.sum::<usize>();
	}

	ModelRecordReport {
		table_offset: record.table_offset,
		payload_offset: record.payload_offset,
		subrecord_offset: table.map(|table| table.subrecord_offset),
		subrecord_size: table.map(|table| table.subrecord_size),
		entries: objects.entries_read(),
		skipped: objects.skipped(),
		scene_payloads,
		glb_blocks,
	}
}

fn print_report(report: &InfoReport) {
	println!("path: {}", report.path);
	println!("header_size: {}", report.header_size);
	println!("record_count: {}", report.record_count);
	println!("records_read: {}", report.records_read);

	println!("record_types:");
	for item in &report.record_types {
		println!("  {}: {}", item.record_type, item.count);
	}

	println!("model_records:");
	for (idx, item) in report.model_records.iter().enumerate() {
		let Some(subrecord_offset) = item.subrecord_offset else {
			println!("  [{idx}] payload_offset=0x{:x} unreadable", item.payload_offset);
			continue;
		};
		println!(
			"  [{idx}] payload_offset=0x{:x} subrecord_offset=0x{subrecord_offset:x} entries={} skipped={} scene_payloads={} glb_blocks={}",
			item.payload_offset, item.entries, item.skipped, item.scene_payloads, item.glb_blocks
		);
	}
}
