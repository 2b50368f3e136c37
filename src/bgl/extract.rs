use log::debug;
use serde_json::Value;

use crate::bgl::{Archive, ChunkScanner, GLB_SIGNATURE, GLBD_TAG, GlbBlockIter, MODEL_DATA_RECORD, Result, decode_glb_json};

/// Tags selecting which records, chunks, and blocks are walked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractOptions {
	/// Top-level record type whose object tables are walked.
	pub record_type: u32,
	/// RIFF chunk tag whose payload holds scene blocks.
	pub chunk_tag: [u8; 4],
	/// Signature framing each scene block.
	pub block_signature: [u8; 4],
}

impl Default for ExtractOptions {
	fn default() -> Self {
		Self::for_model_data()
	}
}

impl ExtractOptions {
	/// Model-data records, `GLBD` chunks, `GLB\0` blocks.
	pub fn for_model_data() -> Self {
		Self {
			record_type: MODEL_DATA_RECORD,
			chunk_tag: GLBD_TAG,
			block_signature: GLB_SIGNATURE,
		}
	}
}

/// One recovered JSON document and where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedJson {
	/// Archive name (file stem).
	pub archive: String,
	/// Owning object identifier, lowercase hex.
	pub object_id: String,
	/// Position among the values emitted for this object.
	pub ordinal: u32,
	/// Parsed document.
	pub value: Value,
}

impl ExtractedJson {
	/// Output file name, `{archive}_{object_id}_{ordinal}.json`.
	pub fn file_name(&self) -> String {
		format!("{}_{}_{}.json", self.archive, self.object_id, self.ordinal)
	}
}

/// Destination for extracted documents.
pub trait JsonSink {
	/// Persist one document. Errors abort the current archive.
	fn accept(&mut self, item: ExtractedJson) -> Result<()>;
}

impl JsonSink for Vec<ExtractedJson> {
	fn accept(&mut self, item: ExtractedJson) -> Result<()> {
		self.push(item);
		Ok(())
	}
}

/// Per-archive extraction tally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractSummary {
	/// Records of the selected type.
	pub records: usize,
	/// Object entries with in-bounds payloads.
	pub objects: usize,
	/// Object entries skipped for out-of-bounds payloads.
	pub skipped_objects: usize,
	/// Objects whose payload is a RIFF stream.
	pub scene_payloads: usize,
	/// Scene blocks found inside matching chunks.
	pub blocks: usize,
	/// Documents handed to the sink.
	pub extracted: usize,
}

/// Validate the header of `bytes` and extract every embedded document.
pub fn extract_bytes<S: JsonSink + ?Sized>(name: &str, bytes: &[u8], options: &ExtractOptions, sink: &mut S) -> Result<ExtractSummary> {
	let archive = Archive::parse(bytes)?;
	extract_archive(name, &archive, options, sink)
}

/// Walk records, objects, chunks, and blocks, handing each decoded document to `sink`.
///
/// Malformed records, entries, chunks, and blocks are logged and skipped;
/// only sink failures are returned as errors.
pub fn extract_archive<S: JsonSink + ?Sized>(name: &str, archive: &Archive<'_>, options: &ExtractOptions, sink: &mut S) -> Result<ExtractSummary> {
	let mut summary = ExtractSummary::default();

	for record in archive.records_of_type(options.record_type) {
		summary.records += 1;
		let mut objects = archive.objects(&record);

		for entry in objects.by_ref() {
			summary.objects += 1;
			let Some(stream) = entry.scene_payload() else {
				debug!("object {} at {} is not a RIFF stream", entry.id_hex(), entry.table_offset);
				continue;
			};
			summary.scene_payloads += 1;

			let object_id = entry.id_hex();
			let mut ordinal = 0_u32;
			for chunk in ChunkScanner::new(stream, options.chunk_tag) {
				for block in GlbBlockIter::in_chunk(chunk, options.block_signature) {
					summary.blocks += 1;
					let Some(value) = decode_glb_json(block) else {
						continue;
					};
					if !is_emittable(&value) {
						debug!("object {object_id}: skipping empty JSON value");
						continue;
					}

					sink.accept(ExtractedJson {
						archive: name.to_owned(),
						object_id: object_id.clone(),
						ordinal,
						value,
					})?;
					summary.extracted += 1;
					ordinal += 1;
				}
			}
		}

		summary.skipped_objects += objects.skipped();
	}

	Ok(summary)
}

/// False for `null`, `false`, zero, and empty strings, arrays, and objects.
pub fn is_emittable(value: &Value) -> bool {
	match value {
		Value::Null => false,
		Value::Bool(flag) => *flag,
		Value::Number(number) => !matches!(number.as_f64(), Some(n) if n == 0.0),
		Value::String(text) => !text.is_empty(),
		Value::Array(items) => !items.is_empty(),
		Value::Object(fields) => !fields.is_empty(),
	}
}
