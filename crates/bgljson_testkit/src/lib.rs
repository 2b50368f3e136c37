//! Synthetic BGL archive builders shared by workspace tests.

use serde_json::Value;

/// Top-level record type carrying model data.
pub const MODEL_DATA: u32 = 0x002B;
/// Fixed header length.
pub const HEADER_SIZE: usize = 0x38;
/// Top-level record descriptor stride.
pub const RECORD_STRIDE: usize = 0x14;
/// Object-table entry stride.
pub const OBJECT_STRIDE: usize = 24;

const MAGIC_LEADING: [u8; 4] = [0x01, 0x02, 0x92, 0x19];
const MAGIC_SECONDARY: [u8; 4] = [0x03, 0x18, 0x05, 0x08];

/// Deterministic 16-byte identifier whose bytes count up from `seed`.
pub fn object_id(seed: u8) -> [u8; 16] {
	let mut id = [0_u8; 16];
	for (idx, byte) in id.iter_mut().enumerate() {
		*byte = seed.wrapping_add(idx as u8);
	}
	id
}

/// Lowercase hex rendering of an identifier, matching output file names.
pub fn id_hex(id: &[u8; 16]) -> String {
	id.iter().map(|byte| format!("{byte:02x}")).collect()
}

/// Bare 0x38-byte header declaring `record_count` records.
pub fn header_bytes(record_count: u32) -> Vec<u8> {
	let mut out = vec![0_u8; HEADER_SIZE];
	out[0..4].copy_from_slice(&MAGIC_LEADING);
	out[4..8].copy_from_slice(&(HEADER_SIZE as u32).to_le_bytes());
	out[0x10..0x14].copy_from_slice(&MAGIC_SECONDARY);
	out[0x14..0x18].copy_from_slice(&record_count.to_le_bytes());
	out
}

/// GLB body (no `GLB\0` framing) whose JSON chunk declares `declared_len` bytes.
pub fn glb_body_with_length(json: &[u8], declared_len: u32) -> Vec<u8> {
	let mut out = Vec::new();
	out.extend_from_slice(b"glTF");
	out.extend_from_slice(&2_u32.to_le_bytes());
	out.extend_from_slice(&((20 + json.len()) as u32).to_le_bytes());
	out.extend_from_slice(&declared_len.to_le_bytes());
	out.extend_from_slice(b"JSON");
	out.extend_from_slice(json);
	out
}

/// GLB body carrying `json`, space-padded to a 4-byte boundary like glTF writers do.
pub fn glb_body(json: &str) -> Vec<u8> {
	let mut text = json.as_bytes().to_vec();
	while text.len() % 4 != 0 {
		text.push(b' ');
	}
	glb_body_with_length(&text, text.len() as u32)
}

/// Wrap a GLB body in a `GLB\0` scene block header.
pub fn frame_glb(body: &[u8]) -> Vec<u8> {
	let mut out = Vec::with_capacity(body.len() + 8);
	out.extend_from_slice(b"GLB\0");
	out.extend_from_slice(&(body.len() as u32).to_le_bytes());
	out.extend_from_slice(body);
	out
}

/// Framed scene block carrying `json` text.
pub fn glb_block(json: &str) -> Vec<u8> {
	frame_glb(&glb_body(json))
}

/// Framed scene block carrying the compact serialization of `value`.
pub fn glb_block_from_value(value: &Value) -> Vec<u8> {
	glb_block(&value.to_string())
}

/// Tagged chunk with an arbitrary 4-byte tag.
pub fn chunk(tag: [u8; 4], payload: &[u8]) -> Vec<u8> {
	let mut out = Vec::with_capacity(payload.len() + 8);
	out.extend_from_slice(&tag);
	out.extend_from_slice(&(payload.len() as u32).to_le_bytes());
	out.extend_from_slice(payload);
	out
}

/// `GLBD` chunk holding the given scene blocks back to back.
pub fn glbd_chunk(blocks: &[Vec<u8>]) -> Vec<u8> {
	chunk(*b"GLBD", &blocks.concat())
}

/// RIFF stream (`RIFF`, size, `MDL8`) followed by `chunks`.
pub fn riff_stream(chunks: &[Vec<u8>]) -> Vec<u8> {
	let body = chunks.concat();
	let mut out = Vec::with_capacity(body.len() + 12);
	out.extend_from_slice(b"RIFF");
	out.extend_from_slice(&((body.len() + 4) as u32).to_le_bytes());
	out.extend_from_slice(b"MDL8");
	out.extend_from_slice(&body);
	out
}

/// One object-table entry and its payload.
#[derive(Debug, Clone)]
pub struct ObjectSpec {
	/// 16-byte object identifier.
	pub id: [u8; 16],
	/// Bytes placed in the payload area.
	pub payload: Vec<u8>,
	/// Size written to the entry, defaulting to `payload.len()`.
	pub declared_size: Option<u32>,
}

impl ObjectSpec {
	/// Entry whose declared size matches its payload.
	pub fn new(id: [u8; 16], payload: Vec<u8>) -> Self {
		Self {
			id,
			payload,
			declared_size: None,
		}
	}

	/// Override the payload size written to the entry.
	pub fn with_declared_size(mut self, size: u32) -> Self {
		self.declared_size = Some(size);
		self
	}

	fn size(&self) -> u32 {
		self.declared_size.unwrap_or(self.payload.len() as u32)
	}
}

#[derive(Debug, Clone)]
enum RecordSpec {
	Model { objects: Vec<ObjectSpec>, subrecord_size: Option<u32> },
	Raw { record_type: u32, payload: Vec<u8> },
	Dangling { record_type: u32, payload_offset: u32 },
}

/// Builder for complete synthetic archives.
#[derive(Debug, Clone, Default)]
pub struct ArchiveBuilder {
	records: Vec<RecordSpec>,
}

impl ArchiveBuilder {
	/// Start an archive with no records.
	pub fn new() -> Self {
		Self::default()
	}

	/// Append a model-data record whose subrecord size covers every object.
	pub fn model_record(mut self, objects: Vec<ObjectSpec>) -> Self {
		self.records.push(RecordSpec::Model {
			objects,
			subrecord_size: None,
		});
		self
	}

	/// Append a model-data record with an explicit subrecord size.
	pub fn model_record_with_size(mut self, objects: Vec<ObjectSpec>, subrecord_size: u32) -> Self {
		self.records.push(RecordSpec::Model {
			objects,
			subrecord_size: Some(subrecord_size),
		});
		self
	}

	/// Append a record of any type with an opaque payload.
	pub fn raw_record(mut self, record_type: u32, payload: Vec<u8>) -> Self {
		self.records.push(RecordSpec::Raw { record_type, payload });
		self
	}

	/// Append a record whose payload offset points wherever the caller says.
	pub fn dangling_record(mut self, record_type: u32, payload_offset: u32) -> Self {
		self.records.push(RecordSpec::Dangling { record_type, payload_offset });
		self
	}

	/// Serialize header, record table, and record payloads.
	pub fn build(&self) -> Vec<u8> {
		let mut out = header_bytes(self.records.len() as u32);
		let mut table = Vec::with_capacity(self.records.len() * RECORD_STRIDE);
		let mut regions = Vec::new();
		let mut next_region = HEADER_SIZE + self.records.len() * RECORD_STRIDE;

		for record in &self.records {
			let (record_type, payload_offset, region) = match record {
				RecordSpec::Model { objects, subrecord_size } => {
					let region = model_region(next_region, objects, *subrecord_size);
					(MODEL_DATA, next_region as u32, region)
				}
				RecordSpec::Raw { record_type, payload } => (*record_type, next_region as u32, payload.clone()),
				RecordSpec::Dangling { record_type, payload_offset } => (*record_type, *payload_offset, Vec::new()),
			};

			table.extend_from_slice(&record_type.to_le_bytes());
			table.extend_from_slice(&[0_u8; 8]);
			table.extend_from_slice(&payload_offset.to_le_bytes());
			table.extend_from_slice(&(region.len() as u32).to_le_bytes());
			next_region += region.len();
			regions.push(region);
		}

		out.extend_from_slice(&table);
		for region in regions {
			out.extend_from_slice(&region);
		}
		out
	}
}

fn model_region(start: usize, objects: &[ObjectSpec], subrecord_size: Option<u32>) -> Vec<u8> {
	let subrecord_offset = start + 16;
	let table_len = objects.len() * OBJECT_STRIDE;
	let covered = objects
		.iter()
		.map(|object| object.size().saturating_add(OBJECT_STRIDE as u32))
		.fold(0_u32, u32::saturating_add);

	let mut out = Vec::new();
	out.extend_from_slice(&[0_u8; 8]);
	out.extend_from_slice(&(subrecord_offset as u32).to_le_bytes());
	out.extend_from_slice(&subrecord_size.unwrap_or(covered).to_le_bytes());

	let mut relative = table_len;
	for object in objects {
		out.extend_from_slice(&object.id);
		out.extend_from_slice(&(relative as u32).to_le_bytes());
		out.extend_from_slice(&object.size().to_le_bytes());
		relative += object.payload.len();
	}
	for object in objects {
		out.extend_from_slice(&object.payload);
	}
	out
}
