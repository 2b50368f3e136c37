use log::warn;
use serde_json::Value;

use crate::bgl::bytes::{Cursor, read_u32_at, slice_at};
use crate::bgl::riff::ChunkRegion;

/// Signature framing each binary glTF block inside a `GLBD` chunk.
pub const GLB_SIGNATURE: [u8; 4] = *b"GLB\0";
/// Offset of the JSON chunk length inside a GLB block.
pub const JSON_LENGTH_OFFSET: usize = 0x0C;
/// Offset of the JSON chunk data inside a GLB block.
pub const JSON_START: usize = 0x14;

/// Walks a chunk payload for signed, length-prefixed GLB blocks.
///
/// The scan cursor runs from `start` up to `bound`, but a block is only
/// required to fit inside the whole stream, so a chunk whose declared size
/// under-reports its contents still yields the blocks it holds. Blocks
/// running past the stream are reported and the scan moves on by 4 bytes,
/// as it does for any non-matching signature.
pub struct GlbBlockIter<'a> {
	stream: &'a [u8],
	signature: [u8; 4],
	pos: usize,
	bound: usize,
}

impl<'a> GlbBlockIter<'a> {
	/// Scan `stream[start..bound]` for blocks framed with `signature`.
	pub fn new(stream: &'a [u8], start: usize, bound: usize, signature: [u8; 4]) -> Self {
		Self {
			stream,
			signature,
			pos: start,
			bound: bound.min(stream.len()),
		}
	}

	/// Scan the payload of `chunk` for blocks framed with `signature`.
	pub fn in_chunk(chunk: ChunkRegion<'a>, signature: [u8; 4]) -> Self {
		Self::new(chunk.stream(), chunk.start, chunk.end, signature)
	}

	/// Scan the whole of `region` for `GLB\0` blocks.
	pub fn glb(region: &'a [u8]) -> Self {
		Self::new(region, 0, region.len(), GLB_SIGNATURE)
	}
}

impl<'a> Iterator for GlbBlockIter<'a> {
	type Item = &'a [u8];

	fn next(&mut self) -> Option<Self::Item> {
		while self.pos < self.bound {
			if self.stream.len() - self.pos < 8 {
				self.pos = self.bound;
				return None;
			}

			let mut cursor = Cursor::at(self.stream, self.pos);
			let signature = cursor.read_code4().ok()?;
			if signature != self.signature {
				self.pos += 4;
				continue;
			}

			let size = cursor.read_u32_le().ok()? as usize;
			let start = self.pos + 8;
			match slice_at(self.stream, start, size) {
				Some(block) => {
					self.pos = start + size;
					return Some(block);
				}
				None => {
					warn!("GLB size {size} at offset {} exceeds bounds ({} bytes in stream)", self.pos, self.stream.len());
					self.pos += 4;
				}
			}
		}
		None
	}
}

/// Decode the JSON chunk of one GLB block.
///
/// Returns `None` when the block is too short, the declared JSON length
/// overruns the block, or the text does not parse.
pub fn decode_glb_json(block: &[u8]) -> Option<Value> {
	if block.len() < JSON_START {
		warn!("GLB block of {} bytes is too small for a JSON chunk header", block.len());
		return None;
	}

	let json_length = read_u32_at(block, JSON_LENGTH_OFFSET).ok()?;
	let Some(raw) = slice_at(block, JSON_START, json_length as usize) else {
		warn!("JSON length {json_length} exceeds GLB size {}", block.len());
		return None;
	};

	let cleaned = sanitize_json_bytes(raw);
	let text: String = cleaned.utf8_chunks().map(|chunk| chunk.valid()).collect();
	match serde_json::from_str(text.trim()) {
		Ok(value) => Some(value),
		Err(err) => {
			warn!("error parsing JSON: {err}");
			None
		}
	}
}

/// Replace every byte outside printable ASCII with a space, keeping length.
pub fn sanitize_json_bytes(raw: &[u8]) -> Vec<u8> {
	raw.iter().map(|&byte| if (0x20..=0x7E).contains(&byte) { byte } else { b' ' }).collect()
}
