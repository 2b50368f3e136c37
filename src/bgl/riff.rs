use log::debug;

use crate::bgl::bytes::{Cursor, read_u32_at};

/// Leading magic of a canonical chunk stream.
pub const RIFF_MAGIC: [u8; 4] = *b"RIFF";
/// Chunk tag wrapping binary glTF scene blocks.
pub const GLBD_TAG: [u8; 4] = *b"GLBD";

/// Payload span of one tagged chunk, kept alongside the stream it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkRegion<'a> {
	stream: &'a [u8],
	/// Offset of the first payload byte.
	pub start: usize,
	/// End implied by the declared size, clamped to the stream.
	pub end: usize,
}

impl<'a> ChunkRegion<'a> {
	/// Stream holding the chunk.
	pub fn stream(&self) -> &'a [u8] {
		self.stream
	}

	/// Payload bytes between `start` and `end`.
	pub fn payload(&self) -> &'a [u8] {
		self.stream.get(self.start..self.end).unwrap_or_default()
	}
}

/// Scans a RIFF stream for every chunk carrying `tag`, yielding payload regions.
///
/// Scanning starts past the 8-byte RIFF header and steps 4 bytes at a time
/// over anything that is not `tag`; other chunks are not skipped by their
/// declared size. After a match the cursor moves forward by the declared
/// size plus the common 4-byte step, which lands on the 4 bytes before the
/// next chunk header in well-formed streams. Payload regions are clamped to
/// the stream end; the declared size only bounds where block scanning stops.
pub struct ChunkScanner<'a> {
	stream: &'a [u8],
	tag: [u8; 4],
	pos: usize,
}

impl<'a> ChunkScanner<'a> {
	/// First scanned offset, past `RIFF` and its size field.
	pub const START: usize = 8;

	/// Scan `stream` for chunks tagged `tag`.
	pub fn new(stream: &'a [u8], tag: [u8; 4]) -> Self {
		Self {
			stream,
			tag,
			pos: Self::START,
		}
	}

	/// Scan `stream` for `GLBD` chunks.
	pub fn glbd(stream: &'a [u8]) -> Self {
		Self::new(stream, GLBD_TAG)
	}
}

impl<'a> Iterator for ChunkScanner<'a> {
	type Item = ChunkRegion<'a>;

	fn next(&mut self) -> Option<Self::Item> {
		let len = self.stream.len();
		while self.pos.checked_add(4).is_some_and(|end| end < len) {
			let at = self.pos;
			let tag = Cursor::at(self.stream, at).read_code4().ok()?;
			if tag != self.tag {
				self.pos = at + 4;
				continue;
			}

			let Ok(size) = read_u32_at(self.stream, at + 4) else {
				self.pos = len;
				return None;
			};

			let start = at + 8;
			let declared_end = start.saturating_add(size as usize);
			if declared_end > len {
				debug!("chunk at {at} declares {size} bytes, {} available; clamping", len - start);
			}

			self.pos = at.saturating_add(size as usize).saturating_add(4);
			return Some(ChunkRegion {
				stream: self.stream,
				start,
				end: declared_end.min(len),
			});
		}
		None
	}
}
