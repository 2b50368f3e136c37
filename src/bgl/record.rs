use log::debug;

use crate::bgl::Result;
use crate::bgl::bytes::Cursor;

/// Top-level record type carrying model data.
pub const MODEL_DATA_RECORD: u32 = 0x002B;

/// One fixed-size descriptor from the archive's record table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record {
	/// Record type tag.
	pub record_type: u32,
	/// Absolute offset of the record payload.
	pub payload_offset: u32,
	/// Declared payload length.
	pub payload_size: u32,
	/// File offset of this descriptor.
	pub table_offset: usize,
}

impl Record {
	/// Descriptor stride within the record table.
	pub const SIZE: usize = 0x14;

	/// Parse one descriptor at the cursor position.
	pub fn parse(cursor: &mut Cursor<'_>) -> Result<Self> {
		let table_offset = cursor.pos();
		let record_type = cursor.read_u32_le()?;
		cursor.skip(8)?;
		let payload_offset = cursor.read_u32_le()?;
		let payload_size = cursor.read_u32_le()?;

		Ok(Self {
			record_type,
			payload_offset,
			payload_size,
			table_offset,
		})
	}

	/// True for model-data records.
	pub fn is_model_data(&self) -> bool {
		self.record_type == MODEL_DATA_RECORD
	}
}

/// Iterator over the record table, ending quietly at a truncated descriptor.
pub struct RecordIter<'a> {
	cursor: Cursor<'a>,
	left: u32,
}

impl<'a> RecordIter<'a> {
	/// Iterate `count` descriptors starting at `offset`.
	pub fn new(bytes: &'a [u8], offset: usize, count: u32) -> Self {
		Self {
			cursor: Cursor::at(bytes, offset),
			left: count,
		}
	}
}

impl Iterator for RecordIter<'_> {
	type Item = Record;

	fn next(&mut self) -> Option<Self::Item> {
		if self.left == 0 {
			return None;
		}

		if self.cursor.remaining() < Record::SIZE {
			debug!("record table truncated at offset {} with {} descriptors unread", self.cursor.pos(), self.left);
			self.left = 0;
			return None;
		}

		self.left -= 1;
		Record::parse(&mut self.cursor).ok()
	}
}

#[cfg(test)]
mod tests;
