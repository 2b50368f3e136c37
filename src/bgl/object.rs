use log::debug;

use crate::bgl::bytes::{Cursor, slice_at};
use crate::bgl::riff::RIFF_MAGIC;
use crate::bgl::{Record, Result};

/// Object-table location stored at the start of a model-data record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelDataHeader {
	/// Absolute offset of the first object entry.
	pub subrecord_offset: u32,
	/// Sum of `payload_size + 24` over all entries.
	pub subrecord_size: u32,
}

impl ModelDataHeader {
	/// Bytes that must be readable at the record payload offset.
	pub const SIZE: usize = 16;

	/// Parse the header at `offset`.
	pub fn parse(bytes: &[u8], offset: usize) -> Result<Self> {
		let mut cursor = Cursor::at(bytes, offset);
		cursor.skip(8)?;
		Ok(Self {
			subrecord_offset: cursor.read_u32_le()?,
			subrecord_size: cursor.read_u32_le()?,
		})
	}
}

/// One object entry whose payload lies inside the archive.
#[derive(Debug, Clone, Copy)]
pub struct ObjectEntry<'a> {
	/// Opaque 16-byte identifier.
	pub id: [u8; 16],
	/// Payload offset relative to the object table start.
	pub relative_offset: u32,
	/// Declared payload length.
	pub payload_size: u32,
	/// File offset of the entry itself.
	pub table_offset: usize,
	/// Resolved payload bytes.
	pub payload: &'a [u8],
}

impl<'a> ObjectEntry<'a> {
	/// Entry stride within the object table.
	pub const SIZE: usize = 24;

	/// Identifier as lowercase hex, bytes in file order.
	pub fn id_hex(&self) -> String {
		self.id.iter().map(|byte| format!("{byte:02x}")).collect()
	}

	/// Payload if it is a RIFF chunk stream, `None` otherwise.
	pub fn scene_payload(&self) -> Option<&'a [u8]> {
		self.payload.starts_with(&RIFF_MAGIC).then_some(self.payload)
	}
}

/// Lazy walk over a model-data record's object table.
///
/// The table has no entry count; iteration runs while the accumulated
/// `payload_size + 24` of entries read so far stays below
/// `subrecord_size`. Entries whose payload falls outside the buffer are
/// counted toward that total but not yielded.
pub struct ObjectIter<'a> {
	bytes: &'a [u8],
	table: Option<ModelDataHeader>,
	index: usize,
	bytes_read: u64,
	skipped: usize,
	done: bool,
}

impl<'a> ObjectIter<'a> {
	/// Walk the object table of `record`, or nothing if its header is out of bounds.
	pub fn new(bytes: &'a [u8], record: &Record) -> Self {
		let offset = record.payload_offset as usize;
		let table = match ModelDataHeader::parse(bytes, offset) {
			Ok(table) => Some(table),
			Err(err) => {
				debug!("skipping record at table offset {}: model header unreadable ({err})", record.table_offset);
				None
			}
		};

		Self {
			bytes,
			table,
			index: 0,
			bytes_read: 0,
			skipped: 0,
			done: table.is_none(),
		}
	}

	/// Object-table header, if the record was walkable.
	pub fn table(&self) -> Option<ModelDataHeader> {
		self.table
	}

	/// Entries read so far, yielded or not.
	pub fn entries_read(&self) -> usize {
		self.index
	}

	/// Entries read so far whose payload was out of bounds.
	pub fn skipped(&self) -> usize {
		self.skipped
	}

	fn read_entry(&self, table: ModelDataHeader) -> Option<(usize, [u8; 16], u32, u32)> {
		let entry_offset = self.index.checked_mul(ObjectEntry::SIZE)?.checked_add(table.subrecord_offset as usize)?;
		let mut cursor = Cursor::at(self.bytes, entry_offset);
		let id = cursor.read_id16().ok()?;
		let relative_offset = cursor.read_u32_le().ok()?;
		let payload_size = cursor.read_u32_le().ok()?;
		Some((entry_offset, id, relative_offset, payload_size))
	}
}

impl<'a> Iterator for ObjectIter<'a> {
	type Item = ObjectEntry<'a>;

	fn next(&mut self) -> Option<Self::Item> {
		loop {
			if self.done {
				return None;
			}

			let table = self.table?;
			if self.bytes_read >= u64::from(table.subrecord_size) {
				self.done = true;
				return None;
			}

			let Some((table_offset, id, relative_offset, payload_size)) = self.read_entry(table) else {
				debug!("object table at {} ends at the buffer boundary after {} entries", table.subrecord_offset, self.index);
				self.done = true;
				return None;
			};

			self.index += 1;
			self.bytes_read += u64::from(payload_size) + ObjectEntry::SIZE as u64;

			let model_offset = (table.subrecord_offset as usize).checked_add(relative_offset as usize);
			let payload = model_offset.and_then(|offset| slice_at(self.bytes, offset, payload_size as usize));
			let Some(payload) = payload else {
				debug!("object entry at {table_offset}: payload of {payload_size} bytes at relative offset {relative_offset} is out of bounds");
				self.skipped += 1;
				continue;
			};

			return Some(ObjectEntry {
				id,
				relative_offset,
				payload_size,
				table_offset,
				payload,
			});
		}
	}
}

#[cfg(test)]
mod tests;
