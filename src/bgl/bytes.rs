use crate::bgl::{BglError, Result};

/// Simple bounded cursor over an immutable byte slice.
pub struct Cursor<'a> {
	bytes: &'a [u8],
	pos: usize,
}

impl<'a> Cursor<'a> {
	/// Create a cursor positioned at `pos`, which may lie past the end.
	pub fn at(bytes: &'a [u8], pos: usize) -> Self {
		Self { bytes, pos }
	}

	/// Return current byte offset.
	pub fn pos(&self) -> usize {
		self.pos
	}

	/// Return remaining unread bytes.
	pub fn remaining(&self) -> usize {
		self.bytes.len().saturating_sub(self.pos)
	}

	/// Read exactly `n` bytes and advance cursor.
	pub fn read_exact(&mut self, n: usize) -> Result<&'a [u8]> {
		if n > self.remaining() {
			return Err(BglError::UnexpectedEof {
				at: self.pos,
				need: n,
				rem: self.remaining(),
			});
		}

		let start = self.pos;
		self.pos += n;
		Ok(&self.bytes[start..self.pos])
	}

	/// Advance without reading.
	pub fn skip(&mut self, n: usize) -> Result<()> {
		let _ = self.read_exact(n)?;
		Ok(())
	}

	/// Read a four-byte code.
	pub fn read_code4(&mut self) -> Result<[u8; 4]> {
		let raw = self.read_exact(4)?;
		let mut out = [0_u8; 4];
		out.copy_from_slice(raw);
		Ok(out)
	}

	/// Read a sixteen-byte identifier.
	pub fn read_id16(&mut self) -> Result<[u8; 16]> {
		let raw = self.read_exact(16)?;
		let mut out = [0_u8; 16];
		out.copy_from_slice(raw);
		Ok(out)
	}

	/// Read a little-endian `u32`.
	pub fn read_u32_le(&mut self) -> Result<u32> {
		let raw = self.read_exact(4)?;
		let mut buf = [0_u8; 4];
		buf.copy_from_slice(raw);
		Ok(u32::from_le_bytes(buf))
	}
}

/// Read a little-endian `u32` at an absolute offset.
pub fn read_u32_at(bytes: &[u8], offset: usize) -> Result<u32> {
	Cursor::at(bytes, offset).read_u32_le()
}

/// Slice `len` bytes at `offset`, rejecting overflow and out-of-range spans.
pub fn slice_at(bytes: &[u8], offset: usize, len: usize) -> Option<&[u8]> {
	let end = offset.checked_add(len)?;
	bytes.get(offset..end)
}
