use crate::bgl::bytes::read_u32_at;
use crate::bgl::{BglError, MagicSlot, Result};

/// Parsed fixed-size BGL file header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BglHeader {
	/// Header size field at `0x04`, as declared by the file.
	pub header_size: u32,
	/// Number of top-level record descriptors following the header.
	pub record_count: u32,
}

impl BglHeader {
	/// Fixed header length; record descriptors start here.
	pub const SIZE: usize = 0x38;
	/// Magic sequence at offset `0x00`.
	pub const MAGIC_LEADING: [u8; 4] = [0x01, 0x02, 0x92, 0x19];
	/// Magic sequence at offset `0x10`.
	pub const MAGIC_SECONDARY: [u8; 4] = [0x03, 0x18, 0x05, 0x08];

	/// Validate and parse the header at the beginning of `bytes`.
	pub fn parse(bytes: &[u8]) -> Result<Self> {
		if bytes.len() < Self::SIZE {
			return Err(BglError::TooSmall {
				len: bytes.len(),
				need: Self::SIZE,
			});
		}

		check_magic(bytes, 0x00, Self::MAGIC_LEADING, MagicSlot::Leading)?;
		check_magic(bytes, 0x10, Self::MAGIC_SECONDARY, MagicSlot::Secondary)?;

		Ok(Self {
			header_size: read_u32_at(bytes, 0x04)?,
			record_count: read_u32_at(bytes, 0x14)?,
		})
	}
}

fn check_magic(bytes: &[u8], offset: usize, expected: [u8; 4], slot: MagicSlot) -> Result<()> {
	let mut got = [0_u8; 4];
	got.copy_from_slice(&bytes[offset..offset + 4]);
	if got != expected {
		return Err(BglError::BadMagic { slot, got });
	}
	Ok(())
}
