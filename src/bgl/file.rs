use std::fs;
use std::path::Path;

use crate::bgl::{Archive, BglHeader, Result};

/// Archive file read fully into memory.
pub struct BglFile {
	/// Parsed file header.
	pub header: BglHeader,
	bytes: Vec<u8>,
}

impl BglFile {
	/// Read and header-check the file at `path`.
	pub fn open(path: impl AsRef<Path>) -> Result<Self> {
		Self::from_bytes(fs::read(path)?)
	}

	/// Header-check an in-memory buffer.
	pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
		let header = BglHeader::parse(&bytes)?;
		Ok(Self { header, bytes })
	}

	/// Whole-file bytes.
	pub fn bytes(&self) -> &[u8] {
		&self.bytes
	}

	/// Borrowed view for record and object traversal.
	pub fn archive(&self) -> Archive<'_> {
		Archive::from_parts(self.header, &self.bytes)
	}
}
