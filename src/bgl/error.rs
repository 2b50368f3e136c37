use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, BglError>;

/// Which of the two header magic sequences failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MagicSlot {
	/// Magic at offset `0x00`.
	Leading,
	/// Magic at offset `0x10`.
	Secondary,
}

/// Errors produced while reading archives and persisting extracted JSON.
#[derive(Debug, Error)]
pub enum BglError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Extracted value could not be serialized.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// Buffer is shorter than the fixed archive header.
	#[error("file too small for BGL header: len={len}, need={need}")]
	TooSmall {
		/// Actual buffer length.
		len: usize,
		/// Minimum header length.
		need: usize,
	},
	/// One of the header magic sequences did not match.
	#[error("invalid BGL header: {slot:?} magic mismatch (got {got:02x?})")]
	BadMagic {
		/// Which magic failed.
		slot: MagicSlot,
		/// Bytes found in place of the magic.
		got: [u8; 4],
	},
	/// Not enough bytes remained for a requested read.
	#[error("unexpected eof at offset {at}, need {need} bytes, remaining {rem}")]
	UnexpectedEof {
		/// Byte offset where the read was attempted.
		at: usize,
		/// Requested bytes.
		need: usize,
		/// Bytes still available.
		rem: usize,
	},
	/// Numeric literal passed on the command line could not be parsed.
	#[error("invalid numeric literal: {value}")]
	InvalidNumberLiteral {
		/// User-provided literal.
		value: String,
	},
}
