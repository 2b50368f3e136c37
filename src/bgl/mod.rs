mod archive;
mod bytes;
mod error;
mod extract;
mod file;
mod glb;
mod header;
mod object;
mod record;
mod riff;

/// Borrowed archive view and record statistics.
pub use archive::{Archive, RecordStats};
/// Error and result aliases.
pub use error::{BglError, MagicSlot, Result};
/// Extraction driver, options, sinks, and tallies.
pub use extract::{ExtractOptions, ExtractSummary, ExtractedJson, JsonSink, extract_archive, extract_bytes, is_emittable};
/// Owned, in-memory archive file.
pub use file::BglFile;
/// GLB block scanning and JSON chunk decoding.
pub use glb::{GLB_SIGNATURE, GlbBlockIter, decode_glb_json, sanitize_json_bytes};
/// File header representation.
pub use header::BglHeader;
/// Model-data object table walk.
pub use object::{ModelDataHeader, ObjectEntry, ObjectIter};
/// Top-level record descriptors.
pub use record::{MODEL_DATA_RECORD, Record, RecordIter};
/// RIFF chunk scanning.
pub use riff::{ChunkRegion, ChunkScanner, GLBD_TAG, RIFF_MAGIC};
