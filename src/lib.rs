//! Public library API for pulling embedded glTF JSON out of `.bgl` scenery archives.

/// BGL container reading, RIFF/GLB scanning, and JSON extraction.
pub mod bgl;
