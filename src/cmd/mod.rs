/// Batch JSON extraction command.
pub mod extract;
/// Archive structure summary command.
pub mod info;
/// Shared CLI parsing and rendering helpers.
pub mod util;
