use std::fs;
use std::path::{Path, PathBuf};

use bgljson::bgl::{BglError, BglFile, ExtractOptions, ExtractedJson, JsonSink, Result, extract_archive};
use log::warn;

use crate::cmd::util::parse_u32_literal;

#[derive(clap::Args)]
pub struct Args {
	/// Archive file, or directory containing archives.
	pub input: PathBuf,
	/// Directory receiving extracted JSON files (created if absent).
	pub output_dir: PathBuf,
	/// Search directories recursively.
	#[arg(short, long)]
	pub recursive: bool,
	/// Record type whose object tables are walked.
	#[arg(long, default_value = "0x2B", value_parser = parse_u32_literal)]
	pub record_type: u32,
	/// File extension selecting archives inside directories.
	#[arg(long, default_value = "bgl")]
	pub extension: String,
}

/// Extract every embedded JSON document from the selected archives.
pub fn run(args: Args) -> Result<()> {
	let Args {
		input,
		output_dir,
		recursive,
		record_type,
		extension,
	} = args;

	fs::create_dir_all(&output_dir)?;

	let Some(files) = discover_archives(&input, &extension, recursive)? else {
		println!("Error: {} does not exist", input.display());
		return Ok(());
	};

	println!("Found {} BGL file(s)", files.len());

	let options = ExtractOptions {
		record_type,
		..ExtractOptions::for_model_data()
	};

	let mut total = 0_usize;
	for path in &files {
		total += process_archive(path, &output_dir, &options);
	}

	println!("\nTotal JSON files extracted: {total}");
	Ok(())
}

/// Extract one archive, reporting failures instead of returning them.
fn process_archive(path: &Path, output_dir: &Path, options: &ExtractOptions) -> usize {
	println!("Processing: {}", path.display());

	let file = match BglFile::open(path) {
		Ok(file) => file,
		Err(BglError::TooSmall { .. }) => {
			println!("File too small: {}", path.display());
			return 0;
		}
		Err(err @ BglError::BadMagic { .. }) => {
			println!("Invalid BGL header: {} ({err})", path.display());
			return 0;
		}
		Err(err) => {
			eprintln!("error: {}: {err}", path.display());
			return 0;
		}
	};

	let name = archive_name(path);
	let mut sink = DirSink::new(output_dir);
	if let Err(err) = extract_archive(&name, &file.archive(), options, &mut sink) {
		eprintln!("error: {}: {err}", path.display());
	}
	sink.written
}

/// Archive name used in output file names.
pub(crate) fn archive_name(path: &Path) -> String {
	path.file_stem().map(|stem| stem.to_string_lossy().into_owned()).unwrap_or_default()
}

/// List archives under `input`, or `None` when it does not exist.
///
/// A file is taken as-is. Directory entries are matched on extension
/// without regard to case and returned sorted. Subdirectories that cannot
/// be read are logged and left out.
pub(crate) fn discover_archives(input: &Path, extension: &str, recursive: bool) -> Result<Option<Vec<PathBuf>>> {
	if input.is_file() {
		return Ok(Some(vec![input.to_path_buf()]));
	}

	if !input.is_dir() {
		return Ok(None);
	}

	let mut out = Vec::new();
	collect_archives(input, extension, recursive, &mut out)?;
	out.sort();
	Ok(Some(out))
}

fn collect_archives(dir: &Path, extension: &str, recursive: bool, out: &mut Vec<PathBuf>) -> Result<()> {
	for entry in fs::read_dir(dir)? {
		let path = match entry {
			Ok(entry) => entry.path(),
			Err(err) => {
				warn!("skipping entry in {}: {err}", dir.display());
				continue;
			}
		};
		if path.is_dir() {
			if recursive {
				if let Err(err) = collect_archives(&path, extension, recursive, out) {
					warn!("skipping directory {}: {err}", path.display());
				}
			}
			continue;
		}

		let matches = path
			.extension()
			.and_then(|ext| ext.to_str())
			.is_some_and(|ext| ext.eq_ignore_ascii_case(extension));
		if matches && path.is_file() {
			out.push(path);
		}
	}
	Ok(())
}

/// Writes each document as `{archive}_{object}_{ordinal}.json` with 2-space indentation.
pub(crate) struct DirSink<'a> {
	dir: &'a Path,
	pub(crate) written: usize,
}

impl<'a> DirSink<'a> {
	pub(crate) fn new(dir: &'a Path) -> Self {
		Self { dir, written: 0 }
	}
}

impl JsonSink for DirSink<'_> {
	fn accept(&mut self, item: ExtractedJson) -> Result<()> {
		let file_name = item.file_name();
		let text = serde_json::to_string_pretty(&item.value)?;
		fs::write(self.dir.join(&file_name), text)?;
		println!("  Extracted: {file_name}");
		self.written += 1;
		Ok(())
	}
}

#[cfg(test)]
mod tests;
