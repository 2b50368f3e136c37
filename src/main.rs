#![allow(missing_docs)]

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "bgljson", about = "Extract embedded glTF JSON from BGL scenery archives")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Write every embedded JSON document to an output directory.
	Extract(cmd::extract::Args),
	/// Summarize the record table and model-data object tables.
	Info(cmd::info::Args),
}

fn main() {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> bgljson::bgl::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Extract(args) => cmd::extract::run(args),
		Commands::Info(args) => cmd::info::run(args),
	}
}
