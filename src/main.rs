#![allow(missing_docs)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "djson", about = "Dynamic JSON path editing and schema validation")]
struct Cli {
	/// Enable debug logging (otherwise `RUST_LOG`, default `warn`).
	#[arg(long, global = true)]
	verbose: bool,
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	Fmt {
		file: PathBuf,
		#[arg(long)]
		pretty: bool,
	},
	Get {
		file: PathBuf,
		#[arg(long)]
		path: String,
		#[arg(long)]
		pretty: bool,
	},
	Type {
		file: PathBuf,
		#[arg(long)]
		path: String,
	},
	Keys {
		file: PathBuf,
		#[arg(long)]
		path: String,
		#[arg(long)]
		json: bool,
	},
	Set {
		file: PathBuf,
		#[arg(long)]
		path: String,
		#[arg(long)]
		value: String,
		#[arg(long)]
		insert: bool,
		#[arg(long)]
		pretty: bool,
	},
	Remove {
		file: PathBuf,
		#[arg(long)]
		path: String,
		#[arg(long)]
		pretty: bool,
	},
	Sort {
		file: PathBuf,
		#[arg(long)]
		path: String,
		#[arg(long)]
		desc: bool,
		#[arg(long)]
		key: Option<String>,
		#[arg(long)]
		pretty: bool,
	},
	Validate {
		#[arg(long)]
		schema: PathBuf,
		file: PathBuf,
		#[arg(long)]
		json: bool,
	},
}

fn main() {
	match run() {
		Ok(true) => {}
		Ok(false) => std::process::exit(1),
		Err(err) => {
			eprintln!("error: {err}");
			std::process::exit(1);
		}
	}
}

fn run() -> djson::doc::Result<bool> {
	let cli = Cli::parse();
	init_logging(cli.verbose);

	match cli.command {
		Commands::Fmt { file, pretty } => cmd::fmt::run(file, pretty),
		Commands::Get { file, path, pretty } => cmd::get::run(file, path, pretty),
		Commands::Type { file, path } => cmd::get::run_type(file, path),
		Commands::Keys { file, path, json } => cmd::keys::run(file, path, json),
		Commands::Set {
			file,
			path,
			value,
			insert,
			pretty,
		} => cmd::edit::run_set(file, path, value, insert, pretty),
		Commands::Remove { file, path, pretty } => cmd::edit::run_remove(file, path, pretty),
		Commands::Sort {
			file,
			path,
			desc,
			key,
			pretty,
		} => cmd::sort::run(file, path, desc, key, pretty),
		Commands::Validate { schema, file, json } => cmd::validate::run(schema, file, json),
	}
}

fn init_logging(verbose: bool) {
	let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
	if verbose {
		builder.filter_level(log::LevelFilter::Debug);
	}
	builder.init();
}
