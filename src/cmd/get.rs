use std::path::PathBuf;

use crate::cmd::util::{load, render};

/// Print the value at a path, or `null` with a failing status when absent.
pub fn run(file: PathBuf, path: String, pretty: bool) -> djson::doc::Result<bool> {
	let doc = load(&file)?;
	match doc.get_path(&path) {
		Some(value) => {
			println!("{}", render(value, pretty));
			Ok(true)
		}
		None => {
			log::debug!("nothing at {path}");
			println!("null");
			Ok(false)
		}
	}
}

/// Print the kind name of the value at a path.
pub fn run_type(file: PathBuf, path: String) -> djson::doc::Result<bool> {
	let doc = load(&file)?;
	let Some(kind) = doc.get_type_path(&path) else {
		return Ok(false);
	};
	println!("{kind}");
	Ok(true)
}
