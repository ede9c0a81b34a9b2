use std::path::PathBuf;

use crate::cmd::util::{load, render};

/// Parse a document and print it back in canonical form.
pub fn run(file: PathBuf, pretty: bool) -> djson::doc::Result<bool> {
	let doc = load(&file)?;
	println!("{}", render(&doc, pretty));
	Ok(true)
}
