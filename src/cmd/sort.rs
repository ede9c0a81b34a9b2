use std::path::PathBuf;

use crate::cmd::util::{load, render};

/// Sort the array at a path, optionally by an object field, and print the document.
pub fn run(file: PathBuf, path: String, desc: bool, key: Option<String>, pretty: bool) -> djson::doc::Result<bool> {
	let mut doc = load(&file)?;

	match key {
		Some(key) => doc.sort_object_array_path(&path, !desc, &key)?,
		None => doc.sort_path(&path, !desc)?,
	}

	println!("{}", render(&doc, pretty));
	Ok(true)
}
