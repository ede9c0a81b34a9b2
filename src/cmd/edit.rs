use std::path::PathBuf;

use djson::doc::Value;

use crate::cmd::util::{load, render};

/// Update (or insert) a value at a path and print the document.
pub fn run_set(file: PathBuf, path: String, value: String, insert: bool, pretty: bool) -> djson::doc::Result<bool> {
	let mut doc = load(&file)?;
	let value = Value::parse(&value)?;

	if insert {
		doc.put_path(&path, value)?;
	} else {
		doc.update_path(&path, value)?;
	}

	println!("{}", render(&doc, pretty));
	Ok(true)
}

/// Remove the value at a path and print the document.
pub fn run_remove(file: PathBuf, path: String, pretty: bool) -> djson::doc::Result<bool> {
	let mut doc = load(&file)?;
	let edit = doc.remove_path(&path)?;
	if !edit.is_applied() {
		log::warn!("nothing to remove at {path}");
	}

	println!("{}", render(&doc, pretty));
	Ok(true)
}
