use std::path::PathBuf;

use crate::cmd::util::load;

/// List the keys of the object at a path.
pub fn run(file: PathBuf, path: String, json: bool) -> djson::doc::Result<bool> {
	let doc = load(&file)?;
	let keys = doc.get_keys_path(&path)?;

	if json {
		println!("{}", djson::doc::Value::from(keys));
		return Ok(true);
	}

	for key in keys {
		println!("{key}");
	}
	Ok(true)
}
