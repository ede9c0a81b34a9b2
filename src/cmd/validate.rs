use std::path::PathBuf;

use djson::doc::Schema;

use crate::cmd::util::{load, read_input};

/// Validate a document against a schema file; fails the status when invalid.
pub fn run(schema: PathBuf, file: PathBuf, json: bool) -> djson::doc::Result<bool> {
	let schema = Schema::compile(&read_input(&schema)?)?;
	let doc = load(&file)?;
	let valid = schema.is_valid(&doc);

	if json {
		println!("{}", serde_json::json!({ "valid": valid }));
	} else {
		println!("{}", if valid { "valid" } else { "invalid" });
	}
	Ok(valid)
}
