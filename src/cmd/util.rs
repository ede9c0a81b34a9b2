use std::io::Read;
use std::path::Path;

use djson::doc::{Result, Value};

/// Read document text from a file, or from stdin when the path is `-`.
pub(crate) fn read_input(path: &Path) -> Result<String> {
	if path == Path::new("-") {
		let mut text = String::new();
		std::io::stdin().read_to_string(&mut text)?;
		return Ok(text);
	}
	Ok(std::fs::read_to_string(path)?)
}

/// Read and parse a document.
pub(crate) fn load(path: &Path) -> Result<Value> {
	let text = read_input(path)?;
	log::debug!("read {} bytes from {}", text.len(), path.display());
	Ok(Value::parse(&text)?)
}

/// Serialize compactly or with the three-space pretty layout.
pub(crate) fn render(value: &Value, pretty: bool) -> String {
	if pretty { value.to_string_pretty() } else { value.to_string() }
}
