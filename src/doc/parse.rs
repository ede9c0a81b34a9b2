use crate::doc::{Array, Object, ParseError, Value, ValueKind};

impl Value {
	/// Parse document text.
	///
	/// Text starting with `{` or `[` decodes as a JSON container, text starting
	/// with `"` as a JSON string. Anything else is taken whole (trimmed) as a
	/// scalar: `null`/`true`/`false` in any case, a numeric literal (an integer
	/// when it has no fraction or exponent), or otherwise a bare string.
	/// Blank input yields `Null`.
	pub fn parse(text: &str) -> Result<Value, ParseError> {
		let trimmed = text.trim();
		let Some(first) = trimmed.chars().next() else {
			return Ok(Value::Null);
		};

		let expected = match first {
			'{' => ValueKind::Object,
			'[' => ValueKind::Array,
			'"' => ValueKind::String,
			_ => return Ok(parse_scalar(trimmed)),
		};

		let decoded: serde_json::Value = serde_json::from_str(trimmed).map_err(|err| ParseError::Malformed {
			expected,
			message: err.to_string(),
		})?;
		let value = Value::from(decoded);
		if value.kind() != expected {
			return Err(ParseError::Malformed {
				expected,
				message: format!("decoded {} instead", value.kind()),
			});
		}
		Ok(value)
	}
}

fn parse_scalar(text: &str) -> Value {
	if text.eq_ignore_ascii_case("null") {
		return Value::Null;
	}
	if text.eq_ignore_ascii_case("true") {
		return Value::Bool(true);
	}
	if text.eq_ignore_ascii_case("false") {
		return Value::Bool(false);
	}

	match numeric_shape(text) {
		Some(NumericShape::Integer) => match text.parse::<i64>() {
			Ok(value) => Value::Int(value),
			Err(_) => text.parse::<f64>().map_or_else(|_| Value::String(text.to_owned()), Value::Float),
		},
		Some(NumericShape::Fractional) => text.parse::<f64>().map_or_else(|_| Value::String(text.to_owned()), Value::Float),
		None => Value::String(text.to_owned()),
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NumericShape {
	Integer,
	Fractional,
}

/// Classify `[+-]digits[.digits][(e|E)[+-]digits]`.
fn numeric_shape(text: &str) -> Option<NumericShape> {
	let bytes = text.as_bytes();
	let mut idx = 0_usize;
	let mut shape = NumericShape::Integer;

	if matches!(bytes.first(), Some(b'+' | b'-')) {
		idx += 1;
	}
	let digits_start = idx;
	while idx < bytes.len() && bytes[idx].is_ascii_digit() {
		idx += 1;
	}
	if idx == digits_start {
		return None;
	}

	if idx < bytes.len() && bytes[idx] == b'.' {
		idx += 1;
		let fraction_start = idx;
		while idx < bytes.len() && bytes[idx].is_ascii_digit() {
			idx += 1;
		}
		if idx == fraction_start {
			return None;
		}
		shape = NumericShape::Fractional;
	}

	if idx < bytes.len() && matches!(bytes[idx], b'e' | b'E') {
		idx += 1;
		if idx < bytes.len() && matches!(bytes[idx], b'+' | b'-') {
			idx += 1;
		}
		let exponent_start = idx;
		while idx < bytes.len() && bytes[idx].is_ascii_digit() {
			idx += 1;
		}
		if idx == exponent_start {
			return None;
		}
		shape = NumericShape::Fractional;
	}

	(idx == bytes.len()).then_some(shape)
}

impl From<serde_json::Value> for Value {
	fn from(value: serde_json::Value) -> Self {
		match value {
			serde_json::Value::Null => Value::Null,
			serde_json::Value::Bool(value) => Value::Bool(value),
			serde_json::Value::Number(number) => from_number(&number),
			serde_json::Value::String(text) => Value::String(text),
			serde_json::Value::Array(items) => Value::Array(items.into_iter().map(Value::from).collect::<Array>()),
			serde_json::Value::Object(entries) => Value::Object(entries.into_iter().collect::<Object>()),
		}
	}
}

/// Integers that fit `i64` stay exact; everything else becomes a float.
fn from_number(number: &serde_json::Number) -> Value {
	if let Some(value) = number.as_i64() {
		return Value::Int(value);
	}
	number.as_f64().map_or(Value::Null, Value::Float)
}
