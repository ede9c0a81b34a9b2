use regex::Regex;

use crate::doc::builtin::{self, Builtin, Check, STRING_MAX};
use crate::doc::{Object, SchemaError, Value, is_valid};

/// Kind of check a compiled rule performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VItemKind {
	/// Accepts anything; produced for unknown or malformed rule bodies.
	Null,
	/// Integer within `[min, max]`.
	Int,
	/// Float within `[min_float, max_float]`.
	Float,
	/// Integer or float within `[min_float, max_float]`.
	Number,
	/// String with length bounds, pattern or predicate.
	String,
	/// Boolean; checked only when required.
	Bool,
	/// Object whose named children are checked field by field.
	Object,
	/// Array with length bounds and optional element alternatives.
	Array,
	/// Any one of the children.
	Multi,
}

/// One compiled rule.
#[derive(Debug, Clone)]
pub struct VItem {
	/// Rule kind.
	pub kind: VItemKind,
	/// Field name inside the parent object; `None` for roots and array elements.
	pub name: Option<String>,
	/// Whether the named field must be present.
	pub required: bool,
	/// Lower integer or length bound.
	pub min: i64,
	/// Upper integer or length bound.
	pub max: i64,
	/// Lower float bound.
	pub min_float: f64,
	/// Upper float bound.
	pub max_float: f64,
	/// Object fields, array element alternatives or multi alternatives.
	pub children: Vec<VItem>,
	/// Builtin string predicate.
	pub check: Option<Check>,
	/// Custom pattern; decides string rules on its own.
	pub regexp: Option<Regex>,
}

impl VItem {
	fn from_builtin(name: Option<&str>, builtin: Builtin) -> Self {
		Self {
			kind: builtin.kind,
			name: name.map(str::to_owned),
			required: false,
			min: builtin.min,
			max: builtin.max,
			min_float: builtin.min_float,
			max_float: builtin.max_float,
			children: Vec::new(),
			check: builtin.check,
			regexp: None,
		}
	}

	fn permissive(name: Option<&str>) -> Self {
		Self::from_builtin(name, PERMISSIVE)
	}
}

const PERMISSIVE: Builtin = Builtin {
	kind: VItemKind::Null,
	min: 0,
	max: 0,
	min_float: f64::MIN,
	max_float: f64::MAX,
	check: None,
};

/// What to do with a `regexp` that does not compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegexpPolicy {
	/// Drop the pattern and keep the rest of the rule.
	#[default]
	Ignore,
	/// Fail compilation with [`SchemaError::InvalidRegexp`].
	Reject,
}

/// Schema compilation options.
#[derive(Debug, Clone)]
pub struct CompileOptions {
	/// Upper byte length for free-form string types such as `STRING` and `HEX`.
	pub string_max: i64,
	/// Handling of invalid custom patterns.
	pub on_invalid_regexp: RegexpPolicy,
}

impl Default for CompileOptions {
	fn default() -> Self {
		Self {
			string_max: STRING_MAX,
			on_invalid_regexp: RegexpPolicy::Ignore,
		}
	}
}

/// Compiled schema: the root alternatives a document is checked against.
#[derive(Debug, Clone)]
pub struct Schema {
	items: Vec<VItem>,
}

impl Schema {
	/// Parse and compile schema text with default options.
	pub fn compile(text: &str) -> Result<Self, SchemaError> {
		Self::compile_with(text, &CompileOptions::default())
	}

	/// Parse and compile schema text.
	pub fn compile_with(text: &str, options: &CompileOptions) -> Result<Self, SchemaError> {
		let value = Value::parse(text)?;
		Self::from_value(&value, options)
	}

	/// Compile an already parsed schema.
	///
	/// An object or string root yields one rule; an array root yields one
	/// alternative per element. Any other root is rejected.
	pub fn from_value(schema: &Value, options: &CompileOptions) -> Result<Self, SchemaError> {
		let items = match schema {
			Value::Object(_) | Value::String(_) => vec![compile_item(None, schema, options)?],
			Value::Array(elements) => elements
				.iter()
				.map(|element| compile_item(None, element, options))
				.collect::<Result<Vec<_>, _>>()?,
			other => return Err(SchemaError::UnsupportedRoot { kind: other.kind() }),
		};
		log::debug!("compiled schema with {} root rule(s)", items.len());
		Ok(Self { items })
	}

	/// Root alternatives.
	pub fn items(&self) -> &[VItem] {
		&self.items
	}

	/// Whether `doc` satisfies the schema.
	pub fn is_valid(&self, doc: &Value) -> bool {
		is_valid(&self.items, doc)
	}
}

fn compile_item(name: Option<&str>, schema: &Value, options: &CompileOptions) -> Result<VItem, SchemaError> {
	match schema {
		Value::String(type_name) => Ok(from_type_name(name, type_name, options)),
		Value::Array(alternatives) => {
			let mut item = VItem::permissive(name);
			item.kind = VItemKind::Multi;
			item.children = alternatives
				.iter()
				.map(|alternative| compile_item(name, alternative, options))
				.collect::<Result<_, _>>()?;
			Ok(item)
		}
		Value::Object(body) => compile_body(name, body, options),
		other => {
			log::debug!("rule {:?}: {} body accepts anything", name.unwrap_or(""), other.kind());
			Ok(VItem::permissive(name))
		}
	}
}

fn from_type_name(name: Option<&str>, type_name: &str, options: &CompileOptions) -> VItem {
	let Some(builtin) = builtin::lookup(type_name) else {
		log::warn!("rule {:?}: unknown type {type_name:?} accepts anything", name.unwrap_or(""));
		return VItem::permissive(name);
	};
	let mut item = VItem::from_builtin(name, builtin);
	if item.kind == VItemKind::String && item.max == STRING_MAX {
		item.max = options.string_max;
	}
	item
}

fn compile_body(name: Option<&str>, body: &Object, options: &CompileOptions) -> Result<VItem, SchemaError> {
	let type_name = body.get("type").and_then(Value::as_str).unwrap_or_default();
	let mut item = from_type_name(name, type_name, options);
	item.required = body.get_as_bool("required").unwrap_or(false);

	match item.kind {
		VItemKind::Float | VItemKind::Number => {
			if let Some(size) = body.get_as_float("size") {
				item.min_float = size;
				item.max_float = size;
			}
			item.min_float = body.get_as_float("min").unwrap_or(item.min_float);
			item.max_float = body.get_as_float("max").unwrap_or(item.max_float);
		}
		_ => {
			if let Some(size) = body.get_as_int("size") {
				item.min = size;
				item.max = size;
			}
			item.min = body.get_as_int("min").unwrap_or(item.min);
			item.max = body.get_as_int("max").unwrap_or(item.max);
		}
	}
	if type_name.starts_with("NONEMPTY.") {
		item.min = item.min.max(1);
	}

	if let Some(pattern) = body.get("regexp").and_then(Value::as_str).filter(|pattern| !pattern.is_empty()) {
		item.regexp = compile_regexp(pattern, options)?;
	}

	match item.kind {
		VItemKind::Object => match body.get("object") {
			Some(Value::Object(fields)) => {
				item.children = fields
					.iter()
					.map(|(field, schema)| compile_item(Some(field), schema, options))
					.collect::<Result<_, _>>()?;
			}
			Some(other) => log::debug!("rule {:?}: `object` is {}, no fields checked", name.unwrap_or(""), other.kind()),
			None => {}
		},
		VItemKind::Array => match body.get("array") {
			Some(Value::Array(alternatives)) => {
				item.children = alternatives
					.iter()
					.map(|alternative| compile_item(None, alternative, options))
					.collect::<Result<_, _>>()?;
			}
			Some(element @ (Value::String(_) | Value::Object(_))) => item.children = vec![compile_item(None, element, options)?],
			Some(other) => log::debug!("rule {:?}: `array` is {}, elements unchecked", name.unwrap_or(""), other.kind()),
			None => {}
		},
		_ => {}
	}

	Ok(item)
}

fn compile_regexp(pattern: &str, options: &CompileOptions) -> Result<Option<Regex>, SchemaError> {
	match Regex::new(pattern) {
		Ok(regexp) => Ok(Some(regexp)),
		Err(err) => match options.on_invalid_regexp {
			RegexpPolicy::Ignore => {
				log::warn!("ignoring invalid regexp {pattern:?}: {err}");
				Ok(None)
			}
			RegexpPolicy::Reject => Err(SchemaError::InvalidRegexp {
				pattern: pattern.to_owned(),
				message: err.to_string(),
			}),
		},
	}
}

#[cfg(test)]
mod tests;
