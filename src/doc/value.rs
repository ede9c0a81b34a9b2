use std::fmt;

use serde::{Serialize, Serializer};

use crate::doc::{Array, Object};

/// Runtime kind of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
	/// JSON `null`.
	Null,
	/// `true` / `false`.
	Bool,
	/// 64-bit signed integer.
	Int,
	/// 64-bit float.
	Float,
	/// UTF-8 text.
	String,
	/// String-keyed mapping.
	Object,
	/// Ordered sequence.
	Array,
}

impl ValueKind {
	/// Lowercase kind name.
	pub fn as_str(self) -> &'static str {
		match self {
			ValueKind::Null => "null",
			ValueKind::Bool => "bool",
			ValueKind::Int => "int",
			ValueKind::Float => "float",
			ValueKind::String => "string",
			ValueKind::Object => "object",
			ValueKind::Array => "array",
		}
	}

	/// Whether the kind is a sortable scalar.
	pub fn is_scalar(self) -> bool {
		matches!(self, ValueKind::Bool | ValueKind::Int | ValueKind::Float | ValueKind::String)
	}
}

impl fmt::Display for ValueKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Borrowed container position: an object key or an array index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector<'a> {
	/// Object key.
	Key(&'a str),
	/// Array index.
	Index(usize),
}

impl<'a> From<&'a str> for Selector<'a> {
	fn from(key: &'a str) -> Self {
		Selector::Key(key)
	}
}

impl<'a> From<&'a String> for Selector<'a> {
	fn from(key: &'a String) -> Self {
		Selector::Key(key.as_str())
	}
}

impl From<usize> for Selector<'_> {
	fn from(index: usize) -> Self {
		Selector::Index(index)
	}
}

/// Result of a permissive container edit.
///
/// Out-of-range indices and edits against the wrong container kind are not
/// errors: the edit is skipped and reported as [`Edit::Ignored`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
	/// The container changed.
	Applied,
	/// The request was out of range or not applicable; nothing changed.
	Ignored,
}

impl Edit {
	/// Whether the edit took effect.
	pub fn is_applied(self) -> bool {
		self == Edit::Applied
	}
}

/// Dynamic document node.
///
/// Exactly one variant is active. Sub-values handed out by accessors are
/// borrows into the owning tree, so mutating through `get_mut`-style views
/// writes through to the parent; `clone()` produces an independent deep copy.
/// Sharing one tree across threads needs external synchronization.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
	/// JSON `null`.
	#[default]
	Null,
	/// Boolean.
	Bool(bool),
	/// Integer (kept distinct from floats).
	Int(i64),
	/// Floating point number.
	Float(f64),
	/// Text.
	String(String),
	/// Object container.
	Object(Object),
	/// Array container.
	Array(Array),
}

impl Value {
	/// Empty object value.
	pub fn object() -> Self {
		Value::Object(Object::new())
	}

	/// Empty array value.
	pub fn array() -> Self {
		Value::Array(Array::new())
	}

	/// Runtime kind tag.
	pub fn kind(&self) -> ValueKind {
		match self {
			Value::Null => ValueKind::Null,
			Value::Bool(_) => ValueKind::Bool,
			Value::Int(_) => ValueKind::Int,
			Value::Float(_) => ValueKind::Float,
			Value::String(_) => ValueKind::String,
			Value::Object(_) => ValueKind::Object,
			Value::Array(_) => ValueKind::Array,
		}
	}

	/// Whether this is `null`.
	pub fn is_null(&self) -> bool {
		matches!(self, Value::Null)
	}

	/// Whether this is a boolean.
	pub fn is_bool(&self) -> bool {
		matches!(self, Value::Bool(_))
	}

	/// Whether this is an integer.
	pub fn is_int(&self) -> bool {
		matches!(self, Value::Int(_))
	}

	/// Whether this is a float.
	pub fn is_float(&self) -> bool {
		matches!(self, Value::Float(_))
	}

	/// Whether this is an integer or a float.
	pub fn is_numeric(&self) -> bool {
		matches!(self, Value::Int(_) | Value::Float(_))
	}

	/// Whether this is a string.
	pub fn is_string(&self) -> bool {
		matches!(self, Value::String(_))
	}

	/// Whether this is an object.
	pub fn is_object(&self) -> bool {
		matches!(self, Value::Object(_))
	}

	/// Whether this is an array.
	pub fn is_array(&self) -> bool {
		matches!(self, Value::Array(_))
	}

	/// `0` for null, container size for objects and arrays, `1` for scalars.
	pub fn len(&self) -> usize {
		match self {
			Value::Null => 0,
			Value::Object(object) => object.len(),
			Value::Array(array) => array.len(),
			Value::Bool(_) | Value::Int(_) | Value::Float(_) | Value::String(_) => 1,
		}
	}

	/// Whether [`Value::len`] is zero.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Whether the key (objects) or index (arrays) exists.
	pub fn has_key<'a>(&self, at: impl Into<Selector<'a>>) -> bool {
		self.get(at).is_some()
	}

	/// Borrow the child at a key or index.
	pub fn get<'a>(&self, at: impl Into<Selector<'a>>) -> Option<&Value> {
		match (self, at.into()) {
			(Value::Object(object), Selector::Key(key)) => object.get(key),
			(Value::Array(array), Selector::Index(index)) => array.get(index),
			_ => None,
		}
	}

	/// Mutably borrow the child at a key or index.
	pub fn get_mut<'a>(&mut self, at: impl Into<Selector<'a>>) -> Option<&mut Value> {
		match (self, at.into()) {
			(Value::Object(object), Selector::Key(key)) => object.get_mut(key),
			(Value::Array(array), Selector::Index(index)) => array.get_mut(index),
			_ => None,
		}
	}

	/// Kind of the child at a key or index.
	pub fn get_type<'a>(&self, at: impl Into<Selector<'a>>) -> Option<ValueKind> {
		self.get(at).map(Value::kind)
	}

	/// Object keys in serialization order; empty for non-objects.
	pub fn keys(&self) -> Vec<&str> {
		match self {
			Value::Object(object) => object.keys().collect(),
			_ => Vec::new(),
		}
	}

	/// Strict borrow of string text.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Value::String(text) => Some(text),
			_ => None,
		}
	}

	/// Borrow as object.
	pub fn as_object(&self) -> Option<&Object> {
		match self {
			Value::Object(object) => Some(object),
			_ => None,
		}
	}

	/// Mutably borrow as object.
	pub fn as_object_mut(&mut self) -> Option<&mut Object> {
		match self {
			Value::Object(object) => Some(object),
			_ => None,
		}
	}

	/// Borrow as array.
	pub fn as_array(&self) -> Option<&Array> {
		match self {
			Value::Array(array) => Some(array),
			_ => None,
		}
	}

	/// Mutably borrow as array.
	pub fn as_array_mut(&mut self) -> Option<&mut Array> {
		match self {
			Value::Array(array) => Some(array),
			_ => None,
		}
	}

	/// Integer coercion: floats truncate, booleans map to `0`/`1`, strings parse.
	pub fn as_int(&self) -> Option<i64> {
		match self {
			Value::Int(value) => Some(*value),
			Value::Float(value) if value.is_finite() => Some(*value as i64),
			Value::Bool(value) => Some(i64::from(*value)),
			Value::String(text) => text.trim().parse::<i64>().ok(),
			_ => None,
		}
	}

	/// Float coercion: integers widen, booleans map to `0.0`/`1.0`, strings parse.
	pub fn as_float(&self) -> Option<f64> {
		match self {
			Value::Float(value) => Some(*value),
			Value::Int(value) => Some(*value as f64),
			Value::Bool(value) => Some(if *value { 1.0 } else { 0.0 }),
			Value::String(text) => text.trim().parse::<f64>().ok(),
			_ => None,
		}
	}

	/// Boolean coercion: integer `0` is false and any other integer true;
	/// strings must be `true`/`false` in any case.
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Value::Bool(value) => Some(*value),
			Value::Int(value) => Some(*value != 0),
			Value::String(text) if text.eq_ignore_ascii_case("true") => Some(true),
			Value::String(text) if text.eq_ignore_ascii_case("false") => Some(false),
			_ => None,
		}
	}

	/// Text rendering: strings as-is, scalars in their literal form,
	/// containers as compact JSON.
	///
	/// Finite floats use the same JSON number form as containers (`1.0`,
	/// `1e300`); NaN and infinities, which JSON cannot hold, fall back to
	/// `NaN`/`inf`.
	pub fn as_string(&self) -> String {
		match self {
			Value::Null => "null".to_owned(),
			Value::Bool(value) => value.to_string(),
			Value::Int(value) => value.to_string(),
			Value::Float(value) if value.is_finite() => self.to_string(),
			Value::Float(value) => value.to_string(),
			Value::String(text) => text.clone(),
			Value::Object(object) => object.to_string(),
			Value::Array(array) => array.to_string(),
		}
	}

	/// Coerced integer of the child at a key or index.
	pub fn get_as_int<'a>(&self, at: impl Into<Selector<'a>>) -> Option<i64> {
		self.get(at).and_then(Value::as_int)
	}

	/// Coerced float of the child at a key or index.
	pub fn get_as_float<'a>(&self, at: impl Into<Selector<'a>>) -> Option<f64> {
		self.get(at).and_then(Value::as_float)
	}

	/// Coerced boolean of the child at a key or index.
	pub fn get_as_bool<'a>(&self, at: impl Into<Selector<'a>>) -> Option<bool> {
		self.get(at).and_then(Value::as_bool)
	}

	/// Text of the child at a key or index.
	pub fn get_as_string<'a>(&self, at: impl Into<Selector<'a>>) -> Option<String> {
		self.get(at).map(Value::as_string)
	}

	/// Borrow the child object at a key or index.
	pub fn get_as_object<'a>(&self, at: impl Into<Selector<'a>>) -> Option<&Object> {
		self.get(at).and_then(Value::as_object)
	}

	/// Mutably borrow the child object at a key or index.
	pub fn get_as_object_mut<'a>(&mut self, at: impl Into<Selector<'a>>) -> Option<&mut Object> {
		self.get_mut(at).and_then(Value::as_object_mut)
	}

	/// Borrow the child array at a key or index.
	pub fn get_as_array<'a>(&self, at: impl Into<Selector<'a>>) -> Option<&Array> {
		self.get(at).and_then(Value::as_array)
	}

	/// Mutably borrow the child array at a key or index.
	pub fn get_as_array_mut<'a>(&mut self, at: impl Into<Selector<'a>>) -> Option<&mut Array> {
		self.get_mut(at).and_then(Value::as_array_mut)
	}

	/// Store a value.
	///
	/// Objects put into an object merge key by key and arrays put into an
	/// array append; anything else replaces the current variant.
	pub fn put(&mut self, value: impl Into<Value>) -> &mut Self {
		match (&mut *self, value.into()) {
			(Value::Object(current), Value::Object(incoming)) => {
				current.append(incoming);
			}
			(Value::Array(current), Value::Array(incoming)) => {
				current.extend(incoming);
			}
			(slot, other) => *slot = other,
		}
		self
	}

	/// Upsert `key`. A null value becomes an empty object first; other
	/// non-object values ignore the request.
	pub fn put_as_object(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Edit {
		if self.is_null() {
			*self = Value::object();
		}
		match self {
			Value::Object(object) => {
				object.put(key, value);
				Edit::Applied
			}
			_ => Edit::Ignored,
		}
	}

	/// Append values. A null value becomes an empty array first; other
	/// non-array values ignore the request.
	pub fn put_as_array<I>(&mut self, values: I) -> Edit
	where
		I: IntoIterator,
		I::Item: Into<Value>,
	{
		if self.is_null() {
			*self = Value::array();
		}
		match self {
			Value::Array(array) => {
				array.put(values);
				Edit::Applied
			}
			_ => Edit::Ignored,
		}
	}

	/// Remove the child at a key or index.
	pub fn remove<'a>(&mut self, at: impl Into<Selector<'a>>) -> Edit {
		match (self, at.into()) {
			(Value::Object(object), Selector::Key(key)) => object.remove([key]),
			(Value::Array(array), Selector::Index(index)) => array.remove(index),
			_ => Edit::Ignored,
		}
	}

	/// Pretty JSON text with a three-space indent.
	pub fn to_string_pretty(&self) -> String {
		render_pretty(self)
	}

	/// Convert into a `serde_json` tree.
	pub fn to_json(&self) -> serde_json::Value {
		match self {
			Value::Null => serde_json::Value::Null,
			Value::Bool(value) => serde_json::Value::Bool(*value),
			Value::Int(value) => serde_json::Value::from(*value),
			Value::Float(value) => serde_json::Number::from_f64(*value).map_or(serde_json::Value::Null, serde_json::Value::Number),
			Value::String(text) => serde_json::Value::String(text.clone()),
			Value::Object(object) => serde_json::Value::Object(object.iter().map(|(key, value)| (key.to_owned(), value.to_json())).collect()),
			Value::Array(array) => serde_json::Value::Array(array.iter().map(Value::to_json).collect()),
		}
	}
}

impl Serialize for Value {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		match self {
			Value::Null => serializer.serialize_unit(),
			Value::Bool(value) => serializer.serialize_bool(*value),
			Value::Int(value) => serializer.serialize_i64(*value),
			Value::Float(value) => serializer.serialize_f64(*value),
			Value::String(text) => serializer.serialize_str(text),
			Value::Object(object) => object.serialize(serializer),
			Value::Array(array) => array.serialize(serializer),
		}
	}
}

impl fmt::Display for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		render_compact(self, f)
	}
}

pub(crate) fn render_compact<T: Serialize>(value: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
	let text = serde_json::to_string(value).map_err(|_| fmt::Error)?;
	f.write_str(&text)
}

pub(crate) fn render_pretty<T: Serialize>(value: &T) -> String {
	let mut out = Vec::new();
	let formatter = serde_json::ser::PrettyFormatter::with_indent(b"   ");
	let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
	if value.serialize(&mut serializer).is_err() {
		return String::new();
	}
	String::from_utf8(out).unwrap_or_default()
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Value::Bool(value)
	}
}

macro_rules! from_int {
	($($ty:ty),*) => {
		$(impl From<$ty> for Value {
			fn from(value: $ty) -> Self {
				Value::Int(i64::from(value))
			}
		})*
	};
}

from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for Value {
	fn from(value: u64) -> Self {
		i64::try_from(value).map_or(Value::Float(value as f64), Value::Int)
	}
}

impl From<usize> for Value {
	fn from(value: usize) -> Self {
		Value::from(value as u64)
	}
}

impl From<f32> for Value {
	fn from(value: f32) -> Self {
		Value::Float(f64::from(value))
	}
}

impl From<f64> for Value {
	fn from(value: f64) -> Self {
		Value::Float(value)
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Value::String(value.to_owned())
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Value::String(value)
	}
}

impl From<Object> for Value {
	fn from(value: Object) -> Self {
		Value::Object(value)
	}
}

impl From<Array> for Value {
	fn from(value: Array) -> Self {
		Value::Array(value)
	}
}

impl<T: Into<Value>> From<Option<T>> for Value {
	fn from(value: Option<T>) -> Self {
		value.map_or(Value::Null, Into::into)
	}
}

impl<T: Into<Value>> From<Vec<T>> for Value {
	fn from(values: Vec<T>) -> Self {
		Value::Array(values.into_iter().collect())
	}
}

impl<T: Into<Value>> From<std::collections::BTreeMap<String, T>> for Value {
	fn from(entries: std::collections::BTreeMap<String, T>) -> Self {
		Value::Object(entries.into_iter().collect())
	}
}

impl<T: Into<Value>> From<std::collections::HashMap<String, T>> for Value {
	fn from(entries: std::collections::HashMap<String, T>) -> Self {
		Value::Object(entries.into_iter().collect())
	}
}
