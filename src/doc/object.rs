use std::collections::BTreeMap;
use std::fmt;

use serde::{Serialize, Serializer};

use crate::doc::value::{render_compact, render_pretty};
use crate::doc::{Array, Edit, Value, ValueKind};

/// String-keyed mapping of values. Each key maps to at most one value;
/// entries serialize in key order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Object {
	entries: BTreeMap<String, Value>,
}

impl Object {
	/// Empty object.
	pub fn new() -> Self {
		Self::default()
	}

	/// Builder-style [`Object::put`].
	pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		self.put(key, value);
		self
	}

	/// Upsert an entry, replacing any previous value under `key`.
	pub fn put(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
		self.entries.insert(key.into(), value.into());
		self
	}

	/// Store `values` as a new array under `key`.
	pub fn put_as_array<I>(&mut self, key: impl Into<String>, values: I) -> &mut Self
	where
		I: IntoIterator,
		I::Item: Into<Value>,
	{
		self.put(key, values.into_iter().collect::<Array>())
	}

	/// Merge every entry of `other`, replacing on key collision.
	pub fn append(&mut self, other: Object) -> &mut Self {
		self.entries.extend(other.entries);
		self
	}

	/// Whether `key` exists.
	pub fn has_key(&self, key: &str) -> bool {
		self.entries.contains_key(key)
	}

	/// Borrow the value under `key`.
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.entries.get(key)
	}

	/// Mutably borrow the value under `key`.
	pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
		self.entries.get_mut(key)
	}

	/// Kind of the value under `key`.
	pub fn get_type(&self, key: &str) -> Option<ValueKind> {
		self.get(key).map(Value::kind)
	}

	/// Coerced integer under `key`.
	pub fn get_as_int(&self, key: &str) -> Option<i64> {
		self.get(key).and_then(Value::as_int)
	}

	/// Coerced float under `key`.
	pub fn get_as_float(&self, key: &str) -> Option<f64> {
		self.get(key).and_then(Value::as_float)
	}

	/// Coerced boolean under `key`.
	pub fn get_as_bool(&self, key: &str) -> Option<bool> {
		self.get(key).and_then(Value::as_bool)
	}

	/// Text under `key`.
	pub fn get_as_string(&self, key: &str) -> Option<String> {
		self.get(key).map(Value::as_string)
	}

	/// Borrow the object under `key`.
	pub fn get_as_object(&self, key: &str) -> Option<&Object> {
		self.get(key).and_then(Value::as_object)
	}

	/// Mutably borrow the object under `key`.
	pub fn get_as_object_mut(&mut self, key: &str) -> Option<&mut Object> {
		self.get_mut(key).and_then(Value::as_object_mut)
	}

	/// Borrow the array under `key`.
	pub fn get_as_array(&self, key: &str) -> Option<&Array> {
		self.get(key).and_then(Value::as_array)
	}

	/// Mutably borrow the array under `key`.
	pub fn get_as_array_mut(&mut self, key: &str) -> Option<&mut Array> {
		self.get_mut(key).and_then(Value::as_array_mut)
	}

	/// Remove every listed key. Ignored when none of them existed.
	pub fn remove<I, K>(&mut self, keys: I) -> Edit
	where
		I: IntoIterator<Item = K>,
		K: AsRef<str>,
	{
		let mut edit = Edit::Ignored;
		for key in keys {
			if self.entries.remove(key.as_ref()).is_some() {
				edit = Edit::Applied;
			}
		}
		edit
	}

	/// Number of entries.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether there are no entries.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Keys in serialization order.
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.entries.keys().map(String::as_str)
	}

	/// Entries in serialization order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
		self.entries.iter().map(|(key, value)| (key.as_str(), value))
	}

	/// Mutable entries in serialization order.
	pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut Value)> {
		self.entries.iter_mut().map(|(key, value)| (key.as_str(), value))
	}

	/// Pretty JSON text with a three-space indent.
	pub fn to_string_pretty(&self) -> String {
		render_pretty(self)
	}
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Object {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self {
			entries: iter.into_iter().map(|(key, value)| (key.into(), value.into())).collect(),
		}
	}
}

impl IntoIterator for Object {
	type Item = (String, Value);
	type IntoIter = std::collections::btree_map::IntoIter<String, Value>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.into_iter()
	}
}

impl Serialize for Object {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		serializer.collect_map(self.entries.iter())
	}
}

impl fmt::Display for Object {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		render_compact(self, f)
	}
}
