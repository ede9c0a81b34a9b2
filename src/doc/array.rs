use std::cmp::Ordering;
use std::fmt;

use serde::{Serialize, Serializer};

use crate::doc::value::{render_compact, render_pretty};
use crate::doc::{Edit, Object, SortError, Value, ValueKind};

/// Ordered, zero-indexed sequence of values.
///
/// Index-taking edits are permissive: an index outside the valid range
/// leaves the array unchanged and reports [`Edit::Ignored`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Array {
	elements: Vec<Value>,
}

impl Array {
	/// Empty array.
	pub fn new() -> Self {
		Self::default()
	}

	/// Append one value.
	pub fn push_back(&mut self, value: impl Into<Value>) -> &mut Self {
		self.elements.push(value.into());
		self
	}

	/// Prepend one value.
	pub fn push_front(&mut self, value: impl Into<Value>) -> &mut Self {
		self.elements.insert(0, value.into());
		self
	}

	/// Insert before `index`; valid for `0..=len`.
	pub fn insert(&mut self, index: usize, value: impl Into<Value>) -> Edit {
		if index > self.elements.len() {
			return Edit::Ignored;
		}
		self.elements.insert(index, value.into());
		Edit::Applied
	}

	/// Replace the existing element at `index`.
	pub fn replace_at(&mut self, index: usize, value: impl Into<Value>) -> Edit {
		match self.elements.get_mut(index) {
			Some(slot) => {
				*slot = value.into();
				Edit::Applied
			}
			None => Edit::Ignored,
		}
	}

	/// Remove the element at `index`, shifting later elements down.
	pub fn remove(&mut self, index: usize) -> Edit {
		if index >= self.elements.len() {
			return Edit::Ignored;
		}
		self.elements.remove(index);
		Edit::Applied
	}

	/// Append every value.
	pub fn put<I>(&mut self, values: I) -> &mut Self
	where
		I: IntoIterator,
		I::Item: Into<Value>,
	{
		self.extend(values);
		self
	}

	/// Borrow the element at `index`.
	pub fn get(&self, index: usize) -> Option<&Value> {
		self.elements.get(index)
	}

	/// Mutably borrow the element at `index`.
	pub fn get_mut(&mut self, index: usize) -> Option<&mut Value> {
		self.elements.get_mut(index)
	}

	/// Kind of the element at `index`.
	pub fn get_type(&self, index: usize) -> Option<ValueKind> {
		self.get(index).map(Value::kind)
	}

	/// Coerced integer at `index`.
	pub fn get_as_int(&self, index: usize) -> Option<i64> {
		self.get(index).and_then(Value::as_int)
	}

	/// Coerced float at `index`.
	pub fn get_as_float(&self, index: usize) -> Option<f64> {
		self.get(index).and_then(Value::as_float)
	}

	/// Coerced boolean at `index`.
	pub fn get_as_bool(&self, index: usize) -> Option<bool> {
		self.get(index).and_then(Value::as_bool)
	}

	/// Text at `index`.
	pub fn get_as_string(&self, index: usize) -> Option<String> {
		self.get(index).map(Value::as_string)
	}

	/// Borrow the object at `index`.
	pub fn get_as_object(&self, index: usize) -> Option<&Object> {
		self.get(index).and_then(Value::as_object)
	}

	/// Mutably borrow the object at `index`.
	pub fn get_as_object_mut(&mut self, index: usize) -> Option<&mut Object> {
		self.get_mut(index).and_then(Value::as_object_mut)
	}

	/// Borrow the array at `index`.
	pub fn get_as_array(&self, index: usize) -> Option<&Array> {
		self.get(index).and_then(Value::as_array)
	}

	/// Mutably borrow the array at `index`.
	pub fn get_as_array_mut(&mut self, index: usize) -> Option<&mut Array> {
		self.get_mut(index).and_then(Value::as_array_mut)
	}

	/// Number of elements.
	pub fn len(&self) -> usize {
		self.elements.len()
	}

	/// Whether there are no elements.
	pub fn is_empty(&self) -> bool {
		self.elements.is_empty()
	}

	/// Elements in order.
	pub fn iter(&self) -> std::slice::Iter<'_, Value> {
		self.elements.iter()
	}

	/// Mutable elements in order.
	pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Value> {
		self.elements.iter_mut()
	}

	/// Sort scalar elements in place.
	///
	/// Every element must have the same scalar kind. Strings order by code
	/// point (a proper prefix first), numbers numerically. Booleans put `true`
	/// first when ascending and `false` first when descending.
	pub fn sort(&mut self, ascending: bool) -> Result<(), SortError> {
		let kind = common_scalar_kind(self.elements.iter().map(Value::kind))?;
		log::debug!("sorting {} {kind} elements", self.elements.len());
		self.elements.sort_by(|left, right| compare_scalars(left, right, ascending));
		Ok(())
	}

	/// Sort object elements by the scalar under `key`.
	///
	/// Every element must be an object holding `key`, and those fields must
	/// share one scalar kind; ordering follows [`Array::sort`].
	pub fn sort_object_array(&mut self, ascending: bool, key: &str) -> Result<(), SortError> {
		let mut kinds = Vec::with_capacity(self.elements.len());
		for (index, element) in self.elements.iter().enumerate() {
			let Value::Object(object) = element else {
				return Err(SortError::NotObject { index });
			};
			let field = object.get(key).ok_or_else(|| SortError::MissingKey {
				index,
				key: key.to_owned(),
			})?;
			kinds.push(field.kind());
		}
		common_scalar_kind(kinds.into_iter())?;

		self.elements.sort_by(|left, right| match (left.get(key), right.get(key)) {
			(Some(left), Some(right)) => compare_scalars(left, right, ascending),
			_ => Ordering::Equal,
		});
		Ok(())
	}

	/// Pretty JSON text with a three-space indent.
	pub fn to_string_pretty(&self) -> String {
		render_pretty(self)
	}
}

fn common_scalar_kind(mut kinds: impl Iterator<Item = ValueKind>) -> Result<ValueKind, SortError> {
	let first = kinds.next().ok_or(SortError::Empty)?;
	if kinds.any(|kind| kind != first) {
		return Err(SortError::MixedTypes);
	}
	if !first.is_scalar() {
		return Err(SortError::NotScalar { kind: first });
	}
	Ok(first)
}

fn compare_scalars(left: &Value, right: &Value, ascending: bool) -> Ordering {
	let natural = match (left, right) {
		(Value::String(left), Value::String(right)) => left.cmp(right),
		(Value::Int(left), Value::Int(right)) => left.cmp(right),
		(Value::Float(left), Value::Float(right)) => left.total_cmp(right),
		// `true` leads in ascending order.
		(Value::Bool(left), Value::Bool(right)) => right.cmp(left),
		_ => Ordering::Equal,
	};
	if ascending { natural } else { natural.reverse() }
}

impl<T: Into<Value>> Extend<T> for Array {
	fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
		self.elements.extend(iter.into_iter().map(Into::into));
	}
}

impl<T: Into<Value>> FromIterator<T> for Array {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		Self {
			elements: iter.into_iter().map(Into::into).collect(),
		}
	}
}

impl<T: Into<Value>> From<Vec<T>> for Array {
	fn from(values: Vec<T>) -> Self {
		values.into_iter().collect()
	}
}

impl IntoIterator for Array {
	type Item = Value;
	type IntoIter = std::vec::IntoIter<Value>;

	fn into_iter(self) -> Self::IntoIter {
		self.elements.into_iter()
	}
}

impl<'a> IntoIterator for &'a Array {
	type Item = &'a Value;
	type IntoIter = std::slice::Iter<'a, Value>;

	fn into_iter(self) -> Self::IntoIter {
		self.elements.iter()
	}
}

impl Serialize for Array {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		serializer.collect_seq(self.elements.iter())
	}
}

impl fmt::Display for Array {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		render_compact(self, f)
	}
}
