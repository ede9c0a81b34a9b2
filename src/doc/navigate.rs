use crate::doc::{Array, Object, Path, PathError, PathToken, Value};

/// Placeholder stored when an array is padded during a write.
pub const PLACEHOLDER: Value = Value::Int(0);

/// How a mutable walk treats array indices at or past the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Growth {
	/// Never pad; the terminal slot may address nothing.
	#[default]
	Fixed,
	/// Pad until the terminal index addresses an existing element.
	Element,
	/// Pad until the terminal index is at most the length, so inserting there appends.
	Gap,
}

/// Terminal position resolved by a read-only walk.
#[derive(Debug, Clone)]
pub enum SlotRef<'a> {
	/// Index inside an array (may be out of range).
	Array {
		/// Container holding the slot.
		array: &'a Array,
		/// Terminal index.
		index: usize,
	},
	/// Key inside an object (may be absent).
	Object {
		/// Container holding the slot.
		object: &'a Object,
		/// Terminal key.
		key: String,
	},
}

impl<'a> SlotRef<'a> {
	/// Value currently stored in the slot.
	pub fn value(&self) -> Option<&'a Value> {
		match self {
			SlotRef::Array { array, index } => array.get(*index),
			SlotRef::Object { object, key } => object.get(key),
		}
	}
}

/// Terminal position resolved by a mutable walk.
#[derive(Debug)]
pub enum SlotMut<'a> {
	/// Index inside an array.
	Array {
		/// Container holding the slot.
		array: &'a mut Array,
		/// Terminal index.
		index: usize,
	},
	/// Key inside an object.
	Object {
		/// Container holding the slot.
		object: &'a mut Object,
		/// Terminal key.
		key: String,
	},
}

impl<'a> SlotMut<'a> {
	/// Mutable borrow of the value stored in the slot.
	pub fn into_value(self) -> Option<&'a mut Value> {
		match self {
			SlotMut::Array { array, index } => array.get_mut(index),
			SlotMut::Object { object, key } => object.get_mut(&key),
		}
	}
}

/// Walk `path` from `root` without changing anything.
///
/// Every token but the last must select an existing object or array; the
/// last token must match the kind of the container it lands in.
pub fn navigate<'a>(root: &'a Value, path: &Path) -> Result<SlotRef<'a>, PathError> {
	let Some((last, intermediate)) = path.tokens.split_last() else {
		return Err(reject(path, 0, "no tokens"));
	};

	let mut current = root;
	for (step, token) in intermediate.iter().enumerate() {
		current = match (current, token) {
			(Value::Object(object), PathToken::Key(key)) => object.get(key).ok_or_else(|| reject(path, step, "missing key"))?,
			(Value::Array(array), PathToken::Index(index)) => {
				let index = to_index(path, step, *index)?;
				array.get(index).ok_or_else(|| reject(path, step, "index out of range"))?
			}
			(other, _) => return Err(reject(path, step, other.kind().as_str())),
		};
	}

	let step = intermediate.len();
	match (current, last) {
		(Value::Object(object), PathToken::Key(key)) => Ok(SlotRef::Object { object, key: key.clone() }),
		(Value::Array(array), PathToken::Index(index)) => Ok(SlotRef::Array {
			array,
			index: to_index(path, step, *index)?,
		}),
		(other, _) => Err(reject(path, step, other.kind().as_str())),
	}
}

/// Walk `path` from `root` for a write.
///
/// Objects are never created on the way: a missing intermediate key is an
/// error. Unless `growth` is [`Growth::Fixed`], arrays are padded with
/// [`PLACEHOLDER`] so intermediate indices exist, and the terminal array is
/// padded as `growth` requests. Padding is kept even if a later token fails.
pub fn navigate_mut<'a>(root: &'a mut Value, path: &Path, growth: Growth) -> Result<SlotMut<'a>, PathError> {
	let Some((last, intermediate)) = path.tokens.split_last() else {
		return Err(reject(path, 0, "no tokens"));
	};

	let mut current = root;
	for (step, token) in intermediate.iter().enumerate() {
		current = match (current, token) {
			(Value::Object(object), PathToken::Key(key)) => object.get_mut(key).ok_or_else(|| reject(path, step, "missing key"))?,
			(Value::Array(array), PathToken::Index(index)) => {
				let index = to_index(path, step, *index)?;
				if growth != Growth::Fixed {
					pad(array, index + 1);
				}
				array.get_mut(index).ok_or_else(|| reject(path, step, "index out of range"))?
			}
			(other, _) => return Err(reject(path, step, other.kind().as_str())),
		};
	}

	let step = intermediate.len();
	match (current, last) {
		(Value::Object(object), PathToken::Key(key)) => Ok(SlotMut::Object { object, key: key.clone() }),
		(Value::Array(array), PathToken::Index(index)) => {
			let index = to_index(path, step, *index)?;
			match growth {
				Growth::Fixed => {}
				Growth::Element => {
					pad(array, index + 1);
				}
				Growth::Gap => {
					pad(array, index);
				}
			}
			Ok(SlotMut::Array { array, index })
		}
		(other, _) => Err(reject(path, step, other.kind().as_str())),
	}
}

/// Padding past this many placeholders in one step is logged as a warning.
const PAD_WARN_LEN: usize = 1 << 20;

/// Pad `array` to `len` and return how many placeholders were added.
///
/// Growth is bounded only by memory; a huge index allocates every slot below it.
fn pad(array: &mut Array, len: usize) -> usize {
	let missing = len.saturating_sub(array.len());
	if missing > PAD_WARN_LEN {
		log::warn!("padding array with {missing} placeholders to reach length {len}");
	}
	array.extend(std::iter::repeat_n(PLACEHOLDER, missing));
	missing
}

fn to_index(path: &Path, step: usize, index: i64) -> Result<usize, PathError> {
	usize::try_from(index).map_err(|_| reject(path, step, "negative index"))
}

fn reject(path: &Path, step: usize, reason: &str) -> PathError {
	log::debug!("path {:?} rejected at token {step}: {reason}", path.as_str());
	PathError::InvalidPath {
		path: path.as_str().to_owned(),
	}
}
