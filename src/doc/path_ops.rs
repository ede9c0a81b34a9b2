use crate::doc::{Array, Edit, Growth, Object, Path, PathError, Result, SlotMut, Value, ValueKind, navigate, navigate_mut};

/// Bracket-path addressed operations.
///
/// Reads never change the tree. Writes pad arrays with placeholders so the
/// addressed index exists, but never create missing object keys on the way.
impl Value {
	/// Borrow the value at `path`.
	pub fn get_path(&self, path: &str) -> Option<&Value> {
		navigate(self, &Path::parse(path)).ok()?.value()
	}

	/// Mutably borrow the value at `path`; writes through to this tree.
	pub fn get_path_mut(&mut self, path: &str) -> Option<&mut Value> {
		navigate_mut(self, &Path::parse(path), Growth::Fixed).ok()?.into_value()
	}

	/// Borrow the object at `path`.
	pub fn get_as_object_path(&self, path: &str) -> Option<&Object> {
		self.get_path(path).and_then(Value::as_object)
	}

	/// Mutably borrow the object at `path`.
	pub fn get_as_object_path_mut(&mut self, path: &str) -> Option<&mut Object> {
		self.get_path_mut(path).and_then(Value::as_object_mut)
	}

	/// Borrow the array at `path`.
	pub fn get_as_array_path(&self, path: &str) -> Option<&Array> {
		self.get_path(path).and_then(Value::as_array)
	}

	/// Mutably borrow the array at `path`.
	pub fn get_as_array_path_mut(&mut self, path: &str) -> Option<&mut Array> {
		self.get_path_mut(path).and_then(Value::as_array_mut)
	}

	/// Coerced integer at `path`.
	pub fn get_as_int_path(&self, path: &str) -> Option<i64> {
		self.get_path(path).and_then(Value::as_int)
	}

	/// Coerced integer at `path`, or `default`.
	pub fn get_as_int_path_or(&self, path: &str, default: i64) -> i64 {
		self.get_as_int_path(path).unwrap_or(default)
	}

	/// Coerced float at `path`.
	pub fn get_as_float_path(&self, path: &str) -> Option<f64> {
		self.get_path(path).and_then(Value::as_float)
	}

	/// Coerced float at `path`, or `default`.
	pub fn get_as_float_path_or(&self, path: &str, default: f64) -> f64 {
		self.get_as_float_path(path).unwrap_or(default)
	}

	/// Coerced boolean at `path`.
	pub fn get_as_bool_path(&self, path: &str) -> Option<bool> {
		self.get_path(path).and_then(Value::as_bool)
	}

	/// Coerced boolean at `path`, or `default`.
	pub fn get_as_bool_path_or(&self, path: &str, default: bool) -> bool {
		self.get_as_bool_path(path).unwrap_or(default)
	}

	/// Text at `path`.
	pub fn get_as_string_path(&self, path: &str) -> Option<String> {
		self.get_path(path).map(Value::as_string)
	}

	/// Text at `path`, or `default`.
	pub fn get_as_string_path_or(&self, path: &str, default: &str) -> String {
		self.get_as_string_path(path).unwrap_or_else(|| default.to_owned())
	}

	/// Kind of the value at `path`.
	pub fn get_type_path(&self, path: &str) -> Option<ValueKind> {
		self.get_path(path).map(Value::kind)
	}

	/// Keys of the object at `path`; empty when the target is absent or not an object.
	pub fn get_keys_path(&self, path: &str) -> std::result::Result<Vec<String>, PathError> {
		let slot = navigate(self, &Path::parse(path))?;
		Ok(slot
			.value()
			.and_then(Value::as_object)
			.map(|object| object.keys().map(str::to_owned).collect())
			.unwrap_or_default())
	}

	/// Replace the value at `path`, padding arrays so the index exists.
	///
	/// Padding allocates one placeholder per missing slot, so a very large
	/// index costs memory in proportion to it.
	pub fn update_path(&mut self, path: &str, value: impl Into<Value>) -> std::result::Result<(), PathError> {
		match navigate_mut(self, &Path::parse(path), Growth::Element)? {
			SlotMut::Array { array, index } => {
				array.replace_at(index, value);
			}
			SlotMut::Object { object, key } => {
				object.put(key, value);
			}
		}
		Ok(())
	}

	/// Insert at `path`: before the index for arrays (appending when it is the
	/// length, after padding), or upsert the key for objects.
	///
	/// Padding costs memory in proportion to the index, as for [`Value::update_path`].
	pub fn put_path(&mut self, path: &str, value: impl Into<Value>) -> std::result::Result<(), PathError> {
		match navigate_mut(self, &Path::parse(path), Growth::Gap)? {
			SlotMut::Array { array, index } => {
				array.insert(index, value);
			}
			SlotMut::Object { object, key } => {
				object.put(key, value);
			}
		}
		Ok(())
	}

	/// [`Value::put_path`] with a fresh one-entry object `{key: value}`.
	pub fn put_object_path(&mut self, path: &str, key: impl Into<String>, value: impl Into<Value>) -> std::result::Result<(), PathError> {
		self.put_path(path, Object::new().with(key, value))
	}

	/// Append to the array stored at `path`.
	pub fn push_back_path(&mut self, path: &str, value: impl Into<Value>) -> std::result::Result<(), PathError> {
		let parsed = Path::parse(path);
		match navigate_mut(self, &parsed, Growth::Fixed)?.into_value() {
			Some(Value::Array(array)) => {
				array.push_back(value);
				Ok(())
			}
			_ => Err(not_an_array(&parsed)),
		}
	}

	/// Remove the value at `path`.
	pub fn remove_path(&mut self, path: &str) -> std::result::Result<Edit, PathError> {
		Ok(match navigate_mut(self, &Path::parse(path), Growth::Fixed)? {
			SlotMut::Array { array, index } => array.remove(index),
			SlotMut::Object { object, key } => object.remove([key]),
		})
	}

	/// Sort the scalar array at `path`.
	pub fn sort_path(&mut self, path: &str, ascending: bool) -> Result<()> {
		self.array_at_path(path)?.sort(ascending)?;
		Ok(())
	}

	/// [`Value::sort_path`] ascending.
	pub fn sort_asc_path(&mut self, path: &str) -> Result<()> {
		self.sort_path(path, true)
	}

	/// [`Value::sort_path`] descending.
	pub fn sort_desc_path(&mut self, path: &str) -> Result<()> {
		self.sort_path(path, false)
	}

	/// Sort the object array at `path` by the field `key`.
	pub fn sort_object_array_path(&mut self, path: &str, ascending: bool, key: &str) -> Result<()> {
		self.array_at_path(path)?.sort_object_array(ascending, key)?;
		Ok(())
	}

	/// [`Value::sort_object_array_path`] ascending.
	pub fn sort_object_array_asc_path(&mut self, path: &str, key: &str) -> Result<()> {
		self.sort_object_array_path(path, true, key)
	}

	/// [`Value::sort_object_array_path`] descending.
	pub fn sort_object_array_desc_path(&mut self, path: &str, key: &str) -> Result<()> {
		self.sort_object_array_path(path, false, key)
	}

	fn array_at_path(&mut self, path: &str) -> std::result::Result<&mut Array, PathError> {
		let parsed = Path::parse(path);
		match navigate_mut(self, &parsed, Growth::Fixed)?.into_value() {
			Some(Value::Array(array)) => Ok(array),
			_ => Err(not_an_array(&parsed)),
		}
	}
}

fn not_an_array(path: &Path) -> PathError {
	log::debug!("path {:?} does not address an array", path.as_str());
	PathError::InvalidPath {
		path: path.as_str().to_owned(),
	}
}
