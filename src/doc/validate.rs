use crate::doc::{Array, Object, VItem, VItemKind, Value};

/// Check `doc` against compiled root alternatives.
///
/// With no alternatives anything is accepted; otherwise at least one must pass.
pub fn is_valid(items: &[VItem], doc: &Value) -> bool {
	items.is_empty() || items.iter().any(|item| check(item, Some(doc)))
}

/// Check one rule against the value it addresses.
///
/// `value` is the field named by the rule (`None` when the parent object
/// lacks it), or the root/element value itself for unnamed rules. The result
/// carries no explanation; failing rules are logged at debug level.
pub fn check(item: &VItem, value: Option<&Value>) -> bool {
	let Some(value) = value else {
		if item.required {
			log::debug!("rule {:?}: required field is absent", label(item));
		}
		return !item.required;
	};
	if skips(item, value) {
		return true;
	}

	let passed = match item.kind {
		VItemKind::Null => true,
		VItemKind::Bool => !item.required || value.is_bool(),
		VItemKind::Int => matches!(value, Value::Int(number) if (item.min..=item.max).contains(number)),
		VItemKind::Number => match value {
			Value::Int(number) => in_float_bounds(item, *number as f64),
			Value::Float(number) => in_float_bounds(item, *number),
			_ => false,
		},
		VItemKind::Float => matches!(value, Value::Float(number) if in_float_bounds(item, *number)),
		VItemKind::String => matches!(value, Value::String(text) if check_string(item, text)),
		VItemKind::Object => match value {
			Value::Object(object) => check_fields(item, object),
			_ => false,
		},
		VItemKind::Array => match value {
			Value::Array(array) => check_elements(item, array),
			_ => false,
		},
		VItemKind::Multi => item.children.iter().any(|child| check(child, Some(value))),
	};

	if !passed {
		log::debug!("rule {:?} ({:?}) rejected {} value", label(item), item.kind, value.kind());
	}
	passed
}

/// Optional named fields holding another type than the rule expects are skipped.
///
/// Unnamed roots and array elements are always checked.
fn skips(item: &VItem, value: &Value) -> bool {
	if item.name.is_none() || item.required {
		return false;
	}
	let expected = match item.kind {
		VItemKind::Null | VItemKind::Bool | VItemKind::Multi => return false,
		VItemKind::Int => value.is_int(),
		VItemKind::Float => value.is_float(),
		VItemKind::Number => value.is_numeric(),
		VItemKind::String => value.is_string(),
		VItemKind::Object => value.is_object(),
		VItemKind::Array => value.is_array(),
	};
	!expected
}

fn in_float_bounds(item: &VItem, number: f64) -> bool {
	item.min_float <= number && number <= item.max_float
}

fn check_string(item: &VItem, text: &str) -> bool {
	if let Some(regexp) = &item.regexp {
		return regexp.is_match(text);
	}
	let Ok(len) = i64::try_from(text.len()) else {
		return false;
	};
	if len < item.min || len > item.max {
		return false;
	}
	item.check.is_none_or(|check| check.matches(text))
}

fn check_fields(item: &VItem, object: &Object) -> bool {
	item.children
		.iter()
		.all(|child| check(child, child.name.as_deref().and_then(|name| object.get(name))))
}

fn check_elements(item: &VItem, array: &Array) -> bool {
	let Ok(len) = i64::try_from(array.len()) else {
		return false;
	};
	if len < item.min || len > item.max {
		return false;
	}
	item.children.is_empty()
		|| array
			.iter()
			.all(|element| item.children.iter().any(|alternative| check(alternative, Some(element))))
}

fn label(item: &VItem) -> &str {
	item.name.as_deref().unwrap_or("<root>")
}

#[cfg(test)]
mod tests;
