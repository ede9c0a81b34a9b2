#![allow(missing_docs)]

use djson::doc::{Array, Object, Value};
use djson_testkit::{fixture_json, fixture_text};
use pretty_assertions::assert_eq;

#[test]
fn fixtures_survive_parse_and_serialize() {
	for name in ["people.json", "user.json", "user_schema.json", "alternatives_schema.json"] {
		let doc = Value::parse(&fixture_text(name)).expect("fixture parses");

		let compact: serde_json::Value = serde_json::from_str(&doc.to_string()).expect("compact output is JSON");
		assert_eq!(compact, fixture_json(name), "{name}");

		let pretty: serde_json::Value = serde_json::from_str(&doc.to_string_pretty()).expect("pretty output is JSON");
		assert_eq!(pretty, fixture_json(name), "{name}");

		assert_eq!(Value::parse(&doc.to_string()).expect("reparses"), doc, "{name}");
	}
}

#[test]
fn built_trees_round_trip() {
	let mut devices = Array::new();
	devices.push_back(Object::new().with("kind", "phone").with("id", 1)).push_back(Value::Null);

	let doc = Value::from(
		Object::new()
			.with("name", "kim")
			.with("ratio", -0.25)
			.with("flags", vec![true, false])
			.with("devices", devices)
			.with("empty", Object::new())
			.with("quote", "say \"hi\"\n"),
	);

	assert_eq!(Value::parse(&doc.to_string()).expect("reparses"), doc);
	assert_eq!(doc.to_json(), serde_json::from_str::<serde_json::Value>(&doc.to_string()).expect("valid JSON"));
}

#[test]
fn string_root_round_trips() {
	let doc = Value::from("needs \"quotes\"");
	assert_eq!(Value::parse(&doc.to_string()).expect("reparses"), doc);
}
