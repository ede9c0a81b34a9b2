mod unit_validate_rules {

	use crate::doc::{Schema, Value};

	fn schema(text: &str) -> Schema {
		Schema::compile(text).expect("schema compiles")
	}

	fn doc(text: &str) -> Value {
		Value::parse(text).expect("document parses")
	}

	#[test]
	fn string_length_bounds() {
		let schema = schema(r#"{"type":"OBJECT","object":{"name":{"type":"STRING","min":4,"max":25}}}"#);
		assert!(schema.is_valid(&doc(r#"{"name":"wakeupbb"}"#)));
		assert!(!schema.is_valid(&doc(r#"{"name":"yu"}"#)));
		assert!(!schema.is_valid(&doc(r#"{"name":"abcdefghijklmnopqrstuvwxyz"}"#)));
		assert!(schema.is_valid(&doc(r#"{"name":1234}"#)));
	}

	#[test]
	fn root_alternatives() {
		let schema = schema(r#"[{"type":"OBJECT","object":{}}, "HEX"]"#);
		assert!(schema.is_valid(&doc("FF112345")));
		assert!(schema.is_valid(&doc(r#"{"anything":1}"#)));
		assert!(!schema.is_valid(&doc("not-hex!")));
		assert!(!schema.is_valid(&doc("[1]")));
	}

	#[test]
	fn empty_alternatives_accept_anything() {
		let schema = schema("[]");
		assert!(schema.is_valid(&doc("12")));
		assert!(schema.is_valid(&Value::Null));
	}

	#[test]
	fn required_versus_optional_absence() {
		let required = schema(r#"{"type":"OBJECT","object":{"age":{"type":"INT","required":true}}}"#);
		let optional = schema(r#"{"type":"OBJECT","object":{"age":{"type":"INT"}}}"#);
		let without = doc(r#"{"name":"kim"}"#);
		assert!(!required.is_valid(&without));
		assert!(optional.is_valid(&without));
		assert!(required.is_valid(&doc(r#"{"age":3}"#)));
		assert!(optional.is_valid(&doc(r#"{"age":"3"}"#)));
		assert!(!required.is_valid(&doc(r#"{"age":"3"}"#)));
	}

	#[test]
	fn optional_scalars_of_wrong_type_pass() {
		let schema = schema(r#"{"type":"OBJECT","object":{"age":"INT","ratio":"FLOAT","name":"STRING","score":{"type":"NUMBER","max":1}}}"#);
		assert!(schema.is_valid(&doc(r#"{"age":"3"}"#)));
		assert!(schema.is_valid(&doc(r#"{"ratio":1}"#)));
		assert!(schema.is_valid(&doc(r#"{"name":5}"#)));
		assert!(schema.is_valid(&doc(r#"{"score":"high"}"#)));
		assert!(!schema.is_valid(&doc(r#"{"age":3.5}"#)));
		assert!(!schema.is_valid(&doc(r#"{"score":2}"#)));
		assert!(!schema.is_valid(&doc(r#"{"name":5,"ratio":"x","age":"y","score":1.5}"#)));
	}

	#[test]
	fn unnamed_rules_of_wrong_type_fail() {
		assert!(!schema(r#""INT""#).is_valid(&doc(r#""3""#)));
		assert!(!schema(r#""STRING""#).is_valid(&doc("5")));
		assert!(!schema(r#"{"type":"ARRAY","array":"INT"}"#).is_valid(&doc(r#"[1,"2"]"#)));
	}

	#[test]
	fn optional_containers_of_wrong_type_pass() {
		let shaped = schema(r#"{"type":"OBJECT","object":{"meta":{"type":"OBJECT","object":{"v":{"type":"INT","required":true}}},"list":"ARRAY"}}"#);
		assert!(shaped.is_valid(&doc(r#"{"meta":5,"list":"x"}"#)));
		assert!(!shaped.is_valid(&doc(r#"{"meta":{"v":"x"}}"#)));

		let required = schema(r#"{"type":"OBJECT","object":{"meta":{"type":"OBJECT","required":true}}}"#);
		assert!(!required.is_valid(&doc(r#"{"meta":5}"#)));
		assert!(required.is_valid(&doc(r#"{"meta":{}}"#)));
	}

	#[test]
	fn unnamed_root_requires_matching_type() {
		assert!(!schema(r#"{"type":"OBJECT","object":{}}"#).is_valid(&doc("[]")));
		assert!(!schema(r#""ARRAY""#).is_valid(&doc("{}")));
		assert!(schema(r#""ARRAY""#).is_valid(&doc("[1,\"a\"]")));
	}

	#[test]
	fn numeric_kinds() {
		let int = schema(r#"{"type":"INT","min":1,"max":10}"#);
		assert!(int.is_valid(&doc("10")));
		assert!(!int.is_valid(&doc("11")));
		assert!(!int.is_valid(&doc("5.0")));

		let number = schema(r#"{"type":"NUMBER","min":0,"max":1}"#);
		assert!(number.is_valid(&doc("1")));
		assert!(number.is_valid(&doc("0.5")));
		assert!(!number.is_valid(&doc("1.5")));

		let float = schema(r#""FLOAT""#);
		assert!(float.is_valid(&doc("0.5")));
		assert!(!float.is_valid(&doc("1")));

		let uint = schema(r#""UINT""#);
		assert!(uint.is_valid(&doc("0")));
		assert!(!uint.is_valid(&doc("-1")));
	}

	#[test]
	fn bool_type_checked_only_when_required() {
		let optional = schema(r#"{"type":"OBJECT","object":{"on":"BOOL"}}"#);
		assert!(optional.is_valid(&doc(r#"{"on":"yes"}"#)));
		let required = schema(r#"{"type":"OBJECT","object":{"on":{"type":"BOOL","required":true}}}"#);
		assert!(!required.is_valid(&doc(r#"{"on":"yes"}"#)));
		assert!(required.is_valid(&doc(r#"{"on":false}"#)));
	}

	#[test]
	fn regexp_alone_decides_strings() {
		let schema = schema(r#"{"type":"STRING","max":2,"regexp":"^[a-z]+$"}"#);
		assert!(schema.is_valid(&doc(r#""abcdef""#)));
		assert!(!schema.is_valid(&doc(r#""ab1""#)));
	}

	#[test]
	fn predicates_apply_within_bounds() {
		let email = schema(r#""EMAIL""#);
		assert!(email.is_valid(&doc(r#""wakeup.bb@example.com""#)));
		assert!(!email.is_valid(&doc(r#""wakeup.bb""#)));

		let short_hex = schema(r#"{"type":"HEX","max":4}"#);
		assert!(short_hex.is_valid(&doc(r#""ABCD""#)));
		assert!(!short_hex.is_valid(&doc(r#""ABCDEF""#)));
	}

	#[test]
	fn hex_if_exist_fields() {
		let schema = schema(r#"{"type":"OBJECT","object":{"key":"HEX32.IF.EXIST"}}"#);
		assert!(schema.is_valid(&doc("{}")));
		assert!(schema.is_valid(&doc(r#"{"key":""}"#)));
		assert!(schema.is_valid(&doc(r#"{"key":"0a1B2c3D"}"#)));
		assert!(!schema.is_valid(&doc(r#"{"key":"0a1B2c"}"#)));
	}

	#[test]
	fn array_elements_and_bounds() {
		let schema = schema(r#"{"type":"ARRAY","min":1,"max":3,"array":["INT","HEX"]}"#);
		assert!(schema.is_valid(&doc(r#"[1,"ff",2]"#)));
		assert!(!schema.is_valid(&doc("[]")));
		assert!(!schema.is_valid(&doc("[1,2,3,4]")));
		assert!(!schema.is_valid(&doc(r#"[1,"zz"]"#)));
	}

	#[test]
	fn nested_multi_field() {
		let ids = schema(r#"{"type":"OBJECT","object":{"id":[{"type":"INT","max":9},"HEX"]}}"#);
		assert!(ids.is_valid(&doc(r#"{"id":7}"#)));
		assert!(ids.is_valid(&doc(r#"{"id":"0fa1"}"#)));
		assert!(ids.is_valid(&doc("{}")));
		// optional alternatives skip values of another type
		assert!(ids.is_valid(&doc(r#"{"id":1.5}"#)));
		assert!(ids.is_valid(&doc(r#"{"id":10}"#)));

		let strings = schema(r#"{"type":"OBJECT","object":{"contact":["HEX","EMAIL"]}}"#);
		assert!(strings.is_valid(&doc(r#"{"contact":"someone@example.org"}"#)));
		assert!(!strings.is_valid(&doc(r#"{"contact":"xyz"}"#)));
	}

	#[test]
	fn multi_elements_must_match_an_alternative() {
		let schema = schema(r#"{"type":"ARRAY","array":[{"type":"INT","max":9},"HEX"]}"#);
		assert!(schema.is_valid(&doc(r#"[7,"0fa1"]"#)));
		assert!(!schema.is_valid(&doc(r#"["xyz"]"#)));
		assert!(!schema.is_valid(&doc("[1.5]")));
		assert!(!schema.is_valid(&doc("[10]")));
	}

	#[test]
	fn nested_objects_recurse() {
		let schema = schema(
			r#"{"type":"OBJECT","object":{
				"user":{"type":"OBJECT","required":true,"object":{
					"email":{"type":"EMAIL","required":true},
					"country":"ISO31661A2",
					"joined":"YYYYMMDD"
				}}
			}}"#,
		);
		assert!(schema.is_valid(&doc(r#"{"user":{"email":"someone@example.org","country":"KR","joined":"2021-05-04"}}"#)));
		assert!(!schema.is_valid(&doc(r#"{"user":{"email":"someone@example.org","country":"ZZ"}}"#)));
		assert!(!schema.is_valid(&doc(r#"{"user":{"country":"KR"}}"#)));
		assert!(!schema.is_valid(&doc("{}")));
	}
}
