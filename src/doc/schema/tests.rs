mod unit_schema_compile {

	use crate::doc::builtin::Check;
	use crate::doc::{CompileOptions, RegexpPolicy, Schema, SchemaError, VItemKind, Value, ValueKind};

	#[test]
	fn root_shapes() {
		assert_eq!(Schema::compile(r#""HEX""#).expect("compiles").items().len(), 1);
		assert_eq!(Schema::compile(r#"{"type":"INT"}"#).expect("compiles").items().len(), 1);
		assert_eq!(Schema::compile(r#"["INT", "HEX", {"type":"OBJECT"}]"#).expect("compiles").items().len(), 3);
		assert!(Schema::compile("[]").expect("compiles").items().is_empty());
	}

	#[test]
	fn scalar_roots_are_rejected() {
		for text in ["12", "true", "null", "1.5"] {
			let err = Schema::compile(text).expect_err(text);
			assert!(matches!(err, SchemaError::UnsupportedRoot { .. }), "{text}: {err}");
		}
		assert!(matches!(Schema::compile("{"), Err(SchemaError::Parse(_))));
		let err = Schema::from_value(&Value::from(3), &CompileOptions::default()).expect_err("int root");
		assert!(matches!(err, SchemaError::UnsupportedRoot { kind: ValueKind::Int }));
	}

	#[test]
	fn object_body_refines_builtin() {
		let schema = Schema::compile(r#"{"type":"OBJECT","object":{"name":{"type":"STRING","min":4,"max":25,"required":true},"tags":"NONEMPTY.ARRAY"}}"#)
			.expect("compiles");
		let root = &schema.items()[0];
		assert_eq!(root.kind, VItemKind::Object);
		assert_eq!(root.name, None);
		assert_eq!(root.children.len(), 2);

		let name = &root.children[0];
		assert_eq!(name.name.as_deref(), Some("name"));
		assert_eq!((name.min, name.max, name.required), (4, 25, true));

		let tags = &root.children[1];
		assert_eq!(tags.kind, VItemKind::Array);
		assert_eq!(tags.min, 1);
		assert!(!tags.required);
	}

	#[test]
	fn size_sets_both_bounds() {
		let schema = Schema::compile(r#"{"type":"STRING","size":3}"#).expect("compiles");
		let item = &schema.items()[0];
		assert_eq!((item.min, item.max), (3, 3));

		let schema = Schema::compile(r#"{"type":"NUMBER","min":-1.5,"max":2}"#).expect("compiles");
		let item = &schema.items()[0];
		assert_eq!((item.min_float, item.max_float), (-1.5, 2.0));
	}

	#[test]
	fn nonempty_minimum_is_clamped() {
		let schema = Schema::compile(r#"{"type":"NONEMPTY.STRING","min":0}"#).expect("compiles");
		assert_eq!(schema.items()[0].min, 1);
	}

	#[test]
	fn array_elements_single_or_alternatives() {
		let single = Schema::compile(r#"{"type":"ARRAY","array":"INT"}"#).expect("compiles");
		assert_eq!(single.items()[0].children.len(), 1);
		assert_eq!(single.items()[0].children[0].kind, VItemKind::Int);

		let many = Schema::compile(r#"{"type":"ARRAY","array":["INT",{"type":"STRING"}]}"#).expect("compiles");
		let children = &many.items()[0].children;
		assert_eq!(children.iter().map(|child| child.kind).collect::<Vec<_>>(), vec![VItemKind::Int, VItemKind::String]);
		assert!(children.iter().all(|child| child.name.is_none()));
	}

	#[test]
	fn nested_multi_inherits_name() {
		let schema = Schema::compile(r#"{"type":"OBJECT","object":{"id":["INT","HEX"]}}"#).expect("compiles");
		let id = &schema.items()[0].children[0];
		assert_eq!(id.kind, VItemKind::Multi);
		assert!(id.children.iter().all(|child| child.name.as_deref() == Some("id")));
		assert_eq!(id.children[1].check, Some(Check::Hex));
	}

	#[test]
	fn unknown_and_malformed_bodies_are_permissive() {
		let schema = Schema::compile(r#"{"type":"OBJECT","object":{"a":"NO_SUCH_TYPE","b":12,"c":{"max":3}}}"#).expect("compiles");
		let kinds: Vec<VItemKind> = schema.items()[0].children.iter().map(|child| child.kind).collect();
		assert_eq!(kinds, vec![VItemKind::Null, VItemKind::Null, VItemKind::Null]);
	}

	#[test]
	fn invalid_regexp_follows_policy() {
		let text = r#"{"type":"STRING","regexp":"(unclosed"}"#;
		let ignored = Schema::compile(text).expect("ignored by default");
		assert!(ignored.items()[0].regexp.is_none());

		let options = CompileOptions {
			on_invalid_regexp: RegexpPolicy::Reject,
			..CompileOptions::default()
		};
		let err = Schema::compile_with(text, &options).expect_err("rejected");
		assert!(matches!(err, SchemaError::InvalidRegexp { ref pattern, .. } if pattern == "(unclosed"));
	}

	#[test]
	fn string_max_option_applies_to_free_form_strings() {
		let options = CompileOptions {
			string_max: 16,
			..CompileOptions::default()
		};
		let schema = Schema::compile_with(r#"["STRING","HEX","EMAIL"]"#, &options).expect("compiles");
		let maxes: Vec<i64> = schema.items().iter().map(|item| item.max).collect();
		assert_eq!(maxes, vec![16, 16, 255]);
	}
}
