#![allow(missing_docs)]

use std::io::Write;
use std::process::{Command, Output, Stdio};

use djson_testkit::fixture_path;
use serde_json::{Value, json};

#[test]
fn fmt_prints_canonical_json() {
	let json = run_json(&["fmt", &fixture("people.json")]);
	assert_eq!(json[0]["name"], "Ricardo Longa");
	assert_eq!(json.as_array().map(Vec::len), Some(3));
}

#[test]
fn fmt_pretty_uses_three_space_indent() {
	let output = run(&["fmt", &fixture("alternatives_schema.json"), "--pretty"]);
	assert!(output.status.success());
	let text = String::from_utf8(output.stdout).expect("utf-8 stdout");
	assert!(text.starts_with("[\n   {\n      \"object\": {},\n"), "unexpected layout: {text}");
}

#[test]
fn get_reads_nested_values() {
	let json = run_json(&["get", &fixture("people.json"), "--path", r#"[1]["skills"]"#]);
	assert_eq!(json, json!(["Golang", "Java"]));
}

#[test]
fn get_missing_path_prints_null_and_fails() {
	let output = run(&["get", &fixture("people.json"), "--path", r#"[9]["name"]"#]);
	assert!(!output.status.success());
	assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "null");
}

#[test]
fn type_reports_kind_name() {
	let output = run(&["type", &fixture("user.json"), "--path", r#"["score"]"#]);
	assert!(output.status.success());
	assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "float");
}

#[test]
fn keys_lists_object_keys() {
	let json = run_json(&["keys", &fixture("user.json"), "--path", r#"["devices"][0]"#, "--json"]);
	assert_eq!(json, json!(["kind", "uuid"]));
}

#[test]
fn set_updates_and_pads_arrays() {
	let json = run_json(&["set", &fixture("people.json"), "--path", r#"[2]["skills"][2]"#, "--value", "Rust"]);
	assert_eq!(json[2]["skills"], json!([0, 0, "Rust"]));
}

#[test]
fn set_insert_places_value_before_index() {
	let json = run_json(&["set", &fixture("people.json"), "--path", "[0]", "--value", r#"{"name":"First"}"#, "--insert"]);
	assert_eq!(json[0], json!({"name": "First"}));
	assert_eq!(json.as_array().map(Vec::len), Some(4));
}

#[test]
fn set_rejects_missing_intermediate_key() {
	let output = run(&["set", &fixture("user.json"), "--path", r#"["nope"]["x"]"#, "--value", "1"]);
	assert!(!output.status.success());
	assert!(String::from_utf8_lossy(&output.stderr).contains("invalid path"));
}

#[test]
fn remove_drops_entry() {
	let json = run_json(&["remove", &fixture("user.json"), "--path", r#"["devices"]"#]);
	assert!(json.get("devices").is_none());
	assert_eq!(json["name"], "wakeupbb");
}

#[test]
fn sort_by_object_key() {
	let json = run_json(&["sort", &fixture("user.json"), "--path", r#"["devices"]"#, "--key", "kind"]);
	assert_eq!(json["devices"][0]["kind"], "laptop");
	assert_eq!(json["devices"][1]["kind"], "phone");

	let json = run_json(&["sort", &fixture("user.json"), "--path", r#"["tags"]"#, "--desc"]);
	assert_eq!(json["tags"], json!(["beta", "admin"]));
}

#[test]
fn sort_objects_without_key_fails() {
	let output = run(&["sort", &fixture("user.json"), "--path", r#"["devices"]"#]);
	assert!(!output.status.success());
	assert!(String::from_utf8_lossy(&output.stderr).contains("sort failed"));
}

#[test]
fn validate_reports_and_sets_status() {
	let ok = run(&["validate", "--schema", &fixture("user_schema.json"), &fixture("user.json"), "--json"]);
	assert!(ok.status.success());
	let json: Value = serde_json::from_slice(&ok.stdout).expect("stdout should be valid json");
	assert_eq!(json, json!({"valid": true}));

	let bad = run(&["validate", "--schema", &fixture("user_schema.json"), &fixture("user_invalid.json")]);
	assert!(!bad.status.success());
	assert_eq!(String::from_utf8_lossy(&bad.stdout).trim(), "invalid");
}

#[test]
fn stdin_is_read_for_dash() {
	let mut child = Command::new(env!("CARGO_BIN_EXE_djson"))
		.args(["get", "-", "--path", r#"["a"][1]"#])
		.stdin(Stdio::piped())
		.stdout(Stdio::piped())
		.spawn()
		.expect("command spawns");
	child
		.stdin
		.take()
		.expect("stdin piped")
		.write_all(br#"{"a":[1,{"b":2}]}"#)
		.expect("stdin accepts input");
	let output = child.wait_with_output().expect("command finishes");

	assert!(output.status.success());
	let json: Value = serde_json::from_slice(&output.stdout).expect("stdout should be valid json");
	assert_eq!(json, json!({"b": 2}));
}

fn run(args: &[&str]) -> Output {
	Command::new(env!("CARGO_BIN_EXE_djson")).args(args).output().expect("command executes")
}

fn run_json(args: &[&str]) -> Value {
	let output = run(args);
	assert!(output.status.success(), "command should succeed: {}", String::from_utf8_lossy(&output.stderr));
	serde_json::from_slice(&output.stdout).expect("stdout should be valid json")
}

fn fixture(name: &str) -> String {
	fixture_path(name).display().to_string()
}
