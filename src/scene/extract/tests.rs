use serde_json::{Value, json};

use crate::bridge::NativeProperty;
use crate::scene::{PropValue, SourceText, TEXT_DOCUMENT_PATH, extract_text, extract_transform, is_placeholder};

fn prop(path: &str, value: Value) -> NativeProperty {
	NativeProperty {
		path: Some(path.to_owned()),
		value: Some(value),
		..NativeProperty::default()
	}
}

#[test]
fn transform_decodes_present_paths_only() {
	let props = vec![
		prop("ADBE Transform Group.ADBE Position", json!("960, 540")),
		prop("ADBE Transform Group.ADBE Opacity", json!("100")),
		prop("ADBE Transform Group.ADBE Rotate Z", json!("  ")),
		prop("ADBE Transform Group.ADBE Position_0", json!("5")),
	];

	let transform = extract_transform(&props);
	assert_eq!(transform.position, Some(PropValue::List(vec![PropValue::Int(960), PropValue::Int(540)])));
	assert_eq!(transform.opacity, Some(PropValue::Int(100)));
	assert_eq!(transform.rotation, None, "blank values are omitted");
	assert_eq!(transform.anchor_point, None);
	assert_eq!(transform.scale, None);
	assert_eq!(
		serde_json::to_value(&transform).expect("serialize"),
		json!({"position": [960, 540], "opacity": 100})
	);
}

#[test]
fn later_entries_for_a_path_win() {
	let props = vec![
		prop("ADBE Transform Group.ADBE Scale", json!("50, 50")),
		prop("ADBE Transform Group.ADBE Scale", json!("100, 100, 100")),
	];

	let transform = extract_transform(&props);
	assert_eq!(
		serde_json::to_value(&transform).expect("serialize"),
		json!({"scale": [100, 100, 100]})
	);
}

#[test]
fn empty_listing_yields_empty_transform() {
	assert!(extract_transform(&[]).is_empty());
}

#[test]
fn text_is_trimmed_literal() {
	let props = vec![prop(TEXT_DOCUMENT_PATH, json!("  Hello  "))];
	assert_eq!(extract_text(&props), SourceText::Text("Hello".to_owned()));
}

#[test]
fn missing_text_document_is_absent() {
	let props = vec![prop("ADBE Transform Group.ADBE Position", json!("1, 2"))];
	assert_eq!(extract_text(&props), SourceText::Absent);
}

#[test]
fn placeholder_and_blank_text_is_unrecoverable() {
	for raw in [json!("[object Object]"), json!("TextDocument"), json!("   "), Value::Null, json!({"text": "x"})] {
		let props = vec![prop(TEXT_DOCUMENT_PATH, raw.clone())];
		assert_eq!(extract_text(&props), SourceText::Unrecoverable, "raw value {raw}");
	}
}

#[test]
fn numeric_text_is_kept_as_string() {
	let props = vec![prop(TEXT_DOCUMENT_PATH, json!(2024))];
	assert_eq!(extract_text(&props), SourceText::Text("2024".to_owned()));
}

#[test]
fn unrendered_host_values_are_placeholders() {
	assert!(is_placeholder("[object Shape]"));
	assert!(is_placeholder("TextDocument"));
	assert!(!is_placeholder("Hello [object]"));
}
