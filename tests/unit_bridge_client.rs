#![allow(missing_docs)]

mod support;

use aecli::bridge::{
	ApplyMode, BridgeClient, BridgeError, Host, Interpolation, LayerSelector, PropertyQuery, SetKeyframe, UNKNOWN_BRIDGE_ERROR,
};
use serde_json::json;
use support::{FakeBridge, Routes};

fn client(bridge: &FakeBridge) -> BridgeClient {
	BridgeClient::new(&format!("{}/", bridge.base_url), 5.0).expect("client builds")
}

#[test]
fn success_envelope_yields_data() {
	let bridge = FakeBridge::start(Routes::default().ok("GET", "/selected-properties", json!([{"name": "Opacity"}])));
	let value = client(&bridge).selected_properties().expect("selected properties");
	assert_eq!(value, json!([{"name": "Opacity"}]));
}

#[test]
fn health_is_returned_unwrapped() {
	let bridge = FakeBridge::start(Routes::default().raw("GET", "/health", 200, r#"{"status":"ok","version":"1.2"}"#));
	let value = client(&bridge).health().expect("health");
	assert_eq!(value, json!({"status": "ok", "version": "1.2"}));
}

#[test]
fn error_envelope_surfaces_bridge_message() {
	let bridge = FakeBridge::start(
		Routes::default()
			.raw("POST", "/delete-layer", 400, r#"{"status":"error","message":"Layer not found"}"#)
			.raw("POST", "/duplicate-layer", 200, r#"{"status":"error"}"#),
	);
	let client = client(&bridge);

	let err = client.delete_layer(9).expect_err("bridge error");
	assert!(matches!(&err, BridgeError::Bridge { message } if message == "Layer not found"), "{err}");

	let err = client.duplicate_layer(9).expect_err("bridge error without message");
	assert!(matches!(&err, BridgeError::Bridge { message } if message == UNKNOWN_BRIDGE_ERROR), "{err}");
}

#[test]
fn non_json_failure_keeps_http_status() {
	let bridge = FakeBridge::start(Routes::default().raw("GET", "/layers", 502, "bad gateway"));
	let err = client(&bridge).list_layers().expect_err("status error");
	assert!(matches!(err, BridgeError::Status { status: 502, ref body } if body == "bad gateway"));
}

#[test]
fn property_query_is_encoded_in_wire_order() {
	let bridge = FakeBridge::start(Routes::default().ok("GET", "/properties", json!([])));
	let query = PropertyQuery {
		include_groups: vec!["ADBE Transform Group".to_owned(), String::new(), "ADBE Effect Parade".to_owned()],
		exclude_groups: Vec::new(),
		max_depth: Some(2),
		include_group_children: true,
		time: None,
	};
	client(&bridge).properties(&LayerSelector::Name("Title".to_owned()), &query).expect("properties");

	let seen = bridge.requests_to("/properties");
	assert_eq!(seen.len(), 1);
	let query = &seen[0].query;
	assert!(query.starts_with("layerName=Title&"), "{query}");
	assert_eq!(query.matches("includeGroup=").count(), 2, "{query}");
	assert!(query.contains("includeGroup=ADBE+Transform+Group"), "{query}");
	assert!(query.ends_with("maxDepth=2&includeGroupChildren=true"), "{query}");
}

#[test]
fn keyframe_body_flattens_selector_and_skips_unset_fields() {
	let bridge = FakeBridge::start(Routes::default().ok("POST", "/keyframes", json!({"keyIndex": 1})));
	let body = SetKeyframe {
		layer: LayerSelector::Id(3),
		property_path: "ADBE Transform Group.ADBE Position".to_owned(),
		time: 0.5,
		value: json!([960, 540]),
		in_interp: Some(Interpolation::Hold),
		out_interp: None,
		ease_in: None,
		ease_out: None,
	};
	let data = client(&bridge).set_keyframe(&body).expect("keyframe");
	assert_eq!(data, json!({"keyIndex": 1}));

	let seen = bridge.requests_to("/keyframes");
	assert_eq!(
		seen[0].body,
		Some(json!({
			"layerId": 3,
			"propertyPath": "ADBE Transform Group.ADBE Position",
			"time": 0.5,
			"value": [960, 540],
			"inInterp": "hold"
		}))
	);
}

#[test]
fn host_reads_decode_native_records() {
	let bridge = FakeBridge::start(
		Routes::default()
			.ok(
				"GET",
				"/comps",
				json!([{"id": 10, "name": "Main", "width": 1920, "height": 1080, "frameRate": 29.97, "isActive": true}]),
			)
			.ok("GET", "/animations", json!([{"propertyPath": "ADBE Transform Group.ADBE Opacity", "keyframes": [{"time": 0, "value": null}]}])),
	);
	let client = client(&bridge);

	let comps = client.list_compositions().expect("comps");
	assert_eq!(comps.len(), 1);
	assert!(comps[0].active());
	assert_eq!(comps[0].name.as_deref(), Some("Main"));

	let animations = client.get_animations(4).expect("animations");
	assert_eq!(animations[0].keyframes.as_ref().map(Vec::len), Some(1));
	assert_eq!(bridge.requests_to("/animations")[0].query, "layerId=4");
}

#[test]
fn apply_scene_posts_mode_and_flag() {
	let bridge = FakeBridge::start(Routes::default().ok("POST", "/scene", json!({"created": 2})));
	let scene = json!({"layers": [{"id": "title", "type": "text"}]});
	client(&bridge).apply_scene(&scene, true, ApplyMode::ClearAll).expect("apply");

	let seen = bridge.requests_to("/scene");
	assert_eq!(seen[0].method, "POST");
	assert_eq!(seen[0].body, Some(json!({"scene": scene, "validateOnly": true, "mode": "clear-all"})));
}
