use serde_json::json;

use crate::bridge::{BridgeClient, BridgeError, LayerSelector, PropertyQuery, decode_envelope, property_query_params};

#[test]
fn success_envelope_yields_data() {
	let data = decode_envelope(200, r#"{"status":"success","data":[{"id":1}]}"#).expect("success envelope");
	assert_eq!(data, json!([{"id": 1}]));
}

#[test]
fn success_envelope_without_data_yields_payload() {
	let data = decode_envelope(200, r#"{"status":"success","layerId":4}"#).expect("success envelope");
	assert_eq!(data, json!({"status": "success", "layerId": 4}));
}

#[test]
fn error_envelope_message_wins_over_http_status() {
	let err = decode_envelope(400, r#"{"status":"error","message":"Layer not found"}"#).expect_err("error envelope");
	assert!(matches!(&err, BridgeError::Bridge { message } if message == "Layer not found"));
	assert_eq!(err.to_string(), "Layer not found");
}

#[test]
fn error_envelope_without_message_uses_fallback() {
	let err = decode_envelope(200, r#"{"status":"error"}"#).expect_err("error envelope");
	assert_eq!(err.to_string(), "Unknown error from After Effects bridge.");
}

#[test]
fn non_json_failure_reports_http_status() {
	let err = decode_envelope(502, "Bad Gateway").expect_err("gateway failure");
	assert!(matches!(err, BridgeError::Status { status: 502, ref body } if body == "Bad Gateway"));
}

#[test]
fn non_json_success_is_a_decode_error() {
	let err = decode_envelope(200, "<html>").expect_err("html body");
	assert!(matches!(err, BridgeError::Json(_)));
}

#[test]
fn property_params_follow_wire_order_and_skip_empty_groups() {
	let query = PropertyQuery {
		include_groups: vec!["ADBE Transform Group".to_owned(), String::new(), "ADBE Text Properties".to_owned()],
		exclude_groups: vec![String::new(), "ADBE Effect Parade".to_owned()],
		max_depth: Some(3),
		include_group_children: true,
		time: Some(1.5),
	};

	let params = property_query_params(&LayerSelector::Name("Title".to_owned()), &query);
	let params: Vec<(&str, &str)> = params.iter().map(|(key, value)| (*key, value.as_str())).collect();
	assert_eq!(
		params,
		vec![
			("layerName", "Title"),
			("includeGroup", "ADBE Transform Group"),
			("includeGroup", "ADBE Text Properties"),
			("excludeGroup", "ADBE Effect Parade"),
			("maxDepth", "3"),
			("includeGroupChildren", "true"),
			("time", "1.5"),
		]
	);
}

#[test]
fn default_property_query_only_names_the_layer() {
	let params = property_query_params(&LayerSelector::Id(7), &PropertyQuery::default());
	assert_eq!(params, vec![("layerId", "7".to_owned())]);
}

#[test]
fn client_trims_trailing_slash_and_rejects_negative_timeout() {
	let client = BridgeClient::new("http://127.0.0.1:9/", 2.5).expect("client builds");
	assert_eq!(client.base_url(), "http://127.0.0.1:9");

	assert!(matches!(BridgeClient::new("http://127.0.0.1:9", -1.0), Err(BridgeError::InvalidArguments(_))));
}
