use serde_json::json;

use crate::bridge::{
	AddLayer, AddShapeRepeater, ApplyMode, ApplyScene, BridgeError, CompSelector, Interpolation, LayerPlacement, LayerSelector, MoveLayerOrder, NewLayerType,
	ParentLayer, RepeaterSettings, SetKeyframe,
};

#[test]
fn layer_selector_requires_exactly_one_part() {
	assert_eq!(LayerSelector::from_parts(Some(3), None).expect("id selector"), LayerSelector::Id(3));
	assert_eq!(
		LayerSelector::from_parts(None, Some("Title".to_owned())).expect("name selector"),
		LayerSelector::Name("Title".to_owned())
	);
	assert!(matches!(LayerSelector::from_parts(None, None), Err(BridgeError::InvalidLayerSelector)));
	assert!(matches!(
		LayerSelector::from_parts(Some(1), Some("Title".to_owned())),
		Err(BridgeError::InvalidLayerSelector)
	));
	assert!(matches!(LayerSelector::from_parts(None, Some(String::new())), Err(BridgeError::InvalidLayerSelector)));
}

#[test]
fn comp_selector_optional_allows_absence() {
	assert!(CompSelector::optional(None, None).is_none());
	assert!(matches!(CompSelector::optional(Some(1), Some("Main".to_owned())), Some(Err(BridgeError::InvalidCompSelector))));
	assert!(matches!(CompSelector::from_parts(None, None), Err(BridgeError::InvalidCompSelector)));
	assert_eq!(serde_json::to_value(CompSelector::Name("Main".to_owned())).expect("serialize"), json!({"compName": "Main"}));
}

#[test]
fn keyframe_body_flattens_selector_and_skips_unset_fields() {
	let body = SetKeyframe {
		layer: LayerSelector::Name("Title".to_owned()),
		property_path: "ADBE Transform Group.ADBE Opacity".to_owned(),
		time: 0.5,
		value: json!(40),
		in_interp: Some(Interpolation::Hold),
		out_interp: None,
		ease_in: None,
		ease_out: Some(json!([0, 66])),
	};

	assert_eq!(
		serde_json::to_value(&body).expect("serialize"),
		json!({
			"layerName": "Title",
			"propertyPath": "ADBE Transform Group.ADBE Opacity",
			"time": 0.5,
			"value": 40,
			"inInterp": "hold",
			"easeOut": [0, 66],
		})
	);
}

#[test]
fn add_layer_body_only_carries_set_options() {
	let mut body = AddLayer::new(NewLayerType::Solid);
	body.name = Some("BG".to_owned());
	body.color = Some(vec![1.0, 0.0, 0.0]);

	assert_eq!(
		serde_json::to_value(&body).expect("serialize"),
		json!({"layerType": "solid", "name": "BG", "color": [1.0, 0.0, 0.0]})
	);
}

#[test]
fn repeater_body_merges_settings_into_top_level() {
	let body = AddShapeRepeater {
		layer: LayerSelector::Id(2),
		group_index: 1,
		settings: RepeaterSettings {
			copies: Some(12.0),
			..RepeaterSettings::default()
		},
	};

	assert_eq!(
		serde_json::to_value(&body).expect("serialize"),
		json!({"layerId": 2, "groupIndex": 1, "copies": 12.0})
	);
}

#[test]
fn parent_and_order_bodies_match_wire_names() {
	let clear = ParentLayer {
		child_layer_id: 2,
		parent_layer_id: None,
	};
	assert_eq!(
		serde_json::to_value(&clear).expect("serialize"),
		json!({"childLayerId": 2, "parentLayerId": null})
	);

	let order = MoveLayerOrder {
		layer_id: 4,
		placement: LayerPlacement::After(1),
	};
	assert_eq!(serde_json::to_value(&order).expect("serialize"), json!({"layerId": 4, "afterLayerId": 1}));

	let top = MoveLayerOrder {
		layer_id: 4,
		placement: LayerPlacement::ToTop(true),
	};
	assert_eq!(serde_json::to_value(&top).expect("serialize"), json!({"layerId": 4, "toTop": true}));
}

#[test]
fn apply_mode_parses_case_insensitively() {
	assert_eq!(ApplyMode::parse("").expect("empty"), ApplyMode::Merge);
	assert_eq!(ApplyMode::parse("Replace-Managed").expect("mixed case"), ApplyMode::ReplaceManaged);
	assert_eq!(ApplyMode::parse("CLEAR-ALL").expect("upper"), ApplyMode::ClearAll);

	let err = ApplyMode::parse("wipe").expect_err("unknown mode");
	assert_eq!(
		err.to_string(),
		"Invalid scene apply mode 'wipe'. Use one of: merge, replace-managed, clear-all."
	);
}

#[test]
fn apply_scene_body_carries_mode_name() {
	let scene = json!({"layers": []});
	let body = ApplyScene {
		scene: &scene,
		validate_only: true,
		mode: ApplyMode::ReplaceManaged,
	};

	assert_eq!(
		serde_json::to_value(&body).expect("serialize"),
		json!({"scene": {"layers": []}, "validateOnly": true, "mode": "replace-managed"})
	);
}
