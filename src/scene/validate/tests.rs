use serde_json::json;

use crate::scene::{composition_order, validate_scene};

#[test]
fn exported_shape_scene_is_valid() {
	let scene = json!({
		"composition": {"compId": 10, "name": "Main", "width": 1920, "height": 1080, "duration": 8.0, "frameRate": 30.0, "pixelAspect": 1.0, "setActive": true},
		"layers": [
			{"id": "title", "type": "text", "name": "Title", "text": "Hello", "timing": {"inPoint": 0.0}, "transform": {"position": [960, 540]}},
			{
				"id": "bg", "type": "solid", "name": "BG", "parentId": "title",
				"effects": [{"matchName": "ADBE Slider Control", "params": [{"propertyIndex": 1, "value": 55}]}],
				"propertyValues": [{"propertyPath": "ADBE Material Options Group.ADBE Casts Shadows", "value": true}],
				"essentialProperties": [{"propertyPath": "ADBE Transform Group.ADBE Opacity", "essentialName": "Opacity"}]
			},
			{
				"id": "burst", "type": "shape", "name": "Burst", "parentId": null,
				"repeaters": [{"groupIndex": 1, "copies": 12}],
				"expressions": [{"propertyPath": "ADBE Transform Group.ADBE Opacity", "expression": "wiggle(2,20)"}],
				"animations": [{"propertyPath": "ADBE Transform Group.ADBE Position", "keyframes": [{"time": 0, "value": [1, 2], "inInterp": "hold"}]}]
			}
		]
	});

	assert_eq!(validate_scene(&scene), Vec::<String>::new());
}

#[test]
fn non_object_scene_is_rejected() {
	assert_eq!(validate_scene(&json!([1, 2])), vec!["scene must be an object.".to_owned()]);
}

#[test]
fn composition_fields_must_be_positive() {
	let errors = validate_scene(&json!({"composition": {"width": 0, "frameRate": "30", "setActive": "yes"}}));
	assert_eq!(
		errors,
		vec![
			"composition.width must be a positive number when specified.".to_owned(),
			"composition.frameRate must be a positive number when specified.".to_owned(),
			"composition.setActive must be a boolean when specified.".to_owned(),
		]
	);
}

#[test]
fn layer_identity_and_type_rules() {
	let errors = validate_scene(&json!({
		"layers": [
			{"id": "a", "type": "text"},
			{"id": "a", "type": "Camera"},
			{"type": "comp"},
			{"type": "solid", "refCompName": "Other"},
			{"id": "", "type": 3}
		]
	}));

	assert_eq!(
		errors,
		vec![
			"layers[1].id is duplicated: a".to_owned(),
			"layers[1].type must be one of: text, null, solid, shape, comp.".to_owned(),
			"layers[2] requires refCompId or refCompName when type is comp.".to_owned(),
			"layers[3].refCompId/refCompName are only allowed when type is comp.".to_owned(),
			"layers[4].id must be a non-empty string when specified.".to_owned(),
			"layers[4].type is required and must be a string.".to_owned(),
		]
	);
}

#[test]
fn effect_params_need_exactly_one_selector() {
	let errors = validate_scene(&json!({
		"layers": [{
			"type": "solid",
			"effects": [{
				"matchName": "ADBE Fill",
				"params": [
					{"propertyIndex": 0, "value": 1},
					{"matchName": "ADBE Fill-0002", "propertyPath": "x", "value": 1},
					{"propertyIndex": "3"}
				]
			}]
		}]
	}));

	assert_eq!(
		errors,
		vec![
			"layers[0].effects[0].params[0].propertyIndex must be a positive integer.".to_owned(),
			"layers[0].effects[0].params[1] must specify exactly one of propertyPath, matchName, propertyIndex.".to_owned(),
			"layers[0].effects[0].params[2].value is required.".to_owned(),
		]
	);
}

#[test]
fn keyframe_rules() {
	let errors = validate_scene(&json!({
		"layers": [{
			"type": "null",
			"animations": [
				{"propertyPath": "p", "keyframes": []},
				{"propertyPath": "p", "keyframes": [{"value": 1}, {"time": 1, "inInterp": "ease"}, 4]}
			]
		}]
	}));

	assert_eq!(
		errors,
		vec![
			"layers[0].animations[0].keyframes must be a non-empty array.".to_owned(),
			"layers[0].animations[1].keyframes[0].time must be a finite number.".to_owned(),
			"layers[0].animations[1].keyframes[1].value is required.".to_owned(),
			"layers[0].animations[1].keyframes[1].inInterp must be linear, bezier, or hold.".to_owned(),
			"layers[0].animations[1].keyframes[2] must be an object.".to_owned(),
		]
	);
}

#[test]
fn facet_containers_must_be_arrays_of_objects() {
	let errors = validate_scene(&json!({
		"layers": [{
			"type": "shape",
			"timing": {"inPoint": "zero"},
			"transform": [],
			"parentId": 3,
			"repeaters": [{"groupIndex": -1}],
			"expressions": {"propertyPath": "p"},
			"propertyValues": ["x"]
		}]
	}));

	assert_eq!(
		errors,
		vec![
			"layers[0].timing.inPoint must be a finite number.".to_owned(),
			"layers[0].transform must be an object when specified.".to_owned(),
			"layers[0].parentId must be a string or null when specified.".to_owned(),
			"layers[0].propertyValues[0] must be an object.".to_owned(),
			"layers[0].repeaters[0].groupIndex must be a positive number when specified.".to_owned(),
			"layers[0].expressions must be an array when specified.".to_owned(),
		]
	);
}

#[test]
fn bundle_entries_are_prefixed() {
	let errors = validate_scene(&json!({
		"compositions": [
			{"composition": {"name": "A"}, "layers": []},
			{"composition": {"name": "B"}, "layers": [{"type": "video"}]}
		]
	}));
	assert_eq!(
		errors,
		vec!["compositions[1].layers[0].type must be one of: text, null, solid, shape, comp.".to_owned()]
	);

	assert_eq!(
		validate_scene(&json!({"compositions": []})),
		vec!["compositions must be a non-empty array when specified.".to_owned()]
	);
}

#[test]
fn bundle_orders_referenced_comps_first() {
	let scenes = vec![
		json!({"composition": {"name": "Main"}, "layers": [{"type": "comp", "refCompName": "Lower Third"}]}),
		json!({"composition": {"name": "Lower Third"}, "layers": [{"type": "text"}]}),
		json!({"layers": []}),
	];
	assert_eq!(composition_order(&scenes), Ok(vec![1, 2, 0]));
}

#[test]
fn bundle_rejects_duplicates_self_references_and_cycles() {
	let duplicate = vec![json!({"composition": {"name": "A"}}), json!({"composition": {"compName": "A"}})];
	assert_eq!(
		composition_order(&duplicate),
		Err("Duplicate composition identifier in compositions[]: 'A'.".to_owned())
	);

	let own = vec![json!({"composition": {"name": "A"}, "layers": [{"type": "comp", "refCompName": "A"}]})];
	assert_eq!(
		composition_order(&own),
		Err("Self reference detected: A references itself via refCompName 'A'.".to_owned())
	);

	let cycle = json!({"compositions": [
		{"composition": {"name": "A"}, "layers": [{"type": "comp", "refCompName": "B"}]},
		{"composition": {"name": "B"}, "layers": [{"type": "comp", "refCompName": "A"}]}
	]});
	assert_eq!(
		validate_scene(&cycle),
		vec!["Cycle detected in composition dependencies. Check comp layers with refCompName.".to_owned()]
	);
}
