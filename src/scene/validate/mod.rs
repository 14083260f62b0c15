//! Structural validation of scene documents before they are sent to the host.
//!
//! Messages use the same JSON paths the host reports (`layers[2].effects[0].params[1]...`), so
//! a document rejected here would also be rejected by the apply endpoint.

use std::collections::{HashMap, HashSet, VecDeque};

use serde_json::{Map, Value};

const LAYER_TYPES: [&str; 5] = ["text", "null", "solid", "shape", "comp"];
const INTERPOLATIONS: [&str; 3] = ["linear", "bezier", "hold"];

/// Check a scene, or a `{compositions: [...]}` bundle of scenes; empty means valid.
pub fn validate_scene(scene: &Value) -> Vec<String> {
	let mut errors = Vec::new();
	let Some(root) = scene.as_object() else {
		errors.push("scene must be an object.".to_owned());
		return errors;
	};

	let Some(bundle) = root.get("compositions") else {
		check_scene(root, "", &mut errors);
		return errors;
	};

	let Some(scenes) = bundle.as_array().filter(|scenes| !scenes.is_empty()) else {
		errors.push("compositions must be a non-empty array when specified.".to_owned());
		return errors;
	};
	for (index, item) in scenes.iter().enumerate() {
		let prefix = format!("compositions[{index}].");
		match item.as_object() {
			Some(scene) => check_scene(scene, &prefix, &mut errors),
			None => errors.push(format!("compositions[{index}] must be an object.")),
		}
	}
	if errors.is_empty()
		&& let Err(err) = composition_order(scenes)
	{
		errors.push(err);
	}
	errors
}

/// Order bundled scenes so every comp layer's `refCompName` target is applied first.
///
/// Scenes are keyed by `composition.name` and `composition.compName`; references to names
/// outside the bundle are ignored. Fails on duplicate keys, self references, and cycles.
pub fn composition_order(scenes: &[Value]) -> Result<Vec<usize>, String> {
	let mut by_key: HashMap<String, usize> = HashMap::new();
	for (index, scene) in scenes.iter().enumerate() {
		for key in composition_keys(scene, index) {
			if by_key.insert(key.clone(), index).is_some() {
				return Err(format!("Duplicate composition identifier in compositions[]: '{key}'."));
			}
		}
	}

	let mut incoming = vec![0_usize; scenes.len()];
	let mut outgoing: Vec<Vec<usize>> = vec![Vec::new(); scenes.len()];
	let mut edges = HashSet::new();
	for (source, scene) in scenes.iter().enumerate() {
		let layers = scene.get("layers").and_then(Value::as_array).map(Vec::as_slice).unwrap_or_default();
		for layer in layers {
			if !layer.get("type").and_then(Value::as_str).is_some_and(|kind| kind.eq_ignore_ascii_case("comp")) {
				continue;
			}
			let Some(dependency) = layer.get("refCompName").and_then(Value::as_str).and_then(|name| by_key.get(name)).copied() else {
				continue;
			};
			if dependency == source {
				let name = layer.get("refCompName").and_then(Value::as_str).unwrap_or_default();
				return Err(format!(
					"Self reference detected: {} references itself via refCompName '{name}'.",
					display_name(scene, source)
				));
			}
			if edges.insert((dependency, source)) {
				outgoing[dependency].push(source);
				incoming[source] += 1;
			}
		}
	}

	let mut queue: VecDeque<usize> = (0..scenes.len()).filter(|index| incoming[*index] == 0).collect();
	let mut order = Vec::with_capacity(scenes.len());
	while let Some(current) = queue.pop_front() {
		order.push(current);
		for &next in &outgoing[current] {
			incoming[next] -= 1;
			if incoming[next] == 0 {
				queue.push_back(next);
			}
		}
	}

	if order.len() != scenes.len() {
		return Err("Cycle detected in composition dependencies. Check comp layers with refCompName.".to_owned());
	}
	Ok(order)
}

fn composition_keys(scene: &Value, index: usize) -> Vec<String> {
	let comp = scene.get("composition");
	let mut keys: Vec<String> = Vec::new();
	for field in ["name", "compName"] {
		if let Some(key) = comp.and_then(|comp| comp.get(field)).and_then(Value::as_str).filter(|key| !key.is_empty())
			&& !keys.iter().any(|existing| existing == key)
		{
			keys.push(key.to_owned());
		}
	}
	if keys.is_empty() {
		keys.push(format!("__scene_index__{index}"));
	}
	keys
}

fn display_name(scene: &Value, index: usize) -> String {
	let comp = scene.get("composition");
	let text = |field: &str| comp.and_then(|comp| comp.get(field)).and_then(Value::as_str).filter(|name| !name.is_empty());
	if let Some(name) = text("name").or_else(|| text("compName")) {
		return name.to_owned();
	}
	match comp.and_then(|comp| comp.get("compId")) {
		Some(id) => format!("compId:{id}"),
		None => format!("scene[{index}]"),
	}
}

fn check_scene(scene: &Map<String, Value>, prefix: &str, errors: &mut Vec<String>) {
	if let Some(comp) = scene.get("composition") {
		match comp.as_object() {
			Some(comp) => check_composition(comp, prefix, errors),
			None => errors.push(format!("{prefix}composition must be an object when specified.")),
		}
	}

	let Some(layers) = scene.get("layers") else {
		return;
	};
	let Some(layers) = layers.as_array() else {
		errors.push(format!("{prefix}layers must be an array when specified."));
		return;
	};

	let mut seen = HashSet::new();
	for (index, layer) in layers.iter().enumerate() {
		let path = format!("{prefix}layers[{index}]");
		match layer.as_object() {
			Some(layer) => check_layer(layer, &path, &mut seen, errors),
			None => errors.push(format!("{path} must be an object.")),
		}
	}
}

fn check_composition(comp: &Map<String, Value>, prefix: &str, errors: &mut Vec<String>) {
	if comp.get("compId").is_some_and(|value| !is_positive(value)) {
		errors.push(format!("{prefix}composition.compId must be a positive number when specified."));
	}
	for field in ["compName", "name"] {
		if comp.get(field).is_some_and(|value| !value.is_string()) {
			errors.push(format!("{prefix}composition.{field} must be a string when specified."));
		}
	}
	for field in ["width", "height", "duration", "frameRate", "pixelAspect"] {
		if comp.get(field).is_some_and(|value| !is_positive(value)) {
			errors.push(format!("{prefix}composition.{field} must be a positive number when specified."));
		}
	}
	for field in ["createIfMissing", "setActive"] {
		if comp.get(field).is_some_and(|value| !value.is_boolean()) {
			errors.push(format!("{prefix}composition.{field} must be a boolean when specified."));
		}
	}
}

fn check_layer(layer: &Map<String, Value>, path: &str, seen: &mut HashSet<String>, errors: &mut Vec<String>) {
	if let Some(id) = layer.get("id") {
		match id.as_str().filter(|id| !id.is_empty()) {
			None => errors.push(format!("{path}.id must be a non-empty string when specified.")),
			Some(id) if !seen.insert(id.to_owned()) => errors.push(format!("{path}.id is duplicated: {id}")),
			Some(_) => {}
		}
	}

	let has_ref = layer.contains_key("refCompId") || layer.contains_key("refCompName");
	match layer.get("type").and_then(Value::as_str) {
		None => errors.push(format!("{path}.type is required and must be a string.")),
		Some(kind) => {
			let kind = kind.to_lowercase();
			if !LAYER_TYPES.contains(&kind.as_str()) {
				errors.push(format!("{path}.type must be one of: text, null, solid, shape, comp."));
			}
			if kind == "comp" && !has_ref {
				errors.push(format!("{path} requires refCompId or refCompName when type is comp."));
			} else if kind != "comp" && has_ref {
				errors.push(format!("{path}.refCompId/refCompName are only allowed when type is comp."));
			}
		}
	}

	if layer.get("name").is_some_and(|value| !value.is_string()) {
		errors.push(format!("{path}.name must be a string when specified."));
	}
	if layer.get("refCompId").is_some_and(|value| !is_positive(value)) {
		errors.push(format!("{path}.refCompId must be a positive number when specified."));
	}
	if layer.get("refCompName").is_some_and(|value| value.as_str().is_none_or(str::is_empty)) {
		errors.push(format!("{path}.refCompName must be a non-empty string when specified."));
	}
	if layer.get("text").is_some_and(|value| !value.is_string()) {
		errors.push(format!("{path}.text must be a string when specified."));
	}

	if let Some(timing) = layer.get("timing") {
		match timing.as_object() {
			Some(timing) => {
				for field in ["inPoint", "outPoint", "startTime"] {
					if let Some(value) = timing.get(field) {
						require_number(Some(value), &format!("{path}.timing.{field}"), errors);
					}
				}
			}
			None => errors.push(format!("{path}.timing must be an object when specified.")),
		}
	}
	if layer.get("transform").is_some_and(|value| !value.is_object()) {
		errors.push(format!("{path}.transform must be an object when specified."));
	}
	if layer.get("parentId").is_some_and(|value| !value.is_null() && !value.is_string()) {
		errors.push(format!("{path}.parentId must be a string or null when specified."));
	}

	each_object(layer, "propertyValues", path, errors, |item, at, errors| {
		require_path(item, at, errors);
		if !item.contains_key("value") {
			errors.push(format!("{at}.value is required."));
		}
	});

	each_object(layer, "effects", path, errors, |effect, at, errors| {
		if effect.get("matchName").and_then(Value::as_str).is_none_or(str::is_empty) {
			errors.push(format!("{at}.matchName is required and must be a string."));
		}
		if effect.get("name").is_some_and(|value| !value.is_string()) {
			errors.push(format!("{at}.name must be a string when specified."));
		}
		each_object(effect, "params", at, errors, check_effect_param);
	});

	each_object(layer, "repeaters", path, errors, |repeater, at, errors| {
		if repeater.get("groupIndex").is_some_and(|value| !is_positive(value)) {
			errors.push(format!("{at}.groupIndex must be a positive number when specified."));
		}
	});

	each_object(layer, "expressions", path, errors, |item, at, errors| {
		require_path(item, at, errors);
		if !item.get("expression").is_some_and(Value::is_string) {
			errors.push(format!("{at}.expression is required and must be a string."));
		}
	});

	each_object(layer, "essentialProperties", path, errors, |item, at, errors| {
		require_path(item, at, errors);
		if item.get("essentialName").is_some_and(|value| !value.is_string()) {
			errors.push(format!("{at}.essentialName must be a string when specified."));
		}
	});

	each_object(layer, "animations", path, errors, check_animation);
}

fn check_effect_param(param: &Map<String, Value>, at: &str, errors: &mut Vec<String>) {
	if !param.contains_key("value") {
		errors.push(format!("{at}.value is required."));
	}
	let non_empty = |field: &str| param.get(field).and_then(Value::as_str).is_some_and(|text| !text.is_empty());
	let index = param.get("propertyIndex");
	let selectors = [non_empty("propertyPath"), non_empty("matchName"), index.is_some()];
	if selectors.iter().filter(|present| **present).count() != 1 {
		errors.push(format!("{at} must specify exactly one of propertyPath, matchName, propertyIndex."));
	}
	if index.is_some_and(|value| leading_int(value).is_none_or(|index| index <= 0)) {
		errors.push(format!("{at}.propertyIndex must be a positive integer."));
	}
}

fn check_animation(animation: &Map<String, Value>, at: &str, errors: &mut Vec<String>) {
	require_path(animation, at, errors);
	let Some(keyframes) = animation.get("keyframes").and_then(Value::as_array).filter(|keys| !keys.is_empty()) else {
		errors.push(format!("{at}.keyframes must be a non-empty array."));
		return;
	};

	for (index, keyframe) in keyframes.iter().enumerate() {
		let key_at = format!("{at}.keyframes[{index}]");
		let Some(keyframe) = keyframe.as_object() else {
			errors.push(format!("{key_at} must be an object."));
			continue;
		};
		if !require_number(keyframe.get("time"), &format!("{key_at}.time"), errors) {
			continue;
		}
		if !keyframe.contains_key("value") {
			errors.push(format!("{key_at}.value is required."));
		}
		for field in ["inInterp", "outInterp"] {
			if keyframe
				.get(field)
				.is_some_and(|value| value.as_str().is_none_or(|tag| !INTERPOLATIONS.contains(&tag)))
			{
				errors.push(format!("{key_at}.{field} must be linear, bezier, or hold."));
			}
		}
	}
}

/// Run `check` on every element of an optional array field, flagging non-objects.
fn each_object<F>(parent: &Map<String, Value>, field: &str, path: &str, errors: &mut Vec<String>, mut check: F)
where
	F: FnMut(&Map<String, Value>, &str, &mut Vec<String>),
{
	let Some(value) = parent.get(field) else {
		return;
	};
	let Some(items) = value.as_array() else {
		errors.push(format!("{path}.{field} must be an array when specified."));
		return;
	};
	for (index, item) in items.iter().enumerate() {
		let at = format!("{path}.{field}[{index}]");
		match item.as_object() {
			Some(item) => check(item, &at, errors),
			None => errors.push(format!("{at} must be an object.")),
		}
	}
}

fn require_path(item: &Map<String, Value>, at: &str, errors: &mut Vec<String>) {
	if item.get("propertyPath").and_then(Value::as_str).is_none_or(str::is_empty) {
		errors.push(format!("{at}.propertyPath is required and must be a string."));
	}
}

fn require_number(value: Option<&Value>, label: &str, errors: &mut Vec<String>) -> bool {
	let ok = value.and_then(Value::as_f64).is_some_and(f64::is_finite);
	if !ok {
		errors.push(format!("{label} must be a finite number."));
	}
	ok
}

fn is_positive(value: &Value) -> bool {
	value.as_f64().is_some_and(|number| number.is_finite() && number > 0.0)
}

/// Integer prefix of a number or numeric string, the way the host reads indices.
fn leading_int(value: &Value) -> Option<i64> {
	match value {
		Value::Number(number) => number.as_i64().or_else(|| number.as_f64().filter(|float| float.is_finite()).map(|float| float.trunc() as i64)),
		Value::String(text) => {
			let text = text.trim_start();
			let digits = text
				.char_indices()
				.take_while(|(index, ch)| ch.is_ascii_digit() || (*index == 0 && (*ch == '-' || *ch == '+')))
				.map(|(index, ch)| index + ch.len_utf8())
				.last()?;
			text[..digits].parse().ok()
		}
		_ => None,
	}
}

#[cfg(test)]
mod tests;
