//! Per-layer facet collectors.
//!
//! Each collector turns one bridge listing into a scene facet. Items that cannot be carried
//! by a scene are dropped with a warning; an empty result means the facet is omitted.

use std::fmt;

use serde_json::Value;

use crate::bridge::{EssentialControllers, Interpolation, NativeAnimation, NativeEffect, NativeExpression, NativeProperty, Result, ShapeRepeater};
use crate::scene::{
	EssentialBinding, PropValue, SceneAnimation, SceneEffect, SceneEffectParam, SceneExpression, SceneKeyframe, SceneLayer, ScenePropertyValue, TEXT_DOCUMENT_PATH,
	TRANSFORM_PATHS, Warnings, is_placeholder, is_portable_value, is_supported_effect_value, is_supported_keyframe_value, parse_property_value,
};

const EFFECT_PARADE: &str = "ADBE Effect Parade";

/// Layer data fetched in its own bridge round trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facet {
	/// Scoped property listing.
	Properties,
	/// Expressions.
	Expressions,
	/// Keyframes.
	Animations,
	/// Effects.
	Effects,
	/// Shape repeaters.
	Repeaters,
	/// Essential-graphics controllers.
	EssentialProperties,
}

impl fmt::Display for Facet {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::Properties => "properties",
			Self::Expressions => "expressions",
			Self::Animations => "animations",
			Self::Effects => "effects",
			Self::Repeaters => "repeaters",
			Self::EssentialProperties => "essential properties",
		})
	}
}

/// Downgrade a failed facet read to a warning.
pub fn fetch<T>(result: Result<T>, facet: Facet, layer: &str, warnings: &mut Warnings) -> Option<T> {
	match result {
		Ok(value) => Some(value),
		Err(err) => {
			warnings.push(format!("Failed to export {facet} for layer '{layer}': {err}"));
			None
		}
	}
}

/// Keep expressions with a property path and string source.
pub fn collect_expressions(raw: Vec<NativeExpression>) -> Vec<SceneExpression> {
	raw.into_iter()
		.filter_map(|item| match (item.property_path, item.expression) {
			(Some(property_path), Some(Value::String(expression))) if !property_path.is_empty() => Some(SceneExpression { property_path, expression }),
			_ => None,
		})
		.collect()
}

/// Keep keyframes whose value a scene can carry; drop animations left without keys.
pub fn collect_animations(raw: Vec<NativeAnimation>, layer: &str, warnings: &mut Warnings) -> Vec<SceneAnimation> {
	let mut out = Vec::new();
	for animation in raw {
		let (Some(property_path), Some(keyframes)) = (animation.property_path, animation.keyframes) else {
			continue;
		};
		if property_path.is_empty() {
			continue;
		}

		let mut kept = Vec::with_capacity(keyframes.len());
		for keyframe in keyframes {
			let (Some(Value::Number(time)), Some(value)) = (keyframe.time, keyframe.value) else {
				continue;
			};
			if !is_supported_keyframe_value(&value) {
				warnings.push(format!("Skipped unsupported keyframe value on layer '{layer}' path '{property_path}'."));
				continue;
			}
			kept.push(SceneKeyframe {
				time,
				value,
				in_interp: keyframe.in_interp.as_deref().and_then(Interpolation::from_tag),
				out_interp: keyframe.out_interp.as_deref().and_then(Interpolation::from_tag),
				ease_in: keyframe.ease_in,
				ease_out: keyframe.ease_out,
			});
		}

		if !kept.is_empty() {
			out.push(SceneAnimation {
				property_path,
				keyframes: kept,
			});
		}
	}
	out
}

/// Keep every effect with a match name, and the parameters a scene can carry.
pub fn collect_effects(raw: Vec<NativeEffect>, layer: &str, warnings: &mut Warnings) -> Vec<SceneEffect> {
	let mut out = Vec::new();
	for effect in raw {
		let Some(match_name) = effect.match_name.filter(|name| !name.is_empty()) else {
			continue;
		};
		let name = effect.name.filter(|name| !name.is_empty());
		let label = name.as_deref().unwrap_or(&match_name);

		let mut params = Vec::new();
		for param in effect.params {
			let Some(property_index) = param.property_index.as_ref().and_then(Value::as_u64).filter(|index| *index > 0) else {
				let shown = param.property_index.map_or_else(|| "missing".to_owned(), |index| index.to_string());
				warnings.push(format!(
					"Skipped effect parameter with invalid property index on layer '{layer}' effect '{label}' param index {shown}."
				));
				continue;
			};
			match param.value {
				Some(value) if is_supported_effect_value(&value) => params.push(SceneEffectParam { property_index, value }),
				_ => warnings.push(format!(
					"Skipped unsupported effect value on layer '{layer}' effect '{label}' param index {property_index}."
				)),
			}
		}

		out.push(SceneEffect { match_name, name, params });
	}
	out
}

/// Repeaters carry over as declared.
pub fn collect_repeaters(raw: Vec<ShapeRepeater>) -> Vec<ShapeRepeater> {
	raw.into_iter().filter(|repeater| *repeater != ShapeRepeater::default()).collect()
}

/// Static values outside the transform set, text document, and effects.
///
/// Values are decoded from the host's display text; a host-typed value wins when present.
pub fn collect_property_values(props: &[NativeProperty], layer: &str, warnings: &mut Warnings) -> Vec<ScenePropertyValue> {
	let mut out = Vec::new();
	for prop in props {
		let Some(path) = prop.path.as_deref().filter(|path| !path.is_empty()) else {
			continue;
		};
		if TRANSFORM_PATHS.contains(&path) || path == TEXT_DOCUMENT_PATH || path.starts_with(EFFECT_PARADE) {
			continue;
		}

		let value = match (&prop.typed_value, prop.value.as_ref().and_then(parse_property_value)) {
			(Some(typed), _) => typed.clone(),
			// unrendered host value; rejected below
			(None, Some(PropValue::Text(text))) if is_placeholder(&text) => Value::Null,
			(None, Some(decoded)) => Value::from(decoded),
			(None, None) => continue,
		};
		if !is_portable_value(&value) {
			warnings.push(format!("Skipped unsupported property value on layer '{layer}' path '{path}'."));
			continue;
		}
		out.push(ScenePropertyValue {
			property_path: path.to_owned(),
			value,
		});
	}
	out
}

/// Paths flagged `hasExpression` that no collected expression covers.
pub fn unresolved_expression_paths<'a>(props: &'a [NativeProperty], expressions: &[SceneExpression]) -> Vec<&'a str> {
	props
		.iter()
		.filter(|prop| prop.has_expression == Some(true))
		.filter_map(|prop| prop.path.as_deref())
		.filter(|path| !path.is_empty() && !expressions.iter().any(|item| item.property_path == *path))
		.collect()
}

/// Matches composition-level essential controllers to layer properties.
///
/// Every exported layer's properties are observed in order. A controller binds only when
/// exactly one property across the whole export carries its display name; an ambiguous
/// name is skipped with a warning.
#[derive(Debug, Default)]
pub struct EssentialBinder {
	controllers: Vec<String>,
	candidates: Vec<Vec<(usize, String)>>,
	layers: usize,
}

impl EssentialBinder {
	/// Start with every named controller unmatched.
	pub fn new(controllers: EssentialControllers) -> Self {
		let controllers: Vec<String> = controllers
			.controllers
			.into_iter()
			.filter_map(|controller| controller.name)
			.filter(|name| !name.is_empty())
			.collect();
		let candidates = vec![Vec::new(); controllers.len()];
		Self {
			controllers,
			candidates,
			layers: 0,
		}
	}

	/// Number of named controllers.
	pub fn len(&self) -> usize {
		self.controllers.len()
	}

	/// True when the composition exposes no named controller.
	pub fn is_empty(&self) -> bool {
		self.controllers.is_empty()
	}

	/// Record candidates from the next exported layer.
	pub fn observe(&mut self, props: &[NativeProperty]) {
		let layer = self.layers;
		self.layers += 1;
		for (name, found) in self.controllers.iter().zip(&mut self.candidates) {
			found.extend(
				props
					.iter()
					.filter(|prop| prop.name.as_deref() == Some(name.as_str()))
					.filter_map(|prop| prop.path.as_deref())
					.filter(|path| !path.is_empty())
					.map(|path| (layer, path.to_owned())),
			);
		}
	}

	/// Attach unambiguous bindings to `layers`, indexed in observation order.
	pub fn resolve(self, layers: &mut [SceneLayer], warnings: &mut Warnings) {
		for (name, found) in self.controllers.into_iter().zip(self.candidates) {
			match found.as_slice() {
				[] => {}
				[(layer, path)] => {
					if let Some(target) = layers.get_mut(*layer) {
						target.essential_properties.push(EssentialBinding {
							property_path: path.clone(),
							essential_name: name,
						});
					}
				}
				many => warnings.push(format!("Essential controller '{name}' matches {} properties; binding skipped.", many.len())),
			}
		}
	}
}
