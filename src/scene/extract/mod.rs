//! Transform and source-text extraction from a layer's property listing.

use std::collections::HashMap;

use serde_json::Value;

use crate::bridge::NativeProperty;
use crate::scene::{PropValue, Transform, parse_property_value};

/// Anchor point path.
pub const ANCHOR_POINT_PATH: &str = "ADBE Transform Group.ADBE Anchor Point";
/// Position path.
pub const POSITION_PATH: &str = "ADBE Transform Group.ADBE Position";
/// Scale path.
pub const SCALE_PATH: &str = "ADBE Transform Group.ADBE Scale";
/// Z rotation path.
pub const ROTATION_PATH: &str = "ADBE Transform Group.ADBE Rotate Z";
/// Opacity path.
pub const OPACITY_PATH: &str = "ADBE Transform Group.ADBE Opacity";
/// Text document path on text layers.
pub const TEXT_DOCUMENT_PATH: &str = "ADBE Text Properties.ADBE Text Document";

/// Paths that make up the scene transform block.
pub const TRANSFORM_PATHS: [&str; 5] = [ANCHOR_POINT_PATH, POSITION_PATH, SCALE_PATH, ROTATION_PATH, OPACITY_PATH];

const PLACEHOLDER_PREFIXES: [&str; 2] = ["[object", "TextDocument"];

/// Source text lookup outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceText {
	/// The listing had no text document entry.
	Absent,
	/// An entry exists but the host did not serialize readable text.
	Unrecoverable,
	/// Trimmed literal text.
	Text(String),
}

/// Build the transform block from the five fixed paths.
///
/// Later entries for the same path win; missing or blank values are left out.
pub fn extract_transform(props: &[NativeProperty]) -> Transform {
	let mut by_path: HashMap<&str, &Value> = HashMap::new();
	for prop in props {
		if let (Some(path), Some(value)) = (prop.path.as_deref(), prop.value.as_ref()) {
			by_path.insert(path, value);
		} else if let Some(path) = prop.path.as_deref() {
			by_path.remove(path);
		}
	}
	let decode = |path: &str| -> Option<PropValue> { by_path.get(path).and_then(|value| parse_property_value(value)) };

	Transform {
		anchor_point: decode(ANCHOR_POINT_PATH),
		position: decode(POSITION_PATH),
		scale: decode(SCALE_PATH),
		rotation: decode(ROTATION_PATH),
		opacity: decode(OPACITY_PATH),
	}
}

/// Host text standing in for a value it could not render (`[object Shape]`, `TextDocument...`).
pub fn is_placeholder(text: &str) -> bool {
	PLACEHOLDER_PREFIXES.iter().any(|prefix| text.starts_with(prefix))
}

/// Read the source text of a text layer from its first text document entry.
pub fn extract_text(props: &[NativeProperty]) -> SourceText {
	let Some(prop) = props.iter().find(|prop| prop.path.as_deref() == Some(TEXT_DOCUMENT_PATH)) else {
		return SourceText::Absent;
	};

	let raw = match &prop.value {
		Some(Value::String(text)) => text.trim().to_owned(),
		Some(Value::Number(number)) => number.to_string(),
		Some(Value::Bool(flag)) => flag.to_string(),
		_ => return SourceText::Unrecoverable,
	};

	if raw.is_empty() || is_placeholder(&raw) {
		return SourceText::Unrecoverable;
	}
	SourceText::Text(raw)
}

#[cfg(test)]
mod tests;
