//! Decoding of the host's stringly-typed property values.
//!
//! The host renders vector properties as comma-joined text (`"960, 540"`) and scalars as
//! their display form. [`parse_property_value`] is the only place that looks inside those
//! strings; everything downstream works on [`PropValue`].

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use serde_json::{Number, Value};

static NUMBER: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?$").ok());

/// Decoded property value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PropValue {
	/// `true` / `false`, any case.
	Bool(bool),
	/// Number without a fractional part.
	Int(i64),
	/// Any other number.
	Float(f64),
	/// Text that is neither boolean nor numeric.
	Text(String),
	/// Comma-separated components.
	List(Vec<PropValue>),
	/// Non-string host value, passed through untouched.
	Json(Value),
}

impl From<PropValue> for Value {
	fn from(value: PropValue) -> Self {
		match value {
			PropValue::Bool(flag) => Value::Bool(flag),
			PropValue::Int(int) => Value::Number(int.into()),
			PropValue::Float(float) => Number::from_f64(float).map_or(Value::Null, Value::Number),
			PropValue::Text(text) => Value::String(text),
			PropValue::List(items) => Value::Array(items.into_iter().map(Value::from).collect()),
			PropValue::Json(value) => value,
		}
	}
}

/// Decode one scalar segment.
pub fn parse_scalar(text: &str) -> PropValue {
	if text.eq_ignore_ascii_case("true") {
		return PropValue::Bool(true);
	}
	if text.eq_ignore_ascii_case("false") {
		return PropValue::Bool(false);
	}

	let numeric = NUMBER.as_ref().is_some_and(|pattern| pattern.is_match(text));
	match text.parse::<f64>() {
		Ok(number) if numeric => integral(number).map_or(PropValue::Float(number), PropValue::Int),
		_ => PropValue::Text(text.to_owned()),
	}
}

/// Decode a raw property value; `None` means "no value" (null or blank text).
pub fn parse_property_value(raw: &Value) -> Option<PropValue> {
	let text = match raw {
		Value::Null => return None,
		Value::String(text) => text.trim(),
		other => return Some(PropValue::Json(other.clone())),
	};

	if text.is_empty() {
		return None;
	}
	if !text.contains(',') {
		return Some(parse_scalar(text));
	}
	Some(PropValue::List(text.split(',').map(|part| parse_scalar(part.trim())).collect()))
}

/// Keyframe values must be a non-null primitive or an array of primitives.
pub fn is_supported_keyframe_value(value: &Value) -> bool {
	!value.is_null() && is_primitive_or_flat_array(value)
}

/// Effect parameter values must be portable.
pub fn is_supported_effect_value(value: &Value) -> bool {
	is_portable_value(value)
}

/// A primitive or an array of primitives; the value shapes a scene document can carry.
pub fn is_portable_value(value: &Value) -> bool {
	is_primitive_or_flat_array(value)
}

fn is_primitive(value: &Value) -> bool {
	matches!(value, Value::Bool(_) | Value::Number(_) | Value::String(_))
}

fn is_primitive_or_flat_array(value: &Value) -> bool {
	match value {
		Value::Array(items) => items.iter().all(is_primitive),
		other => is_primitive(other),
	}
}

fn integral(number: f64) -> Option<i64> {
	const LIMIT: f64 = 9_223_372_036_854_775_808.0;
	(number.fract() == 0.0 && (-LIMIT..LIMIT).contains(&number)).then_some(number as i64)
}
