//! Scene document types.
//!
//! Field order here is the field order of the emitted JSON, so two exports of the same
//! composition serialize byte-identically.

use serde::Serialize;
use serde_json::{Number, Value};

use crate::bridge::{Interpolation, ShapeRepeater};
use crate::scene::PropValue;

/// Portable description of one composition and its supported layers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneDocument {
	/// Composition metadata.
	pub composition: SceneComposition,
	/// Supported layers in host order.
	pub layers: Vec<SceneLayer>,
}

/// Composition block; missing host metadata is emitted as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneComposition {
	/// Host project item id.
	pub comp_id: Option<i64>,
	/// Composition name.
	pub name: Option<String>,
	/// Width in pixels.
	pub width: Option<Number>,
	/// Height in pixels.
	pub height: Option<Number>,
	/// Duration in seconds.
	pub duration: Option<Number>,
	/// Frames per second.
	pub frame_rate: Option<Number>,
	/// Pixel aspect ratio.
	pub pixel_aspect: Option<Number>,
	/// Re-activate this composition when the scene is applied.
	pub set_active: bool,
}

/// Layer kinds a scene can describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SceneLayerType {
	/// Text layer.
	Text,
	/// Null object.
	Null,
	/// Solid (or footage treated as a solid).
	Solid,
	/// Shape layer.
	Shape,
}

impl SceneLayerType {
	/// Wire name.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Text => "text",
			Self::Null => "null",
			Self::Solid => "solid",
			Self::Shape => "shape",
		}
	}
}

/// One exported layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneLayer {
	/// Slug id, unique within the document.
	pub id: String,
	/// Layer kind.
	#[serde(rename = "type")]
	pub layer_type: SceneLayerType,
	/// Host display name.
	pub name: Option<String>,
	/// Numeric timing fields that were present.
	#[serde(skip_serializing_if = "Timing::is_empty")]
	pub timing: Timing,
	/// Transform values that were present.
	#[serde(skip_serializing_if = "Transform::is_empty")]
	pub transform: Transform,
	/// Literal source text for text layers.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub text: Option<String>,
	/// Expressions by property path.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub expressions: Vec<SceneExpression>,
	/// Keyframed properties.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub animations: Vec<SceneAnimation>,
	/// Effects in stack order.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub effects: Vec<SceneEffect>,
	/// Essential-graphics controllers bound to this layer.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub essential_properties: Vec<EssentialBinding>,
	/// Static typed values outside the transform set.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub property_values: Vec<ScenePropertyValue>,
	/// Shape repeater operators.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub repeaters: Vec<ShapeRepeater>,
	/// Solid width in pixels.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub width: Option<Number>,
	/// Solid height in pixels.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub height: Option<Number>,
	/// Solid duration in seconds.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub duration: Option<Number>,
	/// Solid RGB.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub color: Option<[Value; 3]>,
	/// Scene id of the parent layer.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub parent_id: Option<String>,
}

impl SceneLayer {
	/// Layer with identity only; every optional block empty.
	pub fn new(id: String, layer_type: SceneLayerType, name: Option<String>) -> Self {
		Self {
			id,
			layer_type,
			name,
			timing: Timing::default(),
			transform: Transform::default(),
			text: None,
			expressions: Vec::new(),
			animations: Vec::new(),
			effects: Vec::new(),
			essential_properties: Vec::new(),
			property_values: Vec::new(),
			repeaters: Vec::new(),
			width: None,
			height: None,
			duration: None,
			color: None,
			parent_id: None,
		}
	}
}

/// Layer timing in seconds.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Timing {
	/// In point.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub in_point: Option<Number>,
	/// Out point.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub out_point: Option<Number>,
	/// Start time.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub start_time: Option<Number>,
}

impl Timing {
	/// True when no field is set.
	pub fn is_empty(&self) -> bool {
		self.in_point.is_none() && self.out_point.is_none() && self.start_time.is_none()
	}
}

/// Canonical transform subset.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transform {
	/// Anchor point.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub anchor_point: Option<PropValue>,
	/// Position.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub position: Option<PropValue>,
	/// Scale in percent.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub scale: Option<PropValue>,
	/// Z rotation in degrees.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub rotation: Option<PropValue>,
	/// Opacity 0-100.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub opacity: Option<PropValue>,
}

impl Transform {
	/// True when no field is set.
	pub fn is_empty(&self) -> bool {
		self.anchor_point.is_none() && self.position.is_none() && self.scale.is_none() && self.rotation.is_none() && self.opacity.is_none()
	}
}

/// Expression attached to one property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneExpression {
	/// Property path.
	pub property_path: String,
	/// Expression source.
	pub expression: String,
}

/// Keyframes of one property.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneAnimation {
	/// Property path.
	pub property_path: String,
	/// Non-empty keyframe list in host order.
	pub keyframes: Vec<SceneKeyframe>,
}

/// One exported keyframe.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneKeyframe {
	/// Key time in seconds.
	pub time: Number,
	/// Primitive or array-of-primitive value.
	pub value: Value,
	/// Incoming interpolation.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub in_interp: Option<Interpolation>,
	/// Outgoing interpolation.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub out_interp: Option<Interpolation>,
	/// Incoming temporal ease, passed through.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub ease_in: Option<Value>,
	/// Outgoing temporal ease, passed through.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub ease_out: Option<Value>,
}

/// One effect instance.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneEffect {
	/// Effect match name.
	pub match_name: String,
	/// Display name.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	/// Parameters that survived filtering.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub params: Vec<SceneEffectParam>,
}

/// One effect parameter value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneEffectParam {
	/// 1-based property index inside the effect.
	pub property_index: u64,
	/// Primitive or array-of-primitive value.
	pub value: Value,
}

/// Property exposed as an essential-graphics controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EssentialBinding {
	/// Property path on this layer.
	pub property_path: String,
	/// Controller name.
	pub essential_name: String,
}

/// Static typed value of an arbitrary property.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenePropertyValue {
	/// Property path.
	pub property_path: String,
	/// Host-typed value.
	pub value: Value,
}
