//! Records returned by the bridge query endpoints.
//!
//! Fields the host fills loosely (timing, solid metrics, keyframe values) stay as raw JSON so a
//! single odd value never fails a whole listing; the scene exporter decides what is usable.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};

/// One composition from `GET /comps`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeComposition {
	/// Project item id.
	pub id: Option<i64>,
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
	/// Whether this is the host's active item.
	pub is_active: Option<bool>,
}

impl NativeComposition {
	/// Return whether the host flags this composition as active.
	pub fn active(&self) -> bool {
		self.is_active == Some(true)
	}
}

/// One layer from `GET /layers`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeLayer {
	/// Layer index, unique within the composition.
	pub id: Option<i64>,
	/// Display name; not unique.
	pub name: Option<String>,
	/// Free-form host type tag (`Text`, `Video`, `Shape`, `Camera`, ...).
	#[serde(rename = "type")]
	pub layer_type: Option<String>,
	/// Null-layer flag; overrides the type tag.
	pub null_layer: Option<bool>,
	/// Index of the parent layer, if parented.
	pub parent_layer_id: Option<i64>,
	/// In point in seconds.
	pub in_point: Option<Value>,
	/// Out point in seconds.
	pub out_point: Option<Value>,
	/// Start time in seconds.
	pub start_time: Option<Value>,
	/// Source width for footage/solid layers.
	pub source_width: Option<Value>,
	/// Source height for footage/solid layers.
	pub source_height: Option<Value>,
	/// Source duration for footage/solid layers.
	pub source_duration: Option<Value>,
	/// Solid RGB as 0-1 floats.
	pub solid_color: Option<Value>,
}

impl NativeLayer {
	/// Name used in warnings.
	pub fn label(&self) -> &str {
		self.name.as_deref().unwrap_or("<unnamed>")
	}
}

/// One entry from `GET /properties`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeProperty {
	/// Display name.
	pub name: Option<String>,
	/// Dot-joined match-name chain.
	pub path: Option<String>,
	/// Raw value, usually a string such as `"960, 540"`.
	pub value: Option<Value>,
	/// Host-typed value when the host could provide one.
	pub typed_value: Option<Value>,
	/// Whether the property carries an expression.
	pub has_expression: Option<bool>,
}

/// Filter for a property tree query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyQuery {
	/// Group match names to include.
	pub include_groups: Vec<String>,
	/// Group match names to exclude.
	pub exclude_groups: Vec<String>,
	/// Maximum traversal depth.
	pub max_depth: Option<u32>,
	/// Also list children of included groups.
	pub include_group_children: bool,
	/// Comp time at which values are evaluated.
	pub time: Option<f64>,
}

/// One entry from `GET /expressions`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeExpression {
	/// Property path the expression lives on.
	pub property_path: Option<String>,
	/// Expression source; anything but a string is unusable.
	pub expression: Option<Value>,
}

/// One animated property from `GET /animations`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeAnimation {
	/// Animated property path.
	pub property_path: Option<String>,
	/// Keyframes in host order.
	pub keyframes: Option<Vec<NativeKeyframe>>,
}

/// One keyframe of a [`NativeAnimation`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeKeyframe {
	/// Key time in seconds.
	pub time: Option<Value>,
	/// Key value; `Some(Value::Null)` when the host sent an explicit null.
	#[serde(default, deserialize_with = "present")]
	pub value: Option<Value>,
	/// Incoming interpolation tag.
	pub in_interp: Option<String>,
	/// Outgoing interpolation tag.
	pub out_interp: Option<String>,
	/// Incoming temporal ease.
	pub ease_in: Option<Value>,
	/// Outgoing temporal ease.
	pub ease_out: Option<Value>,
}

/// One effect from `GET /effects`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeEffect {
	/// Effect match name.
	pub match_name: Option<String>,
	/// Effect display name.
	pub name: Option<String>,
	/// Parameter values.
	#[serde(default)]
	pub params: Vec<NativeEffectParam>,
}

/// One parameter of a [`NativeEffect`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeEffectParam {
	/// 1-based property index inside the effect.
	pub property_index: Option<Value>,
	/// Parameter match name.
	pub match_name: Option<String>,
	/// Full property path.
	pub property_path: Option<String>,
	/// Current value.
	pub value: Option<Value>,
}

/// Repeater operator settings, shared by `GET /repeaters` and scene documents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeRepeater {
	/// 1-based shape group index under Contents.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub group_index: Option<Value>,
	/// Repeater name.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub name: Option<Value>,
	/// Copy count.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub copies: Option<Value>,
	/// Copy offset.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub offset: Option<Value>,
	/// Per-copy position.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub position: Option<Value>,
	/// Per-copy scale.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub scale: Option<Value>,
	/// Per-copy rotation.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub rotation: Option<Value>,
	/// Opacity of the first copy.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub start_opacity: Option<Value>,
	/// Opacity of the last copy.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub end_opacity: Option<Value>,
}

/// Essential-graphics controllers of the active composition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EssentialControllers {
	/// Composition id.
	pub comp_id: Option<i64>,
	/// Composition name.
	pub comp_name: Option<String>,
	/// Number of named controllers.
	pub count: Option<u32>,
	/// Named controllers.
	#[serde(default)]
	pub controllers: Vec<EssentialController>,
}

/// One essential-graphics controller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EssentialController {
	/// 1-based controller index.
	pub index: Option<u32>,
	/// Controller name.
	pub name: Option<String>,
}

/// Keep an explicit JSON null distinguishable from a missing field.
fn present<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Option<Value>, D::Error> {
	Value::deserialize(deserializer).map(Some)
}
