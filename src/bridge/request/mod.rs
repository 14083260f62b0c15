//! JSON bodies for the bridge mutation endpoints.

use serde::Serialize;
use serde_json::Value;

use crate::bridge::{BridgeError, Result};

/// Exactly one way of naming a layer in the active composition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum LayerSelector {
	/// Select by layer index.
	#[serde(rename = "layerId")]
	Id(i64),
	/// Select by layer name.
	#[serde(rename = "layerName")]
	Name(String),
}

impl LayerSelector {
	/// Build a selector from mutually exclusive optional arguments.
	pub fn from_parts(layer_id: Option<i64>, layer_name: Option<String>) -> Result<Self> {
		match (layer_id, layer_name.filter(|name| !name.is_empty())) {
			(Some(id), None) => Ok(Self::Id(id)),
			(None, Some(name)) => Ok(Self::Name(name)),
			_ => Err(BridgeError::InvalidLayerSelector),
		}
	}

	/// Return `(key, value)` for query-string use.
	pub fn query_pair(&self) -> (&'static str, String) {
		match self {
			Self::Id(id) => ("layerId", id.to_string()),
			Self::Name(name) => ("layerName", name.clone()),
		}
	}
}

/// Exactly one way of naming a composition in the project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum CompSelector {
	/// Select by project item id.
	#[serde(rename = "compId")]
	Id(i64),
	/// Select by composition name.
	#[serde(rename = "compName")]
	Name(String),
}

impl CompSelector {
	/// Build a selector from mutually exclusive optional arguments.
	pub fn from_parts(comp_id: Option<i64>, comp_name: Option<String>) -> Result<Self> {
		match Self::optional(comp_id, comp_name) {
			Some(Ok(selector)) => Ok(selector),
			Some(Err(err)) => Err(err),
			None => Err(BridgeError::InvalidCompSelector),
		}
	}

	/// Like [`CompSelector::from_parts`] but both parts may be absent.
	pub fn optional(comp_id: Option<i64>, comp_name: Option<String>) -> Option<Result<Self>> {
		match (comp_id, comp_name.filter(|name| !name.is_empty())) {
			(Some(id), None) => Some(Ok(Self::Id(id))),
			(None, Some(name)) => Some(Ok(Self::Name(name))),
			(None, None) => None,
			(Some(_), Some(_)) => Some(Err(BridgeError::InvalidCompSelector)),
		}
	}
}

/// Keyframe interpolation tags understood by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, serde::Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Interpolation {
	/// Linear interpolation.
	Linear,
	/// Bezier interpolation.
	Bezier,
	/// Hold (step) interpolation.
	Hold,
}

impl Interpolation {
	/// Parse a host tag; unknown tags yield `None`.
	pub fn from_tag(tag: &str) -> Option<Self> {
		match tag {
			"linear" => Some(Self::Linear),
			"bezier" => Some(Self::Bezier),
			"hold" => Some(Self::Hold),
			_ => None,
		}
	}
}

/// Body for `POST /comps`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateComp {
	/// Composition name.
	pub name: String,
	/// Width in pixels.
	pub width: u32,
	/// Height in pixels.
	pub height: u32,
	/// Duration in seconds.
	pub duration: f64,
	/// Frames per second.
	pub frame_rate: f64,
	/// Pixel aspect ratio.
	pub pixel_aspect: f64,
}

/// Body for `POST /expression`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetExpression {
	/// Target layer.
	#[serde(flatten)]
	pub layer: LayerSelector,
	/// Target property path.
	pub property_path: String,
	/// Expression source.
	pub expression: String,
}

/// Body for `POST /property-value`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetPropertyValue {
	/// Target layer.
	#[serde(flatten)]
	pub layer: LayerSelector,
	/// Target property path.
	pub property_path: String,
	/// New static value.
	pub value: Value,
}

/// Body for `POST /keyframes`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetKeyframe {
	/// Target layer.
	#[serde(flatten)]
	pub layer: LayerSelector,
	/// Target property path.
	pub property_path: String,
	/// Key time in seconds.
	pub time: f64,
	/// Key value.
	pub value: Value,
	/// Incoming interpolation.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub in_interp: Option<Interpolation>,
	/// Outgoing interpolation.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub out_interp: Option<Interpolation>,
	/// Incoming temporal ease, e.g. `[0, 66]` or `[[0, 66], [0, 66]]`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub ease_in: Option<Value>,
	/// Outgoing temporal ease.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub ease_out: Option<Value>,
}

/// Body for `POST /effects`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddEffect {
	/// Target layer.
	#[serde(flatten)]
	pub layer: LayerSelector,
	/// Effect match name.
	pub effect_match_name: String,
	/// Optional display name.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub effect_name: Option<String>,
}

/// Body for `POST /essential-property`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddEssentialProperty {
	/// Target layer.
	#[serde(flatten)]
	pub layer: LayerSelector,
	/// Property path to expose.
	pub property_path: String,
	/// Controller name in the Essential Graphics panel.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub essential_name: Option<String>,
}

/// Layer kinds `POST /layers` can create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum NewLayerType {
	/// Text layer.
	Text,
	/// Null object.
	Null,
	/// Solid layer.
	Solid,
	/// Shape layer.
	Shape,
}

/// Primitive for new shape layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ShapePrimitive {
	/// Ellipse path.
	Ellipse,
	/// Rectangle path.
	Rect,
}

/// Stroke line cap for new shape layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LineCap {
	/// Flat cap at the endpoint.
	Butt,
	/// Rounded cap.
	Round,
	/// Square cap past the endpoint.
	Projecting,
}

/// Body for `POST /layers`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddLayer {
	/// Kind of layer to create.
	pub layer_type: NewLayerType,
	/// Layer name.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	/// Source text for text layers.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub text: Option<String>,
	/// Solid width.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub width: Option<u32>,
	/// Solid height.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub height: Option<u32>,
	/// Solid color, 0-1 or 0-255.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub color: Option<Vec<f64>>,
	/// Solid duration in seconds.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub duration: Option<f64>,
	/// Shape primitive.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub shape_type: Option<ShapePrimitive>,
	/// Shape size `[w, h]`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub shape_size: Option<Vec<f64>>,
	/// Shape position `[x, y]` inside the group.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub shape_position: Option<Vec<f64>>,
	/// Fill color.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub shape_fill_color: Option<Vec<f64>>,
	/// Fill opacity 0-100.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub shape_fill_opacity: Option<f64>,
	/// Stroke color.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub shape_stroke_color: Option<Vec<f64>>,
	/// Stroke opacity 0-100.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub shape_stroke_opacity: Option<f64>,
	/// Stroke width in pixels.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub shape_stroke_width: Option<f64>,
	/// Stroke line cap.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub shape_stroke_line_cap: Option<LineCap>,
	/// Rectangle roundness in pixels.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub shape_roundness: Option<f64>,
}

impl AddLayer {
	/// Start a request for one layer type with every option unset.
	pub fn new(layer_type: NewLayerType) -> Self {
		Self {
			layer_type,
			name: None,
			text: None,
			width: None,
			height: None,
			color: None,
			duration: None,
			shape_type: None,
			shape_size: None,
			shape_position: None,
			shape_fill_color: None,
			shape_fill_opacity: None,
			shape_stroke_color: None,
			shape_stroke_opacity: None,
			shape_stroke_width: None,
			shape_stroke_line_cap: None,
			shape_roundness: None,
		}
	}
}

/// Body for `POST /shape-repeater`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddShapeRepeater {
	/// Target layer.
	#[serde(flatten)]
	pub layer: LayerSelector,
	/// 1-based shape group index under Contents.
	pub group_index: u32,
	/// Repeater settings; `group_index` inside is ignored.
	#[serde(flatten)]
	pub settings: RepeaterSettings,
}

/// Optional repeater settings for [`AddShapeRepeater`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepeaterSettings {
	/// Repeater name.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	/// Copy count.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub copies: Option<f64>,
	/// Copy offset.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub offset: Option<f64>,
	/// Transform position `[x, y]`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub position: Option<Vec<f64>>,
	/// Transform scale `[x, y]`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub scale: Option<Vec<f64>>,
	/// Transform rotation.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub rotation: Option<f64>,
	/// Start opacity 0-100.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub start_opacity: Option<f64>,
	/// End opacity 0-100.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub end_opacity: Option<f64>,
}

/// Body for `POST /layer-in-out`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetInOutPoint {
	/// Target layer.
	#[serde(flatten)]
	pub layer: LayerSelector,
	/// New in point.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub in_point: Option<f64>,
	/// New out point.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub out_point: Option<f64>,
}

/// Body for `POST /layer-time`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveLayerTime {
	/// Target layer.
	#[serde(flatten)]
	pub layer: LayerSelector,
	/// Shift in seconds.
	pub delta: f64,
}

/// Body for `POST /layer-parent`; a `None` parent clears the link.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentLayer {
	/// Child layer index.
	pub child_layer_id: i64,
	/// Parent layer index.
	pub parent_layer_id: Option<i64>,
}

/// Body for `POST /precompose`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Precompose {
	/// Layers to move into the new composition.
	pub layer_ids: Vec<i64>,
	/// New composition name.
	pub name: String,
	/// Move all attributes into the new composition.
	pub move_all_attributes: bool,
}

/// Where `POST /layer-order` moves a layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LayerPlacement {
	/// Directly above the given layer.
	#[serde(rename = "beforeLayerId")]
	Before(i64),
	/// Directly below the given layer.
	#[serde(rename = "afterLayerId")]
	After(i64),
	/// To the top of the stack.
	#[serde(rename = "toTop")]
	ToTop(bool),
	/// To the bottom of the stack.
	#[serde(rename = "toBottom")]
	ToBottom(bool),
}

/// Body for `POST /layer-order`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveLayerOrder {
	/// Layer to move.
	pub layer_id: i64,
	/// Destination.
	#[serde(flatten)]
	pub placement: LayerPlacement,
}

/// How `POST /scene` reconciles a scene with existing layers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum ApplyMode {
	/// Update layers matched by scene id, create the rest.
	#[default]
	#[serde(rename = "merge")]
	Merge,
	/// Also delete previously applied layers the scene no longer declares.
	#[serde(rename = "replace-managed")]
	ReplaceManaged,
	/// Delete every layer before applying.
	#[serde(rename = "clear-all")]
	ClearAll,
}

impl ApplyMode {
	/// Parse a mode name case-insensitively; empty means [`ApplyMode::Merge`].
	pub fn parse(raw: &str) -> Result<Self> {
		match raw.to_ascii_lowercase().as_str() {
			"" | "merge" => Ok(Self::Merge),
			"replace-managed" => Ok(Self::ReplaceManaged),
			"clear-all" => Ok(Self::ClearAll),
			_ => Err(BridgeError::InvalidApplyMode { mode: raw.to_owned() }),
		}
	}
}

/// Body for `POST /scene`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyScene<'a> {
	/// Scene document to apply.
	pub scene: &'a Value,
	/// Only validate on the host side.
	pub validate_only: bool,
	/// Reconciliation mode.
	pub mode: ApplyMode,
}

#[cfg(test)]
mod tests;
