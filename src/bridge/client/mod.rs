use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::bridge::{
	AddEffect, AddEssentialProperty, AddLayer, AddShapeRepeater, ApplyMode, ApplyScene, BridgeError, CompSelector, CreateComp, EssentialControllers, Host,
	LayerSelector, MoveLayerOrder, MoveLayerTime, NativeAnimation, NativeComposition, NativeEffect, NativeExpression, NativeLayer, NativeProperty, ParentLayer,
	Precompose, PropertyQuery, Result, SetExpression, SetInOutPoint, SetKeyframe, SetPropertyValue, ShapeRepeater, UNKNOWN_BRIDGE_ERROR,
};

/// Bridge address used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";
/// Per-request timeout used when none is configured.
pub const DEFAULT_TIMEOUT_SECS: f64 = 10.0;

/// Blocking JSON client for the bridge HTTP API.
#[derive(Debug, Clone)]
pub struct BridgeClient {
	http: Client,
	base_url: String,
}

impl BridgeClient {
	/// Build a client for `base_url` with a per-request timeout in seconds.
	pub fn new(base_url: &str, timeout_secs: f64) -> Result<Self> {
		let timeout = Duration::try_from_secs_f64(timeout_secs)
			.map_err(|_| BridgeError::InvalidArguments(format!("timeout must be a non-negative number of seconds, got {timeout_secs}")))?;
		let http = Client::builder().timeout(timeout).build()?;

		Ok(Self {
			http,
			base_url: base_url.trim_end_matches('/').to_owned(),
		})
	}

	/// Base URL without a trailing slash.
	pub fn base_url(&self) -> &str {
		&self.base_url
	}

	/// Check the bridge health endpoint; the payload is returned unwrapped.
	#[tracing::instrument(skip(self), fields(base_url = %self.base_url))]
	pub fn health(&self) -> Result<Value> {
		let response = self.http.get(self.url("/health")).send()?;
		let status = response.status();
		let body = response.text()?;
		if !status.is_success() {
			return Err(BridgeError::Status {
				status: status.as_u16(),
				body,
			});
		}
		Ok(serde_json::from_str(&body)?)
	}

	/// Properties currently selected in the host UI.
	pub fn selected_properties(&self) -> Result<Value> {
		self.get("/selected-properties", &[])
	}

	/// Property tree of one layer, selected by id or name.
	pub fn properties(&self, selector: &LayerSelector, query: &PropertyQuery) -> Result<Value> {
		self.get("/properties", &property_query_params(selector, query))
	}

	/// Create a composition.
	pub fn create_comp(&self, body: &CreateComp) -> Result<Value> {
		self.post("/comps", body)
	}

	/// Delete a composition.
	pub fn delete_comp(&self, selector: &CompSelector) -> Result<Value> {
		self.post("/delete-comp", selector)
	}

	/// Set an expression on a layer property.
	pub fn set_expression(&self, body: &SetExpression) -> Result<Value> {
		self.post("/expression", body)
	}

	/// Set a static property value.
	pub fn set_property_value(&self, body: &SetPropertyValue) -> Result<Value> {
		self.post("/property-value", body)
	}

	/// Add or update one keyframe.
	pub fn set_keyframe(&self, body: &SetKeyframe) -> Result<Value> {
		self.post("/keyframes", body)
	}

	/// Add an effect to a layer.
	pub fn add_effect(&self, body: &AddEffect) -> Result<Value> {
		self.post("/effects", body)
	}

	/// Expose a property as an essential-graphics controller.
	pub fn add_essential_property(&self, body: &AddEssentialProperty) -> Result<Value> {
		self.post("/essential-property", body)
	}

	/// Create a layer in the active composition.
	pub fn add_layer(&self, body: &AddLayer) -> Result<Value> {
		self.post("/layers", body)
	}

	/// Add a repeater operator to a shape group.
	pub fn add_shape_repeater(&self, body: &AddShapeRepeater) -> Result<Value> {
		self.post("/shape-repeater", body)
	}

	/// Move a layer's in and/or out point.
	pub fn set_in_out_point(&self, body: &SetInOutPoint) -> Result<Value> {
		if body.in_point.is_none() && body.out_point.is_none() {
			return Err(BridgeError::InvalidArguments("Provide at least one of in point or out point.".to_owned()));
		}
		self.post("/layer-in-out", body)
	}

	/// Shift a layer in time.
	pub fn move_layer_time(&self, body: &MoveLayerTime) -> Result<Value> {
		self.post("/layer-time", body)
	}

	/// Move the current time indicator.
	pub fn set_cti(&self, time: f64) -> Result<Value> {
		self.post("/cti", &serde_json::json!({ "time": time }))
	}

	/// Set the work area of the active composition.
	pub fn set_work_area(&self, start: f64, duration: f64) -> Result<Value> {
		self.post("/work-area", &serde_json::json!({ "start": start, "duration": duration }))
	}

	/// Parent one layer to another, or clear the link.
	pub fn parent_layer(&self, body: &ParentLayer) -> Result<Value> {
		self.post("/layer-parent", body)
	}

	/// Move layers into a new composition.
	pub fn precompose(&self, body: &Precompose) -> Result<Value> {
		self.post("/precompose", body)
	}

	/// Duplicate one layer.
	pub fn duplicate_layer(&self, layer_id: i64) -> Result<Value> {
		self.post("/duplicate-layer", &serde_json::json!({ "layerId": layer_id }))
	}

	/// Reorder one layer.
	pub fn move_layer_order(&self, body: &MoveLayerOrder) -> Result<Value> {
		self.post("/layer-order", body)
	}

	/// Delete one layer.
	pub fn delete_layer(&self, layer_id: i64) -> Result<Value> {
		self.post("/delete-layer", &serde_json::json!({ "layerId": layer_id }))
	}

	/// Apply (or only validate) a scene document on the host.
	#[tracing::instrument(skip(self, scene))]
	pub fn apply_scene(&self, scene: &Value, validate_only: bool, mode: ApplyMode) -> Result<Value> {
		self.post(
			"/scene",
			&ApplyScene {
				scene,
				validate_only,
				mode,
			},
		)
	}

	/// GET a raw payload for commands that print the bridge response unchanged.
	pub fn get_raw(&self, path: &str) -> Result<Value> {
		self.get(path, &[])
	}

	fn url(&self, path: &str) -> String {
		format!("{}{}", self.base_url, path)
	}

	fn get(&self, path: &str, query: &[(&str, String)]) -> Result<Value> {
		tracing::debug!(path, params = query.len(), "bridge GET");
		self.send(self.http.get(self.url(path)).query(query))
	}

	fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value> {
		tracing::debug!(path, "bridge POST");
		self.send(self.http.post(self.url(path)).json(body))
	}

	fn send(&self, request: RequestBuilder) -> Result<Value> {
		let response = request.send()?;
		let status = response.status().as_u16();
		let body = response.text()?;
		decode_envelope(status, &body)
	}

	fn get_as<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
		Ok(serde_json::from_value(self.get(path, query)?)?)
	}
}

impl Host for BridgeClient {
	fn list_compositions(&self) -> Result<Vec<NativeComposition>> {
		self.get_as("/comps", &[])
	}

	fn set_active_composition(&self, selector: &CompSelector) -> Result<Value> {
		self.post("/active-comp", selector)
	}

	fn list_layers(&self) -> Result<Vec<NativeLayer>> {
		self.get_as("/layers", &[])
	}

	fn get_properties(&self, layer_id: i64, query: &PropertyQuery) -> Result<Vec<NativeProperty>> {
		self.get_as("/properties", &property_query_params(&LayerSelector::Id(layer_id), query))
	}

	fn get_expressions(&self, layer_id: i64) -> Result<Vec<NativeExpression>> {
		self.get_as("/expressions", &[("layerId", layer_id.to_string())])
	}

	fn get_animations(&self, layer_id: i64) -> Result<Vec<NativeAnimation>> {
		self.get_as("/animations", &[("layerId", layer_id.to_string())])
	}

	fn get_effects(&self, layer_id: i64) -> Result<Vec<NativeEffect>> {
		self.get_as("/effects", &[("layerId", layer_id.to_string())])
	}

	fn get_repeaters(&self, layer_id: i64) -> Result<Vec<ShapeRepeater>> {
		self.get_as("/repeaters", &[("layerId", layer_id.to_string())])
	}

	fn get_essential_properties(&self) -> Result<EssentialControllers> {
		self.get_as("/essential-properties", &[])
	}
}

/// Unwrap a bridge `{status, data | message}` envelope.
///
/// A success envelope without `data` yields the whole payload. Error envelopes win over the
/// HTTP status so the bridge's own message reaches the user.
pub fn decode_envelope(status: u16, body: &str) -> Result<Value> {
	let payload: Value = match serde_json::from_str(body) {
		Ok(payload) => payload,
		Err(_) if !(200..300).contains(&status) => {
			return Err(BridgeError::Status {
				status,
				body: body.to_owned(),
			});
		}
		Err(err) => return Err(err.into()),
	};

	if payload.get("status").and_then(Value::as_str) == Some("success") {
		return Ok(match payload {
			Value::Object(mut map) if map.contains_key("data") => map.remove("data").unwrap_or(Value::Null),
			other => other,
		});
	}

	let message = payload
		.get("message")
		.and_then(Value::as_str)
		.unwrap_or(UNKNOWN_BRIDGE_ERROR)
		.to_owned();
	Err(BridgeError::Bridge { message })
}

/// Query pairs for `GET /properties`, in wire order.
pub fn property_query_params(selector: &LayerSelector, query: &PropertyQuery) -> Vec<(&'static str, String)> {
	let mut params = vec![selector.query_pair()];
	params.extend(
		query
			.include_groups
			.iter()
			.filter(|group| !group.is_empty())
			.map(|group| ("includeGroup", group.clone())),
	);
	params.extend(
		query
			.exclude_groups
			.iter()
			.filter(|group| !group.is_empty())
			.map(|group| ("excludeGroup", group.clone())),
	);
	if let Some(depth) = query.max_depth {
		params.push(("maxDepth", depth.to_string()));
	}
	if query.include_group_children {
		params.push(("includeGroupChildren", "true".to_owned()));
	}
	if let Some(time) = query.time {
		params.push(("time", time.to_string()));
	}
	params
}

#[cfg(test)]
mod tests;
