use serde_json::Value;

use crate::bridge::{
	CompSelector, EssentialControllers, NativeAnimation, NativeComposition, NativeEffect, NativeExpression, NativeLayer, NativeProperty, PropertyQuery, Result,
	ShapeRepeater,
};

/// Reads the scene exporter needs from a running host session.
///
/// Layer ids are the host's numeric layer indices within the active composition. Every call
/// is a blocking round trip; implementors decide how timeouts surface.
pub trait Host {
	/// List every composition in the project.
	fn list_compositions(&self) -> Result<Vec<NativeComposition>>;

	/// Make one composition the active item.
	fn set_active_composition(&self, selector: &CompSelector) -> Result<Value>;

	/// List layers of the active composition in host order.
	fn list_layers(&self) -> Result<Vec<NativeLayer>>;

	/// Read a layer's property tree, filtered by `query`.
	fn get_properties(&self, layer_id: i64, query: &PropertyQuery) -> Result<Vec<NativeProperty>>;

	/// Read a layer's expressions.
	fn get_expressions(&self, layer_id: i64) -> Result<Vec<NativeExpression>>;

	/// Read a layer's keyframed properties.
	fn get_animations(&self, layer_id: i64) -> Result<Vec<NativeAnimation>>;

	/// Read a layer's effects and their parameter values.
	fn get_effects(&self, layer_id: i64) -> Result<Vec<NativeEffect>>;

	/// Read a shape layer's repeater operators.
	fn get_repeaters(&self, layer_id: i64) -> Result<Vec<ShapeRepeater>>;

	/// Read essential-graphics controllers of the active composition.
	fn get_essential_properties(&self) -> Result<EssentialControllers>;
}
