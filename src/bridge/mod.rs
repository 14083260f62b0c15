mod client;
mod error;
mod host;
mod native;
mod request;

/// Blocking HTTP client for the bridge.
pub use client::{BridgeClient, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, decode_envelope, property_query_params};
/// Error and result aliases.
pub use error::{BridgeError, Result, UNKNOWN_BRIDGE_ERROR};
/// Read-only capability interface consumed by the scene exporter.
pub use host::Host;
/// Records returned by the query endpoints.
pub use native::{
	EssentialController, EssentialControllers, NativeAnimation, NativeComposition, NativeEffect, NativeEffectParam, NativeExpression, NativeKeyframe,
	NativeLayer, NativeProperty, PropertyQuery, ShapeRepeater,
};
/// Selectors and mutation request bodies.
pub use request::{
	AddEffect, AddEssentialProperty, AddLayer, AddShapeRepeater, ApplyMode, ApplyScene, CompSelector, CreateComp, Interpolation, LayerPlacement, LayerSelector,
	LineCap, MoveLayerOrder, MoveLayerTime, NewLayerType, ParentLayer, Precompose, RepeaterSettings, SetExpression, SetInOutPoint, SetKeyframe, SetPropertyValue,
	ShapePrimitive,
};
