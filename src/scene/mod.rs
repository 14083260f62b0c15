mod codec;
mod collect;
mod export;
mod extract;
mod ident;
mod model;
mod validate;
mod warnings;

/// Property value decoding and value-shape checks.
pub use codec::{PropValue, is_portable_value, is_supported_effect_value, is_supported_keyframe_value, parse_property_value, parse_scalar};
/// Per-layer facet collectors.
pub use collect::{
	EssentialBinder, Facet, collect_animations, collect_effects, collect_expressions, collect_property_values, collect_repeaters, fetch, unresolved_expression_paths,
};
/// Export entry point and its result.
pub use export::{EXPORT_PROPERTY_GROUPS, SceneExport, classify_layer, export_property_query, export_scene};
/// Transform and source-text extraction.
pub use extract::{
	ANCHOR_POINT_PATH, OPACITY_PATH, POSITION_PATH, ROTATION_PATH, SCALE_PATH, SourceText, TEXT_DOCUMENT_PATH, TRANSFORM_PATHS, extract_text, extract_transform, is_placeholder,
};
/// Scene id assignment and parent linking.
pub use ident::{LayerLinks, build_layer_id, slugify};
/// Scene document types.
pub use model::{
	EssentialBinding, SceneAnimation, SceneComposition, SceneDocument, SceneEffect, SceneEffectParam, SceneExpression, SceneKeyframe, SceneLayer, SceneLayerType,
	ScenePropertyValue, Timing, Transform,
};
/// Structural checks run before a scene is applied.
pub use validate::{composition_order, validate_scene};
/// Export warning log.
pub use warnings::Warnings;
