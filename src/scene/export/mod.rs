//! Scene export: live composition in, scene document plus warnings out.

use serde::Serialize;
use serde_json::{Number, Value};

use crate::bridge::{BridgeError, CompSelector, Host, NativeComposition, NativeLayer, PropertyQuery, Result};
use crate::scene::{
	EssentialBinder, Facet, LayerLinks, SceneComposition, SceneDocument, SceneLayer, SceneLayerType, SourceText, Timing, Warnings, collect_animations,
	collect_effects, collect_expressions, collect_property_values, collect_repeaters, extract_text, extract_transform, fetch, unresolved_expression_paths,
};

/// Property groups read for every exported layer.
pub const EXPORT_PROPERTY_GROUPS: [&str; 5] = [
	"ADBE Transform Group",
	"ADBE Text Properties",
	"ADBE Effect Parade",
	"ADBE Root Vectors Group",
	"ADBE Material Options Group",
];

/// Result of one export run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneExport {
	/// Exported document.
	pub scene: SceneDocument,
	/// Every degradation, in the order it happened.
	pub warnings: Vec<String>,
}

/// Property query used for per-layer reads.
pub fn export_property_query() -> PropertyQuery {
	PropertyQuery {
		include_groups: EXPORT_PROPERTY_GROUPS.iter().map(|group| (*group).to_owned()).collect(),
		include_group_children: true,
		..PropertyQuery::default()
	}
}

/// Map a native layer onto a scene layer type; `None` means unsupported.
pub fn classify_layer(layer: &NativeLayer) -> Option<SceneLayerType> {
	if layer.null_layer == Some(true) {
		return Some(SceneLayerType::Null);
	}
	match layer.layer_type.as_deref().map(|tag| tag.trim().to_ascii_lowercase()).as_deref() {
		Some("solid" | "video") => Some(SceneLayerType::Solid),
		Some("text") => Some(SceneLayerType::Text),
		Some("shape") => Some(SceneLayerType::Shape),
		Some("null") => Some(SceneLayerType::Null),
		_ => None,
	}
}

/// Export the active composition, or `target` after activating it.
///
/// Only composition resolution can fail; everything else degrades to a warning.
#[tracing::instrument(skip(host))]
pub fn export_scene<H: Host + ?Sized>(host: &H, target: Option<&CompSelector>) -> Result<SceneExport> {
	let comp = resolve_composition(host, target)?;
	let comp_label = comp.name.clone().unwrap_or_default();
	let mut warnings = Warnings::new();

	let layers = match host.list_layers() {
		Ok(layers) => layers,
		Err(err) => {
			warnings.push(format!("Failed to list layers for composition '{comp_label}': {err}"));
			Vec::new()
		}
	};

	let binder = match host.get_essential_properties() {
		Ok(controllers) => EssentialBinder::new(controllers),
		Err(err) => {
			warnings.push(format!("Failed to export essential properties for composition '{comp_label}': {err}"));
			EssentialBinder::default()
		}
	};

	let mut export = LayerExport {
		host,
		query: export_property_query(),
		binder,
		warnings,
	};
	let mut links = LayerLinks::new();
	let mut scene_layers = Vec::new();

	for layer in &layers {
		let Some(layer_type) = classify_layer(layer) else {
			export.warnings.push(format!(
				"Skipped unsupported layer '{}' (id={} type={}).",
				layer.label(),
				layer.id.map_or_else(|| "none".to_owned(), |id| id.to_string()),
				layer.layer_type.as_deref().unwrap_or("unknown"),
			));
			continue;
		};
		let Some(native_id) = layer.id else {
			export.warnings.push(format!("Skipped layer '{}' without a layer id.", layer.label()));
			continue;
		};

		let scene_id = links.record(native_id, layer.name.as_deref(), layer.parent_layer_id);
		scene_layers.push(export.layer(layer, native_id, scene_id, layer_type));
	}

	let LayerExport { binder, mut warnings, .. } = export;
	binder.resolve(&mut scene_layers, &mut warnings);
	links.resolve(&mut scene_layers, &mut warnings);
	tracing::info!(layers = scene_layers.len(), warnings = warnings.len(), "scene exported");

	Ok(SceneExport {
		scene: SceneDocument {
			composition: composition_block(comp),
			layers: scene_layers,
		},
		warnings: warnings.into_vec(),
	})
}

fn resolve_composition<H: Host + ?Sized>(host: &H, target: Option<&CompSelector>) -> Result<NativeComposition> {
	if let Some(selector) = target {
		host.set_active_composition(selector)?;
	}

	match host.list_compositions()?.into_iter().find(NativeComposition::active) {
		Some(comp) => Ok(comp),
		None if target.is_some() => Err(BridgeError::UnresolvedComposition),
		None => Err(BridgeError::NoActiveComposition),
	}
}

/// Per-export state shared by every layer read.
struct LayerExport<'a, H: ?Sized> {
	host: &'a H,
	query: PropertyQuery,
	binder: EssentialBinder,
	warnings: Warnings,
}

impl<H: Host + ?Sized> LayerExport<'_, H> {
	fn layer(&mut self, layer: &NativeLayer, native_id: i64, scene_id: String, layer_type: SceneLayerType) -> SceneLayer {
		let host = self.host;
		let warnings = &mut self.warnings;
		let label = layer.label();
		let props = fetch(host.get_properties(native_id, &self.query), Facet::Properties, label, warnings).unwrap_or_default();

		let mut out = SceneLayer::new(scene_id, layer_type, layer.name.clone());
		out.timing = Timing {
			in_point: number(layer.in_point.as_ref()),
			out_point: number(layer.out_point.as_ref()),
			start_time: number(layer.start_time.as_ref()),
		};
		out.transform = extract_transform(&props);

		if layer_type == SceneLayerType::Text {
			match extract_text(&props) {
				SourceText::Text(text) => out.text = Some(text),
				SourceText::Unrecoverable => warnings.push(format!("Text layer '{label}' source text could not be recovered; omitted text field.")),
				SourceText::Absent => {}
			}
		}

		if let Some(raw) = fetch(host.get_expressions(native_id), Facet::Expressions, label, warnings) {
			out.expressions = collect_expressions(raw);
		}
		if let Some(raw) = fetch(host.get_animations(native_id), Facet::Animations, label, warnings) {
			out.animations = collect_animations(raw, label, warnings);
		}

		let unresolved = unresolved_expression_paths(&props, &out.expressions);
		if !unresolved.is_empty() {
			warnings.push(format!(
				"Layer '{label}' has expressions, but export failed to resolve source text for: {}.",
				unresolved.join(", ")
			));
		}

		if let Some(raw) = fetch(host.get_effects(native_id), Facet::Effects, label, warnings) {
			out.effects = collect_effects(raw, label, warnings);
		}
		if layer_type == SceneLayerType::Shape
			&& let Some(raw) = fetch(host.get_repeaters(native_id), Facet::Repeaters, label, warnings)
		{
			out.repeaters = collect_repeaters(raw);
		}

		self.binder.observe(&props);
		out.property_values = collect_property_values(&props, label, warnings);

		if layer_type == SceneLayerType::Solid {
			out.width = number(layer.source_width.as_ref());
			out.height = number(layer.source_height.as_ref());
			out.duration = number(layer.source_duration.as_ref());
			out.color = match &layer.solid_color {
				Some(Value::Array(rgb)) if rgb.len() >= 3 => Some([rgb[0].clone(), rgb[1].clone(), rgb[2].clone()]),
				_ => None,
			};
		}

		out
	}
}

fn composition_block(comp: NativeComposition) -> SceneComposition {
	SceneComposition {
		comp_id: comp.id,
		name: comp.name,
		width: comp.width,
		height: comp.height,
		duration: comp.duration,
		frame_rate: comp.frame_rate,
		pixel_aspect: comp.pixel_aspect,
		set_active: true,
	}
}

fn number(value: Option<&Value>) -> Option<Number> {
	match value {
		Some(Value::Number(number)) => Some(number.clone()),
		_ => None,
	}
}
