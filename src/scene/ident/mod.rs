//! Scene ids for native layers and the parent links between them.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;

use crate::scene::{SceneLayer, Warnings};

static NON_ALNUM: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"[^a-z0-9]+").ok());

/// Lowercase `name`, collapse non-alphanumeric runs to `-`, and trim hyphens.
pub fn slugify(name: &str) -> String {
	let lowered = name.trim().to_lowercase();
	let slug = match NON_ALNUM.as_ref() {
		Some(pattern) => pattern.replace_all(&lowered, "-").into_owned(),
		None => lowered,
	};
	let slug = slug.trim_matches('-');
	if slug.is_empty() { "layer".to_owned() } else { slug.to_owned() }
}

/// Pick an unused scene id for a layer name and record it in `used`.
///
/// Collisions get `-2`, `-3`, ... appended in assignment order.
pub fn build_layer_id(name: Option<&str>, used: &mut HashSet<String>) -> String {
	let base = slugify(name.filter(|name| !name.is_empty()).unwrap_or("layer"));
	let mut candidate = base.clone();
	let mut suffix = 1_u32;
	while used.contains(&candidate) {
		suffix += 1;
		candidate = format!("{base}-{suffix}");
	}
	used.insert(candidate.clone());
	candidate
}

/// Native-id bookkeeping for one export run.
///
/// Pass one records every emitted layer; pass two ([`LayerLinks::resolve`]) fills in
/// `parent_id` once all scene ids are known, so forward references resolve.
#[derive(Debug, Default)]
pub struct LayerLinks {
	used: HashSet<String>,
	scene_ids: HashMap<i64, String>,
	parents: HashMap<i64, i64>,
	emitted: Vec<i64>,
}

impl LayerLinks {
	/// Empty bookkeeping.
	pub fn new() -> Self {
		Self::default()
	}

	/// Assign a scene id to a supported layer and remember its native parent.
	///
	/// Layers must be pushed to the output in the same order they are recorded here.
	pub fn record(&mut self, native_id: i64, name: Option<&str>, parent: Option<i64>) -> String {
		let scene_id = build_layer_id(name, &mut self.used);
		self.scene_ids.insert(native_id, scene_id.clone());
		if let Some(parent) = parent {
			self.parents.insert(native_id, parent);
		}
		self.emitted.push(native_id);
		scene_id
	}

	/// Scene id assigned to a native layer, if it was emitted.
	pub fn scene_id(&self, native_id: i64) -> Option<&str> {
		self.scene_ids.get(&native_id).map(String::as_str)
	}

	/// Set `parent_id` on every emitted layer whose parent was emitted too.
	///
	/// Links to excluded or missing layers are dropped with one warning per child.
	pub fn resolve(&self, layers: &mut [SceneLayer], warnings: &mut Warnings) {
		for (layer, native_id) in layers.iter_mut().zip(&self.emitted) {
			let Some(parent) = self.parents.get(native_id) else {
				continue;
			};
			match self.scene_id(*parent) {
				Some(parent_scene_id) => layer.parent_id = Some(parent_scene_id.to_owned()),
				None => warnings.push(format!(
					"Layer '{}' parent was skipped because parent layer type is unsupported.",
					layer.name.as_deref().unwrap_or("<unnamed>")
				)),
			}
		}
	}
}
