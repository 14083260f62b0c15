use std::path::PathBuf;

use aecli::bridge::{ApplyMode, BridgeClient, BridgeError, CompSelector, Result};
use aecli::scene::{export_scene, validate_scene};
use serde_json::{Value, json};

use crate::cmd::util::{parse_json_arg, print_json, read_file};

#[derive(clap::Args)]
pub struct ExportArgs {
	/// Export this composition instead of the active one.
	#[arg(long = "comp-id")]
	pub comp_id: Option<i64>,
	#[arg(long = "comp-name")]
	pub comp_name: Option<String>,
	/// Write the scene document here instead of stdout.
	#[arg(long)]
	pub output: Option<PathBuf>,
}

#[derive(clap::Args)]
pub struct ApplyArgs {
	#[arg(long = "scene-file")]
	pub scene_file: PathBuf,
	/// Check the scene on the host without changing anything.
	#[arg(long = "validate-only")]
	pub validate_only: bool,
	/// merge, replace-managed or clear-all.
	#[arg(long, default_value = "merge", value_parser = ApplyMode::parse)]
	pub mode: ApplyMode,
}

/// Export a composition as a scene document.
///
/// Without `--output` the scene and warnings are printed together; with it the scene is
/// written to the file and stdout reports the path and warnings.
pub fn run_export(client: &BridgeClient, args: ExportArgs) -> Result<()> {
	let target = CompSelector::optional(args.comp_id, args.comp_name).transpose()?;
	let export = export_scene(client, target.as_ref())?;

	match args.output {
		Some(path) => {
			let mut text = serde_json::to_string_pretty(&export.scene)?;
			text.push('\n');
			std::fs::write(&path, text)?;
			print_json(&json!({
				"output": path.display().to_string(),
				"warnings": export.warnings,
			}))
		}
		None => print_json(&export),
	}
}

/// Validate a scene file locally, then send it to the host.
pub fn run_apply(client: &BridgeClient, args: ApplyArgs) -> Result<()> {
	let raw = read_file(&args.scene_file)?;
	let scene: Value = parse_json_arg("scene file", &raw)?;

	let errors = validate_scene(&scene);
	if !errors.is_empty() {
		return Err(BridgeError::InvalidScene { errors });
	}
	tracing::info!(path = %args.scene_file.display(), validate_only = args.validate_only, "applying scene");
	print_json(&client.apply_scene(&scene, args.validate_only, args.mode)?)
}
