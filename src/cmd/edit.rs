use std::path::PathBuf;

use aecli::bridge::{AddEffect, AddEssentialProperty, BridgeClient, Interpolation, Result, SetExpression, SetKeyframe, SetPropertyValue};

use crate::cmd::util::{LayerArgs, inline_or_file, parse_json_arg, parse_optional_json, print_json};

#[derive(clap::Args)]
pub struct ExpressionArgs {
	#[command(flatten)]
	pub layer: LayerArgs,
	#[arg(long = "property-path")]
	pub property_path: String,
	#[arg(long)]
	pub expression: Option<String>,
	/// UTF-8 file holding the expression source.
	#[arg(long = "expression-file")]
	pub expression_file: Option<PathBuf>,
}

#[derive(clap::Args)]
pub struct PropertyArgs {
	#[command(flatten)]
	pub layer: LayerArgs,
	#[arg(long = "property-path")]
	pub property_path: String,
	/// JSON value, e.g. `100`, `[960,540]`, `true`, `"Hello"`.
	#[arg(long)]
	pub value: Option<String>,
	/// UTF-8 JSON file holding the value.
	#[arg(long = "value-file")]
	pub value_file: Option<PathBuf>,
}

#[derive(clap::Args)]
pub struct KeyframeArgs {
	#[command(flatten)]
	pub layer: LayerArgs,
	#[arg(long = "property-path")]
	pub property_path: String,
	/// Key time in seconds.
	#[arg(long)]
	pub time: f64,
	/// JSON value, e.g. `100`, `[960,540]`, `true`, `"Hello"`.
	#[arg(long)]
	pub value: Option<String>,
	/// UTF-8 JSON file holding the value.
	#[arg(long = "value-file")]
	pub value_file: Option<PathBuf>,
	#[arg(long = "in-interp", value_enum)]
	pub in_interp: Option<Interpolation>,
	#[arg(long = "out-interp", value_enum)]
	pub out_interp: Option<Interpolation>,
	/// Incoming temporal ease as JSON, e.g. `[0,66]` or `[[0,66],[0,66]]`.
	#[arg(long = "ease-in")]
	pub ease_in: Option<String>,
	/// Outgoing temporal ease as JSON.
	#[arg(long = "ease-out")]
	pub ease_out: Option<String>,
}

#[derive(clap::Args)]
pub struct EffectArgs {
	#[command(flatten)]
	pub layer: LayerArgs,
	#[arg(long = "effect-match-name")]
	pub effect_match_name: String,
	#[arg(long = "effect-name")]
	pub effect_name: Option<String>,
}

#[derive(clap::Args)]
pub struct EssentialArgs {
	#[command(flatten)]
	pub layer: LayerArgs,
	#[arg(long = "property-path")]
	pub property_path: String,
	/// Controller name shown in the Essential Graphics panel.
	#[arg(long = "essential-name")]
	pub essential_name: Option<String>,
}

/// Set an expression from an inline string or a file.
pub fn run_set_expression(client: &BridgeClient, args: ExpressionArgs) -> Result<()> {
	let body = SetExpression {
		layer: args.layer.selector()?,
		property_path: args.property_path,
		expression: inline_or_file("expression", args.expression, args.expression_file)?,
	};
	print_json(&client.set_expression(&body)?)
}

/// Set a static property value.
pub fn run_set_property(client: &BridgeClient, args: PropertyArgs) -> Result<()> {
	let layer = args.layer.selector()?;
	let raw = inline_or_file("value", args.value, args.value_file)?;
	let body = SetPropertyValue {
		layer,
		property_path: args.property_path,
		value: parse_json_arg("value", &raw)?,
	};
	print_json(&client.set_property_value(&body)?)
}

/// Add or update a keyframe.
pub fn run_set_keyframe(client: &BridgeClient, args: KeyframeArgs) -> Result<()> {
	let KeyframeArgs {
		layer,
		property_path,
		time,
		value,
		value_file,
		in_interp,
		out_interp,
		ease_in,
		ease_out,
	} = args;

	let layer = layer.selector()?;
	let raw = inline_or_file("value", value, value_file)?;
	let body = SetKeyframe {
		layer,
		property_path,
		time,
		value: parse_json_arg("value", &raw)?,
		in_interp,
		out_interp,
		ease_in: parse_optional_json("ease-in", ease_in.as_deref())?,
		ease_out: parse_optional_json("ease-out", ease_out.as_deref())?,
	};
	print_json(&client.set_keyframe(&body)?)
}

/// Add an effect by match name.
pub fn run_add_effect(client: &BridgeClient, args: EffectArgs) -> Result<()> {
	let body = AddEffect {
		layer: args.layer.selector()?,
		effect_match_name: args.effect_match_name,
		effect_name: args.effect_name.filter(|name| !name.is_empty()),
	};
	print_json(&client.add_effect(&body)?)
}

/// Expose a property in the Essential Graphics panel.
pub fn run_add_essential_property(client: &BridgeClient, args: EssentialArgs) -> Result<()> {
	let body = AddEssentialProperty {
		layer: args.layer.selector()?,
		property_path: args.property_path,
		essential_name: args.essential_name,
	};
	print_json(&client.add_essential_property(&body)?)
}
