use aecli::bridge::{BridgeClient, CompSelector, CreateComp, Host, Result};

use crate::cmd::util::print_json;

#[derive(clap::Args)]
pub struct CreateArgs {
	#[arg(long)]
	pub name: String,
	#[arg(long)]
	pub width: u32,
	#[arg(long)]
	pub height: u32,
	/// Duration in seconds.
	#[arg(long)]
	pub duration: f64,
	#[arg(long = "frame-rate")]
	pub frame_rate: f64,
	#[arg(long = "pixel-aspect", default_value_t = 1.0)]
	pub pixel_aspect: f64,
}

#[derive(clap::Args)]
pub struct SelectArgs {
	#[arg(long = "comp-id")]
	pub comp_id: Option<i64>,
	#[arg(long = "comp-name")]
	pub comp_name: Option<String>,
}

/// Create a composition.
pub fn run_create(client: &BridgeClient, args: CreateArgs) -> Result<()> {
	let body = CreateComp {
		name: args.name,
		width: args.width,
		height: args.height,
		duration: args.duration,
		frame_rate: args.frame_rate,
		pixel_aspect: args.pixel_aspect,
	};
	print_json(&client.create_comp(&body)?)
}

/// Make a composition the active item.
pub fn run_set_active(client: &BridgeClient, args: SelectArgs) -> Result<()> {
	let selector = CompSelector::from_parts(args.comp_id, args.comp_name)?;
	print_json(&client.set_active_composition(&selector)?)
}

/// Delete a composition.
pub fn run_delete(client: &BridgeClient, args: SelectArgs) -> Result<()> {
	let selector = CompSelector::from_parts(args.comp_id, args.comp_name)?;
	print_json(&client.delete_comp(&selector)?)
}
