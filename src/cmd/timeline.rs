use aecli::bridge::{BridgeClient, MoveLayerTime, Result, SetInOutPoint};

use crate::cmd::util::{LayerArgs, print_json};

#[derive(clap::Args)]
pub struct InOutArgs {
	#[command(flatten)]
	pub layer: LayerArgs,
	#[arg(long = "in-point")]
	pub in_point: Option<f64>,
	#[arg(long = "out-point")]
	pub out_point: Option<f64>,
}

#[derive(clap::Args)]
pub struct ShiftArgs {
	#[command(flatten)]
	pub layer: LayerArgs,
	/// Seconds to shift; negative moves earlier.
	#[arg(long, allow_negative_numbers = true)]
	pub delta: f64,
}

#[derive(clap::Args)]
pub struct CtiArgs {
	#[arg(long)]
	pub time: f64,
}

#[derive(clap::Args)]
pub struct WorkAreaArgs {
	#[arg(long)]
	pub start: f64,
	#[arg(long)]
	pub duration: f64,
}

pub fn run_in_out(client: &BridgeClient, args: InOutArgs) -> Result<()> {
	let body = SetInOutPoint {
		layer: args.layer.selector()?,
		in_point: args.in_point,
		out_point: args.out_point,
	};
	print_json(&client.set_in_out_point(&body)?)
}

pub fn run_shift(client: &BridgeClient, args: ShiftArgs) -> Result<()> {
	let body = MoveLayerTime {
		layer: args.layer.selector()?,
		delta: args.delta,
	};
	print_json(&client.move_layer_time(&body)?)
}

/// Move the current time indicator.
pub fn run_cti(client: &BridgeClient, args: CtiArgs) -> Result<()> {
	print_json(&client.set_cti(args.time)?)
}

pub fn run_work_area(client: &BridgeClient, args: WorkAreaArgs) -> Result<()> {
	print_json(&client.set_work_area(args.start, args.duration)?)
}
