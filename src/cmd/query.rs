use aecli::bridge::{BridgeClient, PropertyQuery, Result};

use crate::cmd::util::{LayerArgs, print_json};

#[derive(clap::Args)]
pub struct PropertiesArgs {
	#[command(flatten)]
	pub layer: LayerArgs,
	/// Group match name to include; repeatable.
	#[arg(long = "include-group")]
	pub include_groups: Vec<String>,
	/// Group match name to exclude; repeatable.
	#[arg(long = "exclude-group")]
	pub exclude_groups: Vec<String>,
	#[arg(long = "max-depth")]
	pub max_depth: Option<u32>,
	/// Also list children of included groups.
	#[arg(long = "include-group-children")]
	pub include_group_children: bool,
	/// Comp time in seconds at which values are read.
	#[arg(long)]
	pub time: Option<f64>,
}

/// Print the bridge health payload.
pub fn run_health(client: &BridgeClient) -> Result<()> {
	print_json(&client.health()?)
}

/// Print layers of the active composition.
pub fn run_layers(client: &BridgeClient) -> Result<()> {
	print_json(&client.get_raw("/layers")?)
}

/// Print every composition in the project.
pub fn run_list_comps(client: &BridgeClient) -> Result<()> {
	print_json(&client.get_raw("/comps")?)
}

/// Print properties selected in the host UI.
pub fn run_selected_properties(client: &BridgeClient) -> Result<()> {
	print_json(&client.selected_properties()?)
}

/// Print essential-graphics controllers of the active composition.
pub fn run_essential_properties(client: &BridgeClient) -> Result<()> {
	print_json(&client.get_raw("/essential-properties")?)
}

/// Print a layer's property tree.
pub fn run_properties(client: &BridgeClient, args: PropertiesArgs) -> Result<()> {
	let PropertiesArgs {
		layer,
		include_groups,
		exclude_groups,
		max_depth,
		include_group_children,
		time,
	} = args;

	let selector = layer.selector()?;
	let query = PropertyQuery {
		include_groups,
		exclude_groups,
		max_depth,
		include_group_children,
		time,
	};
	print_json(&client.properties(&selector, &query)?)
}
