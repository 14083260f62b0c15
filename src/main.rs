#![allow(missing_docs)]

use aecli::bridge::{BridgeClient, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, Result};
use clap::{Parser, Subcommand};
use tracing::Level;

mod cmd;

#[derive(Parser)]
#[command(name = "ae-cli", about = "Drive After Effects through the ae-cli bridge")]
struct Cli {
	/// Bridge base URL.
	#[arg(long = "base-url", global = true, env = "AE_BRIDGE_URL", default_value = DEFAULT_BASE_URL)]
	base_url: String,
	/// Per-request timeout in seconds.
	#[arg(long, global = true, default_value_t = DEFAULT_TIMEOUT_SECS)]
	timeout: f64,
	/// Raise log verbosity on stderr; repeatable.
	#[arg(short, long, global = true, action = clap::ArgAction::Count)]
	verbose: u8,
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	Health,
	Layers,
	ListComps,
	SelectedProperties,
	Properties(cmd::query::PropertiesArgs),
	EssentialProperties,
	CreateComp(cmd::comp::CreateArgs),
	SetActiveComp(cmd::comp::SelectArgs),
	DeleteComp(cmd::comp::SelectArgs),
	SetExpression(cmd::edit::ExpressionArgs),
	SetProperty(cmd::edit::PropertyArgs),
	SetKeyframe(cmd::edit::KeyframeArgs),
	AddEffect(cmd::edit::EffectArgs),
	AddEssentialProperty(cmd::edit::EssentialArgs),
	AddLayer(cmd::layer::AddArgs),
	AddShapeRepeater(cmd::layer::RepeaterArgs),
	SetInOutPoint(cmd::timeline::InOutArgs),
	MoveLayerTime(cmd::timeline::ShiftArgs),
	SetCti(cmd::timeline::CtiArgs),
	SetWorkArea(cmd::timeline::WorkAreaArgs),
	ParentLayer(cmd::layer::ParentArgs),
	Precompose(cmd::layer::PrecomposeArgs),
	DuplicateLayer(cmd::layer::LayerIdArgs),
	MoveLayerOrder(cmd::layer::OrderArgs),
	DeleteLayer(cmd::layer::LayerIdArgs),
	ExportScene(cmd::scene::ExportArgs),
	ApplyScene(cmd::scene::ApplyArgs),
}

fn main() {
	if let Err(err) = run() {
		eprintln!("ae-cli error: {err}");
		std::process::exit(1);
	}
}

fn run() -> Result<()> {
	let cli = Cli::parse();
	init_logging(cli.verbose);

	let client = BridgeClient::new(&cli.base_url, cli.timeout)?;
	let client = &client;

	match cli.command {
		Commands::Health => cmd::query::run_health(client),
		Commands::Layers => cmd::query::run_layers(client),
		Commands::ListComps => cmd::query::run_list_comps(client),
		Commands::SelectedProperties => cmd::query::run_selected_properties(client),
		Commands::Properties(args) => cmd::query::run_properties(client, args),
		Commands::EssentialProperties => cmd::query::run_essential_properties(client),
		Commands::CreateComp(args) => cmd::comp::run_create(client, args),
		Commands::SetActiveComp(args) => cmd::comp::run_set_active(client, args),
		Commands::DeleteComp(args) => cmd::comp::run_delete(client, args),
		Commands::SetExpression(args) => cmd::edit::run_set_expression(client, args),
		Commands::SetProperty(args) => cmd::edit::run_set_property(client, args),
		Commands::SetKeyframe(args) => cmd::edit::run_set_keyframe(client, args),
		Commands::AddEffect(args) => cmd::edit::run_add_effect(client, args),
		Commands::AddEssentialProperty(args) => cmd::edit::run_add_essential_property(client, args),
		Commands::AddLayer(args) => cmd::layer::run_add(client, args),
		Commands::AddShapeRepeater(args) => cmd::layer::run_add_repeater(client, args),
		Commands::SetInOutPoint(args) => cmd::timeline::run_in_out(client, args),
		Commands::MoveLayerTime(args) => cmd::timeline::run_shift(client, args),
		Commands::SetCti(args) => cmd::timeline::run_cti(client, args),
		Commands::SetWorkArea(args) => cmd::timeline::run_work_area(client, args),
		Commands::ParentLayer(args) => cmd::layer::run_parent(client, args),
		Commands::Precompose(args) => cmd::layer::run_precompose(client, args),
		Commands::DuplicateLayer(args) => cmd::layer::run_duplicate(client, args),
		Commands::MoveLayerOrder(args) => cmd::layer::run_move_order(client, args),
		Commands::DeleteLayer(args) => cmd::layer::run_delete(client, args),
		Commands::ExportScene(args) => cmd::scene::run_export(client, args),
		Commands::ApplyScene(args) => cmd::scene::run_apply(client, args),
	}
}

fn init_logging(verbose: u8) {
	let level = match verbose {
		0 => Level::WARN,
		1 => Level::INFO,
		2 => Level::DEBUG,
		_ => Level::TRACE,
	};
	tracing_subscriber::fmt().with_writer(std::io::stderr).with_max_level(level).init();
}
