use aecli::bridge::{
	AddLayer, AddShapeRepeater, BridgeClient, BridgeError, LayerPlacement, LineCap, MoveLayerOrder, NewLayerType, ParentLayer, Precompose, RepeaterSettings,
	Result, ShapePrimitive,
};

use crate::cmd::util::{LayerArgs, print_json};

#[derive(clap::Args)]
pub struct AddArgs {
	#[arg(long = "layer-type", value_enum, default_value_t = NewLayerType::Null)]
	pub layer_type: NewLayerType,
	#[arg(long)]
	pub name: Option<String>,
	/// Source text for text layers.
	#[arg(long)]
	pub text: Option<String>,
	/// Solid width in pixels.
	#[arg(long)]
	pub width: Option<u32>,
	/// Solid height in pixels.
	#[arg(long)]
	pub height: Option<u32>,
	/// Solid color as R G B, 0-1 or 0-255.
	#[arg(long, num_args = 3, value_names = ["R", "G", "B"])]
	pub color: Option<Vec<f64>>,
	/// Solid duration in seconds.
	#[arg(long)]
	pub duration: Option<f64>,
	#[arg(long = "shape-type", value_enum)]
	pub shape_type: Option<ShapePrimitive>,
	#[arg(long = "shape-size", num_args = 2, value_names = ["W", "H"])]
	pub shape_size: Option<Vec<f64>>,
	#[arg(long = "shape-position", num_args = 2, value_names = ["X", "Y"])]
	pub shape_position: Option<Vec<f64>>,
	#[arg(long = "shape-fill-color", num_args = 3, value_names = ["R", "G", "B"])]
	pub shape_fill_color: Option<Vec<f64>>,
	#[arg(long = "shape-fill-opacity")]
	pub shape_fill_opacity: Option<f64>,
	#[arg(long = "shape-stroke-color", num_args = 3, value_names = ["R", "G", "B"])]
	pub shape_stroke_color: Option<Vec<f64>>,
	#[arg(long = "shape-stroke-opacity")]
	pub shape_stroke_opacity: Option<f64>,
	#[arg(long = "shape-stroke-width")]
	pub shape_stroke_width: Option<f64>,
	#[arg(long = "shape-stroke-line-cap", value_enum)]
	pub shape_stroke_line_cap: Option<LineCap>,
	/// Rectangle corner roundness.
	#[arg(long = "shape-roundness")]
	pub shape_roundness: Option<f64>,
}

#[derive(clap::Args)]
pub struct RepeaterArgs {
	#[command(flatten)]
	pub layer: LayerArgs,
	/// 1-based shape group index under Contents.
	#[arg(long = "group-index", default_value_t = 1)]
	pub group_index: u32,
	#[arg(long)]
	pub name: Option<String>,
	#[arg(long)]
	pub copies: Option<f64>,
	#[arg(long)]
	pub offset: Option<f64>,
	#[arg(long, num_args = 2, value_names = ["X", "Y"], allow_negative_numbers = true)]
	pub position: Option<Vec<f64>>,
	#[arg(long, num_args = 2, value_names = ["X", "Y"], allow_negative_numbers = true)]
	pub scale: Option<Vec<f64>>,
	#[arg(long)]
	pub rotation: Option<f64>,
	#[arg(long = "start-opacity")]
	pub start_opacity: Option<f64>,
	#[arg(long = "end-opacity")]
	pub end_opacity: Option<f64>,
}

#[derive(clap::Args)]
pub struct ParentArgs {
	#[arg(long = "child-layer-id")]
	pub child_layer_id: i64,
	#[arg(long = "parent-layer-id", conflicts_with = "clear_parent")]
	pub parent_layer_id: Option<i64>,
	/// Remove the current parent link.
	#[arg(long = "clear-parent")]
	pub clear_parent: bool,
}

#[derive(clap::Args)]
pub struct PrecomposeArgs {
	/// Layer to move into the new composition; repeatable.
	#[arg(long = "layer-id", required = true)]
	pub layer_ids: Vec<i64>,
	#[arg(long)]
	pub name: String,
	#[arg(long = "move-all-attributes")]
	pub move_all_attributes: bool,
}

#[derive(clap::Args)]
pub struct LayerIdArgs {
	#[arg(long = "layer-id")]
	pub layer_id: i64,
}

#[derive(clap::Args)]
pub struct OrderArgs {
	#[arg(long = "layer-id")]
	pub layer_id: i64,
	#[arg(long = "before-layer-id")]
	pub before_layer_id: Option<i64>,
	#[arg(long = "after-layer-id")]
	pub after_layer_id: Option<i64>,
	#[arg(long = "to-top")]
	pub to_top: bool,
	#[arg(long = "to-bottom")]
	pub to_bottom: bool,
}

impl OrderArgs {
	fn placement(&self) -> Result<LayerPlacement> {
		let mut chosen = Vec::with_capacity(1);
		if let Some(id) = self.before_layer_id {
			chosen.push(LayerPlacement::Before(id));
		}
		if let Some(id) = self.after_layer_id {
			chosen.push(LayerPlacement::After(id));
		}
		if self.to_top {
			chosen.push(LayerPlacement::ToTop(true));
		}
		if self.to_bottom {
			chosen.push(LayerPlacement::ToBottom(true));
		}

		match chosen.as_slice() {
			[placement] => Ok(*placement),
			_ => Err(BridgeError::InvalidArguments(
				"Provide exactly one of before layer id, after layer id, to top, or to bottom.".to_owned(),
			)),
		}
	}
}

/// Create a layer in the active composition.
pub fn run_add(client: &BridgeClient, args: AddArgs) -> Result<()> {
	let mut body = AddLayer::new(args.layer_type);
	body.name = args.name;
	body.text = args.text;
	body.width = args.width;
	body.height = args.height;
	body.color = args.color;
	body.duration = args.duration;
	body.shape_type = args.shape_type;
	body.shape_size = args.shape_size;
	body.shape_position = args.shape_position;
	body.shape_fill_color = args.shape_fill_color;
	body.shape_fill_opacity = args.shape_fill_opacity;
	body.shape_stroke_color = args.shape_stroke_color;
	body.shape_stroke_opacity = args.shape_stroke_opacity;
	body.shape_stroke_width = args.shape_stroke_width;
	body.shape_stroke_line_cap = args.shape_stroke_line_cap;
	body.shape_roundness = args.shape_roundness;
	print_json(&client.add_layer(&body)?)
}

/// Add a repeater to one shape group.
pub fn run_add_repeater(client: &BridgeClient, args: RepeaterArgs) -> Result<()> {
	let RepeaterArgs {
		layer,
		group_index,
		name,
		copies,
		offset,
		position,
		scale,
		rotation,
		start_opacity,
		end_opacity,
	} = args;

	if group_index == 0 {
		return Err(BridgeError::InvalidArguments("group index is 1-based".to_owned()));
	}
	let body = AddShapeRepeater {
		layer: layer.selector()?,
		group_index,
		settings: RepeaterSettings {
			name,
			copies,
			offset,
			position,
			scale,
			rotation,
			start_opacity,
			end_opacity,
		},
	};
	print_json(&client.add_shape_repeater(&body)?)
}

/// Parent a layer, or clear its parent.
pub fn run_parent(client: &BridgeClient, args: ParentArgs) -> Result<()> {
	if args.parent_layer_id.is_none() && !args.clear_parent {
		return Err(BridgeError::InvalidArguments("Provide a parent layer id or clear parent.".to_owned()));
	}
	let body = ParentLayer {
		child_layer_id: args.child_layer_id,
		parent_layer_id: args.parent_layer_id,
	};
	print_json(&client.parent_layer(&body)?)
}

/// Move layers into a new composition.
pub fn run_precompose(client: &BridgeClient, args: PrecomposeArgs) -> Result<()> {
	let body = Precompose {
		layer_ids: args.layer_ids,
		name: args.name,
		move_all_attributes: args.move_all_attributes,
	};
	print_json(&client.precompose(&body)?)
}

pub fn run_duplicate(client: &BridgeClient, args: LayerIdArgs) -> Result<()> {
	print_json(&client.duplicate_layer(args.layer_id)?)
}

pub fn run_delete(client: &BridgeClient, args: LayerIdArgs) -> Result<()> {
	print_json(&client.delete_layer(args.layer_id)?)
}

/// Reorder a layer in the stack.
pub fn run_move_order(client: &BridgeClient, args: OrderArgs) -> Result<()> {
	let body = MoveLayerOrder {
		layer_id: args.layer_id,
		placement: args.placement()?,
	};
	print_json(&client.move_layer_order(&body)?)
}

#[cfg(test)]
mod tests {
	use aecli::bridge::LayerPlacement;

	use super::OrderArgs;

	fn order(before: Option<i64>, after: Option<i64>, to_top: bool, to_bottom: bool) -> OrderArgs {
		OrderArgs {
			layer_id: 3,
			before_layer_id: before,
			after_layer_id: after,
			to_top,
			to_bottom,
		}
	}

	#[test]
	fn order_requires_exactly_one_placement() {
		assert_eq!(order(Some(1), None, false, false).placement().expect("before"), LayerPlacement::Before(1));
		assert_eq!(order(None, None, false, true).placement().expect("bottom"), LayerPlacement::ToBottom(true));
		assert!(order(None, None, false, false).placement().is_err());
		assert!(order(Some(1), None, true, false).placement().is_err());
	}
}
