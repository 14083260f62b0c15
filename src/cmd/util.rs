use std::path::{Path, PathBuf};

use aecli::bridge::{BridgeError, LayerSelector, Result};
use serde::Serialize;
use serde_json::Value;

/// `--layer-id` / `--layer-name` pair shared by layer commands.
#[derive(clap::Args)]
pub struct LayerArgs {
	#[arg(long = "layer-id")]
	pub layer_id: Option<i64>,
	#[arg(long = "layer-name")]
	pub layer_name: Option<String>,
}

impl LayerArgs {
	/// Resolve to exactly one selector.
	pub fn selector(self) -> Result<LayerSelector> {
		LayerSelector::from_parts(self.layer_id, self.layer_name)
	}
}

/// Print a value as pretty JSON on stdout.
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
	println!("{}", serde_json::to_string_pretty(value)?);
	Ok(())
}

/// Parse a JSON command-line argument.
pub(crate) fn parse_json_arg(label: &str, raw: &str) -> Result<Value> {
	serde_json::from_str(raw).map_err(|source| BridgeError::InvalidJsonArgument {
		label: label.to_owned(),
		source,
	})
}

/// Parse an optional JSON argument.
pub(crate) fn parse_optional_json(label: &str, raw: Option<&str>) -> Result<Option<Value>> {
	raw.map(|raw| parse_json_arg(label, raw)).transpose()
}

/// Take exactly one of an inline value and a file path holding it.
pub(crate) fn inline_or_file(label: &str, inline: Option<String>, file: Option<PathBuf>) -> Result<String> {
	match (inline, file) {
		(Some(inline), None) => Ok(inline),
		(None, Some(path)) => read_file(&path),
		_ => Err(BridgeError::InvalidArguments(format!("Provide exactly one of {label} or {label} file."))),
	}
}

/// Read a UTF-8 file.
pub(crate) fn read_file(path: &Path) -> Result<String> {
	Ok(std::fs::read_to_string(path)?)
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use aecli::bridge::BridgeError;
	use serde_json::json;

	use super::{inline_or_file, parse_json_arg, parse_optional_json};

	#[test]
	fn json_arguments_report_their_label() {
		assert_eq!(parse_json_arg("value", "[1, 2]").expect("valid json"), json!([1, 2]));

		let err = parse_json_arg("ease-in", "[1,").expect_err("truncated json");
		assert!(matches!(&err, BridgeError::InvalidJsonArgument { label, .. } if label == "ease-in"));
		assert!(err.to_string().starts_with("Invalid JSON for ease-in:"));

		assert_eq!(parse_optional_json("ease-out", None).expect("absent"), None);
	}

	#[test]
	fn inline_and_file_are_mutually_exclusive() {
		assert_eq!(inline_or_file("expression", Some("time".to_owned()), None).expect("inline"), "time");
		assert!(matches!(inline_or_file("expression", None, None), Err(BridgeError::InvalidArguments(_))));

		let path = std::env::temp_dir().join(format!("ae-cli-util-{}.txt", std::process::id()));
		let mut file = std::fs::File::create(&path).expect("temp file");
		file.write_all(b"wiggle(2, 20)").expect("write temp file");
		assert_eq!(inline_or_file("expression", None, Some(path.clone())).expect("from file"), "wiggle(2, 20)");
		assert!(inline_or_file("expression", Some("time".to_owned()), Some(path.clone())).is_err());
		std::fs::remove_file(&path).expect("cleanup");
	}
}
