use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, BridgeError>;

/// Fallback message when the bridge reports an error without one.
pub const UNKNOWN_BRIDGE_ERROR: &str = "Unknown error from After Effects bridge.";

/// Errors produced while talking to the bridge or exporting a scene.
#[derive(Debug, Error)]
pub enum BridgeError {
	/// Transport-level failure (connect, timeout, body read).
	#[error("http: {0}")]
	Http(#[from] reqwest::Error),
	/// Non-success HTTP status without a bridge error envelope.
	#[error("bridge returned HTTP {status}: {body}")]
	Status {
		/// HTTP status code.
		status: u16,
		/// Raw response body.
		body: String,
	},
	/// Bridge answered with `status != "success"`.
	#[error("{message}")]
	Bridge {
		/// Message reported by the bridge.
		message: String,
	},
	/// JSON encode or decode failure.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// Filesystem failure while reading inputs or writing outputs.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Layer selector did not name exactly one layer.
	#[error("Provide exactly one of layer id or layer name.")]
	InvalidLayerSelector,
	/// Composition selector did not name exactly one composition.
	#[error("Provide exactly one of comp id or comp name.")]
	InvalidCompSelector,
	/// User-supplied JSON argument did not parse.
	#[error("Invalid JSON for {label}: {source}")]
	InvalidJsonArgument {
		/// Argument label.
		label: String,
		/// Parser error.
		source: serde_json::Error,
	},
	/// Command arguments were individually valid but inconsistent.
	#[error("{0}")]
	InvalidArguments(String),
	/// No composition is active and no target was named.
	#[error("No active composition found.")]
	NoActiveComposition,
	/// A target composition was named but could not be activated.
	#[error("Could not resolve target composition.")]
	UnresolvedComposition,
	/// Scene document failed structural validation.
	#[error("invalid scene: {}", errors.join("; "))]
	InvalidScene {
		/// Validation errors in document order.
		errors: Vec<String>,
	},
	/// Unknown scene apply mode.
	#[error("Invalid scene apply mode '{mode}'. Use one of: merge, replace-managed, clear-all.")]
	InvalidApplyMode {
		/// Mode as given.
		mode: String,
	},
}
