/// Append-only log of export degradations, in the order they happened.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Warnings {
	entries: Vec<String>,
}

impl Warnings {
	/// Empty log.
	pub fn new() -> Self {
		Self::default()
	}

	/// Record one warning.
	pub fn push(&mut self, message: String) {
		tracing::debug!(warning = %message, "scene export warning");
		self.entries.push(message);
	}

	/// Recorded warnings.
	pub fn as_slice(&self) -> &[String] {
		&self.entries
	}

	/// Number of recorded warnings.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// True when nothing was recorded.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Take the recorded warnings.
	pub fn into_vec(self) -> Vec<String> {
		self.entries
	}
}
