use thiserror::Error;

/// Failures that abort building a visualization.
///
/// Every variant is fatal: the scene is discarded and nothing is attached to
/// the canvas.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VisError {
	#[error("atom id `{0}` has no numeric suffix")]
	MalformedAtomId(String),

	#[error("edge {from} -> {to} references a vertex outside 0..{vertex_count}")]
	DanglingEdgeReference {
		from: usize,
		to: usize,
		vertex_count: usize,
	},

	#[error("vertex {vertex} is assigned color {color} but only {color_count} colors exist")]
	ColorSlotOutOfRange {
		vertex: usize,
		color: usize,
		color_count: usize,
	},

	#[error("unknown field `{0}`")]
	UnknownField(String),

	#[error("invalid instance: {0}")]
	InvalidInstance(String),
}

impl From<serde_json::Error> for VisError {
	fn from(err: serde_json::Error) -> Self {
		VisError::InvalidInstance(err.to_string())
	}
}
