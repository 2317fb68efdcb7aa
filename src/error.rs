use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Every way a single `generate` call can fail. All variants are terminal:
/// the computation is pure, so a retry reproduces the same failure.
#[derive(Debug, Error)]
pub enum Error {
    /// Input text is not valid JSON.
    #[error("failed to parse JSON input: {0}")]
    Parse(#[from] serde_json::Error),

    /// Top-level array with nothing in it to sample.
    #[error("top-level array is empty, there is no element to sample a shape from")]
    EmptyArrayRoot,

    /// The (possibly array-unwrapped) root has no properties to declare.
    #[error("root value must be an object or an array of objects, found {found}")]
    UnsupportedRootShape { found: &'static str },

    #[error("nesting at {path} exceeds the maximum depth of {limit}")]
    MaxDepthExceeded { path: String, limit: usize },

    #[error("invalid root name {0:?}: expected a non-empty identifier")]
    InvalidRootName(String),
}
