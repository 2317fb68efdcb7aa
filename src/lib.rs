//! Infer TypeScript-style `export interface` declarations from a JSON sample.
//!
//! ```
//! let ts = json2interface::generate(r#"{"user": {"name": "Bob"}}"#, "Root").unwrap();
//! assert_eq!(
//!     ts,
//!     "export interface Root {\n  user: User;\n}\n\nexport interface User {\n  name: string;\n}"
//! );
//! ```
//!
//! Pipeline: parse → [`inference::walk`] → [`codegen::render`]. Each call owns
//! its own name registry, so calls are independent and may run in parallel.
pub mod classify;
pub mod codegen;
pub mod error;
pub mod inference;
pub mod ir;
pub mod naming;

use serde_json::Value;

pub use error::{Error, Result};
pub use ir::{Declaration, PropertyEntry, TypeRef};

pub const DEFAULT_ROOT_NAME: &str = "RootObject";

/// Nesting limit used unless configured otherwise. Kept below serde_json's own
/// parser recursion limit so parsed text always reaches the walker's guard first.
pub const DEFAULT_MAX_DEPTH: usize = 64;

#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub root_name: String,
    pub max_depth: usize,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            root_name: DEFAULT_ROOT_NAME.to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl GenerateOptions {
    #[must_use]
    pub fn with_root_name(mut self, root_name: impl Into<String>) -> Self {
        self.root_name = root_name.into();
        self
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// Parse `json_text` and render its interface declarations, root first.
pub fn generate(json_text: &str, root_name: &str) -> Result<String> {
    generate_with(json_text, &GenerateOptions::default().with_root_name(root_name))
}

pub fn generate_with(json_text: &str, options: &GenerateOptions) -> Result<String> {
    let value: Value = serde_json::from_str(json_text)?;
    generate_value(&value, options)
}

/// Same as [`generate_with`] for an already parsed tree.
pub fn generate_value(value: &Value, options: &GenerateOptions) -> Result<String> {
    let declarations = infer(value, options)?;
    Ok(codegen::render(&declarations))
}

/// Walker output without rendering.
pub fn infer(value: &Value, options: &GenerateOptions) -> Result<Vec<Declaration>> {
    inference::walk(value, &options.root_name, options.max_depth)
}
