//! Schema walker.
//!
//! Walks one parsed JSON tree and produces one [`Declaration`] per object-shaped
//! node, in pre-order (a parent is always emitted before the children it
//! references). Only one representative is sampled per array: the first
//! element. Nulls and empty arrays are not descended into and surface as
//! `any`. These are deliberate approximations, not errors.
//!
//! All state lives in a walker created per call, so concurrent walks never
//! see each other's name counters.
pub mod registry;
mod arr;
mod obj;

use serde_json::Value;
use tracing::debug;

use crate::classify::{classify, Kind};
use crate::error::{Error, Result};
use crate::ir::Declaration;
use crate::naming::is_identifier;

pub use registry::Registry;

struct Walker {
    registry: Registry,
    max_depth: usize,
}

impl Walker {
    fn new(max_depth: usize) -> Self {
        Self { registry: Registry::new(), max_depth }
    }

    fn check_depth(&self, depth: usize, path: &str) -> Result<()> {
        if depth > self.max_depth {
            return Err(Error::MaxDepthExceeded { path: path.to_string(), limit: self.max_depth });
        }
        Ok(())
    }

    fn into_declarations(self) -> Vec<Declaration> {
        self.registry.into_declarations()
    }
}

/// Infer the declaration set for `root`, naming the root declaration `root_name`.
///
/// A top-level array is unwrapped once by sampling its first element.
pub fn walk(root: &Value, root_name: &str, max_depth: usize) -> Result<Vec<Declaration>> {
    if !is_identifier(root_name) {
        return Err(Error::InvalidRootName(root_name.to_string()));
    }

    let (effective, path) = match classify(Some(root)) {
        Kind::Array(items) => (items.first().ok_or(Error::EmptyArrayRoot)?, "$[0]"),
        _ => (root, "$"),
    };
    let map = match classify(Some(effective)) {
        Kind::Object(map) => map,
        other => return Err(Error::UnsupportedRootShape { found: other.describe() }),
    };

    let mut walker = Walker::new(max_depth);
    walker.visit_object(map, root_name, 0, path)?;
    let declarations = walker.into_declarations();
    debug!(root = root_name, declarations = declarations.len(), "inferred declarations");
    Ok(declarations)
}

// ------------------------------- Tests ------------------------------------ //
