use serde_json::{Map, Value};
use tracing::trace;

use super::Walker;
use crate::classify::{classify, Kind};
use crate::error::Result;
use crate::ir::{PropertyEntry, TypeRef};
use crate::naming::{propose_name, property_name};

impl Walker {
    /// Declare `map` under a name derived from `proposed` and return that name.
    ///
    /// The declaration is opened before any child is visited, so children are
    /// registered after their parent.
    pub(super) fn visit_object(
        &mut self,
        map: &Map<String, Value>,
        proposed: &str,
        depth: usize,
        path: &str,
    ) -> Result<String> {
        self.check_depth(depth, path)?;
        let name = self.registry.reserve_name(proposed);
        let slot = self.registry.open(name.clone());
        trace!(%name, path, keys = map.len(), "visiting object");

        let mut properties = Vec::with_capacity(map.len());
        for (key, value) in map {
            let child_path = format!("{path}.{key}");
            let (ty, optional) = match classify(Some(value)) {
                Kind::Primitive(p) => (TypeRef::primitive(p), false),
                Kind::Null => (TypeRef::Dynamic, true),
                Kind::Array(items) => {
                    (self.resolve_array_type(items, key, depth, &child_path)?, false)
                }
                Kind::Object(child) => {
                    let child_name = self.visit_object(child, &propose_name(key), depth + 1, &child_path)?;
                    (TypeRef::named(child_name), false)
                }
            };
            properties.push(PropertyEntry {
                name: property_name(key),
                key: key.clone(),
                ty,
                optional,
            });
        }

        self.registry.get_mut(slot).properties = properties;
        Ok(name)
    }
}
