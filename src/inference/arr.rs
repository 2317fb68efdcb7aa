use serde_json::Value;

use super::Walker;
use crate::classify::{classify, Kind};
use crate::error::Result;
use crate::ir::TypeRef;
use crate::naming::propose_name;

impl Walker {
    /// Element type of the array found under `key`, unwrapping nested arrays.
    ///
    /// Each level samples only its first element. An empty level has nothing
    /// to sample, so the element type collapses to `Dynamic` at that depth.
    pub(super) fn resolve_array_type(
        &mut self,
        items: &[Value],
        key: &str,
        depth: usize,
        path: &str,
    ) -> Result<TypeRef> {
        let mut dims = 1;
        let mut level = depth + 1;
        self.check_depth(level, path)?;

        let mut path = path.to_string();
        let mut sample = items.first();
        let element = loop {
            path.push_str("[0]");
            match classify(sample) {
                Kind::Array(inner) => {
                    dims += 1;
                    level += 1;
                    self.check_depth(level, &path)?;
                    sample = inner.first();
                }
                Kind::Null => break TypeRef::Dynamic,
                Kind::Primitive(p) => break TypeRef::primitive(p),
                Kind::Object(map) => {
                    let name = self.visit_object(map, &propose_name(key), level + 1, &path)?;
                    break TypeRef::named(name);
                }
            }
        };
        Ok(TypeRef::array(element, dims))
    }
}
