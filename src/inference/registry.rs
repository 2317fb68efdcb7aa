use std::collections::HashSet;

use indexmap::IndexMap;
use tracing::debug;

use crate::ir::Declaration;

/// Per-walk collection of declarations plus the counters used to keep their
/// names unique. Owned by a single walk; never shared between calls.
#[derive(Debug, Default)]
pub struct Registry {
    declarations: Vec<Declaration>,
    /// lowercased proposed name → how many times it was proposed
    proposals: IndexMap<String, usize>,
    /// lowercased names already handed out
    taken: HashSet<String>,
}

impl Registry {
    pub fn new() -> Self { Self::default() }

    /// Unique (case-insensitively) name for `proposed`: unchanged the first
    /// time, then `proposed2`, `proposed3`, …
    pub fn reserve_name(&mut self, proposed: &str) -> String {
        let folded = proposed.to_lowercase();
        let mut seen = self.proposals.get(&folded).copied().unwrap_or(0);
        let mut candidate = suffixed(proposed, seen);
        while self.taken.contains(&candidate.to_lowercase()) {
            seen += 1;
            candidate = suffixed(proposed, seen);
        }
        self.proposals.insert(folded, seen + 1);
        self.taken.insert(candidate.to_lowercase());
        if candidate != proposed {
            debug!(proposed, reserved = %candidate, "disambiguated declaration name");
        }
        candidate
    }

    /// Appends an empty declaration and returns its slot.
    pub fn open(&mut self, name: String) -> usize {
        self.declarations.push(Declaration::new(name));
        self.declarations.len() - 1
    }

    pub fn get_mut(&mut self, slot: usize) -> &mut Declaration {
        &mut self.declarations[slot]
    }

    pub fn len(&self) -> usize { self.declarations.len() }

    pub fn is_empty(&self) -> bool { self.declarations.is_empty() }

    pub fn into_declarations(self) -> Vec<Declaration> { self.declarations }
}

fn suffixed(proposed: &str, seen: usize) -> String {
    if seen == 0 { proposed.to_string() } else { format!("{proposed}{}", seen + 1) }
}
