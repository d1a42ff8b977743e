//! Default macro bindings and the reserved name set.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Names bound from moderation context on every render. Custom macros may not use them.
pub const RESERVED_MACRO_NAMES: [&str; 9] = [
    "submission",
    "subreddit",
    "author",
    "kind",
    "mod",
    "title",
    "url",
    "domain",
    "link",
];

/// Whether `name` is one of the reserved default macro names
pub fn is_reserved(name: &str) -> bool {
    RESERVED_MACRO_NAMES.contains(&name)
}

/// Name → value map of default macros for a single render.
///
/// Built fresh per invocation and never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MacroBindings(BTreeMap<String, String>);

impl MacroBindings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Drop every binding that is not a reserved default name
    pub fn only_reserved(mut self) -> Self {
        self.0.retain(|name, _| is_reserved(name));
        self
    }
}

impl<K, V> FromIterator<(K, V)> for MacroBindings
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut bindings = Self::new();
        for (name, value) in iter {
            bindings.insert(name, value);
        }
        bindings
    }
}
