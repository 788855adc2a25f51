//! Name-to-value bindings threaded through evaluation

use crate::value::{EvalResult, RuntimeError, Value};
use std::collections::{BTreeMap, HashMap};

/// Mutable mapping from identifier to value
///
/// One environment is shared by every statement of a run. Lookups never
/// mutate it, and there is no scoping: loops and assignments write straight
/// into the same map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    bindings: HashMap<String, Value>,
}

impl Environment {
    /// Create an empty environment
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow the value bound to `name`
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    /// Look up `name`, failing with `UnboundName` when absent
    pub fn lookup(&self, name: &str) -> EvalResult<Value> {
        self.bindings
            .get(name)
            .cloned()
            .ok_or_else(|| RuntimeError::UnboundName {
                name: name.to_string(),
            })
    }

    /// Bind `name`, returning the value it replaced
    pub fn bind(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        self.bindings.insert(name.into(), value)
    }

    /// Commit several bindings in order; a repeated name keeps its last value
    pub fn extend<I>(&mut self, bindings: I)
    where
        I: IntoIterator<Item = (String, Value)>,
    {
        self.bindings.extend(bindings);
    }

    /// Check whether `name` is bound
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Number of bindings
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Check whether nothing is bound
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Iterate over bindings in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.bindings.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Bindings sorted by name
    pub fn snapshot(&self) -> BTreeMap<String, Value> {
        self.bindings
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Environment {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self {
            bindings: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
