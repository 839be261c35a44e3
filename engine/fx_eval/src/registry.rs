//! Thread-safe function registry.
//!
//! Keys are `FunctionExpressionName`s, which hash and compare on their
//! case-folded text, so `SUM` and `sum` find the same entry.

use std::fmt;
use std::sync::Arc;

use fx_name::{CaseSensitivity, FunctionExpressionName};
use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::SharedFunction;

/// Functions by name, shared between clones.
///
/// Uses `Arc<RwLock<_>>` so functions can be added after a context was
/// built and handed to other threads.
#[derive(Clone, Default)]
pub struct FunctionRegistry(Arc<RwLock<FxHashMap<FunctionExpressionName, SharedFunction>>>);

impl FunctionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `function` under its own name, returning the one it replaced.
    pub fn register(&self, function: SharedFunction) -> Option<SharedFunction> {
        let name = function.name().clone();
        tracing::trace!(function = %name, "registering function");
        self.0.write().insert(name, function)
    }

    pub fn get(&self, name: &FunctionExpressionName) -> Option<SharedFunction> {
        self.0.read().get(name).cloned()
    }

    pub fn contains(&self, name: &FunctionExpressionName) -> bool {
        self.0.read().contains_key(name)
    }

    pub fn remove(&self, name: &FunctionExpressionName) -> Option<SharedFunction> {
        self.0.write().remove(name)
    }

    pub fn len(&self) -> usize {
        self.0.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.read().is_empty()
    }

    /// Registered names in case-insensitive order.
    pub fn names(&self) -> Vec<FunctionExpressionName> {
        let mut names: Vec<_> = self.0.read().keys().cloned().collect();
        let comparator = FunctionExpressionName::comparator(CaseSensitivity::Insensitive);
        names.sort_by(|a, b| comparator.compare(a, b));
        names
    }
}

impl fmt::Debug for FunctionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FunctionRegistry").field(&self.names()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BasicFunction, Value};
    use fx_expr::Arity;
    use pretty_assertions::assert_eq;

    fn name(text: &str) -> FunctionExpressionName {
        FunctionExpressionName::with(text).unwrap_or_else(|e| panic!("{e}"))
    }

    fn constant(text: &str, value: bool) -> SharedFunction {
        BasicFunction::new(name(text), Arity::Exact(0), move |_, _| Ok(Value::from(value))).shared()
    }

    #[test]
    fn lookup_ignores_case() {
        let registry = FunctionRegistry::new();
        assert!(registry.register(constant("Sum", true)).is_none());
        assert!(registry.contains(&name("SUM")));
        assert!(registry.get(&name("sum")).is_some());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn register_replaces_same_folded_name() {
        let registry = FunctionRegistry::new();
        let first = constant("max", true);
        registry.register(Arc::clone(&first));
        let replaced = registry.register(constant("MAX", false));
        assert!(replaced.is_some_and(|f| Arc::ptr_eq(&f, &first)));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn clones_share_entries() {
        let registry = FunctionRegistry::new();
        let clone = registry.clone();
        clone.register(constant("now", true));
        assert!(registry.contains(&name("now")));
        assert!(registry.remove(&name("NOW")).is_some());
        assert!(clone.is_empty());
    }

    #[test]
    fn names_are_sorted_insensitively() {
        let registry = FunctionRegistry::new();
        for text in ["hello", "XYZ", "def"] {
            registry.register(constant(text, true));
        }
        let names: Vec<String> = registry.names().iter().map(|n| n.as_str().to_string()).collect();
        assert_eq!(names, ["def", "hello", "XYZ"]);
    }
}
