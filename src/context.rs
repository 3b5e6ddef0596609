//! Render contexts and their composition.

use indexmap::IndexMap;
use log::debug;

use crate::registry::ContextRegistry;

/// Variables handed to a template at render time.
pub type Context = IndexMap<String, serde_json::Value>;

/// A zero-argument, side-effect-free producer of a render context.
pub type ContextFn = fn() -> Context;

/// Producer used for templates that have no page-specific context.
pub fn empty_context() -> Context {
    Context::new()
}

/// Builds the full render context for the template `name`.
///
/// Every producer returned by [`ContextRegistry::lookup`] is invoked in order
/// and the results are merged left to right, so later keys override earlier
/// ones. Pattern contexts act as shared defaults and the exact context for
/// `name` is applied last. Between two matching patterns the one registered
/// later wins.
pub fn compose(registry: &ContextRegistry, name: &str) -> Context {
    let mut context = Context::new();
    for func in registry.lookup(name) {
        context.extend(func());
    }
    debug!("Composed context for '{}' with {} keys", name, context.len());
    context
}
