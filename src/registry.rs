//! Registry of context producers.
//! Maps template names, either literally or through regular expressions,
//! to the functions that produce their render context.

use indexmap::IndexMap;
use log::debug;
use regex::Regex;

use crate::context::{empty_context, ContextFn};
use crate::error::{Error, RegistrationKind, Result};

/// A context producer keyed by a regular expression.
struct PatternEntry {
    /// Pattern as it was registered, used for duplicate detection
    source: String,
    /// Compiled form, anchored at the start of the template name
    regex: Regex,
    func: ContextFn,
}

/// Holds every context producer known to the site build.
///
/// The registry is filled once before rendering starts. Registration needs
/// `&mut self` while the render pass only borrows it shared, so it cannot
/// change once pages are being written.
#[derive(Default)]
pub struct ContextRegistry {
    by_name: IndexMap<String, ContextFn>,
    by_pattern: Vec<PatternEntry>,
}

impl ContextRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Associates `func` with the literal template name `name`.
    ///
    /// # Errors
    /// * `Error::DuplicateRegistration` if `name` already has a producer
    pub fn register_exact(&mut self, name: &str, func: ContextFn) -> Result<()> {
        if self.by_name.contains_key(name) {
            return Err(Error::DuplicateRegistration {
                kind: RegistrationKind::Exact,
                key: name.to_string(),
            });
        }
        debug!("Registered context for template '{name}'");
        self.by_name.insert(name.to_string(), func);
        Ok(())
    }

    /// Associates `func` with every template whose name matches `pattern`.
    ///
    /// Matching is anchored at the start of the name only, so `blog/` matches
    /// `blog/post.html`. Patterns are applied in registration order.
    ///
    /// # Errors
    /// * `Error::DuplicateRegistration` if `pattern` was registered before
    /// * `Error::InvalidPattern` if `pattern` does not compile
    pub fn register_pattern(&mut self, pattern: &str, func: ContextFn) -> Result<()> {
        if self.by_pattern.iter().any(|entry| entry.source == pattern) {
            return Err(Error::DuplicateRegistration {
                kind: RegistrationKind::Pattern,
                key: pattern.to_string(),
            });
        }
        let regex = Regex::new(&format!("^(?:{pattern})")).map_err(|source| {
            Error::InvalidPattern { pattern: pattern.to_string(), source }
        })?;
        debug!("Registered context for templates matching '{pattern}'");
        self.by_pattern.push(PatternEntry { source: pattern.to_string(), regex, func });
        Ok(())
    }

    /// Returns the producer registered for exactly `name`, if any.
    pub fn exact(&self, name: &str) -> Option<ContextFn> {
        self.by_name.get(name).copied()
    }

    /// Returns every producer that applies to `name`, in application order.
    ///
    /// Pattern producers come first in registration order, followed by the
    /// exact producer. Templates without an exact producer get one that
    /// yields an empty context.
    pub fn lookup(&self, name: &str) -> Vec<ContextFn> {
        let mut funcs: Vec<ContextFn> = self
            .by_pattern
            .iter()
            .filter(|entry| entry.regex.is_match(name))
            .map(|entry| entry.func)
            .collect();

        funcs.push(self.exact(name).unwrap_or(empty_context));
        funcs
    }
}

impl std::fmt::Debug for ContextRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContextRegistry")
            .field("names", &self.by_name.keys().collect::<Vec<_>>())
            .field(
                "patterns",
                &self.by_pattern.iter().map(|e| e.source.as_str()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
