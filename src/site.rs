//! Content of the site itself: navigation, page data and the context
//! registrations that hand them to templates.

use serde::Serialize;
use serde_json::json;

use crate::context::Context;
use crate::error::Result;
use crate::registry::ContextRegistry;

/// A navigation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub href: &'static str,
    pub caption: &'static str,
}

/// An entry on the projects page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    pub date: &'static str,
    pub name: &'static str,
    pub link: &'static str,
    pub image: &'static str,
    pub description: &'static str,
}

pub const NAVIGATION: [Link; 4] = [
    Link { href: "index.html", caption: "Dillon" },
    Link { href: "dillonhicks-resume.pdf", caption: "Résumé" },
    Link { href: "projects.html", caption: "Projects" },
    Link { href: "contact.html", caption: "Contact" },
];

/// Every html page
pub const BASE_PATTERN: &str = r"^.+html$";

/// Shared context: the site navigation.
pub fn base_context() -> Context {
    Context::from([("navigation".to_string(), json!(NAVIGATION))])
}

/// Context for `projects.html`.
pub fn projects_context() -> Context {
    let dillonio = Project {
        date: "April 2016",
        name: "DillonHicks.io",
        link: "https://github.com/vengefuldrx/dillonhicks.io",
        image: "img/dillonhicksioflavicon.jpg",
        description: "A game I developed on a Saturday morning to learn more about JavaScript.",
    };
    let breakout = Project {
        date: "April 2016",
        name: "Breakout",
        link: "proj-breakout.html",
        image: "img/breakout.png",
        description: "A game I developed on a Saturday morning to learn more about JavaScript.",
    };

    Context::from([("projects".to_string(), json!([dillonio, breakout]))])
}

/// Registers the site's context producers.
pub fn register_contexts(registry: &mut ContextRegistry) -> Result<()> {
    registry.register_pattern(BASE_PATTERN, base_context)?;
    registry.register_exact("projects.html", projects_context)?;
    Ok(())
}

/// Builds the registry for this site. Call once, before rendering.
pub fn registry() -> Result<ContextRegistry> {
    let mut registry = ContextRegistry::new();
    register_contexts(&mut registry)?;
    Ok(registry)
}
