//! # Placeholder Substitution
//!
//! Replaces `${NAME}` tokens with values from the job environment.
//!
//! - `${NAME}` is replaced when `NAME` is defined, otherwise left verbatim
//! - `${NAME:-fallback}` uses `fallback` when `NAME` is not defined
//! - `$${NAME}` escapes the placeholder and yields the literal `${NAME}`
//!
//! Values and fallbacks are expanded recursively. A reference back to a
//! variable that is still being expanded is left verbatim.

use regex::{Captures, Regex};
use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::warn;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\$\{[^}]*\}|\$\{([^}]*)\}")
        .expect("Failed to compile placeholder regex - this should never happen")
});

const DEFAULT_DELIMITER: &str = ":-";

/// Substitute every `${NAME}` placeholder in `template`
pub fn substitute(template: &str, variables: &HashMap<String, String>) -> String {
    expand(template, variables, &mut Vec::new())
}

/// `resolving` holds the names whose values are currently being expanded
fn expand(
    template: &str,
    variables: &HashMap<String, String>,
    resolving: &mut Vec<String>,
) -> String {
    if !template.contains("${") {
        return template.to_string();
    }

    PLACEHOLDER
        .replace_all(template, |caps: &Captures<'_>| {
            let token = &caps[0];
            match caps.get(1) {
                // Escaped: drop the leading `$`
                None => token[1..].to_string(),
                Some(expr) => resolve(expr.as_str(), variables, resolving)
                    .unwrap_or_else(|| token.to_string()),
            }
        })
        .into_owned()
}

fn resolve(
    expr: &str,
    variables: &HashMap<String, String>,
    resolving: &mut Vec<String>,
) -> Option<String> {
    let (name, fallback) = match expr.split_once(DEFAULT_DELIMITER) {
        Some((name, fallback)) => (name, Some(fallback)),
        None => (expr, None),
    };

    if name.is_empty() {
        return None;
    }

    if resolving.iter().any(|active| active == name) {
        warn!("Cyclic reference to `${{{}}}` left unresolved", name);
        return None;
    }

    match variables.get(name) {
        Some(value) => {
            resolving.push(name.to_string());
            let expanded = expand(value, variables, resolving);
            resolving.pop();
            Some(expanded)
        }
        None => fallback.map(|fallback| expand(fallback, variables, resolving)),
    }
}
