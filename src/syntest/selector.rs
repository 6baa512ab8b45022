//! Scope selector scoring for hosts without one of their own.
//!
//! A selector is a space-separated sequence of scopes, each of which must
//! match, in order, some scope in the scope stack. A selector scope matches a
//! stack scope when it equals it or is a dot-delimited prefix of it, so
//! `meta.function` matches `meta.function.parameters.example` but not
//! `meta.functional`.
//!
//! Only matching and relative specificity matter to the suggestion engine,
//! so the score is kept simple: deeper and more specific matches score higher,
//! and zero means no match.

/// Score `selector` against the space-separated `scope_name` stack.
pub fn score_selector(scope_name: &str, selector: &str) -> u32 {
    let stack: Vec<&str> = scope_name.split_whitespace().collect();
    let parts: Vec<&str> = selector.split_whitespace().collect();
    if parts.is_empty() {
        return 1;
    }

    let mut score = 0;
    let mut depth = 0;
    for part in parts {
        let found = stack[depth..]
            .iter()
            .position(|scope| scope_matches(scope, part));
        match found {
            Some(offset) => {
                depth += offset;
                let specificity = part.split('.').count() as u32;
                score += (depth as u32 + 1) * 8 + specificity;
                depth += 1;
            }
            None => return 0,
        }
    }
    score
}

fn scope_matches(scope: &str, selector: &str) -> bool {
    match scope.strip_prefix(selector) {
        Some(rest) => rest.is_empty() || rest.starts_with('.'),
        None => false,
    }
}
