//! Concept matching — decides whether two concept strings name the same idea.

/// Canonical key → alternate phrasings treated as the same concept.
pub const SYNONYM_GROUPS: &[(&str, &[&str])] = &[
    ("usestate", &["state", "setstate", "usestate hook", "state hook"]),
    (
        "useeffect",
        &["side effect", "effect hook", "componentdidmount", "lifecycle"],
    ),
    ("virtual dom", &["vdom", "reconciliation", "diffing"]),
    ("props", &["properties", "prop"]),
    ("context", &["context api", "usecontext", "provider"]),
    ("jsx", &["javascript xml", "syntax extension"]),
    ("memo", &["memoization", "usememo", "usecallback"]),
    ("ssr", &["server-side rendering", "server side rendering", "getserversideprops"]),
    ("ssg", &["static site generation", "static generation", "getstaticprops"]),
    ("isr", &["incremental static regeneration", "revalidate"]),
    ("redux", &["store", "reducer", "dispatch"]),
    ("xss", &["cross-site scripting", "cross site scripting", "dangerouslysetinnerhtml"]),
    ("csrf", &["cross-site request forgery", "cross site request forgery"]),
];

/// Returns true when `a` and `b` should count as the same concept.
///
/// Checks, in order: equality, substring containment either way, then
/// membership of both in one synonym group. Every check is symmetric, so
/// argument order never changes the result.
pub fn concepts_match(a: &str, b: &str) -> bool {
    let a = a.trim().to_lowercase();
    let b = b.trim().to_lowercase();

    if a == b {
        return true;
    }

    if a.contains(&b) || b.contains(&a) {
        return true;
    }

    SYNONYM_GROUPS
        .iter()
        .any(|(key, alternates)| in_group(&a, key, alternates) && in_group(&b, key, alternates))
}

fn in_group(concept: &str, key: &str, alternates: &[&str]) -> bool {
    concept == key || concept.contains(key) || alternates.iter().any(|alt| concept.contains(alt))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_ignores_case_and_padding() {
        assert!(concepts_match("  Virtual DOM ", "virtual dom"));
    }

    #[test]
    fn test_substring_either_direction() {
        assert!(concepts_match("hook", "custom hook"));
        assert!(concepts_match("custom hook", "hook"));
    }

    #[test]
    fn test_synonym_group_match() {
        assert!(concepts_match("usestate", "setstate"));
        assert!(concepts_match("vdom", "reconciliation"));
        assert!(concepts_match("ssr", "getserversideprops"));
    }

    #[test]
    fn test_synonym_match_is_symmetric() {
        let pairs = [
            ("useeffect", "lifecycle"),
            ("memoization", "usecallback"),
            ("xss", "dangerouslysetinnerhtml"),
            ("redux", "props"),
        ];
        for (a, b) in pairs {
            assert_eq!(concepts_match(a, b), concepts_match(b, a), "{a} / {b}");
        }
    }

    #[test]
    fn test_unrelated_concepts_do_not_match() {
        assert!(!concepts_match("hydration", "xss"));
        assert!(!concepts_match("jsx", "middleware"));
    }

    #[test]
    fn test_groups_do_not_bridge_each_other() {
        // "provider" belongs to context, "dispatch" to redux
        assert!(!concepts_match("provider", "dispatch"));
    }
}
