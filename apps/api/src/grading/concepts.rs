//! Concept extraction — pulls normalized domain terms out of free text.
//!
//! Two sources feed the result:
//! 1. Vocabulary hits: any `REACT_VOCABULARY` term found as a substring of the
//!    lower-cased text. Short terms can hit inside unrelated words ("ref" in
//!    "prefer"); scoring is calibrated against that, so it stays.
//! 2. Capitalized phrases: runs of whitespace-separated words of two or more
//!    letters that start with an uppercase letter ("Virtual DOM",
//!    "React Query"), lower-cased. Lone capitals like "I" or "A" are skipped;
//!    as one-letter concepts they would substring-match most targets.
//!
//! Output is de-duplicated and keeps insertion order: vocabulary order first,
//! then phrases in the order they appear.

use once_cell::sync::Lazy;
use regex::Regex;

/// Fixed vocabulary of React / Next.js terms, matched as lower-case substrings.
pub const REACT_VOCABULARY: &[&str] = &[
    // component model
    "component",
    "props",
    "children",
    "jsx",
    "functional component",
    "class component",
    "higher-order component",
    "composition",
    "lifecycle",
    "key",
    "ref",
    "portal",
    "fragment",
    // state and hooks
    "state",
    "hook",
    "usestate",
    "useeffect",
    "usecontext",
    "usereducer",
    "usememo",
    "usecallback",
    "useref",
    "custom hook",
    "context",
    "reducer",
    "redux",
    "immutable",
    "side effect",
    "dependency array",
    "memo",
    // rendering
    "virtual dom",
    "reconciliation",
    "diffing",
    "fiber",
    "render",
    "re-render",
    "hydration",
    "suspense",
    "lazy loading",
    "code splitting",
    "server component",
    "client component",
    "server-side rendering",
    "ssr",
    "static site generation",
    "ssg",
    "incremental static regeneration",
    "isr",
    "app router",
    "pages router",
    "dynamic route",
    "api route",
    "middleware",
    "layout",
    "getstaticprops",
    "getserversideprops",
    "caching",
    "streaming",
    // security
    "xss",
    "csrf",
    "sanitize",
    "escape",
    "dangerouslysetinnerhtml",
    "authentication",
    "authorization",
    "environment variable",
];

static CAPITALIZED_PHRASE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Z][A-Za-z]+(?:\s+[A-Z][A-Za-z]+)*\b").expect("static regex is valid")
});

/// Extracts the set of normalized concepts mentioned in `text`.
pub fn extract_concepts(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let mut concepts: Vec<String> = Vec::new();

    for term in REACT_VOCABULARY {
        if lower.contains(term) {
            push_unique(&mut concepts, (*term).to_string());
        }
    }

    for m in CAPITALIZED_PHRASE.find_iter(text) {
        push_unique(&mut concepts, m.as_str().to_lowercase());
    }

    concepts
}

fn push_unique(concepts: &mut Vec<String>, concept: String) {
    if !concepts.contains(&concept) {
        concepts.push(concept);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_has_no_concepts() {
        assert!(extract_concepts("").is_empty());
    }

    #[test]
    fn test_vocabulary_hits_are_case_insensitive() {
        let concepts = extract_concepts("I used useState and useEffect in my component.");
        assert!(concepts.contains(&"usestate".to_string()));
        assert!(concepts.contains(&"useeffect".to_string()));
        assert!(concepts.contains(&"component".to_string()));
    }

    #[test]
    fn test_capitalized_phrase_is_one_concept() {
        let concepts = extract_concepts("the Virtual DOM is cheap to diff");
        assert!(concepts.contains(&"virtual dom".to_string()));
    }

    #[test]
    fn test_capitalized_run_spans_whitespace_only() {
        let concepts = extract_concepts("we tried React Query. Then Next");
        assert!(concepts.contains(&"react query".to_string()));
        assert!(concepts.contains(&"then next".to_string()));
        assert!(!concepts.iter().any(|c| c.contains("query then")));
    }

    #[test]
    fn test_duplicates_collapse() {
        // "virtual dom" is both a vocabulary term and a capitalized phrase
        let concepts = extract_concepts("Virtual DOM, Virtual DOM");
        let count = concepts.iter().filter(|c| *c == "virtual dom").count();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_vocabulary_precedes_phrases() {
        let concepts = extract_concepts("Hooks let you use state");
        assert_eq!(concepts.first().map(String::as_str), Some("state"));
        assert_eq!(concepts.last().map(String::as_str), Some("hooks"));
    }

    #[test]
    fn test_single_letter_capitals_are_not_concepts() {
        assert!(extract_concepts("I have absolutely no clue about this topic.").is_empty());
        assert!(extract_concepts("A").is_empty());
        let concepts = extract_concepts("I think A Virtual DOM helps");
        assert_eq!(concepts, vec!["virtual dom".to_string()]);
    }

    #[test]
    fn test_short_terms_match_inside_words() {
        // "ref" inside "prefer" is a known false positive that scoring relies on
        let concepts = extract_concepts("i prefer tabs");
        assert!(concepts.contains(&"ref".to_string()));
    }

    #[test]
    fn test_lowercase_text_without_vocabulary_is_empty() {
        assert!(extract_concepts("nothing relevant at all here").is_empty());
    }
}
