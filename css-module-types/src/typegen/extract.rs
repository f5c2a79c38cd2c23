//! Lexical class-name extraction
//!
//! The scan does not parse CSS. Any `.name` sequence counts, including ones in
//! comments, string literals and `url(...)` file names.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

static CLASS_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\.([a-zA-Z][a-zA-Z0-9_-]*)").expect("class name pattern is valid")
});

/// Extract distinct class names from stylesheet text in order of first appearance
///
/// # Examples
///
/// ```
/// # use css_module_types::typegen::extract::class_names;
/// let names = class_names(".a { } .b:hover { } .a.c { }");
/// assert_eq!(names, vec!["a", "b", "c"]);
/// ```
#[must_use]
pub fn class_names(content: &str) -> Vec<String> {
    let mut seen = HashSet::new();

    CLASS_NAME
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|name| seen.insert(*name))
        .map(ToString::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_duplicates_collapse_in_first_order() {
        assert_eq!(class_names(".a {} .b {} .a {}"), vec!["a", "b"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(class_names("").is_empty());
    }

    #[test]
    fn test_comment_tokens_are_extracted() {
        assert_eq!(class_names("/* .ghost { color: red; } */"), vec!["ghost"]);
    }

    #[test]
    fn test_name_characters() {
        let css = ".btn-primary_large2 { } .card__title--active { }";
        assert_eq!(
            class_names(css),
            vec!["btn-primary_large2", "card__title--active"]
        );
    }

    #[test]
    fn test_leading_digit_or_symbol_not_matched() {
        assert!(class_names("margin: 0.5rem; width: 1.25em; .-x { } ._y { }").is_empty());
    }

    #[test]
    fn test_lexical_false_positives_kept() {
        let css = r#".hero { background: url("bg.png"); }"#;
        assert_eq!(class_names(css), vec!["hero", "png"]);
    }

    #[test]
    fn test_compound_selectors() {
        let css = ".card > .card-header, .card.active:hover { }";
        assert_eq!(class_names(css), vec!["card", "card-header", "active"]);
    }

    proptest! {
        #[test]
        fn prop_extraction_is_idempotent(content in "\\PC*") {
            prop_assert_eq!(class_names(&content), class_names(&content));
        }

        #[test]
        fn prop_extracted_names_are_distinct(content in "[.a-c0-9 _{}-]{0,64}") {
            let names = class_names(&content);
            let unique: HashSet<_> = names.iter().collect();
            prop_assert_eq!(unique.len(), names.len());
        }

        #[test]
        fn prop_every_name_appears_after_a_dot(content in "[.a-z0-9 _{}-]{0,64}") {
            for name in class_names(&content) {
                let needle = format!(".{name}");
                prop_assert!(content.contains(&needle));
            }
        }
    }
}
