//! Shared slug predicates and slug generation for record identifiers.
//!
//! Slugs are trimmed, non-empty identifiers composed of lowercase ASCII
//! letters, digits, and single hyphens between words.

/// Fallback slug used when a title contains no slug characters.
pub const FALLBACK_SLUG: &str = "course";

/// Return `true` when `value` is a valid slug.
#[must_use]
pub fn is_valid_slug(value: &str) -> bool {
    is_trimmed_non_empty(value) && has_allowed_slug_chars(value) && hyphens_separate_words(value)
}

fn is_trimmed_non_empty(value: &str) -> bool {
    !value.is_empty() && value.trim() == value
}

fn has_allowed_slug_chars(value: &str) -> bool {
    value
        .chars()
        .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-')
}

fn hyphens_separate_words(value: &str) -> bool {
    value.split('-').all(|word| !word.is_empty())
}

/// Derive a slug from free text.
///
/// ASCII letters and digits are kept (lowercased); every other run of
/// characters collapses into one hyphen. Leading and trailing hyphens are
/// dropped.
///
/// # Examples
/// ```
/// use course_manager::domain::slug::slugify;
///
/// assert_eq!(slugify("Clean Code: Writing Code for Humans"), "clean-code-writing-code-for-humans");
/// assert_eq!(slugify("  ***  "), "course");
/// ```
#[must_use]
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_hyphen = false;
    for ch in text.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }
    if slug.is_empty() {
        FALLBACK_SLUG.to_owned()
    } else {
        slug
    }
}

/// Derive a slug from `text` that `is_taken` does not reject.
///
/// Collisions are resolved with numeric suffixes starting at `-2`.
pub fn unique_slug(text: &str, is_taken: impl Fn(&str) -> bool) -> String {
    let base = slugify(text);
    if !is_taken(&base) {
        return base;
    }
    (2_u32..)
        .map(|suffix| format!("{base}-{suffix}"))
        .find(|candidate| !is_taken(candidate))
        .unwrap_or(base)
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Web Component Fundamentals", "web-component-fundamentals")]
    #[case("Becoming an Outlier: Reprogramming", "becoming-an-outlier-reprogramming")]
    #[case("--React & Flux--", "react-flux")]
    #[case("C# 101", "c-101")]
    #[case("Café", "caf")]
    #[case("!!!", FALLBACK_SLUG)]
    fn slugify_produces_valid_slugs(#[case] title: &str, #[case] expected: &str) {
        let slug = slugify(title);
        assert_eq!(slug, expected);
        assert!(is_valid_slug(&slug));
    }

    #[rstest]
    #[case("", false)]
    #[case(" clean-code", false)]
    #[case("Clean-Code", false)]
    #[case("clean_code", false)]
    #[case("clean-code-2", true)]
    #[case("-", false)]
    #[case("a--b", false)]
    #[case("-lead", false)]
    #[case("trail-", false)]
    fn validates_slugs(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(is_valid_slug(value), expected);
    }

    #[rstest]
    fn unique_slug_appends_suffix_on_collision() {
        let taken = ["clean-code", "clean-code-2"];
        let slug = unique_slug("Clean Code", |candidate| taken.contains(&candidate));
        assert_eq!(slug, "clean-code-3");
    }

    #[rstest]
    fn unique_slug_keeps_base_when_free() {
        assert_eq!(unique_slug("Clean Code", |_| false), "clean-code");
    }
}
