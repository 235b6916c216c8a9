//! Studly-aware English pluralization.

use apigen_core::split_last_studly_word;
use inflector::Inflector;

/// Irregular nouns checked before the general English rules.
const IRREGULAR: &[(&str, &str)] = &[
    ("child", "children"),
    ("foot", "feet"),
    ("goose", "geese"),
    ("man", "men"),
    ("mouse", "mice"),
    ("ox", "oxen"),
    ("person", "people"),
    ("tooth", "teeth"),
    ("virus", "viruses"),
    ("woman", "women"),
];

/// Nouns whose plural is the word itself.
const UNCOUNTABLE: &[&str] = &["equipment", "information", "media", "metadata"];

/// Pluralize the last word of a StudlyCase class name.
///
/// Only the trailing word changes and its casing is kept, so `BlogPost`
/// becomes `BlogPosts` and `SalesPerson` becomes `SalesPeople`.
///
/// # Example
///
/// ```
/// use apigen_codegen::pluralize_studly;
///
/// assert_eq!(pluralize_studly("Category"), "Categories");
/// assert_eq!(pluralize_studly("BlogPost"), "BlogPosts");
/// ```
pub fn pluralize_studly(word: &str) -> String {
    let (head, last) = split_last_studly_word(word);
    if last.is_empty() {
        return word.to_string();
    }
    format!("{}{}", head, pluralize_word(last))
}

fn pluralize_word(word: &str) -> String {
    let lower = word.to_lowercase();
    if UNCOUNTABLE.contains(&lower.as_str()) {
        return word.to_string();
    }
    let plural = IRREGULAR
        .iter()
        .find(|(singular, _)| *singular == lower)
        .map(|(_, plural)| plural.to_string())
        .unwrap_or_else(|| lower.to_plural());

    match_case(word, &plural)
}

/// Apply the casing of `original` to `plural`.
fn match_case(original: &str, plural: &str) -> String {
    let all_caps = original
        .chars()
        .filter(|c| c.is_alphabetic())
        .all(char::is_uppercase);
    if original.chars().count() > 1 && all_caps {
        return plural.to_uppercase();
    }

    let mut chars = plural.chars();
    match (original.chars().next(), chars.next()) {
        (Some(first), Some(c)) if first.is_uppercase() => c.to_uppercase().chain(chars).collect(),
        _ => plural.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_nouns() {
        assert_eq!(pluralize_studly("Blog"), "Blogs");
        assert_eq!(pluralize_studly("Category"), "Categories");
        assert_eq!(pluralize_studly("Product"), "Products");
        assert_eq!(pluralize_studly("Box"), "Boxes");
    }

    #[test]
    fn test_only_last_word_is_pluralized() {
        assert_eq!(pluralize_studly("BlogPost"), "BlogPosts");
        assert_eq!(pluralize_studly("ProductCategory"), "ProductCategories");
        assert_eq!(pluralize_studly("UserBlogCategory"), "UserBlogCategories");
    }

    #[test]
    fn test_irregular_nouns() {
        assert_eq!(pluralize_studly("Person"), "People");
        assert_eq!(pluralize_studly("SalesPerson"), "SalesPeople");
        assert_eq!(pluralize_studly("Child"), "Children");
        assert_eq!(pluralize_studly("Mouse"), "Mice");
        assert_eq!(pluralize_studly("Virus"), "Viruses");
    }

    #[test]
    fn test_uncountable_nouns() {
        assert_eq!(pluralize_studly("Media"), "Media");
        assert_eq!(pluralize_studly("SocialMedia"), "SocialMedia");
        assert_eq!(pluralize_studly("Information"), "Information");
    }

    #[test]
    fn test_casing_is_preserved() {
        assert_eq!(pluralize_studly("blog"), "blogs");
        assert_eq!(pluralize_studly("API"), "APIS");
        assert_eq!(pluralize_studly("BlogAPI"), "BlogAPIS");
    }

    #[test]
    fn test_resource_fallback_pluralizes() {
        assert_eq!(pluralize_studly("Resource"), "Resources");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(pluralize_studly(""), "");
    }
}
