//! Shared string utilities for name derivation.

/// Convert a string to StudlyCase (e.g., "create_blog" -> "CreateBlog").
///
/// Splits on underscores, dashes and whitespace and upper-cases the first
/// letter of each part. Existing inner capitals are kept.
pub fn to_studly_case(s: &str) -> String {
    s.split(|c: char| c == '_' || c == '-' || c.is_whitespace())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

/// Split a StudlyCase word before its last capitalised word.
///
/// `"BlogPost"` splits into `("Blog", "Post")`; a word without an inner
/// boundary is returned whole as the second element. Runs of capitals stay
/// together, so `"BlogAPI"` splits into `("Blog", "API")`.
pub fn split_last_studly_word(s: &str) -> (&str, &str) {
    let chars: Vec<(usize, char)> = s.char_indices().collect();
    let split_at = (1..chars.len())
        .filter(|&i| {
            let (_, c) = chars[i];
            let prev = chars[i - 1].1;
            let next_is_lower = chars.get(i + 1).is_some_and(|(_, n)| n.is_lowercase());
            c.is_uppercase() && (!prev.is_uppercase() || next_is_lower)
        })
        .map(|i| chars[i].0)
        .last()
        .unwrap_or(0);
    s.split_at(split_at)
}
