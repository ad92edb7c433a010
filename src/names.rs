//! Catalog item names
//!
//! Catalog items are stored under a slug: whitespace runs collapsed to single
//! hyphens, lower-cased. Display layers reverse the transform for
//! presentation. The slug is the collection's dedup key.

/// Slugs a display name for storage: `"Iced  Tea"` → `"iced-tea"`.
pub fn normalize(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}

/// Renders a stored slug for display: `"iced-tea"` → `"Iced Tea"`.
pub fn display(slug: &str) -> String {
    slug.split('-')
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();

    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
