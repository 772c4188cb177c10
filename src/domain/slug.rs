/// Derive a URL-safe slug from a post title.
///
/// Lowercases the title, drops everything except ASCII alphanumerics,
/// spaces and hyphens, turns space runs into a single hyphen,
/// collapses repeated hyphens and trims hyphens from both ends.
/// Titles made only of symbols produce an empty slug.
pub fn generate_slug(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    for c in title.chars() {
        let c = c.to_ascii_lowercase();
        if c.is_ascii_alphanumeric() {
            slug.push(c);
        } else if (c == ' ' || c == '-') && !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}
