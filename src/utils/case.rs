//! Case conversion utilities.

/// Convert a type-like name to snake_case.
///
/// Each whitespace-separated word is capitalized and the words are joined,
/// then an `_` is inserted before every uppercase letter that follows another
/// character. Already-lowercase input without whitespace is returned as is.
///
/// # Examples
///
/// - `snake_case("BlogPost")` -> `"blog_post"`
/// - `snake_case("blog post")` -> `"blog_post"`
/// - `snake_case("HTMLParser")` -> `"h_t_m_l_parser"`
/// - `snake_case("user")` -> `"user"`
pub fn snake_case(value: &str) -> String {
    if !value.chars().any(|c| c.is_uppercase() || c.is_whitespace()) {
        return value.to_string();
    }

    let joined: String = value.split_whitespace().map(capitalize).collect();

    let mut out = String::with_capacity(joined.len() + 4);
    for (i, c) in joined.chars().enumerate() {
        if i > 0 && c.is_uppercase() {
            out.push('_');
        }
        out.extend(c.to_lowercase());
    }
    out
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case() {
        assert_eq!(snake_case("BlogPost"), "blog_post");
        assert_eq!(snake_case("User"), "user");
        assert_eq!(snake_case("userProfile"), "user_profile");
    }

    #[test]
    fn test_acronyms_split_per_letter() {
        assert_eq!(snake_case("HTMLParser"), "h_t_m_l_parser");
    }

    #[test]
    fn test_whitespace() {
        assert_eq!(snake_case("blog post"), "blog_post");
        assert_eq!(snake_case("  Blog   Post "), "blog_post");
    }

    #[test]
    fn test_lowercase_passthrough() {
        assert_eq!(snake_case("user"), "user");
        assert_eq!(snake_case("blog_post"), "blog_post");
    }
}
