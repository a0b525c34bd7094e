//! Pluralization utilities.

/// Return "s" suffix for plural counts
///
/// # Examples
///
/// - `plural_s(0)` -> `"s"` (0 routes)
/// - `plural_s(1)` -> `""` (1 route)
/// - `plural_s(5)` -> `"s"` (5 routes)
#[inline]
pub fn plural_s(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Format count with noun, handling pluralization
///
/// # Examples
///
/// - `plural_count(0, "route")` -> `"0 routes"`
/// - `plural_count(1, "route")` -> `"1 route"`
/// - `plural_count(3, "category")` -> `"3 categories"`
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {}", pluralize(noun))
    }
}

/// Words with identical singular and plural forms.
const UNCOUNTABLE: &[&str] = &[
    "audio", "bison", "cattle", "chassis", "data", "deer", "education", "equipment",
    "evidence", "feedback", "firmware", "fish", "furniture", "hardware", "information",
    "knowledge", "metadata", "money", "moose", "news", "offspring", "police", "rice",
    "series", "sheep", "software", "species", "swine", "traffic", "wheat",
];

/// Irregular singular -> plural pairs.
const IRREGULAR: &[(&str, &str)] = &[
    ("cactus", "cacti"),
    ("child", "children"),
    ("criterion", "criteria"),
    ("foot", "feet"),
    ("focus", "foci"),
    ("fungus", "fungi"),
    ("goose", "geese"),
    ("man", "men"),
    ("medium", "media"),
    ("mouse", "mice"),
    ("ox", "oxen"),
    ("person", "people"),
    ("tooth", "teeth"),
    ("woman", "women"),
];

/// Words ending in `us` that take `es`; any other word ending in `s` is
/// treated as already plural.
const US_TO_USES: &[&str] = &["alias", "bus", "campus", "census", "status", "virus"];

/// Words ending in `o` that take `es`.
const O_TO_OES: &[&str] = &["buffalo", "echo", "hero", "potato", "tomato", "veto"];

/// Pluralize an English noun.
///
/// The case of the first letter is preserved; an all-uppercase word stays
/// uppercase.
///
/// # Examples
///
/// - `pluralize("user")` -> `"users"`
/// - `pluralize("category")` -> `"categories"`
/// - `pluralize("Person")` -> `"People"`
/// - `pluralize("sheep")` -> `"sheep"`
pub fn pluralize(word: &str) -> String {
    if word.is_empty() {
        return String::new();
    }

    let lower = word.to_lowercase();
    let plural = pluralize_lower(&lower);
    match_case(word, &plural)
}

/// Pluralize only the last `_`-separated word of a snake_case name.
///
/// `blog_post` -> `blog_posts`, `sales_person` -> `sales_people`
pub fn pluralize_last_word(snake: &str) -> String {
    match snake.rsplit_once('_') {
        Some((head, last)) if !last.is_empty() => format!("{head}_{}", pluralize(last)),
        _ => pluralize(snake),
    }
}

fn pluralize_lower(word: &str) -> String {
    if UNCOUNTABLE.contains(&word) {
        return word.to_string();
    }
    if let Some((_, plural)) = IRREGULAR.iter().find(|(singular, _)| *singular == word) {
        return (*plural).to_string();
    }

    if let Some(stem) = word.strip_suffix("quiz") {
        return format!("{stem}quizzes");
    }
    for stem in ["matr", "vert", "ind"] {
        for suffix in ["ix", "ex"] {
            if word.len() == stem.len() + suffix.len()
                && word.starts_with(stem)
                && word.ends_with(suffix)
            {
                return format!("{stem}ices");
            }
        }
    }
    if US_TO_USES.contains(&word) {
        return format!("{word}es");
    }
    if let Some(stem) = word.strip_suffix("sis") {
        return format!("{stem}ses");
    }
    if ["x", "ch", "ss", "sh", "z"].iter().any(|s| word.ends_with(s)) {
        return format!("{word}es");
    }
    if word.ends_with('s') {
        return word.to_string();
    }
    if let Some(stem) = word.strip_suffix('y')
        && !stem.is_empty()
        && !stem.ends_with(['a', 'e', 'i', 'o', 'u'])
    {
        return format!("{stem}ies");
    }
    if let Some(stem) = word.strip_suffix("fe")
        && !stem.is_empty()
        && !stem.ends_with('f')
    {
        return format!("{stem}ves");
    }
    if let Some(stem) = word.strip_suffix('f')
        && stem.ends_with(['l', 'r'])
    {
        return format!("{stem}ves");
    }
    if O_TO_OES.contains(&word) {
        return format!("{word}es");
    }

    format!("{word}s")
}

/// Apply the casing of `original` to the lowercase `plural`.
fn match_case(original: &str, plural: &str) -> String {
    let has_lower = original.chars().any(char::is_lowercase);
    if !has_lower && original.chars().any(char::is_uppercase) {
        return plural.to_uppercase();
    }

    let mut chars = plural.chars();
    match (original.chars().next(), chars.next()) {
        (Some(first), Some(head)) if first.is_uppercase() => {
            head.to_uppercase().chain(chars).collect()
        }
        _ => plural.to_string(),
    }
}
