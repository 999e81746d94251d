use deunicode::deunicode;
use regex::Regex;
use std::sync::OnceLock;

/// Width of the `product.slug` column.
pub const MAX_SLUG_LEN: usize = 170;

fn separators() -> &'static Regex {
    static SEPARATORS: OnceLock<Regex> = OnceLock::new();
    SEPARATORS.get_or_init(|| Regex::new(r"[^a-z0-9]+").expect("valid slug regex"))
}

/// Turns a product title into a url-safe key: transliterated to ascii,
/// lowercase alphanumerics separated by single dashes, at most
/// `MAX_SLUG_LEN` long. Returns an empty string when nothing survives.
pub fn slugify(title: &str) -> String {
    let lowered = deunicode(title).to_lowercase();
    let slug = separators().replace_all(&lowered, "-");
    let slug = slug.trim_matches('-');

    // ascii only at this point, any byte index is a char boundary
    let end = slug.len().min(MAX_SLUG_LEN);
    slug[..end].trim_end_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_title() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("  The  Witcher 3: Wild Hunt!! "), "the-witcher-3-wild-hunt");
        assert_eq!(slugify("already-a-slug"), "already-a-slug");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_slugify_transliterates() {
        assert_eq!(slugify("Café crème"), "cafe-creme");
        assert_eq!(slugify("Pokémon Légendes"), "pokemon-legendes");
        assert_eq!(slugify("Привет мир"), "privet-mir");
        assert_eq!(slugify("Москва 2"), "moskva-2");
    }

    #[test]
    fn test_slugify_fits_column() {
        let slug = slugify(&"Щука ".repeat(60));
        assert!(slug.len() <= MAX_SLUG_LEN);
        assert!(slug.starts_with("shchuka-"));
        assert!(!slug.ends_with('-'));
    }
}
