//! Client Logo Discovery
//!
//! Filtering and ordering of `public/clients/` file names. Shared with
//! `build.rs`, which bakes the result into the binary.

const PREFIX: &str = "worked-with-";
const EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "svg", "webp"];

/// `worked-with-<anything>.<image ext>`, case-insensitive
pub fn is_client_logo(file_name: &str) -> bool {
    let lower = file_name.to_ascii_lowercase();
    let Some(rest) = lower.strip_prefix(PREFIX) else {
        return false;
    };
    match rest.rsplit_once('.') {
        Some((stem, ext)) => !stem.is_empty() && EXTENSIONS.contains(&ext),
        None => false,
    }
}

/// Leading number after the prefix (`worked-with-12.png` -> 12), 0 if none
pub fn logo_number(file_name: &str) -> u32 {
    let lower = file_name.to_ascii_lowercase();
    lower
        .strip_prefix(PREFIX)
        .map(|rest| {
            rest.chars()
                .take_while(|c| c.is_ascii_digit())
                .collect::<String>()
        })
        .and_then(|digits| digits.parse().ok())
        .unwrap_or(0)
}

/// Keep logo files only, ordered by their number
pub fn sort_client_logos(names: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut logos: Vec<String> = names.into_iter().filter(|n| is_client_logo(n)).collect();
    logos.sort_by_key(|n| logo_number(n));
    logos
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_client_logo() {
        assert!(is_client_logo("worked-with-1.png"));
        assert!(is_client_logo("Worked-With-acme.WEBP"));
        assert!(!is_client_logo("worked-with-.png"));
        assert!(!is_client_logo("worked-with-3.gif"));
        assert!(!is_client_logo("logo-3.png"));
        assert!(!is_client_logo("worked-with-3"));
    }

    #[test]
    fn test_sort_numeric_not_lexical() {
        let names = vec![
            "worked-with-10.png".to_string(),
            "notes.txt".to_string(),
            "worked-with-2.svg".to_string(),
            "worked-with-1.jpg".to_string(),
        ];
        assert_eq!(
            sort_client_logos(names),
            vec!["worked-with-1.jpg", "worked-with-2.svg", "worked-with-10.png"]
        );
    }

    #[test]
    fn test_unnumbered_logos_sort_first() {
        assert_eq!(logo_number("worked-with-acme.png"), 0);
        let sorted = sort_client_logos(vec!["worked-with-4.png".to_string(), "worked-with-acme.png".to_string()]);
        assert_eq!(sorted[0], "worked-with-acme.png");
    }
}
