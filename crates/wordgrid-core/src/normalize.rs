//! Phrase canonicalization and shared-letter lookup.

use unicode_general_category::{get_general_category, GeneralCategory};

/// True for the letter categories `Lu`, `Ll`, `Lt`, `Lm` and `Lo`.
/// Number letters, symbols and combining marks are excluded.
fn is_letter(ch: char) -> bool {
    matches!(
        get_general_category(ch),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// Reduce a phrase to the letters that get written into the grid.
///
/// Every letter (any script) is uppercased and hyphens are kept;
/// everything else is dropped. Leading and trailing hyphens are
/// trimmed, so `normalize(normalize(x)) == normalize(x)`.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch == '-' {
            out.push('-');
        } else if is_letter(ch) {
            // Some uppercase mappings expand to combining marks; keep letters only
            out.extend(ch.to_uppercase().filter(|&c| is_letter(c)));
        }
    }
    out.trim_matches('-').to_string()
}

/// Normalized letters as a char vector, the form every placer works on
pub fn normalized_chars(text: &str) -> Vec<char> {
    normalize(text).chars().collect()
}

/// Every `(i, j)` with `a[i] == b[j]`, in row-major order of `(i, j)`
pub fn find_intersections(a: &[char], b: &[char]) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for (i, ca) in a.iter().enumerate() {
        for (j, cb) in b.iter().enumerate() {
            if ca == cb {
                pairs.push((i, j));
            }
        }
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_basic() {
        assert_eq!(normalize("hello world"), "HELLOWORLD");
        assert_eq!(normalize("  well-known! "), "WELL-KNOWN");
        assert_eq!(normalize("--abc--"), "ABC");
        assert_eq!(normalize("R2-D2"), "R-D");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("123 !?"), "");
    }

    #[test]
    fn test_normalize_unicode() {
        assert_eq!(normalize("über"), "ÜBER");
        assert_eq!(normalize("привет"), "ПРИВЕТ");
        assert_eq!(normalize("straße"), "STRASSE");
        assert_eq!(normalize("l'été"), "LÉTÉ");
        // Number letters, enclosed symbols and combining marks are not letters
        assert_eq!(normalize("Ⅻ"), "");
        assert_eq!(normalize("ⓐbc"), "BC");
        assert_eq!(normalize("हिंदी"), "हद");
        assert_eq!(normalize("e\u{301}te"), "ETE");
    }

    #[test]
    fn test_normalize_idempotent() {
        for input in [
            "hello world",
            "-a-b-",
            "Ärger - frei",
            "ΐ test",
            "ǅemal",
            "---",
            "x",
            "Grüß Gott!",
        ] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "not idempotent for {:?}", input);
        }
    }

    #[test]
    fn test_find_intersections() {
        let a: Vec<char> = "CROSS".chars().collect();
        let b: Vec<char> = "ROSS".chars().collect();
        let pairs = find_intersections(&a, &b);
        assert!(pairs.contains(&(1, 0)));
        assert!(pairs.contains(&(2, 1)));
        assert!(pairs.contains(&(3, 2)));
        assert!(pairs.contains(&(4, 3)));
        assert!(pairs.contains(&(3, 3)));
        assert_eq!(pairs.len(), 6);
        for (i, j) in pairs {
            assert_eq!(a[i], b[j]);
        }
    }

    #[test]
    fn test_no_intersections() {
        let a: Vec<char> = "ABC".chars().collect();
        let b: Vec<char> = "XYZ".chars().collect();
        assert!(find_intersections(&a, &b).is_empty());
    }
}
