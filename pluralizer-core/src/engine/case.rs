//! Case restoration
//!
//! Transfers the letter-case style of a reference text (lower, upper or title)
//! onto a computed replacement.

/// Return `candidate` in the case style of `reference`
pub fn restore_case(reference: &str, candidate: &str) -> String {
    if reference == candidate {
        return candidate.to_string();
    }

    // Lower cased words. E.g. "hello".
    if reference == reference.to_lowercase() {
        return candidate.to_lowercase();
    }

    // Upper cased words. E.g. "WHISKY".
    if reference == reference.to_uppercase() {
        return candidate.to_uppercase();
    }

    // Title cased words. E.g. "Title".
    if let Some(first) = reference.chars().next() {
        if first.to_uppercase().eq(std::iter::once(first)) {
            return title_case(candidate);
        }
    }

    candidate.to_lowercase()
}

fn title_case(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_is_kept() {
        assert_eq!(restore_case("iPhone", "iPhone"), "iPhone");
    }

    #[test]
    fn test_lowercase_reference() {
        assert_eq!(restore_case("person", "PEOPLE"), "people");
        assert_eq!(restore_case("e", "S"), "s");
    }

    #[test]
    fn test_uppercase_reference() {
        assert_eq!(restore_case("PERSON", "people"), "PEOPLE");
        assert_eq!(restore_case("I", "we"), "WE");
    }

    #[test]
    fn test_title_case_reference() {
        assert_eq!(restore_case("Person", "people"), "People");
        assert_eq!(restore_case("Mice", "mOUSE"), "Mouse");
    }

    #[test]
    fn test_mixed_case_falls_back_to_lowercase() {
        assert_eq!(restore_case("iPhone", "IPHONES"), "iphones");
    }

    #[test]
    fn test_uncased_reference_counts_as_lowercase() {
        // Digits are unchanged by lowercasing
        assert_eq!(restore_case("42", "ABC"), "abc");
    }

    #[test]
    fn test_empty_candidate() {
        assert_eq!(restore_case("S", ""), "");
        assert_eq!(restore_case("Ab", ""), "");
        assert_eq!(restore_case("s", ""), "");
    }

    #[test]
    fn test_non_ascii() {
        assert_eq!(restore_case("Élan", "élans"), "Élans");
        assert_eq!(restore_case("ÉLAN", "élans"), "ÉLANS");
    }
}
