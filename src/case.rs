//! Letter-casing classification and restoration.

/// Reapplies the casing style of `word` to `new_word`.
///
/// A word is classified as all-lowercase, all-uppercase, or capitalized
/// (first character uppercase, rest lowercase), and the same transform is
/// applied to the replacement. Anything else, like "McDonald" or "eSports",
/// falls back to a fully lowercase result rather than trying to mirror the
/// mix character by character.
pub(crate) fn restore_case(word: &str, new_word: &str) -> String {
    if word == new_word {
        return new_word.to_string();
    }
    if word == word.to_lowercase() {
        return new_word.to_lowercase();
    }
    if word == word.to_uppercase() {
        return new_word.to_uppercase();
    }
    if word == capitalize(word) {
        return capitalize(new_word);
    }
    new_word.to_lowercase()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut capitalized = first.to_uppercase().collect::<String>();
            capitalized.push_str(&chars.as_str().to_lowercase());
            capitalized
        }
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn restore_case() {
        let tests = [
            // orig is lowercase
            ("dog", "dogs", "dogs"),
            ("dog", "DOGS", "dogs"),
            ("dog", "Dogs", "dogs"),
            // orig is uppercase
            ("DOG", "dogs", "DOGS"),
            ("DOG", "Dogs", "DOGS"),
            // orig is capitalized
            ("Dog", "dogs", "Dogs"),
            ("Dog", "dOGS", "Dogs"),
            // mixed casing lowers the result
            ("McDonald", "mcdonalds", "mcdonalds"),
            ("eSports", "ESPORTS", "esports"),
            // identical strings short-circuit
            ("sheep", "sheep", "sheep"),
        ];
        for test in tests {
            assert_eq!(
                super::restore_case(test.0, test.1),
                test.2,
                "restore_case({}, {}) = {}",
                test.0,
                test.1,
                test.2,
            );
        }
    }

    #[test]
    fn capitalize() {
        let tests = [("dog", "Dog"), ("DOG", "Dog"), ("dOG", "Dog"), ("", "")];
        for test in tests {
            assert_eq!(super::capitalize(test.0), test.1, "capitalize({})", test.0);
        }
    }
}
