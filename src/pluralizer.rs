//! The inflection engine.
//!
//! A [Pluralizer] owns one rule table per direction, the two irregular-word
//! maps, and the uncountable set, all seeded from the built-in data and all
//! extensible at runtime.
//!
//! # Examples
//!
//! ```
//! use en_pluralize::Pluralizer;
//!
//! let pluralizer = Pluralizer::new();
//! assert_eq!(pluralizer.pluralize("dog"), "dogs");
//! assert_eq!(pluralizer.singularize("buses"), "bus");
//! assert_eq!(pluralizer.format("vertebra", 3, Some("N0")), "3 vertebrae");
//!
//! assert!(pluralizer.is_singular("dog"));
//! assert!(!pluralizer.is_plural("dog"));
//! ```

use crate::{
    case, numeral,
    rule::{anchor, PatternError, Rule, RuleTable},
    rules,
};
use std::{
    borrow::Cow,
    collections::{HashMap, HashSet},
};

/// The direction of an inflection.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Direction {
    /// Singular to plural.
    Plural,
    /// Plural to singular.
    Singular,
}

/// An inflection engine with its own rule tables, irregular maps, and
/// uncountable set.
///
/// None of the state is internally synchronized. Share an engine across
/// threads only once it stops being mutated, or give each caller its own,
/// or wrap it in a lock.
#[derive(Debug)]
pub struct Pluralizer {
    plurals: RuleTable,
    singulars: RuleTable,
    uncountables: HashSet<String>,
    /// singular form, lowercased, to plural form
    irregulars: HashMap<String, String>,
    /// plural form, lowercased, to singular form
    irregular_plurals: HashMap<String, String>,
}

impl Pluralizer {
    /// Creates an engine seeded with the built-in rules, irregular pairs,
    /// and uncountable words.
    pub fn new() -> Self {
        let irregulars = rules::IRREGULARS
            .iter()
            .map(|(singular, plural)| (singular.to_lowercase(), (*plural).to_string()))
            .collect::<HashMap<_, _>>();
        // The inverse map skips the handful of singulars whose plural
        // collides with another entry's plural, so each irregular plural
        // resolves to exactly one singular.
        let irregular_plurals = rules::IRREGULARS
            .iter()
            .filter(|(singular, _)| !rules::AMBIGUOUS_IRREGULARS.contains(singular))
            .map(|(singular, plural)| (plural.to_lowercase(), (*singular).to_string()))
            .collect::<HashMap<_, _>>();
        let uncountables = rules::UNCOUNTABLES
            .iter()
            .map(|word| word.to_lowercase())
            .collect::<HashSet<_>>();

        Self {
            plurals: RuleTable::seeded(rules::PLURALS, "plural"),
            singulars: RuleTable::seeded(rules::SINGULARS, "singular"),
            uncountables,
            irregulars,
            irregular_plurals,
        }
    }

    /// Inflects a word in the given direction, preserving its casing
    /// style. Irregular and uncountable words resolve by direct lookup;
    /// everything else falls through to the direction's rule table.
    ///
    /// A word already in the target form, an empty or whitespace-only
    /// word, and a word no rule matches all come back unchanged, so
    /// repeated application in one direction is a no-op after the first.
    /// Whenever possible this avoids allocating a new
    /// [String](std::string::String).
    pub fn inflect<'a>(&self, word: &'a str, direction: Direction) -> Cow<'a, str> {
        let (replaceables, replacements, table) = match direction {
            Direction::Plural => (&self.irregulars, &self.irregular_plurals, &self.plurals),
            Direction::Singular => (&self.irregular_plurals, &self.irregulars, &self.singulars),
        };

        let key = word.to_lowercase();
        if replacements.contains_key(&key) {
            return Cow::Borrowed(word);
        }
        if let Some(replacement) = replaceables.get(&key) {
            return Cow::Owned(case::restore_case(word, replacement));
        }
        if word.trim().is_empty() || self.uncountables.contains(&key) {
            return Cow::Borrowed(word);
        }

        match table.apply(word) {
            Some(inflected) => Cow::Owned(inflected),
            None => Cow::Borrowed(word),
        }
    }

    /// Returns the plural form of the given word. If the word is already
    /// plural it comes back unchanged.
    pub fn pluralize<'a>(&self, word: &'a str) -> Cow<'a, str> {
        self.inflect(word, Direction::Plural)
    }

    /// Returns the singular form of the given word. If the word is already
    /// singular it comes back unchanged.
    pub fn singularize<'a>(&self, word: &'a str) -> Cow<'a, str> {
        self.inflect(word, Direction::Singular)
    }

    /// Returns a boolean indicating whether the word is singular. Note
    /// that a word can be *both* singular and plural, like "sheep" or
    /// "series".
    pub fn is_singular(&self, word: &str) -> bool {
        self.singularize(word) == word
    }

    /// Returns a boolean indicating whether the word is plural. Note that
    /// a word can be *both* singular and plural, like "sheep" or "series".
    pub fn is_plural(&self, word: &str) -> bool {
        self.pluralize(word) == word
    }

    /// Inflects the word for the count and, when a format spec is given,
    /// prefixes the rendered count, space-separated.
    ///
    /// A `None`, empty, or whitespace-only spec yields the bare inflected
    /// word. A spec the count renderer rejects falls back to the plain
    /// decimal rendering. This never fails.
    pub fn format(&self, word: &str, count: i64, spec: Option<&str>) -> String {
        let quantified = if count == 1 {
            self.singularize(word)
        } else {
            self.pluralize(word)
        };

        let spec = match spec.map(str::trim) {
            Some(spec) if !spec.is_empty() => spec,
            _ => return quantified.into_owned(),
        };

        let rendered = numeral::format_count(count, spec).unwrap_or_else(|_| count.to_string());
        format!("{} {}", rendered, quantified)
    }

    /// Appends a pluralization rule. The pattern is anchored on both ends
    /// if it is not already, and compiled case-insensitively. A rule added
    /// here takes precedence over every earlier rule for the words it
    /// matches.
    pub fn add_plural(&mut self, pattern: &str, replacement: &str) -> Result<(), PatternError> {
        let rule = Rule::new(&anchor(pattern), replacement)?;
        self.plurals.push(rule);
        Ok(())
    }

    /// Appends a singularization rule, with the same anchoring and
    /// precedence as [add_plural](Self::add_plural).
    pub fn add_singular(&mut self, pattern: &str, replacement: &str) -> Result<(), PatternError> {
        let rule = Rule::new(&anchor(pattern), replacement)?;
        self.singulars.push(rule);
        Ok(())
    }

    /// Registers a word that never changes form. The word also becomes an
    /// identity rule in both tables, so its uncountable status holds even
    /// for lookups that reach the tables directly. The word doubles as a
    /// pattern for those rules, which is where the error can arise.
    pub fn add_uncountable(&mut self, word: &str) -> Result<(), PatternError> {
        self.add_plural(word, "$0")?;
        self.add_singular(word, "$0")?;
        self.uncountables.insert(word.to_lowercase());
        Ok(())
    }

    /// Registers or overrides an irregular pair. Both directional maps are
    /// updated together, overwriting any built-in mapping for either key.
    /// Only the explicit pair is touched; no further inverse derivation is
    /// attempted for pairs whose plural collides with an existing entry.
    pub fn add_or_update_irregular(&mut self, singular: &str, plural: &str) {
        self.irregulars
            .insert(singular.to_lowercase(), plural.to_string());
        self.irregular_plurals
            .insert(plural.to_lowercase(), singular.to_string());
    }
}

impl Default for Pluralizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pluralize() {
        let tests = [
            ("dog", "dogs"),
            ("Dog", "Dogs"),
            ("DOG", "DOGS"),
            ("bus", "buses"),
            ("city", "cities"),
            ("knife", "knives"),
            ("hero", "heroes"),
            ("analysis", "analyses"),
            ("matrix", "matrices"),
            ("person", "people"),
            ("child", "children"),
            ("mouse", "mice"),
            ("man", "men"),
            // already plural
            ("dogs", "dogs"),
            ("buses", "buses"),
            ("children", "children"),
        ];
        let pluralizer = Pluralizer::new();
        for test in tests {
            assert_eq!(
                pluralizer.pluralize(test.0),
                test.1,
                "pluralize({}) = {}",
                test.0,
                test.1,
            );
        }
    }

    #[test]
    fn singularize() {
        let tests = [
            ("dogs", "dog"),
            ("Dogs", "Dog"),
            ("DOGS", "DOG"),
            ("buses", "bus"),
            ("cities", "city"),
            ("knives", "knife"),
            ("heroes", "hero"),
            ("analyses", "analysis"),
            ("matrices", "matrix"),
            ("people", "person"),
            ("children", "child"),
            ("mice", "mouse"),
            ("men", "man"),
            // already singular
            ("dog", "dog"),
            ("bus", "bus"),
            ("child", "child"),
        ];
        let pluralizer = Pluralizer::new();
        for test in tests {
            assert_eq!(
                pluralizer.singularize(test.0),
                test.1,
                "singularize({}) = {}",
                test.0,
                test.1,
            );
        }
    }

    #[test]
    fn irregulars() {
        let tests = [
            ("ox", "oxen"),
            ("goose", "geese"),
            ("die", "dice"),
            ("quiz", "quizzes"),
            ("passerby", "passersby"),
            ("genus", "genera"),
            ("schema", "schemata"),
        ];
        let pluralizer = Pluralizer::new();
        for (singular, plural) in tests {
            assert_eq!(pluralizer.pluralize(singular), plural);
            assert_eq!(pluralizer.singularize(plural), singular);
            // both forms are fixed points in their own direction
            assert_eq!(pluralizer.singularize(singular), singular);
            assert_eq!(pluralizer.pluralize(plural), plural);
        }
    }

    #[test]
    fn pronouns() {
        let pluralizer = Pluralizer::new();
        assert_eq!(pluralizer.pluralize("she"), "they");
        assert_eq!(pluralizer.pluralize("he"), "they");
        // a single uppercase letter stays uppercase through the lookup
        assert_eq!(pluralizer.pluralize("I"), "WE");
        // ambiguous plurals resolve to exactly one singular
        assert_eq!(pluralizer.singularize("they"), "she");
        assert_eq!(pluralizer.singularize("themselves"), "themself");
    }

    #[test]
    fn uncountables() {
        let pluralizer = Pluralizer::new();
        for word in ["equipment", "information", "series", "species", "staff"] {
            assert_eq!(pluralizer.pluralize(word), word);
            assert_eq!(pluralizer.singularize(word), word);
            assert!(pluralizer.is_plural(word));
            assert!(pluralizer.is_singular(word));
        }
    }

    #[test]
    fn is_singular_and_is_plural() {
        let pluralizer = Pluralizer::new();
        assert!(pluralizer.is_singular("dog"));
        assert!(!pluralizer.is_plural("dog"));
        assert!(pluralizer.is_plural("dogs"));
        assert!(!pluralizer.is_singular("dogs"));
        assert!(pluralizer.is_singular("ox"));
        assert!(!pluralizer.is_plural("ox"));
        assert!(pluralizer.is_plural("oxen"));

        // a word can be both
        assert!(pluralizer.is_singular("sheep"));
        assert!(pluralizer.is_plural("sheep"));
    }

    #[test]
    fn empty_and_whitespace_pass_through() {
        let pluralizer = Pluralizer::new();
        for word in ["", " ", "\t", "   "] {
            assert_eq!(pluralizer.pluralize(word), word);
            assert_eq!(pluralizer.singularize(word), word);
        }
    }

    #[test]
    fn added_rules_take_precedence() {
        let mut pluralizer = Pluralizer::new();
        assert_eq!(pluralizer.pluralize("confetto"), "confettos");
        assert_eq!(pluralizer.singularize("confetti"), "confetti");

        pluralizer.add_plural("confetto", "confetti").unwrap();
        pluralizer.add_singular("confetti", "confetto").unwrap();

        assert_eq!(pluralizer.pluralize("confetto"), "confetti");
        assert_eq!(pluralizer.singularize("confetti"), "confetto");
        // casing is still restored through a custom rule
        assert_eq!(pluralizer.pluralize("Confetto"), "Confetti");
        assert_eq!(pluralizer.pluralize("CONFETTO"), "CONFETTI");
    }

    #[test]
    fn added_rules_resolve_capture_groups() {
        let mut pluralizer = Pluralizer::new();
        pluralizer.add_singular("(paparazz)i", "$1o").unwrap();
        assert_eq!(pluralizer.singularize("paparazzi"), "paparazzo");
    }

    #[test]
    fn malformed_patterns_are_rejected() {
        let mut pluralizer = Pluralizer::new();
        assert!(pluralizer.add_plural("a|si)ngle", "$1ngular").is_err());
        assert!(pluralizer.add_singular("a|si)ngle", "$1ngular").is_err());
        assert!(pluralizer.add_uncountable("wat(er").is_err());
    }

    #[test]
    fn added_uncountables() {
        let mut pluralizer = Pluralizer::new();
        assert_eq!(pluralizer.pluralize("mean"), "means");
        assert_eq!(pluralizer.singularize("means"), "mean");

        pluralizer.add_uncountable("mean").unwrap();
        pluralizer.add_uncountable("means").unwrap();

        assert_eq!(pluralizer.pluralize("mean"), "mean");
        assert_eq!(pluralizer.singularize("means"), "means");
    }

    #[test]
    fn added_and_updated_irregulars() {
        let mut pluralizer = Pluralizer::new();
        assert_eq!(pluralizer.pluralize("person"), "people");

        pluralizer.add_or_update_irregular("person", "persons");

        assert_eq!(pluralizer.pluralize("person"), "persons");
        assert_eq!(pluralizer.singularize("persons"), "person");
        // the rule-driven plural still resolves
        assert_eq!(pluralizer.singularize("people"), "person");
    }

    #[test]
    fn format() {
        let tests: [(&str, i64, Option<&str>, &str); 10] = [
            ("vertebra", 3, None, "vertebrae"),
            ("vertebra", 3, Some(""), "vertebrae"),
            ("vertebra", 3, Some("  "), "vertebrae"),
            ("cat", 1, None, "cat"),
            ("dogs", 1, Some("G"), "1 dog"),
            ("dog", 5000, Some("G"), "5000 dogs"),
            ("dog", 5000, Some("N0"), "5,000 dogs"),
            ("person", 11, Some("N2"), "11.00 people"),
            ("vote", 11, Some("G"), "11 votes"),
            // an unusable spec falls back to the plain rendering
            ("dog", 13, Some("Q7"), "13 dogs"),
        ];
        let pluralizer = Pluralizer::new();
        for test in tests {
            assert_eq!(
                pluralizer.format(test.0, test.1, test.2),
                test.3,
                "format({}, {}, {:?}) = {}",
                test.0,
                test.1,
                test.2,
                test.3,
            );
        }
    }
}
