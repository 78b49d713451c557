#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::broken_intra_doc_links)]

//! Pluralize and singularize English words.
//!
//! The engine is almost entirely table-driven. Each direction has an
//! ordered table of pattern rules, alongside a map of irregular
//! singular/plural pairs and a set of uncountable words that never change
//! form. A lookup checks the irregular and uncountable data first and only
//! then falls through to the rule table, and the result keeps the casing
//! style of the input, so "dog" becomes "dogs", "Dog" becomes "Dogs", and
//! "DOG" becomes "DOGS".
//!
//! Every table can be extended at runtime, and rules added later take
//! precedence over the built-in ones:
//!
//! ```
//! use en_pluralize::Pluralizer;
//!
//! let mut pluralizer = Pluralizer::new();
//! assert_eq!(pluralizer.pluralize("confetto"), "confettos");
//!
//! pluralizer.add_plural("confetto", "confetti").unwrap();
//! assert_eq!(pluralizer.pluralize("confetto"), "confetti");
//! ```
//!
//! For one-off inflections there are free functions over a shared,
//! pre-seeded engine. The shared engine is read-only; anything that needs
//! the extension API constructs its own [Pluralizer].
//!
//! ```
//! assert_eq!(en_pluralize::pluralize("tooth"), "teeth");
//! assert_eq!(en_pluralize::singularize("oxen"), "ox");
//! assert_eq!(en_pluralize::format("dog", 5000, Some("N0")), "5,000 dogs");
//! ```
//!
//! The rule tables are a best-effort heuristic for English. They make no
//! attempt at other languages, and some English nouns will always need an
//! irregular entry or a custom rule of their own.

mod case;
mod numeral;
mod pluralizer;
mod rule;
mod rules;

pub use crate::pluralizer::{Direction, Pluralizer};
pub use crate::rule::PatternError;

use once_cell::sync::Lazy;
use std::borrow::Cow;

static SHARED: Lazy<Pluralizer> = Lazy::new(Pluralizer::new);

/// Pluralizes a word with the shared default engine.
pub fn pluralize(word: &str) -> Cow<'_, str> {
    SHARED.pluralize(word)
}

/// Singularizes a word with the shared default engine.
pub fn singularize(word: &str) -> Cow<'_, str> {
    SHARED.singularize(word)
}

/// Reports whether the shared default engine considers the word singular.
pub fn is_singular(word: &str) -> bool {
    SHARED.is_singular(word)
}

/// Reports whether the shared default engine considers the word plural.
pub fn is_plural(word: &str) -> bool {
    SHARED.is_plural(word)
}

/// Inflects a word for a count, and renders the count per the optional
/// format spec, with the shared default engine.
pub fn format(word: &str, count: i64, spec: Option<&str>) -> String {
    SHARED.format(word, count, spec)
}
