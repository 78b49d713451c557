//! The pattern-rule machinery: a single [Rule], the ordered [RuleTable]
//! it lives in, and replacement-template resolution.

use crate::case;
use once_cell::sync::Lazy;
use regex::{Captures, Regex, RegexBuilder};
use std::borrow::Cow;
use thiserror::Error;

/// The error returned when a caller-supplied pattern does not compile as a
/// regular expression. This is the only hard failure in the crate.
#[derive(Debug, Error)]
#[error("could not compile inflection pattern: {0}")]
pub struct PatternError(#[from] regex::Error);

static TEMPLATE_REF_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$(\d{1,2})").expect("Could not parse template reference regex"));

/// One pattern-to-replacement transform unit.
#[derive(Debug)]
pub(crate) struct Rule {
    regex: Regex,
    replacement: String,
}

impl Rule {
    /// Compiles the pattern exactly as given, case-insensitively. The
    /// built-in tables rely on this not adding anchors; caller patterns go
    /// through [anchor] first.
    pub(crate) fn new(pattern: &str, replacement: &str) -> Result<Self, PatternError> {
        let regex = RegexBuilder::new(pattern).case_insensitive(true).build()?;
        Ok(Self {
            regex,
            replacement: replacement.to_string(),
        })
    }
}

/// Anchors a caller-supplied pattern on both ends so a custom rule cannot
/// match mid-word.
pub(crate) fn anchor(pattern: &str) -> Cow<'_, str> {
    let needs_start = !pattern.starts_with('^');
    let needs_end = !pattern.ends_with('$');
    if !needs_start && !needs_end {
        return Cow::Borrowed(pattern);
    }

    let mut anchored = String::with_capacity(pattern.len() + 2);
    if needs_start {
        anchored.push('^');
    }
    anchored.push_str(pattern);
    if needs_end {
        anchored.push('$');
    }
    Cow::Owned(anchored)
}

/// Resolves `$0`..`$99` references in a replacement template against the
/// captured groups of a match. `$0` is the whole match. A group that did
/// not participate in the match resolves to the empty string.
pub(crate) fn resolve_template(groups: &[&str], template: &str) -> String {
    TEMPLATE_REF_REGEX
        .replace_all(template, |caps: &Captures| {
            caps[1]
                .parse::<usize>()
                .map_or("", |idx| groups.get(idx).copied().unwrap_or(""))
        })
        .into_owned()
}

/// An ordered, append-only sequence of rules for one inflection direction.
#[derive(Debug)]
pub(crate) struct RuleTable {
    rules: Vec<Rule>,
}

impl RuleTable {
    pub(crate) fn seeded(seed: &[(&str, &str)], which: &str) -> Self {
        let rules = seed
            .iter()
            .map(|(pattern, replacement)| {
                Rule::new(pattern, replacement).unwrap_or_else(|e| {
                    panic!("Could not parse built-in {} rule {}: {}", which, pattern, e)
                })
            })
            .collect();
        Self { rules }
    }

    pub(crate) fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Applies the most recently added rule that matches the word, or
    /// returns `None` when nothing matches.
    ///
    /// The text substituted for the matched range is case-restored against
    /// the matched text itself. A zero-width match (several generic rules
    /// match the empty string at the end of the word) carries no casing of
    /// its own, so the character just before the match supplies the casing
    /// context instead.
    pub(crate) fn apply(&self, word: &str) -> Option<String> {
        for rule in self.rules.iter().rev() {
            let caps = match rule.regex.captures(word) {
                Some(caps) => caps,
                None => continue,
            };

            let matched = caps.get(0).expect("group 0 always participates");
            let groups = caps
                .iter()
                .map(|g| g.map_or("", |m| m.as_str()))
                .collect::<Vec<_>>();
            let substituted = resolve_template(&groups, &rule.replacement);

            let prefix = &word[..matched.start()];
            let context = if matched.as_str().trim().is_empty() {
                prefix
                    .char_indices()
                    .last()
                    .map_or("", |(i, _)| &prefix[i..])
            } else {
                matched.as_str()
            };
            let restored = case::restore_case(context, &substituted);

            let mut inflected = String::with_capacity(prefix.len() + restored.len());
            inflected.push_str(prefix);
            inflected.push_str(&restored);
            inflected.push_str(&word[matched.end()..]);

            #[cfg(feature = "debug")]
            println!(
                r#"  word '{}' matched regex {:?} and became {}"#,
                word, rule.regex, inflected
            );

            return Some(inflected);
        }

        None
    }
}
