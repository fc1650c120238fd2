//! Interleaved-whitespace character-sequence matching.
//!
//! A search fragment is stripped of whitespace and each remaining character
//! is matched in order, allowing any run of whitespace between neighbours.
//! Matching ignores case. "fried egg", "friedegg" and "F r i e d E g g" all
//! match a stored "Fried  Egg".
//!
//! Every fragment character is regex-escaped before the expression is built,
//! so characters such as `(`, `+` or `.` only ever match themselves.

use regex::{Regex, RegexBuilder};
use thiserror::Error;

/// Where the fragment must match within a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchScope {
    /// Anywhere inside the candidate.
    Substring,
    /// The whole candidate, start to end.
    Whole,
}

/// Errors raised while building an [`InterleavedPattern`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FragmentError {
    /// Nothing but whitespace was supplied.
    #[error("search fragment must not be empty")]
    Empty,
    /// The compiled expression exceeded the regex engine's limits.
    #[error("search fragment is too long: {message}")]
    TooComplex { message: String },
}

/// Compiled interleaved-whitespace matcher for one fragment.
///
/// # Examples
/// ```
/// use recipe_api::domain::{InterleavedPattern, MatchScope};
///
/// let pattern = InterleavedPattern::new("lechonkawali", MatchScope::Substring)
///     .expect("valid fragment");
/// assert!(pattern.is_match("Lechon Kawali"));
/// assert!(!pattern.is_match("Lechon Manok"));
/// ```
#[derive(Debug, Clone)]
pub struct InterleavedPattern {
    regex: Regex,
}

impl InterleavedPattern {
    /// Compile `fragment` for the given scope.
    pub fn new(fragment: &str, scope: MatchScope) -> Result<Self, FragmentError> {
        let pieces: Vec<String> = fragment
            .chars()
            .filter(|ch| !ch.is_whitespace())
            .map(|ch| regex::escape(ch.encode_utf8(&mut [0; 4])))
            .collect();
        if pieces.is_empty() {
            return Err(FragmentError::Empty);
        }

        let body = pieces.join(r"\s*");
        let expression = match scope {
            MatchScope::Substring => body,
            MatchScope::Whole => format!("^{body}$"),
        };
        let regex = RegexBuilder::new(&expression)
            .case_insensitive(true)
            .build()
            .map_err(|err| FragmentError::TooComplex {
                message: err.to_string(),
            })?;
        Ok(Self { regex })
    }

    /// Whether `candidate` matches.
    #[must_use]
    pub fn is_match(&self, candidate: &str) -> bool {
        self.regex.is_match(candidate)
    }

    /// Whether any of `candidates` matches.
    pub fn matches_any<'a, I>(&self, candidates: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        candidates.into_iter().any(|candidate| self.is_match(candidate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("fried egg", "Fried Egg")]
    #[case("friedegg", "Fried Egg")]
    #[case("FRIEDEGG", "fried   egg")]
    #[case("f r i e d", "Deep Fried Egg")]
    #[case("kare-kare", "Kare-Kare")]
    #[case("karekare", "Kare Kare")]
    fn substring_scope_tolerates_spacing_and_case(#[case] fragment: &str, #[case] name: &str) {
        let pattern = InterleavedPattern::new(fragment, MatchScope::Substring).expect("pattern");
        assert!(pattern.is_match(name), "{fragment:?} should match {name:?}");
    }

    #[rstest]
    #[case("karekare", "Kare-Kare")]
    #[case("eggfried", "Fried Egg")]
    fn substring_scope_requires_characters_in_order(#[case] fragment: &str, #[case] name: &str) {
        let pattern = InterleavedPattern::new(fragment, MatchScope::Substring).expect("pattern");
        assert!(!pattern.is_match(name));
    }

    #[rstest]
    #[case("lunch", "Lunch", true)]
    #[case("l u n c h", "Lunch", true)]
    #[case("lunch", "Late Lunch", false)]
    #[case("lunc", "Lunch", false)]
    fn whole_scope_is_anchored(#[case] fragment: &str, #[case] label: &str, #[case] expected: bool) {
        let pattern = InterleavedPattern::new(fragment, MatchScope::Whole).expect("pattern");
        assert_eq!(pattern.is_match(label), expected);
    }

    #[rstest]
    #[case("(", "Meat (pork)", true)]
    #[case(".", "Adobo", false)]
    #[case("a+", "aaa", false)]
    #[case("a+", "a+", true)]
    #[case("[x]", "[x]", true)]
    fn special_characters_match_literally(
        #[case] fragment: &str,
        #[case] candidate: &str,
        #[case] expected: bool,
    ) {
        let pattern = InterleavedPattern::new(fragment, MatchScope::Substring).expect("pattern");
        assert_eq!(pattern.is_match(candidate), expected);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t\n")]
    fn blank_fragments_are_rejected(#[case] fragment: &str) {
        let result = InterleavedPattern::new(fragment, MatchScope::Substring);
        assert!(matches!(result, Err(FragmentError::Empty)));
    }

    #[rstest]
    fn matches_any_checks_every_label() {
        let pattern = InterleavedPattern::new("dinner", MatchScope::Whole).expect("pattern");
        assert!(pattern.matches_any(["Lunch", "Dinner"]));
        assert!(!pattern.matches_any(["Lunch"]));
        assert!(!pattern.matches_any(std::iter::empty()));
    }
}
