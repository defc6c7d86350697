//! Case-insensitive keyword counting over resume text

use crate::error::{Result, SkillAnalyzerError};
use aho_corasick::{AhoCorasick, MatchKind};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// How a keyword occurrence must sit in the text to be counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// The keyword may not continue a word on either side, so `go` does not
    /// count inside `google`. Edges that are punctuation (`c++`, `.net`) are
    /// not checked.
    #[default]
    Word,
    /// Plain substring counting.
    Substring,
}

impl FromStr for MatchMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "word" => Ok(MatchMode::Word),
            "substring" | "sub" => Ok(MatchMode::Substring),
            _ => Err(format!("Invalid match mode: {}. Supported: word, substring", s)),
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchMode::Word => write!(f, "word"),
            MatchMode::Substring => write!(f, "substring"),
        }
    }
}

/// Lowercase and collapse whitespace runs so keywords wrapped across lines still match.
pub fn normalize(text: &str) -> String {
    text.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Counts every keyword in a single pass over the text.
pub struct KeywordMatcher {
    automaton: AhoCorasick,
    keywords: Vec<String>,
    mode: MatchMode,
}

impl KeywordMatcher {
    pub fn new<I, S>(keywords: I, mode: MatchMode) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut unique: Vec<String> = Vec::new();
        for keyword in keywords {
            let normalized = normalize(keyword.as_ref());
            if normalized.is_empty() {
                return Err(SkillAnalyzerError::InvalidDatabase(
                    "keywords must not be blank".to_string(),
                ));
            }
            if !unique.contains(&normalized) {
                unique.push(normalized);
            }
        }

        // Overlapping search needs standard semantics; each keyword is counted on its own.
        let automaton = AhoCorasick::builder()
            .match_kind(MatchKind::Standard)
            .build(&unique)
            .map_err(|e| {
                SkillAnalyzerError::InvalidDatabase(format!("Failed to build keyword matcher: {}", e))
            })?;

        Ok(Self {
            automaton,
            keywords: unique,
            mode,
        })
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    pub fn keyword_count(&self) -> usize {
        self.keywords.len()
    }

    /// Occurrences of every keyword in `text`, keyed by normalized keyword.
    ///
    /// Each keyword counts its own non-overlapping leftmost occurrences, so
    /// `sql` and `nosql` can both count the same span of `nosql`.
    pub fn count_all(&self, text: &str) -> HashMap<String, usize> {
        let text = normalize(text);
        let mut counts = vec![0usize; self.keywords.len()];
        let mut next_free = vec![0usize; self.keywords.len()];

        for mat in self.automaton.find_overlapping_iter(text.as_str()) {
            let id = mat.pattern().as_usize();
            if mat.start() < next_free[id] {
                continue;
            }
            if self.mode == MatchMode::Word && !self.on_word_boundary(&text, mat.start(), mat.end()) {
                continue;
            }
            counts[id] += 1;
            next_free[id] = mat.end();
        }

        self.keywords
            .iter()
            .cloned()
            .zip(counts)
            .collect()
    }

    /// Occurrences of a single keyword, which must be one the matcher was built with.
    pub fn count(&self, text: &str, keyword: &str) -> usize {
        self.count_all(text)
            .get(&normalize(keyword))
            .copied()
            .unwrap_or(0)
    }

    fn on_word_boundary(&self, text: &str, start: usize, end: usize) -> bool {
        let matched = &text[start..end];
        let starts_alnum = matched.chars().next().is_some_and(char::is_alphanumeric);
        let ends_alnum = matched.chars().next_back().is_some_and(char::is_alphanumeric);

        let before_ok = !starts_alnum
            || !text[..start]
                .chars()
                .next_back()
                .is_some_and(char::is_alphanumeric);
        let after_ok = !ends_alnum
            || !text[end..].chars().next().is_some_and(char::is_alphanumeric);

        before_ok && after_ok
    }
}
