use crate::error::{Result, WordbookError};
use std::fmt;

/// Longest word we accept. Anything beyond this is garbage input, not English.
pub const MAX_WORD_LEN: usize = 50;

/// A validated word token: ASCII letters and hyphens, 1..=50 chars after trim.
///
/// Validation happens before any network call, so a `Word` in hand means the
/// input already passed the gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word(String);

impl Word {
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(WordbookError::InvalidWord("word cannot be empty".to_string()));
        }
        if !trimmed.chars().all(|c| c.is_ascii_alphabetic() || c == '-') {
            return Err(WordbookError::InvalidWord(format!(
                "'{}' may only contain letters and hyphens",
                trimmed
            )));
        }
        if trimmed.len() > MAX_WORD_LEN {
            return Err(WordbookError::InvalidWord(format!(
                "word length must be at most {} characters",
                MAX_WORD_LEN
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn is_valid(input: &str) -> bool {
        Self::parse(input).is_ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The form sent to the provider.
    pub fn lowercased(&self) -> String {
        self.0.to_ascii_lowercase()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A provider-produced markdown explanation. Opaque text: we never parse its
/// structure, only display it and write it to the notebook verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Explanation(String);

impl Explanation {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// The first `limit` lines plus the count of lines left out.
    pub fn preview(&self, limit: usize) -> (Vec<&str>, usize) {
        let lines: Vec<&str> = self.0.lines().collect();
        if lines.len() <= limit {
            (lines, 0)
        } else {
            let hidden = lines.len() - limit;
            (lines[..limit].to_vec(), hidden)
        }
    }
}

impl fmt::Display for Explanation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
