//! Schema and build version values
//!
//! A [`SchemaVersion`] is `major.minor.patch[-qualifier]`. Missing minor or
//! patch components count as zero, so `"1.2"` and `"1.2.0"` are equal.

use crate::error::{CoreError, CoreResult};
use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Qualifier marking an unreleased, in-development build
pub const SNAPSHOT_QUALIFIER: &str = "SNAPSHOT";

/// A comparable `major.minor.patch[-qualifier]` version
///
/// Ordering compares the numeric components first, then the qualifiers
/// using Maven's precedence: qualifiers are split into word and number
/// tokens, words compare case-insensitively with
/// `alpha < beta < milestone < rc < snapshot < (release) < sp`, and numbers
/// compare as integers. So `1.0.0-SNAPSHOT < 1.0.0` and
/// `1.3.0-RC9 < 1.3.0-RC10`. Equality follows the ordering.
#[derive(Debug, Clone)]
pub struct SchemaVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub qualifier: Option<String>,
}

impl SchemaVersion {
    /// Create a release version without qualifier
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
            qualifier: None,
        }
    }

    /// Parse a version string
    pub fn parse(input: &str) -> CoreResult<Self> {
        let invalid = |reason: &str| CoreError::InvalidVersion {
            input: input.to_string(),
            reason: reason.to_string(),
        };

        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(invalid("version is empty"));
        }

        let (numbers, qualifier) = match trimmed.split_once('-') {
            Some((_, "")) => return Err(invalid("qualifier after '-' is empty")),
            Some((numbers, qualifier)) => (numbers, Some(qualifier.to_string())),
            None => (trimmed, None),
        };

        let parts: Vec<&str> = numbers.split('.').collect();
        if parts.len() > 3 {
            return Err(invalid("expected at most three numeric components"));
        }

        let mut components = [0u32; 3];
        for (slot, part) in components.iter_mut().zip(&parts) {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid(&format!("'{part}' is not a number")));
            }
            *slot = part
                .parse()
                .map_err(|_| invalid(&format!("'{part}' is out of range")))?;
        }

        Ok(Self {
            major: components[0],
            minor: components[1],
            patch: components[2],
            qualifier,
        })
    }

    /// True when the qualifier is exactly `SNAPSHOT`
    pub fn is_snapshot(&self) -> bool {
        self.qualifier.as_deref() == Some(SNAPSHOT_QUALIFIER)
    }
}

impl FromStr for SchemaVersion {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(q) = &self.qualifier {
            write!(f, "-{q}")?;
        }
        Ok(())
    }
}

impl Ord for SchemaVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.major, self.minor, self.patch)
            .cmp(&(other.major, other.minor, other.patch))
            .then_with(|| {
                compare_qualifiers(self.qualifier.as_deref(), other.qualifier.as_deref())
            })
    }
}

impl PartialEq for SchemaVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SchemaVersion {}

impl PartialOrd for SchemaVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// One piece of a qualifier: a run of letters or a run of digits
#[derive(Debug, Clone, PartialEq, Eq)]
enum QualifierToken {
    Word(String),
    Number(u64),
}

impl QualifierToken {
    /// Rank of a word among the well-known qualifiers; unknown words rank
    /// after all of them and compare alphabetically among themselves.
    fn word_rank(word: &str) -> u8 {
        match word {
            "alpha" | "a" => 0,
            "beta" | "b" => 1,
            "milestone" | "m" => 2,
            "rc" | "cr" => 3,
            "snapshot" => 4,
            "" | "ga" | "final" | "release" => 5,
            "sp" => 6,
            _ => 7,
        }
    }

    /// Compare against the implicit token of a plain release
    fn cmp_to_release(&self) -> Ordering {
        match self {
            QualifierToken::Number(n) => n.cmp(&0),
            QualifierToken::Word(w) => Self::word_rank(w).cmp(&Self::word_rank("")),
        }
    }
}

impl Ord for QualifierToken {
    fn cmp(&self, other: &Self) -> Ordering {
        use QualifierToken::{Number, Word};
        match (self, other) {
            (Number(a), Number(b)) => a.cmp(b),
            (Number(_), Word(_)) => Ordering::Greater,
            (Word(_), Number(_)) => Ordering::Less,
            (Word(a), Word(b)) => Self::word_rank(a)
                .cmp(&Self::word_rank(b))
                .then_with(|| a.cmp(b)),
        }
    }
}

impl PartialOrd for QualifierToken {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Split a qualifier into lowercase word and number tokens. `.`, `-` and
/// `_` only separate; a change between letters and digits also splits.
fn tokenize_qualifier(qualifier: &str) -> Vec<QualifierToken> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_digits = false;

    let mut flush = |current: &mut String, in_digits: bool| {
        if current.is_empty() {
            return;
        }
        let token = if in_digits {
            current
                .parse()
                .map(QualifierToken::Number)
                .unwrap_or_else(|_| QualifierToken::Word(current.clone()))
        } else {
            QualifierToken::Word(current.to_ascii_lowercase())
        };
        tokens.push(token);
        current.clear();
    };

    for c in qualifier.chars() {
        if matches!(c, '.' | '-' | '_') {
            flush(&mut current, in_digits);
            continue;
        }
        let digit = c.is_ascii_digit();
        if !current.is_empty() && digit != in_digits {
            flush(&mut current, in_digits);
        }
        in_digits = digit;
        current.push(c);
    }
    flush(&mut current, in_digits);
    tokens
}

/// Compare two optional qualifiers. A missing qualifier or a missing
/// trailing token stands for a plain release.
fn compare_qualifiers(a: Option<&str>, b: Option<&str>) -> Ordering {
    let a = a.map(tokenize_qualifier).unwrap_or_default();
    let b = b.map(tokenize_qualifier).unwrap_or_default();

    for i in 0..a.len().max(b.len()) {
        let ordering = match (a.get(i), b.get(i)) {
            (Some(left), Some(right)) => left.cmp(right),
            (Some(left), None) => left.cmp_to_release(),
            (None, Some(right)) => right.cmp_to_release().reverse(),
            (None, None) => Ordering::Equal,
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}

impl Serialize for SchemaVersion {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
#[path = "version_test.rs"]
mod tests;
