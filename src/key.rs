use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use thiserror::Error;

pub const KEY_DELIMITER: char = '_';
const MIN_TOKENS: usize = 4;

/// A dictionary key split into its `book_chapter_verse_word` parts.
///
/// Everything after the third delimiter belongs to the word, so a key like
/// `genesis_1_1_bem_aventurado` yields the word `bem_aventurado`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedKey<'a> {
    pub book: &'a str,
    pub chapter: Chapter,
    pub verse: &'a str,
    pub word: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    #[error("expected at least 4 `_`-separated tokens, got {0}")]
    TooFewTokens(usize),
    #[error("chapter token is not an integer: {0:?}")]
    InvalidChapter(String),
    #[error("{part} must be non-empty and must not contain `_`: {value:?}")]
    InvalidComponent { part: &'static str, value: String },
}

/// Chapter number of unbounded size, stored as normalized decimal digits.
///
/// Ordering is numeric: `2 < 10 < 99999999999999999999`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Chapter {
    negative: bool,
    digits: String,
}

impl Chapter {
    pub fn as_i64(&self) -> Option<i64> {
        self.to_string().parse().ok()
    }

    /// Euclidean remainder, folded digit by digit.
    pub fn rem_euclid(&self, modulus: usize) -> usize {
        if modulus == 0 {
            return 0;
        }
        let m = modulus as u128;
        let rem = self
            .digits
            .bytes()
            .fold(0u128, |acc, d| (acc * 10 + u128::from(d - b'0')) % m) as usize;
        if self.negative && rem != 0 {
            modulus - rem
        } else {
            rem
        }
    }
}

impl From<i64> for Chapter {
    fn from(n: i64) -> Self {
        Self {
            negative: n < 0,
            digits: n.unsigned_abs().to_string(),
        }
    }
}

impl FromStr for Chapter {
    type Err = KeyError;

    /// Accepts surrounding whitespace, an optional sign and leading zeros.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        let (negative, body) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };
        if body.is_empty() || !body.bytes().all(|b| b.is_ascii_digit()) {
            return Err(KeyError::InvalidChapter(raw.to_string()));
        }
        let digits = match body.trim_start_matches('0') {
            "" => "0",
            digits => digits,
        };
        Ok(Self {
            negative: negative && digits != "0",
            digits: digits.to_string(),
        })
    }
}

impl Ord for Chapter {
    fn cmp(&self, other: &Self) -> Ordering {
        let magnitude = |a: &Self, b: &Self| {
            a.digits
                .len()
                .cmp(&b.digits.len())
                .then_with(|| a.digits.cmp(&b.digits))
        };
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => magnitude(self, other),
            (true, true) => magnitude(other, self),
        }
    }
}

impl PartialOrd for Chapter {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Chapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        f.write_str(&self.digits)
    }
}

/// Serialized as a JSON number when it fits in `i64`, as a string otherwise.
impl Serialize for Chapter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_i64() {
            Some(n) => serializer.serialize_i64(n),
            None => serializer.collect_str(self),
        }
    }
}

pub fn parse_key(raw: &str) -> Result<ParsedKey<'_>, KeyError> {
    let tokens = raw.split(KEY_DELIMITER).count();
    if tokens < MIN_TOKENS {
        return Err(KeyError::TooFewTokens(tokens));
    }

    let mut parts = raw.splitn(MIN_TOKENS, KEY_DELIMITER);
    let (Some(book), Some(chapter), Some(verse), Some(word)) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(KeyError::TooFewTokens(tokens));
    };

    Ok(ParsedKey {
        book,
        chapter: chapter.parse()?,
        verse,
        word,
    })
}

/// Build a key that [`parse_key`] splits back into the same parts. The book
/// and verse must be non-empty and free of the delimiter; the word may
/// contain it.
pub fn format_key(
    book: &str,
    chapter: &Chapter,
    verse: &str,
    word: &str,
) -> Result<String, KeyError> {
    check_component("book", book)?;
    check_component("verse", verse)?;
    Ok(format!("{book}_{chapter}_{verse}_{word}"))
}

fn check_component(part: &'static str, value: &str) -> Result<(), KeyError> {
    if value.is_empty() || value.contains(KEY_DELIMITER) {
        return Err(KeyError::InvalidComponent {
            part,
            value: value.to_string(),
        });
    }
    Ok(())
}
