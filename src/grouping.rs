use std::collections::BTreeMap;

use serde_json::Value;
use tracing::debug;

use crate::dictionary::Dictionary;
use crate::key::{Chapter, KeyError, parse_key};

/// One parsed entry inside a chapter bucket, borrowing from the dictionary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupedEntry<'a> {
    pub key: &'a str,
    pub verse: &'a str,
    pub word: &'a str,
    pub data: &'a Value,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkippedKey<'a> {
    pub key: &'a str,
    pub reason: KeyError,
}

/// Derived book → chapter → entries view over a [`Dictionary`].
///
/// Books and chapters iterate in ascending order; entries inside a chapter
/// keep the dictionary's source order. Buckets only exist for keys that
/// parsed, so none of them is ever empty. The order in which chapters first
/// appear in the source is kept as well.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grouping<'a> {
    books: BTreeMap<&'a str, BTreeMap<Chapter, Vec<GroupedEntry<'a>>>>,
    first_seen: Vec<(&'a str, Chapter)>,
    skipped: Vec<SkippedKey<'a>>,
}

impl<'a> Grouping<'a> {
    pub fn build(dictionary: &'a Dictionary) -> Self {
        let mut grouping = Self::default();
        for (key, data) in dictionary.iter() {
            match parse_key(key) {
                Ok(parsed) => {
                    let chapters = grouping.books.entry(parsed.book).or_default();
                    if !chapters.contains_key(&parsed.chapter) {
                        grouping
                            .first_seen
                            .push((parsed.book, parsed.chapter.clone()));
                    }
                    chapters.entry(parsed.chapter).or_default().push(GroupedEntry {
                        key,
                        verse: parsed.verse,
                        word: parsed.word,
                        data,
                    });
                }
                Err(reason) => {
                    debug!("skipping key {key:?}: {reason}");
                    grouping.skipped.push(SkippedKey { key, reason });
                }
            }
        }
        grouping
    }

    /// Every `(book, chapter, entries)` bucket in book then chapter order.
    pub fn chapters(&self) -> impl Iterator<Item = (&'a str, &Chapter, &[GroupedEntry<'a>])> {
        self.books.iter().flat_map(|(book, chapters)| {
            chapters
                .iter()
                .map(move |(chapter, entries)| (*book, chapter, entries.as_slice()))
        })
    }

    /// Every bucket in the order its first key appears in the dictionary.
    pub fn chapters_in_source_order(
        &self,
    ) -> impl Iterator<Item = (&'a str, &Chapter, &[GroupedEntry<'a>])> {
        self.first_seen.iter().filter_map(move |(book, chapter)| {
            self.chapter(book, chapter)
                .map(|entries| (*book, chapter, entries))
        })
    }

    pub fn chapter(&self, book: &str, chapter: &Chapter) -> Option<&[GroupedEntry<'a>]> {
        self.books
            .get(book)
            .and_then(|chapters| chapters.get(chapter))
            .map(Vec::as_slice)
    }

    pub fn book_count(&self) -> usize {
        self.books.len()
    }

    pub fn chapter_count(&self) -> usize {
        self.first_seen.len()
    }

    pub fn parsed_count(&self) -> usize {
        self.chapters().map(|(_, _, entries)| entries.len()).sum()
    }

    pub fn skipped(&self) -> &[SkippedKey<'a>] {
        &self.skipped
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
