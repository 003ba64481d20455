use std::collections::BTreeMap;

use serde::Serialize;

use crate::grouping::Grouping;
use crate::key::Chapter;

pub const DEFAULT_MIN_ENTRIES: usize = 4;
pub const EXACT_SAMPLE_LIMIT: usize = 10;

/// A chapter with fewer entries than the threshold.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct IncompleteChapter {
    pub book: String,
    pub chapter: Chapter,
    pub count: usize,
    pub missing: usize,
}

/// A chapter sitting exactly at the threshold, kept for inspection.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ChapterSample {
    pub book: String,
    pub chapter: Chapter,
    pub keys: Vec<String>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Analysis {
    pub threshold: usize,
    pub total_entries: usize,
    pub parsed_entries: usize,
    pub skipped_keys: usize,
    pub total_books: usize,
    pub total_chapters: usize,
    /// Entry count → number of chapters holding exactly that many entries.
    pub distribution: BTreeMap<usize, usize>,
    pub incomplete: Vec<IncompleteChapter>,
    pub exact_samples: Vec<ChapterSample>,
}

impl Analysis {
    /// `total_entries` is the raw dictionary size; keys that failed to parse
    /// count there even though they never reach a chapter bucket.
    ///
    /// Exact-threshold samples follow the order in which chapters first
    /// appear in the source; incomplete chapters are sorted by book and
    /// chapter.
    pub fn compute(total_entries: usize, grouping: &Grouping<'_>, threshold: usize) -> Self {
        let mut distribution = BTreeMap::new();
        let mut incomplete = Vec::new();
        let mut exact_samples = Vec::new();

        for (book, chapter, entries) in grouping.chapters_in_source_order() {
            let count = entries.len();
            *distribution.entry(count).or_insert(0) += 1;

            if count < threshold {
                incomplete.push(IncompleteChapter {
                    book: book.to_string(),
                    chapter: chapter.clone(),
                    count,
                    missing: threshold - count,
                });
            } else if count == threshold && exact_samples.len() < EXACT_SAMPLE_LIMIT {
                exact_samples.push(ChapterSample {
                    book: book.to_string(),
                    chapter: chapter.clone(),
                    keys: entries.iter().map(|entry| entry.key.to_string()).collect(),
                });
            }
        }

        incomplete.sort_by(|a, b| (&a.book, &a.chapter).cmp(&(&b.book, &b.chapter)));

        Self {
            threshold,
            total_entries,
            parsed_entries: grouping.parsed_count(),
            skipped_keys: grouping.skipped().len(),
            total_books: grouping.book_count(),
            total_chapters: grouping.chapter_count(),
            distribution,
            incomplete,
            exact_samples,
        }
    }

    pub fn missing_total(&self) -> usize {
        self.incomplete.iter().map(|chapter| chapter.missing).sum()
    }

    /// Incomplete chapters grouped per book, books and chapters ascending.
    pub fn incomplete_by_book(&self) -> BTreeMap<&str, Vec<&IncompleteChapter>> {
        let mut by_book: BTreeMap<&str, Vec<&IncompleteChapter>> = BTreeMap::new();
        for chapter in &self.incomplete {
            by_book.entry(chapter.book.as_str()).or_default().push(chapter);
        }
        by_book
    }
}
