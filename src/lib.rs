pub mod analysis;
pub mod audit;
pub mod dictionary;
pub mod fill;
pub mod generator;
pub mod grouping;
pub mod key;
pub mod report;
pub mod testament;
pub mod wordbank;

pub use analysis::{Analysis, ChapterSample, DEFAULT_MIN_ENTRIES, IncompleteChapter};
pub use audit::{AuditReport, IssueKind};
pub use dictionary::{Dictionary, DictionaryError};
pub use fill::FillPlan;
pub use generator::{DictionaryEntry, EntryOverrides, EntryRequest, GenerateError, generate_entry};
pub use grouping::{GroupedEntry, Grouping};
pub use key::{Chapter, KeyError, ParsedKey, format_key, parse_key};
pub use testament::Testament;
