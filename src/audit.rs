use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::dictionary::Dictionary;
use crate::key::parse_key;

pub const ISSUE_PREVIEW_LIMIT: usize = 500;
pub const MIN_REFERENCES: usize = 2;
pub const MAX_REFERENCES: usize = 5;

const BASE_FIELDS: [&str; 5] = [
    "palavra_pt",
    "palavra_original",
    "transliteracao",
    "strong",
    "significado_raiz",
];
const CONTEXT_FIELDS: [&str; 4] = [
    "significado_contextual",
    "explicacao_detalhada",
    "por_que_esta_palavra",
    "conexao_teologica",
];

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    InvalidKey,
    InvalidStrong,
    EmptyBase,
    EmptyContext,
    InvalidReferences,
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            IssueKind::InvalidKey => "key is not book_chapter_verse_word",
            IssueKind::InvalidStrong => "Strong's code is not H/G followed by digits",
            IssueKind::EmptyBase => "a required base field is empty",
            IssueKind::EmptyContext => "a narrative field is empty",
            IssueKind::InvalidReferences => "cross-references must be a list of 2 to 5 items",
        })
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Issue {
    pub key: String,
    pub kind: IssueKind,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct BookAudit {
    pub total: usize,
    pub complete: usize,
    pub flagged: usize,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct AuditReport {
    pub total_entries: usize,
    pub counts: BTreeMap<IssueKind, usize>,
    pub by_book: BTreeMap<String, BookAudit>,
    pub total_issues: usize,
    pub issues_preview: Vec<Issue>,
}

impl AuditReport {
    pub fn run(dictionary: &Dictionary) -> Self {
        let mut report = Self {
            total_entries: dictionary.len(),
            ..Self::default()
        };

        for (key, entry) in dictionary.iter() {
            let Ok(parsed) = parse_key(key) else {
                report.record(key, IssueKind::InvalidKey);
                continue;
            };

            let kinds = check_entry(entry);
            let book = report.by_book.entry(parsed.book.to_string()).or_default();
            book.total += 1;
            if kinds.is_empty() {
                book.complete += 1;
            } else {
                book.flagged += 1;
            }
            for kind in kinds {
                report.record(key, kind);
            }
        }

        report
    }

    fn record(&mut self, key: &str, kind: IssueKind) {
        *self.counts.entry(kind).or_insert(0) += 1;
        self.total_issues += 1;
        if self.issues_preview.len() < ISSUE_PREVIEW_LIMIT {
            self.issues_preview.push(Issue {
                key: key.to_string(),
                kind,
            });
        }
    }

    pub fn count(&self, kind: IssueKind) -> usize {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    pub fn is_clean(&self) -> bool {
        self.total_issues == 0
    }
}

/// All issues found in a single entry, in a fixed order.
pub fn check_entry(entry: &Value) -> Vec<IssueKind> {
    let mut kinds = Vec::new();

    if !is_strong_code(text_field(entry, "strong")) {
        kinds.push(IssueKind::InvalidStrong);
    }
    if BASE_FIELDS.iter().any(|field| text_field(entry, field).trim().is_empty()) {
        kinds.push(IssueKind::EmptyBase);
    }
    if CONTEXT_FIELDS
        .iter()
        .any(|field| text_field(entry, field).trim().is_empty())
    {
        kinds.push(IssueKind::EmptyContext);
    }
    let references_ok = entry
        .get("referencias_relacionadas")
        .and_then(Value::as_array)
        .is_some_and(|refs| (MIN_REFERENCES..=MAX_REFERENCES).contains(&refs.len()));
    if !references_ok {
        kinds.push(IssueKind::InvalidReferences);
    }

    kinds
}

fn text_field<'a>(entry: &'a Value, field: &str) -> &'a str {
    entry.get(field).and_then(Value::as_str).unwrap_or("")
}

/// `H` or `G` followed by at least one ASCII digit.
pub fn is_strong_code(raw: &str) -> bool {
    let mut chars = raw.chars();
    matches!(chars.next(), Some('H' | 'G'))
        && !chars.as_str().is_empty()
        && chars.all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{EntryRequest, generate_entry};
    use crate::key::Chapter;
    use serde_json::{Map, json};

    fn generated(book: &str, chapter: i64, word: &str) -> Value {
        generate_entry(&EntryRequest::from_bank(book, Chapter::from(chapter), "1", word).unwrap())
            .to_value()
            .unwrap()
    }

    #[test]
    fn recognizes_strong_codes() {
        assert!(is_strong_code("H160"));
        assert!(is_strong_code("G26"));
        assert!(!is_strong_code("H"));
        assert!(!is_strong_code("h160"));
        assert!(!is_strong_code("X12"));
        assert!(!is_strong_code("G12a"));
        assert!(!is_strong_code(""));
    }

    #[test]
    fn generated_entries_pass_every_check() {
        assert!(check_entry(&generated("genesis", 1, "luz")).is_empty());
        assert!(check_entry(&generated("joao", 1, "palavra")).is_empty());
    }

    #[test]
    fn flags_bad_strong_and_short_references() {
        let mut entry = generated("salmos", 23, "refúgio");
        entry["strong"] = json!("4268");
        entry["referencias_relacionadas"] = json!([{"referencia": "Salmos 46:1"}]);
        assert_eq!(
            check_entry(&entry),
            vec![IssueKind::InvalidStrong, IssueKind::InvalidReferences]
        );
    }

    #[test]
    fn empty_object_has_every_field_issue() {
        assert_eq!(
            check_entry(&json!({})),
            vec![
                IssueKind::InvalidStrong,
                IssueKind::EmptyBase,
                IssueKind::EmptyContext,
                IssueKind::InvalidReferences,
            ]
        );
    }

    #[test]
    fn tallies_per_book_and_invalid_keys() {
        let mut map = Map::new();
        map.insert("genesis_1_1_luz".into(), generated("genesis", 1, "luz"));
        map.insert("genesis_1_2_vida".into(), json!({"strong": "H2416"}));
        map.insert("joao_1_1_palavra".into(), generated("joao", 1, "palavra"));
        map.insert("metadata".into(), json!({"version": 2}));
        let report = AuditReport::run(&Dictionary::from_map(map));

        assert_eq!(report.total_entries, 4);
        assert_eq!(report.count(IssueKind::InvalidKey), 1);
        assert_eq!(report.count(IssueKind::InvalidStrong), 0);
        assert_eq!(report.count(IssueKind::EmptyBase), 1);
        assert_eq!(
            report.by_book["genesis"],
            BookAudit {
                total: 2,
                complete: 1,
                flagged: 1,
            }
        );
        assert_eq!(report.by_book["joao"].complete, 1);
        assert!(!report.is_clean());
        assert_eq!(report.issues_preview[0].key, "genesis_1_2_vida");
    }
}
