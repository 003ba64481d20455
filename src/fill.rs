use std::collections::HashSet;

use tracing::{info, warn};

use crate::analysis::Analysis;
use crate::dictionary::Dictionary;
use crate::generator::{DictionaryEntry, EntryRequest, generate_entry};
use crate::grouping::Grouping;
use crate::key::Chapter;
use crate::testament::Testament;
use crate::wordbank;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlannedEntry {
    pub key: String,
    pub entry: DictionaryEntry,
}

/// Chapter that could not be brought up to the threshold because its
/// testament bank ran out of unused words.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Shortfall {
    pub book: String,
    pub chapter: Chapter,
    pub unfilled: usize,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FillPlan {
    pub entries: Vec<PlannedEntry>,
    pub shortfalls: Vec<Shortfall>,
}

impl FillPlan {
    /// Pick bank words for every incomplete chapter in `analysis`.
    ///
    /// Words already used in a chapter (case-insensitive) are skipped, as are
    /// keys that already exist in `dictionary`. Bank iteration starts at
    /// `chapter mod bank_len` so neighbouring chapters get different words.
    pub fn build(dictionary: &Dictionary, grouping: &Grouping<'_>, analysis: &Analysis) -> Self {
        let mut plan = Self::default();

        for incomplete in &analysis.incomplete {
            let Some(entries) = grouping.chapter(&incomplete.book, &incomplete.chapter) else {
                continue;
            };
            let Some(first) = entries.first() else {
                continue;
            };
            let verse = first.verse;
            let mut used: HashSet<String> =
                entries.iter().map(|entry| entry.word.to_lowercase()).collect();

            let bank = wordbank::bank(Testament::of_book(&incomplete.book));
            let start = incomplete.chapter.rem_euclid(bank.len());
            let mut remaining = incomplete.missing;

            for record in bank.iter().cycle().skip(start).take(bank.len()) {
                if remaining == 0 {
                    break;
                }
                if used.contains(record.word) {
                    continue;
                }
                let request = EntryRequest::with_record(
                    &incomplete.book,
                    incomplete.chapter.clone(),
                    verse,
                    record.word,
                    record,
                );
                let key = match request.key() {
                    Ok(key) => key,
                    Err(err) => {
                        warn!("cannot build keys for {}: {err}", incomplete.book);
                        break;
                    }
                };
                if dictionary.contains_key(&key) {
                    continue;
                }
                used.insert(record.word.to_string());
                plan.entries.push(PlannedEntry {
                    key,
                    entry: generate_entry(&request),
                });
                remaining -= 1;
            }

            if remaining > 0 {
                warn!(
                    "{} {} still needs {remaining} entries after exhausting the word bank",
                    incomplete.book, incomplete.chapter
                );
                plan.shortfalls.push(Shortfall {
                    book: incomplete.book.clone(),
                    chapter: incomplete.chapter.clone(),
                    unfilled: remaining,
                });
            }
        }

        plan
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append the planned entries to `dictionary`, returning how many were
    /// inserted.
    pub fn apply(&self, dictionary: &mut Dictionary) -> Result<usize, serde_json::Error> {
        let mut inserted = 0;
        for planned in &self.entries {
            if dictionary.insert_new(planned.key.clone(), planned.entry.to_value()?) {
                inserted += 1;
            }
        }
        info!("inserted {inserted} generated entries");
        Ok(inserted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Map, json};

    fn dict(keys: &[&str]) -> Dictionary {
        let mut map = Map::new();
        for key in keys {
            map.insert((*key).to_string(), json!({}));
        }
        Dictionary::from_map(map)
    }

    fn plan_for(dict: &Dictionary, threshold: usize) -> FillPlan {
        let grouping = Grouping::build(dict);
        let analysis = Analysis::compute(dict.len(), &grouping, threshold);
        FillPlan::build(dict, &grouping, &analysis)
    }

    #[test]
    fn plans_exactly_the_missing_entries() {
        let dict = dict(&["salmos_23_1_pastor", "joao_3_16_amor", "joao_3_17_mundo"]);
        let plan = plan_for(&dict, 4);
        let salmos = plan
            .entries
            .iter()
            .filter(|p| p.key.starts_with("salmos_23_"))
            .count();
        let joao = plan
            .entries
            .iter()
            .filter(|p| p.key.starts_with("joao_3_"))
            .count();
        assert_eq!(salmos, 3);
        assert_eq!(joao, 2);
        assert!(plan.shortfalls.is_empty());
    }

    #[test]
    fn uses_first_verse_and_testament_bank() {
        let dict = dict(&["joao_3_16_vida", "joao_3_1_noite"]);
        let plan = plan_for(&dict, 3);
        assert!(plan.entries.iter().all(|p| p.key.starts_with("joao_3_16_")));
        assert!(plan.entries.iter().all(|p| p.entry.strong.starts_with('G')));
    }

    #[test]
    fn skips_words_already_in_chapter() {
        let dict = dict(&["genesis_1_1_Amor"]);
        let grouping = Grouping::build(&dict);
        let analysis = Analysis::compute(dict.len(), &grouping, 31);
        let plan = FillPlan::build(&dict, &grouping, &analysis);
        assert!(!plan.entries.iter().any(|p| p.entry.word == "amor"));
        assert_eq!(plan.entries.len(), 29);
        assert_eq!(
            plan.shortfalls,
            vec![Shortfall {
                book: "genesis".into(),
                chapter: Chapter::from(1),
                unfilled: 1,
            }]
        );
    }

    #[test]
    fn never_reuses_existing_keys() {
        let dict = dict(&["rute_1_1_povo", "rute_1_2_amor", "x"]);
        let plan = plan_for(&dict, 10);
        for planned in &plan.entries {
            assert!(!dict.contains_key(&planned.key));
        }
        let keys: HashSet<_> = plan.entries.iter().map(|p| p.key.as_str()).collect();
        assert_eq!(keys.len(), plan.entries.len());
    }

    #[test]
    fn applying_plan_completes_chapters() {
        let mut dict = dict(&["amos_5_24_justiça", "amos_7_1_a", "amos_7_2_b"]);
        let plan = plan_for(&dict, 4);
        let inserted = plan.apply(&mut dict).unwrap();
        assert_eq!(inserted, 5);
        assert_eq!(dict.len(), 8);

        let grouping = Grouping::build(&dict);
        let analysis = Analysis::compute(dict.len(), &grouping, 4);
        assert!(analysis.incomplete.is_empty());
        assert!(plan_for(&dict, 4).is_empty());
    }

    #[test]
    fn neighbouring_chapters_start_at_different_words() {
        let dict = dict(&["daniel_1_1_a", "daniel_2_1_a"]);
        let plan = plan_for(&dict, 2);
        assert_eq!(plan.entries.len(), 2);
        assert_ne!(plan.entries[0].entry.word, plan.entries[1].entry.word);
    }

    #[test]
    fn huge_chapters_pick_a_bank_offset() {
        let dict = dict(&["genesis_99999999999999999999_1_luz"]);
        let plan = plan_for(&dict, 2);
        assert_eq!(plan.entries.len(), 1);
        assert_eq!(plan.entries[0].key, "genesis_99999999999999999999_1_vida");
    }
}
