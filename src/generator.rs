use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::key::{Chapter, KeyError, format_key};
use crate::testament::Testament;
use crate::wordbank::{self, WordRecord};

/// Cross-references attached to every generated entry.
pub const DEFAULT_REFERENCES: [(&str, &str); 3] = [
    ("Salmos 119:105", "A Palavra como guia"),
    ("Romanos 8:28", "Todas as coisas cooperam para o bem"),
    ("Filipenses 4:13", "Tudo posso naquele que me fortalece"),
];

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct CrossReference {
    #[serde(rename = "referencia")]
    pub reference: String,
    #[serde(rename = "relevancia")]
    pub relevance: String,
}

/// A complete dictionary entry, serialized with the document's field names.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    #[serde(rename = "palavra_pt")]
    pub word: String,
    #[serde(rename = "palavra_original")]
    pub original: String,
    #[serde(rename = "transliteracao")]
    pub transliteration: String,
    pub strong: String,
    #[serde(rename = "significado_raiz")]
    pub root_meaning: String,
    #[serde(rename = "significado_contextual")]
    pub contextual_meaning: String,
    #[serde(rename = "explicacao_detalhada")]
    pub detailed_explanation: String,
    #[serde(rename = "por_que_esta_palavra")]
    pub rationale: String,
    #[serde(rename = "conexao_teologica")]
    pub theological_connection: String,
    #[serde(rename = "referencias_relacionadas")]
    pub references: Vec<CrossReference>,
}

impl DictionaryEntry {
    pub fn to_value(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerateError {
    #[error("no {testament} word-bank record matches {word:?}")]
    UnknownWord { testament: Testament, word: String },
}

/// Values supplied by the caller instead of, or on top of, a bank record.
///
/// `record` names the bank word or theme to start from; without it the
/// target word itself is looked up. When no record matches, `strong`,
/// `original`, `transliteration`, `root_meaning` and `theme` must all be
/// given.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EntryOverrides<'a> {
    pub record: Option<&'a str>,
    pub strong: Option<&'a str>,
    pub original: Option<&'a str>,
    pub transliteration: Option<&'a str>,
    pub root_meaning: Option<&'a str>,
    pub theme: Option<&'a str>,
    pub book_description: Option<&'a str>,
}

/// Everything needed to template one entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntryRequest<'a> {
    pub book: &'a str,
    pub chapter: Chapter,
    pub verse: &'a str,
    pub word: &'a str,
    pub strong: &'a str,
    pub original: &'a str,
    pub transliteration: &'a str,
    pub root_meaning: &'a str,
    pub theme: &'a str,
    pub book_description: &'a str,
}

impl<'a> EntryRequest<'a> {
    /// Build a request from an explicit word-bank record.
    pub fn with_record(
        book: &'a str,
        chapter: Chapter,
        verse: &'a str,
        word: &'a str,
        record: &'a WordRecord,
    ) -> Self {
        Self {
            book,
            chapter,
            verse,
            word,
            strong: record.strong,
            original: record.original,
            transliteration: record.transliteration,
            root_meaning: record.root_meaning,
            theme: record.theme,
            book_description: wordbank::book_description(book).unwrap_or(book),
        }
    }

    /// Resolve `word` against the word bank of the book's testament.
    pub fn from_bank(
        book: &'a str,
        chapter: Chapter,
        verse: &'a str,
        word: &'a str,
    ) -> Result<Self, GenerateError> {
        Self::resolve(book, chapter, verse, word, &EntryOverrides::default())
    }

    /// Resolve the record named by `overrides.record` (or `word`) and apply
    /// the remaining overrides on top of it.
    pub fn resolve(
        book: &'a str,
        chapter: Chapter,
        verse: &'a str,
        word: &'a str,
        overrides: &EntryOverrides<'a>,
    ) -> Result<Self, GenerateError> {
        let testament = Testament::of_book(book);
        let name = overrides.record.unwrap_or(word);
        let request = match wordbank::lookup(testament, name) {
            Some(record) => Self::with_record(book, chapter, verse, word, record),
            None => {
                let (
                    None,
                    Some(strong),
                    Some(original),
                    Some(transliteration),
                    Some(root_meaning),
                    Some(theme),
                ) = (
                    overrides.record,
                    overrides.strong,
                    overrides.original,
                    overrides.transliteration,
                    overrides.root_meaning,
                    overrides.theme,
                )
                else {
                    return Err(GenerateError::UnknownWord {
                        testament,
                        word: name.to_string(),
                    });
                };
                Self {
                    book,
                    chapter,
                    verse,
                    word,
                    strong,
                    original,
                    transliteration,
                    root_meaning,
                    theme,
                    book_description: wordbank::book_description(book).unwrap_or(book),
                }
            }
        };
        Ok(request.with_overrides(overrides))
    }

    fn with_overrides(self, overrides: &EntryOverrides<'a>) -> Self {
        Self {
            strong: overrides.strong.unwrap_or(self.strong),
            original: overrides.original.unwrap_or(self.original),
            transliteration: overrides.transliteration.unwrap_or(self.transliteration),
            root_meaning: overrides.root_meaning.unwrap_or(self.root_meaning),
            theme: overrides.theme.unwrap_or(self.theme),
            book_description: overrides.book_description.unwrap_or(self.book_description),
            ..self
        }
    }

    pub fn testament(&self) -> Testament {
        Testament::of_book(self.book)
    }

    /// The dictionary key this entry is stored under. Fails when the book or
    /// verse would not survive a round trip through [`parse_key`].
    ///
    /// [`parse_key`]: crate::key::parse_key
    pub fn key(&self) -> Result<String, KeyError> {
        format_key(self.book, &self.chapter, self.verse, self.word)
    }
}

pub fn generate_entry(request: &EntryRequest<'_>) -> DictionaryEntry {
    let EntryRequest {
        chapter,
        verse,
        word,
        strong,
        original,
        transliteration,
        root_meaning,
        theme,
        book_description,
        ..
    } = request;

    DictionaryEntry {
        word: word.to_string(),
        original: original.to_string(),
        transliteration: transliteration.to_string(),
        strong: strong.to_string(),
        root_meaning: root_meaning.to_string(),
        contextual_meaning: format!(
            "Em {book_description}, esta palavra expressa {} no contexto de {theme}, \
             revelando um aspecto profundo do caráter de Deus e Seu relacionamento com o ser humano.",
            root_meaning.to_lowercase()
        ),
        detailed_explanation: format!(
            "O termo {transliteration} ({strong}) carrega um significado rico que vai além de uma \
             simples tradução. Em {book_description}, o uso desta palavra revela a profundidade da \
             comunicação divina com seu povo. No contexto do capítulo {chapter}, versículo {verse}, \
             o autor emprega este termo para transmitir uma verdade espiritual que ressoa através \
             de toda a Escritura."
        ),
        rationale: format!(
            "A palavra '{word}' ({transliteration}) é fundamental nesta passagem porque ilumina o \
             tema de {theme} que permeia este trecho. Compreender seu significado original \
             enriquece nossa leitura e revela nuances que se perdem na tradução."
        ),
        theological_connection: format!(
            "Esta palavra conecta-se ao tema bíblico mais amplo de {theme}. Em {book_description}, \
             vemos como Deus progressivamente revela Seu plano redentor, e o uso de \
             {transliteration} aqui contribui para essa revelação progressiva que culmina em Cristo."
        ),
        references: default_references(),
    }
}

pub fn default_references() -> Vec<CrossReference> {
    DEFAULT_REFERENCES
        .iter()
        .map(|(reference, relevance)| CrossReference {
            reference: (*reference).to_string(),
            relevance: (*relevance).to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordbank::OLD_TESTAMENT_WORDS;
    use serde_json::json;

    fn refuge() -> &'static WordRecord {
        OLD_TESTAMENT_WORDS
            .iter()
            .find(|record| record.word == "refúgio")
            .unwrap()
    }

    #[test]
    fn psalm_23_entry_uses_supplied_record() {
        let request = EntryRequest::with_record("salmos", Chapter::from(23), "1", "pastor", refuge());
        let entry = generate_entry(&request);

        assert_eq!(entry.word, "pastor");
        assert_eq!(entry.strong, "H4268");
        assert_eq!(entry.transliteration, "machaseh");
        assert!(entry.contextual_meaning.contains("refúgio, abrigo"));
        assert!(entry.contextual_meaning.contains("proteção"));
        assert!(
            entry
                .contextual_meaning
                .starts_with("Em Salmos, o livro de orações e louvor, esta palavra expressa")
        );
        assert!(
            entry
                .detailed_explanation
                .contains("No contexto do capítulo 23, versículo 1,")
        );
        assert!(entry.rationale.starts_with("A palavra 'pastor' (machaseh)"));
        assert_eq!(entry.references, default_references());
    }

    #[test]
    fn references_do_not_depend_on_input() {
        let a = generate_entry(&EntryRequest::from_bank("genesis", Chapter::from(1), "1", "criação").unwrap());
        let b = generate_entry(&EntryRequest::from_bank("joao", Chapter::from(3), "16", "amor").unwrap());
        assert_eq!(a.references, b.references);
        assert_eq!(a.references.len(), 3);
        assert_eq!(a.references[0].reference, "Salmos 119:105");
        assert_eq!(a.references[2].relevance, "Tudo posso naquele que me fortalece");
    }

    #[test]
    fn from_bank_selects_testament_bank() {
        let nt = EntryRequest::from_bank("joao", Chapter::from(3), "16", "amor").unwrap();
        assert_eq!(nt.testament(), Testament::New);
        assert_eq!(nt.strong, "G26");

        let ot = EntryRequest::from_bank("Unknown_Book_123", Chapter::from(1), "1", "amor").unwrap();
        assert_eq!(ot.testament(), Testament::Old);
        assert_eq!(ot.strong, "H160");
        assert_eq!(ot.book_description, "Unknown_Book_123");
    }

    #[test]
    fn from_bank_reports_unknown_words() {
        let err = EntryRequest::from_bank("genesis", Chapter::from(1), "1", "pastor").unwrap_err();
        assert_eq!(
            err,
            GenerateError::UnknownWord {
                testament: Testament::Old,
                word: "pastor".into(),
            }
        );
    }

    #[test]
    fn serializes_with_document_field_names() {
        let request = EntryRequest::from_bank("romanos", Chapter::from(5), "1", "paz").unwrap();
        assert_eq!(request.key().unwrap(), "romanos_5_1_paz");
        let value = generate_entry(&request).to_value().unwrap();
        assert_eq!(value["palavra_pt"], json!("paz"));
        assert_eq!(value["palavra_original"], json!("εἰρήνη"));
        assert_eq!(
            value["referencias_relacionadas"][1],
            json!({"referencia": "Romanos 8:28", "relevancia": "Todas as coisas cooperam para o bem"})
        );
        let back: DictionaryEntry = serde_json::from_value(value).unwrap();
        assert_eq!(back.word, "paz");
    }

    #[test]
    fn record_can_differ_from_target_word() {
        let overrides = EntryOverrides {
            record: Some("proteção"),
            ..EntryOverrides::default()
        };
        let request =
            EntryRequest::resolve("salmos", Chapter::from(23), "1", "pastor", &overrides).unwrap();
        assert_eq!(request.word, "pastor");
        assert_eq!(request.strong, "H4268");
        assert_eq!(
            request,
            EntryRequest::with_record("salmos", Chapter::from(23), "1", "pastor", refuge())
        );
    }

    #[test]
    fn overrides_replace_record_fields() {
        let overrides = EntryOverrides {
            record: Some("refúgio"),
            strong: Some("H7462"),
            original: Some("רָעָה"),
            transliteration: Some("ra'ah"),
            book_description: Some("o salmo do pastor"),
            ..EntryOverrides::default()
        };
        let request =
            EntryRequest::resolve("salmos", Chapter::from(23), "1", "pastor", &overrides).unwrap();
        assert_eq!(request.strong, "H7462");
        assert_eq!(request.transliteration, "ra'ah");
        assert_eq!(request.root_meaning, "Refúgio, abrigo");
        assert_eq!(request.theme, "proteção");
        let entry = generate_entry(&request);
        assert!(entry.contextual_meaning.starts_with("Em o salmo do pastor, esta palavra"));
        assert!(entry.rationale.starts_with("A palavra 'pastor' (ra'ah)"));
    }

    #[test]
    fn words_outside_the_bank_need_every_field() {
        let partial = EntryOverrides {
            strong: Some("H7462"),
            ..EntryOverrides::default()
        };
        assert!(matches!(
            EntryRequest::resolve("salmos", Chapter::from(23), "1", "pastor", &partial),
            Err(GenerateError::UnknownWord { .. })
        ));

        let full = EntryOverrides {
            strong: Some("H7462"),
            original: Some("רָעָה"),
            transliteration: Some("ra'ah"),
            root_meaning: Some("Apascentar, pastorear"),
            theme: Some("cuidado"),
            ..partial
        };
        let request =
            EntryRequest::resolve("salmos", Chapter::from(23), "1", "pastor", &full).unwrap();
        assert_eq!(request.book_description, "Salmos, o livro de orações e louvor");
        assert!(generate_entry(&request).contextual_meaning.contains("apascentar, pastorear"));
    }

    #[test]
    fn unknown_record_name_is_an_error() {
        let overrides = EntryOverrides {
            record: Some("cajado"),
            strong: Some("H7626"),
            original: Some("שֵׁבֶט"),
            transliteration: Some("shebet"),
            root_meaning: Some("Vara"),
            theme: Some("disciplina"),
            ..EntryOverrides::default()
        };
        assert_eq!(
            EntryRequest::resolve("salmos", Chapter::from(23), "4", "vara", &overrides),
            Err(GenerateError::UnknownWord {
                testament: Testament::Old,
                word: "cajado".into(),
            })
        );
    }

    #[test]
    fn key_rejects_books_that_would_not_parse_back() {
        let request =
            EntryRequest::from_bank("Unknown_Book_123", Chapter::from(1), "1", "amor").unwrap();
        assert_eq!(
            request.key(),
            Err(KeyError::InvalidComponent {
                part: "book",
                value: "Unknown_Book_123".into(),
            })
        );
        let request = EntryRequest::from_bank("salmos", Chapter::from(23), "1_2", "paz").unwrap();
        assert!(request.key().is_err());
    }

    #[test]
    fn generated_keys_group_back_into_their_chapter() {
        use crate::dictionary::Dictionary;
        use crate::grouping::Grouping;

        let huge: Chapter = "99999999999999999999".parse().unwrap();
        let request =
            EntryRequest::from_bank("Unknown-Book-123", huge.clone(), "1", "amor").unwrap();
        let mut dictionary = Dictionary::default();
        let key = request.key().unwrap();
        assert!(dictionary.insert_new(key, generate_entry(&request).to_value().unwrap()));
        let grouping = Grouping::build(&dictionary);
        assert!(grouping.skipped().is_empty());
        let bucket = grouping.chapter("Unknown-Book-123", &huge).unwrap();
        assert_eq!(bucket[0].word, "amor");
        assert!(
            generate_entry(&request)
                .detailed_explanation
                .contains("capítulo 99999999999999999999,")
        );
    }
}
