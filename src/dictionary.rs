use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::info;

/// The whole dictionary document, kept in source order.
///
/// Entries stay opaque [`Value`]s; analysis only looks at keys and the
/// auditor reads individual fields on demand.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dictionary {
    entries: Map<String, Value>,
}

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("dictionary not found at {}", path.display())]
    NotFound { path: PathBuf },
    #[error("failed to read dictionary at {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("malformed JSON in {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("top-level value in {} is not a JSON object", path.display())]
    NotAnObject { path: PathBuf },
    #[error("failed to write dictionary to {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

impl Dictionary {
    pub fn from_map(entries: Map<String, Value>) -> Self {
        Self { entries }
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => DictionaryError::NotFound {
                path: path.to_path_buf(),
            },
            _ => DictionaryError::Io {
                path: path.to_path_buf(),
                source,
            },
        })?;
        let dictionary = Self::parse(&raw).map_err(|err| match err {
            ParseError::Json(source) => DictionaryError::Malformed {
                path: path.to_path_buf(),
                source,
            },
            ParseError::NotAnObject => DictionaryError::NotAnObject {
                path: path.to_path_buf(),
            },
        })?;
        info!(
            "loaded {} entries from {}",
            dictionary.len(),
            path.display()
        );
        Ok(dictionary)
    }

    fn parse(raw: &str) -> Result<Self, ParseError> {
        match serde_json::from_str::<Value>(raw).map_err(ParseError::Json)? {
            Value::Object(entries) => Ok(Self { entries }),
            _ => Err(ParseError::NotAnObject),
        }
    }

    /// Write the document as pretty-printed UTF-8 with non-ASCII text kept
    /// literal. The file is replaced atomically, so `path` may be the file
    /// the dictionary was loaded from.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), DictionaryError> {
        let path = path.as_ref();
        let write_err = |source: io::Error| DictionaryError::Write {
            path: path.to_path_buf(),
            source,
        };

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
        {
            let mut writer = BufWriter::new(tmp.as_file_mut());
            serde_json::to_writer_pretty(&mut writer, &self.entries)
                .map_err(|err| write_err(err.into()))?;
            writer.write_all(b"\n").map_err(write_err)?;
            writer.flush().map_err(write_err)?;
        }
        tmp.persist(path).map_err(|err| write_err(err.error))?;

        info!("wrote {} entries to {}", self.len(), path.display());
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Append an entry, returning `false` without touching the document when
    /// the key already exists.
    pub fn insert_new(&mut self, key: String, value: Value) -> bool {
        if self.entries.contains_key(&key) {
            return false;
        }
        self.entries.insert(key, value);
        true
    }
}

enum ParseError {
    Json(serde_json::Error),
    NotAnObject,
}
