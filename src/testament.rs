use std::fmt;

/// Book identifiers of the New Testament as they appear in dictionary keys.
pub const NEW_TESTAMENT_BOOKS: [&str; 27] = [
    "mateus",
    "marcos",
    "lucas",
    "joao",
    "atos",
    "romanos",
    "1corintios",
    "2corintios",
    "galatas",
    "efesios",
    "filipenses",
    "colossenses",
    "1tessalonicenses",
    "2tessalonicenses",
    "1timoteo",
    "2timoteo",
    "tito",
    "filemom",
    "hebreus",
    "tiago",
    "1pedro",
    "2pedro",
    "1joao",
    "2joao",
    "3joao",
    "judas",
    "apocalipse",
];

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Testament {
    Old,
    New,
}

impl Testament {
    /// Classify a book identifier. Anything not in [`NEW_TESTAMENT_BOOKS`]
    /// (compared case-insensitively) is treated as Old Testament.
    pub fn of_book(book: &str) -> Self {
        let lower = book.to_lowercase();
        if NEW_TESTAMENT_BOOKS.contains(&lower.as_str()) {
            Testament::New
        } else {
            Testament::Old
        }
    }

    /// Short code used by the dictionary tooling (`AT` / `NT`).
    pub fn code(self) -> &'static str {
        match self {
            Testament::Old => "AT",
            Testament::New => "NT",
        }
    }
}

impl fmt::Display for Testament {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
