use serde::{Deserialize, Serialize};
use std::fmt;

pub const NO_MODULE_MESSAGE: &str = "No module provided.";
pub const UNRECOGNIZED_MESSAGE: &str = "Module non reconnu.";

/// The closed set of library names the tools know about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Keyword {
    Pandas,
    Numpy,
}

impl Keyword {
    pub const ALL: [Keyword; 2] = [Keyword::Pandas, Keyword::Numpy];

    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::Pandas => "pandas",
            Keyword::Numpy => "numpy",
        }
    }

    /// Case-sensitive, untrimmed lookup.
    pub fn from_exact(candidate: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|keyword| keyword.as_str() == candidate)
    }

    /// Line printed by the dispatcher when this keyword is passed.
    pub fn detected_message(self) -> &'static str {
        match self {
            Keyword::Pandas => "Utilisation de 'pandas' détectée.",
            Keyword::Numpy => "Utilisation de 'numpy' détectée.",
        }
    }

    /// Annotation attached to each occurrence found in source code.
    pub fn library_message(self) -> String {
        format!("Librairie **{}** détectée.", self.as_str())
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of looking at the first argument of an invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    NoModule,
    Detected(Keyword),
    Unrecognized(String),
}

impl Classification {
    pub fn message(&self) -> &'static str {
        match self {
            Classification::NoModule => NO_MODULE_MESSAGE,
            Classification::Detected(keyword) => keyword.detected_message(),
            Classification::Unrecognized(_) => UNRECOGNIZED_MESSAGE,
        }
    }
}

/// A keyword name and the message reported for each of its occurrences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordRule {
    pub name: String,
    pub message: String,
}

impl From<Keyword> for KeywordRule {
    fn from(keyword: Keyword) -> Self {
        Self {
            name: keyword.as_str().to_string(),
            message: keyword.library_message(),
        }
    }
}

/// One occurrence of a keyword inside a block of text. Positions are 1-based
/// and columns count characters, not bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    pub keyword: String,
    pub matched: String,
    pub line: usize,
    pub column: usize,
    pub message: String,
}

/// A match located in a file on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cell: Option<usize>,
    #[serde(flatten)]
    pub occurrence: Match,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.cell {
            Some(cell) => write!(
                f,
                "{}[cell {}]:{}:{}: {}",
                self.path, cell, self.occurrence.line, self.occurrence.column, self.occurrence.message
            ),
            None => write!(
                f,
                "{}:{}:{}: {}",
                self.path, self.occurrence.line, self.occurrence.column, self.occurrence.message
            ),
        }
    }
}
