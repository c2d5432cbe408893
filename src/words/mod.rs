use std::path::Path;

use serde_json::Value;
use tokio::fs;

use crate::errors::WordListError;
use crate::models::WordEntry;

/// Ordered `{word: clue}` list supplied to the generator
#[derive(Debug, Clone, Default)]
pub struct WordList {
    entries: Vec<WordEntry>,
}

impl WordList {
    /// Load a word list from a file.
    ///
    /// `.json` files hold an object mapping words to clues; anything else is
    /// read as `word;clue` lines.
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self, WordListError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).await?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let list = if is_json {
            Self::from_json(&content)?
        } else {
            Self::from_lines(&content)?
        };

        tracing::info!("Loaded {} words from {}", list.len(), path.display());

        Ok(list)
    }

    /// Parse a JSON object. Key order is kept; `null` clues become `None`.
    pub fn from_json(content: &str) -> Result<Self, WordListError> {
        let Value::Object(map) = serde_json::from_str::<Value>(content)? else {
            return Err(WordListError::NotAnObject);
        };

        let entries = map
            .into_iter()
            .map(|(word, clue)| {
                let clue = match clue {
                    Value::Null => None,
                    Value::String(text) => Some(text),
                    other => Some(other.to_string()),
                };
                WordEntry::new(word, clue)
            })
            .collect();

        Ok(Self { entries })
    }

    /// Parse `word;clue` lines. Blank lines and `//` comments are skipped and
    /// the clue may be left out.
    pub fn from_lines(content: &str) -> Result<Self, WordListError> {
        let mut entries = Vec::new();

        for (index, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with("//") {
                continue;
            }

            let (word, clue) = match line.split_once(';') {
                Some((word, clue)) => (word.trim(), Some(clue.trim())),
                None => (line, None),
            };
            if word.is_empty() {
                return Err(WordListError::MalformedLine { line: index + 1 });
            }

            let clue = clue.filter(|c| !c.is_empty()).map(str::to_string);
            entries.push(WordEntry::new(word, clue));
        }

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<WordEntry> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<WordEntry>> for WordList {
    fn from(entries: Vec<WordEntry>) -> Self {
        Self { entries }
    }
}
