use std::fs;
use std::path::Path;

use rand::Rng;

use crate::error::SeedError;

/// Vocabulary the generator draws from when no word file is configured.
const BUILTIN_WORDS: &[&str] = &[
    "lorem",
    "ipsum",
    "dolor",
    "sit",
    "amet",
    "consectetur",
    "adipisici",
    "elit",
    "sed",
    "eiusmod",
    "tempor",
    "incidunt",
    "ut",
    "labore",
    "et",
    "dolore",
    "magna",
    "aliqua",
    "enim",
    "ad",
    "minim",
    "veniam",
    "quis",
    "nostrud",
    "exercitation",
    "ullamco",
    "laboris",
    "nisi",
    "aliquid",
    "ex",
    "ea",
    "commodi",
    "consequat",
    "duis",
    "aute",
    "irure",
    "in",
    "reprehenderit",
    "voluptate",
    "velit",
    "esse",
    "cillum",
    "eu",
    "fugiat",
    "nulla",
    "pariatur",
    "excepteur",
    "sint",
    "obcaecat",
    "cupiditat",
    "non",
    "proident",
    "sunt",
    "culpa",
    "qui",
    "officia",
    "deserunt",
    "mollit",
    "anim",
    "id",
    "est",
    "laborum",
];

/// A verified non-empty word list, loaded once before any generation begins.
/// An empty corpus is rejected at load time, never discovered mid-run.
#[derive(Debug, Clone)]
pub struct Corpus {
    words: Vec<String>,
}

impl Corpus {
    /// Built-in vocabulary, or the whitespace-separated words of `path`.
    pub fn load(path: Option<&Path>) -> Result<Self, SeedError> {
        let words: Vec<String> = match path {
            Some(path) => {
                let raw = fs::read_to_string(path).map_err(|source| SeedError::CorpusRead {
                    path: path.to_path_buf(),
                    source,
                })?;
                raw.split_whitespace().map(str::to_string).collect()
            }
            None => BUILTIN_WORDS.iter().map(|word| word.to_string()).collect(),
        };

        if words.is_empty() {
            return Err(SeedError::CorpusEmpty);
        }
        Ok(Corpus { words })
    }

    /// One word, uniformly at random with replacement.
    pub fn pick<'a>(&'a self, rng: &mut impl Rng) -> &'a str {
        &self.words[rng.gen_range(0..self.words.len())]
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Length of the longest word, bounding generation overshoot.
    pub fn longest_word(&self) -> usize {
        self.words.iter().map(|word| word.len()).max().unwrap_or(0)
    }
}
