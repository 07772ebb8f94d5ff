//! Word sources
//!
//! A `WordSource` picks the next solution. The local source draws from a
//! word list; the HTTP source asks an endpoint answering
//! `GET` with `{"word": "crane"}`.

use super::ANSWERS;
use super::loader::{load_from_file, words_from_slice};
use crate::core::Word;
use crate::error::{Error, Result};
use rand::prelude::IndexedRandom;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// Something that can hand out a random answer word
pub trait WordSource: Send + Sync {
    /// Pick the next solution
    ///
    /// # Errors
    ///
    /// Returns an error when no valid word could be produced.
    fn next_word(&self) -> Result<Word>;
}

/// Uniform random pick from an in-memory word list
pub struct EmbeddedWordSource {
    words: Vec<Word>,
}

impl EmbeddedWordSource {
    #[must_use]
    pub const fn new(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// Source over the embedded answer list
    #[must_use]
    pub fn answers() -> Self {
        Self::new(words_from_slice(ANSWERS))
    }

    /// Source over a word list file, one word per line
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read, or
    /// `EmptyWordList` if it holds no valid word.
    pub fn from_file(path: &Path) -> Result<Self> {
        let words = load_from_file(path)?;
        if words.is_empty() {
            return Err(Error::EmptyWordList);
        }
        Ok(Self::new(words))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordSource for EmbeddedWordSource {
    fn next_word(&self) -> Result<Word> {
        self.words
            .choose(&mut rand::rng())
            .cloned()
            .ok_or(Error::EmptyWordList)
    }
}

/// JSON body returned by the word endpoint
#[derive(Debug, Deserialize)]
struct WordPayload {
    word: Option<String>,
}

/// Fetches words from an HTTP endpoint
pub struct HttpWordSource {
    endpoint: String,
    agent: ureq::Agent,
}

impl HttpWordSource {
    /// Create a source for `endpoint`
    ///
    /// `timeout` bounds the whole request when given; otherwise the
    /// transport defaults apply.
    #[must_use]
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Self {
        let mut builder = ureq::AgentBuilder::new();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Self {
            endpoint: endpoint.into(),
            agent: builder.build(),
        }
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl WordSource for HttpWordSource {
    fn next_word(&self) -> Result<Word> {
        debug!(endpoint = %self.endpoint, "fetching next word");

        let response = self.agent.get(&self.endpoint).call().map_err(Box::new)?;
        let body = response.into_string()?;
        parse_payload(&body)
    }
}

/// Extract the word from an endpoint response body
fn parse_payload(body: &str) -> Result<Word> {
    let payload: WordPayload =
        serde_json::from_str(body).map_err(|e| Error::Payload(e.to_string()))?;
    let word = payload
        .word
        .ok_or_else(|| Error::Payload("missing `word` field".to_string()))?;
    Ok(Word::new(word)?)
}
