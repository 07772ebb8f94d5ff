//! Word fetch command

use crate::core::Word;
use crate::error::Result;
use crate::wordlists::WordSource;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Draw one word from `source` behind a spinner
///
/// # Errors
///
/// Returns the source error when no word could be fetched.
pub fn fetch_word(source: &dyn WordSource, label: &str) -> Result<Word> {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(format!("Fetching word from {label}..."));
    spinner.enable_steady_tick(Duration::from_millis(80));

    let result = source.next_word();
    spinner.finish_and_clear();
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::EmbeddedWordSource;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn fetches_from_source() {
        let source = EmbeddedWordSource::new(words_from_slice(&["crane"]));
        let word = fetch_word(&source, "test list").unwrap();
        assert_eq!(word.text(), "crane");
    }

    #[test]
    fn propagates_source_error() {
        let source = EmbeddedWordSource::new(Vec::new());
        assert!(fetch_word(&source, "empty list").is_err());
    }
}
