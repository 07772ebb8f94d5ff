//! Game session with word refresh
//!
//! A `Session` owns one `Game` and at most one outstanding word fetch. A
//! fetch that fails keeps the last known solution and still resets the
//! board, so the game never sticks mid-refresh.

use super::engine::Game;
use crate::core::Word;
use crate::error::Result;
use crate::wordlists::WordSource;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use tracing::{debug, warn};

/// How a finished refresh was applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// New solution installed
    NewWord,
    /// Fetch failed; board reset with the previous solution
    Fallback(String),
}

/// A game plus its word-refresh guard
pub struct Session {
    game: Game,
    pending: Option<Receiver<Result<Word>>>,
}

impl Session {
    #[must_use]
    pub const fn new(game: Game) -> Self {
        Self {
            game,
            pending: None,
        }
    }

    /// Start a session with a word drawn from `source`
    ///
    /// # Errors
    ///
    /// Returns the source error when no initial word can be produced.
    pub fn start(source: &dyn WordSource) -> Result<Self> {
        Ok(Self::new(Game::new(source.next_word()?)))
    }

    #[must_use]
    pub const fn game(&self) -> &Game {
        &self.game
    }

    pub const fn game_mut(&mut self) -> &mut Game {
        &mut self.game
    }

    /// True while a background fetch is outstanding
    #[must_use]
    pub const fn is_refreshing(&self) -> bool {
        self.pending.is_some()
    }

    /// Fetch a new word and restart, blocking the caller
    ///
    /// Returns `None` without fetching when a background refresh is
    /// already in flight.
    pub fn refresh(&mut self, source: &dyn WordSource) -> Option<RefreshOutcome> {
        if self.is_refreshing() {
            debug!("refresh ignored, fetch already in flight");
            return None;
        }
        Some(self.apply(source.next_word()))
    }

    /// Fetch a new word on a background thread
    ///
    /// Returns `false` when a fetch is already in flight. Call
    /// `poll_refresh` to apply the result.
    pub fn start_refresh(&mut self, source: Arc<dyn WordSource>) -> bool {
        if self.is_refreshing() {
            debug!("refresh ignored, fetch already in flight");
            return false;
        }

        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            // The receiver may be gone if the session was dropped
            let _ = tx.send(source.next_word());
        });
        self.pending = Some(rx);
        true
    }

    /// Apply a finished background fetch, if any
    pub fn poll_refresh(&mut self) -> Option<RefreshOutcome> {
        let result = match self.pending.as_ref()?.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => Err(crate::error::Error::Payload(
                "word fetch ended without a result".to_string(),
            )),
        };
        self.pending = None;
        Some(self.apply(result))
    }

    fn apply(&mut self, result: Result<Word>) -> RefreshOutcome {
        match result {
            Ok(word) => {
                debug!(word = word.text(), "installed new solution");
                self.game.set_solution(word);
                RefreshOutcome::NewWord
            }
            Err(e) => {
                warn!(error = %e, "word fetch failed, keeping previous solution");
                self.game.reset();
                RefreshOutcome::Fallback(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::game::Outcome;
    use std::sync::Mutex;
    use std::time::{Duration, Instant};

    struct FixedSource(Mutex<Vec<Result<Word>>>);

    impl FixedSource {
        fn new(results: Vec<Result<Word>>) -> Self {
            Self(Mutex::new(results))
        }
    }

    impl WordSource for FixedSource {
        fn next_word(&self) -> Result<Word> {
            self.0.lock().unwrap().remove(0)
        }
    }

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn played_session(solution: &str) -> Session {
        let mut session = Session::new(Game::new(word(solution)));
        for c in "slate".chars() {
            session.game_mut().add_letter(c);
        }
        session.game_mut().submit_guess();
        session
    }

    fn wait_for(session: &mut Session) -> RefreshOutcome {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            if let Some(outcome) = session.poll_refresh() {
                return outcome;
            }
            assert!(Instant::now() < deadline, "refresh never completed");
            thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn start_uses_source_word() {
        let source = FixedSource::new(vec![Ok(word("crane"))]);
        let session = Session::start(&source).unwrap();
        assert_eq!(session.game().solution().text(), "crane");
    }

    #[test]
    fn refresh_installs_new_word_and_resets() {
        let mut session = played_session("crane");
        let source = FixedSource::new(vec![Ok(word("audio"))]);

        assert_eq!(session.refresh(&source), Some(RefreshOutcome::NewWord));
        assert_eq!(session.game().solution().text(), "audio");
        assert!(session.game().board().is_empty());
        assert_eq!(session.game().outcome(), Outcome::InProgress);
    }

    #[test]
    fn refresh_failure_falls_back_and_resets() {
        let mut session = played_session("crane");
        let source = FixedSource::new(vec![Err(Error::Payload("bad".to_string()))]);

        let outcome = session.refresh(&source).unwrap();
        assert!(matches!(outcome, RefreshOutcome::Fallback(_)));
        assert_eq!(session.game().solution().text(), "crane");
        assert!(session.game().board().is_empty());
        assert_eq!(session.game().state().turn, 0);
    }

    #[test]
    fn background_refresh_applies_on_poll() {
        let mut session = played_session("crane");
        let source: Arc<dyn WordSource> = Arc::new(FixedSource::new(vec![Ok(word("audio"))]));

        assert!(session.start_refresh(source));
        assert!(session.is_refreshing());
        assert_eq!(wait_for(&mut session), RefreshOutcome::NewWord);
        assert!(!session.is_refreshing());
        assert_eq!(session.game().solution().text(), "audio");
        assert!(session.game().board().is_empty());
    }

    #[test]
    fn overlapping_refresh_is_ignored() {
        let mut session = played_session("crane");
        let first: Arc<dyn WordSource> = Arc::new(FixedSource::new(vec![Ok(word("audio"))]));
        let second = FixedSource::new(vec![Ok(word("pixel"))]);

        assert!(session.start_refresh(Arc::clone(&first)));
        assert!(!session.start_refresh(first));
        assert_eq!(session.refresh(&second), None);

        wait_for(&mut session);
        assert_eq!(session.game().solution().text(), "audio");
    }

    #[test]
    fn background_failure_falls_back() {
        let mut session = played_session("crane");
        let source: Arc<dyn WordSource> = Arc::new(FixedSource::new(vec![Err(Error::EmptyWordList)]));

        session.start_refresh(source);
        assert!(matches!(wait_for(&mut session), RefreshOutcome::Fallback(_)));
        assert_eq!(session.game().solution().text(), "crane");
        assert!(session.game().board().is_empty());
    }

    #[test]
    fn poll_without_refresh_is_none() {
        let mut session = played_session("crane");
        assert_eq!(session.poll_refresh(), None);
    }
}
