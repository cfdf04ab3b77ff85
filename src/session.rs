//! Game session: the state machine plus its word fetches
//!
//! The `GameState` is only ever touched from the thread that owns the
//! `Session`. Word fetches run as tasks on a tokio runtime and report back
//! through an mpsc channel; each report carries the `RoundId` it was
//! started for, and the state rejects reports for rounds that are no longer
//! current.

use crate::core::{GameError, GameState, GuessOutcome, Phase, RoundId};
use crate::source::{WordConstraints, WordSource, WordSourceError};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::AbortHandle;
use tracing::{debug, error, info, instrument, warn};

/// Default bound on a single word fetch
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Result of one fetch, sent back to the owning thread
#[derive(Debug)]
struct FetchReport {
    round: RoundId,
    result: Result<String, WordSourceError>,
}

/// What applying a fetch report did to the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// The current round has its word and is in progress
    WordReady(RoundId),
    /// The current round could not get a playable word
    WordUnavailable { round: RoundId, reason: String },
    /// A report for an abandoned round was dropped
    StaleDiscarded(RoundId),
    /// A report for the current round arrived when the state could not take it
    Rejected(GameError),
}

/// Owns a `GameState` and drives word fetches for it
pub struct Session {
    state: GameState,
    source: Arc<dyn WordSource>,
    constraints: WordConstraints,
    timeout: Duration,
    runtime: Handle,
    reports_tx: mpsc::UnboundedSender<FetchReport>,
    reports_rx: mpsc::UnboundedReceiver<FetchReport>,
    pending: Option<AbortHandle>,
}

impl Session {
    /// Create a session; no round is started until [`start_new_round`](Self::start_new_round)
    #[must_use]
    pub fn new(
        source: Arc<dyn WordSource>,
        constraints: WordConstraints,
        timeout: Duration,
        runtime: Handle,
    ) -> Self {
        let (reports_tx, reports_rx) = mpsc::unbounded_channel();
        Self {
            state: GameState::new(),
            source,
            constraints,
            timeout,
            runtime,
            reports_tx,
            reports_rx,
            pending: None,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    /// Abandon the current round and request a word for a new one
    ///
    /// An outstanding fetch is aborted; if its report was already queued it
    /// is discarded as stale when the channel is drained. A fetch that panics
    /// is reported as a `Crashed` source error.
    #[instrument(skip(self), fields(source = self.source.name()))]
    pub fn start_new_round(&mut self) -> RoundId {
        if let Some(task) = self.pending.take() {
            task.abort();
        }

        let round = self.state.start_new_round();
        info!(%round, "Starting round, fetching word");

        let source = Arc::clone(&self.source);
        let constraints = self.constraints.clone();
        let timeout = self.timeout;
        let reports = self.reports_tx.clone();

        let fetch = self.runtime.spawn(async move {
            tokio::time::timeout(timeout, source.fetch_random_word(&constraints)).await
        });
        self.pending = Some(fetch.abort_handle());

        self.runtime.spawn(async move {
            let result = match fetch.await {
                Ok(Ok(result)) => result,
                Ok(Err(_)) => Err(WordSourceError::Timeout(timeout)),
                Err(e) if e.is_cancelled() => return,
                Err(e) => {
                    error!(%round, error = %e, "Word fetch task died");
                    Err(WordSourceError::Crashed(e.to_string()))
                }
            };
            // The receiver lives as long as the session
            let _ = reports.send(FetchReport { round, result });
        });

        round
    }

    /// Apply every report already received, without blocking
    pub fn pump(&mut self) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        while let Ok(report) = self.reports_rx.try_recv() {
            events.push(self.apply(report));
        }
        events
    }

    /// Block until the current round's word arrives or fails
    ///
    /// Must not be called from inside the async runtime.
    ///
    /// # Errors
    /// `InvalidState` if the current round is not awaiting a word, including
    /// before the first round is started.
    pub fn wait_for_word(&mut self) -> Result<SessionEvent, GameError> {
        if self.state.phase() != Phase::AwaitingWord {
            return Err(GameError::InvalidState {
                operation: "wait for a word",
                phase: self.state.phase(),
            });
        }

        loop {
            // The session holds a sender, so the channel never closes
            let Some(report) = self.reports_rx.blocking_recv() else {
                return Err(GameError::WordSourceUnavailable(
                    "fetch channel closed".to_string(),
                ));
            };
            match self.apply(report) {
                SessionEvent::StaleDiscarded(_) => {}
                event => return Ok(event),
            }
        }
    }

    fn apply(&mut self, report: FetchReport) -> SessionEvent {
        let FetchReport { round, result } = report;

        if round != self.state.round_id() {
            debug!(%round, current = %self.state.round_id(), "Discarding stale word fetch");
            return SessionEvent::StaleDiscarded(round);
        }
        self.pending = None;

        let applied = match result {
            Ok(word) => self.state.on_word_received(round, &word),
            Err(e) => {
                warn!(%round, error = %e, "Word fetch failed");
                self.state
                    .on_word_unavailable(round)
                    .and(Err(GameError::WordSourceUnavailable(e.to_string())))
            }
        };

        match applied {
            Ok(()) => {
                info!(%round, len = self.state.mask().len(), "Word ready");
                SessionEvent::WordReady(round)
            }
            Err(GameError::WordSourceUnavailable(reason)) => {
                warn!(%round, %reason, "No playable word");
                SessionEvent::WordUnavailable { round, reason }
            }
            Err(e) => {
                warn!(%round, error = %e, "Rejected word delivery");
                SessionEvent::Rejected(e)
            }
        }
    }

    /// Guess a letter in the current round
    ///
    /// # Errors
    /// Propagates [`GameState::guess_letter`] errors.
    pub fn guess_letter(&mut self, letter: char) -> Result<GuessOutcome, GameError> {
        let outcome = self.state.guess_letter(letter)?;
        debug!(%letter, ?outcome, wrong = self.state.wrong_guesses(), "Guess");

        match outcome {
            GuessOutcome::CorrectAndWon => {
                info!(round = %self.state.round_id(), tally = ?self.state.tally(), "Round won");
            }
            GuessOutcome::IncorrectAndLost => {
                info!(round = %self.state.round_id(), tally = ?self.state.tally(), "Round lost");
            }
            _ => {}
        }
        Ok(outcome)
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        if let Some(task) = self.pending.take() {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Tally;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Serves queued replies, each after an optional delay
    struct ScriptedSource {
        replies: Mutex<VecDeque<(Duration, Result<String, WordSourceError>)>>,
    }

    impl ScriptedSource {
        fn new(replies: Vec<(Duration, Result<String, WordSourceError>)>) -> Arc<Self> {
            Arc::new(Self {
                replies: Mutex::new(replies.into()),
            })
        }
    }

    #[async_trait::async_trait]
    impl WordSource for ScriptedSource {
        async fn fetch_random_word(
            &self,
            _constraints: &WordConstraints,
        ) -> Result<String, WordSourceError> {
            let next = self.replies.lock().unwrap().pop_front();
            let (delay, result) = next.unwrap_or((Duration::ZERO, Err(WordSourceError::NoWord)));
            tokio::time::sleep(delay).await;
            result
        }

        fn name(&self) -> &str {
            "scripted"
        }
    }

    struct PanickingSource;

    #[async_trait::async_trait]
    impl WordSource for PanickingSource {
        async fn fetch_random_word(
            &self,
            _constraints: &WordConstraints,
        ) -> Result<String, WordSourceError> {
            panic!("source blew up")
        }

        fn name(&self) -> &str {
            "panicking"
        }
    }

    fn session(runtime: &tokio::runtime::Runtime, source: Arc<ScriptedSource>) -> Session {
        Session::new(
            source,
            WordConstraints::default(),
            DEFAULT_FETCH_TIMEOUT,
            runtime.handle().clone(),
        )
    }

    fn ok(word: &str) -> (Duration, Result<String, WordSourceError>) {
        (Duration::ZERO, Ok(word.to_string()))
    }

    #[test]
    fn round_starts_when_word_arrives() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut session = session(&runtime, ScriptedSource::new(vec![ok("dragon-fly")]));

        let round = session.start_new_round();
        assert_eq!(session.state().phase(), Phase::AwaitingWord);
        assert_eq!(session.wait_for_word(), Ok(SessionEvent::WordReady(round)));
        assert_eq!(session.state().current_display(), "_ _ _ _ _-_ _ _");
    }

    #[test]
    fn full_round_through_session() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut session = session(&runtime, ScriptedSource::new(vec![ok("cat")]));

        session.start_new_round();
        session.wait_for_word().unwrap();

        assert_eq!(session.guess_letter('c'), Ok(GuessOutcome::Correct));
        assert_eq!(session.guess_letter('a'), Ok(GuessOutcome::Correct));
        assert_eq!(session.guess_letter('t'), Ok(GuessOutcome::CorrectAndWon));
        assert_eq!(session.state().tally(), Tally { wins: 1, losses: 0 });
    }

    #[test]
    fn source_failure_is_reported_and_retryable() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut session = session(
            &runtime,
            ScriptedSource::new(vec![
                (Duration::ZERO, Err(WordSourceError::Status(503))),
                ok("walrus"),
            ]),
        );

        let round = session.start_new_round();
        assert!(matches!(
            session.wait_for_word(),
            Ok(SessionEvent::WordUnavailable { round: r, .. }) if r == round
        ));
        assert_eq!(session.state().phase(), Phase::WordUnavailable);
        assert!(session.guess_letter('a').is_err());

        let retry = session.start_new_round();
        assert_eq!(session.wait_for_word(), Ok(SessionEvent::WordReady(retry)));
        assert_eq!(session.state().phase(), Phase::InProgress);
    }

    #[test]
    fn unplayable_word_is_unavailable() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut session = session(&runtime, ScriptedSource::new(vec![ok("ice cream")]));

        session.start_new_round();
        assert!(matches!(
            session.wait_for_word(),
            Ok(SessionEvent::WordUnavailable { .. })
        ));
        assert_eq!(session.state().phase(), Phase::WordUnavailable);
    }

    #[test]
    fn slow_fetch_times_out() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let source = ScriptedSource::new(vec![(Duration::from_secs(30), Ok("late".to_string()))]);
        let mut session = Session::new(
            source,
            WordConstraints::default(),
            Duration::from_millis(20),
            runtime.handle().clone(),
        );

        session.start_new_round();
        match session.wait_for_word() {
            Ok(SessionEvent::WordUnavailable { reason, .. }) => {
                assert!(reason.contains("timed out"), "{reason}");
            }
            other => panic!("expected timeout, got {other:?}"),
        }
    }

    #[test]
    fn newer_round_wins_over_slow_fetch() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut session = session(
            &runtime,
            ScriptedSource::new(vec![
                (Duration::from_millis(200), Ok("elephant".to_string())),
                ok("cat"),
            ]),
        );

        session.start_new_round();
        // Let the first fetch take its reply before it is abandoned
        std::thread::sleep(Duration::from_millis(50));
        let current = session.start_new_round();

        assert_eq!(session.wait_for_word(), Ok(SessionEvent::WordReady(current)));
        assert_eq!(session.state().current_display(), "_ _ _");

        // Give the aborted fetch time to have delivered, had it survived
        std::thread::sleep(Duration::from_millis(300));
        assert!(session.pump().is_empty());
        assert_eq!(session.state().current_display(), "_ _ _");
    }

    #[test]
    fn queued_stale_report_is_discarded() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut session = session(&runtime, ScriptedSource::new(vec![ok("cat"), ok("dog")]));

        let old = session.start_new_round();
        // Let the first fetch finish and queue its report unapplied
        std::thread::sleep(Duration::from_millis(100));
        let current = session.start_new_round();
        std::thread::sleep(Duration::from_millis(100));

        let events = session.pump();
        assert_eq!(
            events,
            vec![
                SessionEvent::StaleDiscarded(old),
                SessionEvent::WordReady(current)
            ]
        );
        assert_eq!(session.state().round_id(), current);
        assert_eq!(session.state().phase(), Phase::InProgress);
    }

    #[test]
    fn pump_without_reports_is_empty() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut session = session(&runtime, ScriptedSource::new(vec![]));
        assert!(session.pump().is_empty());
    }

    #[test]
    fn wait_for_word_requires_awaiting_phase() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut session = session(&runtime, ScriptedSource::new(vec![ok("cat")]));
        session.start_new_round();
        session.wait_for_word().unwrap();

        assert!(matches!(
            session.wait_for_word(),
            Err(GameError::InvalidState {
                phase: Phase::InProgress,
                ..
            })
        ));
    }

    #[test]
    fn wait_for_word_before_any_round_is_rejected() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut session = session(&runtime, ScriptedSource::new(vec![ok("cat")]));

        assert_eq!(
            session.wait_for_word(),
            Err(GameError::InvalidState {
                operation: "wait for a word",
                phase: Phase::Idle,
            })
        );
    }

    #[test]
    fn panicking_source_is_reported_as_unavailable() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut session = Session::new(
            Arc::new(PanickingSource),
            WordConstraints::default(),
            DEFAULT_FETCH_TIMEOUT,
            runtime.handle().clone(),
        );

        let round = session.start_new_round();
        match session.wait_for_word() {
            Ok(SessionEvent::WordUnavailable { round: r, reason }) => {
                assert_eq!(r, round);
                assert!(reason.contains("crashed"), "{reason}");
            }
            other => panic!("expected unavailable word, got {other:?}"),
        }
        assert_eq!(session.state().phase(), Phase::WordUnavailable);
    }

    #[test]
    fn out_of_phase_report_is_rejected() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut session = session(&runtime, ScriptedSource::new(vec![ok("cat")]));
        let round = session.start_new_round();
        session.wait_for_word().unwrap();

        let event = session.apply(FetchReport {
            round,
            result: Ok("dog".to_string()),
        });
        assert!(matches!(
            event,
            SessionEvent::Rejected(GameError::InvalidState {
                phase: Phase::InProgress,
                ..
            })
        ));
        assert_eq!(session.state().current_display(), "_ _ _");
        assert_eq!(session.state().phase(), Phase::InProgress);
    }
}
