//! Background search jobs.
//!
//! A [`SearchJob`] runs one [`MoveStrategy`] call on its own thread so the
//! caller stays responsive. The job can be asked to stop; the strategy
//! finishes the root move it is on and reports the best move found so far.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use log::debug;
use parking_lot::Mutex;

use crate::board::{Board, Move, MoveStrategy};

/// Search thread stack size (32 MB)
const SEARCH_STACK_SIZE: usize = 32 * 1024 * 1024;

/// What a finished search produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchOutcome {
    /// `None` when the side to move had nothing to play
    pub best_move: Option<Move>,
    pub elapsed: Duration,
    /// Name of the strategy that ran
    pub strategy: String,
}

/// Active search job state
pub struct SearchJob {
    stop: Arc<AtomicBool>,
    result: Arc<Mutex<Option<SearchOutcome>>>,
    handle: JoinHandle<()>,
}

impl SearchJob {
    /// Start `strategy` on `board` in a dedicated thread.
    ///
    /// # Errors
    /// Returns the OS error if the thread cannot be created.
    pub fn spawn(mut strategy: Box<dyn MoveStrategy>, board: Board) -> io::Result<Self> {
        let stop = Arc::new(AtomicBool::new(false));
        let result = Arc::new(Mutex::new(None));
        let stop_clone = Arc::clone(&stop);
        let result_clone = Arc::clone(&result);

        let handle = thread::Builder::new()
            .name("search".to_string())
            .stack_size(SEARCH_STACK_SIZE)
            .spawn(move || {
                let start = Instant::now();
                let best_move = strategy.select_move_with_stop(&board, &stop_clone);
                let outcome = SearchOutcome {
                    best_move,
                    elapsed: start.elapsed(),
                    strategy: strategy.name().to_string(),
                };
                debug!(
                    "search job finished: {} chose {:?} in {}ms",
                    outcome.strategy,
                    outcome.best_move.as_ref().map(ToString::to_string),
                    outcome.elapsed.as_millis()
                );
                *result_clone.lock() = Some(outcome);
            })?;

        debug!("search job started");
        Ok(SearchJob {
            stop,
            result,
            handle,
        })
    }

    /// Signal stop without waiting
    pub fn signal_stop(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }

    /// Returns true once the search thread has exited
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// The outcome, if the search has already delivered one
    #[must_use]
    pub fn try_result(&self) -> Option<SearchOutcome> {
        self.result.lock().clone()
    }

    /// Block until the search finishes and take its outcome.
    ///
    /// Returns `None` if the search thread panicked.
    pub fn wait(self) -> Option<SearchOutcome> {
        if self.handle.join().is_err() {
            return None;
        }
        self.result.lock().take()
    }

    /// Stop the search and wait for the thread to finish
    pub fn stop_and_wait(self) -> Option<SearchOutcome> {
        self.signal_stop();
        self.wait()
    }
}
