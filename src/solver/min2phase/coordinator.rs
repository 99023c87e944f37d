//! Streaming coordinator for the two-phase search.
//!
//! Runs [`Solver`] on a dedicated thread and publishes progressively shorter
//! solutions through a bounded channel, tightening the search bound after
//! every accepted solution until the caller stops it or the search is
//! exhausted. The underlying engine already fuses phase 1 and phase 2 into a
//! single bounded search (try phase 1 on every axis/urf rotation, then phase 2
//! for each), so one worker thread plays both the phase-1 producer and the
//! phase-2 coordinator roles described for the search.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{sync_channel, Receiver, SyncSender, TrySendError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use super::solver::Solver;
use crate::cubie::CubieCube;
use crate::facelet::FaceCube;
use crate::moves::Formula;

/// Probes attempted per depth before giving up on that depth and trying the
/// next axis or urf rotation. Large enough that a solution is essentially
/// always found once the bound is long enough to admit one.
const DEFAULT_PROBE_MAX: u64 = 1_000_000;

/// How often a blocked publish re-checks the stop flag. Short enough that
/// `Drop` does not stall noticeably; long enough to not busy-spin.
const SEND_POLL_INTERVAL: Duration = Duration::from_millis(5);

/// Drives a [`Solver`] on a background thread, tightening `max_len` to
/// `solution.len() - 1` after every accepted solution.
///
/// Dropping the handle (or calling [`StreamingSolver::stop`]) sets a shared
/// cancellation flag. The worker notices it at the next depth increment (and,
/// inside a search already underway, at every recursion frame seven or more
/// moves deep) and unwinds; if it is instead parked trying to publish a
/// solution into a full channel, the stop flag is what releases that publish
/// too, since it retries with `try_send` rather than blocking on `send`. The
/// channel then closes, which the caller observes as end-of-stream on the
/// [`Receiver`]. This is why `Drop` can safely join the worker thread: it is
/// never left parked on a send the caller has no intention of draining.
pub struct StreamingSolver {
    handle: Option<JoinHandle<()>>,
    stop: Arc<AtomicBool>,
}

impl StreamingSolver {
    /// Start searching `cube` for solutions of length at most `max_len`.
    /// Returns immediately; solutions (each strictly shorter than the last)
    /// arrive on the returned receiver until the channel closes.
    pub fn new(cube: CubieCube, max_len: usize) -> (Self, Receiver<Formula>) {
        let (tx, rx) = sync_channel(1);
        let stop = Arc::new(AtomicBool::new(false));
        let worker_stop = Arc::clone(&stop);
        let handle = thread::spawn(move || Self::run(cube, max_len, worker_stop, tx));
        (
            Self {
                handle: Some(handle),
                stop,
            },
            rx,
        )
    }

    /// Request cancellation. Non-blocking; the worker notices at its next
    /// depth increment (or, if parked trying to publish into a full channel,
    /// at its next publish retry) and the channel then closes.
    pub fn stop(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }

    fn run(cube: CubieCube, max_len: usize, stop: Arc<AtomicBool>, tx: SyncSender<Formula>) {
        let facelet = match FaceCube::try_from(&cube) {
            Ok(fc) => fc.to_string(),
            Err(_) => return,
        };
        let mut bound = max_len;
        loop {
            if stop.load(Ordering::Relaxed) {
                return;
            }
            let mut solver = Solver::default();
            solver.set_stop_signal(Arc::clone(&stop));
            match solver.solve(&facelet, bound, DEFAULT_PROBE_MAX, 0, 0x0) {
                Ok(formula) => {
                    let len = formula.moves.len();
                    if !Self::publish(&tx, &stop, formula) {
                        return; // caller dropped the receiver, or we were stopped
                    }
                    if len == 0 {
                        return; // already solved; nothing shorter exists
                    }
                    bound = len - 1;
                }
                Err(_) => return, // exhausted, cancelled, or unsolvable within bound
            }
        }
    }

    /// Publish `formula` without ever parking indefinitely: a full channel is
    /// retried with `try_send` so a concurrent `stop()` is still observed even
    /// while the caller hasn't drained the previous solution. Returns `false`
    /// if cancelled or if the receiver was dropped.
    fn publish(tx: &SyncSender<Formula>, stop: &AtomicBool, formula: Formula) -> bool {
        let mut pending = formula;
        loop {
            match tx.try_send(pending) {
                Ok(()) => return true,
                Err(TrySendError::Disconnected(_)) => return false,
                Err(TrySendError::Full(returned)) => {
                    if stop.load(Ordering::Relaxed) {
                        return false;
                    }
                    pending = returned;
                    thread::sleep(SEND_POLL_INTERVAL);
                }
            }
        }
    }
}

impl Drop for StreamingSolver {
    fn drop(&mut self) {
        self.stop();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::StreamingSolver;
    use crate::cubie::CubieCube;
    use crate::moves::Formula;
    use std::str::FromStr;

    #[test]
    fn solved_cube_yields_empty_solution() {
        let (_solver, rx) = StreamingSolver::new(CubieCube::default(), 21);
        let formula = rx.recv().expect("a solution for the solved cube");
        assert!(formula.moves.is_empty());
        assert!(rx.recv().is_err());
    }

    #[test]
    fn drop_while_a_solution_is_buffered_and_undrained_does_not_hang() {
        // Read exactly one solution (leaving the worker either about to
        // compute, or already parked trying to publish, its next one), then
        // drop without ever draining further. `Drop::drop` must still return.
        let scramble = Formula::from_str("R U2 B D F2").unwrap();
        let scrambled = CubieCube::default().apply_formula(&scramble);
        let (solver, rx) = StreamingSolver::new(scrambled, 21);
        let _first = rx.recv().expect("at least one solution");
        drop(solver);
    }

    #[test]
    fn scrambled_cube_yields_improving_solutions() {
        let scramble = Formula::from_str("R U2 B D F2").unwrap();
        let scrambled = CubieCube::default().apply_formula(&scramble);
        let (_solver, rx) = StreamingSolver::new(scrambled, 21);
        let first = rx.recv().expect("at least one solution");
        let mut best = first.moves.len();
        for later in rx {
            assert!(later.moves.len() < best);
            best = later.moves.len();
        }
    }
}
