use crate::error::GridError;
use crate::grid::Grid;
use crate::search::{SearchEngine, SearchOutcome};
use log::info;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// State shared between the search thread and the render loop.
///
/// Access pattern:
/// - Search thread: locks the grid once per step to mutate annotations.
/// - Render loop: takes a whole-grid snapshot once per frame and reads
///   the flags; it never writes cells.
pub struct SharedSearch {
    grid: Mutex<Grid>,
    /// Write-once by the search thread on Found, read every frame.
    path_found: AtomicBool,
    /// Cleared to request cancellation; checked once per iteration.
    running: AtomicBool,
}

impl SharedSearch {
    pub fn new(grid: Grid) -> Self {
        SharedSearch {
            grid: Mutex::new(grid),
            path_found: AtomicBool::new(false),
            running: AtomicBool::new(true),
        }
    }

    /// Clone the current grid state. Taken under the lock, so a frame
    /// never observes a half-applied expansion step.
    pub fn snapshot(&self) -> Grid {
        self.lock_grid().clone()
    }

    pub fn path_found(&self) -> bool {
        self.path_found.load(Ordering::SeqCst)
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Request cancellation; the search halts within one iteration.
    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }

    fn lock_grid(&self) -> std::sync::MutexGuard<'_, Grid> {
        // a panic while holding the lock already aborts the run
        match self.grid.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

/// Spawn the search thread, stepping once per `step_interval`.
///
/// Endpoint validation happens here, before the thread starts, so a
/// bad configuration surfaces as an error instead of a silent
/// non-search. The thread returns its terminal outcome on join.
pub fn spawn_search(
    shared: Arc<SharedSearch>,
    step_interval: Duration,
) -> Result<JoinHandle<SearchOutcome>, GridError> {
    let mut engine = {
        let mut grid = shared.lock_grid();
        SearchEngine::new(&mut grid)?
    };

    Ok(thread::spawn(move || loop {
        if !shared.is_running() {
            info!("search cancelled");
            return SearchOutcome::Cancelled;
        }
        thread::sleep(step_interval);
        let outcome = {
            let mut grid = shared.lock_grid();
            engine.step(&mut grid)
        };
        match outcome {
            Some(SearchOutcome::Found) => {
                shared.path_found.store(true, Ordering::SeqCst);
                return SearchOutcome::Found;
            }
            Some(outcome) => return outcome,
            None => {}
        }
    }))
}
