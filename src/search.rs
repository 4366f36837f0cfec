use crate::error::GridError;
use crate::grid::Grid;
use log::{debug, info};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Terminal state of a search run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The end cell was popped from the open set.
    Found,
    /// The open set emptied before the end was reached; no path exists.
    Exhausted,
    /// The stop signal was observed between iterations.
    Cancelled,
}

/// Open-set entry. The heap is keyed by score with lazy deletion:
/// relaxing a cell pushes a fresh entry, and entries popped for an
/// already-examined cell are stale and skipped.
#[derive(Debug, Clone, Copy)]
struct OpenEntry {
    pos: (i32, i32),
    score: f64,
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.score == other.score
    }
}

impl Eq for OpenEntry {}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap (BinaryHeap is max-heap by default)
        other
            .score
            .partial_cmp(&self.score)
            .unwrap_or(Ordering::Equal)
            // Tie-breaker: position, for deterministic ordering
            .then_with(|| self.pos.cmp(&other.pos))
    }
}

/// Estimated remaining cost from `pos` to `end` for a cell whose best
/// known cost is `cost`.
///
/// Euclidean distance minus 0.3 times the accumulated cost. The cost
/// term makes the heuristic inadmissible, trading optimality guarantees
/// for a wider visual spread of the explored frontier. Kept as-is.
fn heuristic(pos: (i32, i32), end: (i32, i32), cost: u32) -> f64 {
    let dx = (pos.0 - end.0) as f64;
    let dy = (pos.1 - end.1) as f64;
    (dx * dx + dy * dy).sqrt() - cost as f64 * 0.3
}

/// A* search over a [`Grid`], one expansion per [`step`](Self::step).
///
/// The engine owns the open set; all cell annotations (cost, score,
/// examined flag, predecessor) live in the grid so observers can read
/// progress from a snapshot.
#[derive(Debug)]
pub struct SearchEngine {
    end: (i32, i32),
    open: BinaryHeap<OpenEntry>,
}

impl SearchEngine {
    /// Seed the search at the grid's start cell.
    ///
    /// Refuses to start if either endpoint is out of bounds or blocked,
    /// so an invalid configuration never produces a running search.
    pub fn new(grid: &mut Grid) -> Result<Self, GridError> {
        let start = grid.start;
        let end = grid.end;
        if !grid.is_walkable(end.0, end.1) {
            grid.cell(end.0, end.1)?;
            return Err(GridError::BlockedEnd(end.0, end.1));
        }
        if !grid.is_walkable(start.0, start.1) {
            grid.cell(start.0, start.1)?;
            return Err(GridError::BlockedStart(start.0, start.1));
        }

        let score = heuristic(start, end, 0);
        let cell = grid.cell_mut(start.0, start.1)?;
        cell.cost = 0;
        cell.score = score;

        let mut open = BinaryHeap::new();
        open.push(OpenEntry { pos: start, score });
        Ok(SearchEngine { end, open })
    }

    /// Perform one expansion step.
    ///
    /// Returns `None` while the search is still running, or the
    /// terminal outcome (Found or Exhausted) once reached. Stale heap
    /// entries are consumed without counting as a step.
    pub fn step(&mut self, grid: &mut Grid) -> Option<SearchOutcome> {
        loop {
            let entry = match self.open.pop() {
                Some(entry) => entry,
                None => {
                    info!("open set exhausted, no path exists");
                    return Some(SearchOutcome::Exhausted);
                }
            };
            let (x, y) = entry.pos;
            if entry.pos == self.end {
                info!("reached end point at ({x}, {y})");
                return Some(SearchOutcome::Found);
            }

            let id = grid.get_id(x, y) as usize;
            if grid.cells[id].examined {
                continue; // stale entry from an earlier relaxation
            }
            grid.cells[id].examined = true;
            let current_cost = grid.cells[id].cost;
            debug!("expanding ({x}, {y}) at cost {current_cost}");

            for (nx, ny) in grid.neighbors(x, y) {
                let nid = grid.get_id(nx, ny) as usize;
                let neighbor = &mut grid.cells[nid];
                if neighbor.examined {
                    continue;
                }
                let tentative = current_cost + 1;
                // >= keeps the first-found predecessor on equal cost
                if tentative >= neighbor.cost {
                    continue;
                }
                neighbor.predecessor = Some((x, y));
                neighbor.cost = tentative;
                neighbor.score = tentative as f64 + heuristic((nx, ny), self.end, tentative);
                self.open.push(OpenEntry {
                    pos: (nx, ny),
                    score: neighbor.score,
                });
            }
            return None;
        }
    }

    /// Run the search synchronously to its terminal state.
    pub fn run(&mut self, grid: &mut Grid) -> SearchOutcome {
        loop {
            if let Some(outcome) = self.step(grid) {
                return outcome;
            }
        }
    }
}

/// Reconstruct the path by walking predecessor links back from the end.
///
/// Returns the cells from start to end inclusive, or an empty vector
/// when the end has no predecessor (unreached, or start == end).
pub fn reconstruct_path(grid: &Grid) -> Vec<(i32, i32)> {
    let mut path = Vec::new();
    let mut current = grid.end;
    loop {
        let id = grid.get_id(current.0, current.1) as usize;
        match grid.cells[id].predecessor {
            Some(previous) => {
                path.push(current);
                current = previous;
            }
            None => break,
        }
    }
    if path.is_empty() {
        return path;
    }
    path.push(current);
    path.reverse();
    path
}
