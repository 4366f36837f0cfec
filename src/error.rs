use thiserror::Error;

/// Errors reported during grid construction and search setup.
///
/// Search termination (found / exhausted / cancelled) is an outcome,
/// not an error; see [`crate::search::SearchOutcome`].
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum GridError {
    #[error("cell ({x}, {y}) is outside the {cols}x{rows} grid")]
    OutOfBounds { x: i32, y: i32, cols: i32, rows: i32 },

    #[error("grid dimensions must be positive, got {cols}x{rows}")]
    EmptyGrid { cols: i32, rows: i32 },

    #[error("obstacle probability must be within [0, 1], got {0}")]
    BadProbability(f64),

    #[error("start cell ({0}, {1}) is blocked")]
    BlockedStart(i32, i32),

    #[error("end cell ({0}, {1}) is blocked")]
    BlockedEnd(i32, i32),
}
