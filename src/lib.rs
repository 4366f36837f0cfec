pub mod config;
pub mod error;
pub mod grid;
pub mod search;
pub mod shared;

pub use config::Config;
pub use error::GridError;
pub use grid::{Cell, CellKind, Grid, INFINITE_COST};
pub use search::{reconstruct_path, SearchEngine, SearchOutcome};
pub use shared::{spawn_search, SharedSearch};
