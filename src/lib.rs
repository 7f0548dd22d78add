#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod types;
pub mod glue;
pub mod rules;
pub mod tile;
pub mod polyomino;
pub mod grid;
pub mod board;
pub mod snapshot;
pub mod persist;
pub mod script;
pub mod hash;
pub mod rng;

pub mod engine {
    pub mod step;
    pub mod bond;
    pub mod tumble;
}

// Re-exports: stable minimal API surface for external callers
pub use crate::board::{Board, BoardStats, TileSpec, MAX_DIMENSION};
pub use crate::engine::tumble::TumbleOutcome;
pub use crate::error::{BoardError, PersistError};
pub use crate::glue::{parse_glues, Glue, Glues, BLANK_GLUES};
pub use crate::hash::fingerprint;
pub use crate::persist::{load_rules_json, load_snapshot_json, save_rules_json, save_snapshot_json};
pub use crate::polyomino::Polyomino;
pub use crate::rng::{populate_random, rng_for_seed, RandomFill};
pub use crate::rules::{GlueStrengths, Rules};
pub use crate::script::{parse_script, run_script, ScriptReport};
pub use crate::snapshot::{ImportReport, Snapshot, TileRecord};
pub use crate::tile::Tile;
pub use crate::types::{ClusterId, Direction, Pos, TileId};
