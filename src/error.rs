use crate::types::{ClusterId, TileId};

/// Errors from board mutation and simulation entry points.
///
/// Every variant is reported before any state is touched: a rejected
/// operation leaves the index and the tile collections exactly as they were.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("cell ({x}, {y}) is outside the {width}x{height} board")]
    OutOfBounds { x: i32, y: i32, width: u32, height: u32 },
    #[error("cell ({x}, {y}) is already occupied")]
    Occupied { x: i32, y: i32 },
    #[error("invalid direction '{0}', expected one of N, E, S, W")]
    InvalidDirection(String),
    #[error("invalid board dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
    #[error("unknown glue symbol '{0}'")]
    UnknownGlue(String),
    #[error("tile {0} is not on the board")]
    UnknownTile(TileId),
    #[error("cluster {0} is not on the board")]
    UnknownCluster(ClusterId),
    #[error("occupancy index drifted at ({x}, {y})")]
    IndexDrift { x: i32, y: i32 },
}

/// Errors from loading or saving snapshots and rule files.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Board(#[from] BoardError),
}
