use std::collections::BTreeMap;

use crate::glue::{Glue, Glues, BLANK_GLUES};
use crate::types::{ClusterId, Direction, Pos, TileId};

pub const DEFAULT_TILE_COLOR: &str = "#3498db";
pub const FIXED_TILE_COLOR: &str = "#686868";

/// Tile storage addressed by stable handle. Ordered so scans are deterministic.
pub type TileArena = BTreeMap<TileId, Tile>;

/// A single grid occupant. Identity is `uid`, never position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub uid: TileId,
    /// Owning cluster; `None` for fixed tiles.
    pub cluster: Option<ClusterId>,
    pub pos: Pos,
    pub color: String,
    glues: Glues,
    pub name: Option<String>,
}

impl Tile {
    pub fn mobile(uid: TileId, cluster: ClusterId, pos: Pos, glues: Glues, color: impl Into<String>) -> Self {
        Self {
            uid,
            cluster: Some(cluster),
            pos,
            color: color.into(),
            glues,
            name: None,
        }
    }

    /// Fixed tiles never move and carry no glues.
    pub fn fixed(uid: TileId, pos: Pos, color: impl Into<String>) -> Self {
        Self {
            uid,
            cluster: None,
            pos,
            color: color.into(),
            glues: BLANK_GLUES,
            name: None,
        }
    }

    #[inline]
    pub fn with_name(mut self, name: Option<String>) -> Self {
        self.name = name.filter(|n| !n.is_empty());
        self
    }

    #[inline]
    pub fn is_fixed(&self) -> bool {
        self.cluster.is_none()
    }

    #[inline]
    pub fn glues(&self) -> &Glues {
        &self.glues
    }

    #[inline]
    pub fn glue(&self, side: Direction) -> Glue {
        self.glues[side.index()]
    }
}
