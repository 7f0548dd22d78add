use std::collections::HashMap;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::board::{Board, TileSpec};
use crate::error::BoardError;
use crate::glue::Glues;
use crate::rules::Rules;
use crate::types::{ClusterId, Pos};

pub const SNAPSHOT_VERSION: u32 = 1;

/// One tile in a flat snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileRecord {
    pub x: i32,
    pub y: i32,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// [N, E, S, W]; ignored for concrete tiles.
    #[serde(default)]
    pub glues: Glues,
    #[serde(default)]
    pub concrete: bool,
    /// Records sharing a key belong to one cluster. Absent means a singleton.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default = "default_version")]
    pub version: u32,
    pub width: u32,
    pub height: u32,
    pub tiles: Vec<TileRecord>,
}

fn default_version() -> u32 {
    SNAPSHOT_VERSION
}

/// Outcome of rebuilding a board from a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImportReport {
    pub placed: usize,
    /// Records rejected for being off the board or on an occupied cell.
    pub skipped: usize,
    pub merges: usize,
}

impl Board {
    /// Flatten to records: clusters in order with their members in order,
    /// then fixed tiles.
    pub fn to_snapshot(&self) -> Snapshot {
        let mut tiles = Vec::with_capacity(self.tiles.len());
        for poly in &self.clusters {
            for t in self.tiles_of(poly) {
                tiles.push(TileRecord {
                    x: t.pos.x,
                    y: t.pos.y,
                    color: t.color.clone(),
                    name: t.name.clone(),
                    glues: *t.glues(),
                    concrete: false,
                    cluster: Some(poly.id().0),
                });
            }
        }
        for t in self.fixed_tiles() {
            tiles.push(TileRecord {
                x: t.pos.x,
                y: t.pos.y,
                color: t.color.clone(),
                name: t.name.clone(),
                glues: *t.glues(),
                concrete: true,
                cluster: None,
            });
        }
        Snapshot {
            version: SNAPSHOT_VERSION,
            width: self.width(),
            height: self.height(),
            tiles,
        }
    }

    /// Rebuild a board. The first record of a cluster key establishes the
    /// cluster; later records with that key join it as members. Records that
    /// cannot be placed are skipped. With `activate`, glues are settled after import.
    pub fn from_snapshot(snap: &Snapshot, rules: Rules, activate: bool) -> Result<(Board, ImportReport), BoardError> {
        let mut board = Board::try_with_rules(snap.height, snap.width, rules)?;
        let mut report = ImportReport::default();
        let mut clusters: HashMap<u64, ClusterId> = HashMap::new();

        for rec in &snap.tiles {
            let placed = if rec.concrete {
                board.place_fixed(Pos::new(rec.x, rec.y), Some(rec.color.clone()), rec.name.clone())
            } else {
                let mut spec = TileSpec::new(rec.x, rec.y).with_glues(rec.glues).with_color(rec.color.clone());
                spec.name = rec.name.clone();
                match rec.cluster.and_then(|k| clusters.get(&k).copied()) {
                    Some(cid) => board.attach_tile(cid, spec),
                    None => board.place_tile(spec).map(|uid| {
                        if let (Some(k), Some(cid)) = (rec.cluster, board.tile(uid).and_then(|t| t.cluster)) {
                            clusters.insert(k, cid);
                        }
                        uid
                    }),
                }
            };
            match placed {
                Ok(_) => report.placed += 1,
                Err(e) => {
                    warn!("snapshot record at ({}, {}) skipped: {e}", rec.x, rec.y);
                    report.skipped += 1;
                }
            }
        }

        if activate {
            report.merges = board.activate_glues();
        }
        Ok((board, report))
    }
}
