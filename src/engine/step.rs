use std::collections::HashMap;

use log::trace;

use crate::board::Board;
use crate::grid::OccupancyIndex;
use crate::polyomino::Polyomino;
use crate::tile::TileArena;
use crate::types::{ClusterId, Direction};

/// True if any member of `poly` would hit a wall, a fixed tile, or a tile of
/// a cluster already marked blocked when moved one cell in `dir`.
/// A neighbor in a still-free cluster does not block: it may move away this step.
fn is_blocked(
    poly: &Polyomino,
    dir: Direction,
    index: &OccupancyIndex,
    tiles: &TileArena,
    blocked: &[bool],
    slots: &HashMap<ClusterId, usize>,
) -> bool {
    for uid in poly.tiles() {
        let Some(tile) = tiles.get(uid) else { continue };
        let dest = tile.pos.step(dir);
        if !index.in_bounds(dest) {
            return true;
        }
        let Some(occupant) = index.get(dest).and_then(|o| tiles.get(&o)) else { continue };
        match occupant.cluster {
            None => return true,
            Some(cid) if cid == poly.id() => {}
            Some(cid) => {
                if slots.get(&cid).is_some_and(|&s| blocked[s]) {
                    return true;
                }
            }
        }
    }
    false
}

impl Board {
    /// Move every cluster that can advance one cell in `dir`.
    ///
    /// Blocking is transitive, so it is relaxed to a fixed point first: passes
    /// repeat until one adds no new blocked mark. Marks are never cleared within
    /// a call, so the resulting partition does not depend on scan order.
    /// Returns whether anything moved.
    pub fn step(&mut self, dir: Direction) -> bool {
        let slots = self.cluster_slots();
        let mut blocked = vec![false; self.clusters.len()];

        let mut passes = 0u32;
        loop {
            passes += 1;
            let mut marked = false;
            for (ci, poly) in self.clusters.iter().enumerate() {
                if blocked[ci] {
                    continue;
                }
                if is_blocked(poly, dir, &self.index, &self.tiles, &blocked, &slots) {
                    blocked[ci] = true;
                    marked = true;
                }
            }
            if !marked {
                break;
            }
        }

        let movers: Vec<usize> = (0..self.clusters.len()).filter(|&i| !blocked[i]).collect();
        trace!("step {dir}: {passes} relaxation passes, {} of {} clusters free", movers.len(), self.clusters.len());
        if movers.is_empty() {
            return false;
        }

        // Clear every mover before writing any, so movers sliding into each
        // other's vacated cells are never overwritten.
        for &ci in &movers {
            for uid in self.clusters[ci].tiles() {
                if let Some(t) = self.tiles.get(uid) {
                    self.index.set(t.pos, None);
                }
            }
        }
        for &ci in &movers {
            self.clusters[ci].translate(dir, &mut self.tiles);
        }
        for &ci in &movers {
            for uid in self.clusters[ci].tiles() {
                if let Some(t) = self.tiles.get(uid) {
                    self.index.set(t.pos, Some(*uid));
                }
            }
        }
        true
    }

    /// Step until nothing moves. Returns the number of steps that moved something.
    pub fn slide(&mut self, dir: Direction) -> u32 {
        let mut steps = 0;
        while self.step(dir) {
            steps += 1;
        }
        steps
    }
}
