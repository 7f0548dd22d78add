use log::debug;

use crate::board::Board;
use crate::polyomino::Polyomino;
use crate::types::ClusterId;

impl Board {
    /// Matched glue strength between two clusters; 0 if either is unknown.
    pub fn bond_strength(&self, a: ClusterId, b: ClusterId) -> u32 {
        match (self.cluster(a), self.cluster(b)) {
            (Some(pa), Some(pb)) => pa.bond_strength(pb, &self.tiles, &self.rules),
            _ => 0,
        }
    }

    /// Whether cluster `a` would bond with cluster `b` under the current rules.
    pub fn can_merge(&self, a: ClusterId, b: ClusterId) -> bool {
        match (self.cluster(a), self.cluster(b)) {
            (Some(pa), Some(pb)) if a != b => pa.can_merge(pb, &self.tiles, &self.rules),
            _ => false,
        }
    }

    /// First mergeable pair in canonical order: cluster order, then tile order
    /// within the cluster, then neighbors N, E, S, W. Returns (absorber, absorbed).
    fn find_bond(&self) -> Option<(usize, usize)> {
        let slots = self.cluster_slots();
        for (ci, poly) in self.clusters.iter().enumerate() {
            for uid in poly.tiles() {
                let Some(tile) = self.tiles.get(uid) else { continue };
                for neighbor in self.index.neighbors(tile.pos).into_iter().flatten() {
                    let Some(ncid) = self.tiles.get(&neighbor).and_then(|n| n.cluster) else { continue };
                    if ncid == poly.id() {
                        continue;
                    }
                    let Some(&ni) = slots.get(&ncid) else { continue };
                    if poly.can_merge(&self.clusters[ni], &self.tiles, &self.rules) {
                        return Some((ci, ni));
                    }
                }
            }
        }
        None
    }

    /// Merge adjacent clusters whose facing glues reach the bonding threshold,
    /// rescanning from the start after every merge until a full scan finds
    /// nothing. Each merge removes one cluster, so this ends within the tile count.
    /// Returns the number of merges performed.
    pub fn activate_glues(&mut self) -> usize {
        let mut merges = 0;
        while let Some((keep, absorb)) = self.find_bond() {
            let absorbed = self.clusters.remove(absorb);
            let keep = if absorb < keep { keep - 1 } else { keep };
            debug!("merging cluster {} into {}", absorbed.id(), self.clusters[keep].id());
            self.clusters[keep].merge(absorbed, &mut self.tiles);
            self.reindex();
            merges += 1;
        }
        merges
    }

    /// Split every cluster into single-tile clusters with fresh ids, keeping
    /// tile order. Undoes all bonding without moving anything.
    pub fn dissolve(&mut self) {
        let members: Vec<_> = self.clusters.drain(..).flat_map(|p| p.tiles().to_vec()).collect();
        for uid in members {
            let cid = self.next_cluster_id();
            if let Some(t) = self.tiles.get_mut(&uid) {
                t.cluster = Some(cid);
                self.clusters.push(Polyomino::from_tile(cid, uid));
            }
        }
        self.reindex();
    }

    /// Dissolve all bonds, then re-run glue activation from scratch.
    pub fn relist(&mut self) -> usize {
        self.dissolve();
        self.activate_glues()
    }
}
