use log::debug;

use crate::board::Board;
use crate::error::BoardError;
use crate::types::{Direction, TileId};

/// What one tumble did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TumbleOutcome {
    /// Single-cell steps taken before everything came to rest.
    pub steps: u32,
    /// Tiles removed by factory-mode shedding.
    pub shed: usize,
    pub merges: usize,
}

impl TumbleOutcome {
    #[inline]
    pub fn progressed(&self) -> bool {
        self.steps > 0 || self.shed > 0 || self.merges > 0
    }
}

impl Board {
    /// Slide everything as far as it goes in `dir`, shed the outer ring when
    /// factory mode is on, then settle glues.
    pub fn tumble(&mut self, dir: Direction) -> TumbleOutcome {
        let steps = self.slide(dir);
        let shed = if self.rules.factory_mode { self.shed_outer_ring() } else { 0 };
        let merges = self.activate_glues();
        let outcome = TumbleOutcome { steps, shed, merges };
        debug!("tumble {dir}: {outcome:?}");
        outcome
    }

    /// Tumble from a direction token. Anything other than N, E, S or W
    /// (case-insensitive) is rejected before the board is touched.
    pub fn tumble_token(&mut self, token: &str) -> Result<TumbleOutcome, BoardError> {
        let dir: Direction = token.parse()?;
        Ok(self.tumble(dir))
    }

    /// Remove every mobile tile on the outermost row or column. Clusters left
    /// empty are dropped. Fixed tiles are never shed. Returns the tile count removed.
    pub fn shed_outer_ring(&mut self) -> usize {
        let max_x = self.width() as i32 - 1;
        let max_y = self.height() as i32 - 1;
        let doomed: Vec<TileId> = self
            .clusters
            .iter()
            .flat_map(|p| p.tiles().iter().copied())
            .filter(|uid| {
                self.tiles
                    .get(uid)
                    .is_some_and(|t| t.pos.x <= 0 || t.pos.y <= 0 || t.pos.x >= max_x || t.pos.y >= max_y)
            })
            .collect();
        if doomed.is_empty() {
            return 0;
        }
        for uid in &doomed {
            if let Some(t) = self.tiles.remove(uid) {
                if let Some(cid) = t.cluster {
                    if let Some(poly) = self.clusters.iter_mut().find(|p| p.id() == cid) {
                        poly.detach(*uid);
                    }
                }
            }
        }
        self.clusters.retain(|p| !p.is_empty());
        self.reindex();
        debug!("factory mode shed {} tiles", doomed.len());
        doomed.len()
    }
}
