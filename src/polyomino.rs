use crate::glue::Glues;
use crate::rules::Rules;
use crate::tile::{Tile, TileArena};
use crate::types::{ClusterId, Direction, Pos, TileId};

/// A rigid cluster of mobile tiles. Members are handles into the board's
/// tile arena; order is insertion order and drives the canonical glue scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polyomino {
    id: ClusterId,
    tiles: Vec<TileId>,
}

impl Polyomino {
    /// Single-tile cluster; the tile is created in `arena` stamped with `id`.
    pub fn construct(
        arena: &mut TileArena,
        id: ClusterId,
        uid: TileId,
        pos: Pos,
        glues: Glues,
        color: impl Into<String>,
        name: Option<String>,
    ) -> Self {
        let tile = Tile::mobile(uid, id, pos, glues, color).with_name(name);
        arena.insert(uid, tile);
        Self::from_tile(id, uid)
    }

    #[inline]
    pub(crate) fn from_tile(id: ClusterId, uid: TileId) -> Self {
        Self { id, tiles: vec![uid] }
    }

    #[inline]
    pub fn id(&self) -> ClusterId {
        self.id
    }

    #[inline]
    pub fn tiles(&self) -> &[TileId] {
        &self.tiles
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[inline]
    pub fn contains(&self, uid: TileId) -> bool {
        self.tiles.contains(&uid)
    }

    #[inline]
    pub(crate) fn push(&mut self, uid: TileId) {
        self.tiles.push(uid);
    }

    /// Drop a member handle. Returns false if it was not a member.
    pub(crate) fn detach(&mut self, uid: TileId) -> bool {
        match self.tiles.iter().position(|&t| t == uid) {
            Some(i) => {
                self.tiles.remove(i);
                true
            }
            None => false,
        }
    }

    /// Sum of matched glue strength over every orthogonally adjacent pair of
    /// tiles, one from each cluster. Tiles missing from the arena contribute nothing.
    pub fn bond_strength(&self, other: &Polyomino, arena: &TileArena, rules: &Rules) -> u32 {
        let mut total: u32 = 0;
        for uid in &self.tiles {
            let Some(t) = arena.get(uid) else { continue };
            for ouid in &other.tiles {
                let Some(pt) = arena.get(ouid) else { continue };
                for dir in Direction::all() {
                    if t.pos.step(dir) != pt.pos {
                        continue;
                    }
                    let mine = t.glue(dir);
                    if !mine.is_blank() && mine == pt.glue(dir.opposite()) {
                        total = total.saturating_add(rules.strength(mine));
                    }
                }
            }
        }
        total
    }

    #[inline]
    pub fn can_merge(&self, other: &Polyomino, arena: &TileArena, rules: &Rules) -> bool {
        self.bond_strength(other, arena, rules) >= rules.temperature
    }

    /// Absorb every tile of `other`, re-stamping its cluster identity.
    /// The caller evicts the emptied `other` from the board.
    pub fn merge(&mut self, other: Polyomino, arena: &mut TileArena) {
        for uid in other.tiles {
            if let Some(t) = arena.get_mut(&uid) {
                t.cluster = Some(self.id);
            }
            self.tiles.push(uid);
        }
    }

    /// Shift every member one cell. No bounds or collision checks.
    pub fn translate(&self, dir: Direction, arena: &mut TileArena) {
        for uid in &self.tiles {
            if let Some(t) = arena.get_mut(uid) {
                t.pos = t.pos.step(dir);
            }
        }
    }
}
