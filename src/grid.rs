use crate::error::BoardError;
use crate::tile::TileArena;
use crate::types::{Direction, Pos, TileId};

/// Cell → occupant cache. Derived entirely from tile positions and rebuilt
/// whenever they change in bulk. Cells are laid out row-major (y * width + x).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancyIndex {
    width: u32,
    height: u32,
    cells: Vec<Option<TileId>>,
}

impl OccupancyIndex {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![None; (width as usize) * (height as usize)],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as i64) < self.width as i64 && (pos.y as i64) < self.height as i64
    }

    #[inline]
    fn slot(&self, pos: Pos) -> Option<usize> {
        if self.in_bounds(pos) {
            Some(pos.y as usize * self.width as usize + pos.x as usize)
        } else {
            None
        }
    }

    /// Occupant of a cell. Cells off the grid read as empty.
    #[inline]
    pub fn get(&self, pos: Pos) -> Option<TileId> {
        self.slot(pos).and_then(|i| self.cells[i])
    }

    #[inline]
    pub fn is_free(&self, pos: Pos) -> bool {
        self.in_bounds(pos) && self.get(pos).is_none()
    }

    /// Writes off the grid are dropped.
    #[inline]
    pub fn set(&mut self, pos: Pos, occupant: Option<TileId>) {
        if let Some(i) = self.slot(pos) {
            self.cells[i] = occupant;
        }
    }

    /// Neighbors in [N, E, S, W] order; `None` for off-grid or empty cells.
    #[inline]
    pub fn neighbors(&self, pos: Pos) -> [Option<TileId>; 4] {
        Direction::all().map(|d| self.get(pos.step(d)))
    }

    #[inline]
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|c| *c = None);
    }

    /// Recompute every cell from the arena. Tiles outside the grid are not indexed.
    pub fn rebuild(&mut self, arena: &TileArena) {
        self.clear();
        for (uid, tile) in arena {
            self.set(tile.pos, Some(*uid));
        }
    }

    /// Recompute at new dimensions.
    pub fn resize(&mut self, width: u32, height: u32, arena: &TileArena) {
        *self = Self::new(width, height);
        self.rebuild(arena);
    }

    /// Compare against a fresh rebuild; reports the first drifted cell.
    /// Also fails when two in-bounds tiles share a cell.
    pub fn verify(&self, arena: &TileArena) -> Result<(), BoardError> {
        let mut fresh = Self::new(self.width, self.height);
        for (uid, tile) in arena {
            if fresh.get(tile.pos).is_some() {
                return Err(BoardError::IndexDrift { x: tile.pos.x, y: tile.pos.y });
            }
            fresh.set(tile.pos, Some(*uid));
        }
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                let p = Pos::new(x, y);
                if fresh.get(p) != self.get(p) {
                    return Err(BoardError::IndexDrift { x, y });
                }
            }
        }
        Ok(())
    }

    /// Occupied cells in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (Pos, TileId)> + '_ {
        let w = self.width as usize;
        self.cells.iter().enumerate().filter_map(move |(i, c)| {
            c.map(|uid| (Pos::new((i % w) as i32, (i / w) as i32), uid))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::Tile;

    #[test]
    fn off_grid_lookups_miss() {
        let mut idx = OccupancyIndex::new(3, 2);
        idx.set(Pos::new(5, 5), Some(TileId(1)));
        assert_eq!(idx.get(Pos::new(5, 5)), None);
        assert_eq!(idx.get(Pos::new(-1, 0)), None);
        assert!(!idx.in_bounds(Pos::new(3, 0)));
        assert!(idx.in_bounds(Pos::new(2, 1)));
        assert_eq!(idx.occupied().count(), 0);
    }

    #[test]
    fn neighbors_follow_nesw_order() {
        let mut arena = TileArena::new();
        arena.insert(TileId(1), Tile::fixed(TileId(1), Pos::new(1, 0), "#000"));
        arena.insert(TileId(2), Tile::fixed(TileId(2), Pos::new(0, 1), "#000"));
        let mut idx = OccupancyIndex::new(3, 3);
        idx.rebuild(&arena);
        assert_eq!(idx.neighbors(Pos::new(1, 1)), [Some(TileId(1)), None, None, Some(TileId(2))]);
        assert_eq!(idx.neighbors(Pos::new(0, 0)), [None, Some(TileId(1)), Some(TileId(2)), None]);
    }

    #[test]
    fn verify_detects_drift_and_collisions() {
        let mut arena = TileArena::new();
        arena.insert(TileId(1), Tile::fixed(TileId(1), Pos::new(1, 1), "#000"));
        let mut idx = OccupancyIndex::new(3, 3);
        idx.rebuild(&arena);
        assert!(idx.verify(&arena).is_ok());

        arena.get_mut(&TileId(1)).unwrap().pos = Pos::new(2, 2);
        assert!(idx.verify(&arena).is_err());
        idx.rebuild(&arena);
        assert!(idx.verify(&arena).is_ok());

        arena.insert(TileId(2), Tile::fixed(TileId(2), Pos::new(2, 2), "#000"));
        assert_eq!(idx.verify(&arena), Err(BoardError::IndexDrift { x: 2, y: 2 }));
    }
}
