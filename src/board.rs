use std::collections::HashMap;

use log::debug;

use crate::error::BoardError;
use crate::glue::{Glue, Glues, BLANK_GLUES};
use crate::grid::OccupancyIndex;
use crate::polyomino::Polyomino;
use crate::rules::Rules;
use crate::tile::{Tile, TileArena, DEFAULT_TILE_COLOR, FIXED_TILE_COLOR};
use crate::types::{ClusterId, Direction, IdGen, Pos, TileId};

/// Largest extent on either axis. Every fallible construction and resize path enforces it.
pub const MAX_DIMENSION: u32 = 200;

/// Accept extents in 1..=MAX_DIMENSION on both axes.
fn check_dimensions(width: u32, height: u32) -> Result<(), BoardError> {
    if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(BoardError::InvalidDimensions { width, height });
    }
    Ok(())
}

/// Everything needed to create one mobile tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileSpec {
    pub pos: Pos,
    pub glues: Glues,
    pub color: String,
    pub name: Option<String>,
}

impl TileSpec {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            pos: Pos::new(x, y),
            glues: BLANK_GLUES,
            color: DEFAULT_TILE_COLOR.to_string(),
            name: None,
        }
    }

    #[inline]
    pub fn with_glues(mut self, glues: Glues) -> Self {
        self.glues = glues;
        self
    }

    #[inline]
    pub fn with_glue(mut self, side: Direction, glue: Glue) -> Self {
        self.glues[side.index()] = glue;
        self
    }

    #[inline]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    #[inline]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoardStats {
    pub tiles: usize,
    pub fixed: usize,
    pub clusters: usize,
}

/// Bounded grid holding mobile clusters and fixed tiles.
///
/// All tiles live in one arena keyed by [`TileId`]; clusters and the fixed
/// list hold handles into it. The occupancy index is a cache over tile
/// positions and is rebuilt or patched by every mutating operation.
#[derive(Debug, Clone)]
pub struct Board {
    pub(crate) index: OccupancyIndex,
    pub(crate) tiles: TileArena,
    pub(crate) clusters: Vec<Polyomino>,
    pub(crate) fixed: Vec<TileId>,
    tile_ids: IdGen,
    cluster_ids: IdGen,
    pub(crate) rules: Rules,
}

impl Board {
    /// Empty board with `rows` rows and `cols` columns under the reference rules.
    pub fn new(rows: u32, cols: u32) -> Self {
        Self::with_rules(rows, cols, Rules::default())
    }

    /// Checked constructor for extents that come from outside the program
    /// (files, command lines): both must lie in 1..=MAX_DIMENSION.
    pub fn try_with_rules(rows: u32, cols: u32, rules: Rules) -> Result<Self, BoardError> {
        check_dimensions(cols, rows)?;
        Ok(Self::with_rules(rows, cols, rules))
    }

    /// Unchecked constructor for extents known in code; the index is sized eagerly.
    pub fn with_rules(rows: u32, cols: u32, rules: Rules) -> Self {
        Self {
            index: OccupancyIndex::new(cols, rows),
            tiles: TileArena::new(),
            clusters: Vec::new(),
            fixed: Vec::new(),
            tile_ids: IdGen::new(),
            cluster_ids: IdGen::new(),
            rules,
        }
    }

    #[inline]
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    #[inline]
    pub fn set_rules(&mut self, rules: Rules) {
        self.rules = rules;
    }

    #[inline]
    pub fn set_factory_mode(&mut self, on: bool) {
        self.rules.factory_mode = on;
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.index.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.index.height()
    }

    #[inline]
    pub fn in_bounds(&self, pos: Pos) -> bool {
        self.index.in_bounds(pos)
    }

    // ---- queries ----

    #[inline]
    pub fn clusters(&self) -> &[Polyomino] {
        &self.clusters
    }

    pub fn cluster(&self, id: ClusterId) -> Option<&Polyomino> {
        self.clusters.iter().find(|p| p.id() == id)
    }

    pub fn cluster_of(&self, uid: TileId) -> Option<&Polyomino> {
        self.tiles.get(&uid).and_then(|t| t.cluster).and_then(|c| self.cluster(c))
    }

    #[inline]
    pub fn tile(&self, uid: TileId) -> Option<&Tile> {
        self.tiles.get(&uid)
    }

    /// Member tiles of a cluster in cluster order.
    pub fn tiles_of<'a>(&'a self, poly: &'a Polyomino) -> impl Iterator<Item = &'a Tile> + 'a {
        poly.tiles().iter().filter_map(move |uid| self.tiles.get(uid))
    }

    pub fn fixed_tiles(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.fixed.iter().filter_map(move |uid| self.tiles.get(uid))
    }

    #[inline]
    pub fn occupant(&self, pos: Pos) -> Option<&Tile> {
        self.index.get(pos).and_then(|uid| self.tiles.get(&uid))
    }

    pub fn stats(&self) -> BoardStats {
        BoardStats {
            tiles: self.tiles.len(),
            fixed: self.fixed.len(),
            clusters: self.clusters.len(),
        }
    }

    /// Self-test: the index must equal a fresh rebuild from tile positions.
    #[inline]
    pub fn verify_index(&self) -> Result<(), BoardError> {
        self.index.verify(&self.tiles)
    }

    // ---- placement ----

    fn check_free(&self, pos: Pos) -> Result<(), BoardError> {
        if !self.index.in_bounds(pos) {
            return Err(BoardError::OutOfBounds {
                x: pos.x,
                y: pos.y,
                width: self.width(),
                height: self.height(),
            });
        }
        if self.index.get(pos).is_some() {
            return Err(BoardError::Occupied { x: pos.x, y: pos.y });
        }
        Ok(())
    }

    /// Place a new single-tile cluster. Rejected without state change if the
    /// cell is off the board or occupied.
    pub fn place_tile(&mut self, spec: TileSpec) -> Result<TileId, BoardError> {
        if let Err(e) = self.check_free(spec.pos) {
            debug!("place_tile rejected at {}: {e}", spec.pos);
            return Err(e);
        }
        let uid = TileId(self.tile_ids.next_raw());
        let cid = ClusterId(self.cluster_ids.next_raw());
        let poly = Polyomino::construct(&mut self.tiles, cid, uid, spec.pos, spec.glues, spec.color, spec.name);
        self.index.set(spec.pos, Some(uid));
        self.clusters.push(poly);
        Ok(uid)
    }

    /// Append a tile to an existing cluster as an additional member
    /// (snapshot reconstruction). Adjacency is not required.
    pub fn attach_tile(&mut self, cluster: ClusterId, spec: TileSpec) -> Result<TileId, BoardError> {
        self.check_free(spec.pos)?;
        let Some(slot) = self.clusters.iter().position(|p| p.id() == cluster) else {
            return Err(BoardError::UnknownCluster(cluster));
        };
        let uid = TileId(self.tile_ids.next_raw());
        let tile = Tile::mobile(uid, cluster, spec.pos, spec.glues, spec.color).with_name(spec.name);
        self.tiles.insert(uid, tile);
        self.index.set(spec.pos, Some(uid));
        self.clusters[slot].push(uid);
        Ok(uid)
    }

    /// Place an immovable, glue-less tile.
    pub fn place_fixed(&mut self, pos: Pos, color: Option<String>, name: Option<String>) -> Result<TileId, BoardError> {
        if let Err(e) = self.check_free(pos) {
            debug!("place_fixed rejected at {pos}: {e}");
            return Err(e);
        }
        let uid = TileId(self.tile_ids.next_raw());
        let color = color.unwrap_or_else(|| FIXED_TILE_COLOR.to_string());
        self.tiles.insert(uid, Tile::fixed(uid, pos, color).with_name(name));
        self.index.set(pos, Some(uid));
        self.fixed.push(uid);
        Ok(uid)
    }

    // ---- removal ----

    /// Detach a tile from its owning collection and clear its cell.
    /// A cluster left empty is dropped.
    pub fn remove(&mut self, uid: TileId) -> Result<Tile, BoardError> {
        let Some(tile) = self.tiles.remove(&uid) else {
            return Err(BoardError::UnknownTile(uid));
        };
        match tile.cluster {
            Some(cid) => {
                if let Some(slot) = self.clusters.iter().position(|p| p.id() == cid) {
                    self.clusters[slot].detach(uid);
                    if self.clusters[slot].is_empty() {
                        self.clusters.remove(slot);
                        debug!("cluster {cid} emptied by removal of {uid}");
                    }
                }
            }
            None => self.fixed.retain(|&f| f != uid),
        }
        if self.index.get(tile.pos) == Some(uid) {
            self.index.set(tile.pos, None);
        }
        Ok(tile)
    }

    /// Remove whatever occupies `pos`, if anything.
    pub fn remove_at(&mut self, pos: Pos) -> Option<Tile> {
        let uid = self.index.get(pos)?;
        self.remove(uid).ok()
    }

    // ---- dimensions ----

    /// Change the declared extent and rebuild the index. Tiles now outside
    /// the bounds stay on the board but become unreachable by lookup.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), BoardError> {
        check_dimensions(width, height)?;
        self.index.resize(width, height, &self.tiles);
        debug!("board resized to {width}x{height}");
        Ok(())
    }

    /// Resize after dropping every tile that would fall outside the new bounds.
    /// Returns the number of tiles dropped.
    pub fn resize_clipped(&mut self, width: u32, height: u32) -> Result<usize, BoardError> {
        check_dimensions(width, height)?;
        let outside: Vec<TileId> = self
            .tiles
            .values()
            .filter(|t| t.pos.x < 0 || t.pos.y < 0 || t.pos.x >= width as i32 || t.pos.y >= height as i32)
            .map(|t| t.uid)
            .collect();
        for uid in &outside {
            self.remove(*uid)?;
        }
        self.resize(width, height)?;
        Ok(outside.len())
    }

    /// Drop every cluster and fixed tile. Id generators keep counting.
    pub fn clear(&mut self) {
        self.tiles.clear();
        self.clusters.clear();
        self.fixed.clear();
        self.index.clear();
    }

    // ---- internals shared by the engine ----

    #[inline]
    pub(crate) fn reindex(&mut self) {
        self.index.rebuild(&self.tiles);
    }

    #[inline]
    pub(crate) fn next_cluster_id(&mut self) -> ClusterId {
        ClusterId(self.cluster_ids.next_raw())
    }

    /// Cluster id → position in the cluster list.
    pub(crate) fn cluster_slots(&self) -> HashMap<ClusterId, usize> {
        self.clusters.iter().enumerate().map(|(i, p)| (p.id(), i)).collect()
    }
}
