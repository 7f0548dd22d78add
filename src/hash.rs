use crate::board::Board;
use crate::tile::Tile;
use crate::types::Pos;

/// SplitMix64 PRNG step for stable, fast token generation.
#[inline]
fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = x;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

#[inline]
fn token128_from_seed(seed: u64) -> u128 {
    let lo = splitmix64(seed ^ 0xC0FF_EE00_D15E_CAFE);
    let hi = splitmix64(seed ^ 0xDEAD_BEEF_F00D_FACE ^ lo.rotate_left(17));
    ((hi as u128) << 64) | (lo as u128)
}

// Domain tags (arbitrary but fixed)
const DOM_TILE: u64 = 0x7B1E_5EED_0000_0001;
const DOM_ANCHOR: u64 = 0x7B1E_5EED_0000_00A0;
const DOM_DIMS: u64 = 0x7B1E_5EED_0000_00D0;

#[inline]
fn pack_pos(p: Pos) -> u64 {
    (u64::from(p.x as u32)) | (u64::from(p.y as u32) << 32)
}

#[inline]
fn z_token_tile(tile: &Tile) -> u128 {
    let glues = tile
        .glues()
        .iter()
        .enumerate()
        .fold(0u64, |acc, (i, g)| acc | ((g.index() as u64) << (i * 4)));
    let seed = DOM_TILE ^ splitmix64(pack_pos(tile.pos)) ^ (glues << 40) ^ (u64::from(tile.is_fixed()) << 63);
    token128_from_seed(seed)
}

/// Ties a tile to its cluster through the cluster's smallest position, so the
/// digest sees the partition without depending on cluster ids or order.
#[inline]
fn z_token_member(tile: Pos, anchor: Pos) -> u128 {
    token128_from_seed(DOM_ANCHOR ^ splitmix64(pack_pos(tile)) ^ splitmix64(pack_pos(anchor)).rotate_left(29))
}

/// Order-independent digest of dimensions, tile positions, glues, fixed flags
/// and cluster membership. Colors, names and ids are ignored.
pub fn fingerprint(board: &Board) -> u128 {
    let mut z = token128_from_seed(DOM_DIMS ^ u64::from(board.width()) ^ (u64::from(board.height()) << 32));
    for poly in board.clusters() {
        let Some(anchor) = board.tiles_of(poly).map(|t| t.pos).min() else { continue };
        for t in board.tiles_of(poly) {
            z ^= z_token_tile(t);
            z ^= z_token_member(t.pos, anchor);
        }
    }
    for t in board.fixed_tiles() {
        z ^= z_token_tile(t);
    }
    z
}
