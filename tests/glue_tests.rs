use tumbletiles::{Board, ClusterId, Direction, Glue, Pos, Rules, TileId, TileSpec};

fn cluster_id(board: &Board, uid: TileId) -> ClusterId {
    board.tile(uid).and_then(|t| t.cluster).expect("mobile tile")
}

#[test]
fn east_west_match_is_symmetric() {
    let mut board = Board::new(3, 3);
    let a = board.place_tile(TileSpec::new(0, 1).with_glue(Direction::E, Glue::C)).unwrap();
    let b = board.place_tile(TileSpec::new(1, 1).with_glue(Direction::W, Glue::C)).unwrap();
    let (ca, cb) = (cluster_id(&board, a), cluster_id(&board, b));

    assert!(board.can_merge(ca, cb));
    assert!(board.can_merge(cb, ca));
    assert_eq!(board.bond_strength(ca, cb), board.bond_strength(cb, ca));
    assert!(!board.can_merge(ca, ca), "a cluster never bonds with itself");
}

#[test]
fn north_south_match_is_symmetric() {
    let mut board = Board::new(3, 3);
    let top = board.place_tile(TileSpec::new(2, 0).with_glue(Direction::S, Glue::Y)).unwrap();
    let bottom = board.place_tile(TileSpec::new(2, 1).with_glue(Direction::N, Glue::Y)).unwrap();
    let (ct, cb) = (cluster_id(&board, top), cluster_id(&board, bottom));
    assert!(board.can_merge(ct, cb));
    assert!(board.can_merge(cb, ct));
}

#[test]
fn facing_edges_must_match() {
    let mut board = Board::new(3, 3);
    // Glue on the far side does not face the neighbor.
    board.place_tile(TileSpec::new(0, 0).with_glue(Direction::W, Glue::A)).unwrap();
    board.place_tile(TileSpec::new(1, 0).with_glue(Direction::E, Glue::A)).unwrap();
    // Different symbols face each other.
    board.place_tile(TileSpec::new(0, 2).with_glue(Direction::E, Glue::A)).unwrap();
    board.place_tile(TileSpec::new(1, 2).with_glue(Direction::W, Glue::B)).unwrap();

    assert_eq!(board.activate_glues(), 0);
    assert_eq!(board.clusters().len(), 4);
}

#[test]
fn fixed_tiles_never_bond() {
    let mut board = Board::new(3, 3);
    board.place_fixed(Pos::new(1, 1), None, None).unwrap();
    let glues = [Glue::N, Glue::E, Glue::S, Glue::W];
    board.place_tile(TileSpec::new(1, 0).with_glues(glues)).unwrap();
    board.place_tile(TileSpec::new(0, 1).with_glues(glues)).unwrap();

    assert_eq!(board.activate_glues(), 0);
    assert_eq!(board.stats().clusters, 2);
    assert!(board.fixed_tiles().all(|t| t.glues().iter().all(|g| g.is_blank())));
}

#[test]
fn zero_strength_symbol_does_not_bond() {
    let rules = Rules::reference().with_strength(Glue::A, 0);
    let mut board = Board::with_rules(3, 3, rules);
    board.place_tile(TileSpec::new(0, 0).with_glue(Direction::E, Glue::A)).unwrap();
    board.place_tile(TileSpec::new(1, 0).with_glue(Direction::W, Glue::A)).unwrap();
    assert_eq!(board.activate_glues(), 0);
}

/// At temperature 2 a single unit bond is too weak, two cooperating bonds suffice.
#[test]
fn temperature_two_needs_cooperative_bonds() {
    let rules = Rules::new(2, false).with_strength(Glue::X, 2);
    let mut board = Board::with_rules(4, 4, rules);
    // Left column pair held by a strength-2 X bond.
    board.place_tile(TileSpec::new(0, 0).with_glue(Direction::S, Glue::X).with_glue(Direction::E, Glue::A)).unwrap();
    board.place_tile(TileSpec::new(0, 1).with_glue(Direction::N, Glue::X).with_glue(Direction::E, Glue::A)).unwrap();
    // Right column: only the top tile offers a matching A.
    board.place_tile(TileSpec::new(1, 0).with_glue(Direction::W, Glue::A)).unwrap();
    let lone = board.place_tile(TileSpec::new(1, 1)).unwrap();

    assert_eq!(board.activate_glues(), 1, "only the X pair merges");
    assert_eq!(board.stats().clusters, 3);

    // Give the lower right tile its A and bond it to its neighbor above.
    board.remove(lone).unwrap();
    board
        .place_tile(TileSpec::new(1, 1).with_glue(Direction::W, Glue::A).with_glue(Direction::N, Glue::Z))
        .unwrap();
    let upper = board.occupant(Pos::new(1, 0)).unwrap().uid;
    board.remove(upper).unwrap();
    board
        .place_tile(TileSpec::new(1, 0).with_glue(Direction::W, Glue::A).with_glue(Direction::S, Glue::Z))
        .unwrap();
    // Z has strength 1 < 2: the right column stays split, each side offers one A.
    assert_eq!(board.activate_glues(), 0);

    let rules = Rules::new(2, false).with_strength(Glue::X, 2).with_strength(Glue::Z, 2);
    board.set_rules(rules);
    // Right column bonds, then the two columns share two A bonds.
    assert_eq!(board.activate_glues(), 2);
    assert_eq!(board.stats().clusters, 1);
}

/// The first cluster in declaration order absorbs its partner.
#[test]
fn earlier_cluster_absorbs_later_one() {
    let mut board = Board::new(3, 3);
    let first = board.place_tile(TileSpec::new(1, 0).with_glue(Direction::W, Glue::D)).unwrap();
    let second = board.place_tile(TileSpec::new(0, 0).with_glue(Direction::E, Glue::D)).unwrap();
    let survivor = cluster_id(&board, first);

    assert_eq!(board.activate_glues(), 1);
    let poly = &board.clusters()[0];
    assert_eq!(poly.id(), survivor);
    assert_eq!(poly.tiles(), &[first, second]);
    assert_eq!(cluster_id(&board, second), survivor);
}

#[test]
fn chain_merges_into_one_cluster() {
    let mut board = Board::new(1, 5);
    for x in 0..5 {
        board
            .place_tile(TileSpec::new(x, 0).with_glue(Direction::E, Glue::N).with_glue(Direction::W, Glue::N))
            .unwrap();
    }
    assert_eq!(board.activate_glues(), 4);
    assert_eq!(board.clusters().len(), 1);
    assert_eq!(board.clusters()[0].len(), 5);
    assert_eq!(board.activate_glues(), 0, "settled glues stay settled");
    board.verify_index().unwrap();
}

#[test]
fn dissolve_and_relist() {
    let mut board = Board::new(3, 3);
    board.place_tile(TileSpec::new(0, 0).with_glue(Direction::E, Glue::A)).unwrap();
    board.place_tile(TileSpec::new(1, 0).with_glue(Direction::W, Glue::A)).unwrap();
    board.place_tile(TileSpec::new(2, 2)).unwrap();
    board.activate_glues();
    assert_eq!(board.clusters().len(), 2);

    let old_ids: Vec<ClusterId> = board.clusters().iter().map(|p| p.id()).collect();
    board.dissolve();
    assert_eq!(board.clusters().len(), 3);
    assert!(board.clusters().iter().all(|p| p.len() == 1 && !old_ids.contains(&p.id())));
    board.verify_index().unwrap();

    assert_eq!(board.relist(), 1);
    assert_eq!(board.clusters().len(), 2);
}

/// Merged clusters can reach new partners only after sliding.
#[test]
fn tumble_settles_glues_after_sliding() {
    let mut board = Board::new(1, 4);
    board.place_tile(TileSpec::new(0, 0).with_glue(Direction::E, Glue::B)).unwrap();
    board.place_fixed(Pos::new(3, 0), None, None).unwrap();
    board.place_tile(TileSpec::new(2, 0).with_glue(Direction::W, Glue::B)).unwrap();
    assert_eq!(board.activate_glues(), 0);

    let out = board.tumble(Direction::E);
    assert_eq!(out.steps, 1);
    assert_eq!(out.merges, 1);
    assert_eq!(board.clusters().len(), 1);
}
