use tumbletiles::{fingerprint, Board, Direction, Glue, Pos, Rules, TileSpec};

fn print_board(board: &Board) {
    for y in 0..board.height() as i32 {
        for x in 0..board.width() as i32 {
            match board.occupant(Pos::new(x, y)) {
                None => print!(" ."),
                Some(t) if t.is_fixed() => print!(" #"),
                Some(t) => print!(" {}", t.cluster.map_or(0, |c| c.0 % 10)),
            }
        }
        println!();
    }
}

/// Walk through the reference scenarios on small boards.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("Scenario 1: slide onto a fixed tile");
    let mut board = Board::new(3, 3);
    board.place_fixed(Pos::new(1, 2), None, None)?;
    board.place_tile(TileSpec::new(1, 0))?;
    let first = board.tumble(Direction::S);
    let second = board.tumble(Direction::S);
    print_board(&board);
    println!("  first: {first:?}, second progressed: {}", second.progressed());

    println!("Scenario 2: glue bond then rigid slide");
    let mut board = Board::new(3, 3);
    board.place_tile(TileSpec::new(0, 0).with_glue(Direction::E, Glue::A))?;
    board.place_tile(TileSpec::new(1, 0).with_glue(Direction::W, Glue::A))?;
    let merges = board.activate_glues();
    let out = board.tumble(Direction::E);
    print_board(&board);
    println!("  merges: {merges}, clusters: {}, tumble: {out:?}", board.clusters().len());

    println!("Scenario 3: factory mode sheds the leading tile");
    let mut board = Board::with_rules(5, 5, Rules::factory());
    board.place_tile(TileSpec::new(2, 2))?;
    let out = board.tumble(Direction::E);
    print_board(&board);
    println!("  tumble: {out:?}, clusters left: {}", board.clusters().len());

    println!("Scenario 4: placement on an occupied cell");
    let mut board = Board::new(3, 3);
    board.place_tile(TileSpec::new(1, 1))?;
    let before = fingerprint(&board);
    match board.place_tile(TileSpec::new(1, 1)) {
        Ok(_) => println!("  unexpectedly placed"),
        Err(e) => println!("  rejected: {e}"),
    }
    println!("  unchanged: {}", before == fingerprint(&board));

    Ok(())
}
