use std::path::PathBuf;

use clap::Parser;
use log::{info, LevelFilter};
use tumbletiles::{
    fingerprint, load_rules_json, load_snapshot_json, parse_script, populate_random, rng_for_seed, run_script,
    save_snapshot_json, Board, Pos, RandomFill, Rules,
};

#[derive(Debug, Parser)]
#[command(name = "tumble", about = "Tumble tile self-assembly simulator")]
struct Args {
    /// Snapshot JSON to start from; an empty board is used when omitted
    #[arg(long)]
    input: Option<PathBuf>,

    /// Board width for a fresh board
    #[arg(long, default_value_t = 10)]
    width: u32,

    /// Board height for a fresh board
    #[arg(long, default_value_t = 10)]
    height: u32,

    /// Scatter this many random mobile tiles before running
    #[arg(long, default_value_t = 0)]
    random: usize,

    /// Random fixed tiles to scatter alongside --random
    #[arg(long, default_value_t = 0)]
    fixed: usize,

    /// Probability that a random tile edge carries a glue
    #[arg(long, default_value_t = 0.3)]
    glue_density: f64,

    /// Distinct glue symbols used for random tiles
    #[arg(long, default_value_t = 2)]
    alphabet: usize,

    /// Seed for random placement (deterministic)
    #[arg(long, default_value_t = 0x00C0_FFEEu64)]
    seed: u64,

    /// Rules JSON file; flags below override its fields
    #[arg(long)]
    rules: Option<PathBuf>,

    /// Bonding threshold
    #[arg(long)]
    temperature: Option<u32>,

    /// Shed tiles that reach the outer ring after each tumble
    #[arg(long)]
    factory: bool,

    /// Settle glues right after loading
    #[arg(long)]
    activate: bool,

    /// Resize the board (clipping tiles outside) before running: WIDTHxHEIGHT
    #[arg(long)]
    resize: Option<String>,

    /// Tumble script of N/E/S/W characters
    #[arg(long, default_value = "")]
    script: String,

    /// Times to run the script
    #[arg(long, default_value_t = 1)]
    repeat: usize,

    /// Write the final board as a snapshot
    #[arg(long)]
    output: Option<PathBuf>,

    /// Skip printing the board
    #[arg(long)]
    quiet: bool,

    /// Debug logging (RUST_LOG takes precedence)
    #[arg(long)]
    verbose: bool,
}

fn parse_dims(s: &str) -> Result<(u32, u32), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("Invalid size '{s}', expected WIDTHxHEIGHT"))?;
    let w = w.trim().parse::<u32>().map_err(|e| format!("Invalid width in '{s}': {e}"))?;
    let h = h.trim().parse::<u32>().map_err(|e| format!("Invalid height in '{s}': {e}"))?;
    Ok((w, h))
}

/// One character per cell: '#' fixed, a letter per cluster (cycling), '.' empty.
fn print_board(board: &Board) {
    let mut labels = std::collections::HashMap::new();
    for (i, poly) in board.clusters().iter().enumerate() {
        labels.insert(poly.id(), (b'a' + (i % 26) as u8) as char);
    }
    for y in 0..board.height() as i32 {
        let row: String = (0..board.width() as i32)
            .map(|x| match board.occupant(Pos::new(x, y)) {
                None => '.',
                Some(t) => match t.cluster {
                    None => '#',
                    Some(cid) => labels.get(&cid).copied().unwrap_or('?'),
                },
            })
            .collect();
        println!("{row}");
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let level = if args.verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    env_logger::Builder::new().filter_level(level).parse_default_env().init();

    let mut rules = match &args.rules {
        Some(path) => load_rules_json(path).map_err(|e| format!("Rules load error: {e}"))?,
        None => Rules::default(),
    };
    if let Some(t) = args.temperature {
        rules.temperature = t;
    }
    if args.factory {
        rules.factory_mode = true;
    }

    let script = parse_script(&args.script).map_err(|e| format!("Script parse error: {e}"))?;

    let mut board = match &args.input {
        Some(path) => {
            let snap = load_snapshot_json(path).map_err(|e| format!("Snapshot load error: {e}"))?;
            let (board, report) =
                Board::from_snapshot(&snap, rules, args.activate).map_err(|e| format!("Snapshot load error: {e}"))?;
            info!("loaded {} tiles ({} skipped, {} merges)", report.placed, report.skipped, report.merges);
            if report.skipped > 0 {
                eprintln!("[tumble] Warning: {} snapshot records could not be placed", report.skipped);
            }
            board
        }
        None => Board::try_with_rules(args.height, args.width, rules).map_err(|e| format!("Board error: {e}"))?,
    };

    if let Some(size) = &args.resize {
        let (w, h) = parse_dims(size)?;
        let dropped = board.resize_clipped(w, h)?;
        println!("[tumble] Resized to {w}x{h}, dropped {dropped} tiles");
    }

    if args.random > 0 || args.fixed > 0 {
        let mut rng = rng_for_seed(args.seed);
        let fill = RandomFill {
            tiles: args.random,
            fixed: args.fixed,
            glue_density: args.glue_density,
            alphabet: args.alphabet,
        };
        let placed = populate_random(&mut board, &mut rng, fill);
        println!("[tumble] Placed {placed} random tiles (seed {})", args.seed);
        if args.activate {
            board.activate_glues();
        }
    }

    let report = run_script(&mut board, &script, args.repeat);
    let stats = board.stats();
    println!(
        "[tumble] {} tumbles, {} steps, {} shed, {} merges",
        report.tumbles, report.steps, report.shed, report.merges
    );
    println!(
        "[tumble] Board {}x{}: {} tiles ({} fixed) in {} clusters",
        board.width(),
        board.height(),
        stats.tiles,
        stats.fixed,
        stats.clusters
    );
    println!("[tumble] Fingerprint {:032x}", fingerprint(&board));

    if !args.quiet {
        print_board(&board);
    }

    if let Some(path) = &args.output {
        save_snapshot_json(path, &board.to_snapshot()).map_err(|e| format!("Snapshot save error: {e}"))?;
        println!("[tumble] Saved snapshot to {}", path.display());
    }

    Ok(())
}
