use crate::board::Board;
use crate::engine::tumble::TumbleOutcome;
use crate::error::BoardError;
use crate::types::Direction;

/// Parse a tumble script such as `"NESW"` or `"n e s w"`. Whitespace is
/// ignored; any other non-direction character rejects the whole script.
pub fn parse_script(src: &str) -> Result<Vec<Direction>, BoardError> {
    src.chars()
        .filter(|c| !c.is_whitespace())
        .map(Direction::try_from)
        .collect()
}

/// Totals over a script run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScriptReport {
    pub tumbles: usize,
    pub steps: u64,
    pub shed: usize,
    pub merges: usize,
}

impl ScriptReport {
    fn absorb(&mut self, o: TumbleOutcome) {
        self.tumbles += 1;
        self.steps += u64::from(o.steps);
        self.shed += o.shed;
        self.merges += o.merges;
    }
}

/// Apply `script` in order, `repeat` times over (at least once).
pub fn run_script(board: &mut Board, script: &[Direction], repeat: usize) -> ScriptReport {
    let mut report = ScriptReport::default();
    for _ in 0..repeat.max(1) {
        for &dir in script {
            report.absorb(board.tumble(dir));
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_mixed_case_with_spaces() {
        let dirs = parse_script("n E\ts w\n").unwrap();
        assert_eq!(dirs, vec![Direction::N, Direction::E, Direction::S, Direction::W]);
        assert!(parse_script("").unwrap().is_empty());
    }

    #[test]
    fn rejects_foreign_characters() {
        assert_eq!(parse_script("NEX"), Err(BoardError::InvalidDirection("X".to_string())));
        assert!(parse_script("N,E").is_err());
    }

    #[test]
    fn empty_board_script_makes_no_progress() {
        let mut board = Board::new(5, 5);
        let report = run_script(&mut board, &parse_script("NESW").unwrap(), 3);
        assert_eq!(report.tumbles, 12);
        assert_eq!(report.steps, 0);
    }
}
