use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BoardError;

/// Edge label. `Blank` never bonds; every other symbol bonds with an equal
/// symbol on the facing edge of an adjacent tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Glue {
    #[default]
    Blank,
    A,
    B,
    C,
    D,
    N,
    E,
    S,
    W,
    X,
    Y,
    Z,
}

/// Per-edge labels in [N, E, S, W] order.
pub type Glues = [Glue; 4];

pub const BLANK_GLUES: Glues = [Glue::Blank; 4];

/// Number of distinct glue values including `Blank`.
pub const GLUE_COUNT: usize = 12;

impl Glue {
    pub const SYMBOLS: [Glue; GLUE_COUNT - 1] = [
        Glue::A,
        Glue::B,
        Glue::C,
        Glue::D,
        Glue::N,
        Glue::E,
        Glue::S,
        Glue::W,
        Glue::X,
        Glue::Y,
        Glue::Z,
    ];

    #[inline]
    pub fn is_blank(self) -> bool {
        self == Glue::Blank
    }

    /// Dense index into strength tables; `Blank` is 0.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Glue::Blank => 0,
            Glue::A => 1,
            Glue::B => 2,
            Glue::C => 3,
            Glue::D => 4,
            Glue::N => 5,
            Glue::E => 6,
            Glue::S => 7,
            Glue::W => 8,
            Glue::X => 9,
            Glue::Y => 10,
            Glue::Z => 11,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Glue::Blank => "none",
            Glue::A => "A",
            Glue::B => "B",
            Glue::C => "C",
            Glue::D => "D",
            Glue::N => "N",
            Glue::E => "E",
            Glue::S => "S",
            Glue::W => "W",
            Glue::X => "X",
            Glue::Y => "Y",
            Glue::Z => "Z",
        }
    }
}

impl FromStr for Glue {
    type Err = BoardError;

    /// Case-insensitive. `""`, `" "`, `"0"` and `"none"` all mean blank.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.is_empty() || t == "0" || t.eq_ignore_ascii_case("none") {
            return Ok(Glue::Blank);
        }
        match t.to_ascii_uppercase().as_str() {
            "A" => Ok(Glue::A),
            "B" => Ok(Glue::B),
            "C" => Ok(Glue::C),
            "D" => Ok(Glue::D),
            "N" => Ok(Glue::N),
            "E" => Ok(Glue::E),
            "S" => Ok(Glue::S),
            "W" => Ok(Glue::W),
            "X" => Ok(Glue::X),
            "Y" => Ok(Glue::Y),
            "Z" => Ok(Glue::Z),
            _ => Err(BoardError::UnknownGlue(s.to_string())),
        }
    }
}

impl TryFrom<String> for Glue {
    type Error = BoardError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Glue> for String {
    fn from(g: Glue) -> Self {
        g.as_str().to_string()
    }
}

impl fmt::Display for Glue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse four labels in [N, E, S, W] order.
pub fn parse_glues<S: AsRef<str>>(labels: &[S; 4]) -> Result<Glues, BoardError> {
    Ok([
        labels[0].as_ref().parse()?,
        labels[1].as_ref().parse()?,
        labels[2].as_ref().parse()?,
        labels[3].as_ref().parse()?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_spellings_normalize() {
        for s in ["", " ", "0", "none", "None", "NONE"] {
            assert_eq!(s.parse::<Glue>().unwrap(), Glue::Blank, "input {s:?}");
        }
    }

    #[test]
    fn symbols_parse_case_insensitively() {
        assert_eq!("a".parse::<Glue>().unwrap(), Glue::A);
        assert_eq!("Z".parse::<Glue>().unwrap(), Glue::Z);
        assert_eq!(
            "q".parse::<Glue>(),
            Err(BoardError::UnknownGlue("q".to_string()))
        );
        assert!("AB".parse::<Glue>().is_err());
    }

    #[test]
    fn indices_are_dense_and_unique() {
        let mut seen = [false; GLUE_COUNT];
        seen[Glue::Blank.index()] = true;
        for g in Glue::SYMBOLS {
            assert!(!seen[g.index()]);
            seen[g.index()] = true;
        }
        assert!(seen.iter().all(|&b| b));
    }

    #[test]
    fn serde_uses_symbol_strings() {
        let json = serde_json::to_string(&[Glue::A, Glue::Blank]).unwrap();
        assert_eq!(json, r#"["A","none"]"#);
        let back: Vec<Glue> = serde_json::from_str(r#"["x"," ","0"]"#).unwrap();
        assert_eq!(back, vec![Glue::X, Glue::Blank, Glue::Blank]);
        assert!(serde_json::from_str::<Glue>(r#""?""#).is_err());
    }
}
