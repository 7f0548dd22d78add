use serde::{Deserialize, Serialize};

use crate::glue::{Glue, GLUE_COUNT};

/// Bond strength per glue symbol. `Blank` is pinned to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GlueStrengths([u32; GLUE_COUNT]);

impl Default for GlueStrengths {
    fn default() -> Self {
        // Reference rule-set: every symbol bonds with strength 1.
        let mut table = [1u32; GLUE_COUNT];
        table[Glue::Blank.index()] = 0;
        Self(table)
    }
}

impl GlueStrengths {
    #[inline]
    pub fn uniform(strength: u32) -> Self {
        let mut table = [strength; GLUE_COUNT];
        table[Glue::Blank.index()] = 0;
        Self(table)
    }

    #[inline]
    pub fn get(&self, glue: Glue) -> u32 {
        self.0[glue.index()]
    }

    /// Setting a strength on `Blank` is ignored.
    #[inline]
    pub fn set(&mut self, glue: Glue, strength: u32) {
        if !glue.is_blank() {
            self.0[glue.index()] = strength;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    /// Bonding threshold: clusters merge when matched glue strength reaches it.
    pub temperature: u32,
    /// Shed tiles that end a tumble on the outer ring of the board.
    pub factory_mode: bool,
    pub strengths: GlueStrengths,
}

impl Default for Rules {
    fn default() -> Self {
        Self::reference()
    }
}

impl Rules {
    #[inline]
    pub fn new(temperature: u32, factory_mode: bool) -> Self {
        Self {
            temperature,
            factory_mode,
            strengths: GlueStrengths::default(),
        }
    }

    #[inline]
    pub fn reference() -> Self {
        Self::new(1, false)
    }

    #[inline]
    pub fn factory() -> Self {
        Self::new(1, true)
    }

    #[inline]
    pub fn with_strength(mut self, glue: Glue, strength: u32) -> Self {
        self.strengths.set(glue, strength);
        self
    }

    #[inline]
    pub fn strength(&self, glue: Glue) -> u32 {
        self.strengths.get(glue)
    }
}
