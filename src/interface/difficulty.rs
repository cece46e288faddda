//! Search-depth configuration and difficulty presets.

use std::fmt;

pub const MIN_SEARCH_DEPTH: u8 = 1;
pub const MAX_SEARCH_DEPTH: u8 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub depth: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: Difficulty::default().depth(),
        }
    }
}

impl SearchConfig {
    /// Configuration with `depth` clamped to the supported range.
    pub fn clamped(depth: u8) -> Self {
        Self {
            depth: clamp_depth(depth),
        }
    }

    #[inline]
    pub fn difficulty(self) -> Difficulty {
        Difficulty::from_depth(self.depth)
    }
}

#[inline]
pub fn clamp_depth(depth: u8) -> u8 {
    depth.clamp(MIN_SEARCH_DEPTH, MAX_SEARCH_DEPTH)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
    Custom(u8),
}

impl Difficulty {
    /// Preset for a depth; depths outside the presets are clamped and
    /// reported as `Custom`.
    pub fn from_depth(depth: u8) -> Self {
        match clamp_depth(depth) {
            1 => Difficulty::Easy,
            3 => Difficulty::Medium,
            5 => Difficulty::Hard,
            other => Difficulty::Custom(other),
        }
    }

    pub fn depth(self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 3,
            Difficulty::Hard => 5,
            Difficulty::Custom(depth) => clamp_depth(depth),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Custom(_) => "Custom",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (search depth {})", self.name(), self.depth())
    }
}
