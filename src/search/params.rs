#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Search depth used when nothing else is configured
pub const DEFAULT_DEPTH: u32 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AiConfig {
    /// Plies searched, counting the AI's own move. Values below 1 are treated as 1.
    pub depth: u32,
}

impl AiConfig {
    #[must_use]
    pub const fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    #[inline]
    #[must_use]
    pub(crate) fn effective_depth(self) -> u32 {
        self.depth.max(1)
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        AiConfig {
            depth: DEFAULT_DEPTH,
        }
    }
}

/// Named presets for the search depth.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    #[must_use]
    pub const fn depth(self) -> u32 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => DEFAULT_DEPTH,
            Difficulty::Hard => 4,
        }
    }
}

impl From<Difficulty> for AiConfig {
    fn from(difficulty: Difficulty) -> Self {
        AiConfig::default().with_depth(difficulty.depth())
    }
}
