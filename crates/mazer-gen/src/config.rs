//! Generation settings.

use std::ops::RangeInclusive;

use mazer_core::MAX_COST;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::mapgen::MazeGen;
use crate::size::MazeSize;

/// Settings for building a [`MazeGen`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MazeConfig {
    pub size: MazeSize,
    /// Fixed seed for reproducible mazes; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Costs drawn for branch cells of the weighted maze.
    pub branch_costs: RangeInclusive<u8>,
    /// Costs drawn for every cell of the open maze.
    pub open_costs: RangeInclusive<u8>,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            size: MazeSize::Small,
            seed: None,
            branch_costs: 1..=5,
            open_costs: 0..=MAX_COST,
        }
    }
}

impl MazeConfig {
    /// Default settings for the given size.
    pub fn sized(size: MazeSize) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    /// Builder-style seed setter.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// A generator seeded as configured.
    pub fn maze_gen(&self) -> MazeGen<StdRng> {
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        MazeGen::new(rng).with_costs(self.branch_costs.clone(), self.open_costs.clone())
    }
}
