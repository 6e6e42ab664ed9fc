//! A small walk-through of the tree's lifecycle: build a balanced tree from
//! random keys, force it out of balance by appending ascending keys above the
//! random range, then rebalance it.
//!
//! # Examples
//!
//! ```
//! use balanced_bst::demo::{self, DemoConfig};
//!
//! let config = DemoConfig {
//!     seed: Some(7),
//!     ..DemoConfig::default()
//! };
//! let report = demo::run(&config).unwrap();
//!
//! assert!(report.initial.balanced);
//! assert!(!report.unbalanced.balanced);
//! assert!(report.rebalanced.balanced);
//! ```

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::tree::Tree;

/// Settings for [`run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// How many random keys to draw. Duplicates collapse so the tree may end
    /// up with fewer.
    pub count: usize,
    /// Random keys are drawn from `0..key_bound`.
    pub key_bound: u32,
    /// How many ascending keys to insert above the random range, starting at
    /// `key_bound + 1`.
    pub extra: u32,
    /// Seed for the key generator. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            count: 15,
            key_bound: 100,
            extra: 10,
            seed: None,
        }
    }
}

/// Error returned when a [`DemoConfig`] can't be run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// `key_bound` is zero so there is nothing to draw keys from.
    #[error("key bound must be greater than zero")]
    EmptyKeyRange,
    /// The ascending keys would run past `u32::MAX`.
    #[error("{extra} extra keys above {key_bound} overflow u32")]
    KeyOverflow {
        /// The configured key bound.
        key_bound: u32,
        /// The configured number of extra keys.
        extra: u32,
    },
}

impl DemoConfig {
    /// Checks the settings and returns the range of ascending keys to append.
    /// With no extra keys the range is empty.
    pub fn validate(&self) -> Result<std::ops::RangeInclusive<u32>, ConfigError> {
        if self.key_bound == 0 {
            return Err(ConfigError::EmptyKeyRange);
        }
        if self.extra == 0 {
            return Ok(1..=0);
        }
        let last = self
            .key_bound
            .checked_add(self.extra)
            .ok_or(ConfigError::KeyOverflow {
                key_bound: self.key_bound,
                extra: self.extra,
            })?;
        // `last` fit so `key_bound + 1 <= last` does too.
        Ok(self.key_bound + 1..=last)
    }
}

/// The state of the tree at one point of the demo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Whether the tree was height-balanced.
    pub balanced: bool,
    /// The tree's height, `-1` when empty.
    pub height: isize,
    /// The keys in breadth first order.
    pub level_order: Vec<u32>,
}

impl Snapshot {
    fn of(tree: &Tree<u32>) -> Self {
        Self {
            balanced: tree.is_balanced(),
            height: tree.height(),
            level_order: tree.level_order().into_iter().copied().collect(),
        }
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "balanced: {}", self.balanced)?;
        writeln!(f, "height: {}", self.height)?;
        write!(f, "level order:")?;
        for key in &self.level_order {
            write!(f, " {}", key)?;
        }
        Ok(())
    }
}

/// What [`run`] observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoReport {
    /// The random keys that were drawn, in draw order.
    pub keys: Vec<u32>,
    /// Right after building from the random keys.
    pub initial: Snapshot,
    /// After appending the ascending keys.
    pub unbalanced: Snapshot,
    /// After rebalancing.
    pub rebalanced: Snapshot,
}

impl fmt::Display for DemoReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== initial ==\n{}", self.initial)?;
        writeln!(f, "== after appending ascending keys ==\n{}", self.unbalanced)?;
        write!(f, "== after rebalancing ==\n{}", self.rebalanced)
    }
}

/// Runs the demo described in the module docs.
pub fn run(config: &DemoConfig) -> Result<DemoReport, ConfigError> {
    let ascending = config.validate()?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let keys: Vec<u32> = (0..config.count)
        .map(|_| rng.random_range(0..config.key_bound))
        .collect();
    tracing::info!(count = keys.len(), key_bound = config.key_bound, "drew random keys");

    let mut tree = Tree::from_keys(keys.iter().copied());
    let initial = Snapshot::of(&tree);

    for key in ascending {
        tree.insert(key);
    }
    let unbalanced = Snapshot::of(&tree);
    tracing::info!(
        balanced = unbalanced.balanced,
        height = unbalanced.height,
        "appended ascending keys"
    );

    tree.rebalance();
    let rebalanced = Snapshot::of(&tree);

    Ok(DemoReport {
        keys,
        initial,
        unbalanced,
        rebalanced,
    })
}
