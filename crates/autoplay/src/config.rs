use crate::BuyPolicy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutoplayConfig {
    /// Base seed; game `i` of a matrix runs with `seed + i`.
    pub seed: u64,
    pub games: u32,
    pub policy: BuyPolicy,
    /// Stop buying once the collection reaches this size.
    pub max_symbols: usize,
}

impl Default for AutoplayConfig {
    fn default() -> Self {
        Self {
            seed: 0x510_7541,
            games: 20,
            policy: BuyPolicy::Random,
            max_symbols: 25,
        }
    }
}
