// Exchange Cost Model

use super::strategy::ExchangeStrategy;
use serde::{Deserialize, Serialize};

/// Steps in one exchange: fill the temporary, overwrite `a`, overwrite `b`
pub const STEPS_PER_EXCHANGE: u32 = 3;

/// Estimated work done by one exchange of two collection-like values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeCost {
    pub strategy: ExchangeStrategy,
    /// Full copies of a value
    pub duplications: u32,
    /// Ownership hand-overs (constant time each)
    pub transfers: u32,
    /// Elements copied across all duplications
    pub elements_duplicated: usize,
}

impl ExchangeCost {
    /// Estimate the cost of exchanging values holding `left_len` and `right_len` elements
    ///
    /// Duplicating copies `a` into the temporary, `b` into `a`, then the
    /// temporary (still `a`'s length) into `b`.
    pub fn estimate(strategy: ExchangeStrategy, left_len: usize, right_len: usize) -> Self {
        match strategy {
            ExchangeStrategy::Duplicating => Self {
                strategy,
                duplications: STEPS_PER_EXCHANGE,
                transfers: 0,
                elements_duplicated: 2 * left_len + right_len,
            },
            ExchangeStrategy::Transferring => Self {
                strategy,
                duplications: 0,
                transfers: STEPS_PER_EXCHANGE,
                elements_duplicated: 0,
            },
        }
    }

    /// True when no element data is copied
    pub fn is_copy_free(&self) -> bool {
        self.elements_duplicated == 0
    }
}
