// crates/shared-kernel/src/value_objects/score.rs
use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// エンゲージメントスコア (1投稿あたりの平均コメント数)
///
/// Scores are ratios of non-negative counts with a positive denominator,
/// so the wrapped value is always finite and `total_cmp` agrees with the
/// numeric order.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EngagementScore(f64);

impl EngagementScore {
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Total-order comparison, usable as a sort key.
    #[inline]
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl From<f64> for EngagementScore {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}
