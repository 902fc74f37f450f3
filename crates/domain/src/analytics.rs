pub mod aggregate;
pub mod rank;

pub use aggregate::{Aggregation, Aggregator, UserScore};
pub use rank::{RankedScore, Ranker};
