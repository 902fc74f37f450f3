#![allow(clippy::multiple_crate_versions)]

pub mod analytics;
pub mod model;

pub use analytics::{Aggregation, Aggregator, RankedScore, Ranker, UserScore};
pub use model::{Comment, Post, User};
