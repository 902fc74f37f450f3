// crates/shared-kernel/src/value_objects/mod.rs
pub mod counts;
pub mod ids;
pub mod score;

pub use counts::{CommentCount, PostCount};
pub use ids::{PostId, UserId};
pub use score::EngagementScore;
