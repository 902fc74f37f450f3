use std::{cmp::Ordering, collections::HashMap};

use blog_rank_shared_kernel::{CommentCount, EngagementScore, PostCount, UserId};

use crate::analytics::aggregate::UserScore;

/// 1件のランキング結果。順位はベクタ内の位置が表す
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedScore {
    pub user_id: UserId,
    pub average: EngagementScore,
    pub comments: CommentCount,
    pub posts: PostCount,
}

/// Ranker sorting user scores and selecting the leading entries.
pub struct Ranker;

impl Ranker {
    /// Top `n` users by average, descending. Requesting more entries than
    /// the population returns the whole population.
    pub fn top_n(scores: &HashMap<UserId, UserScore>, n: usize) -> Vec<RankedScore> {
        let mut ranked: Vec<RankedScore> = scores
            .iter()
            .map(|(user_id, score)| RankedScore {
                user_id: *user_id,
                average: EngagementScore::new(score.average()),
                comments: score.comments,
                posts: score.posts,
            })
            .collect();
        ranked.sort_by(Self::compare);
        ranked.truncate(n);
        ranked
    }

    // Sort primarily by average (desc). For deterministic ordering when
    // averages are equal, sort by user id (asc) to keep results stable
    // across runs and platforms.
    fn compare(a: &RankedScore, b: &RankedScore) -> Ordering {
        b.average.total_cmp(&a.average).then_with(|| a.user_id.cmp(&b.user_id))
    }
}
