use blog_rank_shared_kernel::{CommentCount, EngagementScore, PostCount, UserId};

/// 1件のランキング行。`rank` は1始まり
#[derive(Debug, Clone, PartialEq)]
pub struct RankedBlogger {
    pub rank: usize,
    pub user_id: UserId,
    pub name: String,
    pub average: EngagementScore,
    pub posts: PostCount,
    pub comments: CommentCount,
}

/// Dataset-wide totals observed while ranking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DatasetTotals {
    pub users: usize,
    pub posts: usize,
    pub comments: usize,
    /// Users owning at least one valid post (the scoreable population).
    pub bloggers: usize,
}

/// Records excluded by the fail-soft orphan policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrphanStats {
    pub posts: usize,
    pub comments: usize,
}

/// Output of the ranking use case.
#[derive(Debug, Clone)]
pub struct RankingOutput {
    pub bloggers: Vec<RankedBlogger>,
    pub totals: DatasetTotals,
    pub orphans: OrphanStats,
}
