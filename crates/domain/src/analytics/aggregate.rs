use std::collections::{HashMap, HashSet};

use blog_rank_shared_kernel::{CommentCount, PostCount, PostId, UserId};

use crate::model::{Comment, Post, User};

/// Accumulated comment/post totals for a single user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserScore {
    pub comments: CommentCount,
    pub posts: PostCount,
}

impl UserScore {
    fn new() -> Self {
        Self { comments: CommentCount::zero(), posts: PostCount::zero() }
    }

    /// Average number of comments per post. The aggregator never stores a
    /// zero-post score, so the denominator is always positive.
    pub fn average(&self) -> f64 {
        self.comments.value() as f64 / self.posts.value() as f64
    }
}

/// Outcome of one aggregation pass over the three datasets.
#[derive(Debug, Clone)]
pub struct Aggregation {
    pub scores: HashMap<UserId, UserScore>,
    /// Posts referencing an unknown user, excluded from every score.
    pub orphan_posts: usize,
    /// Comments referencing an unknown post, ignored for counting.
    pub orphan_comments: usize,
}

/// Aggregator joining comments to posts to users and averaging per user.
pub struct Aggregator;

impl Aggregator {
    pub fn compute_scores(users: &[User], posts: &[Post], comments: &[Comment]) -> Aggregation {
        let known_users: HashSet<UserId> = users.iter().map(|u| u.id).collect();
        let known_posts: HashSet<PostId> = posts.iter().map(|p| p.id).collect();

        let (per_post, orphan_comments) = Self::count_comments(comments, &known_posts);

        let mut scores: HashMap<UserId, UserScore> = HashMap::new();
        let mut orphan_posts = 0;
        for post in posts {
            if !known_users.contains(&post.user_id) {
                orphan_posts += 1;
                continue;
            }
            // A post without comments still widens the denominator.
            let count = per_post.get(&post.id).copied().unwrap_or(0);
            let entry = scores.entry(post.user_id).or_insert_with(UserScore::new);
            entry.comments += CommentCount::new(count);
            entry.posts += PostCount::new(1);
        }

        Aggregation { scores, orphan_posts, orphan_comments }
    }

    fn count_comments(
        comments: &[Comment],
        known_posts: &HashSet<PostId>,
    ) -> (HashMap<PostId, usize>, usize) {
        let mut per_post: HashMap<PostId, usize> = HashMap::new();
        let mut orphans = 0;
        for comment in comments {
            if known_posts.contains(&comment.post_id) {
                *per_post.entry(comment.post_id).or_insert(0) += 1;
            } else {
                orphans += 1;
            }
        }
        (per_post, orphans)
    }
}
