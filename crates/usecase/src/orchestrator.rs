use std::collections::HashMap;

use blog_rank_domain::{
    analytics::{Aggregator, Ranker},
    model::{Comment, Post, User},
};
use blog_rank_ports::provider::{CommentRecord, DataProvider, PostRecord, UserRecord};
use blog_rank_shared_kernel::{ApplicationError, BlogRankError, PostId, Result, UserId};

use crate::dto::{DatasetTotals, OrphanStats, RankedBlogger, RankingOutput};

/// Selection parameters for one ranking run.
#[derive(Debug, Clone, Copy)]
pub struct RankRequest {
    /// Number of leading bloggers to return.
    pub top_n: usize,
}

/// Use case ranking bloggers by average comments per post.
pub struct RankBloggers<'a> {
    provider: &'a dyn DataProvider,
}

impl<'a> RankBloggers<'a> {
    pub fn new(provider: &'a dyn DataProvider) -> Self {
        Self { provider }
    }

    pub fn run(&self, request: &RankRequest) -> Result<RankingOutput> {
        let users = self.load_users()?;
        let posts = self.load_posts()?;
        let comments = self.load_comments()?;

        let aggregation = Aggregator::compute_scores(&users, &posts, &comments);
        let ranked = Ranker::top_n(&aggregation.scores, request.top_n);

        let names: HashMap<UserId, &str> = users.iter().map(|u| (u.id, u.name.as_str())).collect();
        let bloggers = ranked
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| {
                // Ranked ids always come from known users.
                names.get(&entry.user_id).map(|name| RankedBlogger {
                    rank: index + 1,
                    user_id: entry.user_id,
                    name: (*name).to_string(),
                    average: entry.average,
                    posts: entry.posts,
                    comments: entry.comments,
                })
            })
            .collect();

        Ok(RankingOutput {
            bloggers,
            totals: DatasetTotals {
                users: users.len(),
                posts: posts.len(),
                comments: comments.len(),
                bloggers: aggregation.scores.len(),
            },
            orphans: OrphanStats {
                posts: aggregation.orphan_posts,
                comments: aggregation.orphan_comments,
            },
        })
    }

    fn load_users(&self) -> Result<Vec<User>> {
        let records = self.provider.users().map_err(|e| data_load_failed("users", e))?;
        Ok(records.into_iter().map(user_record_to_entity).collect())
    }

    fn load_posts(&self) -> Result<Vec<Post>> {
        let records = self.provider.posts().map_err(|e| data_load_failed("posts", e))?;
        Ok(records.into_iter().map(post_record_to_entity).collect())
    }

    fn load_comments(&self) -> Result<Vec<Comment>> {
        let records = self.provider.comments().map_err(|e| data_load_failed("comments", e))?;
        Ok(records.into_iter().map(comment_record_to_entity).collect())
    }
}

fn data_load_failed(resource: &str, source: BlogRankError) -> BlogRankError {
    ApplicationError::DataLoadFailed {
        resource: resource.to_string(),
        reason: source.to_string(),
        source: Some(Box::new(source)),
    }
    .into()
}

fn user_record_to_entity(record: UserRecord) -> User {
    User { id: UserId::new(record.id), name: record.name }
}

fn post_record_to_entity(record: PostRecord) -> Post {
    Post { id: PostId::new(record.id), user_id: UserId::new(record.user_id) }
}

fn comment_record_to_entity(record: CommentRecord) -> Comment {
    Comment { post_id: PostId::new(record.post_id) }
}
