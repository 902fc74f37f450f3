use blog_rank_shared_kernel::{PostId, UserId};
use serde::{Deserialize, Serialize};

/// ユーザーアカウント (ランキング表示に必要な属性のみ保持)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
}

impl User {
    pub fn new(id: UserId, name: impl Into<String>) -> Self {
        Self { id, name: name.into() }
    }
}

/// ブログ投稿。`user_id` は投稿者への外部キー
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub user_id: UserId,
}

impl Post {
    pub fn new(id: PostId, user_id: UserId) -> Self {
        Self { id, user_id }
    }
}

/// 投稿へのコメント。集計は `post_id` のみ参照する
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub post_id: PostId,
}

impl Comment {
    pub fn new(post_id: PostId) -> Self {
        Self { post_id }
    }
}
