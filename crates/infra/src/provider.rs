// crates/infra/src/provider.rs
use std::path::{Path, PathBuf};

use blog_rank_ports::provider::{CommentRecord, DataProvider, PostRecord, UserRecord};
use blog_rank_shared_kernel::{ErrorContext, InfrastructureError, Result};
use serde::de::DeserializeOwned;

use crate::persistence::FileReader;

/// File-backed data provider decoding JSONPlaceholder-style datasets.
#[derive(Debug, Clone)]
pub struct JsonDataProvider {
    users_path: PathBuf,
    posts_path: PathBuf,
    comments_path: PathBuf,
}

impl JsonDataProvider {
    pub fn new(
        users_path: impl Into<PathBuf>,
        posts_path: impl Into<PathBuf>,
        comments_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            users_path: users_path.into(),
            posts_path: posts_path.into(),
            comments_path: comments_path.into(),
        }
    }

    /// 規定のファイル名 (users.json / posts.json / comments.json) で
    /// ディレクトリから構築する
    pub fn from_dir(dir: &Path) -> Self {
        Self::new(dir.join("users.json"), dir.join("posts.json"), dir.join("comments.json"))
    }

    fn decode<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
        let reader = FileReader::open_buffered(path)
            .map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source })?;
        let records = serde_json::from_reader(reader).map_err(|e| {
            InfrastructureError::DatasetParse { path: path.to_path_buf(), details: e.to_string() }
        })?;
        Ok(records)
    }
}

impl DataProvider for JsonDataProvider {
    fn users(&self) -> Result<Vec<UserRecord>> {
        Self::decode(&self.users_path)
            .with_context(|| format!("loading users from '{}'", self.users_path.display()))
    }

    fn posts(&self) -> Result<Vec<PostRecord>> {
        Self::decode(&self.posts_path)
            .with_context(|| format!("loading posts from '{}'", self.posts_path.display()))
    }

    fn comments(&self) -> Result<Vec<CommentRecord>> {
        Self::decode(&self.comments_path)
            .with_context(|| format!("loading comments from '{}'", self.comments_path.display()))
    }
}
