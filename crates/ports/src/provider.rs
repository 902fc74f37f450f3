// crates/ports/src/provider.rs
use blog_rank_shared_kernel::Result;
use serde::{Deserialize, Serialize};

/// DTO representing a user account record supplied by a data provider.
///
/// Carries the full upstream shape; the use case layer keeps only what
/// the ranking needs. Unknown keys in the source are ignored by serde.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: u64,
    pub name: String,
    pub username: String,
    pub email: String,
    pub address: AddressRecord,
    pub phone: String,
    pub website: String,
    pub company: CompanyRecord,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressRecord {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyRecord {
    pub name: String,
    pub catch_phrase: String,
    pub bs: String,
}

/// DTO representing a blog post record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRecord {
    pub user_id: u64,
    pub id: u64,
    pub title: String,
    pub body: String,
}

/// DTO representing a comment record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentRecord {
    pub post_id: u64,
    pub id: u64,
    pub name: String,
    pub email: String,
    pub body: String,
}

/// Port supplying the three decoded record sequences.
///
/// Decode validation is the provider's concern; implementations hand the
/// core fully typed records or an error, never partial data.
pub trait DataProvider: Send + Sync {
    fn users(&self) -> Result<Vec<UserRecord>>;
    fn posts(&self) -> Result<Vec<PostRecord>>;
    fn comments(&self) -> Result<Vec<CommentRecord>>;
}
