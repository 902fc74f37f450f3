// tests/common/fixtures.rs
//! JSONPlaceholder 形式のデータセットフィクスチャ

use serde_json::{Value, json};

use super::temp::TempDir;

#[allow(dead_code)]
pub fn user(id: u64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "username": format!("user{id}"),
        "email": format!("user{id}@example.com"),
        "address": {
            "street": "Kulas Light",
            "suite": "Apt. 556",
            "city": "Gwenborough",
            "zipcode": "92998-3874"
        },
        "phone": "1-770-736-8031",
        "website": "example.org",
        "company": {
            "name": "Romaguera-Crona",
            "catchPhrase": "Multi-layered client-server neural-net",
            "bs": "harness real-time e-markets"
        }
    })
}

#[allow(dead_code)]
pub fn post(id: u64, user_id: u64) -> Value {
    json!({
        "userId": user_id,
        "id": id,
        "title": format!("post {id}"),
        "body": "lorem ipsum"
    })
}

#[allow(dead_code)]
pub fn comment(id: u64, post_id: u64) -> Value {
    json!({
        "postId": post_id,
        "id": id,
        "name": format!("comment {id}"),
        "email": "commenter@example.com",
        "body": "lorem ipsum"
    })
}

#[allow(dead_code)]
pub fn write_dataset(dir: &TempDir, users: &[Value], posts: &[Value], comments: &[Value]) {
    dir.write_file("users.json", &Value::Array(users.to_vec()).to_string());
    dir.write_file("posts.json", &Value::Array(posts.to_vec()).to_string());
    dir.write_file("comments.json", &Value::Array(comments.to_vec()).to_string());
}

/// Ann averages (2 + 1) / 2 = 1.5; Bo averages 1 / 1 = 1.0.
#[allow(dead_code)]
pub fn write_sample_dataset(dir: &TempDir) {
    write_dataset(
        dir,
        &[user(1, "Ann"), user(2, "Bo")],
        &[post(10, 1), post(11, 1), post(12, 2)],
        &[comment(1, 10), comment(2, 10), comment(3, 11), comment(4, 12)],
    );
}
