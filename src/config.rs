// src/config.rs
use std::path::PathBuf;

use anyhow::{Result, ensure};

use crate::{args::Args, options::OutputFormat};

/// Top-level configuration derived from CLI arguments.
#[derive(Debug, Clone)]
pub struct Config {
    pub format: OutputFormat,
    pub top_n: usize,
    pub users_path: PathBuf,
    pub posts_path: PathBuf,
    pub comments_path: PathBuf,
    pub output: Option<PathBuf>,
}

impl TryFrom<Args> for Config {
    type Error = anyhow::Error;

    fn try_from(args: Args) -> Result<Self> {
        let data_dir = args.path.unwrap_or_else(|| PathBuf::from("."));

        // Only the default-resolution path requires the directory itself;
        // explicit per-dataset overrides are checked when they are read.
        let needs_dir = args.users.is_none() || args.posts.is_none() || args.comments.is_none();
        ensure!(
            !needs_dir || data_dir.is_dir(),
            "data directory '{}' not found",
            data_dir.display()
        );

        Ok(Self {
            format: args.format,
            top_n: args.top,
            users_path: args.users.unwrap_or_else(|| data_dir.join("users.json")),
            posts_path: args.posts.unwrap_or_else(|| data_dir.join("posts.json")),
            comments_path: args.comments.unwrap_or_else(|| data_dir.join("comments.json")),
            output: args.output,
        })
    }
}
