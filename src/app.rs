// src/app.rs
use anyhow::{Context, Result};
use blog_rank_infra::provider::JsonDataProvider;
use blog_rank_usecase::orchestrator::{RankBloggers, RankRequest};

use crate::{config::Config, output};

pub fn run(config: &Config) -> Result<()> {
    let provider =
        JsonDataProvider::new(&config.users_path, &config.posts_path, &config.comments_path);
    let usecase = RankBloggers::new(&provider);

    let ranking = usecase
        .run(&RankRequest { top_n: config.top_n })
        .context("failed to rank bloggers")?;

    if ranking.orphans.posts > 0 {
        eprintln!(
            "[warn] excluded {} post(s) referencing unknown users",
            ranking.orphans.posts
        );
    }
    if ranking.orphans.comments > 0 {
        eprintln!(
            "[warn] ignored {} comment(s) referencing unknown posts",
            ranking.orphans.comments
        );
    }

    output::emit(&ranking, config).context("failed to emit output")?;
    Ok(())
}
