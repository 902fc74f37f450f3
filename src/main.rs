// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use anyhow::Result;
use blog_rank::{app, args::Args, config::Config};
use clap::Parser;

fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::try_from(args)?;
    app::run(&config)
}
