// src/args.rs
use std::path::PathBuf;

use clap::{Parser, ValueHint};

use crate::{options::OutputFormat, parsers};

#[derive(Parser, Debug)]
#[command(
    name = "blog_rank",
    version,
    about = "ブログコメント集計によるユーザーエンゲージメントランキングツール"
)]
pub struct Args {
    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "text", help_heading = "出力")]
    pub format: OutputFormat,

    /// 上位N件のみ表示
    #[arg(long, value_parser = parsers::parse_positive_usize, default_value = "3", help_heading = "出力")]
    pub top: usize,

    /// 出力先ファイル
    #[arg(long, value_hint = ValueHint::FilePath, help_heading = "出力")]
    pub output: Option<PathBuf>,

    /// users.json のパス（データディレクトリ指定を上書き）
    #[arg(long, value_hint = ValueHint::FilePath, help_heading = "入力")]
    pub users: Option<PathBuf>,

    /// posts.json のパス（データディレクトリ指定を上書き）
    #[arg(long, value_hint = ValueHint::FilePath, help_heading = "入力")]
    pub posts: Option<PathBuf>,

    /// comments.json のパス（データディレクトリ指定を上書き）
    #[arg(long, value_hint = ValueHint::FilePath, help_heading = "入力")]
    pub comments: Option<PathBuf>,

    /// データディレクトリ (users.json / posts.json / comments.json)
    #[arg(value_hint = ValueHint::DirPath, help_heading = "入力")]
    pub path: Option<PathBuf>,
}
