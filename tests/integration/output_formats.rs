use std::fs;

use blog_rank::{app, config::Config, options::OutputFormat};

#[path = "../common/mod.rs"]
mod common;
use common::{TempDir, comment, post, user, write_dataset, write_sample_dataset};

fn config_for(temp: &TempDir, format: OutputFormat, output: &str) -> Config {
    Config {
        format,
        top_n: 3,
        users_path: temp.path().join("users.json"),
        posts_path: temp.path().join("posts.json"),
        comments_path: temp.path().join("comments.json"),
        output: Some(temp.path().join(output)),
    }
}

#[test]
fn text_format_emits_display_lines_in_rank_order() {
    let temp = TempDir::new("text", "blog_rank_formats");
    write_sample_dataset(&temp);

    let config = config_for(&temp, OutputFormat::Text, "result.txt");
    app::run(&config).expect("pipeline succeeds");

    let text = fs::read_to_string(temp.path().join("result.txt")).expect("output exists");
    assert_eq!(text, "Ann - Id: 1, Score: 1.5\nBo - Id: 2, Score: 1.0\n");
}

#[test]
fn csv_format_has_header_and_quoted_names() {
    let temp = TempDir::new("csv", "blog_rank_formats");
    write_sample_dataset(&temp);

    let config = config_for(&temp, OutputFormat::Csv, "result.csv");
    app::run(&config).expect("pipeline succeeds");

    let text = fs::read_to_string(temp.path().join("result.csv")).expect("output exists");
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("rank,id,name,posts,comments,score"));
    assert_eq!(lines.next(), Some("1,1,\"Ann\",2,3,1.5"));
    assert_eq!(lines.next(), Some("2,2,\"Bo\",1,1,1.0"));
}

#[test]
fn tsv_format_uses_tab_separators() {
    let temp = TempDir::new("tsv", "blog_rank_formats");
    write_sample_dataset(&temp);

    let config = config_for(&temp, OutputFormat::Tsv, "result.tsv");
    app::run(&config).expect("pipeline succeeds");

    let text = fs::read_to_string(temp.path().join("result.tsv")).expect("output exists");
    assert!(text.starts_with("rank\tid\tname\tposts\tcomments\tscore\n"));
    assert!(text.contains("1\t1\tAnn\t2\t3\t1.5"));
}

#[test]
fn table_format_ends_with_dataset_summary() {
    let temp = TempDir::new("table", "blog_rank_formats");
    write_sample_dataset(&temp);

    let config = config_for(&temp, OutputFormat::Table, "result.txt");
    app::run(&config).expect("pipeline succeeds");

    let text = fs::read_to_string(temp.path().join("result.txt")).expect("output exists");
    assert!(text.contains("RANK"));
    assert!(text.contains("Ann (Id: 1)"));
    assert!(text.contains("2 users / 3 posts / 4 comments · 2 bloggers scored"));
}

#[test]
fn tie_break_orders_equal_scores_by_ascending_id() {
    let temp = TempDir::new("tie", "blog_rank_formats");
    // Users 5 and 3 both average 2.0; id 3 must come first.
    write_dataset(
        &temp,
        &[user(5, "Eve"), user(3, "Cy")],
        &[post(10, 5), post(11, 3)],
        &[comment(1, 10), comment(2, 10), comment(3, 11), comment(4, 11)],
    );

    let config = config_for(&temp, OutputFormat::Text, "result.txt");
    app::run(&config).expect("pipeline succeeds");

    let text = fs::read_to_string(temp.path().join("result.txt")).expect("output exists");
    assert_eq!(text, "Cy - Id: 3, Score: 2.0\nEve - Id: 5, Score: 2.0\n");
}
