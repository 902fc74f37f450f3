// src/output.rs
use std::io::Write;

use blog_rank_usecase::dto::{RankedBlogger, RankingOutput};
use serde::Serialize;

use crate::{config::Config, options::OutputFormat};

/// Emit the ranking to the configured output format.
pub fn emit(ranking: &RankingOutput, config: &Config) -> anyhow::Result<()> {
    let mut writer = OutputWriter::create(config)?;
    match config.format {
        OutputFormat::Text => output_text(ranking, &mut writer)?,
        OutputFormat::Table => output_table(ranking, &mut writer)?,
        OutputFormat::Json => output_json(ranking, &mut writer)?,
        OutputFormat::Csv => output_delimited(ranking, ',', &mut writer)?,
        OutputFormat::Tsv => output_delimited(ranking, '\t', &mut writer)?,
    }
    writer.flush()?;
    Ok(())
}

struct OutputWriter(Box<dyn Write>);
impl OutputWriter {
    fn create(config: &Config) -> anyhow::Result<Self> {
        let writer: Box<dyn Write> = if let Some(path) = &config.output {
            Box::new(std::io::BufWriter::new(std::fs::File::create(path)?))
        } else {
            Box::new(std::io::BufWriter::new(std::io::stdout()))
        };
        Ok(Self(writer))
    }
}
impl Write for OutputWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.write(buf)
    }
    fn flush(&mut self) -> std::io::Result<()> {
        self.0.flush()
    }
}

/// The canonical display line: `<name> - Id: <id>, Score: <average>`.
/// The average is rendered to one decimal place.
pub fn display_line(blogger: &RankedBlogger) -> String {
    format!(
        "{} - Id: {}, Score: {:.1}",
        blogger.name,
        blogger.user_id,
        blogger.average.value()
    )
}

fn output_text(ranking: &RankingOutput, out: &mut impl Write) -> anyhow::Result<()> {
    for blogger in &ranking.bloggers {
        writeln!(out, "{}", display_line(blogger))?;
    }
    Ok(())
}

fn output_table(ranking: &RankingOutput, out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(out)?;
    writeln!(out, "  RANK\t SCORE\t POSTS\tCOMMENTS\tUSER")?;
    writeln!(out, "----------------------------------------------")?;
    for blogger in &ranking.bloggers {
        writeln!(
            out,
            "{:>6}\t{:>6.1}\t{:>6}\t{:>8}\t{} (Id: {})",
            blogger.rank,
            blogger.average.value(),
            blogger.posts.value(),
            blogger.comments.value(),
            blogger.name,
            blogger.user_id
        )?;
    }
    writeln!(out, "----------------------------------------------")?;
    let totals = &ranking.totals;
    writeln!(
        out,
        "{} users / {} posts / {} comments · {} bloggers scored",
        totals.users, totals.posts, totals.comments, totals.bloggers
    )?;
    Ok(())
}

fn output_delimited(ranking: &RankingOutput, sep: char, out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(out, "rank{sep}id{sep}name{sep}posts{sep}comments{sep}score")?;
    for blogger in &ranking.bloggers {
        let name = escape_field(&blogger.name, sep);
        writeln!(
            out,
            "{}{sep}{}{sep}{}{sep}{}{sep}{}{sep}{:.1}",
            blogger.rank,
            blogger.user_id,
            name,
            blogger.posts.value(),
            blogger.comments.value(),
            blogger.average.value()
        )?;
    }
    Ok(())
}

fn escape_field(s: &str, sep: char) -> String {
    if sep == ',' {
        let escaped = s.replace('"', "\"\"");
        format!("\"{escaped}\"")
    } else {
        s.to_string()
    }
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    version: &'static str,
    bloggers: Vec<JsonBlogger<'a>>,
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonBlogger<'a> {
    rank: usize,
    id: u64,
    name: &'a str,
    score: f64,
    posts: usize,
    comments: usize,
}

#[derive(Serialize)]
struct JsonSummary {
    users: usize,
    posts: usize,
    comments: usize,
    bloggers: usize,
    orphan_posts: usize,
    orphan_comments: usize,
}

fn output_json(ranking: &RankingOutput, out: &mut impl Write) -> anyhow::Result<()> {
    let output = build_json_output(ranking);
    serde_json::to_writer_pretty(&mut *out, &output)?;
    writeln!(out)?;
    Ok(())
}

fn build_json_output(ranking: &RankingOutput) -> JsonOutput<'_> {
    let bloggers = ranking
        .bloggers
        .iter()
        .map(|b| JsonBlogger {
            rank: b.rank,
            id: b.user_id.value(),
            name: b.name.as_str(),
            score: b.average.value(),
            posts: b.posts.value(),
            comments: b.comments.value(),
        })
        .collect();
    JsonOutput {
        version: crate::VERSION,
        bloggers,
        summary: JsonSummary {
            users: ranking.totals.users,
            posts: ranking.totals.posts,
            comments: ranking.totals.comments,
            bloggers: ranking.totals.bloggers,
            orphan_posts: ranking.orphans.posts,
            orphan_comments: ranking.orphans.comments,
        },
    }
}
