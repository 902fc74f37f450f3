// src/options.rs

/// Output format options for the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Table,
    Csv,
    Tsv,
    Json,
}
