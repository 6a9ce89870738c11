use clap::Parser;

use crate::render::{Analysis, Style, Values};

/// Top-level CLI structure.
#[derive(Parser, Debug)]
#[command(
    name = "textalyze",
    version,
    about = "Character-frequency statistics for text files"
)]
pub struct Cli {
    /// Text files to analyze (use `-` for stdin)
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<String>,

    /// Print a plain table instead of a histogram
    #[arg(long)]
    pub table: bool,

    /// Report raw counts instead of frequencies
    #[arg(long)]
    pub counts: bool,

    /// Count case-sensitively (skip lowercasing)
    #[arg(long)]
    pub keep_case: bool,

    /// Length of the longest bar (default: terminal width minus 20)
    #[arg(long, value_name = "COLUMNS")]
    pub width: Option<usize>,

    /// Decimals shown for values and percentages
    #[arg(long, value_name = "DIGITS")]
    pub precision: Option<usize>,

    /// Character used to draw the bars
    #[arg(long)]
    pub glyph: Option<char>,

    /// Emit timing diagnostics
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    #[must_use]
    pub fn analysis(&self) -> Analysis {
        Analysis {
            style: if self.table {
                Style::Table
            } else {
                Style::Histogram
            },
            values: if self.counts {
                Values::Counts
            } else {
                Values::Frequencies
            },
            keep_case: self.keep_case,
        }
    }
}
