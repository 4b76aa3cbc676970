// crates/cli/src/args.rs
use std::path::PathBuf;

use clap::{Parser, ValueHint};
use count_text_engine::options::{TotalPolicy, parse_total_policy};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "count_text",
    version = crate::VERSION,
    about = "Print newline, word, and byte counts for each FILE",
    long_about = "Print newline, word, and byte counts for each FILE, and a total line \
                  if more than one FILE is specified. A word is a non-zero-length sequence \
                  of printable characters delimited by white space.\n\n\
                  With no FILE, or when FILE is -, read standard input."
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Print the newline counts
    #[arg(short = 'l', long)]
    pub lines: bool,

    /// Print the word counts
    #[arg(short = 'w', long)]
    pub words: bool,

    /// Print the character counts
    #[arg(short = 'm', long)]
    pub chars: bool,

    /// Print the byte counts
    #[arg(short = 'c', long)]
    pub bytes: bool,

    /// Print the maximum display width
    #[arg(short = 'L', long)]
    pub max_line_length: bool,

    /// Read input from the files specified by NUL-terminated names in file F;
    /// if F is - then read names from standard input
    #[arg(long, value_name = "F", value_hint = ValueHint::FilePath)]
    pub files0_from: Option<PathBuf>,

    /// When to print a line with total counts (auto, always, only, never)
    #[arg(long, value_name = "WHEN", default_value = "auto", value_parser = parse_total_policy)]
    pub total: TotalPolicy,

    /// Emit results as a JSON document instead of the column report
    #[arg(long)]
    pub json: bool,

    /// With no FILE, or when FILE is -, read standard input
    #[arg(value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub paths: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }

    #[test]
    fn total_accepts_the_four_policies() {
        for (when, policy) in [
            ("auto", TotalPolicy::Auto),
            ("always", TotalPolicy::Always),
            ("only", TotalPolicy::Only),
            ("never", TotalPolicy::Never),
        ] {
            let args = Args::parse_from(["count_text", "--total", when]);
            assert_eq!(args.total, policy);
        }
    }

    #[test]
    fn total_rejects_unknown_values() {
        assert!(Args::try_parse_from(["count_text", "--total", "sometimes"]).is_err());
    }
}
