// crates/cli/src/config.rs
use crate::args::Args;
use count_text_engine::metrics::MetricSelection;

pub use count_text_engine::config::Config;

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let select = MetricSelection {
            lines: args.lines,
            words: args.words,
            chars: args.chars,
            bytes: args.bytes,
            max_line_length: args.max_line_length,
        }
        .or_default();

        Self {
            select,
            total: args.total,
            paths: args.paths,
            sources_from: args.files0_from,
        }
    }
}
