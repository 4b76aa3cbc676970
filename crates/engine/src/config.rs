// crates/engine/src/config.rs
use std::path::PathBuf;

use crate::metrics::MetricSelection;
use crate::options::TotalPolicy;

/// Resolved configuration consumed by [`crate::run`].
///
/// `paths` and `sources_from` are mutually exclusive; supplying both fails
/// the whole invocation with `ConflictingInputs`.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub select: MetricSelection,
    pub total: TotalPolicy,
    /// Path operands in the order they were supplied; `-` means stdin.
    pub paths: Vec<String>,
    /// NUL-delimited source-list file; `-` reads the list from stdin.
    pub sources_from: Option<PathBuf>,
}
