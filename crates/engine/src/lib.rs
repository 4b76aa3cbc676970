// crates/engine/src/lib.rs
pub mod config;
pub mod error;
pub mod measure;
pub mod metrics;
pub mod options;
pub mod sources;

use crate::config::Config;
use crate::error::{EngineError, Result};
use crate::metrics::{MetricsRecord, RunningTotal};
use crate::options::TotalPolicy;
use crate::sources::SourceDescriptor;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Outcome of one per-source measurement, in supplied order.
#[derive(Debug)]
pub enum SourceReport {
    /// Successful measurement, tagged with its display name.
    Counted { name: String, record: MetricsRecord },
    /// The source was skipped; only a diagnostic is surfaced. A skipped
    /// source contributes nothing to the total.
    Skipped { name: String, error: EngineError },
}

/// Everything a caller needs to render one invocation.
#[derive(Debug, Default)]
pub struct RunOutcome {
    pub reports: Vec<SourceReport>,
    pub total: Option<MetricsRecord>,
}

/// Run the counting pipeline: resolve sources, measure each in order, fold
/// the aggregate and apply the total policy.
///
/// # Errors
///
/// Returns an error only for failures that abort the whole invocation
/// (conflicting inputs, an unreadable source-list file). Per-source failures
/// are reported as [`SourceReport::Skipped`] and processing continues.
pub fn run(config: &Config) -> Result<RunOutcome> {
    let descriptors = sources::resolve(&config.paths, config.sources_from.as_deref())?;

    // With no operands at all the tool reads stdin exactly once and never
    // computes a total, whatever the policy says.
    if descriptors.is_empty() && config.sources_from.is_none() {
        let record = measure::measure_stdin()?;
        let mut reports = Vec::new();
        if config.total != TotalPolicy::Only {
            reports.push(SourceReport::Counted {
                name: String::new(),
                record,
            });
        }
        return Ok(RunOutcome {
            reports,
            total: None,
        });
    }

    let supplied = descriptors.len();
    let mut total = RunningTotal::default();
    let mut reports = Vec::with_capacity(supplied);

    for descriptor in descriptors {
        let name = descriptor.display_name();
        let measured = match descriptor {
            SourceDescriptor::Stdin => measure::measure_stdin(),
            SourceDescriptor::File(path) => measure::measure_file(&path),
            SourceDescriptor::NotFound(_) => Err(EngineError::NotFound),
            SourceDescriptor::Directory(_) => Err(EngineError::IsDirectory),
        };

        match measured {
            Ok(record) => {
                total.fold(&record);
                if config.total != TotalPolicy::Only {
                    reports.push(SourceReport::Counted { name, record });
                }
            }
            Err(error) => reports.push(SourceReport::Skipped { name, error }),
        }
    }

    // Error-classified sources still count toward "more than one" here even
    // though they contributed no metrics.
    let emit_total = match config.total {
        TotalPolicy::Always | TotalPolicy::Only => true,
        TotalPolicy::Auto => supplied > 1,
        TotalPolicy::Never => false,
    };

    Ok(RunOutcome {
        reports,
        total: emit_total.then(|| total.into_record()),
    })
}
