// crates/cli/src/presentation.rs
use std::fmt::Write;

use count_text_engine::config::Config;
use count_text_engine::metrics::{MetricSelection, MetricsRecord};
use count_text_engine::options::TotalPolicy;
use count_text_engine::{RunOutcome, SourceReport};
use serde::Serialize;

pub const PROGRAM: &str = "count_text";

/// Escape anything outside printable ASCII as `\x{code:02x}`, so diagnostics
/// stay one line even for control characters in file names.
pub fn hex_escape(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c == ' ' || c.is_ascii_graphic() {
                c.to_string()
            } else {
                format!("\\x{:02x}", c as u32)
            }
        })
        .collect()
}

/// One report row: each selected counter right-aligned to width 3 followed
/// by `sep`, then the display name. `max_line_length` is printed unpadded.
pub fn record_line(select: MetricSelection, record: &MetricsRecord, name: &str, sep: char) -> String {
    let mut row = String::new();
    if select.lines {
        let _ = write!(row, "{:>3}{sep}", record.lines);
    }
    if select.words {
        let _ = write!(row, "{:>3}{sep}", record.words);
    }
    if select.chars {
        let _ = write!(row, "{:>3}{sep}", record.chars);
    }
    if select.bytes {
        let _ = write!(row, "{:>3}{sep}", record.bytes);
    }
    if select.max_line_length {
        let _ = write!(row, "{}{sep}", record.max_line_length);
    }
    row.push_str(name);
    row
}

fn print_diagnostics(reports: &[SourceReport]) {
    for report in reports {
        if let SourceReport::Skipped { name, error } = report {
            eprintln!("{PROGRAM}: {}: {error}", hex_escape(name));
        }
    }
}

/// Render the column report. The bare-stdin record (empty display name) uses
/// a tab separator, named sources a single space.
pub fn print_results(outcome: &RunOutcome, config: &Config) {
    for report in &outcome.reports {
        match report {
            SourceReport::Counted { name, record } => {
                let sep = if name.is_empty() { '\t' } else { ' ' };
                println!("{}", record_line(config.select, record, name, sep));
            }
            SourceReport::Skipped { name, error } => {
                eprintln!("{PROGRAM}: {}: {error}", hex_escape(name));
            }
        }
    }

    if let Some(total) = &outcome.total {
        // The total-only row carries no name; otherwise it is tagged "total".
        let name = if config.total == TotalPolicy::Only {
            ""
        } else {
            "total"
        };
        println!("{}", record_line(config.select, total, name, ' '));
    }
}

#[derive(Serialize)]
struct JsonSource<'a> {
    name: &'a str,
    counts: &'a MetricsRecord,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    sources: Vec<JsonSource<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    total: Option<&'a MetricsRecord>,
}

/// Render the machine-readable report. All five counters are always carried;
/// skipped sources still surface as stderr diagnostics.
pub fn print_json(outcome: &RunOutcome) {
    print_diagnostics(&outcome.reports);

    let sources = outcome
        .reports
        .iter()
        .filter_map(|report| match report {
            SourceReport::Counted { name, record } => Some(JsonSource {
                name,
                counts: record,
            }),
            SourceReport::Skipped { .. } => None,
        })
        .collect();

    let report = JsonReport {
        sources,
        total: outcome.total.as_ref(),
    };
    if let Ok(json) = serde_json::to_string_pretty(&report) {
        println!("{json}");
    }
}
