// crates/engine/src/metrics.rs
use serde::{Deserialize, Serialize};

/// One measurement result for a single source. Immutable once produced.
///
/// `bytes` counts encoded byte length while `chars` counts decoded
/// characters; under multi-byte encodings the two are independent axes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsRecord {
    pub lines: usize,
    pub words: usize,
    pub chars: usize,
    pub bytes: u64,
    pub max_line_length: usize,
}

/// Accumulates per-source records into an aggregate.
///
/// The counters sum; `max_line_length` takes the maximum, it tracks the
/// single longest line seen across all sources.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunningTotal(MetricsRecord);

impl RunningTotal {
    pub fn fold(&mut self, record: &MetricsRecord) {
        self.0.lines += record.lines;
        self.0.words += record.words;
        self.0.chars += record.chars;
        self.0.bytes += record.bytes;
        self.0.max_line_length = self.0.max_line_length.max(record.max_line_length);
    }

    pub fn into_record(self) -> MetricsRecord {
        self.0
    }
}

/// Which counters the caller asked to render, in column order
/// lines, words, chars, bytes, max_line_length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct MetricSelection {
    pub lines: bool,
    pub words: bool,
    pub chars: bool,
    pub bytes: bool,
    pub max_line_length: bool,
}

impl MetricSelection {
    pub const fn is_empty(self) -> bool {
        !(self.lines || self.words || self.chars || self.bytes || self.max_line_length)
    }

    /// With no explicit flags the tool reports lines, words and bytes.
    #[must_use]
    pub const fn or_default(self) -> Self {
        if self.is_empty() {
            Self {
                lines: true,
                words: true,
                chars: false,
                bytes: true,
                max_line_length: false,
            }
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(lines: usize, words: usize, chars: usize, bytes: u64, max: usize) -> MetricsRecord {
        MetricsRecord {
            lines,
            words,
            chars,
            bytes,
            max_line_length: max,
        }
    }

    #[test]
    fn fold_sums_counters_and_maxes_line_length() {
        let mut total = RunningTotal::default();
        total.fold(&record(1, 2, 3, 4, 9));
        total.fold(&record(10, 20, 30, 40, 5));

        let got = total.into_record();
        assert_eq!(got, record(11, 22, 33, 44, 9));
    }

    #[test]
    fn fold_is_order_independent() {
        let records = [record(1, 0, 5, 5, 4), record(0, 3, 7, 9, 12), record(2, 2, 2, 2, 2)];

        let mut forward = RunningTotal::default();
        for r in &records {
            forward.fold(r);
        }
        let mut backward = RunningTotal::default();
        for r in records.iter().rev() {
            backward.fold(r);
        }

        assert_eq!(forward.into_record(), backward.into_record());
    }

    #[test]
    fn empty_selection_defaults_to_lines_words_bytes() {
        let select = MetricSelection::default().or_default();
        assert!(select.lines && select.words && select.bytes);
        assert!(!select.chars && !select.max_line_length);
    }

    #[test]
    fn explicit_selection_is_kept_as_is() {
        let select = MetricSelection {
            chars: true,
            ..MetricSelection::default()
        };
        assert_eq!(select.or_default(), select);
    }
}
