// crates/engine/src/measure.rs
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::{EngineError, Result};
use crate::metrics::MetricsRecord;

/// Streaming counter state for one source. O(1) auxiliary state, one forward
/// pass; never needs random access or a second pass.
#[derive(Debug, Default)]
struct Accumulator {
    record: MetricsRecord,
    current_line_length: usize,
    in_word: bool,
}

impl Accumulator {
    fn push(&mut self, c: char) {
        self.record.chars += 1;
        self.record.bytes += c.len_utf8() as u64;

        if c.is_whitespace() {
            if self.in_word {
                self.record.words += 1;
                self.in_word = false;
            }
        } else {
            self.in_word = true;
        }

        if c == '\n' {
            self.record.lines += 1;
            self.record.max_line_length = self.record.max_line_length.max(self.current_line_length);
            self.current_line_length = 0;
        } else {
            // The terminator itself never counts toward the line width.
            self.current_line_length += 1;
        }
    }

    /// Capture a trailing line with no terminator and a trailing word with
    /// no trailing whitespace.
    fn finish(mut self) -> MetricsRecord {
        self.record.max_line_length = self.record.max_line_length.max(self.current_line_length);
        if self.in_word {
            self.record.words += 1;
        }
        self.record
    }
}

/// Count an in-memory string in one pass.
pub fn measure_str(text: &str) -> MetricsRecord {
    let mut acc = Accumulator::default();
    for c in text.chars() {
        acc.push(c);
    }
    acc.finish()
}

/// Read `reader` to exhaustion, counting decoded characters as they stream
/// past.
///
/// Chunks are delimited on `b'\n'`, so multi-byte sequences never straddle a
/// chunk boundary; invalid UTF-8 is decoded lossily.
pub fn measure_reader<R: BufRead>(reader: &mut R) -> io::Result<MetricsRecord> {
    let mut acc = Accumulator::default();
    let mut chunk = Vec::new();

    loop {
        chunk.clear();
        if reader.read_until(b'\n', &mut chunk)? == 0 {
            break;
        }
        for c in String::from_utf8_lossy(&chunk).chars() {
            acc.push(c);
        }
    }

    Ok(acc.finish())
}

/// Measure a regular file.
///
/// The byte count is taken from filesystem metadata rather than re-derived
/// from the decode loop; the metadata size is authoritative for files.
pub fn measure_file(path: &Path) -> Result<MetricsRecord> {
    let meta = std::fs::metadata(path).map_err(EngineError::Read)?;
    let file = File::open(path).map_err(EngineError::Read)?;
    let mut reader = BufReader::new(file);

    let mut record = measure_reader(&mut reader).map_err(EngineError::Read)?;
    record.bytes = meta.len();
    Ok(record)
}

/// Measure standard input. No size metadata exists, so bytes accumulate from
/// encoded character lengths.
pub fn measure_stdin() -> Result<MetricsRecord> {
    let stdin = io::stdin();
    let mut lock = stdin.lock();
    measure_reader(&mut lock).map_err(EngineError::Read)
}
