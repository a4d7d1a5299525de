//! Re-validation of existing vector files.
//!
//! The vector file is a boundary contract with the downstream simulation
//! harness, so the generator's inverse lives here too: parse a file back,
//! confirm every line's format, and replay the counter model along the
//! causal chain to confirm every recorded expected output.

use crate::error::VectorError;
use crate::record::VectorRecord;
use std::fs;
use std::path::Path;
use strobe_common::BitWidth;
use strobe_model::CounterModel;

/// Result of a successful vector file check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CheckReport {
    /// Number of data lines validated.
    pub vectors_checked: u32,
    /// Number of comment lines skipped.
    pub comments_skipped: u32,
}

/// Checks a vector file on disk. See [`check_lines`].
pub fn check_file(path: &Path, width: BitWidth) -> Result<CheckReport, VectorError> {
    let content = fs::read_to_string(path)?;
    check_lines(&content, width)
}

/// Checks vector file content for format and model consistency.
///
/// Lines beginning with `//` are skipped, as the format requires of
/// consumers. Every remaining line must parse as a record at `width`, and
/// its expected-output field must equal the output of a fresh
/// [`CounterModel`] replayed over the file's stimuli in order. The first
/// violation is returned as an error with its 1-based line number.
pub fn check_lines(content: &str, width: BitWidth) -> Result<CheckReport, VectorError> {
    let mut model = CounterModel::new(width);
    let mut vectors_checked = 0u32;
    let mut comments_skipped = 0u32;

    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        if line.starts_with("//") {
            comments_skipped += 1;
            continue;
        }
        if line.is_empty() {
            continue;
        }

        let record = VectorRecord::parse_line(line, width, line_no)?;
        let replayed = model.step(record.control, record.parallel_in.value());
        if replayed != record.expected_out.value() {
            return Err(VectorError::ExpectedOutMismatch {
                line_no,
                recorded: record.expected_out.value(),
                replayed,
            });
        }
        vectors_checked += 1;
    }

    Ok(CheckReport {
        vectors_checked,
        comments_skipped,
    })
}
