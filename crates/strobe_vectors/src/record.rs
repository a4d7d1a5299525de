//! One line of a vector file: stimulus plus expected output.

use crate::error::VectorError;
use std::fmt;
use strobe_common::{BitWidth, Word};
use strobe_model::ControlCode;

/// The comment line preceding the data in every vector file.
///
/// Kept byte-identical to the header the downstream simulation harness
/// already skips; `N-1` is literal text, not a substituted width.
pub const HEADER_LINE: &str =
    "// Test vectors: control[1:0] parallel_in[N-1:0] expected_out[N-1:0]";

/// A single test vector: one cycle's stimulus and the registered output
/// the hardware must produce for it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VectorRecord {
    /// The control code driven this cycle.
    pub control: ControlCode,
    /// The parallel input driven this cycle.
    pub parallel_in: Word,
    /// The counter output expected *before* this cycle's transition.
    pub expected_out: Word,
}

impl VectorRecord {
    /// Parses a data line (`<control> <parallel_in> <expected_out>`) at the
    /// given width.
    ///
    /// `line_no` is the 1-based position of the line in its file, used for
    /// error reporting only.
    pub fn parse_line(
        line: &str,
        width: BitWidth,
        line_no: usize,
    ) -> Result<Self, VectorError> {
        let malformed = |reason: String| VectorError::MalformedLine { line_no, reason };

        let mut fields = line.split(' ');
        let control_str = fields.next().unwrap_or("");
        let parallel_str = fields.next().ok_or_else(|| {
            malformed("expected 3 space-separated fields, found 1".into())
        })?;
        let expected_str = fields.next().ok_or_else(|| {
            malformed("expected 3 space-separated fields, found 2".into())
        })?;
        if fields.next().is_some() {
            return Err(malformed(
                "expected 3 space-separated fields, found more".into(),
            ));
        }

        let control = ControlCode::from_binary_str(control_str).ok_or_else(|| {
            malformed(format!("invalid control field '{control_str}'"))
        })?;
        let parallel_in = parse_word(parallel_str, width, line_no)?;
        let expected_out = parse_word(expected_str, width, line_no)?;

        Ok(Self {
            control,
            parallel_in,
            expected_out,
        })
    }
}

/// Parses a binary field and checks it against the configured width.
fn parse_word(s: &str, width: BitWidth, line_no: usize) -> Result<Word, VectorError> {
    let word = Word::from_binary_str(s).ok_or_else(|| VectorError::MalformedLine {
        line_no,
        reason: format!("invalid binary field '{s}'"),
    })?;
    if word.width() != width {
        return Err(VectorError::WidthMismatch {
            line_no,
            found: word.width().get(),
            expected: width.get(),
        });
    }
    Ok(word)
}

impl fmt::Display for VectorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.control, self.parallel_in, self.expected_out)
    }
}
