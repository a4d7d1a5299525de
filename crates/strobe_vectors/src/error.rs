//! Error types for vector generation and file re-validation.

use std::io;

/// The smallest vector count that fits the four directed cases.
pub const MIN_VECTOR_COUNT: u32 = 4;

/// Errors that can occur while generating or validating vector files.
#[derive(Debug, thiserror::Error)]
pub enum VectorError {
    /// The requested vector count cannot hold the directed prologue.
    #[error("vector count {requested} is too small: at least {MIN_VECTOR_COUNT} vectors are needed for the directed cases")]
    InvalidVectorCount {
        /// The rejected vector count.
        requested: u32,
    },

    /// An I/O error occurred while writing or reading a vector file.
    #[error("vector file I/O error: {0}")]
    Io(#[from] io::Error),

    /// A data line in a vector file did not match the expected format.
    #[error("line {line_no}: {reason}")]
    MalformedLine {
        /// 1-based line number in the file.
        line_no: usize,
        /// Description of the format violation.
        reason: String,
    },

    /// A data line's fields did not match the configured bit width.
    #[error("line {line_no}: field is {found} bits wide, expected {expected}")]
    WidthMismatch {
        /// 1-based line number in the file.
        line_no: usize,
        /// Width of the offending field.
        found: u32,
        /// The configured bit width.
        expected: u32,
    },

    /// A recorded expected output disagrees with the replayed model.
    #[error("line {line_no}: expected output {recorded} does not match replayed model output {replayed}")]
    ExpectedOutMismatch {
        /// 1-based line number in the file.
        line_no: usize,
        /// The value recorded in the file.
        recorded: u64,
        /// The value the model produces at this point in the sequence.
        replayed: u64,
    },
}
