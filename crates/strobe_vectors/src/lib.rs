//! Test vector generation for the counter golden model.
//!
//! This crate drives a [`CounterModel`](strobe_model::CounterModel) through
//! a directed prologue followed by randomized stimuli, streaming each
//! `(control, parallel_in, expected_out)` record to a text sink in the
//! vector file format. It also provides the inverse direction: parsing a
//! vector file back and replaying the model to confirm the recorded
//! outputs.

#![warn(missing_docs)]

pub mod check;
pub mod error;
pub mod generator;
pub mod record;
pub mod stimulus;

pub use check::{check_file, check_lines, CheckReport};
pub use error::VectorError;
pub use generator::{generate_to_file, generate_to_writer, GenerateSummary, GeneratorConfig};
pub use record::{VectorRecord, HEADER_LINE};
pub use stimulus::{directed_prologue, random_stimulus, Stimulus};
