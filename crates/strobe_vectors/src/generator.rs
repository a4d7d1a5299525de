//! Vector file generation: drive the model, stream records to a sink.

use crate::error::{VectorError, MIN_VECTOR_COUNT};
use crate::record::{VectorRecord, HEADER_LINE};
use crate::stimulus::{directed_prologue, random_stimulus, Stimulus};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;
use strobe_common::{BitWidth, Word};
use strobe_model::CounterModel;

/// Parameters of one generation run.
#[derive(Clone, Copy, Debug)]
pub struct GeneratorConfig {
    /// The counter's bit width.
    pub bit_width: BitWidth,
    /// Total number of vectors to emit, directed cases included.
    pub vector_count: u32,
    /// Seed for the stimulus generator. `None` draws a fresh seed, which
    /// is reported in the [`GenerateSummary`] so the run can be repeated.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            bit_width: BitWidth::new(16).expect("16 is a valid width"),
            vector_count: 100,
            seed: None,
        }
    }
}

/// What a completed generation run produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenerateSummary {
    /// Number of data lines written (equals the configured vector count).
    pub vectors_written: u32,
    /// The seed the stimulus generator actually ran with.
    pub seed: u64,
}

/// Generates test vectors and streams them to `writer`.
///
/// Writes the header comment line, the four directed cases, and
/// `vector_count - 4` randomized cases, one record per line in emission
/// order. Each record's expected output is the model's count immediately
/// before that record's transition, so consecutive records form a causal
/// chain.
///
/// Fails with [`VectorError::InvalidVectorCount`] if `vector_count` cannot
/// hold the directed prologue.
pub fn generate_to_writer<W: Write>(
    config: &GeneratorConfig,
    writer: &mut W,
) -> Result<GenerateSummary, VectorError> {
    if config.vector_count < MIN_VECTOR_COUNT {
        return Err(VectorError::InvalidVectorCount {
            requested: config.vector_count,
        });
    }

    let seed = config.seed.unwrap_or_else(|| rand::thread_rng().gen());
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut model = CounterModel::new(config.bit_width);

    writeln!(writer, "{HEADER_LINE}")?;

    for stimulus in directed_prologue(config.bit_width) {
        write_record(writer, &mut model, stimulus)?;
    }
    for _ in MIN_VECTOR_COUNT..config.vector_count {
        let stimulus = random_stimulus(&mut rng, config.bit_width);
        write_record(writer, &mut model, stimulus)?;
    }
    writer.flush()?;

    Ok(GenerateSummary {
        vectors_written: config.vector_count,
        seed,
    })
}

/// Generates test vectors into a file at `path`.
///
/// The file is created (truncating any existing file) and written
/// incrementally. If generation fails after the file was created, the
/// partial file is removed before the error is returned; no partially
/// written vector file is left behind.
pub fn generate_to_file(
    config: &GeneratorConfig,
    path: &Path,
) -> Result<GenerateSummary, VectorError> {
    if config.vector_count < MIN_VECTOR_COUNT {
        return Err(VectorError::InvalidVectorCount {
            requested: config.vector_count,
        });
    }

    let file = fs::File::create(path)?;
    let mut writer = BufWriter::new(file);
    match generate_to_writer(config, &mut writer) {
        Ok(summary) => Ok(summary),
        Err(err) => {
            drop(writer);
            let _ = fs::remove_file(path);
            Err(err)
        }
    }
}

/// Steps the model with one stimulus and writes the resulting record.
fn write_record<W: Write>(
    writer: &mut W,
    model: &mut CounterModel,
    stimulus: Stimulus,
) -> Result<(), VectorError> {
    let width = model.width();
    let expected = model.step(stimulus.control, stimulus.parallel_in);
    let record = VectorRecord {
        control: stimulus.control,
        parallel_in: Word::new(stimulus.parallel_in, width),
        expected_out: Word::new(expected, width),
    };
    writeln!(writer, "{record}")?;
    Ok(())
}
