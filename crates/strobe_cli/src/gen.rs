//! `strobe gen` — generate a test vector file.
//!
//! Resolves the generation settings (flags override `strobe.toml`, which
//! overrides built-in defaults), drives the counter golden model, and
//! writes the vector file. Under `--verbose` the resolved stimulus seed is
//! reported so an unseeded run can be repeated exactly.

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use strobe_common::BitWidth;
use strobe_vectors::{generate_to_file, generate_to_writer, GeneratorConfig};

use crate::project::resolve_project;
use crate::{GenArgs, GlobalArgs};

/// Runs the `strobe gen` command.
///
/// Returns exit code 0 on success. A partially written output file is
/// removed before any generation error is surfaced.
pub fn run(args: &GenArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let project = resolve_project(global)?;

    let bit_width = BitWidth::new(args.bits.unwrap_or(project.vectors.bit_width))?;
    let vector_count = args.count.unwrap_or(project.vectors.vector_count);
    let seed = args.seed.or(project.vectors.seed);

    let config = GeneratorConfig {
        bit_width,
        vector_count,
        seed,
    };

    if args.stdout {
        let stdout = io::stdout();
        let mut writer = BufWriter::new(stdout.lock());
        let summary = generate_to_writer(&config, &mut writer)?;
        writer.flush()?;
        if global.verbose && !global.quiet {
            eprintln!("     Seed: {}", summary.seed);
        }
        return Ok(0);
    }

    let output = match &args.output {
        Some(path) => PathBuf::from(path),
        None => project.root.join(&project.vectors.output),
    };

    if !global.quiet {
        eprintln!("   Generating {vector_count} vectors for a {bit_width}-bit counter");
    }

    let summary = generate_to_file(&config, &output)?;

    if !global.quiet {
        eprintln!(
            "     Wrote {} ({} vectors)",
            output.display(),
            summary.vectors_written
        );
        if global.verbose {
            eprintln!("     Seed: {}", summary.seed);
        }
    }

    Ok(0)
}
