//! `strobe check` — validate an existing vector file.
//!
//! Parses the file, confirms the line format, and replays the counter
//! golden model along the causal chain to confirm every recorded expected
//! output. A clean file exits 0; a malformed or inconsistent file is
//! reported on stderr and exits 1.

use std::path::Path;

use strobe_common::BitWidth;
use strobe_vectors::{check_file, VectorError};

use crate::project::resolve_project;
use crate::{CheckArgs, GlobalArgs};

/// Runs the `strobe check` command.
///
/// Returns exit code 0 if the file is clean, 1 if it fails validation.
/// I/O failures (missing file, unreadable file) are surfaced as errors.
pub fn run(args: &CheckArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let project = resolve_project(global)?;
    let width = BitWidth::new(args.bits.unwrap_or(project.vectors.bit_width))?;
    let path = Path::new(&args.file);

    if !global.quiet {
        eprintln!("   Checking {} at width {width}", path.display());
    }

    match check_file(path, width) {
        Ok(report) => {
            if !global.quiet {
                eprintln!(
                    "     {} vectors OK ({} comment lines skipped)",
                    report.vectors_checked, report.comments_skipped
                );
            }
            Ok(0)
        }
        Err(VectorError::Io(e)) => Err(Box::new(e)),
        Err(e) => {
            eprintln!("{}: {e}", path.display());
            Ok(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use strobe_vectors::{generate_to_file, GeneratorConfig};

    fn global() -> GlobalArgs {
        GlobalArgs {
            quiet: true,
            verbose: false,
            config: None,
        }
    }

    fn check_args(file: &Path, bits: u32) -> CheckArgs {
        CheckArgs {
            file: file.to_string_lossy().into_owned(),
            bits: Some(bits),
        }
    }

    #[test]
    fn clean_file_exits_zero() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vectors.txt");
        let config = GeneratorConfig {
            bit_width: BitWidth::new(8).unwrap(),
            vector_count: 30,
            seed: Some(1),
        };
        generate_to_file(&config, &path).unwrap();

        let code = run(&check_args(&path, 8), &global()).unwrap();
        assert_eq!(code, 0);
    }

    #[test]
    fn corrupted_file_exits_one() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vectors.txt");
        fs::write(&path, "11 0111 0001\n").unwrap();

        let code = run(&check_args(&path, 4), &global()).unwrap();
        assert_eq!(code, 1);
    }

    #[test]
    fn wrong_width_exits_one() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vectors.txt");
        let config = GeneratorConfig {
            bit_width: BitWidth::new(8).unwrap(),
            vector_count: 10,
            seed: Some(1),
        };
        generate_to_file(&config, &path).unwrap();

        let code = run(&check_args(&path, 16), &global()).unwrap();
        assert_eq!(code, 1);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.txt");
        assert!(run(&check_args(&path, 8), &global()).is_err());
    }
}
