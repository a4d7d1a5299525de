//! Strobe CLI — golden-model test vector generation for hardware counters.
//!
//! Provides `strobe init` for project scaffolding, `strobe gen` for
//! generating a vector file from the counter golden model, and
//! `strobe check` for re-validating an existing vector file against the
//! model.

#![warn(missing_docs)]

mod check;
mod gen;
mod init;
mod project;

use std::process;

use clap::{Parser, Subcommand};

/// Strobe — golden-model test vectors for synchronous counters.
#[derive(Parser, Debug)]
#[command(name = "strobe", version, about = "Counter test vector generator")]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose output (reports the stimulus seed, etc.).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a custom `strobe.toml` configuration file.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new Strobe project.
    Init {
        /// Project name (creates a subdirectory). If omitted, initializes
        /// in the current directory.
        name: Option<String>,
    },
    /// Generate a test vector file.
    Gen(GenArgs),
    /// Validate an existing test vector file against the golden model.
    Check(CheckArgs),
}

/// Arguments for the `strobe gen` subcommand.
#[derive(Parser, Debug)]
pub struct GenArgs {
    /// Counter bit width (overrides `strobe.toml`).
    #[arg(short, long)]
    pub bits: Option<u32>,

    /// Total number of vectors, directed cases included (overrides
    /// `strobe.toml`).
    #[arg(short = 'n', long)]
    pub count: Option<u32>,

    /// Stimulus seed for reproducible runs (overrides `strobe.toml`).
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output file path (overrides `strobe.toml`).
    #[arg(short, long)]
    pub output: Option<String>,

    /// Write vectors to stdout instead of a file.
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,
}

/// Arguments for the `strobe check` subcommand.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// The vector file to validate.
    pub file: String,

    /// Counter bit width the file was generated at (overrides
    /// `strobe.toml`).
    #[arg(short, long)]
    pub bits: Option<u32>,
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress non-error output.
    pub quiet: bool,
    /// Whether to print verbose information.
    pub verbose: bool,
    /// Optional path to a custom config file.
    pub config: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let global = GlobalArgs {
        quiet: cli.quiet,
        verbose: cli.verbose,
        config: cli.config,
    };

    let result = match cli.command {
        Command::Init { name } => init::run(name),
        Command::Gen(ref args) => gen::run(args, &global),
        Command::Check(ref args) => check::run(args, &global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_gen_defaults() {
        let cli = Cli::parse_from(["strobe", "gen"]);
        match cli.command {
            Command::Gen(args) => {
                assert!(args.bits.is_none());
                assert!(args.count.is_none());
                assert!(args.seed.is_none());
                assert!(args.output.is_none());
                assert!(!args.stdout);
            }
            _ => panic!("expected Gen command"),
        }
    }

    #[test]
    fn parse_gen_with_flags() {
        let cli = Cli::parse_from([
            "strobe", "gen", "--bits", "8", "-n", "250", "--seed", "42", "-o", "out.txt",
        ]);
        match cli.command {
            Command::Gen(args) => {
                assert_eq!(args.bits, Some(8));
                assert_eq!(args.count, Some(250));
                assert_eq!(args.seed, Some(42));
                assert_eq!(args.output.as_deref(), Some("out.txt"));
            }
            _ => panic!("expected Gen command"),
        }
    }

    #[test]
    fn parse_gen_stdout_conflicts_with_output() {
        let result = Cli::try_parse_from(["strobe", "gen", "--stdout", "-o", "out.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn parse_check() {
        let cli = Cli::parse_from(["strobe", "check", "vectors.txt", "--bits", "12"]);
        match cli.command {
            Command::Check(args) => {
                assert_eq!(args.file, "vectors.txt");
                assert_eq!(args.bits, Some(12));
            }
            _ => panic!("expected Check command"),
        }
    }

    #[test]
    fn parse_init_with_name() {
        let cli = Cli::parse_from(["strobe", "init", "my_counter"]);
        match cli.command {
            Command::Init { name } => assert_eq!(name.as_deref(), Some("my_counter")),
            _ => panic!("expected Init command"),
        }
    }

    #[test]
    fn parse_global_flags() {
        let cli = Cli::parse_from(["strobe", "--quiet", "gen"]);
        assert!(cli.quiet);
        let cli = Cli::parse_from(["strobe", "gen", "--verbose"]);
        assert!(cli.verbose);
        let cli = Cli::parse_from(["strobe", "--config", "custom.toml", "gen"]);
        assert_eq!(cli.config.as_deref(), Some("custom.toml"));
    }
}
