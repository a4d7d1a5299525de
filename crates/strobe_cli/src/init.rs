//! `strobe init` — project scaffolding command.
//!
//! Creates a new Strobe project directory containing a `strobe.toml` with
//! the default generation settings spelled out.

use std::fs;
use std::path::PathBuf;

/// Runs the `strobe init` command.
///
/// If `name` is `Some`, creates a new subdirectory with that name.
/// Otherwise initializes in the current working directory. Refuses to
/// overwrite an existing `strobe.toml`. Returns exit code 0 on success.
pub fn run(name: Option<String>) -> Result<i32, Box<dyn std::error::Error>> {
    let project_dir = match &name {
        Some(n) => {
            let dir = PathBuf::from(n);
            if dir.exists() {
                return Err(format!("directory '{n}' already exists").into());
            }
            fs::create_dir_all(&dir)?;
            dir
        }
        None => std::env::current_dir()?,
    };

    let project_name = project_dir
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("my_counter");

    let config_path = project_dir.join("strobe.toml");
    if config_path.exists() {
        return Err(format!("'{}' already exists", config_path.display()).into());
    }

    eprintln!("  Creating new Strobe project `{project_name}`");

    fs::write(&config_path, default_config(project_name))?;

    eprintln!("     Created {}", config_path.display());

    Ok(0)
}

/// Renders the default `strobe.toml` contents.
fn default_config(name: &str) -> String {
    format!(
        r#"[project]
name = "{name}"
version = "0.1.0"

[vectors]
bit_width = 16
vector_count = 100
output = "test_vectors.txt"
# seed = 42    # uncomment for reproducible runs
"#
    )
}
