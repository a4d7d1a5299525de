//! Project configuration resolution shared by the subcommands.

use std::fs;
use std::path::{Path, PathBuf};

use strobe_config::{load_config, load_config_from_str, VectorsConfig};

use crate::GlobalArgs;

/// The generation settings in effect plus the directory they are rooted
/// in (relative output paths resolve against `root`).
pub struct ResolvedProject {
    /// Vector generation settings from `strobe.toml`, or defaults.
    pub vectors: VectorsConfig,
    /// The project directory.
    pub root: PathBuf,
}

/// Resolves the project configuration for this invocation.
///
/// An explicit `--config` path must exist and parse. Otherwise a
/// `strobe.toml` in the current directory is used if present, and built-in
/// defaults apply when there is none (so `strobe gen` works standalone).
pub fn resolve_project(global: &GlobalArgs) -> Result<ResolvedProject, Box<dyn std::error::Error>> {
    if let Some(config_path) = &global.config {
        let path = Path::new(config_path);
        let content = fs::read_to_string(path)
            .map_err(|e| format!("cannot read '{config_path}': {e}"))?;
        let config = load_config_from_str(&content)?;
        let root = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        return Ok(ResolvedProject {
            vectors: config.vectors,
            root,
        });
    }

    let cwd = std::env::current_dir()?;
    if cwd.join("strobe.toml").is_file() {
        let config = load_config(&cwd)?;
        return Ok(ResolvedProject {
            vectors: config.vectors,
            root: cwd,
        });
    }

    Ok(ResolvedProject {
        vectors: VectorsConfig::default(),
        root: cwd,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn global(config: Option<String>) -> GlobalArgs {
        GlobalArgs {
            quiet: true,
            verbose: false,
            config,
        }
    }

    #[test]
    fn explicit_config_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("strobe.toml");
        fs::write(
            &path,
            "[project]\nname = \"t\"\n\n[vectors]\nbit_width = 8\n",
        )
        .unwrap();

        let resolved =
            resolve_project(&global(Some(path.to_string_lossy().into_owned()))).unwrap();
        assert_eq!(resolved.vectors.bit_width, 8);
        assert_eq!(resolved.root, dir.path());
    }

    #[test]
    fn explicit_config_must_exist() {
        let result = resolve_project(&global(Some("/nonexistent/strobe.toml".into())));
        assert!(result.is_err());
    }

    #[test]
    fn explicit_config_must_validate() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("strobe.toml");
        fs::write(
            &path,
            "[project]\nname = \"t\"\n\n[vectors]\nbit_width = 0\n",
        )
        .unwrap();

        let result = resolve_project(&global(Some(path.to_string_lossy().into_owned())));
        assert!(result.is_err());
    }

    #[test]
    fn missing_config_falls_back_to_defaults() {
        // The test runner's working directory has no strobe.toml.
        let resolved = resolve_project(&global(None)).unwrap();
        assert_eq!(resolved.vectors.bit_width, 16);
        assert_eq!(resolved.vectors.vector_count, 100);
    }
}
