//! Configuration types deserialized from `strobe.toml`.

use serde::Deserialize;

/// The top-level project configuration parsed from `strobe.toml`.
#[derive(Debug, Deserialize)]
pub struct ProjectConfig {
    /// Core project metadata (name, version).
    pub project: ProjectMeta,
    /// Vector generation settings.
    #[serde(default)]
    pub vectors: VectorsConfig,
}

/// Core project metadata required in every `strobe.toml`.
#[derive(Debug, Deserialize)]
pub struct ProjectMeta {
    /// The project name.
    pub name: String,
    /// The project version string.
    #[serde(default)]
    pub version: String,
    /// A brief description of the project.
    #[serde(default)]
    pub description: String,
}

/// Vector generation settings, all defaulted.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct VectorsConfig {
    /// The counter's bit width.
    pub bit_width: u32,
    /// Total number of vectors per run, directed cases included.
    pub vector_count: u32,
    /// Path of the vector file, relative to the project directory.
    pub output: String,
    /// Fixed stimulus seed. Omit for a fresh seed each run.
    pub seed: Option<u64>,
}

impl Default for VectorsConfig {
    fn default() -> Self {
        Self {
            bit_width: 16,
            vector_count: 100,
            output: "test_vectors.txt".to_string(),
            seed: None,
        }
    }
}
