use std::{env, path::PathBuf};

/// Default location of the scraped course list
pub const DEFAULT_INPUT_FILE: &str = "./data/input/courses.json";
/// Output directory for data files
pub const DEFAULT_OUTPUT_DIR: &str = "./data/output";

/// Runtime settings for the `courses` binary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// JSON array of scraped courses (`CATALOG_INPUT`)
    pub input: PathBuf,
    /// Where `courses.json` and `departments.json` are written (`CATALOG_OUTPUT_DIR`)
    pub output_dir: PathBuf,
}

impl Config {
    /// Reads settings from the environment, loading `.env` first if one exists
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let setting = |key: &str, default: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            input: setting("CATALOG_INPUT", DEFAULT_INPUT_FILE).into(),
            output_dir: setting("CATALOG_OUTPUT_DIR", DEFAULT_OUTPUT_DIR).into(),
        }
    }
}
