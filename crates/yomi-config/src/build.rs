use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const DEFAULT_TERMS_DIR: &str = "data/terms";
pub const DEFAULT_OUTPUT_PATH: &str = "data/dictionary.json";

fn default_pretty() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Directory searched recursively for term files
    pub terms_dir: PathBuf,
    /// Where the compiled dictionary is written
    pub output_path: PathBuf,
    /// Indent the output JSON
    #[serde(default = "default_pretty")]
    pub pretty: bool,
    /// Category labels prepended to every quiz
    pub root_category: Vec<String>,
}

impl BuildConfig {
    pub fn new() -> Self {
        let defaults = Self::default();

        let terms_dir = env::var("YOMI_TERMS_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.terms_dir);

        let output_path = env::var("YOMI_OUTPUT")
            .map(PathBuf::from)
            .unwrap_or(defaults.output_path);

        let pretty = env::var("YOMI_PRETTY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.pretty);

        Self {
            terms_dir,
            output_path,
            pretty,
            root_category: defaults.root_category,
        }
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            terms_dir: PathBuf::from(DEFAULT_TERMS_DIR),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            pretty: default_pretty(),
            root_category: vec![],
        }
    }
}
