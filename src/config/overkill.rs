use crate::error::Result;
use crate::io::read_json_file;
use crate::reduce::ReduceParams;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct OverkillToolConfig {
    /// Drawing document to reduce.
    pub input: PathBuf,
    #[serde(default)]
    pub reduce: ReduceParams,
    pub output: OverkillOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct OverkillOutputConfig {
    /// Where the reduced drawing is written.
    pub drawing_json: PathBuf,
    /// Optional command summary with the full reduction report.
    #[serde(default)]
    pub report_json: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<OverkillToolConfig> {
    let config: OverkillToolConfig = read_json_file(path)?;
    config.reduce.validate()?;
    Ok(config)
}
