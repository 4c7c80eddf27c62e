//! CLI configuration from `SAJU_*` environment variables and an optional file.
//!
//! Sources, later overriding earlier: the file named by `SAJU_CONFIG`, then the
//! environment (`SAJU_SOLAR_TERMS`, `SAJU_GENDER`, `SAJU_FORMAT`). A `.env` file
//! in the working directory is loaded first. Command-line flags win over both.

use serde::Deserialize;

/// Output format for chart commands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Default, Deserialize)]
pub struct CliConfig {
    /// Path to a JSON solar-term table replacing the embedded one.
    #[serde(default)]
    pub solar_terms: Option<String>,
    /// Default gender when `--gender` is not given.
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub format: Option<OutputFormat>,
}

impl CliConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        if let Ok(path) = std::env::var("SAJU_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c = c.add_source(config::Environment::with_prefix("SAJU"));
        c.build()?.try_deserialize()
    }
}
