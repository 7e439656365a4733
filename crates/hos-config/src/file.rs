use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use crate::hos::{HosConfig, HosSection};
use crate::logging::LoggingConfig;
use crate::validate;

// ---------------------------------------------------------------------------
// Raw TOML structure (intermediate representation)
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct HosFileConfigRaw {
    hos: HosSection,
    logging: LoggingConfig,
}

// ---------------------------------------------------------------------------
// HosFileConfig (resolved, validated)
// ---------------------------------------------------------------------------

/// Contents of an `hos.toml` file.
#[derive(Debug, Clone, Default)]
pub struct HosFileConfig {
    pub hos: HosConfig,
    pub logging: LoggingConfig,
}

impl HosFileConfig {
    /// Read and parse an `hos.toml` file.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", path.as_ref().display()))?;
        content
            .parse()
            .map_err(|e| anyhow::anyhow!("{}: {e}", path.as_ref().display()))
    }
}

impl FromStr for HosFileConfig {
    type Err = anyhow::Error;

    fn from_str(toml_str: &str) -> anyhow::Result<Self> {
        let raw: HosFileConfigRaw = toml::from_str(toml_str)?;
        let hos = raw.hos.resolve()?;
        validate::validate_hos(&hos)?;

        if !validate::is_valid_level(&raw.logging.level) {
            anyhow::bail!("logging.level: unknown level {:?}", raw.logging.level);
        }
        for (module, level) in &raw.logging.modules {
            if !validate::is_valid_level(level) {
                anyhow::bail!("logging.modules.{module}: unknown level {level:?}");
            }
        }

        Ok(HosFileConfig {
            hos,
            logging: raw.logging,
        })
    }
}
