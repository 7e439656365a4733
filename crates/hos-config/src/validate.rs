use crate::hos::HosConfig;

/// Called by [`HosConfig::validate`] and on every file load.
pub(crate) fn validate_hos(config: &HosConfig) -> anyhow::Result<()> {
    if config.cycle_limit_min <= 0 {
        anyhow::bail!(
            "hos.cycle_limit must be > 0, got {} minutes",
            config.cycle_limit_min
        );
    }
    if config.cycle_days == 0 {
        anyhow::bail!("hos.cycle_days must be > 0");
    }
    if config.warning_threshold_min < 0 {
        anyhow::bail!(
            "hos.warning_threshold must be >= 0, got {} minutes",
            config.warning_threshold_min
        );
    }
    Ok(())
}

/// A known `tracing` level name, case-insensitive.
pub(crate) fn is_valid_level(level: &str) -> bool {
    matches!(
        level.to_ascii_lowercase().as_str(),
        "trace" | "debug" | "info" | "warn" | "error" | "off"
    )
}
