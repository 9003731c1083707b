//! Logging set-up for the command line tool.

use std::io::Write;

use anyhow::{Context, Result};
use log::LevelFilter;

/// Resolves the log level: explicit argument first, then `RUST_LOG`, then
/// `info`. Unparseable values are skipped.
pub fn resolve_level(level: Option<&str>) -> LevelFilter {
    level
        .and_then(|l| l.parse::<LevelFilter>().ok())
        .or_else(|| std::env::var("RUST_LOG").ok().and_then(|v| v.parse().ok()))
        .unwrap_or(LevelFilter::Info)
}

/// Installs the global logger. Fails if one is already installed.
pub fn init_logging(level: Option<&str>) -> Result<()> {
    let log_level = resolve_level(level);
    env_logger::Builder::new()
        .filter_level(log_level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {:5}] {}",
                buf.timestamp_seconds(),
                record.level(),
                record.args()
            )
        })
        .try_init()
        .context("Failed to initialize logger")?;
    log::debug!("Logger initialized (level: {log_level})");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_level_wins() {
        assert_eq!(resolve_level(Some("debug")), LevelFilter::Debug);
        assert_eq!(resolve_level(Some("WARN")), LevelFilter::Warn);
        assert_eq!(resolve_level(Some("off")), LevelFilter::Off);
    }

    #[test]
    fn test_fallback_to_env_then_info() {
        let expected = std::env::var("RUST_LOG")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(LevelFilter::Info);
        assert_eq!(resolve_level(None), expected);
        assert_eq!(resolve_level(Some("bogus")), expected);
    }
}
