//! Initialisation du logging (tracing-subscriber)
//!
//! Le niveau minimum et la sortie console viennent de pmoconfig
//! (`host.logger.min_level`, `host.logger.enable_console`). Le niveau peut
//! être changé à chaud via [`LogHandle`].

use anyhow::{anyhow, Result};
use pmoconfig::Config;
use std::str::FromStr;
use tracing_subscriber::{
    filter::LevelFilter, layer::SubscriberExt, reload, util::SubscriberInitExt, Registry,
};

/// Poignée sur le filtre de niveau installé par [`init_logging`]
#[derive(Clone)]
pub struct LogHandle {
    reload_handle: reload::Handle<LevelFilter, Registry>,
}

impl LogHandle {
    /// Change le niveau minimum (`trace`, `debug`, `info`, `warn`, `error`, `off`)
    pub fn set_level(&self, level: &str) -> Result<()> {
        let filter = parse_level(level)?;
        self.reload_handle
            .reload(filter)
            .map_err(|e| anyhow!("Failed to reload log level filter: {}", e))?;
        tracing::info!(level = %filter, "Log level changed");
        Ok(())
    }

    pub fn level(&self) -> Option<LevelFilter> {
        self.reload_handle.clone_current()
    }
}

pub(crate) fn parse_level(level: &str) -> Result<LevelFilter> {
    LevelFilter::from_str(level.trim()).map_err(|_| anyhow!("Invalid log level '{}'", level))
}

/// Installe le subscriber global à partir de la configuration
pub fn init_logging(config: &Config) -> Result<LogHandle> {
    let level = config
        .get_log_min_level()
        .and_then(|level| parse_level(&level))
        .unwrap_or(LevelFilter::INFO);
    let enable_console = config.get_log_enable_console().unwrap_or(true);

    let (filter, reload_handle) = reload::Layer::new(level);
    let subscriber = Registry::default().with(filter);

    let installed = if enable_console {
        subscriber
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_level(true),
            )
            .try_init()
    } else {
        subscriber.try_init()
    };
    installed.map_err(|e| anyhow!("Failed to install tracing subscriber: {}", e))?;

    Ok(LogHandle { reload_handle })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("TRACE").unwrap(), LevelFilter::TRACE);
        assert_eq!(parse_level(" info ").unwrap(), LevelFilter::INFO);
        assert_eq!(parse_level("off").unwrap(), LevelFilter::OFF);
        assert!(parse_level("loud").is_err());
    }
}
