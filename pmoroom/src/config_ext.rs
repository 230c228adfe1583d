//! Extension de pmoconfig pour les rooms

use crate::events::DEFAULT_EVENT_CAPACITY;
use crate::player::DEFAULT_POLL_INTERVAL;
use anyhow::Result;
use pmoconfig::Config;
use serde_yaml::{Number, Value};
use std::time::Duration;

const POLL_INTERVAL_PATH: &[&str] = &["rooms", "player", "poll_interval_ms"];
const EVENT_CAPACITY_PATH: &[&str] = &["rooms", "events", "capacity"];

/// Trait d'extension pour pmoconfig::Config
///
/// Les getters persistent la valeur par défaut quand la clé est absente ou
/// invalide.
pub trait RoomConfigExt {
    /// Intervalle entre deux consultations de la file par un player
    fn get_player_poll_interval(&self) -> Result<Duration>;

    fn set_player_poll_interval(&self, interval: Duration) -> Result<()>;

    /// Capacité du canal d'évènements de chaque room
    fn get_room_event_capacity(&self) -> Result<usize>;

    fn set_room_event_capacity(&self, capacity: usize) -> Result<()>;
}

impl RoomConfigExt for Config {
    fn get_player_poll_interval(&self) -> Result<Duration> {
        match self.get_value(POLL_INTERVAL_PATH) {
            Ok(Value::Number(n)) if n.as_u64().is_some_and(|ms| ms > 0) => {
                Ok(Duration::from_millis(n.as_u64().unwrap_or_default()))
            }
            _ => {
                self.set_player_poll_interval(DEFAULT_POLL_INTERVAL)?;
                Ok(DEFAULT_POLL_INTERVAL)
            }
        }
    }

    fn set_player_poll_interval(&self, interval: Duration) -> Result<()> {
        let ms = u64::try_from(interval.as_millis()).unwrap_or(u64::MAX);
        self.set_value(POLL_INTERVAL_PATH, Value::Number(Number::from(ms)))
    }

    fn get_room_event_capacity(&self) -> Result<usize> {
        match self.get_value(EVENT_CAPACITY_PATH) {
            Ok(Value::Number(n)) if n.as_u64().is_some_and(|c| c > 0) => {
                Ok(n.as_u64().unwrap_or_default() as usize)
            }
            _ => {
                self.set_room_event_capacity(DEFAULT_EVENT_CAPACITY)?;
                Ok(DEFAULT_EVENT_CAPACITY)
            }
        }
    }

    fn set_room_event_capacity(&self, capacity: usize) -> Result<()> {
        self.set_value(EVENT_CAPACITY_PATH, Value::Number(Number::from(capacity)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config() -> (tempfile::TempDir, Config) {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_config(dir.path().to_str().unwrap()).unwrap();
        (dir, config)
    }

    #[test]
    fn test_defaults_from_embedded_config() {
        let (_dir, config) = temp_config();
        assert_eq!(config.get_player_poll_interval().unwrap(), DEFAULT_POLL_INTERVAL);
        assert_eq!(config.get_room_event_capacity().unwrap(), DEFAULT_EVENT_CAPACITY);
    }

    #[test]
    fn test_set_and_get() {
        let (_dir, config) = temp_config();
        config
            .set_player_poll_interval(Duration::from_millis(250))
            .unwrap();
        config.set_room_event_capacity(8).unwrap();

        assert_eq!(
            config.get_player_poll_interval().unwrap(),
            Duration::from_millis(250)
        );
        assert_eq!(config.get_room_event_capacity().unwrap(), 8);
    }

    #[test]
    fn test_invalid_value_falls_back_to_default() {
        let (_dir, config) = temp_config();
        config
            .set_value(POLL_INTERVAL_PATH, Value::String("soon".into()))
            .unwrap();
        assert_eq!(config.get_player_poll_interval().unwrap(), DEFAULT_POLL_INTERVAL);
        // la valeur par défaut a été persistée
        assert_eq!(
            config.get_value(POLL_INTERVAL_PATH).unwrap(),
            Value::Number(Number::from(1000u64))
        );
    }
}
