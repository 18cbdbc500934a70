//! Runtime configuration, read from the environment.
//!
//! - `SNAKE_HEIGHT` / `SNAKE_WIDTH`: board size in cells (default 20 x 30)
//! - `SNAKE_SEED`: generator seed (default: derived from the clock)
//! - `SNAKE_TICK_MS`: milliseconds per step (default 120)
//! - `SNAKE_LOG_PATH`: write tracing output to this file (unset: no logging)
//!
//! Unparseable values fall back to the defaults. Whether the board is large
//! enough for a game is decided by the core when the game starts.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::{BoardInfo, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, TICK_MS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub board: BoardInfo,
    pub seed: u32,
    pub tick_ms: u32,
    pub log_path: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board: BoardInfo::default(),
            seed: 1,
            tick_ms: TICK_MS,
            log_path: None,
        }
    }
}

impl GameConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes `std::env::var`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let parse_u16 = |key: &str, default: u16| {
            lookup(key)
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(default)
        };

        let height = parse_u16("SNAKE_HEIGHT", DEFAULT_BOARD_HEIGHT);
        let width = parse_u16("SNAKE_WIDTH", DEFAULT_BOARD_WIDTH);

        let seed = lookup("SNAKE_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let tick_ms = lookup("SNAKE_TICK_MS")
            .and_then(|s| s.trim().parse().ok())
            .filter(|&ms: &u32| ms > 0)
            .unwrap_or(TICK_MS);

        let log_path = lookup("SNAKE_LOG_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Self {
            board: BoardInfo::new(height, width),
            seed,
            tick_ms,
            log_path,
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn reads_all_keys() {
        let cfg = GameConfig::from_lookup(lookup(&[
            ("SNAKE_HEIGHT", "12"),
            ("SNAKE_WIDTH", " 16 "),
            ("SNAKE_SEED", "99"),
            ("SNAKE_TICK_MS", "80"),
            ("SNAKE_LOG_PATH", "/tmp/snake.log"),
        ]));
        assert_eq!(
            cfg,
            GameConfig {
                board: BoardInfo::new(12, 16),
                seed: 99,
                tick_ms: 80,
                log_path: Some("/tmp/snake.log".to_string()),
            }
        );
    }

    #[test]
    fn falls_back_on_garbage() {
        let cfg = GameConfig::from_lookup(lookup(&[
            ("SNAKE_HEIGHT", "tall"),
            ("SNAKE_SEED", "7"),
            ("SNAKE_TICK_MS", "0"),
            ("SNAKE_LOG_PATH", "   "),
        ]));
        assert_eq!(cfg.board, BoardInfo::default());
        assert_eq!(cfg.tick_ms, TICK_MS);
        assert_eq!(cfg.log_path, None);
        assert_eq!(cfg.seed, 7);
    }
}
