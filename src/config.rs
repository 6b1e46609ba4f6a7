//! Start-up configuration from environment variables.
//!
//! - `JEWEL_SEED`: u64 seed for the board (default: fresh entropy)
//! - `JEWEL_LOG_DIR`: write logs to `<dir>/jewel-shuffle.log` (default: no logging)
//! - `JEWEL_LOG_LEVEL`: default log filter (default: `info`, `RUST_LOG` wins)
//! - `JEWEL_CELL_WIDTH` / `JEWEL_CELL_HEIGHT`: terminal cells per tile (default 2x1, 1 to 8)

use std::path::PathBuf;

use crate::types::MAX_CELL_SIZE;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub seed: Option<u64>,
    pub log_dir: Option<PathBuf>,
    pub log_level: String,
    pub cell_w: u16,
    pub cell_h: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            log_dir: None,
            log_level: "info".to_string(),
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unparseable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let seed = non_empty("JEWEL_SEED").and_then(|s| s.parse().ok());
        let log_dir = non_empty("JEWEL_LOG_DIR").map(PathBuf::from);
        let log_level = non_empty("JEWEL_LOG_LEVEL").unwrap_or(defaults.log_level);
        let cell_w = non_empty("JEWEL_CELL_WIDTH")
            .and_then(|s| s.parse::<u16>().ok())
            .unwrap_or(defaults.cell_w)
            .clamp(1, MAX_CELL_SIZE);
        let cell_h = non_empty("JEWEL_CELL_HEIGHT")
            .and_then(|s| s.parse::<u16>().ok())
            .unwrap_or(defaults.cell_h)
            .clamp(1, MAX_CELL_SIZE);

        Self {
            seed,
            log_dir,
            log_level,
            cell_w,
            cell_h,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::{GameView, Viewport};
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(Config::from_lookup(|_| None), Config::default());
    }

    #[test]
    fn values_are_parsed() {
        let cfg = Config::from_lookup(lookup(&[
            ("JEWEL_SEED", "42"),
            ("JEWEL_LOG_DIR", " /tmp/jewels "),
            ("JEWEL_LOG_LEVEL", "debug"),
            ("JEWEL_CELL_WIDTH", "4"),
            ("JEWEL_CELL_HEIGHT", "2"),
        ]));
        assert_eq!(cfg.seed, Some(42));
        assert_eq!(cfg.log_dir, Some(PathBuf::from("/tmp/jewels")));
        assert_eq!(cfg.log_level, "debug");
        assert_eq!((cfg.cell_w, cfg.cell_h), (4, 2));
    }

    #[test]
    fn bad_values_fall_back() {
        let cfg = Config::from_lookup(lookup(&[
            ("JEWEL_SEED", "not-a-number"),
            ("JEWEL_LOG_DIR", "   "),
            ("JEWEL_CELL_WIDTH", "0"),
            ("JEWEL_CELL_HEIGHT", "-3"),
        ]));
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.log_dir, None);
        assert_eq!((cfg.cell_w, cfg.cell_h), (1, 1));
    }

    #[test]
    fn huge_cell_size_is_capped() {
        let cfg = Config::from_lookup(lookup(&[
            ("JEWEL_CELL_WIDTH", "10000"),
            ("JEWEL_CELL_HEIGHT", "65535"),
        ]));
        assert_eq!((cfg.cell_w, cfg.cell_h), (MAX_CELL_SIZE, MAX_CELL_SIZE));

        let view = GameView::new(cfg.cell_w, cfg.cell_h);
        let geom = view.geometry(Viewport::new(80, 24));
        assert_eq!(geom.cell_w, MAX_CELL_SIZE);
        assert_eq!(geom.origin_x, 8);
        assert_eq!(geom.origin_y, 1);
    }
}
