//! Headless driver configuration.
use std::env;
use std::path::PathBuf;

/// Configuration for one headless battle run.
#[derive(Clone, Debug)]
pub struct HeadlessConfig {
    /// Battle seed; a random one is drawn when absent.
    pub seed: Option<u64>,
    pub content_dir: PathBuf,
    /// Enemy ids from `enemies.ron`, in spawn order.
    pub enemies: Vec<String>,
    /// Upper bound on resolved operations before the run is abandoned.
    pub max_actions: usize,
    /// Print the final report as JSON after the narrative.
    pub report_json: bool,
}

impl Default for HeadlessConfig {
    fn default() -> Self {
        Self {
            seed: None,
            content_dir: PathBuf::from(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/../../battle/content/data"
            )),
            enemies: vec!["glitch".to_string(), "memory_leak".to_string()],
            max_actions: 500,
            report_json: false,
        }
    }
}

impl HeadlessConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `BATTLE_SEED` - Battle seed (default: random)
    /// - `BATTLE_CONTENT_DIR` - Data directory (default: bundled content)
    /// - `BATTLE_ENEMIES` - Comma-separated enemy ids (default: glitch,memory_leak)
    /// - `BATTLE_MAX_ACTIONS` - Operation budget (default: 500)
    /// - `BATTLE_REPORT_JSON` - Print the report as JSON (default: false)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.seed = read_env::<u64>("BATTLE_SEED");

        if let Ok(dir) = env::var("BATTLE_CONTENT_DIR") {
            config.content_dir = PathBuf::from(dir);
        }

        if let Ok(list) = env::var("BATTLE_ENEMIES") {
            let enemies = parse_list(&list);
            if !enemies.is_empty() {
                config.enemies = enemies;
            }
        }

        if let Some(max) = read_env::<usize>("BATTLE_MAX_ACTIONS") {
            config.max_actions = max.max(1);
        }

        if let Some(enable) = read_env_bool("BATTLE_REPORT_JSON") {
            config.report_json = enable;
        }

        config
    }
}

fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn read_env_bool(key: &str) -> Option<bool> {
    match env::var(key).ok()?.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
