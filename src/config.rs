use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) debug: bool,
    #[serde(default)]
    pub(crate) year: Option<u16>,
    #[serde(default)]
    pub(crate) token_file: Option<PathBuf>,
    #[serde(default)]
    pub(crate) input_dir: Option<PathBuf>,
    #[serde(default)]
    pub(crate) base_url: Option<String>,
}

impl Config {
    /// First config file that parses wins; none found means defaults
    pub(crate) fn load() -> Self {
        for path in Self::get_config_paths() {
            if path.exists()
                && let Ok(content) = fs::read_to_string(&path)
            {
                match toml::from_str::<Config>(&content) {
                    Ok(config) => {
                        eprintln!("Loaded config from {}", path.display());
                        return config;
                    }
                    Err(e) => {
                        eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                    }
                }
            }
        }

        Self::default()
    }

    /// `~/.config/aoc-inputs/config.toml`, the platform config dir, then
    /// `~/.aoc-inputs.toml`
    fn get_config_paths() -> Vec<PathBuf> {
        let home = dirs::home_dir();
        let candidates = [
            home.as_ref()
                .map(|h| h.join(".config").join("aoc-inputs").join("config.toml")),
            dirs::config_dir().map(|d| d.join("aoc-inputs").join("config.toml")),
            home.as_ref().map(|h| h.join(".aoc-inputs.toml")),
        ];

        let mut paths: Vec<PathBuf> = Vec::new();
        for path in candidates.into_iter().flatten() {
            // On Linux the platform dir is usually ~/.config already.
            if !paths.contains(&path) {
                paths.push(path);
            }
        }
        paths
    }
}
