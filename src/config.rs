use super::core::constants::DEFAULT_MAX_HOPS;
use super::types::RouterConfig;
use anyhow::{anyhow, Context, Result};
use std::path::{Path, PathBuf};
use tracing::Level;

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            working_dir: "working_dir".to_string(),
            pool_file: "pools.json".to_string(),
            max_hops: DEFAULT_MAX_HOPS,
            max_hops_limit: 4,
            listen_address: "127.0.0.1:3000".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl RouterConfig {
    // Helper method to load from a specific path; confy writes the defaults if the file is missing
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let config: Self = confy::load_path(path)
            .with_context(|| format!("Couldn't load config from {}", path.display()))?;
        Ok(config)
    }

    pub fn log_level(&self) -> Result<Level> {
        self.log_level.parse::<Level>().map_err(|_| {
            anyhow!(
                "invalid log_level '{}': expected trace, debug, info, warn or error",
                self.log_level
            )
        })
    }

    pub fn pool_file_path(&self) -> PathBuf {
        Path::new(self.working_dir.as_str()).join(self.pool_file.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_points_at_working_dir_pool_file() {
        let config = RouterConfig::default();
        assert_eq!(config.max_hops, 3);
        assert!(config.max_hops_limit >= config.max_hops);
        assert_eq!(
            config.pool_file_path(),
            Path::new("working_dir").join("pools.json")
        );
    }

    #[test]
    fn log_level_is_parsed_or_rejected() {
        let mut config = RouterConfig::default();
        assert_eq!(config.log_level().unwrap(), Level::INFO);

        config.log_level = "DEBUG".to_string();
        assert_eq!(config.log_level().unwrap(), Level::DEBUG);

        config.log_level = "verbose".to_string();
        let err = config.log_level().unwrap_err();
        assert!(err.to_string().contains("verbose"));
    }

    #[test]
    fn config_file_overrides_defaults() {
        let dir = std::env::temp_dir().join("swap-router-config-tests");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("router_config.toml");
        std::fs::write(
            &path,
            "working_dir = \"data\"\n\
             pool_file = \"pools.csv\"\n\
             max_hops = 2\n\
             max_hops_limit = 3\n\
             listen_address = \"0.0.0.0:8080\"\n\
             log_level = \"debug\"\n",
        )
        .unwrap();

        let config = RouterConfig::load_from(&path).unwrap();
        assert_eq!(config.max_hops, 2);
        assert_eq!(config.pool_file_path(), Path::new("data").join("pools.csv"));
        assert_eq!(config.log_level, "debug");
    }
}
