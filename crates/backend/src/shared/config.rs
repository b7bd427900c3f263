use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "config.toml";

/// Environment variable that overrides `server.address`.
pub const HOST_ADDRESS_ENV: &str = "HOST_ADDRESS";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// `host:port`; a bare `:port` listens on all interfaces.
    pub address: String,
    /// Directory with the built site, served for every non-API path.
    pub site_dir: String,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
address = "0.0.0.0:3000"
site_dir = "dist"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. The working directory (for `cargo run` from the workspace root)
/// 3. Falls back to embedded default config
///
/// `HOST_ADDRESS` from the environment wins over the file.
pub fn load_config() -> anyhow::Result<Config> {
    let config = read_first_config(&config_candidates())?;
    Ok(config.with_host_address(std::env::var(HOST_ADDRESS_ENV).ok()))
}

fn config_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Some(exe_dir) = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf))
    {
        candidates.push(exe_dir.join(CONFIG_FILE));
    }
    if let Ok(cwd) = std::env::current_dir() {
        candidates.push(cwd.join(CONFIG_FILE));
    }
    candidates
}

/// Parse the first existing file among `candidates`, else the embedded default.
pub fn read_first_config(candidates: &[PathBuf]) -> anyhow::Result<Config> {
    match candidates.iter().find(|path| path.is_file()) {
        Some(path) => {
            tracing::info!("Loading config from: {}", path.display());
            let contents = std::fs::read_to_string(path)?;
            toml::from_str(&contents)
                .map_err(|e| anyhow::anyhow!("invalid {}: {}", path.display(), e))
        }
        None => {
            tracing::info!("No {} found, using default embedded configuration", CONFIG_FILE);
            Ok(toml::from_str(DEFAULT_CONFIG)?)
        }
    }
}

impl Config {
    pub fn with_host_address(mut self, host_address: Option<String>) -> Self {
        if let Some(address) = host_address.filter(|a| !a.trim().is_empty()) {
            tracing::info!("{} overrides server address: {}", HOST_ADDRESS_ENV, address);
            self.server.address = address.trim().to_string();
        }
        self
    }
}

/// Parse the configured address into a socket address.
pub fn bind_address(config: &Config) -> anyhow::Result<SocketAddr> {
    let raw = config.server.address.as_str();
    let full = if raw.starts_with(':') {
        format!("0.0.0.0{}", raw)
    } else {
        raw.to_string()
    };

    full.parse()
        .map_err(|e| anyhow::anyhow!("invalid server address '{}': {}", raw, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_config() -> Config {
        toml::from_str(DEFAULT_CONFIG).unwrap()
    }

    #[test]
    fn test_default_config_loads() {
        let config: Result<Config, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.server.address, "0.0.0.0:3000");
        assert_eq!(config.server.site_dir, "dist");
    }

    #[test]
    fn test_first_existing_config_wins() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing").join(CONFIG_FILE);
        let present = dir.path().join(CONFIG_FILE);
        std::fs::write(
            &present,
            "[server]\naddress = \"127.0.0.1:8080\"\nsite_dir = \"site\"\n",
        )
        .unwrap();

        let config = read_first_config(&[missing.clone(), present]).unwrap();
        assert_eq!(config.server.address, "127.0.0.1:8080");
        assert_eq!(config.server.site_dir, "site");

        let config = read_first_config(&[missing]).unwrap();
        assert_eq!(config.server.address, "0.0.0.0:3000");
    }

    #[test]
    fn test_broken_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "[server]\naddress = 3000\n").unwrap();

        assert!(read_first_config(&[path]).is_err());
    }

    #[test]
    fn test_host_address_override() {
        let config = default_config().with_host_address(Some("127.0.0.1:8080".to_string()));
        assert_eq!(config.server.address, "127.0.0.1:8080");

        let config = default_config().with_host_address(Some("  ".to_string()));
        assert_eq!(config.server.address, "0.0.0.0:3000");

        let config = default_config().with_host_address(None);
        assert_eq!(config.server.address, "0.0.0.0:3000");
    }

    #[test]
    fn test_bind_address() {
        let addr = bind_address(&default_config()).unwrap();
        assert_eq!(addr.port(), 3000);

        let config = default_config().with_host_address(Some(":8081".to_string()));
        let addr = bind_address(&config).unwrap();
        assert_eq!(addr, SocketAddr::from(([0, 0, 0, 0], 8081)));

        let config = default_config().with_host_address(Some("localhost-ish".to_string()));
        assert!(bind_address(&config).is_err());
    }
}
