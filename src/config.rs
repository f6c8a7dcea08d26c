//! Configuration file loading with environment variable overrides.

use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Font tried first when rendering designs.
pub const DEFAULT_FONT_PATH: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Listener configuration.
    #[serde(default)]
    pub server: ServerConfig,

    /// Artificial latency applied by the mock endpoints.
    #[serde(default)]
    pub latency: LatencyConfig,

    /// Design rendering options.
    #[serde(default)]
    pub render: RenderConfig,
}

/// Listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address.
    pub host: String,
    /// Listen port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "0.0.0.0".to_string(), port: 8080 }
    }
}

/// Artificial latency configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LatencyConfig {
    /// Whether the mock endpoints sleep at all.
    pub enabled: bool,
    /// Multiplier applied to every simulated delay.
    pub scale: f64,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self { enabled: true, scale: 1.0 }
    }
}

/// Design rendering options.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Font file to try before the built-in font. Empty disables it.
    pub font_path: String,
    /// Text size in pixels.
    pub font_size: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { font_path: DEFAULT_FONT_PATH.to_string(), font_size: 24.0 }
    }
}

impl RenderConfig {
    /// The configured font path, if any.
    #[must_use]
    pub fn font_path(&self) -> Option<&Path> {
        (!self.font_path.is_empty()).then(|| Path::new(&self.font_path))
    }
}

impl Config {
    /// Load configuration from the given path, or return defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
        toml::from_str(&contents)
            .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
    }

    /// Bind host, preferring `TSHOP_MOCK_HOST`.
    #[must_use]
    pub fn host(&self) -> String {
        self.host_from(env_var)
    }

    /// Listen port, preferring `TSHOP_MOCK_PORT`.
    ///
    /// # Errors
    ///
    /// Returns an error if the environment variable is not a valid port.
    pub fn port(&self) -> Result<u16, String> {
        self.port_from(env_var)
    }

    /// Whether delays are enabled, honoring `TSHOP_MOCK_NO_DELAY`.
    #[must_use]
    pub fn delays_enabled(&self) -> bool {
        self.delays_enabled_from(env_var)
    }

    fn host_from(&self, env: impl Fn(&str) -> Option<String>) -> String {
        env("TSHOP_MOCK_HOST").unwrap_or_else(|| self.server.host.clone())
    }

    fn port_from(&self, env: impl Fn(&str) -> Option<String>) -> Result<u16, String> {
        match env("TSHOP_MOCK_PORT") {
            Some(v) => v.parse().map_err(|e| format!("Invalid TSHOP_MOCK_PORT '{v}': {e}")),
            None => Ok(self.server.port),
        }
    }

    fn delays_enabled_from(&self, env: impl Fn(&str) -> Option<String>) -> bool {
        let disabled = env("TSHOP_MOCK_NO_DELAY").is_some_and(|v| v == "true" || v == "1");
        self.latency.enabled && !disabled
    }
}

fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Parse a host and port into a socket address.
///
/// # Errors
///
/// Returns an error if `host` is not an IP address.
pub fn socket_addr(host: &str, port: u16) -> Result<SocketAddr, String> {
    let ip: IpAddr = host.parse().map_err(|e| format!("Invalid host '{host}': {e}"))?;
    Ok(SocketAddr::new(ip, port))
}

/// Discover the config file path using the resolution order:
/// 1. Explicit path (from `--config` flag)
/// 2. `TSHOP_MOCK_CONFIG` environment variable
/// 3. `~/.config/tshop-mock/config.toml`
#[must_use]
pub fn discover_config_path(explicit: Option<&str>) -> PathBuf {
    if let Some(p) = explicit {
        return PathBuf::from(p);
    }

    if let Ok(p) = std::env::var("TSHOP_MOCK_CONFIG") {
        return PathBuf::from(p);
    }

    default_config_path()
}

/// Default config path: `~/.config/tshop-mock/config.toml`.
fn default_config_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        PathBuf::from(home).join(".config/tshop-mock/config.toml")
    } else {
        PathBuf::from("tshop-mock.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert!(config.latency.enabled);
        assert!((config.latency.scale - 1.0).abs() < f64::EPSILON);
        assert_eq!(config.render.font_path, DEFAULT_FONT_PATH);
        assert!((config.render.font_size - 24.0).abs() < f32::EPSILON);
    }

    #[test]
    fn load_nonexistent_returns_defaults() {
        let config = Config::load(Path::new("/nonexistent/path/config.toml")).unwrap();
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn load_valid_toml() {
        let dir = std::env::temp_dir().join("tshop_mock_config_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(
            &path,
            r#"
[server]
host = "127.0.0.1"
port = 9090

[latency]
enabled = false
scale = 0.25

[render]
font_path = ""
font_size = 16.0
"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9090);
        assert!(!config.latency.enabled);
        assert!((config.latency.scale - 0.25).abs() < f64::EPSILON);
        assert!(config.render.font_path().is_none());
        assert!((config.render.font_size - 16.0).abs() < f32::EPSILON);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn partial_sections_keep_defaults() {
        let config: Config = toml::from_str("[server]\nport = 3000\n").unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert!(config.latency.enabled);
        assert_eq!(config.render.font_path(), Some(Path::new(DEFAULT_FONT_PATH)));
    }

    #[test]
    fn load_invalid_toml() {
        let dir = std::env::temp_dir().join("tshop_mock_config_bad_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad.toml");
        std::fs::write(&path, "this is not valid toml {{{").unwrap();

        assert!(Config::load(&path).is_err());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn socket_addr_parsing() {
        assert_eq!(socket_addr("127.0.0.1", 8080).unwrap().to_string(), "127.0.0.1:8080");
        assert!(socket_addr("not a host", 8080).is_err());
    }

    fn env<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key: &str| vars.iter().find(|(k, _)| *k == key).map(|(_, v)| (*v).to_string())
    }

    #[test]
    fn env_overrides_host_and_port() {
        let config = Config::default();
        assert_eq!(config.host_from(env(&[])), "0.0.0.0");
        assert_eq!(config.port_from(env(&[])).unwrap(), 8080);

        let vars = [("TSHOP_MOCK_HOST", "127.0.0.1"), ("TSHOP_MOCK_PORT", "9001")];
        assert_eq!(config.host_from(env(&vars)), "127.0.0.1");
        assert_eq!(config.port_from(env(&vars)).unwrap(), 9001);
    }

    #[test]
    fn invalid_env_port_is_an_error() {
        let config = Config::default();
        for bad in ["abc", "70000", "-1", ""] {
            let err = config.port_from(env(&[("TSHOP_MOCK_PORT", bad)])).unwrap_err();
            assert!(err.starts_with(&format!("Invalid TSHOP_MOCK_PORT '{bad}'")), "{err}");
        }
    }

    #[test]
    fn no_delay_accepts_one_and_true() {
        let config = Config::default();
        assert!(config.delays_enabled_from(env(&[])));
        assert!(!config.delays_enabled_from(env(&[("TSHOP_MOCK_NO_DELAY", "1")])));
        assert!(!config.delays_enabled_from(env(&[("TSHOP_MOCK_NO_DELAY", "true")])));
        assert!(config.delays_enabled_from(env(&[("TSHOP_MOCK_NO_DELAY", "yes")])));
        assert!(config.delays_enabled_from(env(&[("TSHOP_MOCK_NO_DELAY", "0")])));
    }

    #[test]
    fn disabled_latency_ignores_env() {
        let config: Config = toml::from_str("[latency]\nenabled = false\n").unwrap();
        assert!(!config.delays_enabled_from(env(&[])));
    }

    #[test]
    fn discover_explicit_path() {
        let path = discover_config_path(Some("/tmp/my-config.toml"));
        assert_eq!(path, PathBuf::from("/tmp/my-config.toml"));
    }
}
