/// CLI configuration
use crate::error::{CliError, Result};
use postboard_client::{ClientConfig, ProbePolicy, DEFAULT_BASE_URL};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default = "default_api")]
    pub api: ApiSettings,

    #[serde(default = "default_probe")]
    pub probe: ProbeSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Bound on live requests; unset means no bound
    #[serde(default)]
    pub request_timeout_ms: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProbeSettings {
    #[serde(default = "default_probe_timeout_ms")]
    pub timeout_ms: u64,

    #[serde(default = "default_fallback_latency_ms")]
    pub fallback_latency_ms: u64,

    /// Reuse a probe result instead of probing before every call
    #[serde(default)]
    pub sticky: bool,

    #[serde(default = "default_reprobe_interval_ms")]
    pub reprobe_interval_ms: u64,
}

impl AppConfig {
    /// Load configuration from file and environment.
    ///
    /// An explicit `path` must exist; otherwise `postboard.toml` in the
    /// working directory is used when present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let config_path = PathBuf::from("postboard.toml");
                if config_path.exists() {
                    settings = settings.add_source(config::File::from(config_path));
                }
            }
        }

        // Override with environment variables (e.g. POSTBOARD_API__BASE_URL)
        settings = settings.add_source(
            config::Environment::with_prefix("POSTBOARD")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings.build()?;
        Ok(config.try_deserialize()?)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let url = self.api.base_url.trim();
        if url.is_empty() {
            return Err(CliError::Config(
                "API base URL is required (set POSTBOARD_API__BASE_URL)".to_string(),
            ));
        }

        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(CliError::Config(format!(
                "API base URL must start with http:// or https://, got {url:?}"
            )));
        }

        if self.probe.timeout_ms == 0 {
            return Err(CliError::Config(
                "Probe timeout must be greater than zero".to_string(),
            ));
        }

        if self.api.request_timeout_ms == Some(0) {
            return Err(CliError::Config(
                "Request timeout must be greater than zero when set".to_string(),
            ));
        }

        if self.probe.sticky && self.probe.reprobe_interval_ms == 0 {
            return Err(CliError::Config(
                "Sticky probing needs a non-zero reprobe interval".to_string(),
            ));
        }

        Ok(())
    }

    pub fn client_config(&self) -> ClientConfig {
        let policy = if self.probe.sticky {
            ProbePolicy::Sticky {
                reprobe_interval: Duration::from_millis(self.probe.reprobe_interval_ms),
            }
        } else {
            ProbePolicy::Always
        };

        let config = ClientConfig::new(self.api.base_url.trim())
            .with_probe_timeout(Duration::from_millis(self.probe.timeout_ms))
            .with_fallback_latency(Duration::from_millis(self.probe.fallback_latency_ms))
            .with_probe_policy(policy);

        match self.api.request_timeout_ms {
            Some(ms) => config.with_request_timeout(Duration::from_millis(ms)),
            None => config,
        }
    }
}

// Default values
fn default_api() -> ApiSettings {
    ApiSettings {
        base_url: default_base_url(),
        request_timeout_ms: None,
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_probe() -> ProbeSettings {
    ProbeSettings {
        timeout_ms: default_probe_timeout_ms(),
        fallback_latency_ms: default_fallback_latency_ms(),
        sticky: false,
        reprobe_interval_ms: default_reprobe_interval_ms(),
    }
}

fn default_probe_timeout_ms() -> u64 {
    5000
}

fn default_fallback_latency_ms() -> u64 {
    500
}

fn default_reprobe_interval_ms() -> u64 {
    30_000
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: default_api(),
            probe: default_probe(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("Failed to create temp file");
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults_match_client_defaults() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());

        let client = config.client_config();
        let expected = ClientConfig::default();
        assert_eq!(client.url, expected.url);
        assert_eq!(client.probe_timeout, expected.probe_timeout);
        assert_eq!(client.fallback_latency, expected.fallback_latency);
        assert_eq!(client.request_timeout, expected.request_timeout);
        assert_eq!(client.probe_policy, ProbePolicy::Always);
    }

    #[test]
    fn test_load_from_file() {
        let file = write_config(
            r#"
[api]
base_url = "http://localhost:3000"

[probe]
timeout_ms = 250
sticky = true
reprobe_interval_ms = 10000
"#,
        );

        let config = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:3000");
        assert_eq!(config.api.request_timeout_ms, None);
        assert_eq!(config.client_config().request_timeout, None);
        assert_eq!(config.probe.timeout_ms, 250);
        assert_eq!(config.probe.fallback_latency_ms, 500);

        assert_eq!(
            config.client_config().probe_policy,
            ProbePolicy::Sticky {
                reprobe_interval: Duration::from_secs(10)
            }
        );
    }

    #[test]
    fn test_request_timeout_is_opt_in() {
        let file = write_config(
            r#"
[api]
request_timeout_ms = 1500
"#,
        );

        let config = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(
            config.client_config().request_timeout,
            Some(Duration::from_millis(1500))
        );
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let result = AppConfig::load(Some(Path::new("/nonexistent/postboard.toml")));
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_bad_url() {
        let mut config = AppConfig::default();
        config.api.base_url = "ftp://example.com".to_string();
        assert!(config.validate().is_err());

        config.api.base_url = "   ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_sticky_without_interval() {
        let mut config = AppConfig::default();
        config.probe.sticky = true;
        config.probe.reprobe_interval_ms = 0;
        assert!(config.validate().is_err());
    }
}
