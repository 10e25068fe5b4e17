//! Configuration and routing types for the Postboard client.

use postboard_core::Post;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Public demo API the client talks to unless configured otherwise.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Upper bound on the availability probe.
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_millis(5000);

/// Artificial delay before a fallback-store operation, emulating network latency.
pub const DEFAULT_FALLBACK_LATENCY: Duration = Duration::from_millis(500);

/// Where an operation is routed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// The remote API answered the probe
    Live,
    /// The remote API is unreachable; use the fallback store
    Fallback,
}

impl Mode {
    /// True when calls go to the remote API
    pub fn is_live(&self) -> bool {
        matches!(self, Mode::Live)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Live => f.write_str("live"),
            Mode::Fallback => f.write_str("fallback"),
        }
    }
}

/// When the availability probe runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProbePolicy {
    /// Probe before every operation
    #[default]
    Always,
    /// Reuse the last probe result until `reprobe_interval` has elapsed
    Sticky {
        /// How long a probe result stays valid
        reprobe_interval: Duration,
    },
}

/// Configuration for a resource client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API (e.g., "https://jsonplaceholder.typicode.com")
    pub url: String,
    /// Upper bound on the availability probe
    pub probe_timeout: Duration,
    /// Delay before each fallback-store operation
    pub fallback_latency: Duration,
    /// Optional bound on live requests after a successful probe.
    ///
    /// `None` (the default) leaves dispatch unbounded; only the probe is
    /// timed out.
    pub request_timeout: Option<Duration>,
    /// Probe scheduling
    pub probe_policy: ProbePolicy,
}

impl ClientConfig {
    /// Create a config for the given base URL with default timings.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
            fallback_latency: DEFAULT_FALLBACK_LATENCY,
            request_timeout: None,
            probe_policy: ProbePolicy::Always,
        }
    }

    /// Set the upper bound on the availability probe.
    pub fn with_probe_timeout(mut self, timeout: Duration) -> Self {
        self.probe_timeout = timeout;
        self
    }

    /// Set the delay before each fallback-store operation (zero disables it).
    pub fn with_fallback_latency(mut self, latency: Duration) -> Self {
        self.fallback_latency = latency;
        self
    }

    /// Bound live dispatch requests by `timeout`.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Set when the probe runs.
    pub fn with_probe_policy(mut self, policy: ProbePolicy) -> Self {
        self.probe_policy = policy;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// A post paired with its author's display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostWithAuthor {
    /// The post itself, serialized inline
    #[serde(flatten)]
    pub post: Post,
    /// Author name, or `User {id}` when the author is unknown
    pub author: String,
}
