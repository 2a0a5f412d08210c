use serde::{Deserialize, Serialize};

/// Value the excluded field of [`TestConfig`] falls back to.
pub const DEFAULT_VALUE: &str = "default_value";

/// Minimal record: one persisted field and one that never reaches the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestConfig {
    pub name: String,
    #[serde(skip, default = "default_value")]
    pub default_value: String,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            default_value: default_value(),
        }
    }
}

fn default_value() -> String {
    DEFAULT_VALUE.to_string()
}

/// Nested record with defaults on several levels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub service: String,
    pub retries: u32,
    pub verbose: bool,
    pub endpoint: Endpoint,
    pub tags: Vec<String>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            service: "svc".to_string(),
            retries: 3,
            verbose: false,
            endpoint: Endpoint::default(),
            tags: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoint {
    pub host: String,
    pub port: u16,
}

impl Default for Endpoint {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}
