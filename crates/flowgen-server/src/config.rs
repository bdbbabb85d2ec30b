use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;

const CONFIG_PATH_ENV: &str = "FLOWGEN_SERVER_CONFIG";
const DEFAULT_CONFIG_FILE: &str = "server.toml";

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Allowed CORS origins; empty or `*` allows any origin
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: default_cors_origins(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
struct FileConfig {
    #[serde(default)]
    server: ServerSection,
    #[serde(default)]
    cors: CorsSection,
}

#[derive(Debug, Deserialize)]
struct ServerSection {
    #[serde(default = "default_host")]
    host: String,
    #[serde(default = "default_port")]
    port: u16,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct CorsSection {
    #[serde(default = "default_cors_origins")]
    origins: Vec<String>,
}

impl Default for CorsSection {
    fn default() -> Self {
        Self {
            origins: default_cors_origins(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8001
}

fn default_cors_origins() -> Vec<String> {
    vec!["*".to_string()]
}

impl ServerConfig {
    pub fn load() -> anyhow::Result<Self> {
        let path = env::var(CONFIG_PATH_ENV).ok().or_else(|| {
            Path::new(DEFAULT_CONFIG_FILE)
                .exists()
                .then(|| DEFAULT_CONFIG_FILE.to_string())
        });

        match path {
            Some(path) => Self::from_file(&path),
            None => Ok(Self::from_env()),
        }
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    fn from_file(path: &str) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|err| anyhow::anyhow!("Failed to read config {}: {}", path, err))?;
        let parsed: FileConfig = toml::from_str(&contents)
            .map_err(|err| anyhow::anyhow!("Failed to parse config {}: {}", path, err))?;

        Ok(Self {
            host: parsed.server.host,
            port: parsed.server.port,
            cors_origins: parsed.cors.origins,
        })
    }

    fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let host = lookup("FLOWGEN_SERVER_HOST")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(default_host);
        let port = lookup("FLOWGEN_SERVER_PORT")
            .and_then(|value| value.trim().parse::<u16>().ok())
            .unwrap_or_else(default_port);
        let cors_origins = lookup("FLOWGEN_CORS_ORIGINS")
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .filter(|origins| !origins.is_empty())
            .unwrap_or_else(default_cors_origins);

        Self {
            host,
            port,
            cors_origins,
        }
    }
}
