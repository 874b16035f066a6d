//! TOML configuration loading and runtime settings.

use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// On-disk TOML configuration structure.
/// All fields are optional so partial configs work (merge with defaults).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    pub server: Option<ServerConfig>,
    pub database: Option<DatabaseConfig>,
    pub uploads: Option<UploadsConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    pub port: Option<u16>,
    /// Request body limit handed to the framework, in megabytes.
    pub max_upload_mb: Option<usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UploadsConfig {
    /// Directory raw uploads are copied into. Unset disables the copy.
    pub save_dir: Option<String>,
}

/// Platform config directory path: `<config_dir>/pdfstash/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("pdfstash").join("config.toml"))
}

/// Load config by cascading CWD `.pdfstash.toml` over platform config.
/// CWD values override platform values.
pub fn load_config() -> ConfigFile {
    let platform = config_path().and_then(|p| load_from_path(&p));
    let cwd = load_from_path(&PathBuf::from(".pdfstash.toml"));

    match (platform, cwd) {
        (None, None) => ConfigFile::default(),
        (Some(p), None) => p,
        (None, Some(c)) => c,
        (Some(p), Some(c)) => merge(p, c),
    }
}

/// Load a config from a specific path. Returns `None` if the file doesn't
/// exist or can't be parsed.
pub fn load_from_path(path: &PathBuf) -> Option<ConfigFile> {
    let content = std::fs::read_to_string(path).ok()?;
    toml::from_str(&content).ok()
}

/// Merge two configs: `overlay` values take precedence over `base`.
pub fn merge(base: ConfigFile, overlay: ConfigFile) -> ConfigFile {
    ConfigFile {
        server: Some(ServerConfig {
            port: overlay
                .server
                .as_ref()
                .and_then(|s| s.port)
                .or_else(|| base.server.as_ref().and_then(|s| s.port)),
            max_upload_mb: overlay
                .server
                .as_ref()
                .and_then(|s| s.max_upload_mb)
                .or_else(|| base.server.as_ref().and_then(|s| s.max_upload_mb)),
        }),
        database: Some(DatabaseConfig {
            path: overlay
                .database
                .as_ref()
                .and_then(|d| d.path.clone())
                .or_else(|| base.database.as_ref().and_then(|d| d.path.clone())),
        }),
        uploads: Some(UploadsConfig {
            save_dir: overlay
                .uploads
                .as_ref()
                .and_then(|u| u.save_dir.clone())
                .or_else(|| base.uploads.as_ref().and_then(|u| u.save_dir.clone())),
        }),
    }
}

/// Resolved runtime settings: defaults, overlaid by the config file,
/// overlaid by `PDFSTASH_*` environment variables. Built once in `main`
/// and passed into the application state.
#[derive(Debug, Clone)]
pub struct Settings {
    pub port: u16,
    pub max_upload_mb: usize,
    pub db_path: PathBuf,
    /// When set, raw uploads are also written into this directory.
    pub upload_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            port: 5000,
            max_upload_mb: 500,
            db_path: PathBuf::from("pdfstash.db"),
            upload_dir: None,
        }
    }
}

impl Settings {
    /// Resolve settings from a loaded config file plus the environment.
    /// Recognized variables: `PDFSTASH_PORT`, `PDFSTASH_MAX_UPLOAD_MB`,
    /// `PDFSTASH_DB`, `PDFSTASH_UPLOAD_DIR`.
    pub fn resolve(file: &ConfigFile) -> Self {
        let defaults = Settings::default();

        let port = env::var("PDFSTASH_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .or_else(|| file.server.as_ref().and_then(|s| s.port))
            .unwrap_or(defaults.port);

        let max_upload_mb = env::var("PDFSTASH_MAX_UPLOAD_MB")
            .ok()
            .and_then(|v| v.parse().ok())
            .or_else(|| file.server.as_ref().and_then(|s| s.max_upload_mb))
            .unwrap_or(defaults.max_upload_mb);

        let db_path = env::var("PDFSTASH_DB")
            .ok()
            .or_else(|| file.database.as_ref().and_then(|d| d.path.clone()))
            .map(PathBuf::from)
            .unwrap_or(defaults.db_path);

        let upload_dir = env::var("PDFSTASH_UPLOAD_DIR")
            .ok()
            .or_else(|| file.uploads.as_ref().and_then(|u| u.save_dir.clone()))
            .map(PathBuf::from);

        Settings {
            port,
            max_upload_mb,
            db_path,
            upload_dir,
        }
    }
}
