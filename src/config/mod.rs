use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    pub base_url: String,
    /// Value sent in the `Host` header (reverse proxy routing). Empty = not sent.
    #[serde(default)]
    pub host_header: String,
    /// Value sent in the `X-Forwarded-Host` header. Empty = not sent.
    #[serde(default = "default_forwarded_host")]
    pub forwarded_host: String,
    /// `fuente` parameter of the project list endpoint
    #[serde(default = "default_source")]
    pub source: String,
    #[serde(default = "default_timeout")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://127.0.0.1:5000/".to_string()
}
fn default_forwarded_host() -> String {
    "localhost".to_string()
}
fn default_source() -> String {
    "1".to_string()
}
fn default_timeout() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self::with_database(Self::database_file())
    }
}

impl Config {
    fn with_database(db_path: PathBuf) -> Self {
        Self {
            database: db_path.to_string_lossy().to_string(),
            base_url: default_base_url(),
            host_header: String::new(),
            forwarded_host: default_forwarded_host(),
            source: default_source(),
            connect_timeout_secs: default_timeout(),
            timeout_secs: default_timeout(),
        }
    }

    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("qrattend")
        } else {
            let home = dirs::home_dir()
                .or_else(|| env::var("HOME").ok().map(PathBuf::from))
                .unwrap_or_else(|| PathBuf::from("."));
            home.join(".qrattend")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("qrattend.conf")
    }

    /// Return the full path of the local SQLite store
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("qrattend.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        Ok(cfg)
    }

    /// Initialize configuration directory, config file and the local store file.
    ///
    /// Returns the configuration that was written (or would have been, in test mode).
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();

        let db_path = match custom_db {
            Some(name) => {
                let p = Path::new(&name);
                if p.is_absolute() {
                    p.to_path_buf()
                } else {
                    dir.join(p)
                }
            }
            None => dir.join("qrattend.sqlite"),
        };

        let config = Config::with_database(db_path.clone());

        if !is_test {
            fs::create_dir_all(&dir)?;
            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }
        restrict_permissions(&db_path)?;

        println!("✅ Database:    {:?}", db_path);

        Ok(config)
    }
}

/// The local store holds the bearer token: keep it readable by the owner only.
#[cfg(unix)]
pub fn restrict_permissions(path: &Path) -> AppResult<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o600))?;
    Ok(())
}

#[cfg(not(unix))]
pub fn restrict_permissions(_path: &Path) -> AppResult<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_optional_keys_fall_back_to_defaults() {
        let yaml = "database: /tmp/x.sqlite\nbase_url: http://10.0.0.5:5000/\n";
        let cfg: Config = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(cfg.base_url, "http://10.0.0.5:5000/");
        assert_eq!(cfg.source, "1");
        assert_eq!(cfg.forwarded_host, "localhost");
        assert!(cfg.host_header.is_empty());
        assert_eq!(cfg.connect_timeout_secs, 30);
        assert_eq!(cfg.timeout_secs, 30);
    }

    #[test]
    fn load_from_missing_file_returns_defaults() {
        let path = env::temp_dir().join("qrattend_no_such_config.conf");
        fs::remove_file(&path).ok();

        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg.source, "1");
        assert!(cfg.database.ends_with("qrattend.sqlite"));
    }

    #[test]
    fn broken_yaml_is_a_config_error() {
        let path = env::temp_dir().join("qrattend_broken_config.conf");
        fs::write(&path, "database: [unterminated").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
        fs::remove_file(&path).ok();
    }
}
