//! 配置服务
//!
//! 配置文件位于 `<config dir>/blog-admin/config.json`，缺失时使用默认值。
//! 环境变量优先于配置文件。

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use blog_admin_core::types::Actor;
use blog_admin_provider::FirebaseConfig;
use serde::{Deserialize, Serialize};

use crate::view::theme::Theme;

/// 配置目录名
const APP_DIR_NAME: &str = "blog-admin";
/// 配置文件名
const CONFIG_FILE_NAME: &str = "config.json";

pub const ENV_API_BASE_URL: &str = "BLOG_ADMIN_API_BASE_URL";
pub const ENV_FIREBASE_API_KEY: &str = "BLOG_ADMIN_FIREBASE_API_KEY";
/// 前端构建时使用的变量名，作为 API key 的后备来源
pub const ENV_FIREBASE_API_KEY_FALLBACK: &str = "VITE_FIREBASE_API_KEY";
pub const ENV_ACTOR_ID: &str = "BLOG_ADMIN_ACTOR_ID";
pub const ENV_SESSION_TOKEN: &str = "BLOG_ADMIN_SESSION_TOKEN";

/// 配置错误
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to access config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// 应用配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 博客 API 地址
    pub api_base_url: String,
    /// Firebase 应用配置
    pub firebase: FirebaseConfig,
    /// 当前用户
    pub actor: Actor,
    /// 界面语言（`en-US` / `zh-CN`）
    pub language: String,
    pub theme: Theme,
    /// 上传分片大小（字节）
    pub upload_chunk_size: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:3000".to_string(),
            firebase: FirebaseConfig::default(),
            actor: Actor::default(),
            language: "en-US".to_string(),
            theme: Theme::Dark,
            upload_chunk_size: blog_admin_provider::DEFAULT_CHUNK_SIZE,
        }
    }
}

impl AppConfig {
    /// 用环境变量覆盖配置
    ///
    /// `lookup` 通常是 `std::env::var(..).ok()`；空值视为未设置。
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(url) = get(ENV_API_BASE_URL) {
            self.api_base_url = url;
        }
        if let Some(key) = get(ENV_FIREBASE_API_KEY).or_else(|| get(ENV_FIREBASE_API_KEY_FALLBACK)) {
            self.firebase.api_key = key;
        }
        if let Some(id) = get(ENV_ACTOR_ID) {
            self.actor.id = id;
        }
    }
}

/// 配置目录：`<系统配置目录>/blog-admin`
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig, ConfigError>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<(), ConfigError>;
}

/// 本地 JSON 文件配置服务
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    pub fn new() -> Self {
        Self::with_path(config_dir().join(CONFIG_FILE_NAME))
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 配置文件是否存在
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    fn io_error(&self, source: io::Error) -> ConfigError {
        ConfigError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl Default for LocalConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig, ConfigError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("No config file at {}, using defaults", self.path.display());
                return Ok(AppConfig::default());
            }
            Err(e) => return Err(self.io_error(e)),
        };

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(|e| self.io_error(e))?;
        }

        // API key 只来自环境变量，不落盘
        let mut persisted = config.clone();
        persisted.firebase.api_key.clear();

        let content = serde_json::to_string_pretty(&persisted).map_err(|source| ConfigError::Parse {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, content).map_err(|e| self.io_error(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicU32, Ordering};

    static COUNTER: AtomicU32 = AtomicU32::new(0);

    fn temp_config_path() -> PathBuf {
        let n = COUNTER.fetch_add(1, Ordering::Relaxed);
        std::env::temp_dir()
            .join(format!("blog-admin-config-test-{}-{n}", std::process::id()))
            .join(CONFIG_FILE_NAME)
    }

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn missing_file_gives_defaults() {
        let service = LocalConfigService::with_path(temp_config_path());
        let config = service.load().unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api_base_url, "http://localhost:3000");
        assert_eq!(config.firebase.storage_bucket, "mern-blog-ae30c.appspot.com");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let path = temp_config_path();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{ not json").unwrap();

        let err = LocalConfigService::with_path(&path).load().unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }), "{err:?}");
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let path = temp_config_path();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, r#"{"api_base_url":"https://blog.example.com","theme":"light"}"#).unwrap();

        let config = LocalConfigService::with_path(&path).load().unwrap();
        assert_eq!(config.api_base_url, "https://blog.example.com");
        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.language, "en-US");
        assert_eq!(config.upload_chunk_size, blog_admin_provider::DEFAULT_CHUNK_SIZE);
    }

    #[test]
    fn save_then_load_drops_api_key() {
        let service = LocalConfigService::with_path(temp_config_path());
        let mut config = AppConfig::default();
        config.firebase.api_key = "secret".to_string();
        config.actor.id = "u1".to_string();

        service.save(&config).unwrap();
        assert!(service.exists());

        let loaded = service.load().unwrap();
        assert_eq!(loaded.firebase.api_key, "");
        assert_eq!(loaded.actor.id, "u1");
    }

    #[test]
    fn env_overrides_win() {
        let mut config = AppConfig::default();
        config.apply_overrides(env(&[
            (ENV_API_BASE_URL, "https://api.example.com"),
            (ENV_FIREBASE_API_KEY_FALLBACK, "vite-key"),
            (ENV_ACTOR_ID, "u42"),
        ]));
        assert_eq!(config.api_base_url, "https://api.example.com");
        assert_eq!(config.firebase.api_key, "vite-key");
        assert_eq!(config.actor.id, "u42");

        config.apply_overrides(env(&[
            (ENV_FIREBASE_API_KEY, "primary-key"),
            (ENV_FIREBASE_API_KEY_FALLBACK, "vite-key"),
        ]));
        assert_eq!(config.firebase.api_key, "primary-key");
    }

    #[test]
    fn blank_env_values_are_ignored() {
        let mut config = AppConfig::default();
        config.apply_overrides(env(&[(ENV_API_BASE_URL, "  ")]));
        assert_eq!(config.api_base_url, "http://localhost:3000");
    }
}
