use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, ShopfrontError};

/// 默认配置文件路径
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";
/// 环境变量前缀（分隔符 `__`）
pub const ENV_PREFIX: &str = "SHOPFRONT";

/// 静态配置（从 TOML + 环境变量加载，启动时使用）
///
/// - api: catalog backend address and request timeout
/// - ui: slideshow / like pulse timings and formatting
/// - logging: log level, format and output
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StaticConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StaticConfig {
    /// 从 TOML 文件和环境变量加载配置
    ///
    /// 优先级：--base-url > ENV > config file > 默认值
    /// 示例：SHOPFRONT__API__BASE_URL=http://shop.local:5000
    pub fn load(path: Option<&str>, base_url: Option<&str>) -> Result<Self> {
        Self::build(path, None, base_url)
    }

    /// Load and validate. `env` replaces the process environment when given.
    pub fn load_from(path: Option<&str>, env: Option<HashMap<String, String>>) -> Result<Self> {
        Self::build(path, env, None)
    }

    fn build(
        path: Option<&str>,
        env: Option<HashMap<String, String>>,
        base_url: Option<&str>,
    ) -> Result<Self> {
        use config::{Config, Environment, File};

        let path = path.unwrap_or(DEFAULT_CONFIG_PATH);

        let builder = Config::builder()
            // 1. 从 TOML 文件加载（可选）
            .add_source(File::with_name(path).required(false))
            // 2. 从环境变量覆盖
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true)
                    .source(env),
            )
            // 3. 命令行参数
            .set_override_option("api.base_url", base_url.map(str::to_string))?;

        let config: StaticConfig = builder.build()?.try_deserialize()?;
        config.validate()?;

        if std::path::Path::new(path).exists() {
            eprintln!("[INFO] Configuration loaded from: {}", path);
        }
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let parsed = url::Url::parse(&self.api.base_url).map_err(|e| {
            ShopfrontError::config(format!("invalid api.base_url '{}': {}", self.api.base_url, e))
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ShopfrontError::config(format!(
                "api.base_url must be http or https, got '{}'",
                parsed.scheme()
            )));
        }
        if self.ui.slide_interval_ms == 0 {
            return Err(ShopfrontError::config("ui.slide_interval_ms must be > 0"));
        }
        if !matches!(self.logging.format.as_str(), "text" | "json") {
            return Err(ShopfrontError::config(format!(
                "logging.format must be 'text' or 'json', got '{}'",
                self.logging.format
            )));
        }
        Ok(())
    }

    /// 生成示例 TOML 配置文件
    pub fn generate_sample_config() -> String {
        let sample_config = Self::default();
        toml::to_string_pretty(&sample_config)
            .unwrap_or_else(|e| format!("Error generating sample config: {}", e))
    }

    /// 保存配置到 TOML 文件
    pub fn save_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;

        if let Some(parent) = path.as_ref().parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Catalog backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout in seconds, 0 keeps the transport default
    #[serde(default)]
    pub timeout_secs: u64,
}

impl ApiConfig {
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

/// Page behaviour
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_slide_interval_ms")]
    pub slide_interval_ms: u64,
    #[serde(default = "default_like_pulse_ms")]
    pub like_pulse_ms: u64,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default = "default_cancel_stale_searches")]
    pub cancel_stale_searches: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default = "default_max_backups")]
    pub max_backups: u32,
    #[serde(default = "default_enable_rotation")]
    pub enable_rotation: bool,
}

// ============================================================
// Default value functions
// ============================================================

fn default_base_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_slide_interval_ms() -> u64 {
    3000
}

fn default_like_pulse_ms() -> u64 {
    300
}

fn default_currency_symbol() -> String {
    "€".to_string()
}

fn default_cancel_stale_searches() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_max_backups() -> u32 {
    5
}

fn default_enable_rotation() -> bool {
    true
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: 0,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            slide_interval_ms: default_slide_interval_ms(),
            like_pulse_ms: default_like_pulse_ms(),
            currency_symbol: default_currency_symbol(),
            cancel_stale_searches: default_cancel_stale_searches(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
            max_backups: default_max_backups(),
            enable_rotation: default_enable_rotation(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn no_env() -> Option<HashMap<String, String>> {
        Some(HashMap::new())
    }

    #[test]
    fn test_defaults_without_file() {
        let config = StaticConfig::load_from(Some("does-not-exist.toml"), no_env()).unwrap();
        assert_eq!(config.api.base_url, "http://127.0.0.1:5000");
        assert_eq!(config.ui.slide_interval_ms, 3000);
        assert_eq!(config.ui.like_pulse_ms, 300);
        assert_eq!(config.ui.currency_symbol, "€");
        assert!(config.api.timeout().is_none());
    }

    #[test]
    fn test_toml_file_overrides_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("shop.toml");
        std::fs::write(
            &path,
            "[api]\nbase_url = \"https://shop.example\"\ntimeout_secs = 4\n\n[ui]\nslide_interval_ms = 1500\n",
        )
        .unwrap();

        let config = StaticConfig::load_from(path.to_str(), no_env()).unwrap();
        assert_eq!(config.api.base_url, "https://shop.example");
        assert_eq!(config.api.timeout(), Some(Duration::from_secs(4)));
        assert_eq!(config.ui.slide_interval_ms, 1500);
        assert_eq!(config.ui.like_pulse_ms, 300);
    }

    #[test]
    fn test_env_overrides_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("shop.toml");
        std::fs::write(&path, "[api]\nbase_url = \"https://shop.example\"\n").unwrap();

        let env = HashMap::from([
            (
                "SHOPFRONT__API__BASE_URL".to_string(),
                "http://localhost:9000".to_string(),
            ),
            (
                "SHOPFRONT__UI__CANCEL_STALE_SEARCHES".to_string(),
                "false".to_string(),
            ),
        ]);
        let config = StaticConfig::load_from(path.to_str(), Some(env)).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:9000");
        assert!(!config.ui.cancel_stale_searches);
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let mut config = StaticConfig::default();
        config.api.base_url = "not a url".to_string();
        assert!(config.validate().is_err());

        config.api.base_url = "ftp://shop.example".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_interval_rejected() {
        let mut config = StaticConfig::default();
        config.ui.slide_interval_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_sample_config_round_trips_through_loader() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        StaticConfig::default().save_to_file(&path).unwrap();

        let sample = StaticConfig::generate_sample_config();
        assert!(sample.contains("slide_interval_ms = 3000"));

        let loaded = StaticConfig::load_from(path.to_str(), no_env()).unwrap();
        assert_eq!(loaded.api.base_url, StaticConfig::default().api.base_url);
    }

    #[test]
    fn test_base_url_flag_wins() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("shop.toml");
        std::fs::write(&path, "[api]\nbase_url = \"https://shop.example\"\n").unwrap();

        let config = StaticConfig::load(path.to_str(), Some("http://10.0.0.2:5000")).unwrap();
        assert_eq!(config.api.base_url, "http://10.0.0.2:5000");

        assert!(StaticConfig::load(path.to_str(), Some("nope")).is_err());
    }
}
