//! 配置管理器
//!
//! 提供统一的配置接口，支持文件配置、环境变量和默认值

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::constants;
use crate::translation::error::{TranslationError, TranslationResult};
use crate::translation::storage::DEFAULT_CAPACITY;

/// 翻译配置
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TranslationConfig {
    // 外部翻译服务
    pub api_key: Option<String>,
    pub api_url: String,
    pub source_lang: String,
    pub target_lang: String,
    pub timeout_secs: u64,

    // 缓存
    pub cache_capacity: usize,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: constants::DEFAULT_API_URL.to_string(),
            source_lang: constants::DEFAULT_SOURCE_LANG.to_string(),
            target_lang: constants::DEFAULT_TARGET_LANG.to_string(),
            timeout_secs: constants::DEFAULT_TIMEOUT.as_secs(),
            cache_capacity: DEFAULT_CAPACITY,
        }
    }
}

impl TranslationConfig {
    /// 验证配置
    pub fn validate(&self) -> TranslationResult<()> {
        if self.cache_capacity == 0 {
            return Err(TranslationError::Config("缓存容量不能为0".to_string()));
        }

        if self.timeout_secs == 0 {
            return Err(TranslationError::Config("请求超时不能为0".to_string()));
        }

        if !(self.api_url.starts_with("http://") || self.api_url.starts_with("https://")) {
            return Err(TranslationError::Config(format!(
                "API URL 必须以 http:// 或 https:// 开头: {}",
                self.api_url
            )));
        }

        if self.source_lang.trim().is_empty() || self.target_lang.trim().is_empty() {
            return Err(TranslationError::Config("语言标签不能为空".to_string()));
        }

        Ok(())
    }

    /// 应用环境变量覆盖
    ///
    /// 已设置但无法解析的变量视为配置错误，未设置的变量保持原值。
    pub fn apply_env_overrides(&mut self) -> TranslationResult<()> {
        use crate::env::{cache, translation, EnvVar};

        if translation::ApiKey::is_set() {
            self.api_key = Some(translation::ApiKey::get()?);
        }

        if translation::ApiUrl::is_set() {
            self.api_url = translation::ApiUrl::get()?;
            tracing::info!("环境变量覆盖 API URL: {}", self.api_url);
        }

        if translation::SourceLang::is_set() {
            self.source_lang = translation::SourceLang::get()?;
        }

        if translation::TargetLang::is_set() {
            self.target_lang = translation::TargetLang::get()?;
        }

        if translation::Timeout::is_set() {
            self.timeout_secs = translation::Timeout::get()?.as_secs();
        }

        if cache::Capacity::is_set() {
            self.cache_capacity = cache::Capacity::get()?;
        }

        Ok(())
    }

    /// 可用的 API 密钥；空值和示例占位符都视为未配置
    pub fn usable_api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty() && *key != constants::PLACEHOLDER_API_KEY)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// 配置管理器
pub struct ConfigManager {
    config: TranslationConfig,
}

impl ConfigManager {
    /// 加载 `.env`、配置文件并应用环境变量覆盖
    ///
    /// `path` 为 `None` 时在默认位置中搜索配置文件。
    pub fn load(path: Option<&Path>) -> TranslationResult<Self> {
        Self::load_dotenv();

        let mut config = match path {
            Some(path) => Self::load_from_file(path)?,
            None => Self::search_config()?,
        };
        config.apply_env_overrides()?;
        config.validate()?;

        Ok(Self { config })
    }

    /// 直接使用给定配置
    pub fn from_config(config: TranslationConfig) -> TranslationResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn into_config(self) -> TranslationConfig {
        self.config
    }

    fn search_config() -> TranslationResult<TranslationConfig> {
        for path in constants::CONFIG_PATHS {
            let path = Path::new(path);
            if path.exists() {
                return Self::load_from_file(path);
            }
        }

        tracing::info!("未找到配置文件，使用默认配置");
        Ok(TranslationConfig::default())
    }

    /// 从指定文件加载配置（`.toml` 或 JSON）
    pub fn load_from_file(path: &Path) -> TranslationResult<TranslationConfig> {
        tracing::info!("加载配置文件: {}", path.display());
        let content = std::fs::read_to_string(path)
            .map_err(|e| TranslationError::Config(format!("读取配置文件失败: {}", e)))?;

        Self::parse_content(&content, path.extension().and_then(|ext| ext.to_str()))
    }

    fn parse_content(content: &str, extension: Option<&str>) -> TranslationResult<TranslationConfig> {
        match extension {
            Some("json") => serde_json::from_str(content)
                .map_err(|e| TranslationError::Config(format!("解析JSON配置失败: {}", e))),
            _ => toml::from_str(content)
                .map_err(|e| TranslationError::Config(format!("解析TOML配置失败: {}", e))),
        }
    }

    fn load_dotenv() {
        let env_files = [".env.local", ".env"];

        for env_file in &env_files {
            if Path::new(env_file).exists() && dotenv::from_filename(env_file).is_ok() {
                tracing::info!("已加载环境变量文件: {}", env_file);
                break;
            }
        }
    }
}
