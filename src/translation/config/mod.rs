//! 翻译配置管理模块
//!
//! 支持配置文件、环境变量和默认值，优先级：环境变量 > 配置文件 > 默认值

pub mod manager;

pub use manager::{ConfigManager, TranslationConfig};

/// 配置常量
pub mod constants {
    use std::time::Duration;

    // 默认API设置
    pub const DEFAULT_API_URL: &str = "https://translation.googleapis.com/language/translate/v2";
    pub const DEFAULT_SOURCE_LANG: &str = "zh-TW";
    pub const DEFAULT_TARGET_LANG: &str = "en";
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

    /// 示例 `.env` 中的占位密钥，视同未配置
    pub const PLACEHOLDER_API_KEY: &str = "your-key-here";

    // 配置文件搜索路径
    pub const CONFIG_PATHS: &[&str] = &["lyview.toml", ".lyview.toml", "config/lyview.toml"];
}
