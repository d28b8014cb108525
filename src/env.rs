//! 统一的环境变量管理系统
//!
//! 类型安全、可验证的环境变量访问

use std::env;
use std::fmt;
use std::time::Duration;

/// 环境变量解析错误
#[derive(Debug, Clone)]
pub struct EnvError {
    pub variable: String,
    pub message: String,
}

impl fmt::Display for EnvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Environment variable '{}': {}", self.variable, self.message)
    }
}

impl std::error::Error for EnvError {}

pub type EnvResult<T> = Result<T, EnvError>;

/// 环境变量访问器特性
pub trait EnvVar<T> {
    const NAME: &'static str;
    const DEFAULT: Option<T>;
    const DESCRIPTION: &'static str;

    fn parse(value: &str) -> EnvResult<T>;

    fn get() -> EnvResult<T> {
        match env::var(Self::NAME) {
            Ok(value) => Self::parse(&value),
            Err(_) => {
                if let Some(default) = Self::DEFAULT {
                    Ok(default)
                } else {
                    Err(EnvError {
                        variable: Self::NAME.to_string(),
                        message: "Required environment variable not set".to_string(),
                    })
                }
            }
        }
    }

    /// 变量是否被显式设置
    fn is_set() -> bool {
        env::var_os(Self::NAME).is_some()
    }
}

/// 核心环境变量定义
pub mod core {
    use super::*;

    /// 日志级别
    pub struct LogLevel;
    impl EnvVar<String> for LogLevel {
        const NAME: &'static str = "LYVIEW_LOG_LEVEL";
        const DEFAULT: Option<String> = None;
        const DESCRIPTION: &'static str = "Log level: trace, debug, info, warn, error";

        fn get() -> EnvResult<String> {
            match env::var(Self::NAME) {
                Ok(value) => Self::parse(&value),
                Err(_) => Ok("info".to_string()),
            }
        }

        fn parse(value: &str) -> EnvResult<String> {
            match value.to_lowercase().as_str() {
                "trace" | "debug" | "info" | "warn" | "error" => Ok(value.to_lowercase()),
                _ => Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: format!(
                        "Invalid log level '{}'. Use: trace, debug, info, warn, error",
                        value
                    ),
                }),
            }
        }
    }
}

/// 翻译相关环境变量
pub mod translation {
    use super::*;

    /// Google 翻译 API 密钥
    pub struct ApiKey;
    impl EnvVar<String> for ApiKey {
        const NAME: &'static str = "GOOGLE_TRANSLATE_API_KEY";
        const DEFAULT: Option<String> = None;
        const DESCRIPTION: &'static str =
            "Google Cloud Translation API key; translation falls back to passthrough when unset";

        fn parse(value: &str) -> EnvResult<String> {
            let key = value.trim();
            if key.is_empty() {
                return Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: "API key cannot be empty".to_string(),
                });
            }
            Ok(key.to_string())
        }
    }

    /// API URL
    pub struct ApiUrl;
    impl EnvVar<String> for ApiUrl {
        const NAME: &'static str = "LYVIEW_TRANSLATION_API_URL";
        const DEFAULT: Option<String> = None;
        const DESCRIPTION: &'static str = "Translation API endpoint URL";

        fn get() -> EnvResult<String> {
            match env::var(Self::NAME) {
                Ok(value) => Self::parse(&value),
                Err(_) => Ok(crate::translation::config::constants::DEFAULT_API_URL.to_string()),
            }
        }

        fn parse(value: &str) -> EnvResult<String> {
            parse_http_url(value, Self::NAME)
        }
    }

    /// 源语言
    pub struct SourceLang;
    impl EnvVar<String> for SourceLang {
        const NAME: &'static str = "LYVIEW_TRANSLATION_SOURCE_LANG";
        const DEFAULT: Option<String> = None;
        const DESCRIPTION: &'static str = "Source language tag sent to the translation API";

        fn get() -> EnvResult<String> {
            match env::var(Self::NAME) {
                Ok(value) => Self::parse(&value),
                Err(_) => {
                    Ok(crate::translation::config::constants::DEFAULT_SOURCE_LANG.to_string())
                }
            }
        }

        fn parse(value: &str) -> EnvResult<String> {
            parse_lang_tag(value, Self::NAME)
        }
    }

    /// 目标语言
    pub struct TargetLang;
    impl EnvVar<String> for TargetLang {
        const NAME: &'static str = "LYVIEW_TRANSLATION_TARGET_LANG";
        const DEFAULT: Option<String> = None;
        const DESCRIPTION: &'static str = "Target language tag sent to the translation API";

        fn get() -> EnvResult<String> {
            match env::var(Self::NAME) {
                Ok(value) => Self::parse(&value),
                Err(_) => {
                    Ok(crate::translation::config::constants::DEFAULT_TARGET_LANG.to_string())
                }
            }
        }

        fn parse(value: &str) -> EnvResult<String> {
            parse_lang_tag(value, Self::NAME)
        }
    }

    /// 请求超时
    pub struct Timeout;
    impl EnvVar<Duration> for Timeout {
        const NAME: &'static str = "LYVIEW_TRANSLATION_TIMEOUT";
        const DEFAULT: Option<Duration> = Some(Duration::from_secs(15));
        const DESCRIPTION: &'static str = "Translation HTTP client timeout in seconds";

        fn parse(value: &str) -> EnvResult<Duration> {
            let seconds = parse_positive_usize(value, Self::NAME, 1, 300)?;
            Ok(Duration::from_secs(seconds as u64))
        }
    }
}

/// 缓存相关环境变量
pub mod cache {
    use super::*;

    /// 缓存容量
    pub struct Capacity;
    impl EnvVar<usize> for Capacity {
        const NAME: &'static str = "LYVIEW_CACHE_CAPACITY";
        const DEFAULT: Option<usize> = Some(crate::translation::storage::DEFAULT_CAPACITY);
        const DESCRIPTION: &'static str = "Translation cache capacity (number of entries)";

        fn parse(value: &str) -> EnvResult<usize> {
            parse_positive_usize(value, Self::NAME, 1, 1_000_000)
        }
    }
}

/// Web服务器相关环境变量
pub mod web {
    use super::*;

    /// 绑定地址
    pub struct BindAddress;
    impl EnvVar<String> for BindAddress {
        const NAME: &'static str = "LYVIEW_BIND_ADDRESS";
        const DEFAULT: Option<String> = None;
        const DESCRIPTION: &'static str = "Web server bind address";

        fn get() -> EnvResult<String> {
            match env::var(Self::NAME) {
                Ok(value) => Self::parse(&value),
                Err(_) => Ok("127.0.0.1".to_string()),
            }
        }

        fn parse(value: &str) -> EnvResult<String> {
            let addr = value.trim();
            if addr.is_empty() {
                return Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: "Address cannot be empty".to_string(),
                });
            }
            Ok(addr.to_string())
        }
    }

    /// 端口
    pub struct Port;
    impl EnvVar<u16> for Port {
        const NAME: &'static str = "PORT";
        const DEFAULT: Option<u16> = Some(3001);
        const DESCRIPTION: &'static str = "Web server port";

        fn parse(value: &str) -> EnvResult<u16> {
            let port: u16 = value.trim().parse().map_err(|_| EnvError {
                variable: Self::NAME.to_string(),
                message: "Must be a valid port number (1-65535)".to_string(),
            })?;

            if port == 0 {
                return Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: "Port cannot be 0".to_string(),
                });
            }

            Ok(port)
        }
    }
}

/// 上游立法院 API 相关环境变量
pub mod upstream {
    use super::*;

    /// 上游基础地址
    pub struct BaseUrl;
    impl EnvVar<String> for BaseUrl {
        const NAME: &'static str = "LYVIEW_UPSTREAM_URL";
        const DEFAULT: Option<String> = None;
        const DESCRIPTION: &'static str = "Legislative Yuan open data API base URL";

        fn get() -> EnvResult<String> {
            match env::var(Self::NAME) {
                Ok(value) => Self::parse(&value),
                Err(_) => Ok(crate::network::ly_api::DEFAULT_BASE_URL.to_string()),
            }
        }

        fn parse(value: &str) -> EnvResult<String> {
            parse_http_url(value, Self::NAME)
        }
    }
}

/// 辅助函数
fn parse_http_url(value: &str, var_name: &str) -> EnvResult<String> {
    let url = value.trim();
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(url.trim_end_matches('/').to_string())
    } else {
        Err(EnvError {
            variable: var_name.to_string(),
            message: "URL must start with http:// or https://".to_string(),
        })
    }
}

fn parse_lang_tag(value: &str, var_name: &str) -> EnvResult<String> {
    let tag = value.trim();
    let valid = !tag.is_empty()
        && tag.len() <= 16
        && tag.chars().all(|c| c.is_ascii_alphanumeric() || c == '-');
    if valid {
        Ok(tag.to_string())
    } else {
        Err(EnvError {
            variable: var_name.to_string(),
            message: format!("Invalid language tag '{}'", value),
        })
    }
}

fn parse_positive_usize(value: &str, var_name: &str, min: usize, max: usize) -> EnvResult<usize> {
    let num: usize = value.trim().parse().map_err(|_| EnvError {
        variable: var_name.to_string(),
        message: "Must be a valid positive number".to_string(),
    })?;

    if num < min {
        return Err(EnvError {
            variable: var_name.to_string(),
            message: format!("Value {} is below minimum {}", num, min),
        });
    }

    if num > max {
        return Err(EnvError {
            variable: var_name.to_string(),
            message: format!("Value {} exceeds maximum {}", num, max),
        });
    }

    Ok(num)
}

/// 环境变量文档生成器
pub fn generate_env_docs() -> String {
    let mut docs = String::new();
    docs.push_str("# Environment Variables\n\n");

    let mut line = |name: &str, description: &str| {
        docs.push_str(&format!("- `{}`: {}\n", name, description));
    };

    line(core::LogLevel::NAME, core::LogLevel::DESCRIPTION);
    line(translation::ApiKey::NAME, translation::ApiKey::DESCRIPTION);
    line(translation::ApiUrl::NAME, translation::ApiUrl::DESCRIPTION);
    line(translation::SourceLang::NAME, translation::SourceLang::DESCRIPTION);
    line(translation::TargetLang::NAME, translation::TargetLang::DESCRIPTION);
    line(translation::Timeout::NAME, translation::Timeout::DESCRIPTION);
    line(cache::Capacity::NAME, cache::Capacity::DESCRIPTION);
    line(web::BindAddress::NAME, web::BindAddress::DESCRIPTION);
    line(web::Port::NAME, web::Port::DESCRIPTION);
    line(upstream::BaseUrl::NAME, upstream::BaseUrl::DESCRIPTION);

    docs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(core::LogLevel::parse("DEBUG").unwrap(), "debug");
        assert!(core::LogLevel::parse("loud").is_err());
    }

    #[test]
    fn test_url_validation() {
        assert_eq!(
            upstream::BaseUrl::parse("https://v2.ly.govapi.tw/").unwrap(),
            "https://v2.ly.govapi.tw"
        );
        assert!(translation::ApiUrl::parse("ftp://example.com").is_err());
        assert!(translation::ApiUrl::parse("not-a-url").is_err());
    }

    #[test]
    fn test_lang_tag_validation() {
        assert_eq!(translation::SourceLang::parse(" zh-TW ").unwrap(), "zh-TW");
        assert!(translation::TargetLang::parse("").is_err());
        assert!(translation::TargetLang::parse("en us").is_err());
    }

    #[test]
    fn test_numeric_validation() {
        assert_eq!(cache::Capacity::parse("5000").unwrap(), 5000);
        assert!(cache::Capacity::parse("0").is_err());
        assert!(cache::Capacity::parse("2000000").is_err());
        assert!(cache::Capacity::parse("many").is_err());

        assert_eq!(
            translation::Timeout::parse("30").unwrap(),
            Duration::from_secs(30)
        );
        assert!(translation::Timeout::parse("0").is_err());

        assert_eq!(web::Port::parse("8080").unwrap(), 8080);
        assert!(web::Port::parse("0").is_err());
        assert!(web::Port::parse("70000").is_err());
    }

    #[test]
    fn test_api_key_rejects_blank() {
        assert!(translation::ApiKey::parse("   ").is_err());
        assert_eq!(translation::ApiKey::parse(" abc ").unwrap(), "abc");
    }

    #[test]
    fn test_generate_env_docs() {
        let docs = generate_env_docs();
        assert!(docs.contains("GOOGLE_TRANSLATE_API_KEY"));
        assert!(docs.contains("LYVIEW_CACHE_CAPACITY"));
        assert!(docs.contains("`PORT`"));
    }
}
