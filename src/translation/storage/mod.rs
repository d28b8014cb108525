//! 存储模块
//!
//! 静态词典与进程内翻译缓存。两者都不做持久化。

pub mod cache;
pub mod dictionary;

pub use cache::{CacheStats, TranslationCache, DEFAULT_CAPACITY};
pub use dictionary::StaticDictionary;
