//! 翻译系统核心模块
//!
//! ```text
//! TranslationResolver (resolver.rs)
//!     ├── StaticDictionary (storage/dictionary.rs)
//!     ├── TranslationCache (storage/cache.rs)
//!     └── ExternalTranslationClient (provider.rs)
//! ```

pub mod resolver;

pub use resolver::{ResolverStats, ResolverStatsSnapshot, TranslationResolver};
