//! 翻译解析器
//!
//! 三级解析：静态词典 → 翻译缓存 → 外部翻译（批量，单次往返）。
//! 在词典和缓存之间还有一步 ASCII 放行：纯可打印 ASCII 文本视为已是英文。
//!
//! 解析器对调用方永不报错。外部翻译未配置或失败时，尚未解析的文本原样返回，
//! 失败只记录日志。
//!
//! ## 并发
//!
//! 缓存锁只在同步的查找/插入期间持有，从不跨越 `.await`，
//! 因此不同请求之间只会在等待外部调用时交错。

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::Serialize;

use crate::translation::config::TranslationConfig;
use crate::translation::error::{ErrorCategory, TranslationError, TranslationResult};
use crate::translation::pipeline::filters::{is_blank, is_printable_ascii, rewrap};
use crate::translation::provider::{ExternalTranslationClient, GoogleTranslateClient};
use crate::translation::storage::{CacheStats, StaticDictionary, TranslationCache};

/// 本地解析结果
enum LocalResolution {
    /// 已解析（词典、缓存、空白或 ASCII 放行）
    Resolved(String),
    /// 需要外部翻译，携带去除首尾空白后的文本
    Pending(String),
}

/// 解析器运行统计
#[derive(Debug, Default)]
pub struct ResolverStats {
    pub external_calls: AtomicU64,
    pub external_failures: AtomicU64,
    pub external_texts: AtomicU64,
}

/// 统计快照
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResolverStatsSnapshot {
    pub external_calls: u64,
    pub external_failures: u64,
    pub external_texts: u64,
}

impl ResolverStats {
    pub fn snapshot(&self) -> ResolverStatsSnapshot {
        ResolverStatsSnapshot {
            external_calls: self.external_calls.load(Ordering::Relaxed),
            external_failures: self.external_failures.load(Ordering::Relaxed),
            external_texts: self.external_texts.load(Ordering::Relaxed),
        }
    }
}

/// 翻译解析器
pub struct TranslationResolver {
    dictionary: StaticDictionary,
    cache: TranslationCache,
    client: Option<Arc<dyn ExternalTranslationClient>>,
    source_lang: String,
    target_lang: String,
    stats: ResolverStats,
}

impl TranslationResolver {
    /// 使用给定词典和缓存创建解析器，默认不带外部翻译
    pub fn new(dictionary: StaticDictionary, cache: TranslationCache) -> Self {
        let defaults = TranslationConfig::default();
        Self {
            dictionary,
            cache,
            client: None,
            source_lang: defaults.source_lang,
            target_lang: defaults.target_lang,
            stats: ResolverStats::default(),
        }
    }

    /// 按配置创建解析器；配置了有效密钥时接入 Google 翻译
    pub fn from_config(config: &TranslationConfig) -> TranslationResult<Self> {
        let cache = TranslationCache::with_capacity(config.cache_capacity);
        let resolver = Self::new(StaticDictionary::new(), cache)
            .with_languages(&config.source_lang, &config.target_lang);

        match GoogleTranslateClient::from_config(config)? {
            Some(client) => {
                tracing::info!("已启用外部翻译: {}", client.name());
                Ok(resolver.with_client(Arc::new(client)))
            }
            None => {
                tracing::warn!("{}，翻译将原样返回未知文本", TranslationError::ConfigurationAbsent);
                Ok(resolver)
            }
        }
    }

    /// 接入外部翻译客户端
    pub fn with_client(mut self, client: Arc<dyn ExternalTranslationClient>) -> Self {
        self.client = Some(client);
        self
    }

    /// 设置源语言和目标语言
    pub fn with_languages(mut self, source_lang: &str, target_lang: &str) -> Self {
        self.source_lang = source_lang.to_string();
        self.target_lang = target_lang.to_string();
        self
    }

    pub fn has_external(&self) -> bool {
        self.client.is_some()
    }

    pub fn cache(&self) -> &TranslationCache {
        &self.cache
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    pub fn clear_cache(&self) -> usize {
        self.cache.clear()
    }

    pub fn stats(&self) -> &ResolverStats {
        &self.stats
    }

    fn resolve_locally(&self, text: &str) -> LocalResolution {
        if is_blank(text) {
            return LocalResolution::Resolved(text.to_string());
        }

        let trimmed = text.trim();

        if let Some(translated) = self.dictionary.lookup(trimmed) {
            return LocalResolution::Resolved(rewrap(text, translated));
        }

        if let Some(translated) = self.cache.get(trimmed) {
            return LocalResolution::Resolved(rewrap(text, &translated));
        }

        if is_printable_ascii(trimmed) {
            return LocalResolution::Resolved(text.to_string());
        }

        LocalResolution::Pending(trimmed.to_string())
    }

    /// 翻译单个文本，失败时返回原文
    pub async fn translate_one(&self, text: &str) -> String {
        let trimmed = match self.resolve_locally(text) {
            LocalResolution::Resolved(resolved) => return resolved,
            LocalResolution::Pending(trimmed) => trimmed,
        };

        let Some(client) = &self.client else {
            return text.to_string();
        };

        self.stats.external_calls.fetch_add(1, Ordering::Relaxed);
        self.stats.external_texts.fetch_add(1, Ordering::Relaxed);

        match client
            .translate(&trimmed, &self.source_lang, &self.target_lang)
            .await
        {
            Ok(translated) if !is_blank(&translated) => {
                let result = rewrap(text, &translated);
                self.cache.put(trimmed, translated);
                result
            }
            Ok(_) => text.to_string(),
            Err(e) => {
                self.record_failure("单文本翻译", &e);
                text.to_string()
            }
        }
    }

    /// 记录外部翻译失败；传输类故障为告警，配置类故障为错误
    fn record_failure(&self, operation: &str, error: &TranslationError) {
        self.stats.external_failures.fetch_add(1, Ordering::Relaxed);
        match error.category() {
            ErrorCategory::Transport => {
                tracing::warn!("{}失败，返回原文: {}", operation, error)
            }
            ErrorCategory::Configuration => {
                tracing::error!("{}失败，请检查翻译配置: {}", operation, error)
            }
        }
    }

    /// 批量翻译
    ///
    /// 输出与输入等长且按位置对应。所有本地无法解析的文本合并为一次外部调用；
    /// 该调用失败时这些位置全部返回原文。
    pub async fn translate_batch(&self, texts: &[String]) -> Vec<String> {
        let mut results = Vec::with_capacity(texts.len());
        let mut pending: Vec<(usize, String)> = Vec::new();

        for (index, text) in texts.iter().enumerate() {
            match self.resolve_locally(text) {
                LocalResolution::Resolved(resolved) => results.push(resolved),
                LocalResolution::Pending(trimmed) => {
                    // 先填原文，外部翻译成功后再覆盖
                    results.push(text.clone());
                    pending.push((index, trimmed));
                }
            }
        }

        if pending.is_empty() {
            return results;
        }

        let Some(client) = &self.client else {
            tracing::debug!("未配置外部翻译，{} 条文本原样返回", pending.len());
            return results;
        };

        let request: Vec<String> = pending.iter().map(|(_, trimmed)| trimmed.clone()).collect();

        self.stats.external_calls.fetch_add(1, Ordering::Relaxed);
        self.stats
            .external_texts
            .fetch_add(request.len() as u64, Ordering::Relaxed);
        tracing::debug!(
            "批量翻译: 共 {} 条，本地解析 {} 条，外部翻译 {} 条",
            texts.len(),
            texts.len() - request.len(),
            request.len()
        );

        let translations = match client
            .translate_batch(&request, &self.source_lang, &self.target_lang)
            .await
        {
            Ok(translations) if translations.len() == request.len() => translations,
            Ok(translations) => {
                let error = TranslationError::MalformedResponse(format!(
                    "请求 {} 条，返回 {} 条",
                    request.len(),
                    translations.len()
                ));
                self.record_failure("批量翻译", &error);
                return results;
            }
            Err(e) => {
                self.record_failure("批量翻译", &e);
                return results;
            }
        };

        for ((index, trimmed), translated) in pending.into_iter().zip(translations) {
            if is_blank(&translated) {
                continue;
            }
            results[index] = rewrap(&texts[index], &translated);
            self.cache.put(trimmed, translated);
        }

        results
    }
}
