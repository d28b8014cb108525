//! 翻译缓存模块
//!
//! 有界、按插入顺序淘汰（FIFO）的翻译结果缓存。
//!
//! 底层使用 `LruCache`，但读取一律走 `peek`，从不提升条目，
//! 因此其"最近使用"顺序始终等于插入顺序，淘汰的总是最早插入的条目。

use std::num::NonZeroUsize;
use std::sync::{Mutex, MutexGuard};

use lru::LruCache;
use serde::Serialize;

/// 默认缓存容量
pub const DEFAULT_CAPACITY: usize = 5000;

/// 缓存统计信息
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub entries: usize,
    pub capacity: usize,
}

impl CacheStats {
    /// 计算缓存命中率
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

struct CacheInner {
    entries: LruCache<String, String>,
    stats: CacheStats,
}

/// 翻译缓存
///
/// 键为去除首尾空白后的原文。`size <= capacity` 恒成立。
pub struct TranslationCache {
    inner: Mutex<CacheInner>,
    capacity: usize,
}

impl TranslationCache {
    /// 使用默认容量创建缓存
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// 使用指定容量创建缓存，容量为 0 时按 1 处理
    pub fn with_capacity(capacity: usize) -> Self {
        let cap = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            inner: Mutex::new(CacheInner {
                entries: LruCache::new(cap),
                stats: CacheStats {
                    capacity: cap.get(),
                    ..Default::default()
                },
            }),
            capacity: cap.get(),
        }
    }

    fn lock(&self) -> MutexGuard<'_, CacheInner> {
        // 临界区内没有会中途 panic 的多步修改，中毒后数据仍然一致
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// 查找缓存条目，不更新任何顺序
    pub fn get(&self, key: &str) -> Option<String> {
        let mut inner = self.lock();
        let value = inner.entries.peek(key).cloned();
        if value.is_some() {
            inner.stats.hits += 1;
        } else {
            inner.stats.misses += 1;
        }
        value
    }

    /// 插入缓存条目
    ///
    /// 新键且已满时先淘汰最早插入的条目；已存在的键视为重新插入，
    /// 值被替换并移动到最新位置。
    pub fn put(&self, key: String, value: String) {
        let mut inner = self.lock();
        if !inner.entries.contains(&key) && inner.entries.len() >= self.capacity {
            if let Some((evicted, _)) = inner.entries.pop_lru() {
                inner.stats.evictions += 1;
                tracing::trace!("缓存已满，淘汰最早条目: {}", evicted);
            }
        }
        inner.entries.put(key, value);
    }

    /// 检查是否包含指定键（不计入统计）
    pub fn contains_key(&self, key: &str) -> bool {
        self.lock().entries.contains(key)
    }

    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// 清空缓存，返回被清除的条目数
    pub fn clear(&self) -> usize {
        let mut inner = self.lock();
        let removed = inner.entries.len();
        inner.entries.clear();
        removed
    }

    /// 获取统计信息快照
    pub fn stats(&self) -> CacheStats {
        let inner = self.lock();
        let mut stats = inner.stats.clone();
        stats.entries = inner.entries.len();
        stats
    }

    /// 按插入顺序（从旧到新）列出所有键
    pub fn keys(&self) -> Vec<String> {
        let inner = self.lock();
        inner.entries.iter().rev().map(|(k, _)| k.clone()).collect()
    }
}

impl Default for TranslationCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_basic_operations() {
        let cache = TranslationCache::new();

        cache.put("立法院".to_string(), "Legislative Yuan".to_string());
        assert_eq!(cache.get("立法院"), Some("Legislative Yuan".to_string()));
        assert_eq!(cache.get("行政院"), None);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.capacity(), DEFAULT_CAPACITY);

        assert_eq!(cache.clear(), 1);
        assert!(cache.is_empty());
        assert_eq!(cache.get("立法院"), None);
    }

    #[test]
    fn test_cache_stats() {
        let cache = TranslationCache::with_capacity(10);
        cache.put("a".to_string(), "A".to_string());

        cache.get("a");
        cache.get("b");

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.entries, 1);
        assert_eq!(stats.capacity, 10);
        assert_eq!(stats.hit_rate(), 0.5);
    }

    #[test]
    fn test_fifo_eviction() {
        let cache = TranslationCache::with_capacity(2);

        cache.put("a".to_string(), "A".to_string());
        cache.put("b".to_string(), "B".to_string());
        cache.put("c".to_string(), "C".to_string());

        assert_eq!(cache.get("a"), None);
        assert_eq!(cache.get("b"), Some("B".to_string()));
        assert_eq!(cache.get("c"), Some("C".to_string()));
        assert_eq!(cache.stats().evictions, 1);
    }

    #[test]
    fn test_reads_do_not_protect_from_eviction() {
        let cache = TranslationCache::with_capacity(2);

        cache.put("1".to_string(), "一".to_string());
        cache.put("2".to_string(), "二".to_string());

        // 读取不会改变淘汰顺序
        assert_eq!(cache.get("1"), Some("一".to_string()));
        assert_eq!(cache.get("1"), Some("一".to_string()));

        cache.put("3".to_string(), "三".to_string());
        assert_eq!(cache.get("1"), None);
        assert_eq!(cache.get("2"), Some("二".to_string()));
        assert_eq!(cache.get("3"), Some("三".to_string()));
    }

    #[test]
    fn test_reinsert_is_fresh_insert() {
        let cache = TranslationCache::with_capacity(2);

        cache.put("a".to_string(), "A".to_string());
        cache.put("b".to_string(), "B".to_string());
        cache.put("a".to_string(), "A2".to_string());
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.keys(), vec!["b".to_string(), "a".to_string()]);

        cache.put("c".to_string(), "C".to_string());
        assert_eq!(cache.get("b"), None);
        assert_eq!(cache.get("a"), Some("A2".to_string()));
    }

    #[test]
    fn test_capacity_never_exceeded() {
        let cache = TranslationCache::with_capacity(5);
        for i in 0..50 {
            cache.put(format!("key{}", i), format!("value{}", i));
            assert!(cache.len() <= 5);
        }
        assert_eq!(cache.stats().evictions, 45);
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        let cache = TranslationCache::with_capacity(0);
        assert_eq!(cache.capacity(), 1);
        cache.put("x".to_string(), "X".to_string());
        cache.put("y".to_string(), "Y".to_string());
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("y"), Some("Y".to_string()));
    }
}
