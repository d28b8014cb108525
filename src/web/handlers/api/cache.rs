//! 翻译缓存API处理器

use std::sync::Arc;

use axum::{extract::State, response::Json};

use crate::web::types::{AppState, CacheClearResponse, CacheStatsResponse};

/// 获取翻译缓存统计信息
pub async fn get_cache_stats(State(state): State<Arc<AppState>>) -> Json<CacheStatsResponse> {
    let cache = state.resolver.cache_stats();
    Json(CacheStatsResponse {
        hit_rate: cache.hit_rate(),
        cache,
        external_enabled: state.resolver.has_external(),
        resolver: state.resolver.stats().snapshot(),
    })
}

/// 清空翻译缓存
pub async fn clear_cache(State(state): State<Arc<AppState>>) -> Json<CacheClearResponse> {
    let deleted_count = state.resolver.clear_cache();
    tracing::info!("已清理 {} 个翻译缓存条目", deleted_count);

    Json(CacheClearResponse {
        success: true,
        message: format!("成功清理 {} 个缓存条目", deleted_count),
        deleted_count,
    })
}
