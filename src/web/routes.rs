//! Web 路由定义

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::web::{handlers::*, types::AppState};

/// 创建 API 路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/health", get(health))
        // 立法院资料
        .route("/api/legislators", get(list_legislators))
        .route("/api/legislators/:name", get(get_legislator))
        .route("/api/bills", get(list_bills))
        .route("/api/bills/:id", get(get_bill))
        .route("/api/committees", get(list_committees))
        .route("/api/interpellations", get(list_interpellations))
        // 翻译缓存管理
        .route("/api/translation/cache", get(get_cache_stats))
        .route("/api/translation/cache/clear", post(clear_cache))
}
