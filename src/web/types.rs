//! Web 模块的数据类型定义

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use serde_json::{json, Value};

use crate::network::{LyApiClient, UpstreamError};
use crate::translation::{CacheStats, ResolverStatsSnapshot, TranslationResolver};

/// 应用状态
pub struct AppState {
    pub resolver: TranslationResolver,
    pub upstream: LyApiClient,
}

impl AppState {
    pub fn new(resolver: TranslationResolver, upstream: LyApiClient) -> Self {
        Self { resolver, upstream }
    }
}

/// 分页信息，上游缺省时使用默认值
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub total: Value,
    pub total_pages: Value,
    pub page: Value,
    pub limit: Value,
}

impl Pagination {
    // 上游为 null、0 或空字符串时视同缺省
    fn pick(data: &Value, key: &str, default: u64) -> Value {
        match data.get(key) {
            Some(value) if is_present(value) => value.clone(),
            _ => Value::from(default),
        }
    }

    pub fn from_upstream(data: &Value) -> Self {
        Self {
            total: Self::pick(data, "total", 0),
            total_pages: Self::pick(data, "total_page", 0),
            page: Self::pick(data, "page", 1),
            limit: Self::pick(data, "limit", 20),
        }
    }
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => false,
        Value::Number(n) => n.as_f64() != Some(0.0),
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}

/// 列表响应：分页信息加上以 `key` 命名的记录数组
pub fn list_response<R: Serialize>(data: &Value, key: &str, records: Vec<R>) -> Json<Value> {
    let pagination = Pagination::from_upstream(data);
    Json(json!({
        "total": pagination.total,
        "totalPages": pagination.total_pages,
        "page": pagination.page,
        "limit": pagination.limit,
        key: records,
    }))
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    Upstream(UpstreamError),
    NotFound(&'static str),
}

impl From<UpstreamError> for ApiError {
    fn from(err: UpstreamError) -> Self {
        ApiError::Upstream(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::Upstream(err) => {
                let status =
                    StatusCode::from_u16(err.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                (status, Json(err.to_body())).into_response()
            }
            ApiError::NotFound(message) => (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": true, "message": message })),
            )
                .into_response(),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// 健康检查响应
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// 翻译缓存状态响应
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheStatsResponse {
    #[serde(flatten)]
    pub cache: CacheStats,
    pub hit_rate: f64,
    pub external_enabled: bool,
    pub resolver: ResolverStatsSnapshot,
}

/// 清理缓存响应
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheClearResponse {
    pub success: bool,
    pub message: String,
    pub deleted_count: usize,
}
