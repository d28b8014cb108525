//! 立法委员API处理器

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use serde_json::Value;

use super::QueryPairs;
use crate::records::{map_records, Legislator};
use crate::translation::{translate_legislator, translate_records};
use crate::web::types::{list_response, ApiError, ApiResult, AppState};

const ENDPOINT: &str = "legislators";

/// 按姓名查找时一次取回的记录数
const NAME_LOOKUP_LIMIT: &str = "100";

/// 列出立法委员
pub async fn list_legislators(
    State(state): State<Arc<AppState>>,
    Query(query): Query<QueryPairs>,
) -> ApiResult<Json<Value>> {
    let data = state.upstream.fetch(ENDPOINT, &query).await?;
    let legislators = map_records(&data, ENDPOINT, Legislator::from_origin);
    tracing::info!("返回 {} 位立法委员", legislators.len());

    let legislators = translate_records(&state.resolver, legislators).await;
    Ok(list_response(&data, ENDPOINT, legislators))
}

/// 按中文或英文姓名查找立法委员
pub async fn get_legislator(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> ApiResult<Json<Legislator>> {
    let query = vec![("limit".to_string(), NAME_LOOKUP_LIMIT.to_string())];
    let data = state.upstream.fetch(ENDPOINT, &query).await?;

    let found = data
        .get(ENDPOINT)
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(Value::as_object)
        .find(|raw| Legislator::origin_matches_name(raw, &name))
        .map(Legislator::from_origin)
        .ok_or(ApiError::NotFound("Legislator not found"))?;

    Ok(Json(translate_legislator(&state.resolver, found).await))
}
