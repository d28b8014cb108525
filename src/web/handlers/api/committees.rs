//! 委员会API处理器

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::Json,
};
use serde_json::Value;

use super::QueryPairs;
use crate::records::{map_records, Committee};
use crate::translation::translate_records;
use crate::web::types::{list_response, ApiResult, AppState};

const ENDPOINT: &str = "committees";

pub async fn list_committees(
    State(state): State<Arc<AppState>>,
    Query(query): Query<QueryPairs>,
) -> ApiResult<Json<Value>> {
    let data = state.upstream.fetch(ENDPOINT, &query).await?;
    let committees = map_records(&data, ENDPOINT, Committee::from_origin);
    tracing::info!("返回 {} 个委员会", committees.len());

    let committees = translate_records(&state.resolver, committees).await;
    Ok(list_response(&data, ENDPOINT, committees))
}
