//! 质询API处理器

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::Json,
};
use serde_json::Value;

use super::QueryPairs;
use crate::records::{map_records, Interpellation};
use crate::translation::translate_records;
use crate::web::types::{list_response, ApiResult, AppState};

const ENDPOINT: &str = "interpellations";

pub async fn list_interpellations(
    State(state): State<Arc<AppState>>,
    Query(query): Query<QueryPairs>,
) -> ApiResult<Json<Value>> {
    let data = state.upstream.fetch(ENDPOINT, &query).await?;
    let interpellations = map_records(&data, ENDPOINT, Interpellation::from_origin);
    tracing::info!("返回 {} 条质询", interpellations.len());

    let interpellations = translate_records(&state.resolver, interpellations).await;
    Ok(list_response(&data, ENDPOINT, interpellations))
}
