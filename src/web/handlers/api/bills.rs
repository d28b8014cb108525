//! 议案API处理器

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use serde_json::Value;

use super::QueryPairs;
use crate::records::{bill, map_records, Bill};
use crate::translation::{translate_bill, translate_records};
use crate::web::types::{list_response, ApiError, ApiResult, AppState};

const ENDPOINT: &str = "bills";

/// 英文查询参数别名
const QUERY_ALIASES: &[(&str, &str)] = &[
    ("term", bill::origin::TERM),
    ("status", bill::origin::STATUS),
    ("category", bill::origin::CATEGORY),
];

/// 把英文别名改写为上游字段名；别名有值时覆盖同名的中文参数
pub fn apply_query_aliases(mut query: QueryPairs) -> QueryPairs {
    for (alias, origin) in QUERY_ALIASES {
        let has_alias = query.iter().any(|(key, value)| key == alias && !value.is_empty());
        if !has_alias {
            continue;
        }

        query.retain(|(key, _)| key != origin);
        for (key, _) in query.iter_mut().filter(|(key, _)| key == alias) {
            *key = origin.to_string();
        }
    }
    query
}

/// 列出议案
pub async fn list_bills(
    State(state): State<Arc<AppState>>,
    Query(query): Query<QueryPairs>,
) -> ApiResult<Json<Value>> {
    let query = apply_query_aliases(query);
    let data = state.upstream.fetch(ENDPOINT, &query).await?;
    let bills = map_records(&data, ENDPOINT, Bill::from_origin);
    tracing::info!("返回 {} 个议案", bills.len());

    let bills = translate_records(&state.resolver, bills).await;
    Ok(list_response(&data, ENDPOINT, bills))
}

/// 按议案编号取得议案
pub async fn get_bill(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Bill>> {
    let query = vec![(bill::origin::BILL_ID.to_string(), id)];
    let data = state.upstream.fetch(ENDPOINT, &query).await?;

    let found = map_records(&data, ENDPOINT, Bill::from_origin)
        .into_iter()
        .next()
        .ok_or(ApiError::NotFound("Bill not found"))?;

    Ok(Json(translate_bill(&state.resolver, found).await))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> QueryPairs {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_aliases_rewritten() {
        let query = apply_query_aliases(pairs(&[
            ("term", "11"),
            ("page", "2"),
            ("status", "審查完畢"),
        ]));
        assert_eq!(
            query,
            pairs(&[("屆", "11"), ("page", "2"), ("議案狀態", "審查完畢")])
        );
    }

    #[test]
    fn test_alias_overrides_origin_key() {
        let query = apply_query_aliases(pairs(&[("屆", "10"), ("term", "11")]));
        assert_eq!(query, pairs(&[("屆", "11")]));
    }

    #[test]
    fn test_empty_alias_left_alone() {
        let query = apply_query_aliases(pairs(&[("category", ""), ("議案類別", "法律案")]));
        assert_eq!(query, pairs(&[("category", ""), ("議案類別", "法律案")]));
    }
}
