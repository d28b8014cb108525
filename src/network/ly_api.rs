//! 立法院开放资料 API 客户端

use serde_json::{json, Value};
use thiserror::Error;
use url::Url;

/// 默认上游地址
pub const DEFAULT_BASE_URL: &str = "https://v2.ly.govapi.tw";

/// 传输失败时使用的状态码
const TRANSPORT_FAILURE_STATUS: u16 = 500;

/// 上游错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message} (status {status})")]
pub struct UpstreamError {
    pub status: u16,
    pub message: String,
}

impl UpstreamError {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// 返回给调用方的错误体
    pub fn to_body(&self) -> Value {
        json!({
            "error": true,
            "status": self.status,
            "message": self.message,
        })
    }

    /// 上游返回非 2xx 状态
    pub fn from_status(status: u16) -> Self {
        Self::new(status, format!("LY API responded with status {}", status))
    }

    /// 请求或解码失败
    pub fn transport(err: impl std::fmt::Display) -> Self {
        Self::new(TRANSPORT_FAILURE_STATUS, err.to_string())
    }
}

/// 上游 API 客户端
#[derive(Debug, Clone)]
pub struct LyApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl LyApiClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// 拼接请求地址，跳过值为空的查询参数
    pub fn endpoint_url(&self, endpoint: &str, query: &[(String, String)]) -> Result<Url, UpstreamError> {
        let mut url = Url::parse(&format!("{}/{}", self.base_url, endpoint.trim_start_matches('/')))
            .map_err(UpstreamError::transport)?;

        let mut params = query.iter().filter(|(_, value)| !value.is_empty()).peekable();
        if params.peek().is_some() {
            url.query_pairs_mut().extend_pairs(params);
        }

        Ok(url)
    }

    /// 请求上游端点并返回解析后的 JSON
    pub async fn fetch(&self, endpoint: &str, query: &[(String, String)]) -> Result<Value, UpstreamError> {
        let url = self.endpoint_url(endpoint, query)?;
        tracing::debug!("请求上游: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(UpstreamError::transport)?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("上游返回错误状态: {}", status);
            return Err(UpstreamError::from_status(status.as_u16()));
        }

        response.json::<Value>().await.map_err(UpstreamError::transport)
    }
}

impl Default for LyApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
