//! 外部翻译能力
//!
//! `ExternalTranslationClient` 是解析器唯一依赖的外部接口：输入有序字符串列表，
//! 返回等长、按位置对应的译文列表，或者失败。生产实现为 Google Cloud
//! Translation v2。

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::translation::config::TranslationConfig;
use crate::translation::error::{TranslationError, TranslationResult};

/// 外部翻译客户端
#[async_trait]
pub trait ExternalTranslationClient: Send + Sync {
    /// 批量翻译，结果与输入等长且按位置对应
    async fn translate_batch(
        &self,
        texts: &[String],
        source_lang: &str,
        target_lang: &str,
    ) -> TranslationResult<Vec<String>>;

    /// 翻译单个文本
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> TranslationResult<String> {
        let mut translated = self
            .translate_batch(&[text.to_string()], source_lang, target_lang)
            .await?;
        match translated.pop() {
            Some(value) if translated.is_empty() => Ok(value),
            _ => Err(TranslationError::MalformedResponse(
                "单文本请求返回的译文数量不为1".to_string(),
            )),
        }
    }

    /// 客户端名称，用于日志
    fn name(&self) -> &str;
}

#[derive(Serialize)]
struct GoogleRequest<'a> {
    q: &'a [String],
    source: &'a str,
    target: &'a str,
    format: &'static str,
}

#[derive(Deserialize)]
struct GoogleResponse {
    data: GoogleData,
}

#[derive(Deserialize)]
struct GoogleData {
    translations: Vec<GoogleTranslation>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GoogleTranslation {
    translated_text: String,
}

/// Google Cloud Translation v2 客户端
pub struct GoogleTranslateClient {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl GoogleTranslateClient {
    /// 创建客户端
    pub fn new(api_url: &str, api_key: &str, timeout: Duration) -> TranslationResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TranslationError::Config(format!("创建HTTP客户端失败: {}", e)))?;

        Ok(Self {
            client,
            api_url: api_url.to_string(),
            api_key: api_key.to_string(),
        })
    }

    /// 按配置创建客户端；未配置有效密钥时返回 `None`
    pub fn from_config(config: &TranslationConfig) -> TranslationResult<Option<Self>> {
        match config.usable_api_key() {
            Some(key) => Ok(Some(Self::new(&config.api_url, key, config.timeout())?)),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl ExternalTranslationClient for GoogleTranslateClient {
    async fn translate_batch(
        &self,
        texts: &[String],
        source_lang: &str,
        target_lang: &str,
    ) -> TranslationResult<Vec<String>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let body = GoogleRequest {
            q: texts,
            source: source_lang,
            target: target_lang,
            format: "text",
        };

        let response = self
            .client
            .post(&self.api_url)
            .header("X-Goog-Api-Key", self.api_key.as_str())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(TranslationError::Transport(format!(
                "翻译服务返回状态 {}: {}",
                status, detail
            )));
        }

        let parsed: GoogleResponse = response.json().await?;
        let translations: Vec<String> = parsed
            .data
            .translations
            .into_iter()
            .map(|t| t.translated_text)
            .collect();

        if translations.len() != texts.len() {
            return Err(TranslationError::MalformedResponse(format!(
                "请求 {} 条，返回 {} 条",
                texts.len(),
                translations.len()
            )));
        }

        Ok(translations)
    }

    fn name(&self) -> &str {
        "google-translate-v2"
    }
}
