//! # 立法院资料记录类型
//!
//! 上游记录以中文字段名提供，这里把它们映射成英文字段的结构体，
//! 并为每种记录定义可翻译文本槽位的固定访问顺序。
//!
//! - `legislator` - 立法委员
//! - `bill` - 议案
//! - `committee` - 委员会
//! - `interpellation` - 质询

pub mod bill;
pub mod committee;
pub mod interpellation;
pub mod legislator;

pub use bill::Bill;
pub use committee::Committee;
pub use interpellation::Interpellation;
pub use legislator::Legislator;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 标量字段的值
///
/// 上游偶尔在文本字段里给出数组、布尔值或数字，这些值原样保留，不参与翻译。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextValue {
    Text(String),
    Other(Value),
}

impl TextValue {
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::String(text) => TextValue::Text(text),
            other => TextValue::Other(other),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            TextValue::Text(text) => Some(text),
            TextValue::Other(_) => None,
        }
    }
}

impl From<&str> for TextValue {
    fn from(text: &str) -> Self {
        TextValue::Text(text.to_string())
    }
}

/// 带 `name` 属性的结构化列表元素
///
/// 只有 `name` 会被翻译，其余属性原样保留。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NamedEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// 多态列表字段的元素
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ListEntry {
    /// 纯字符串
    Text(String),
    /// 结构化条目
    Named(NamedEntry),
    /// 其他值（数字、嵌套数组等），不翻译
    Other(Value),
}

impl ListEntry {
    /// 从上游 JSON 值构造
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::String(text) => ListEntry::Text(text),
            Value::Object(mut map) => match map.remove("name") {
                None => ListEntry::Named(NamedEntry { name: None, extra: map }),
                Some(Value::String(name)) => ListEntry::Named(NamedEntry {
                    name: Some(name),
                    extra: map,
                }),
                Some(other) => {
                    map.insert("name".to_string(), other);
                    ListEntry::Other(Value::Object(map))
                }
            },
            other => ListEntry::Other(other),
        }
    }

    /// 该元素的可翻译文本
    pub fn text_mut(&mut self) -> Option<&mut String> {
        match self {
            ListEntry::Text(text) => Some(text),
            ListEntry::Named(entry) => entry.name.as_mut(),
            ListEntry::Other(_) => None,
        }
    }
}

impl From<&str> for ListEntry {
    fn from(text: &str) -> Self {
        ListEntry::Text(text.to_string())
    }
}

// ============================================================================
// 可翻译槽位访问
// ============================================================================

/// 访问标量字段；缺失或非字符串的值跳过
pub(crate) fn visit_scalar(field: &mut Option<TextValue>, visit: &mut dyn FnMut(&mut String)) {
    if let Some(TextValue::Text(text)) = field.as_mut() {
        visit(text);
    }
}

/// 按数组顺序访问列表字段
pub(crate) fn visit_list(list: &mut [ListEntry], visit: &mut dyn FnMut(&mut String)) {
    for entry in list.iter_mut() {
        if let Some(text) = entry.text_mut() {
            visit(text);
        }
    }
}

// ============================================================================
// 上游字段映射
// ============================================================================

/// 读取可翻译的标量字段，缺失或 null 为 `None`
pub fn text_field(raw: &Map<String, Value>, key: &str) -> Option<TextValue> {
    value_field(raw, key).map(TextValue::from_value)
}

/// 读取原样透传的字段
pub fn value_field(raw: &Map<String, Value>, key: &str) -> Option<Value> {
    raw.get(key).filter(|value| !value.is_null()).cloned()
}

/// 读取列表字段；单个标量视为只有一个元素的列表
pub fn list_field(raw: &Map<String, Value>, key: &str) -> Vec<ListEntry> {
    match raw.get(key) {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items.iter().cloned().map(ListEntry::from_value).collect(),
        Some(Value::String(text)) if text.is_empty() => Vec::new(),
        Some(other) => vec![ListEntry::from_value(other.clone())],
    }
}

/// 从上游响应中取出指定键下的记录数组并映射
pub fn map_records<R>(data: &Value, key: &str, map: fn(&Map<String, Value>) -> R) -> Vec<R> {
    data.get(key)
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(Value::as_object).map(map).collect())
        .unwrap_or_default()
}
