//! 议案记录

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{list_field, text_field, value_field, visit_list, visit_scalar, ListEntry, NamedEntry, TextValue};
use crate::translation::pipeline::TranslatableRecord;

/// 上游字段名
pub mod origin {
    pub const TERM: &str = "屆";
    pub const BILL_ID: &str = "議案編號";
    pub const MEETING_DESCRIPTION: &str = "會議代碼:str";
    pub const LATEST_PROGRESS_DATE: &str = "最新進度日期";
    pub const LAW_NAMES: &str = "法律編號:str";
    pub const ATTACHMENTS: &str = "相關附件";
    pub const ATTACHMENT_URL: &str = "網址";
    pub const ATTACHMENT_NAME: &str = "名稱";
    pub const BILL_NAME: &str = "議案名稱";
    pub const PROPOSER: &str = "提案單位/提案委員";
    pub const STATUS: &str = "議案狀態";
    pub const CATEGORY: &str = "議案類別";
    pub const SOURCE: &str = "提案來源";
    pub const SESSION: &str = "會期";
    pub const REFERENCE_NUMBER: &str = "字號";
    pub const PROPOSAL_NUMBER: &str = "提案編號";
    pub const URL: &str = "url";
}

/// 议案
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    pub term: Option<Value>,
    pub bill_id: Option<Value>,
    pub meeting_description: Option<TextValue>,
    pub latest_progress_date: Option<Value>,
    #[serde(default)]
    pub law_names: Vec<ListEntry>,
    #[serde(default)]
    pub attachments: Vec<ListEntry>,
    pub bill_name: Option<TextValue>,
    pub proposer: Option<TextValue>,
    pub status: Option<TextValue>,
    pub category: Option<TextValue>,
    pub source: Option<TextValue>,
    pub session: Option<Value>,
    pub reference_number: Option<Value>,
    pub proposal_number: Option<Value>,
    pub url: Option<Value>,
}

impl Bill {
    /// 从上游原始记录映射
    pub fn from_origin(raw: &Map<String, Value>) -> Self {
        Self {
            term: value_field(raw, origin::TERM),
            bill_id: value_field(raw, origin::BILL_ID),
            meeting_description: text_field(raw, origin::MEETING_DESCRIPTION),
            latest_progress_date: value_field(raw, origin::LATEST_PROGRESS_DATE),
            law_names: list_field(raw, origin::LAW_NAMES),
            attachments: attachments(raw),
            bill_name: text_field(raw, origin::BILL_NAME),
            proposer: text_field(raw, origin::PROPOSER),
            status: text_field(raw, origin::STATUS),
            category: text_field(raw, origin::CATEGORY),
            source: text_field(raw, origin::SOURCE),
            session: value_field(raw, origin::SESSION),
            reference_number: value_field(raw, origin::REFERENCE_NUMBER),
            proposal_number: value_field(raw, origin::PROPOSAL_NUMBER),
            url: value_field(raw, origin::URL),
        }
    }
}

/// 附件只保留网址和名称两项，非数组视为没有附件
fn attachments(raw: &Map<String, Value>) -> Vec<ListEntry> {
    let Some(items) = raw.get(origin::ATTACHMENTS).and_then(Value::as_array) else {
        return Vec::new();
    };

    items
        .iter()
        .map(|item| {
            let mut extra = Map::new();
            let mut name = None;
            if let Some(item) = item.as_object() {
                if let Some(url) = value_field(item, origin::ATTACHMENT_URL) {
                    extra.insert("url".to_string(), url);
                }
                match text_field(item, origin::ATTACHMENT_NAME) {
                    Some(TextValue::Text(text)) => name = Some(text),
                    Some(TextValue::Other(value)) => {
                        extra.insert("name".to_string(), value);
                    }
                    None => {}
                }
            }
            ListEntry::Named(NamedEntry { name, extra })
        })
        .collect()
}

impl TranslatableRecord for Bill {
    fn visit_texts_mut(&mut self, visit: &mut dyn FnMut(&mut String)) {
        visit_scalar(&mut self.bill_name, visit);
        visit_scalar(&mut self.status, visit);
        visit_scalar(&mut self.category, visit);
        visit_scalar(&mut self.source, visit);
        visit_scalar(&mut self.proposer, visit);
        visit_scalar(&mut self.meeting_description, visit);
        visit_list(&mut self.law_names, visit);
        visit_list(&mut self.attachments, visit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translation::pipeline::flatten;
    use serde_json::json;

    fn sample() -> Map<String, Value> {
        json!({
            "屆": 11,
            "議案編號": "202110012345",
            "會議代碼:str": "第11屆第1會期第3次會議",
            "法律編號:str": ["所得稅法", "營業稅法"],
            "相關附件": [
                {"網址": "https://example.org/a.pdf", "名稱": "關係文書PDF"},
                {"網址": "https://example.org/b.doc"}
            ],
            "議案名稱": "所得稅法部分條文修正草案",
            "提案單位/提案委員": "行政院",
            "議案狀態": "審查完畢",
            "議案類別": "法律案",
            "提案來源": "政府提案",
            "url": "https://example.org/bill"
        })
        .as_object()
        .cloned()
        .unwrap()
    }

    #[test]
    fn test_attachments_mapping() {
        let bill = Bill::from_origin(&sample());
        assert_eq!(bill.attachments.len(), 2);

        let value = serde_json::to_value(&bill.attachments).unwrap();
        assert_eq!(
            value,
            json!([
                {"name": "關係文書PDF", "url": "https://example.org/a.pdf"},
                {"url": "https://example.org/b.doc"}
            ])
        );
    }

    #[test]
    fn test_attachment_name_keeps_non_string() {
        let raw = json!({"相關附件": [{"網址": "https://x", "名稱": 3}]})
            .as_object()
            .cloned()
            .unwrap();
        let mut bill = Bill::from_origin(&raw);
        assert!(flatten(&mut bill).is_empty());
        assert_eq!(
            serde_json::to_value(&bill.attachments).unwrap(),
            json!([{"name": 3, "url": "https://x"}])
        );
    }

    #[test]
    fn test_attachments_not_array() {
        let raw = json!({"相關附件": "附件"}).as_object().cloned().unwrap();
        assert!(Bill::from_origin(&raw).attachments.is_empty());
    }

    #[test]
    fn test_flatten_order() {
        let mut bill = Bill::from_origin(&sample());
        assert_eq!(
            flatten(&mut bill),
            vec![
                "所得稅法部分條文修正草案",
                "審查完畢",
                "法律案",
                "政府提案",
                "行政院",
                "第11屆第1會期第3次會議",
                "所得稅法",
                "營業稅法",
                "關係文書PDF",
            ]
        );
    }

    #[test]
    fn test_serializes_camel_case() {
        let value = serde_json::to_value(Bill::from_origin(&sample())).unwrap();
        assert_eq!(value["billId"], json!("202110012345"));
        assert_eq!(value["lawNames"][0], json!("所得稅法"));
        assert_eq!(value["latestProgressDate"], Value::Null);
    }
}
