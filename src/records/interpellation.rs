//! 质询记录

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{list_field, text_field, value_field, visit_list, visit_scalar, ListEntry, TextValue};
use crate::translation::pipeline::TranslatableRecord;

/// 上游字段名
pub mod origin {
    pub const TERM: &str = "屆";
    pub const LEGISLATORS: &str = "質詢委員";
    pub const MEETING_DESCRIPTION: &str = "會議代碼:str";
    pub const INTERPELLATION_ID: &str = "質詢編號";
    pub const PUBLISH_DATE: &str = "刊登日期";
    pub const SUBJECT: &str = "事由";
    pub const DESCRIPTION: &str = "說明";
    pub const SESSION: &str = "會期";
    pub const MEETING_NUMBER: &str = "會次";
}

/// 书面质询
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interpellation {
    pub term: Option<Value>,
    #[serde(default)]
    pub legislators: Vec<ListEntry>,
    pub meeting_description: Option<TextValue>,
    pub interpellation_id: Option<Value>,
    pub publish_date: Option<Value>,
    pub subject: Option<TextValue>,
    pub description: Option<TextValue>,
    pub session: Option<Value>,
    pub meeting_number: Option<Value>,
}

impl Interpellation {
    pub fn from_origin(raw: &Map<String, Value>) -> Self {
        Self {
            term: value_field(raw, origin::TERM),
            legislators: list_field(raw, origin::LEGISLATORS),
            meeting_description: text_field(raw, origin::MEETING_DESCRIPTION),
            interpellation_id: value_field(raw, origin::INTERPELLATION_ID),
            publish_date: value_field(raw, origin::PUBLISH_DATE),
            subject: text_field(raw, origin::SUBJECT),
            description: text_field(raw, origin::DESCRIPTION),
            session: value_field(raw, origin::SESSION),
            meeting_number: value_field(raw, origin::MEETING_NUMBER),
        }
    }
}

impl TranslatableRecord for Interpellation {
    fn visit_texts_mut(&mut self, visit: &mut dyn FnMut(&mut String)) {
        visit_scalar(&mut self.subject, visit);
        visit_scalar(&mut self.description, visit);
        visit_scalar(&mut self.meeting_description, visit);
        visit_list(&mut self.legislators, visit);
    }
}
