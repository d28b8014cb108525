//! 立法委员记录

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{list_field, text_field, value_field, visit_list, visit_scalar, ListEntry, TextValue};
use crate::translation::pipeline::TranslatableRecord;

/// 上游字段名
pub mod origin {
    pub const TERM: &str = "屆";
    pub const NAME: &str = "委員姓名";
    pub const NAME_EN: &str = "委員英文姓名";
    pub const GENDER: &str = "性別";
    pub const PARTY: &str = "黨籍";
    pub const CAUCUS: &str = "黨團";
    pub const DISTRICT: &str = "選區名稱";
    pub const COMMITTEES: &str = "委員會";
    pub const START_DATE: &str = "到職日";
    pub const EDUCATION: &str = "學歷";
    pub const EXPERIENCE: &str = "經歷";
    pub const PHOTO: &str = "照片位址";
    pub const RESIGNED: &str = "是否離職";
    pub const LEGISLATOR_ID: &str = "歷屆立法委員編號";
}

/// 立法委员
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Legislator {
    pub term: Option<Value>,
    pub name: Option<Value>,
    pub name_en: Option<Value>,
    pub gender: Option<TextValue>,
    pub party: Option<TextValue>,
    pub caucus: Option<TextValue>,
    pub district: Option<TextValue>,
    #[serde(default)]
    pub committees: Vec<ListEntry>,
    pub start_date: Option<Value>,
    #[serde(default)]
    pub education: Vec<ListEntry>,
    #[serde(default)]
    pub experience: Vec<ListEntry>,
    pub photo: Option<Value>,
    pub resigned: Option<TextValue>,
    pub legislator_id: Option<Value>,
}

impl Legislator {
    /// 从上游原始记录映射
    pub fn from_origin(raw: &Map<String, Value>) -> Self {
        Self {
            term: value_field(raw, origin::TERM),
            name: value_field(raw, origin::NAME),
            name_en: value_field(raw, origin::NAME_EN),
            gender: text_field(raw, origin::GENDER),
            party: text_field(raw, origin::PARTY),
            caucus: text_field(raw, origin::CAUCUS),
            district: text_field(raw, origin::DISTRICT),
            committees: list_field(raw, origin::COMMITTEES),
            start_date: value_field(raw, origin::START_DATE),
            education: list_field(raw, origin::EDUCATION),
            experience: list_field(raw, origin::EXPERIENCE),
            photo: value_field(raw, origin::PHOTO),
            resigned: text_field(raw, origin::RESIGNED),
            legislator_id: value_field(raw, origin::LEGISLATOR_ID),
        }
    }

    /// 上游记录是否与给定姓名（中文或英文）完全相同
    pub fn origin_matches_name(raw: &Map<String, Value>, name: &str) -> bool {
        [origin::NAME, origin::NAME_EN]
            .iter()
            .any(|key| raw.get(*key).and_then(Value::as_str) == Some(name))
    }
}

impl TranslatableRecord for Legislator {
    fn visit_texts_mut(&mut self, visit: &mut dyn FnMut(&mut String)) {
        visit_scalar(&mut self.party, visit);
        visit_scalar(&mut self.caucus, visit);
        visit_scalar(&mut self.district, visit);
        visit_scalar(&mut self.gender, visit);
        visit_scalar(&mut self.resigned, visit);
        visit_list(&mut self.committees, visit);
        visit_list(&mut self.education, visit);
        visit_list(&mut self.experience, visit);
    }
}
