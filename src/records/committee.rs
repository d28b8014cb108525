//! 委员会记录

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{text_field, value_field, visit_scalar, TextValue};
use crate::translation::pipeline::TranslatableRecord;

/// 上游字段名
pub mod origin {
    pub const ID: &str = "委員會代號";
    pub const NAME: &str = "委員會名稱";
    pub const RESPONSIBILITIES: &str = "委員會職掌";
    pub const CATEGORY_ID: &str = "委員會類別";
    pub const CATEGORY: &str = "委員會類別:str";
}

/// 委员会
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Committee {
    pub id: Option<Value>,
    pub name: Option<TextValue>,
    pub responsibilities: Option<TextValue>,
    pub category_id: Option<Value>,
    pub category: Option<TextValue>,
}

impl Committee {
    pub fn from_origin(raw: &Map<String, Value>) -> Self {
        Self {
            id: value_field(raw, origin::ID),
            name: text_field(raw, origin::NAME),
            responsibilities: text_field(raw, origin::RESPONSIBILITIES),
            category_id: value_field(raw, origin::CATEGORY_ID),
            category: text_field(raw, origin::CATEGORY),
        }
    }
}

impl TranslatableRecord for Committee {
    fn visit_texts_mut(&mut self, visit: &mut dyn FnMut(&mut String)) {
        visit_scalar(&mut self.name, visit);
        visit_scalar(&mut self.responsibilities, visit);
        visit_scalar(&mut self.category, visit);
    }
}
