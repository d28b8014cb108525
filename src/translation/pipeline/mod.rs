//! 翻译管道模块
//!
//! 文本过滤规则以及记录的展平、回填

pub mod filters;
pub mod rewriter;

pub use filters::{is_blank, is_printable_ascii, rewrap};
pub use rewriter::{
    flatten, rebuild, translate_bill, translate_committee, translate_interpellation,
    translate_legislator, translate_record, translate_records, TranslatableRecord,
};
