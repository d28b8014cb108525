//! 记录重写
//!
//! 每种记录只声明一次可翻译槽位的访问顺序，展平和回填都走同一次遍历，
//! 因此两者的顺序天然一致。

use futures::future::join_all;

use crate::records::{Bill, Committee, Interpellation, Legislator};
use crate::translation::core::TranslationResolver;

/// 含有可翻译文本槽位的记录
pub trait TranslatableRecord {
    /// 按固定顺序可变地访问每个可翻译文本槽位
    ///
    /// 先访问标量字段，再逐个访问列表字段的元素；缺失的字段不访问。
    fn visit_texts_mut(&mut self, visit: &mut dyn FnMut(&mut String));
}

/// 按槽位顺序展平成文本列表
pub fn flatten<R: TranslatableRecord + ?Sized>(record: &mut R) -> Vec<String> {
    let mut texts = Vec::new();
    record.visit_texts_mut(&mut |text| texts.push(text.clone()));
    texts
}

/// 按相同顺序把文本写回记录
///
/// `texts` 比槽位少时，多出的槽位保持原值。
pub fn rebuild<R: TranslatableRecord + ?Sized>(record: &mut R, texts: Vec<String>) {
    let mut texts = texts.into_iter();
    record.visit_texts_mut(&mut |slot| {
        if let Some(text) = texts.next() {
            *slot = text;
        }
    });
}

/// 翻译单条记录，每条记录只调用一次批量解析
pub async fn translate_record<R: TranslatableRecord + ?Sized>(
    resolver: &TranslationResolver,
    record: &mut R,
) {
    let texts = flatten(record);
    if texts.is_empty() {
        return;
    }

    let translated = resolver.translate_batch(&texts).await;
    rebuild(record, translated);
}

/// 并发翻译一页记录
pub async fn translate_records<R: TranslatableRecord>(
    resolver: &TranslationResolver,
    mut records: Vec<R>,
) -> Vec<R> {
    tracing::debug!("翻译 {} 条记录", records.len());
    join_all(
        records
            .iter_mut()
            .map(|record| translate_record(resolver, record)),
    )
    .await;
    records
}

pub async fn translate_legislator(resolver: &TranslationResolver, mut legislator: Legislator) -> Legislator {
    translate_record(resolver, &mut legislator).await;
    legislator
}

pub async fn translate_bill(resolver: &TranslationResolver, mut bill: Bill) -> Bill {
    translate_record(resolver, &mut bill).await;
    bill
}

pub async fn translate_committee(resolver: &TranslationResolver, mut committee: Committee) -> Committee {
    translate_record(resolver, &mut committee).await;
    committee
}

pub async fn translate_interpellation(
    resolver: &TranslationResolver,
    mut interpellation: Interpellation,
) -> Interpellation {
    translate_record(resolver, &mut interpellation).await;
    interpellation
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{ListEntry, NamedEntry, TextValue};
    use crate::translation::storage::{StaticDictionary, TranslationCache};
    use serde_json::{json, Map};

    fn resolver() -> TranslationResolver {
        TranslationResolver::new(StaticDictionary::new(), TranslationCache::new())
    }

    /// 把每个文本替换成自身，结果应与原记录完全相同
    fn identity_round_trip<R: TranslatableRecord + Clone + PartialEq + std::fmt::Debug>(record: R) {
        let mut rebuilt = record.clone();
        let texts = flatten(&mut rebuilt);
        rebuild(&mut rebuilt, texts);
        assert_eq!(rebuilt, record);
    }

    #[test]
    fn test_identity_round_trips() {
        identity_round_trip(Legislator {
            party: Some(TextValue::from("民主進步黨")),
            gender: Some(TextValue::from("女")),
            committees: vec![
                ListEntry::from("外交及國防委員會"),
                ListEntry::Named(NamedEntry {
                    name: Some("經濟委員會".to_string()),
                    extra: Map::new(),
                }),
                ListEntry::Other(json!(3)),
            ],
            education: vec![ListEntry::from("政治大學")],
            ..Default::default()
        });
        identity_round_trip(Bill {
            bill_name: Some(TextValue::from("預算案")),
            law_names: vec![ListEntry::from("預算法")],
            ..Default::default()
        });
        identity_round_trip(Committee {
            name: Some(TextValue::from("教育及文化委員會")),
            ..Default::default()
        });
        identity_round_trip(Interpellation {
            subject: Some(TextValue::from("質詢")),
            legislators: vec![ListEntry::from("王小明")],
            ..Default::default()
        });
    }

    #[test]
    fn test_rebuild_replaces_only_named_entry_name() {
        let mut extra = Map::new();
        extra.insert("url".to_string(), json!("https://example.org/a.pdf"));
        let mut bill = Bill {
            status: Some(TextValue::from("交付審查")),
            attachments: vec![ListEntry::Named(NamedEntry {
                name: Some("附件".to_string()),
                extra: extra.clone(),
            })],
            ..Default::default()
        };

        rebuild(&mut bill, vec!["Referred".to_string(), "Attachment".to_string()]);
        assert_eq!(bill.status, Some(TextValue::from("Referred")));
        assert_eq!(
            bill.attachments,
            vec![ListEntry::Named(NamedEntry {
                name: Some("Attachment".to_string()),
                extra,
            })]
        );
    }

    #[tokio::test]
    async fn test_dictionary_party_without_external() {
        let legislator = Legislator {
            party: Some(TextValue::from("中國國民黨")),
            ..Default::default()
        };
        let translated = translate_legislator(&resolver(), legislator).await;
        assert_eq!(translated.party, Some(TextValue::from("Kuomintang (KMT)")));
    }

    #[tokio::test]
    async fn test_translate_records_keeps_order() {
        let committees = vec![
            Committee {
                category: Some(TextValue::from("常設委員會")),
                ..Default::default()
            },
            Committee {
                category: Some(TextValue::from("特種委員會")),
                ..Default::default()
            },
        ];
        let translated = translate_records(&resolver(), committees).await;
        assert_eq!(translated[0].category, Some(TextValue::from("Standing Committee")));
        assert_eq!(translated[1].category, Some(TextValue::from("Special Committee")));
    }

    #[tokio::test]
    async fn test_untranslatable_text_passes_through() {
        let interpellation = Interpellation {
            subject: Some(TextValue::from("未知的事由")),
            legislators: vec![ListEntry::from("Wang")],
            ..Default::default()
        };
        let translated = translate_interpellation(&resolver(), interpellation.clone()).await;
        assert_eq!(translated, interpellation);
    }
}
