//! 静态词典
//!
//! 封闭的、人工维护的精确匹配词表，覆盖政党、议案状态、类别、性别等枚举值。
//! 词典优先于缓存和外部翻译。

use std::collections::HashMap;

/// 内置词条 `(中文, English)`
const ENTRIES: &[(&str, &str)] = &[
    // 政党
    ("民主進步黨", "Democratic Progressive Party"),
    ("中國國民黨", "Kuomintang (KMT)"),
    ("台灣民眾黨", "Taiwan People's Party"),
    ("時代力量", "New Power Party"),
    ("無黨籍", "Independent"),
    // 议案状态
    ("排入院會", "Scheduled for Plenary"),
    ("審查完畢", "Review Complete"),
    ("三讀", "Third Reading (Passed)"),
    ("交付審查", "Referred for Review"),
    ("不予審議", "Not Reviewed"),
    ("退回程序", "Returned"),
    ("撤回", "Withdrawn"),
    // 议案类别
    ("法律案", "Legislation"),
    ("預算案", "Budget"),
    ("決議案", "Resolution"),
    ("其他", "Other"),
    // 提案来源
    ("政府提案", "Government Proposal"),
    ("委員提案", "Legislator Proposal"),
    // 性别
    ("男", "Male"),
    ("女", "Female"),
    // 委员会类别
    ("國會改革前舊委員會名稱", "Pre-Reform Committee"),
    ("常設委員會", "Standing Committee"),
    ("特種委員會", "Special Committee"),
    // 是否
    ("是", "Yes"),
    ("否", "No"),
];

/// 静态词典，构建后不可变
#[derive(Debug, Clone)]
pub struct StaticDictionary {
    entries: HashMap<&'static str, &'static str>,
}

impl StaticDictionary {
    /// 使用内置词表创建词典
    pub fn new() -> Self {
        Self::from_entries(ENTRIES)
    }

    /// 使用给定词表创建词典
    pub fn from_entries(entries: &[(&'static str, &'static str)]) -> Self {
        Self {
            entries: entries.iter().copied().collect(),
        }
    }

    /// 精确查找（先去除首尾空白，区分大小写）
    pub fn lookup(&self, text: &str) -> Option<&'static str> {
        self.entries.get(text.trim()).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 遍历所有词条
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.entries.iter().map(|(k, v)| (*k, *v))
    }
}

impl Default for StaticDictionary {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_lookup() {
        let dict = StaticDictionary::new();
        assert_eq!(dict.lookup("中國國民黨"), Some("Kuomintang (KMT)"));
        assert_eq!(dict.lookup("  三讀 "), Some("Third Reading (Passed)"));
        assert_eq!(dict.len(), 25);
    }

    #[test]
    fn test_no_partial_match() {
        let dict = StaticDictionary::new();
        assert_eq!(dict.lookup("中國國民黨黨團"), None);
        assert_eq!(dict.lookup("國民黨"), None);
        assert_eq!(dict.lookup(""), None);
    }

    #[test]
    fn test_custom_entries() {
        let dict = StaticDictionary::from_entries(&[("新詞", "New Word")]);
        assert_eq!(dict.lookup("新詞"), Some("New Word"));
        assert_eq!(dict.lookup("男"), None);
        assert_eq!(dict.iter().count(), 1);
    }
}
