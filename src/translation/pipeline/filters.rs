//! 文本过滤器
//!
//! 判断文本是否需要送去翻译，以及在返回译文时保留原文首尾空白。

/// 空字符串或仅含空白
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// 全部字符都在可打印 ASCII 范围内（视为已是英文）
///
/// 调用方应传入已去除首尾空白的文本。
pub fn is_printable_ascii(text: &str) -> bool {
    text.bytes().all(|b| (0x20..=0x7E).contains(&b))
}

/// 原文的首尾空白
fn surrounding_whitespace(original: &str) -> (&str, &str) {
    let start = original.len() - original.trim_start().len();
    let end = original.trim_end().len();
    if start >= end {
        return (original, "");
    }
    (&original[..start], &original[end..])
}

/// 把译文包回原文的首尾空白
///
/// 所有命中路径（词典、缓存、外部翻译）都经过这里，放行路径则直接返回原文，
/// 两种结果的首尾空白因此一致。
pub fn rewrap(original: &str, translated: &str) -> String {
    let (leading, trailing) = surrounding_whitespace(original);
    if leading.is_empty() && trailing.is_empty() {
        return translated.to_string();
    }
    let mut out = String::with_capacity(leading.len() + translated.len() + trailing.len());
    out.push_str(leading);
    out.push_str(translated);
    out.push_str(trailing);
    out
}
