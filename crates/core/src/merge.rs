use crate::normalize::normalize_classes;
use crate::types::ClassValue;

/// 合并两个 class 字符串
///
/// 结果与参数顺序无关：拆分、去重后按字节序排序，单空格连接。
/// 两边都为空时返回空串。
pub fn merge_classes(existing: &str, additional: &str) -> String {
    normalize_classes(&[existing, additional]).join(" ")
}

/// 向 class 值追加类名
///
/// - 字符串输入返回合并后的字符串
/// - 属性表输入返回同一张表，只改写 `class` 项（缺失时创建）
///
/// # 示例
///
/// ```
/// use classweave_core::{add_to, ClassValue};
///
/// let merged = add_to("order", "alphabetical");
/// assert_eq!(merged, ClassValue::Classes("alphabetical order".to_string()));
/// ```
pub fn add_to(existing: impl Into<ClassValue>, additional: &str) -> ClassValue {
    let existing = existing.into();
    let merged = merge_classes(existing.class_str(), additional);
    existing.with_class(merged)
}
