use crate::normalize::tokens;
use crate::types::{ClassLookup, ClassValue};

/// 逐个替换 class 字符串中的类名
///
/// 位置改写而非集合合并：保持原有顺序和个数，不去重、不排序；
/// 替换表中不存在的类名原样保留。
pub fn replace_classes<R>(classes: &str, replacements: &R) -> String
where
    R: ClassLookup + ?Sized,
{
    tokens(classes)
        .map(|token| replacements.lookup(token).unwrap_or(token))
        .collect::<Vec<_>>()
        .join(" ")
}

/// 按替换表改写 class 值
///
/// 形态约定与 [`crate::add_to`] 相同：属性表缺少 `class` 键时创建空串项。
///
/// # 示例
///
/// ```
/// use classweave_core::{replace, ClassValue, ReplacementMap};
///
/// let mut map = ReplacementMap::new();
/// map.insert("btn".to_string(), "button".to_string());
///
/// let result = replace("btn active", &map);
/// assert_eq!(result, ClassValue::Classes("button active".to_string()));
/// ```
pub fn replace<R>(existing: impl Into<ClassValue>, replacements: &R) -> ClassValue
where
    R: ClassLookup + ?Sized,
{
    let existing = existing.into();
    let replaced = replace_classes(existing.class_str(), replacements);
    existing.with_class(replaced)
}
