use std::collections::BTreeSet;

/// 按 ASCII 空白拆分类名，丢弃空串
///
/// HTML 的 class 列表只以 ASCII 空白分隔，因此不使用 `split_whitespace`。
pub fn tokens(classes: &str) -> impl Iterator<Item = &str> {
    classes.split_ascii_whitespace()
}

/// 规范化类名列表
///
/// 功能：
/// 1. 合并所有输入，按空白拆分
/// 2. 去除空字符串
/// 3. 去重
/// 4. 排序（按字节序，保证确定性）
pub fn normalize_classes(classes: &[&str]) -> Vec<String> {
    let mut unique_classes = BTreeSet::new();

    for class_str in classes {
        unique_classes.extend(tokens(class_str));
    }

    unique_classes.into_iter().map(str::to_string).collect()
}

/// 单个 class 字符串的规范形式：去重、排序、单空格连接
pub fn normalize(classes: &str) -> String {
    normalize_classes(&[classes]).join(" ")
}

/// 只折叠空白，保留原有顺序和重复项
pub fn collapse(classes: &str) -> String {
    tokens(classes).collect::<Vec<_>>().join(" ")
}
