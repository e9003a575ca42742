use std::collections::{BTreeMap, HashMap};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// 属性表中 class 属性的键名
pub const CLASS_ATTR: &str = "class";

/// HTML 属性表：属性名 → 属性值
///
/// 使用 IndexMap 保持插入顺序，改写 class 后其它属性原样输出
pub type AttributeMap = IndexMap<String, String>;

/// 类名替换表：旧类名 → 新类名
pub type ReplacementMap = IndexMap<String, String>;

/// class 属性值的两种形态
///
/// 宿主可能直接给出类名字符串，也可能给出整张属性表；
/// 操作结果的形态始终与输入一致。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClassValue {
    /// 空白分隔的类名字符串（如 `"btn active"`）
    Classes(String),
    /// 含 `class` 键的属性表
    Attributes(AttributeMap),
}

impl ClassValue {
    /// 当前的 class 字符串；属性表缺少 `class` 键时视为空串
    pub fn class_str(&self) -> &str {
        match self {
            ClassValue::Classes(classes) => classes,
            ClassValue::Attributes(attrs) => attrs.get(CLASS_ATTR).map_or("", String::as_str),
        }
    }

    /// 用新的 class 字符串替换当前值，保持形态不变
    ///
    /// 属性表缺少 `class` 键时追加到末尾，其余键不动。
    pub fn with_class(self, classes: String) -> Self {
        match self {
            ClassValue::Classes(_) => ClassValue::Classes(classes),
            ClassValue::Attributes(mut attrs) => {
                attrs.insert(CLASS_ATTR.to_string(), classes);
                ClassValue::Attributes(attrs)
            }
        }
    }

    /// 取出 class 字符串，丢弃其它属性
    pub fn into_class_string(self) -> String {
        match self {
            ClassValue::Classes(classes) => classes,
            ClassValue::Attributes(mut attrs) => {
                attrs.shift_remove(CLASS_ATTR).unwrap_or_default()
            }
        }
    }

    pub fn is_attributes(&self) -> bool {
        matches!(self, ClassValue::Attributes(_))
    }
}

impl From<String> for ClassValue {
    fn from(classes: String) -> Self {
        ClassValue::Classes(classes)
    }
}

impl From<&str> for ClassValue {
    fn from(classes: &str) -> Self {
        ClassValue::Classes(classes.to_string())
    }
}

impl From<AttributeMap> for ClassValue {
    fn from(attrs: AttributeMap) -> Self {
        ClassValue::Attributes(attrs)
    }
}

/// 类名查找接口
///
/// 使用 trait 而不是具体类型，替换表可以是运行时构造的 map，
/// 也可以是编译期生成的 phf 表。
pub trait ClassLookup {
    fn lookup(&self, token: &str) -> Option<&str>;
}

impl ClassLookup for IndexMap<String, String> {
    fn lookup(&self, token: &str) -> Option<&str> {
        self.get(token).map(String::as_str)
    }
}

impl<S: std::hash::BuildHasher> ClassLookup for HashMap<String, String, S> {
    fn lookup(&self, token: &str) -> Option<&str> {
        self.get(token).map(String::as_str)
    }
}

impl ClassLookup for BTreeMap<String, String> {
    fn lookup(&self, token: &str) -> Option<&str> {
        self.get(token).map(String::as_str)
    }
}

impl ClassLookup for phf::Map<&'static str, &'static str> {
    fn lookup(&self, token: &str) -> Option<&str> {
        self.get(token).copied()
    }
}
