//! 动态值入口
//!
//! 宿主通过 JSON / JS 边界传入的参数没有静态类型，需要先校验形态再处理。
//! 校验失败返回 [`ClassError::InvalidArgumentKind`]，不产生部分结果。
//!
//! 属性对象只校验 `class` 项；其它属性可以是任意 JSON 值，原样保留。

use serde_json::{Map, Value};

use crate::error::ClassError;
use crate::merge::merge_classes;
use crate::replace::replace_classes;
use crate::types::{ReplacementMap, CLASS_ATTR};

pub const EXISTING_EXPECTED: &str = "a class string or an attribute object";
pub const CLASS_ENTRY_EXPECTED: &str = "a class string in the `class` attribute";
pub const ADDITIONAL_EXPECTED: &str = "a class string";
pub const REPLACEMENTS_EXPECTED: &str = "an object mapping class names to class names";

/// 已校验的 `existing` 参数
enum Target {
    Classes(String),
    Attributes(Map<String, Value>),
}

impl Target {
    fn parse(value: Value) -> Result<Self, ClassError> {
        match value {
            Value::String(classes) => Ok(Target::Classes(classes)),
            Value::Object(attrs) => match attrs.get(CLASS_ATTR) {
                None | Some(Value::String(_)) => Ok(Target::Attributes(attrs)),
                Some(other) => Err(ClassError::invalid_argument(
                    "existing",
                    CLASS_ENTRY_EXPECTED,
                    other,
                )),
            },
            other => Err(ClassError::invalid_argument(
                "existing",
                EXISTING_EXPECTED,
                &other,
            )),
        }
    }

    fn class_str(&self) -> &str {
        match self {
            Target::Classes(classes) => classes,
            Target::Attributes(attrs) => {
                attrs.get(CLASS_ATTR).and_then(Value::as_str).unwrap_or("")
            }
        }
    }

    /// 只改写 class，保持形态；缺少 `class` 键时追加到末尾
    fn with_class(self, classes: String) -> Value {
        match self {
            Target::Classes(_) => Value::String(classes),
            Target::Attributes(mut attrs) => {
                attrs.insert(CLASS_ATTR.to_string(), Value::String(classes));
                Value::Object(attrs)
            }
        }
    }
}

/// 校验替换表：必须是键值均为字符串的对象（严格校验，不做类型转换）
pub fn replacement_map(value: &Value) -> Result<ReplacementMap, ClassError> {
    value
        .as_object()
        .and_then(|object| {
            object
                .iter()
                .map(|(key, value)| value.as_str().map(|s| (key.clone(), s.to_string())))
                .collect()
        })
        .ok_or_else(|| ClassError::invalid_argument("replacements", REPLACEMENTS_EXPECTED, value))
}

/// [`crate::add_to`] 的动态版本
pub fn add_to(existing: Value, additional: Value) -> Result<Value, ClassError> {
    let target = Target::parse(existing)?;
    let additional = match additional {
        Value::String(additional) => additional,
        other => {
            return Err(ClassError::invalid_argument(
                "additional",
                ADDITIONAL_EXPECTED,
                &other,
            ))
        }
    };

    let merged = merge_classes(target.class_str(), &additional);
    Ok(target.with_class(merged))
}

/// [`crate::replace`] 的动态版本
pub fn replace(existing: Value, replacements: Value) -> Result<Value, ClassError> {
    let target = Target::parse(existing)?;
    let replacements = replacement_map(&replacements)?;

    let replaced = replace_classes(target.class_str(), &replacements);
    Ok(target.with_class(replaced))
}
