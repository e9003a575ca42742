use phf::phf_map;
use serde::{Deserialize, Serialize};

use crate::merge::add_to;
use crate::normalize::tokens;
use crate::replace::replace;
use crate::types::ClassValue;

/// 旧主题类名到 Bootstrap 类名的映射
///
/// 只做一对一的类名改写；`alert-*` 需要的基础类 `alert` 由 [`bootstrapify`] 补上。
pub static LEGACY_CLASS_RENAMES: phf::Map<&'static str, &'static str> = phf_map! {
    "invisible" => "dimmed",
    "notifyproblem" => "alert-error",
    "notifysuccess" => "alert-success",
};

/// 带上下文修饰的 Bootstrap 组件
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Component {
    Label,
    Badge,
    Alert,
}

/// 组件的上下文修饰（颜色 / 语义）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Context {
    #[default]
    Default,
    Success,
    Warning,
    Important,
    Info,
    Inverse,
    Error,
    Block,
}

impl Context {
    /// 类名后缀；Default 没有修饰类
    pub fn suffix(self) -> Option<&'static str> {
        match self {
            Context::Default => None,
            Context::Success => Some("success"),
            Context::Warning => Some("warning"),
            Context::Important => Some("important"),
            Context::Info => Some("info"),
            Context::Inverse => Some("inverse"),
            Context::Error => Some("error"),
            Context::Block => Some("block"),
        }
    }
}

impl Component {
    /// 基础类名
    pub fn base_class(self) -> &'static str {
        match self {
            Component::Label => "label",
            Component::Badge => "badge",
            Component::Alert => "alert",
        }
    }

    /// 组件是否定义了该上下文修饰
    pub fn supports(self, context: Context) -> bool {
        match self {
            Component::Label | Component::Badge => matches!(
                context,
                Context::Default
                    | Context::Success
                    | Context::Warning
                    | Context::Important
                    | Context::Info
                    | Context::Inverse
            ),
            Component::Alert => matches!(
                context,
                Context::Default
                    | Context::Success
                    | Context::Error
                    | Context::Block
                    | Context::Info
            ),
        }
    }

    /// 组件 + 修饰对应的 class 字符串
    ///
    /// - `Label` + `Success` → `"label label-success"`
    /// - `Alert` + `Default` → `"alert"`
    ///
    /// 组件不支持该修饰时返回 None。
    pub fn classes(self, context: Context) -> Option<String> {
        if !self.supports(context) {
            return None;
        }

        let base = self.base_class();
        let modifier = context
            .suffix()
            .map(|suffix| format!("{}-{}", base, suffix))
            .unwrap_or_default();

        Some(add_to(base, &modifier).into_class_string())
    }
}

/// 将旧主题类名改写为 Bootstrap 类名
///
/// 1. 按 [`LEGACY_CLASS_RENAMES`] 逐个替换
/// 2. 出现任何 `alert-*` 类时补上基础类 `alert`（此时结果排序去重）
pub fn bootstrapify(value: impl Into<ClassValue>) -> ClassValue {
    let renamed = replace(value, &LEGACY_CLASS_RENAMES);

    let needs_alert_base = tokens(renamed.class_str()).any(|token| token.starts_with("alert-"));
    if needs_alert_base {
        add_to(renamed, Component::Alert.base_class())
    } else {
        renamed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AttributeMap;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_label_classes() {
        assert_eq!(
            Component::Label.classes(Context::Success).as_deref(),
            Some("label label-success")
        );
        assert_eq!(Component::Label.classes(Context::Default).as_deref(), Some("label"));
        assert_eq!(
            Component::Badge.classes(Context::Inverse).as_deref(),
            Some("badge badge-inverse")
        );
    }

    #[test]
    fn test_alert_classes() {
        assert_eq!(
            Component::Alert.classes(Context::Error).as_deref(),
            Some("alert alert-error")
        );
        assert_eq!(
            Component::Alert.classes(Context::Block).as_deref(),
            Some("alert alert-block")
        );
    }

    #[test]
    fn test_unsupported_context() {
        assert_eq!(Component::Alert.classes(Context::Inverse), None);
        assert_eq!(Component::Alert.classes(Context::Important), None);
        assert_eq!(Component::Label.classes(Context::Error), None);
        assert_eq!(Component::Badge.classes(Context::Block), None);
    }

    #[test]
    fn test_bootstrapify_notification() {
        assert_eq!(
            bootstrapify("notifyproblem"),
            ClassValue::Classes("alert alert-error".to_string())
        );
        assert_eq!(
            bootstrapify("box notifysuccess"),
            ClassValue::Classes("alert alert-success box".to_string())
        );
    }

    #[test]
    fn test_bootstrapify_only_known_notifications() {
        assert_eq!(
            bootstrapify("notifymessage"),
            ClassValue::Classes("notifymessage".to_string())
        );
        assert_eq!(LEGACY_CLASS_RENAMES.len(), 3);
    }

    #[test]
    fn test_bootstrapify_keeps_order_without_alert() {
        assert_eq!(
            bootstrapify("block  invisible sideblock"),
            ClassValue::Classes("block dimmed sideblock".to_string())
        );
    }

    #[test]
    fn test_bootstrapify_attributes() {
        let mut attrs = AttributeMap::new();
        attrs.insert("id".to_string(), "inst12".to_string());
        attrs.insert("class".to_string(), "block invisible".to_string());

        let ClassValue::Attributes(result) = bootstrapify(attrs) else {
            panic!("expected attribute map");
        };
        assert_eq!(result["class"], "block dimmed");
        assert_eq!(result["id"], "inst12");
    }

    #[test]
    fn test_context_deserialize() {
        let context: Context = serde_json::from_str(r#""success""#).unwrap();
        assert_eq!(context, Context::Success);
    }
}
