pub mod html;

use classweave_core::bootstrap::bootstrapify;
use classweave_core::{add_to, replace, ClassValue, ReplacementMap};
use serde::{Deserialize, Serialize};

// Re-exports
pub use html::rewrite_class_attrs;

/// HTML 改写选项
///
/// 每个 class 属性依次经过：旧类名改写 → 替换表 → 追加类名。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RewriteOptions {
    /// 逐个替换的类名表（默认空）
    pub replacements: ReplacementMap,
    /// 追加到每个 class 属性的类名（默认不追加）
    ///
    /// 设置后该属性会被排序去重，否则只折叠空白、保持原顺序。
    pub add: Option<String>,
    /// 是否先应用内置的旧主题类名改写表（默认 false）
    pub legacy: bool,
}

/// 改写结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RewriteResult {
    /// 改写后的 HTML
    pub html: String,
    /// 值发生变化的 class 属性个数
    pub rewritten: usize,
}

/// 按选项改写单个 class 属性值
pub fn rewrite_classes(classes: &str, options: &RewriteOptions) -> String {
    let mut value = ClassValue::from(classes);

    if options.legacy {
        value = bootstrapify(value);
    }

    // 替换表为空时也要走一遍，用于折叠空白
    value = replace(value, &options.replacements);

    if let Some(extra) = &options.add {
        value = add_to(value, extra);
    }

    value.into_class_string()
}

/// 改写 HTML 片段中所有 class 属性
///
/// # 示例
///
/// ```
/// use classweave_transform::{rewrite_html, RewriteOptions};
///
/// let mut options = RewriteOptions::default();
/// options.replacements.insert("well".to_string(), "panel".to_string());
///
/// let result = rewrite_html(r#"<div class="well  large">x</div>"#, &options);
/// assert_eq!(result.html, r#"<div class="panel large">x</div>"#);
/// assert_eq!(result.rewritten, 1);
/// ```
pub fn rewrite_html(source: &str, options: &RewriteOptions) -> RewriteResult {
    let mut rewritten = 0;

    let html = rewrite_class_attrs(source, |classes| {
        let new_classes = rewrite_classes(classes, options);
        if new_classes != classes {
            tracing::trace!(from = classes, to = %new_classes, "rewrote class attribute");
            rewritten += 1;
        }
        new_classes
    });

    RewriteResult { html, rewritten }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_options_only_collapse() {
        let options = RewriteOptions::default();
        assert_eq!(rewrite_classes("  b   a b ", &options), "b a b");
        assert_eq!(rewrite_classes("a b", &options), "a b");
    }

    #[test]
    fn test_add_sorts_attribute() {
        let options = RewriteOptions {
            add: Some("btn".to_string()),
            ..Default::default()
        };
        assert_eq!(rewrite_classes("z a", &options), "a btn z");
        assert_eq!(rewrite_classes("", &options), "btn");
    }

    #[test]
    fn test_legacy_before_replacements() {
        let mut replacements = ReplacementMap::new();
        replacements.insert("dimmed".to_string(), "muted".to_string());
        let options = RewriteOptions {
            replacements,
            legacy: true,
            ..Default::default()
        };
        assert_eq!(rewrite_classes("block invisible", &options), "block muted");
    }

    #[test]
    fn test_rewrite_counts_changes() {
        let options = RewriteOptions {
            legacy: true,
            ..Default::default()
        };
        let html = r#"<div class="notifyproblem">x</div><p class="lead">y</p>"#;
        let result = rewrite_html(html, &options);

        assert_eq!(
            result.html,
            r#"<div class="alert alert-error">x</div><p class="lead">y</p>"#
        );
        assert_eq!(result.rewritten, 1);
    }

    #[test]
    fn test_empty_class_attribute_kept() {
        let result = rewrite_html(r#"<i class="   "></i>"#, &RewriteOptions::default());
        assert_eq!(result.html, r#"<i class=""></i>"#);
        assert_eq!(result.rewritten, 1);
    }

    #[test]
    fn test_options_deserialize() {
        let options: RewriteOptions =
            serde_json::from_str(r#"{"replacements": {"btn": "button"}, "legacy": true}"#)
                .unwrap();
        assert_eq!(options.replacements["btn"], "button");
        assert!(options.legacy);
        assert_eq!(options.add, None);

        let options: RewriteOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, RewriteOptions::default());
    }
}
