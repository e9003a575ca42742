use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::prelude::*;

use classweave_core::bootstrap::{Component, Context};
use classweave_core::{dynamic, ClassError};
use classweave_transform::{rewrite_html as rs_rewrite_html, RewriteOptions};

// ── 类型转换 ──────────────────────────────────────────────────

/// JS 值 → JSON 值；undefined 视为 null，由核心层报告参数类型错误
///
/// 无法表示为 JSON 的值（函数、Symbol、BigInt 等）同样报告为参数类型错误。
fn to_json(
    value: JsValue,
    argument: &'static str,
    expected: &'static str,
) -> Result<Value, ClassError> {
    if value.is_undefined() {
        return Ok(Value::Null);
    }
    let kind = js_kind(&value);
    serde_wasm_bindgen::from_value(value)
        .map_err(|_| ClassError::invalid_kind(argument, expected, kind))
}

/// JS `typeof` 的静态名称，用于错误信息
fn js_kind(value: &JsValue) -> &'static str {
    match value.js_typeof().as_string().as_deref() {
        Some("function") => "function",
        Some("symbol") => "symbol",
        Some("bigint") => "bigint",
        Some("object") => "object",
        _ => "unsupported value",
    }
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    let serializer = serde_wasm_bindgen::Serializer::new().serialize_maps_as_objects(true);
    value
        .serialize(&serializer)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

fn parse_options(options: JsValue) -> Result<RewriteOptions, JsError> {
    if options.is_undefined() || options.is_null() {
        Ok(RewriteOptions::default())
    } else {
        serde_wasm_bindgen::from_value(options)
            .map_err(|e| JsError::new(&format!("Invalid options: {}", e)))
    }
}

// ── WASM 导出函数 ─────────────────────────────────────────────

/// 初始化 panic hook（自动调用）
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// 向 class 字符串或属性对象追加类名
///
/// @param existing   - class 字符串，或含 `class` 键的属性对象
/// @param additional - 要追加的 class 字符串
/// @returns 与 `existing` 同形态的结果
#[wasm_bindgen(js_name = "addTo")]
pub fn add_to(existing: JsValue, additional: JsValue) -> Result<JsValue, JsError> {
    let existing = to_json(existing, "existing", dynamic::EXISTING_EXPECTED)?;
    let additional = to_json(additional, "additional", dynamic::ADDITIONAL_EXPECTED)?;
    let result = dynamic::add_to(existing, additional)?;
    to_js(&result)
}

/// 按替换表逐个替换类名
///
/// @param existing     - class 字符串，或含 `class` 键的属性对象
/// @param replacements - `{ 旧类名: 新类名 }`
/// @returns 与 `existing` 同形态的结果
#[wasm_bindgen(js_name = "replace")]
pub fn replace(existing: JsValue, replacements: JsValue) -> Result<JsValue, JsError> {
    let existing = to_json(existing, "existing", dynamic::EXISTING_EXPECTED)?;
    let replacements = to_json(replacements, "replacements", dynamic::REPLACEMENTS_EXPECTED)?;
    let result = dynamic::replace(existing, replacements)?;
    to_js(&result)
}

/// 改写 HTML 片段中的所有 class 属性
///
/// @param source  - HTML 源码字符串
/// @param options - `{ replacements, add, legacy }`，可选
/// @returns `{ html, rewritten }`
#[wasm_bindgen(js_name = "rewriteHtml")]
pub fn rewrite_html(source: &str, options: JsValue) -> Result<JsValue, JsError> {
    let opts = parse_options(options)?;
    to_js(&rs_rewrite_html(source, &opts))
}

/// Bootstrap 组件的 class 字符串
///
/// @param component - `"label" | "badge" | "alert"`
/// @param context   - `"default" | "success" | ...`，可选
/// @returns class 字符串；组件不支持该修饰时返回 undefined
#[wasm_bindgen(js_name = "componentClasses")]
pub fn component_classes(component: JsValue, context: JsValue) -> Result<Option<String>, JsError> {
    let component: Component = serde_wasm_bindgen::from_value(component)
        .map_err(|e| JsError::new(&format!("Invalid component: {}", e)))?;
    let context: Context = if context.is_undefined() || context.is_null() {
        Context::default()
    } else {
        serde_wasm_bindgen::from_value(context)
            .map_err(|e| JsError::new(&format!("Invalid context: {}", e)))?
    };

    Ok(component.classes(context))
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_symbol_is_invalid_argument_kind() {
        let err =
            to_json(JsValue::symbol(None), "existing", dynamic::EXISTING_EXPECTED).unwrap_err();
        assert_eq!(
            err,
            ClassError::InvalidArgumentKind {
                argument: "existing",
                expected: dynamic::EXISTING_EXPECTED,
                found: "symbol",
            }
        );
    }

    #[wasm_bindgen_test]
    fn test_add_to_rejects_symbol_additional() {
        assert!(add_to(JsValue::from_str("btn"), JsValue::symbol(Some("x"))).is_err());
    }
}
