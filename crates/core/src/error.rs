use serde_json::Value;
use thiserror::Error;

/// class 操作的错误类型
///
/// 只在动态入口（JSON / JS 值）出现：类型化接口的参数形态由类型系统保证。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassError {
    /// 参数形态不符合要求，调用在产生任何输出之前中止
    #[error("invalid argument `{argument}`: expected {expected}, found {found}")]
    InvalidArgumentKind {
        argument: &'static str,
        expected: &'static str,
        found: &'static str,
    },
}

impl ClassError {
    pub fn invalid_argument(
        argument: &'static str,
        expected: &'static str,
        value: &Value,
    ) -> Self {
        Self::invalid_kind(argument, expected, value_kind(value))
    }

    /// 值无法表示为 JSON 时（如 JS 函数）直接给出类型名
    pub fn invalid_kind(
        argument: &'static str,
        expected: &'static str,
        found: &'static str,
    ) -> Self {
        tracing::debug!(argument, expected, found, "rejecting class argument");
        ClassError::InvalidArgumentKind {
            argument,
            expected,
            found,
        }
    }
}

/// JSON 值的类型名，用于错误信息
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
