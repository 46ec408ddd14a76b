//! 字段校验引擎（Validation）
//!
//! 无状态、无副作用的字段级校验函数，入参为待校验的值与字段名。
//! 调用方通过 `?` 串联多个校验，遇到第一个失败即中止（不聚合多条违规）。
//!
//! 长度以 Unicode 标量值（`chars`）计数，而非字节数。
//!
use thiserror::Error;

/// 字段校验失败：携带字段名与固定模板生成的消息，消息原样对外暴露
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    field: String,
    message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// 违规字段名
    pub fn field(&self) -> &str {
        &self.field
    }

    /// 面向用户的错误消息
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// 校验结果类型别名
pub type ValidationResult = Result<(), ValidationError>;

/// 值缺失时失败：`{field} should not be null`
pub fn not_null<T: ?Sized>(value: Option<&T>, field: &str) -> ValidationResult {
    match value {
        Some(_) => Ok(()),
        None => Err(ValidationError::new(
            field,
            format!("{field} should not be null"),
        )),
    }
}

/// 值缺失、为空或全为空白时失败：`{field} should not be empty or null`
pub fn not_null_or_empty(value: Option<&str>, field: &str) -> ValidationResult {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(()),
        _ => Err(ValidationError::new(
            field,
            format!("{field} should not be empty or null"),
        )),
    }
}

/// 长度小于 `min` 时失败：`{field} should be at least {min} characters long`
pub fn min_length(value: &str, min: usize, field: &str) -> ValidationResult {
    if value.chars().count() < min {
        return Err(ValidationError::new(
            field,
            format!("{field} should be at least {min} characters long"),
        ));
    }
    Ok(())
}

/// 长度大于 `max` 时失败：`{field} should be less or equal {max} characters long`
pub fn max_length(value: &str, max: usize, field: &str) -> ValidationResult {
    if value.chars().count() > max {
        return Err(ValidationError::new(
            field,
            format!("{field} should be less or equal {max} characters long"),
        ));
    }
    Ok(())
}
