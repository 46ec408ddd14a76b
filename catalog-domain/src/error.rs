//! 领域层统一错误定义
//!
//! 聚焦校验、查找、持久化、取消与状态机约束这几类最小必要集合，
//! 便于在各实现层统一转换为 `DomainError`。
//!
use crate::validation::ValidationError;
use thiserror::Error;

/// 统一错误类型（基础库最小必要集）
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DomainError {
    // --- 领域规则 ---
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("invalid state: {reason}")]
    InvalidState { reason: String },

    // --- 查找 ---
    #[error("{aggregate_type} '{id}' not found.")]
    NotFound {
        aggregate_type: &'static str,
        id: String,
    },

    // --- 仓储/持久化 ---
    #[error("persistence error: {reason}")]
    Persistence { reason: String },
    #[error("operation cancelled: {operation}")]
    Cancelled { operation: &'static str },
}

impl DomainError {
    pub fn not_found(aggregate_type: &'static str, id: impl ToString) -> Self {
        DomainError::NotFound {
            aggregate_type,
            id: id.to_string(),
        }
    }

    pub fn persistence(reason: impl Into<String>) -> Self {
        DomainError::Persistence {
            reason: reason.into(),
        }
    }

    pub fn invalid_state(reason: impl Into<String>) -> Self {
        DomainError::InvalidState {
            reason: reason.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, DomainError::NotFound { .. })
    }
}

/// 统一 Result 类型别名
pub type DomainResult<T> = Result<T, DomainError>;
