//! 仓储与工作单元（persist）
//!
//! 定义所有用例共用的持久化协议：
//! - 聚合仓储（`Repository`）：按标识读取、登记写操作、按检索协议分页查询；
//! - 工作单元（`UnitOfWork`）：以事务（`Transaction`）为载体，一次性原子提交登记的写操作；
//! - 事务状态机（`TransactionState`）：Open → Committed | RolledBack，两个终态不可再迁移。
//!
//! 每个操作都接收取消令牌；提交前取消时，已登记的写操作一律不生效。
//! 该模块聚焦协议本身，具体存储后端由上层实现并注入；
//! 特性 `inmemory` 提供一个满足协议语义的内存版实现。
//!
#[cfg(feature = "inmemory")]
mod inmemory;
mod repository;
mod unit_of_work;

#[cfg(feature = "inmemory")]
pub use inmemory::{InMemoryRepository, InMemoryStore, InMemoryTransaction, InMemoryUnitOfWork};
pub use repository::Repository;
pub use unit_of_work::{Transaction, TransactionState, UnitOfWork};

use crate::error::{DomainError, DomainResult};
use tokio_util::sync::CancellationToken;

/// 令牌已取消时返回 `DomainError::Cancelled`
pub fn ensure_not_cancelled(cancel: &CancellationToken, operation: &'static str) -> DomainResult<()> {
    if cancel.is_cancelled() {
        return Err(DomainError::Cancelled { operation });
    }
    Ok(())
}
