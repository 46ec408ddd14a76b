//! 工作单元与事务状态机
//!
//! 一次用例调用对应一个事务：仓储向事务登记写操作，`commit` 原子地全部生效或全部不生效。
//!
use crate::error::{DomainError, DomainResult as Result};
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

/// 事务状态：仅允许从 `Open` 迁移，`Committed` 与 `RolledBack` 均为终态
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TransactionState {
    #[default]
    Open,
    Committed,
    RolledBack,
}

impl TransactionState {
    pub fn is_open(self) -> bool {
        self == TransactionState::Open
    }

    /// 非 `Open` 状态下返回 `InvalidState`
    pub fn ensure_open(self) -> Result<()> {
        if self.is_open() {
            return Ok(());
        }
        Err(DomainError::invalid_state(format!(
            "transaction is already {self}"
        )))
    }

    /// 迁移到终态；当前状态非 `Open` 或目标为 `Open` 时返回 `InvalidState`
    pub fn transition(&mut self, to: TransactionState) -> Result<()> {
        self.ensure_open()?;
        if to.is_open() {
            return Err(DomainError::invalid_state(
                "transaction can only move to a terminal state",
            ));
        }
        *self = to;
        Ok(())
    }
}

impl fmt::Display for TransactionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TransactionState::Open => "open",
            TransactionState::Committed => "committed",
            TransactionState::RolledBack => "rolled back",
        };
        f.write_str(s)
    }
}

/// 事务（会话）对象，贯穿一次用例调用内的所有仓储写操作
pub trait Transaction: Send + Sync {
    fn id(&self) -> Uuid;

    fn state(&self) -> TransactionState;
}

#[async_trait]
pub trait UnitOfWork: Send + Sync {
    type Transaction: Transaction;

    /// 开启新事务
    async fn begin(&self, cancel: &CancellationToken) -> Result<Self::Transaction>;

    /// 原子地落盘事务中登记的全部写操作，成功后事务进入 `Committed`；
    /// 失败或取消时不应用任何写操作，事务进入 `RolledBack`
    async fn commit(&self, tx: &mut Self::Transaction, cancel: &CancellationToken) -> Result<()>;

    /// 丢弃登记的写操作，事务进入 `RolledBack`
    async fn rollback(&self, tx: &mut Self::Transaction) -> Result<()>;
}

#[async_trait]
impl<T> UnitOfWork for Arc<T>
where
    T: UnitOfWork + ?Sized,
{
    type Transaction = T::Transaction;

    async fn begin(&self, cancel: &CancellationToken) -> Result<Self::Transaction> {
        (**self).begin(cancel).await
    }

    async fn commit(&self, tx: &mut Self::Transaction, cancel: &CancellationToken) -> Result<()> {
        (**self).commit(tx, cancel).await
    }

    async fn rollback(&self, tx: &mut Self::Transaction) -> Result<()> {
        (**self).rollback(tx).await
    }
}
