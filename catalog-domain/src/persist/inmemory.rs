//! 内存版仓储与工作单元
//!
//! 基于 `tokio::sync::RwLock<BTreeMap<Id, A>>` 的轻量实现，满足 `persist` 协议：
//! - 仓储写操作只登记到 `InMemoryTransaction`，读操作只读取已提交状态；
//! - 提交时在写锁内把登记的变更应用到工作副本，全部成功才整体替换；
//! - 等锁过程与取消令牌竞争，取消即放弃且不留下任何变更。
//!
//! 典型用途：测试环境、示例与本地开发。
//!
use crate::aggregate::Aggregate;
use crate::error::{DomainError, DomainResult as Result};
use crate::persist::{Repository, Transaction, TransactionState, UnitOfWork};
use crate::search::{SearchInput, SearchOutput, Searchable, search_in_memory};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

type Records<A> = BTreeMap<<A as crate::entity::Entity>::Id, A>;

/// 已提交记录的共享存储，仓储与工作单元通过克隆共享同一份数据
pub struct InMemoryStore<A: Aggregate> {
    records: Arc<RwLock<Records<A>>>,
}

impl<A: Aggregate> Clone for InMemoryStore<A> {
    fn clone(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
        }
    }
}

impl<A: Aggregate> Default for InMemoryStore<A> {
    fn default() -> Self {
        Self {
            records: Arc::new(RwLock::new(BTreeMap::new())),
        }
    }
}

impl<A: Aggregate> InMemoryStore<A> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 以已提交的初始数据创建存储
    pub fn with_records(records: impl IntoIterator<Item = A>) -> Self {
        let records = records
            .into_iter()
            .map(|aggregate| (aggregate.id().clone(), aggregate))
            .collect();
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }

    pub fn repository(&self) -> InMemoryRepository<A> {
        InMemoryRepository::new(self.clone())
    }

    pub fn unit_of_work(&self) -> InMemoryUnitOfWork<A> {
        InMemoryUnitOfWork::new(self.clone())
    }

    /// 已提交记录数
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    async fn read(
        &self,
        cancel: &CancellationToken,
        operation: &'static str,
    ) -> Result<RwLockReadGuard<'_, Records<A>>> {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(DomainError::Cancelled { operation }),
            guard = self.records.read() => Ok(guard),
        }
    }

    async fn write(
        &self,
        cancel: &CancellationToken,
        operation: &'static str,
    ) -> Result<RwLockWriteGuard<'_, Records<A>>> {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(DomainError::Cancelled { operation }),
            guard = self.records.write() => Ok(guard),
        }
    }
}

enum PendingChange<A: Aggregate> {
    Create(A),
    Update(A),
    Delete(A::Id),
}

impl<A: Aggregate> PendingChange<A> {
    fn apply(self, records: &mut Records<A>) -> Result<()> {
        match self {
            PendingChange::Create(aggregate) => {
                let id = aggregate.id().clone();
                if records.contains_key(&id) {
                    return Err(DomainError::persistence(format!(
                        "{} '{id}' already exists.",
                        A::TYPE
                    )));
                }
                records.insert(id, aggregate);
            }
            PendingChange::Update(aggregate) => {
                let id = aggregate.id().clone();
                if !records.contains_key(&id) {
                    return Err(DomainError::not_found(A::TYPE, id));
                }
                records.insert(id, aggregate);
            }
            PendingChange::Delete(id) => {
                if records.remove(&id).is_none() {
                    return Err(DomainError::not_found(A::TYPE, id));
                }
            }
        }
        Ok(())
    }
}

/// 内存版事务：按登记顺序保存待提交的变更
pub struct InMemoryTransaction<A: Aggregate> {
    id: Uuid,
    state: TransactionState,
    pending: Vec<PendingChange<A>>,
}

impl<A: Aggregate> InMemoryTransaction<A> {
    fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            state: TransactionState::Open,
            pending: Vec::new(),
        }
    }

    /// 已登记、尚未提交的变更数
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    fn schedule(&mut self, change: PendingChange<A>) -> Result<()> {
        self.state.ensure_open()?;
        self.pending.push(change);
        Ok(())
    }

    fn abort(&mut self, reason: &DomainError) {
        self.pending.clear();
        if self.state.transition(TransactionState::RolledBack).is_ok() {
            tracing::warn!(
                tx_id = %self.id(),
                aggregate_type = A::TYPE,
                error = %reason,
                "transaction rolled back"
            );
        }
    }
}

impl<A: Aggregate> Transaction for InMemoryTransaction<A> {
    fn id(&self) -> Uuid {
        self.id
    }

    fn state(&self) -> TransactionState {
        self.state
    }
}

/// 内存版聚合仓储
pub struct InMemoryRepository<A: Aggregate> {
    store: InMemoryStore<A>,
}

impl<A: Aggregate> InMemoryRepository<A> {
    pub fn new(store: InMemoryStore<A>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<A> Repository<A> for InMemoryRepository<A>
where
    A: Searchable,
{
    type Transaction = InMemoryTransaction<A>;

    async fn get(&self, id: &A::Id, cancel: &CancellationToken) -> Result<A> {
        let records = self.store.read(cancel, "get").await?;
        records
            .get(id)
            .cloned()
            .ok_or_else(|| DomainError::not_found(A::TYPE, id))
    }

    async fn create(
        &self,
        tx: &mut Self::Transaction,
        aggregate: &A,
        cancel: &CancellationToken,
    ) -> Result<()> {
        super::ensure_not_cancelled(cancel, "create")?;
        tx.schedule(PendingChange::Create(aggregate.clone()))
    }

    async fn update(
        &self,
        tx: &mut Self::Transaction,
        aggregate: &A,
        cancel: &CancellationToken,
    ) -> Result<()> {
        super::ensure_not_cancelled(cancel, "update")?;
        tx.schedule(PendingChange::Update(aggregate.clone()))
    }

    async fn delete(
        &self,
        tx: &mut Self::Transaction,
        aggregate: &A,
        cancel: &CancellationToken,
    ) -> Result<()> {
        tx.state.ensure_open()?;
        let id = aggregate.id();
        {
            let records = self.store.read(cancel, "delete").await?;
            if !records.contains_key(id) {
                return Err(DomainError::not_found(A::TYPE, id));
            }
        }
        tx.schedule(PendingChange::Delete(id.clone()))
    }

    async fn search(
        &self,
        input: &SearchInput,
        cancel: &CancellationToken,
    ) -> Result<SearchOutput<A>> {
        let records = self.store.read(cancel, "search").await?;
        Ok(search_in_memory(records.values().cloned(), input))
    }
}

/// 内存版工作单元
pub struct InMemoryUnitOfWork<A: Aggregate> {
    store: InMemoryStore<A>,
}

impl<A: Aggregate> InMemoryUnitOfWork<A> {
    pub fn new(store: InMemoryStore<A>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<A> UnitOfWork for InMemoryUnitOfWork<A>
where
    A: Aggregate,
{
    type Transaction = InMemoryTransaction<A>;

    async fn begin(&self, cancel: &CancellationToken) -> Result<Self::Transaction> {
        super::ensure_not_cancelled(cancel, "begin")?;
        Ok(InMemoryTransaction::new())
    }

    async fn commit(&self, tx: &mut Self::Transaction, cancel: &CancellationToken) -> Result<()> {
        tx.state.ensure_open()?;

        let mut records = match self.store.write(cancel, "commit").await {
            Ok(guard) => guard,
            Err(err) => {
                tx.abort(&err);
                return Err(err);
            }
        };

        let pending = std::mem::take(&mut tx.pending);
        let changes = pending.len();
        let mut working = records.clone();
        for change in pending {
            if let Err(err) = change.apply(&mut working) {
                tx.abort(&err);
                return Err(err);
            }
        }

        *records = working;
        tx.state.transition(TransactionState::Committed)?;
        tracing::debug!(
            tx_id = %tx.id(),
            aggregate_type = A::TYPE,
            changes,
            "transaction committed"
        );
        Ok(())
    }

    async fn rollback(&self, tx: &mut Self::Transaction) -> Result<()> {
        tx.state.transition(TransactionState::RolledBack)?;
        let discarded = tx.pending.len();
        tx.pending.clear();
        tracing::debug!(
            tx_id = %tx.id(),
            aggregate_type = A::TYPE,
            discarded,
            "transaction rolled back on request"
        );
        Ok(())
    }
}
