//! 聚合仓储协议
//!
//! 写操作（create/update/delete）只登记到事务中，直到 `UnitOfWork::commit` 才落盘；
//! 读操作（get/search）只读取已提交状态，不受同一次调用中未提交登记的影响。
//!
use crate::error::DomainResult as Result;
use crate::persist::Transaction;
use crate::search::{SearchInput, SearchOutput, Searchable};
use async_trait::async_trait;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

#[async_trait]
pub trait Repository<A>: Send + Sync
where
    A: Searchable,
{
    /// 与配套 `UnitOfWork` 共享的事务类型
    type Transaction: Transaction;

    /// 按标识读取已提交的聚合，不存在时返回 `NotFound`
    async fn get(&self, id: &A::Id, cancel: &CancellationToken) -> Result<A>;

    /// 登记插入
    async fn create(
        &self,
        tx: &mut Self::Transaction,
        aggregate: &A,
        cancel: &CancellationToken,
    ) -> Result<()>;

    /// 登记按标识更新
    async fn update(
        &self,
        tx: &mut Self::Transaction,
        aggregate: &A,
        cancel: &CancellationToken,
    ) -> Result<()>;

    /// 登记按标识删除，标识不存在时返回 `NotFound`
    async fn delete(
        &self,
        tx: &mut Self::Transaction,
        aggregate: &A,
        cancel: &CancellationToken,
    ) -> Result<()>;

    /// 按检索协议过滤、排序并分页
    async fn search(
        &self,
        input: &SearchInput,
        cancel: &CancellationToken,
    ) -> Result<SearchOutput<A>>;
}

#[async_trait]
impl<A, T> Repository<A> for Arc<T>
where
    A: Searchable,
    T: Repository<A> + ?Sized,
{
    type Transaction = T::Transaction;

    async fn get(&self, id: &A::Id, cancel: &CancellationToken) -> Result<A> {
        (**self).get(id, cancel).await
    }

    async fn create(
        &self,
        tx: &mut Self::Transaction,
        aggregate: &A,
        cancel: &CancellationToken,
    ) -> Result<()> {
        (**self).create(tx, aggregate, cancel).await
    }

    async fn update(
        &self,
        tx: &mut Self::Transaction,
        aggregate: &A,
        cancel: &CancellationToken,
    ) -> Result<()> {
        (**self).update(tx, aggregate, cancel).await
    }

    async fn delete(
        &self,
        tx: &mut Self::Transaction,
        aggregate: &A,
        cancel: &CancellationToken,
    ) -> Result<()> {
        (**self).delete(tx, aggregate, cancel).await
    }

    async fn search(
        &self,
        input: &SearchInput,
        cancel: &CancellationToken,
    ) -> Result<SearchOutput<A>> {
        (**self).search(input, cancel).await
    }
}
