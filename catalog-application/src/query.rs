//! 读用例：查询与其处理器
//!
use crate::{context::AppContext, dto::Dto, error::AppResult};
use async_trait::async_trait;

/// 只读请求，如 `GetCategory`、`ListCategories`
pub trait Query: Send + Sync + 'static {
    /// 写入日志字段 `query`
    const NAME: &'static str;

    type Dto: Dto;
}

/// 查询处理器：只读取已提交状态，不开启事务
#[async_trait]
pub trait QueryHandler<Q>: Send + Sync
where
    Q: Query,
{
    async fn handle(&self, ctx: &AppContext, q: Q) -> AppResult<Q::Dto>;
}
