//! 写用例：命令与其处理器
//!
use crate::{context::AppContext, dto::Dto, error::AppResult};
use async_trait::async_trait;

/// 会修改目录状态的请求，如 `CreateCategory`、`DeleteCategory`
///
/// `NAME` 写入日志字段 `command`，应为稳定的常量字符串。
pub trait Command: Send + Sync + 'static {
    const NAME: &'static str;

    /// 成功后的输出，无业务数据时为 `()`
    type Output: Dto;
}

/// 命令处理器：一次调用内至多一次读取、一次写登记，随后恰好一次提交
#[async_trait]
pub trait CommandHandler<C>: Send + Sync
where
    C: Command,
{
    async fn handle(&self, ctx: &AppContext, cmd: C) -> AppResult<C::Output>;
}
