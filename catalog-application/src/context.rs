use tokio_util::sync::CancellationToken;

/// 应用层上下文（Application Context）
///
/// 承载一次用例调用（命令/查询）所需的横切信息：
/// - 关联追踪 ID（`correlation_id`），写入日志字段；
/// - 取消令牌（`cancel`），透传给每一次仓储与工作单元调用，提交前取消则不落盘任何写操作。
///
/// 典型用法：
/// ```rust
/// use catalog_application::context::AppContext;
///
/// let ctx = AppContext::new().with_correlation_id("cor-123");
/// assert_eq!(ctx.correlation_id.as_deref(), Some("cor-123"));
/// assert!(!ctx.cancel.is_cancelled());
/// ```
#[derive(Clone, Debug, Default)]
pub struct AppContext {
    /// 链路追踪 ID（可选）
    pub correlation_id: Option<String>,
    /// 本次调用的取消信号
    pub cancel: CancellationToken,
}

impl AppContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_correlation_id(mut self, correlation_id: impl Into<String>) -> Self {
        self.correlation_id = Some(correlation_id.into());
        self
    }

    pub fn with_cancel(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }
}
