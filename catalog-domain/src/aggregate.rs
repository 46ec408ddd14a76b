//! 聚合（Aggregate）抽象
//!
//! 聚合是带标识的实体，其不变量在每次构造与变更时强制校验。
//! 仓储以聚合为单位读写，`TYPE` 用于错误消息与日志。
//!
use crate::entity::Entity;

/// 聚合根接口
pub trait Aggregate: Entity + Clone + Send + Sync + 'static {
    /// 聚合的稳定类型名（如 `"Category"`）
    const TYPE: &'static str;
}
