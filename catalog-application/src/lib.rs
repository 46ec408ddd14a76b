//! 目录应用层（catalog-application）
//!
//! 以命令/查询划分的用例编排：每个用例至多一次读取、一次写登记，随后恰好一次提交。
//! 用例只依赖 `catalog_domain::persist` 中的仓储与工作单元协议，具体存储后端由调用方注入。
//!
pub mod categories;
pub mod command;
pub mod context;
pub mod dto;
pub mod error;
pub mod query;

pub use context::AppContext;
pub use error::{AppError, AppResult};
