//! 目录领域层基础库（catalog-domain）
//!
//! 提供目录（Category）管理所需的领域抽象与构件：
//! - 字段校验引擎（`validation`），构造与变更共用同一套规则
//! - 实体（`entity`）与聚合（`aggregate`）建模，以及 `Category` 聚合（`category`）
//! - 与聚合类型无关的检索/分页协议（`search`）
//! - 仓储与工作单元协议（`persist`），以及可选的内存版实现（特性 `inmemory`）
//!
//! 本 crate 不依赖任何具体存储或传输实现，仅定义领域层接口与最小必要的错误类型，
//! 任何满足 `persist` 协议语义的存储后端都可以接入。
//!
//! 典型用法：
//! 1. 通过 `Category::new` 构造并校验聚合；
//! 2. 通过 `UnitOfWork::begin` 开启事务，交给 `Repository` 登记写操作；
//! 3. 调用 `UnitOfWork::commit` 一次性落盘；
//! 4. 读侧通过 `Repository::search` 获得 `SearchOutput`。
//!
pub mod aggregate;
pub mod category;
pub mod entity;
pub mod error;
pub mod persist;
pub mod search;
pub mod validation;
