//! 实体（Entity）基础抽象
//!
//! 为聚合与实体提供统一的标识（Id）能力。
//! 不携带版本号：并发仲裁交由存储引擎自身完成。
//!
use std::{fmt::Display, hash::Hash, str::FromStr};

/// 具备全局唯一、不可变标识的实体抽象
pub trait Entity: Send + Sync {
    /// 实体标识类型，要求可解析、可显示、可克隆且全序（用于稳定排序）
    type Id: FromStr + Clone + Display + Ord + Hash + Send + Sync + 'static;

    /// 获取实体标识
    fn id(&self) -> &Self::Id;
}
