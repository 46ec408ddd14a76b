use serde::Serialize;

/// 用例输出载体：只含可序列化的平铺字段，不暴露领域聚合本身
pub trait Dto: Serialize + Send + Sync + 'static {}

/// 无输出的命令（如删除）
impl Dto for () {}
