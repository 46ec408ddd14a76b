//! 目录用例
//!
//! - 命令：`CreateCategory`、`UpdateCategory`、`DeleteCategory`
//! - 查询：`GetCategory`、`ListCategories`
//!
//! 处理器对仓储 `R` 与工作单元 `U` 泛型，二者须共享同一事务类型。
//!
mod create_category;
mod delete_category;
mod dto;
mod get_category;
mod list_categories;
mod update_category;

pub use create_category::{CreateCategory, CreateCategoryHandler};
pub use delete_category::{DeleteCategory, DeleteCategoryHandler};
pub use dto::{CategoryOutput, ListCategoriesOutput};
pub use get_category::{GetCategory, GetCategoryHandler};
pub use list_categories::{ListCategories, ListCategoriesHandler};
pub use update_category::{UpdateCategory, UpdateCategoryHandler};
