use crate::dto::Dto;
use catalog_domain::category::Category;
use catalog_domain::entity::Entity;
use catalog_domain::search::SearchOutput;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 目录输出模型
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryOutput {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&Category> for CategoryOutput {
    fn from(category: &Category) -> Self {
        Self {
            id: *category.id(),
            name: category.name().to_string(),
            description: category.description().to_string(),
            is_active: category.is_active(),
            created_at: category.created_at(),
        }
    }
}

impl From<Category> for CategoryOutput {
    fn from(category: Category) -> Self {
        Self::from(&category)
    }
}

impl Dto for CategoryOutput {}

/// 目录分页列表输出
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListCategoriesOutput {
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
    pub items: Vec<CategoryOutput>,
}

impl From<SearchOutput<Category>> for ListCategoriesOutput {
    fn from(output: SearchOutput<Category>) -> Self {
        let output = output.map(|category| CategoryOutput::from(&category));
        Self {
            page: output.current_page(),
            per_page: output.per_page(),
            total: output.total(),
            items: output.into_items(),
        }
    }
}

impl Dto for ListCategoriesOutput {}
