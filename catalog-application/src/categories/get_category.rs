use super::dto::CategoryOutput;
use crate::{
    context::AppContext,
    error::AppResult,
    query::{Query, QueryHandler},
};
use async_trait::async_trait;
use catalog_domain::category::Category;
use catalog_domain::persist::Repository;
use serde::Deserialize;
use uuid::Uuid;

/// 按标识读取目录
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct GetCategory {
    pub id: Uuid,
}

impl GetCategory {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

impl Query for GetCategory {
    const NAME: &'static str = "GetCategory";
    type Dto = CategoryOutput;
}

pub struct GetCategoryHandler<R> {
    repository: R,
}

impl<R> GetCategoryHandler<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> QueryHandler<GetCategory> for GetCategoryHandler<R>
where
    R: Repository<Category>,
{
    async fn handle(&self, ctx: &AppContext, q: GetCategory) -> AppResult<CategoryOutput> {
        let category = self.repository.get(&q.id, &ctx.cancel).await?;
        tracing::debug!(query = GetCategory::NAME, category_id = %q.id, "category loaded");
        Ok(CategoryOutput::from(category))
    }
}
