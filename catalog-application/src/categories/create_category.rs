use super::dto::CategoryOutput;
use crate::{
    command::{Command, CommandHandler},
    context::AppContext,
    error::AppResult,
};
use async_trait::async_trait;
use catalog_domain::category::Category;
use catalog_domain::entity::Entity;
use catalog_domain::persist::{Repository, UnitOfWork};
use serde::Deserialize;

/// 创建目录
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateCategory {
    pub name: String,
    pub description: String,
    #[serde(default = "default_is_active")]
    pub is_active: bool,
}

fn default_is_active() -> bool {
    true
}

impl CreateCategory {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            is_active: default_is_active(),
        }
    }

    pub fn with_is_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }
}

impl Command for CreateCategory {
    const NAME: &'static str = "CreateCategory";
    type Output = CategoryOutput;
}

/// 构造并校验聚合 → 登记插入 → 提交
pub struct CreateCategoryHandler<R, U> {
    repository: R,
    unit_of_work: U,
}

impl<R, U> CreateCategoryHandler<R, U> {
    pub fn new(repository: R, unit_of_work: U) -> Self {
        Self {
            repository,
            unit_of_work,
        }
    }
}

#[async_trait]
impl<R, U> CommandHandler<CreateCategory> for CreateCategoryHandler<R, U>
where
    R: Repository<Category>,
    U: UnitOfWork<Transaction = R::Transaction>,
{
    async fn handle(&self, ctx: &AppContext, cmd: CreateCategory) -> AppResult<CategoryOutput> {
        let category = Category::new(cmd.name, cmd.description, cmd.is_active)?;

        let mut tx = self.unit_of_work.begin(&ctx.cancel).await?;
        self.repository
            .create(&mut tx, &category, &ctx.cancel)
            .await?;
        self.unit_of_work.commit(&mut tx, &ctx.cancel).await?;

        tracing::info!(
            command = CreateCategory::NAME,
            correlation_id = ctx.correlation_id.as_deref(),
            category_id = %category.id(),
            "category created"
        );
        Ok(CategoryOutput::from(&category))
    }
}
