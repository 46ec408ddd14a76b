use super::dto::CategoryOutput;
use crate::{
    command::{Command, CommandHandler},
    context::AppContext,
    error::AppResult,
};
use async_trait::async_trait;
use catalog_domain::category::Category;
use catalog_domain::persist::{Repository, UnitOfWork};
use serde::Deserialize;
use uuid::Uuid;

/// 更新目录
///
/// `description` 缺省时沿用当前描述；`is_active` 缺省时保持当前状态。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateCategory {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl UpdateCategory {
    pub fn new(id: Uuid, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
            is_active: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_is_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }
}

impl Command for UpdateCategory {
    const NAME: &'static str = "UpdateCategory";
    type Output = CategoryOutput;
}

/// 读取 → 变更并校验 → 登记更新 → 提交
pub struct UpdateCategoryHandler<R, U> {
    repository: R,
    unit_of_work: U,
}

impl<R, U> UpdateCategoryHandler<R, U> {
    pub fn new(repository: R, unit_of_work: U) -> Self {
        Self {
            repository,
            unit_of_work,
        }
    }
}

#[async_trait]
impl<R, U> CommandHandler<UpdateCategory> for UpdateCategoryHandler<R, U>
where
    R: Repository<Category>,
    U: UnitOfWork<Transaction = R::Transaction>,
{
    async fn handle(&self, ctx: &AppContext, cmd: UpdateCategory) -> AppResult<CategoryOutput> {
        let mut category = self.repository.get(&cmd.id, &ctx.cancel).await?;

        category.update(cmd.name, cmd.description)?;
        match cmd.is_active {
            Some(true) => category.activate(),
            Some(false) => category.deactivate(),
            None => {}
        }

        let mut tx = self.unit_of_work.begin(&ctx.cancel).await?;
        self.repository
            .update(&mut tx, &category, &ctx.cancel)
            .await?;
        self.unit_of_work.commit(&mut tx, &ctx.cancel).await?;

        tracing::info!(
            command = UpdateCategory::NAME,
            correlation_id = ctx.correlation_id.as_deref(),
            category_id = %cmd.id,
            "category updated"
        );
        Ok(CategoryOutput::from(category))
    }
}
