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

/// 删除目录
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct DeleteCategory {
    pub id: Uuid,
}

impl DeleteCategory {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

impl Command for DeleteCategory {
    const NAME: &'static str = "DeleteCategory";
    type Output = ();
}

pub struct DeleteCategoryHandler<R, U> {
    repository: R,
    unit_of_work: U,
}

impl<R, U> DeleteCategoryHandler<R, U> {
    pub fn new(repository: R, unit_of_work: U) -> Self {
        Self {
            repository,
            unit_of_work,
        }
    }
}

#[async_trait]
impl<R, U> CommandHandler<DeleteCategory> for DeleteCategoryHandler<R, U>
where
    R: Repository<Category>,
    U: UnitOfWork<Transaction = R::Transaction>,
{
    async fn handle(&self, ctx: &AppContext, cmd: DeleteCategory) -> AppResult<()> {
        let category = self.repository.get(&cmd.id, &ctx.cancel).await?;

        let mut tx = self.unit_of_work.begin(&ctx.cancel).await?;
        self.repository
            .delete(&mut tx, &category, &ctx.cancel)
            .await?;
        self.unit_of_work.commit(&mut tx, &ctx.cancel).await?;

        tracing::info!(
            command = DeleteCategory::NAME,
            correlation_id = ctx.correlation_id.as_deref(),
            category_id = %cmd.id,
            "category deleted"
        );
        Ok(())
    }
}
