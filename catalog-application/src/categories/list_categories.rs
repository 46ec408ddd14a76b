use super::dto::ListCategoriesOutput;
use crate::{
    context::AppContext,
    error::AppResult,
    query::{Query, QueryHandler},
};
use async_trait::async_trait;
use catalog_domain::category::Category;
use catalog_domain::persist::Repository;
use catalog_domain::search::{DEFAULT_PER_PAGE, SearchInput, SearchOrder};
use serde::Deserialize;

/// 分页列出目录
///
/// `sort` 为排序字段名（`name`、`id`、`createdAt`），无法识别时按名称排序。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ListCategories {
    pub page: u32,
    pub per_page: u32,
    pub search: String,
    pub sort: String,
    pub dir: SearchOrder,
}

impl Default for ListCategories {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
            search: String::new(),
            sort: String::new(),
            dir: SearchOrder::Asc,
        }
    }
}

impl Query for ListCategories {
    const NAME: &'static str = "ListCategories";
    type Dto = ListCategoriesOutput;
}

pub struct ListCategoriesHandler<R> {
    repository: R,
}

impl<R> ListCategoriesHandler<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> QueryHandler<ListCategories> for ListCategoriesHandler<R>
where
    R: Repository<Category>,
{
    async fn handle(&self, ctx: &AppContext, q: ListCategories) -> AppResult<ListCategoriesOutput> {
        let input = SearchInput::builder()
            .page(q.page)
            .per_page(q.per_page)
            .search(q.search)
            .order_by(q.sort)
            .order(q.dir)
            .build()?;

        let output = self.repository.search(&input, &ctx.cancel).await?;
        tracing::debug!(
            query = ListCategories::NAME,
            page = output.current_page(),
            total = output.total(),
            "categories listed"
        );
        Ok(ListCategoriesOutput::from(output))
    }
}
