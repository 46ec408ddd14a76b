//! 检索与分页协议（Search）
//!
//! 与聚合类型无关的列表查询请求/响应：过滤、排序、分页与总数统计。
//! 所有存储后端都必须给出与 [`search_in_memory`] 完全一致的结果：
//! - 检索词去除首尾空白后为空表示不过滤；
//! - 排序字段限定在聚合声明的枚举集合内，无法识别的字段名回退到默认字段；
//! - 同值记录以标识升序作为确定性的次级排序键；
//! - `total` 为全部匹配记录数，与分页无关；页码越界返回空列表而非错误。
//!
use crate::aggregate::Aggregate;
use crate::validation::{ValidationError, ValidationResult};
use bon::bon;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::Debug;

/// 默认每页条数
pub const DEFAULT_PER_PAGE: u32 = 15;

/// 排序方向
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchOrder {
    #[default]
    Asc,
    Desc,
}

impl SearchOrder {
    /// 按方向调整主排序键的比较结果
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SearchOrder::Asc => ordering,
            SearchOrder::Desc => ordering.reverse(),
        }
    }
}

/// 列表查询请求
///
/// 通过构建器创建，`build()` 会校验 `page >= 1` 与 `per_page >= 1`：
///
/// ```
/// use catalog_domain::search::{SearchInput, SearchOrder};
///
/// let input = SearchInput::builder()
///     .page(2)
///     .per_page(15)
///     .search("drama")
///     .order_by("name")
///     .order(SearchOrder::Desc)
///     .build()
///     .unwrap();
/// assert_eq!(input.page(), 2);
///
/// assert!(SearchInput::builder().page(0).build().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchInput {
    page: u32,
    per_page: u32,
    search: String,
    order_by: String,
    order: SearchOrder,
}

#[bon]
impl SearchInput {
    #[builder]
    pub fn new(
        #[builder(default = 1)] page: u32,
        #[builder(default = DEFAULT_PER_PAGE)] per_page: u32,
        #[builder(default, into)] search: String,
        #[builder(default, into)] order_by: String,
        #[builder(default)] order: SearchOrder,
    ) -> Result<Self, ValidationError> {
        at_least_one(page, "Page")?;
        at_least_one(per_page, "PerPage")?;

        Ok(Self {
            page,
            per_page,
            search,
            order_by,
            order,
        })
    }
}

impl SearchInput {
    /// 页码（从 1 开始）
    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    /// 自由文本检索词，空串表示不过滤
    pub fn search(&self) -> &str {
        &self.search
    }

    /// 原始排序字段名，由聚合的 [`SortField`] 解析
    pub fn order_by(&self) -> &str {
        &self.order_by
    }

    pub fn order(&self) -> SearchOrder {
        self.order
    }

    /// 本页之前需要跳过的记录数
    pub fn offset(&self) -> usize {
        (self.page as usize - 1).saturating_mul(self.per_page as usize)
    }
}

fn at_least_one(value: u32, field: &str) -> ValidationResult {
    if value < 1 {
        return Err(ValidationError::new(
            field,
            format!("{field} should be at least 1"),
        ));
    }
    Ok(())
}

/// 列表查询响应
///
/// 不变量：`items.len() <= per_page` 且 `total >= items.len()`。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchOutput<T> {
    current_page: u32,
    per_page: u32,
    items: Vec<T>,
    total: u64,
}

impl<T> SearchOutput<T> {
    pub fn new(current_page: u32, per_page: u32, items: Vec<T>, total: u64) -> Self {
        Self {
            current_page,
            per_page,
            items,
            total,
        }
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// 全部匹配记录数（与分页无关）
    pub fn total(&self) -> u64 {
        self.total
    }

    /// 总页数：`ceil(total / per_page)`
    pub fn total_pages(&self) -> u64 {
        match self.per_page {
            0 => 0,
            per_page => self.total.div_ceil(u64::from(per_page)),
        }
    }

    /// 转换条目类型，保留分页信息
    pub fn map<U, F>(self, f: F) -> SearchOutput<U>
    where
        F: FnMut(T) -> U,
    {
        SearchOutput {
            current_page: self.current_page,
            per_page: self.per_page,
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
        }
    }
}

/// 可排序字段集合
///
/// 每个聚合以枚举声明允许排序的字段；无法识别的字段名回退到 `Default`。
pub trait SortField: Copy + Default + Debug + Send + Sync {
    fn parse_or_default(name: &str) -> Self;
}

/// 可检索聚合：声明排序字段、检索匹配规则与字段比较方式
pub trait Searchable: Aggregate {
    type SortField: SortField;

    /// 检索词（已去除首尾空白且非空）是否命中该记录
    fn matches_search(&self, term: &str) -> bool;

    /// 按指定字段比较两条记录（升序语义）
    fn compare_by(&self, other: &Self, field: Self::SortField) -> Ordering;
}

/// 检索协议的参考实现：过滤 → 排序 → 统计总数 → 切页
pub fn search_in_memory<A, I>(records: I, input: &SearchInput) -> SearchOutput<A>
where
    A: Searchable,
    I: IntoIterator<Item = A>,
{
    let term = input.search().trim();
    let mut matched: Vec<A> = records
        .into_iter()
        .filter(|record| term.is_empty() || record.matches_search(term))
        .collect();

    let field = A::SortField::parse_or_default(input.order_by());
    matched.sort_by(|a, b| {
        input
            .order()
            .apply(a.compare_by(b, field))
            .then_with(|| a.id().cmp(b.id()))
    });

    let total = matched.len() as u64;
    let items = matched
        .into_iter()
        .skip(input.offset())
        .take(input.per_page() as usize)
        .collect();

    SearchOutput::new(input.page(), input.per_page(), items, total)
}
