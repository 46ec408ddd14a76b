//! 目录（Category）聚合
//!
//! 具备全局唯一标识的目录条目，名称与描述的不变量在构造与每次变更时统一校验：
//! - Name：非空（去除首尾空白后），长度 3..=255（按去除首尾空白后的字符数计）；
//! - Description：非空（去除首尾空白后），长度不超过 10000 字符。
//!
//! 校验按固定顺序执行，第一个失败的规则即中止，后续规则不再评估。
//!
use crate::aggregate::Aggregate;
use crate::entity::Entity;
use crate::search::{Searchable, SortField};
use crate::validation::{self, ValidationError};
use chrono::{DateTime, Utc};
use std::cmp::Ordering;
use uuid::Uuid;

pub const NAME_MIN_LENGTH: usize = 3;
pub const NAME_MAX_LENGTH: usize = 255;
pub const DESCRIPTION_MAX_LENGTH: usize = 10_000;

const NAME_FIELD: &str = "Name";
const DESCRIPTION_FIELD: &str = "Description";

/// 目录聚合根
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    id: Uuid,
    name: String,
    description: String,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl Category {
    /// 构造新目录：分配新标识、记录创建时间，并按固定顺序校验字段
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        is_active: bool,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let description = description.into();
        Self::validate(&name, &description)?;

        Ok(Self {
            id: Uuid::new_v4(),
            name,
            description,
            is_active,
            created_at: Utc::now(),
        })
    }

    /// 以激活状态构造新目录
    pub fn create(
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::new(name, description, true)
    }

    /// 由存储层重建聚合：保留原标识与创建时间，同样执行字段校验
    pub fn restore(
        id: Uuid,
        name: impl Into<String>,
        description: impl Into<String>,
        is_active: bool,
        created_at: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let description = description.into();
        Self::validate(&name, &description)?;

        Ok(Self {
            id,
            name,
            description,
            is_active,
            created_at,
        })
    }

    pub fn activate(&mut self) {
        self.is_active = true;
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
    }

    /// 更新名称与描述
    ///
    /// `description` 为 `None` 时沿用当前描述。校验失败时聚合保持不变；
    /// 校验通过后两个字段一并替换。
    pub fn update(
        &mut self,
        name: impl Into<String>,
        description: Option<String>,
    ) -> Result<(), ValidationError> {
        let name = name.into();
        let description = description.unwrap_or_else(|| self.description.clone());
        Self::validate(&name, &description)?;

        self.name = name;
        self.description = description;
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn validate(name: &str, description: &str) -> Result<(), ValidationError> {
        validation::not_null_or_empty(Some(name), NAME_FIELD)?;
        let trimmed = name.trim();
        validation::min_length(trimmed, NAME_MIN_LENGTH, NAME_FIELD)?;
        validation::max_length(trimmed, NAME_MAX_LENGTH, NAME_FIELD)?;

        validation::not_null_or_empty(Some(description), DESCRIPTION_FIELD)?;
        validation::max_length(description, DESCRIPTION_MAX_LENGTH, DESCRIPTION_FIELD)
    }
}

impl Entity for Category {
    type Id = Uuid;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Aggregate for Category {
    const TYPE: &'static str = "Category";
}

/// 目录允许排序的字段，默认按名称
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CategorySortField {
    #[default]
    Name,
    Id,
    CreatedAt,
}

impl SortField for CategorySortField {
    fn parse_or_default(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "name" => CategorySortField::Name,
            "id" => CategorySortField::Id,
            "createdat" | "created_at" => CategorySortField::CreatedAt,
            _ => CategorySortField::default(),
        }
    }
}

impl Searchable for Category {
    type SortField = CategorySortField;

    // 仅匹配名称，描述不参与检索
    fn matches_search(&self, term: &str) -> bool {
        self.name.to_lowercase().contains(&term.to_lowercase())
    }

    fn compare_by(&self, other: &Self, field: Self::SortField) -> Ordering {
        match field {
            CategorySortField::Name => self
                .name
                .to_lowercase()
                .cmp(&other.name.to_lowercase())
                .then_with(|| self.name.cmp(&other.name)),
            CategorySortField::Id => self.id.cmp(&other.id),
            CategorySortField::CreatedAt => self.created_at.cmp(&other.created_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{SearchInput, SearchOrder, search_in_memory};
    use fake::Fake;
    use fake::faker::lorem::en::{Sentence, Words};

    fn valid_name() -> String {
        loop {
            let words: Vec<String> = Words(1..4).fake();
            let name = words.join(" ");
            if name.trim().chars().count() >= NAME_MIN_LENGTH {
                return name.chars().take(NAME_MAX_LENGTH).collect();
            }
        }
    }

    fn valid_description() -> String {
        Sentence(3..12).fake()
    }

    #[test]
    fn instantiate() {
        let (name, description) = (valid_name(), valid_description());
        let before = Utc::now();
        let category = Category::create(name.clone(), description.clone()).unwrap();
        let after = Utc::now();

        assert_eq!(category.name(), name);
        assert_eq!(category.description(), description);
        assert!(!category.id().is_nil());
        assert!(category.created_at() >= before && category.created_at() <= after);
        assert!(category.is_active());
    }

    #[test]
    fn instantiate_with_is_active() {
        for is_active in [true, false] {
            let category = Category::new(valid_name(), valid_description(), is_active).unwrap();
            assert_eq!(category.is_active(), is_active);
        }
    }

    #[test]
    fn identities_are_unique() {
        let a = Category::create(valid_name(), valid_description()).unwrap();
        let b = Category::create(valid_name(), valid_description()).unwrap();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn accepts_boundary_lengths() {
        for name_len in [3, 4, 128, 254, 255] {
            for description_len in [1, 2, 5_000, 9_999, 10_000] {
                let category = Category::create("n".repeat(name_len), "d".repeat(description_len))
                    .unwrap();
                assert!(category.is_active());
            }
        }
    }

    #[test]
    fn rejects_empty_name() {
        for name in ["", "   "] {
            let err = Category::create(name, valid_description()).unwrap_err();
            assert_eq!(err.field(), "Name");
            assert_eq!(err.message(), "Name should not be empty or null");
        }
    }

    #[test]
    fn rejects_name_shorter_than_three_characters() {
        for name in ["1", "12", "a", "ca", "  ab  "] {
            let err = Category::create(name, valid_description()).unwrap_err();
            assert_eq!(err.message(), "Name should be at least 3 characters long");
        }
    }

    #[test]
    fn rejects_name_longer_than_255_characters() {
        for len in [256, 300, 1_000] {
            let err = Category::create("a".repeat(len), valid_description()).unwrap_err();
            assert_eq!(
                err.message(),
                "Name should be less or equal 255 characters long"
            );
        }
    }

    #[test]
    fn rejects_empty_description() {
        for description in ["", "  \t"] {
            let err = Category::create(valid_name(), description).unwrap_err();
            assert_eq!(err.field(), "Description");
            assert_eq!(err.message(), "Description should not be empty or null");
        }
    }

    #[test]
    fn rejects_description_longer_than_10000_characters() {
        let err = Category::create(valid_name(), "a".repeat(10_001)).unwrap_err();
        assert_eq!(
            err.message(),
            "Description should be less or equal 10000 characters long"
        );
    }

    // 名称规则先于描述规则
    #[test]
    fn first_failing_rule_wins() {
        let err = Category::create("ab", "").unwrap_err();
        assert_eq!(err.field(), "Name");
    }

    #[test]
    fn activate_and_deactivate_are_idempotent() {
        let mut category = Category::new(valid_name(), valid_description(), false).unwrap();
        category.activate();
        category.activate();
        assert!(category.is_active());

        category.deactivate();
        category.deactivate();
        assert!(!category.is_active());
    }

    #[test]
    fn update_replaces_both_fields() {
        let mut category = Category::create(valid_name(), valid_description()).unwrap();
        let (id, created_at) = (*category.id(), category.created_at());
        let (name, description) = (valid_name(), valid_description());

        category.update(name.clone(), Some(description.clone())).unwrap();

        assert_eq!(category.name(), name);
        assert_eq!(category.description(), description);
        assert_eq!(*category.id(), id);
        assert_eq!(category.created_at(), created_at);
    }

    #[test]
    fn update_only_name_keeps_description() {
        let mut category = Category::create(valid_name(), valid_description()).unwrap();
        let description = category.description().to_string();
        let name = valid_name();

        category.update(name.clone(), None).unwrap();

        assert_eq!(category.name(), name);
        assert_eq!(category.description(), description);
    }

    #[test]
    fn failed_update_leaves_aggregate_untouched() {
        let mut category = Category::create(valid_name(), valid_description()).unwrap();
        let snapshot = category.clone();

        let err = category
            .update(valid_name(), Some("x".repeat(10_001)))
            .unwrap_err();
        assert_eq!(err.field(), "Description");
        assert_eq!(category, snapshot);

        let err = category.update("ab", Some(valid_description())).unwrap_err();
        assert_eq!(err.message(), "Name should be at least 3 characters long");
        assert_eq!(category, snapshot);

        let err = category.update("", None).unwrap_err();
        assert_eq!(err.message(), "Name should not be empty or null");
        assert_eq!(category, snapshot);
    }

    #[test]
    fn restore_keeps_identity_and_timestamp() {
        let original = Category::new(valid_name(), valid_description(), false).unwrap();
        let restored = Category::restore(
            *original.id(),
            original.name(),
            original.description(),
            original.is_active(),
            original.created_at(),
        )
        .unwrap();
        assert_eq!(restored, original);

        let err = Category::restore(Uuid::new_v4(), "ab", "desc", true, Utc::now()).unwrap_err();
        assert_eq!(err.field(), "Name");
    }

    #[test]
    fn sort_field_parses_known_names_and_falls_back_to_name() {
        assert_eq!(CategorySortField::parse_or_default("name"), CategorySortField::Name);
        assert_eq!(CategorySortField::parse_or_default("ID"), CategorySortField::Id);
        assert_eq!(
            CategorySortField::parse_or_default("createdAt"),
            CategorySortField::CreatedAt
        );
        assert_eq!(
            CategorySortField::parse_or_default("created_at"),
            CategorySortField::CreatedAt
        );
        assert_eq!(CategorySortField::parse_or_default(""), CategorySortField::Name);
        assert_eq!(
            CategorySortField::parse_or_default("description"),
            CategorySortField::Name
        );
    }

    #[test]
    fn name_ordering_ignores_case_then_breaks_ties_by_raw_name() {
        let upper = Category::create("Drama", "description").unwrap();
        let lower = Category::create("drama", "description").unwrap();
        let action = Category::create("action", "description").unwrap();

        assert_eq!(
            action.compare_by(&upper, CategorySortField::Name),
            Ordering::Less
        );
        assert_eq!(
            upper.compare_by(&lower, CategorySortField::Name),
            Ordering::Less
        );
        assert_eq!(
            lower.compare_by(&lower.clone(), CategorySortField::Name),
            Ordering::Equal
        );
    }

    #[test]
    fn search_matches_name_but_not_description() {
        let by_name = Category::create("Science Fiction", "Films set in the future").unwrap();
        let by_description =
            Category::create("Documentary", "Real stories about science").unwrap();

        let input = SearchInput::builder().search("SCIENCE").build().unwrap();
        let out = search_in_memory(vec![by_name.clone(), by_description], &input);

        assert_eq!(out.total(), 1);
        assert_eq!(out.items(), &[by_name]);
    }

    #[test]
    fn search_orders_by_created_at_descending() {
        let now = Utc::now();
        let categories: Vec<Category> = (0..3)
            .map(|i| {
                Category::restore(
                    Uuid::new_v4(),
                    format!("Category {i}"),
                    "description",
                    true,
                    now + chrono::Duration::seconds(i),
                )
                .unwrap()
            })
            .collect();

        let input = SearchInput::builder()
            .order_by("createdAt")
            .order(SearchOrder::Desc)
            .build()
            .unwrap();
        let names: Vec<String> = search_in_memory(categories, &input)
            .into_items()
            .into_iter()
            .map(|c| c.name().to_string())
            .collect();
        assert_eq!(names, ["Category 2", "Category 1", "Category 0"]);
    }
}
