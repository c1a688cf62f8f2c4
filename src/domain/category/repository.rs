use crate::domain::category::entity::{Category, CategoryUpdate, NewCategory};
use crate::domain::category::value_objects::{CategoryId, CategoryName};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category>;
    async fn update(&self, update: CategoryUpdate) -> DomainResult<Category>;
    /// Articles filed under the category keep their rows; their
    /// `category_id` is nulled by the store.
    async fn delete(&self, id: CategoryId) -> DomainResult<()>;
    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>>;
    async fn find_by_name(&self, name: &CategoryName) -> DomainResult<Option<Category>>;
    async fn list(&self) -> DomainResult<Vec<Category>>;
}
