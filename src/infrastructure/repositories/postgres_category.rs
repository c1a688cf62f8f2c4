use super::map_sqlx;
use crate::domain::category::{
    Category, CategoryId, CategoryName, CategoryRepository, CategoryUpdate, NewCategory,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

#[derive(Clone)]
pub struct PostgresCategoryRepository {
    pool: PgPool,
}

impl PostgresCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CategoryRow {
    id: i64,
    name: String,
    description: Option<String>,
}

impl TryFrom<CategoryRow> for Category {
    type Error = DomainError;

    fn try_from(row: CategoryRow) -> Result<Self, Self::Error> {
        Ok(Category {
            id: CategoryId::new(row.id)?,
            name: CategoryName::new(row.name)?,
            description: row.description,
        })
    }
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        let row = sqlx::query_as::<_, CategoryRow>(
            "INSERT INTO categories (name, description)
             VALUES ($1, $2)
             RETURNING id, name, description",
        )
        .bind(category.name.as_str())
        .bind(category.description)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Category::try_from(row)
    }

    async fn update(&self, update: CategoryUpdate) -> DomainResult<Category> {
        let CategoryUpdate {
            id,
            name,
            description,
        } = update;

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE categories SET id = id");

        if let Some(name) = name {
            builder.push(", name = ");
            builder.push_bind(String::from(name));
        }

        if let Some(description) = description {
            builder.push(", description = ");
            builder.push_bind(description);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" RETURNING id, name, description");

        let row = builder
            .build_query_as::<CategoryRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("category not found".into()))?;

        Category::try_from(row)
    }

    async fn delete(&self, id: CategoryId) -> DomainResult<()> {
        // articles.category_id carries ON DELETE SET NULL, so the grouping
        // disappears while the articles stay.
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("category not found".into()));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, name, description FROM categories WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Category::try_from).transpose()
    }

    async fn find_by_name(&self, name: &CategoryName) -> DomainResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, name, description FROM categories WHERE name = $1",
        )
        .bind(name.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Category::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, name, description FROM categories ORDER BY name ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Category::try_from).collect()
    }
}
