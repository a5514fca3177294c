use async_trait::async_trait;
use sqlx::PgPool;
use tracing::error;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;
use business::domain::product::value_objects::ProductId;

use super::entity::ProductEntity;

fn database_error(operation: &str, err: sqlx::Error) -> RepositoryError {
    error!(operation, error = %err, "product query failed");
    RepositoryError::DatabaseError
}

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(
            "SELECT id, name, price FROM products ORDER BY created_at ASC, seq ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| database_error("get_all", e))?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(
            "SELECT id, name, price FROM products WHERE id = $1",
        )
        .bind(Uuid::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| database_error("get_by_id", e))?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn add(&self, product: &Product) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO products (id, name, price)
            VALUES ($1, $2, $3)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                price = EXCLUDED.price"#,
        )
        .bind(Uuid::from(product.id()))
        .bind(product.name())
        .bind(product.price())
        .execute(&self.pool)
        .await
        .map_err(|e| database_error("add", e))?;

        Ok(())
    }

    async fn update(&self, product: &Product) -> Result<(), RepositoryError> {
        sqlx::query("UPDATE products SET name = $2, price = $3 WHERE id = $1")
            .bind(Uuid::from(product.id()))
            .bind(product.name())
            .bind(product.price())
            .execute(&self.pool)
            .await
            .map_err(|e| database_error("update", e))?;

        Ok(())
    }

    async fn delete(&self, id: ProductId) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(Uuid::from(id))
            .execute(&self.pool)
            .await
            .map_err(|e| database_error("delete", e))?;

        Ok(())
    }
}
