use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Product;
use super::value_objects::ProductId;

/// Persistence port for products.
///
/// Implementations own the canonical copy of each product and hand out clones.
/// Mutations on the same identifier must be serialized by the implementation.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
    /// `Ok(None)` when no product has this identifier.
    async fn get_by_id(&self, id: ProductId) -> Result<Option<Product>, RepositoryError>;
    /// Inserts the product, overwriting any entry with the same identifier.
    async fn add(&self, product: &Product) -> Result<(), RepositoryError>;
    /// Replaces an existing entry; unknown identifiers are ignored.
    async fn update(&self, product: &Product) -> Result<(), RepositoryError>;
    /// Removes an entry; unknown identifiers are ignored.
    async fn delete(&self, id: ProductId) -> Result<(), RepositoryError>;
}
