use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use tracing::error;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;
use business::domain::product::value_objects::ProductId;

#[derive(Debug, Default)]
struct Entries {
    by_id: HashMap<ProductId, Product>,
    /// Insertion order of the keys in `by_id`.
    order: Vec<ProductId>,
}

/// Product store kept in process memory.
///
/// One lock per instance serializes writers, so concurrent mutations on the
/// same identifier never lose updates. `get_all` returns insertion order.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    entries: RwLock<Entries>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Entries>, RepositoryError> {
        self.entries.read().map_err(|_| {
            error!("in-memory product store lock poisoned");
            RepositoryError::Persistence
        })
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Entries>, RepositoryError> {
        self.entries.write().map_err(|_| {
            error!("in-memory product store lock poisoned");
            RepositoryError::Persistence
        })
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let entries = self.read()?;
        Ok(entries
            .order
            .iter()
            .filter_map(|id| entries.by_id.get(id).cloned())
            .collect())
    }

    async fn get_by_id(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        Ok(self.read()?.by_id.get(&id).cloned())
    }

    async fn add(&self, product: &Product) -> Result<(), RepositoryError> {
        let mut entries = self.write()?;
        if entries.by_id.insert(product.id(), product.clone()).is_none() {
            entries.order.push(product.id());
        }
        Ok(())
    }

    async fn update(&self, product: &Product) -> Result<(), RepositoryError> {
        let mut entries = self.write()?;
        if let Some(existing) = entries.by_id.get_mut(&product.id()) {
            *existing = product.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: ProductId) -> Result<(), RepositoryError> {
        let mut entries = self.write()?;
        if entries.by_id.remove(&id).is_some() {
            entries.order.retain(|existing| *existing != id);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;
    use proptest::prelude::*;
    use std::sync::Arc;

    fn product(name: &str, price: i64) -> Product {
        Product::new(ProductId::new(), name, BigDecimal::from(price))
    }

    #[tokio::test]
    async fn should_return_none_for_unknown_id() {
        let repository = InMemoryProductRepository::new();

        let found = repository.get_by_id(ProductId::new()).await.unwrap();

        assert!(found.is_none());
    }

    #[tokio::test]
    async fn should_list_products_in_insertion_order() {
        let repository = InMemoryProductRepository::new();
        for (name, price) in [("Product 1", 100), ("Product 2", 200), ("Product 3", 300)] {
            repository.add(&product(name, price)).await.unwrap();
        }

        let names: Vec<String> = repository
            .get_all()
            .await
            .unwrap()
            .iter()
            .map(|p| p.name().to_string())
            .collect();

        assert_eq!(names, vec!["Product 1", "Product 2", "Product 3"]);
    }

    #[tokio::test]
    async fn should_overwrite_on_second_add_with_same_id() {
        let repository = InMemoryProductRepository::new();
        let first = product("Old", 1);
        let second = Product::new(first.id(), "New", BigDecimal::from(2));
        let other = product("Other", 3);

        repository.add(&first).await.unwrap();
        repository.add(&other).await.unwrap();
        repository.add(&second).await.unwrap();

        let all = repository.get_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0], second);
        assert_eq!(all[1], other);
    }

    #[tokio::test]
    async fn should_replace_existing_product_on_update() {
        let repository = InMemoryProductRepository::new();
        let original = product("Chair", 40);
        repository.add(&original).await.unwrap();

        let changed = Product::new(original.id(), "Armchair", BigDecimal::from(90));
        repository.update(&changed).await.unwrap();

        let found = repository.get_by_id(original.id()).await.unwrap();
        assert_eq!(found, Some(changed));
    }

    #[tokio::test]
    async fn should_ignore_update_for_unknown_id() {
        let repository = InMemoryProductRepository::new();

        repository.update(&product("Ghost", 1)).await.unwrap();

        assert!(repository.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_remove_product_on_delete() {
        let repository = InMemoryProductRepository::new();
        let kept = product("Kept", 1);
        let removed = product("Removed", 2);
        repository.add(&kept).await.unwrap();
        repository.add(&removed).await.unwrap();

        repository.delete(removed.id()).await.unwrap();

        assert_eq!(repository.get_all().await.unwrap(), vec![kept]);
        assert!(repository.get_by_id(removed.id()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_ignore_delete_for_unknown_id() {
        let repository = InMemoryProductRepository::new();
        repository.add(&product("Lamp", 15)).await.unwrap();

        let result = repository.delete(ProductId::new()).await;

        assert!(result.is_ok());
        assert_eq!(repository.get_all().await.unwrap().len(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn should_keep_every_concurrent_add() {
        let repository = Arc::new(InMemoryProductRepository::new());

        let handles: Vec<_> = (0..64)
            .map(|i| {
                let repository = repository.clone();
                tokio::spawn(async move {
                    repository
                        .add(&product(&format!("Product {i}"), i))
                        .await
                        .unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(repository.get_all().await.unwrap().len(), 64);
    }

    proptest! {
        #[test]
        fn last_add_wins_for_repeated_id(prices in proptest::collection::vec(0i64..1_000_000, 1..20)) {
            let runtime = tokio::runtime::Runtime::new().unwrap();
            runtime.block_on(async {
                let repository = InMemoryProductRepository::new();
                let id = ProductId::new();
                for price in &prices {
                    repository
                        .add(&Product::new(id, "Same", BigDecimal::from(*price)))
                        .await
                        .unwrap();
                }

                let all = repository.get_all().await.unwrap();
                prop_assert_eq!(all.len(), 1);
                prop_assert_eq!(all[0].price(), &BigDecimal::from(*prices.last().unwrap()));
                Ok(())
            })?;
        }
    }
}
