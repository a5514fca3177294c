use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::services::ProductIdGenerator;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use crate::domain::product::value_objects::ProductId;

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub id_generator: Arc<dyn ProductIdGenerator>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<ProductId, ProductError> {
        self.logger
            .info(&format!("Creating product: {}", params.name));

        let product = Product::new(self.id_generator.next_id(), params.name, params.price);

        if let Err(err) = self.repository.add(&product).await {
            self.logger
                .error(&format!("Failed to store product {}: {}", product.id(), err));
            return Err(err.into());
        }

        self.logger
            .info(&format!("Product created with id: {}", product.id()));
        Ok(product.id())
    }
}
