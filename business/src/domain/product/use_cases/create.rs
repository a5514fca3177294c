use async_trait::async_trait;
use bigdecimal::BigDecimal;

use crate::domain::product::errors::ProductError;
use crate::domain::product::value_objects::ProductId;

#[derive(Debug)]
pub struct CreateProductParams {
    pub name: String,
    pub price: BigDecimal,
}

#[async_trait]
pub trait CreateProductUseCase: Send + Sync {
    async fn execute(&self, params: CreateProductParams) -> Result<ProductId, ProductError>;
}
