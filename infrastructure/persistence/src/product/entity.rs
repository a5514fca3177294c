use bigdecimal::BigDecimal;
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::product::model::Product;

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: Uuid,
    pub name: String,
    pub price: BigDecimal,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::from_repository(self.id.into(), self.name, self.price)
    }
}
