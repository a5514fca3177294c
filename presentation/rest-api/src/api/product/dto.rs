use std::str::FromStr;

use bigdecimal::{BigDecimal, Signed};
use poem_openapi::Object;

use business::domain::product::model::Product;
use business::domain::product::use_cases::create::CreateProductParams;
use business::domain::product::value_objects::ProductId;

use crate::api::error::ErrorResponse;

#[derive(Debug, Clone, Object)]
pub struct CreateProductRequest {
    /// Product name (cannot be blank)
    pub name: String,
    /// Decimal price as a string, e.g. "1299.99" (cannot be negative)
    pub price: String,
}

impl CreateProductRequest {
    /// Checks the request body and turns it into use case input.
    pub fn into_params(self) -> Result<CreateProductParams, ErrorResponse> {
        if self.name.trim().is_empty() {
            return Err(ErrorResponse::validation("product.name_empty"));
        }

        let price = BigDecimal::from_str(self.price.trim())
            .map_err(|_| ErrorResponse::validation("product.invalid_price"))?;
        if price.is_negative() {
            return Err(ErrorResponse::validation("product.negative_price"));
        }

        Ok(CreateProductParams {
            name: self.name,
            price,
        })
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductCreatedResponse {
    /// Identifier of the new product
    pub id: String,
}

impl From<ProductId> for ProductCreatedResponse {
    fn from(id: ProductId) -> Self {
        Self { id: id.to_string() }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Product unique identifier
    pub id: String,
    /// Product name
    pub name: String,
    /// Decimal price as a string
    pub price: String,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id().to_string(),
            name: product.name().to_string(),
            price: product.price().to_string(),
        }
    }
}
