use bigdecimal::BigDecimal;

use super::value_objects::ProductId;

/// Catalog item. Fields are fixed at construction; there are no setters.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    id: ProductId,
    name: String,
    price: BigDecimal,
}

impl Product {
    /// Builds a new product under an identifier handed out by a
    /// [`ProductIdGenerator`](super::services::ProductIdGenerator).
    pub fn new(id: ProductId, name: impl Into<String>, price: BigDecimal) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(id: ProductId, name: String, price: BigDecimal) -> Self {
        Self { id, name, price }
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> &BigDecimal {
        &self.price
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn should_keep_constructor_values() {
        let id = ProductId::new();
        let price = BigDecimal::from_str("1299.99").unwrap();

        let product = Product::new(id, "iPhone 15 Pro", price.clone());

        assert_eq!(product.id(), id);
        assert_eq!(product.name(), "iPhone 15 Pro");
        assert_eq!(product.price(), &price);
    }

    #[test]
    fn should_compare_prices_by_value() {
        let id = ProductId::new();
        let a = Product::new(id, "Widget", BigDecimal::from_str("100").unwrap());
        let b = Product::from_repository(
            id,
            "Widget".to_string(),
            BigDecimal::from_str("100.00").unwrap(),
        );

        assert_eq!(a, b);
    }
}
