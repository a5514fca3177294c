use super::value_objects::ProductId;

/// Source of identifiers for newly created products.
///
/// Every call must return an identifier not handed out before.
pub trait ProductIdGenerator: Send + Sync {
    fn next_id(&self) -> ProductId;
}

/// Random UUID v4 identifiers.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomProductIdGenerator;

impl ProductIdGenerator for RandomProductIdGenerator {
    fn next_id(&self) -> ProductId {
        ProductId::new()
    }
}
