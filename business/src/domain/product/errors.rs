use super::value_objects::ProductId;

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.not_found: {0}")]
    NotFound(ProductId),
    #[error("{0}")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use uuid::Uuid;

    #[test]
    fn should_include_identifier_in_not_found_message() {
        let id = ProductId::from(Uuid::new_v4());

        let message = ProductError::NotFound(id).to_string();

        assert_eq!(message, format!("product.not_found: {}", id));
    }

    #[test]
    fn should_keep_repository_error_code() {
        let error: ProductError = RepositoryError::DatabaseError.into();
        assert_eq!(error.to_string(), "repository.database_error");
    }
}
