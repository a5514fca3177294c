use std::sync::Arc;

use logger::TracingLogger;
use persistence::product::in_memory::InMemoryProductRepository;
use persistence::product::repository::ProductRepositoryPostgres;

use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::domain::product::repository::ProductRepository;
use business::domain::product::services::RandomProductIdGenerator;

use crate::config::database_config;
use crate::config::storage_config::StorageConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub product_api: crate::api::product::routes::ProductApi,
}

impl DependencyContainer {
    /// Builds the product store selected by `storage` and wires the use cases on top.
    pub async fn from_storage(storage: &StorageConfig) -> anyhow::Result<Self> {
        let product_repository: Arc<dyn ProductRepository> = match storage {
            StorageConfig::Memory => Arc::new(InMemoryProductRepository::new()),
            StorageConfig::Postgres(settings) => {
                let pool = database_config::init_database(settings).await?;
                Arc::new(ProductRepositoryPostgres::new(pool))
            }
        };
        tracing::info!(storage = storage.backend_name(), "product store ready");

        Ok(Self::new(product_repository, storage.backend_name()))
    }

    pub fn new(product_repository: Arc<dyn ProductRepository>, storage: &'static str) -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new(storage);

        let create_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: product_repository.clone(),
            id_generator: Arc::new(RandomProductIdGenerator),
            logger: logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: product_repository,
            logger,
        });

        let product_api =
            crate::api::product::routes::ProductApi::new(create_use_case, get_by_id_use_case);

        Self {
            health_api,
            product_api,
        }
    }
}
