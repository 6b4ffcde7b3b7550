use tracing::{error, info, instrument};
use crate::actors::CatalogService;
use crate::app_system::ShopConfig;
use crate::catalog::Catalog;
use crate::clients::CatalogClient;
use crate::domain::Sweet;

/// Owns the running catalog service.
///
/// Responsible for starting the service, handing out its client, and shutting
/// it down.
pub struct ShopSystem {
    pub catalog_client: CatalogClient,
    handle: tokio::task::JoinHandle<()>,
}

impl ShopSystem {
    /// Start the catalog service. Must be called from within a tokio runtime.
    #[instrument(name = "shop_system", skip(config))]
    pub fn start(config: &ShopConfig) -> Self {
        let catalog: Catalog = if config.no_seed {
            Catalog::new()
        } else {
            demo_sweets().into_iter().collect()
        };
        info!(sweets = catalog.len(), "Starting shop system");

        let (catalog_service, catalog_client) = CatalogService::new(config.buffer_size, catalog);
        let handle = tokio::spawn(catalog_service.run());

        Self {
            catalog_client,
            handle,
        }
    }

    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down shop system");

        // The service may already be gone; the join below still reports panics.
        let _ = self.catalog_client.shutdown().await;

        if let Err(e) = self.handle.await {
            error!(error = ?e, "Service shutdown error");
            return Err(format!("Catalog service failed: {}", e));
        }

        info!("Shop system shutdown complete");
        Ok(())
    }
}

/// The catalog the shop opens with unless seeding is turned off.
pub fn demo_sweets() -> Vec<Sweet> {
    vec![
        Sweet::new(101, "Kaju Katli", "Nut-Based", 50.0, 20),
        Sweet::new(102, "Gulab Jamun", "Milk-Based", 10.0, 50),
        Sweet::new(103, "Chocolate Bar", "Chocolate", 25.0, 15),
        Sweet::new(104, "Rasgulla", "Milk-Based", 12.0, 0),
        Sweet::new(105, "Coconut Barfi", "Nut-Based", 45.0, 10),
        Sweet::new(106, "Dark Chocolate Truffle", "Chocolate", 60.0, 5),
        Sweet::new(107, "Lemon Drops", "Candy", 5.0, 25),
    ]
}
