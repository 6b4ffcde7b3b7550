use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};
use crate::catalog::{Catalog, CatalogError};
use crate::clients::CatalogClient;
use crate::domain::{SearchCriteria, Sweet, SweetCreate};
use crate::messages::{CatalogRequest, ServiceResponse};

// =============================================================================
// CATALOG SERVICE
// =============================================================================

/// Actor that owns the catalog.
///
/// Requests are handled one at a time, so a find-check-mutate sequence such as
/// a purchase never interleaves with another request.
pub struct CatalogService {
    receiver: mpsc::Receiver<CatalogRequest>,
    catalog: Catalog,
}

impl CatalogService {
    pub fn new(buffer_size: usize, catalog: Catalog) -> (Self, CatalogClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self { receiver, catalog };
        let client = CatalogClient::new(sender);
        (service, client)
    }

    #[instrument(name = "catalog_service", skip(self))]
    pub async fn run(mut self) {
        info!(sweets = self.catalog.len(), "CatalogService starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                CatalogRequest::AddSweet { create, respond_to } => {
                    self.handle_add_sweet(create, respond_to);
                }
                CatalogRequest::DeleteSweet { id, respond_to } => {
                    self.handle_delete_sweet(id, respond_to);
                }
                CatalogRequest::GetSweet { id, respond_to } => {
                    self.handle_get_sweet(id, respond_to);
                }
                CatalogRequest::ListSweets { respond_to } => {
                    self.handle_list_sweets(respond_to);
                }
                CatalogRequest::SearchSweets { criteria, respond_to } => {
                    self.handle_search_sweets(criteria, respond_to);
                }
                CatalogRequest::PurchaseSweet { id, quantity, respond_to } => {
                    self.handle_purchase_sweet(id, quantity, respond_to);
                }
                CatalogRequest::RestockSweet { id, quantity, respond_to } => {
                    self.handle_restock_sweet(id, quantity, respond_to);
                }
                CatalogRequest::Shutdown => {
                    info!("CatalogService shutting down");
                    break;
                }
                #[cfg(test)]
                CatalogRequest::GetSweetCount { respond_to } => {
                    let _ = respond_to.send(Ok(self.catalog.len()));
                }
            }
        }
        info!("CatalogService stopped");
    }

    #[instrument(fields(sweet_id = %create.id, sweet_name = %create.name), skip(self, create, respond_to))]
    fn handle_add_sweet(&mut self, create: SweetCreate, respond_to: ServiceResponse<Sweet, CatalogError>) {
        debug!("Processing add_sweet request");
        let result = self.catalog.add(create);
        match &result {
            Ok(sweet) => info!(quantity = sweet.quantity, "Sweet added"),
            Err(e) => warn!(error = %e, "Add rejected"),
        }
        let _ = respond_to.send(result);
    }

    #[instrument(fields(sweet_id = %id), skip(self, respond_to))]
    fn handle_delete_sweet(&mut self, id: i64, respond_to: ServiceResponse<Sweet, CatalogError>) {
        debug!("Processing delete_sweet request");
        let result = self.catalog.delete(id);
        match &result {
            Ok(sweet) => info!(sweet_name = %sweet.name, "Sweet deleted"),
            Err(e) => warn!(error = %e, "Delete rejected"),
        }
        let _ = respond_to.send(result);
    }

    #[instrument(fields(sweet_id = %id), skip(self, respond_to))]
    fn handle_get_sweet(&self, id: i64, respond_to: ServiceResponse<Option<Sweet>, CatalogError>) {
        debug!("Processing get_sweet request");
        let sweet = self.catalog.get(id);
        match &sweet {
            Some(sweet) => debug!(sweet_name = %sweet.name, "Sweet found"),
            None => debug!("Sweet not found"),
        }
        let _ = respond_to.send(Ok(sweet));
    }

    #[instrument(skip(self, respond_to))]
    fn handle_list_sweets(&self, respond_to: ServiceResponse<Vec<Sweet>, CatalogError>) {
        debug!("Processing list_sweets request");
        let sweets = self.catalog.list();
        debug!(in_stock = sweets.len(), "Listed sweets");
        let _ = respond_to.send(Ok(sweets));
    }

    #[instrument(skip(self, respond_to))]
    fn handle_search_sweets(
        &self,
        criteria: SearchCriteria,
        respond_to: ServiceResponse<Vec<Sweet>, CatalogError>,
    ) {
        debug!("Processing search_sweets request");
        let result = self.catalog.search(&criteria);
        match &result {
            Ok(sweets) => debug!(matches = sweets.len(), "Search complete"),
            Err(e) => warn!(error = %e, "Search rejected"),
        }
        let _ = respond_to.send(result);
    }

    #[instrument(fields(sweet_id = %id, quantity = %quantity), skip(self, respond_to))]
    fn handle_purchase_sweet(
        &mut self,
        id: i64,
        quantity: i64,
        respond_to: ServiceResponse<Sweet, CatalogError>,
    ) {
        debug!("Processing purchase_sweet request");
        let result = self.catalog.purchase(id, quantity);
        match &result {
            Ok(sweet) => info!(remaining_stock = sweet.quantity, "Purchase completed"),
            Err(CatalogError::InsufficientStock { available, requested, .. }) => {
                warn!(available, requested, "Insufficient stock")
            }
            Err(e) => warn!(error = %e, "Purchase rejected"),
        }
        let _ = respond_to.send(result);
    }

    #[instrument(fields(sweet_id = %id, quantity = %quantity), skip(self, respond_to))]
    fn handle_restock_sweet(
        &mut self,
        id: i64,
        quantity: i64,
        respond_to: ServiceResponse<Sweet, CatalogError>,
    ) {
        debug!("Processing restock_sweet request");
        let result = self.catalog.restock(id, quantity);
        match &result {
            Ok(sweet) => info!(stock_level = sweet.quantity, "Restock completed"),
            Err(e) => warn!(error = %e, "Restock rejected"),
        }
        let _ = respond_to.send(result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Demonstrates test-only messages for extracting internal actor state
    #[tokio::test]
    async fn test_catalog_service_internal_state() -> Result<(), Box<dyn std::error::Error>> {
        let (service, client) = CatalogService::new(10, Catalog::new());
        let handle = tokio::spawn(service.run());

        assert_eq!(client.get_sweet_count().await?, 0);

        client
            .add_sweet(SweetCreate::new(104, "Rasgulla", "Milk-Based", 12.0, 0))
            .await?;

        // Out-of-stock sweets are counted but not listed
        assert_eq!(client.get_sweet_count().await?, 1);
        assert!(client.list_sweets().await?.is_empty());

        client.shutdown().await?;
        handle.await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_errors_cross_the_channel_unchanged() {
        let (service, client) = CatalogService::new(10, Catalog::new());
        tokio::spawn(service.run());

        client
            .add_sweet(SweetCreate::new(101, "Kaju Katli", "Nut-Based", 50.0, 20))
            .await
            .unwrap();

        let err = client.purchase_sweet(101, 21).await.unwrap_err();
        assert_eq!(
            err,
            CatalogError::InsufficientStock {
                name: "Kaju Katli".to_string(),
                available: 20,
                requested: 21,
            }
        );
        assert_eq!(client.delete_sweet(9999).await, Err(CatalogError::NotFound(9999)));
        assert_eq!(client.get_sweet_count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_purchases_never_oversell() {
        let (service, client) = CatalogService::new(64, Catalog::new());
        tokio::spawn(service.run());

        client
            .add_sweet(SweetCreate::new(1, "Lemon Drops", "Candy", 5.0, 10))
            .await
            .unwrap();

        let mut tasks = Vec::new();
        for _ in 0..25 {
            let client = client.clone();
            tasks.push(tokio::spawn(async move { client.purchase_sweet(1, 1).await }));
        }

        let mut sold = 0;
        for task in tasks {
            if task.await.unwrap().is_ok() {
                sold += 1;
            }
        }

        assert_eq!(sold, 10);
        assert_eq!(client.get_sweet(1).await.unwrap().unwrap().quantity, 0);
    }

    #[tokio::test]
    async fn test_client_reports_closed_service() {
        let (service, client) = CatalogService::new(1, Catalog::new());
        drop(service);

        let err = client.list_sweets().await.unwrap_err();
        assert!(matches!(err, CatalogError::ActorCommunication(_)));
    }
}
