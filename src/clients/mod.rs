#[macro_use]
mod macros;

use tokio::sync::mpsc;
use tracing::{debug, instrument};
use crate::catalog::CatalogError;
use crate::domain::{SearchCriteria, Sweet, SweetCreate};
use crate::messages::CatalogRequest;

/// Cloneable handle to the `CatalogService`.
#[derive(Clone)]
pub struct CatalogClient {
    sender: mpsc::Sender<CatalogRequest>,
}

impl CatalogClient {
    pub fn new(sender: mpsc::Sender<CatalogRequest>) -> Self {
        Self { sender }
    }

    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), CatalogError> {
        debug!("Sending shutdown request");
        self.sender
            .send(CatalogRequest::Shutdown)
            .await
            .map_err(|e| CatalogError::ActorCommunication(e.to_string()))
    }
}

client_method!(CatalogClient => fn add_sweet(create: SweetCreate) -> Sweet as CatalogRequest::AddSweet, Error = CatalogError);
client_method!(CatalogClient => fn delete_sweet(id: i64) -> Sweet as CatalogRequest::DeleteSweet, Error = CatalogError);
client_method!(CatalogClient => fn get_sweet(id: i64) -> Option<Sweet> as CatalogRequest::GetSweet, Error = CatalogError);
client_method!(CatalogClient => fn list_sweets() -> Vec<Sweet> as CatalogRequest::ListSweets, Error = CatalogError);
client_method!(CatalogClient => fn search_sweets(criteria: SearchCriteria) -> Vec<Sweet> as CatalogRequest::SearchSweets, Error = CatalogError);
client_method!(CatalogClient => fn purchase_sweet(id: i64, quantity: i64) -> Sweet as CatalogRequest::PurchaseSweet, Error = CatalogError);
client_method!(CatalogClient => fn restock_sweet(id: i64, quantity: i64) -> Sweet as CatalogRequest::RestockSweet, Error = CatalogError);
#[cfg(test)]
client_method!(CatalogClient => fn get_sweet_count() -> usize as CatalogRequest::GetSweetCount, Error = CatalogError);
