use tokio::sync::oneshot;
use crate::catalog::CatalogError;
use crate::domain::{SearchCriteria, Sweet, SweetCreate};

/// Generic type aliases for service communication
pub type ServiceResult<T, E> = std::result::Result<T, E>;
pub type ServiceResponse<T, E> = oneshot::Sender<ServiceResult<T, E>>;

/// Requests handled by the `CatalogService`. Each variant carries its
/// parameters and a oneshot channel for the response.
#[derive(Debug)]
pub enum CatalogRequest {
    AddSweet {
        create: SweetCreate,
        respond_to: ServiceResponse<Sweet, CatalogError>,
    },
    DeleteSweet {
        id: i64,
        respond_to: ServiceResponse<Sweet, CatalogError>,
    },
    GetSweet {
        id: i64,
        respond_to: ServiceResponse<Option<Sweet>, CatalogError>,
    },
    ListSweets {
        respond_to: ServiceResponse<Vec<Sweet>, CatalogError>,
    },
    SearchSweets {
        criteria: SearchCriteria,
        respond_to: ServiceResponse<Vec<Sweet>, CatalogError>,
    },
    PurchaseSweet {
        id: i64,
        quantity: i64,
        respond_to: ServiceResponse<Sweet, CatalogError>,
    },
    RestockSweet {
        id: i64,
        quantity: i64,
        respond_to: ServiceResponse<Sweet, CatalogError>,
    },
    Shutdown,
    #[cfg(test)]
    GetSweetCount {
        respond_to: ServiceResponse<usize, CatalogError>,
    },
}
