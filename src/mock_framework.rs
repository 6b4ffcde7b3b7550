//! # Mock Framework
//!
//! Utilities for testing clients in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver, then
//! [`expect_request`] to pull the next message and answer it by hand.

use crate::clients::CatalogClient;
use crate::messages::CatalogRequest;
use tokio::sync::mpsc;

/// Creates a client whose requests arrive on a receiver owned by the test.
///
/// The test plays the part of the `CatalogService`: it inspects each request
/// and sends whatever response (success, failure, or nothing) it wants the
/// client to see.
pub fn create_mock_client(buffer_size: usize) -> (CatalogClient, mpsc::Receiver<CatalogRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (CatalogClient::new(sender), receiver)
}

/// Waits for the next request, or `None` once every client is gone.
pub async fn expect_request(receiver: &mut mpsc::Receiver<CatalogRequest>) -> Option<CatalogRequest> {
    receiver.recv().await
}

/// Answers the next request, which must be a `ListSweets`, with `sweets`.
pub async fn respond_to_list(
    receiver: &mut mpsc::Receiver<CatalogRequest>,
    sweets: Vec<crate::domain::Sweet>,
) {
    match receiver.recv().await {
        Some(CatalogRequest::ListSweets { respond_to }) => {
            let _ = respond_to.send(Ok(sweets));
        }
        other => panic!("Expected ListSweets, got {:?}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Sweet;

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client(10);

        let list_task = tokio::spawn(async move { client.list_sweets().await });

        let sweet = Sweet::new(107, "Lemon Drops", "Candy", 5.0, 25);
        respond_to_list(&mut receiver, vec![sweet.clone()]).await;

        let result = list_task.await.unwrap();
        assert_eq!(result, Ok(vec![sweet]));
    }
}
