//! # Mock Framework
//!
//! Utilities for testing clients in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver.
//! Then use helpers like [`expect_dispatch`] or [`expect_snapshot`] to assert behavior.

use tokio::sync::{mpsc, oneshot, watch};

use crate::actor_framework::{Store, StoreClient, StoreRequest};

/// Creates a mock client, the receiver its requests arrive on, and the
/// publisher standing in for the actor's observer channel.
pub fn create_mock_client<S: Store>(
    buffer_size: usize,
    initial: S::State,
) -> (
    StoreClient<S>,
    mpsc::Receiver<StoreRequest<S>>,
    watch::Sender<S::State>,
) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    let (publisher, state) = watch::channel(initial);
    (StoreClient::new(sender, state), receiver, publisher)
}

/// Helper to verify that the next message is a Dispatch request
pub async fn expect_dispatch<S: Store>(
    receiver: &mut mpsc::Receiver<StoreRequest<S>>,
) -> Option<(S::Action, oneshot::Sender<S::State>)> {
    match receiver.recv().await {
        Some(StoreRequest::Dispatch { action, respond_to }) => Some((action, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Snapshot request
pub async fn expect_snapshot<S: Store>(
    receiver: &mut mpsc::Receiver<StoreRequest<S>>,
) -> Option<oneshot::Sender<S::State>> {
    match receiver.recv().await {
        Some(StoreRequest::Snapshot { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is a Shutdown request
pub async fn expect_shutdown<S: Store>(receiver: &mut mpsc::Receiver<StoreRequest<S>>) -> bool {
    matches!(receiver.recv().await, Some(StoreRequest::Shutdown))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::cart_actor::{CartAction, CartStore};
    use crate::catalog_data::ProductCatalog;
    use crate::clients::CartClient;
    use crate::domain::{CartItem, CartSnapshot};

    #[tokio::test]
    async fn test_mock_client() {
        let (inner, mut receiver, _publisher) =
            create_mock_client::<CartStore>(10, CartSnapshot::from(Vec::new()));
        let client = CartClient::new(inner, Arc::new(ProductCatalog::sample()));

        let add_task = tokio::spawn(async move { client.add_item("p1".to_string(), 2).await });

        let (action, responder) = expect_dispatch(&mut receiver).await.expect("Expected Dispatch request");
        assert_eq!(
            action,
            CartAction::AddItem {
                product_id: "p1".to_string(),
                quantity: 2
            }
        );
        responder.send(vec![CartItem::new("p1", 2)].into()).unwrap();

        let result = add_task.await.unwrap().unwrap();
        assert_eq!(&*result, &[CartItem::new("p1", 2)]);
    }
}
