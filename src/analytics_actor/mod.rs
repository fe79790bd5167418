//! Page engagement analytics: time spent and hotspot interactions.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use entity::AnalyticsStore;
pub use error::*;

use crate::actor_framework::StoreActor;
use crate::clients::AnalyticsClient;

/// Creates a new analytics actor and its client.
pub fn new(buffer_size: usize) -> (StoreActor<AnalyticsStore>, AnalyticsClient) {
    let (actor, generic_client) = StoreActor::new(buffer_size, AnalyticsStore::new());
    let client = AnalyticsClient::new(generic_client);

    (actor, client)
}
