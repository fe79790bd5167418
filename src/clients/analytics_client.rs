use std::time::Duration;

use tracing::{debug, instrument};

use crate::actor_framework::StoreClient;
use crate::analytics_actor::{AnalyticsAction, AnalyticsError, AnalyticsStore};
use crate::domain::PageAnalytics;

/// Client for the analytics actor.
#[derive(Clone)]
pub struct AnalyticsClient {
    inner: StoreClient<AnalyticsStore>,
}

impl_store_client!(AnalyticsClient, AnalyticsStore, AnalyticsError, analytics);

impl AnalyticsClient {
    pub fn new(inner: StoreClient<AnalyticsStore>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn record_interaction(&self, page_id: String, hotspot_id: String) -> Result<(), AnalyticsError> {
        debug!("Sending request");
        self.inner
            .dispatch(AnalyticsAction::RecordInteraction { page_id, hotspot_id })
            .await?;
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn record_time_spent(&self, page_id: String, duration: Duration) -> Result<(), AnalyticsError> {
        debug!("Sending request");
        self.inner
            .dispatch(AnalyticsAction::RecordTimeSpent { page_id, duration })
            .await?;
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn reset(&self) -> Result<(), AnalyticsError> {
        debug!("Sending request");
        self.inner.dispatch(AnalyticsAction::Reset).await?;
        Ok(())
    }

    /// Collected figures for `page_id` as last published.
    pub fn page(&self, page_id: &str) -> Option<PageAnalytics> {
        self.inner
            .current()
            .iter()
            .find(|page| page.page_id == page_id)
            .cloned()
    }
}
