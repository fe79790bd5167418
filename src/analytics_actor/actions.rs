use std::time::Duration;

/// Engagement events reported by the catalog viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalyticsAction {
    /// A hotspot on `page_id` was clicked or hovered.
    RecordInteraction { page_id: String, hotspot_id: String },
    /// The reader spent `duration` on `page_id`.
    RecordTimeSpent { page_id: String, duration: Duration },
    /// Forget everything collected so far.
    Reset,
}
