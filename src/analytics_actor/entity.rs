use std::sync::Arc;

use super::actions::AnalyticsAction;
use crate::actor_framework::{Store, Transition};
use crate::domain::PageAnalytics;

/// Per-page engagement, kept in memory only, in order of first activity.
#[derive(Debug, Default)]
pub struct AnalyticsStore {
    pages: Vec<PageAnalytics>,
}

impl AnalyticsStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn page_mut(&mut self, page_id: String) -> &mut PageAnalytics {
        let index = match self.pages.iter().position(|page| page.page_id == page_id) {
            Some(index) => index,
            None => {
                self.pages.push(PageAnalytics::new(page_id));
                self.pages.len() - 1
            }
        };
        &mut self.pages[index]
    }
}

impl Store for AnalyticsStore {
    const NAME: &'static str = "analytics";
    type State = Arc<[PageAnalytics]>;
    type Action = AnalyticsAction;

    fn snapshot(&self) -> Arc<[PageAnalytics]> {
        self.pages.as_slice().into()
    }

    fn reduce(&mut self, action: AnalyticsAction) -> Transition {
        match action {
            AnalyticsAction::RecordInteraction { page_id, hotspot_id } => {
                self.page_mut(page_id).record_interaction(&hotspot_id);
            }
            AnalyticsAction::RecordTimeSpent { duration, .. } if duration.is_zero() => {
                return Transition::Unchanged;
            }
            AnalyticsAction::RecordTimeSpent { page_id, duration } => {
                self.page_mut(page_id).add_time(duration);
            }
            AnalyticsAction::Reset if self.pages.is_empty() => return Transition::Unchanged,
            AnalyticsAction::Reset => self.pages.clear(),
        }
        Transition::Changed
    }
}
