use std::time::Duration;

/// How often a single hotspot on a page was interacted with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotspotInteraction {
    pub hotspot_id: String,
    pub count: u64,
}

/// Engagement figures collected for one catalog page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageAnalytics {
    pub page_id: String,
    pub time_spent: Duration,
    pub interactions: Vec<HotspotInteraction>,
}

impl PageAnalytics {
    pub fn new(page_id: impl Into<String>) -> Self {
        Self {
            page_id: page_id.into(),
            time_spent: Duration::ZERO,
            interactions: Vec::new(),
        }
    }

    pub fn record_interaction(&mut self, hotspot_id: &str) {
        match self
            .interactions
            .iter_mut()
            .find(|interaction| interaction.hotspot_id == hotspot_id)
        {
            Some(interaction) => interaction.count += 1,
            None => self.interactions.push(HotspotInteraction {
                hotspot_id: hotspot_id.to_string(),
                count: 1,
            }),
        }
    }

    pub fn add_time(&mut self, duration: Duration) {
        self.time_spent = self.time_spent.saturating_add(duration);
    }

    pub fn interaction_count(&self, hotspot_id: &str) -> u64 {
        self.interactions
            .iter()
            .find(|interaction| interaction.hotspot_id == hotspot_id)
            .map(|interaction| interaction.count)
            .unwrap_or(0)
    }

    pub fn total_interactions(&self) -> u64 {
        self.interactions.iter().map(|interaction| interaction.count).sum()
    }
}
