use tracing::debug;

use super::actions::NavigationAction;
use crate::actor_framework::{Store, Transition};

/// Where the reader currently is in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogPosition {
    pub index: usize,
    pub page_count: usize,
}

impl CatalogPosition {
    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 >= self.page_count
    }
}

/// Bounded page index. The page count is fixed when the store is created.
#[derive(Debug)]
pub struct CatalogNavigation {
    index: usize,
    page_count: usize,
}

impl CatalogNavigation {
    pub fn new(page_count: usize) -> Self {
        Self {
            index: 0,
            page_count,
        }
    }

    fn target(&self, action: NavigationAction) -> usize {
        match action {
            NavigationAction::GoToPage(index) if index < self.page_count => index,
            NavigationAction::GoToPage(_) => self.index,
            NavigationAction::NextPage if self.index + 1 < self.page_count => self.index + 1,
            NavigationAction::NextPage => self.index,
            NavigationAction::PreviousPage => self.index.saturating_sub(1),
        }
    }
}

impl Store for CatalogNavigation {
    const NAME: &'static str = "catalog_navigation";
    type State = CatalogPosition;
    type Action = NavigationAction;

    fn snapshot(&self) -> CatalogPosition {
        CatalogPosition {
            index: self.index,
            page_count: self.page_count,
        }
    }

    fn reduce(&mut self, action: NavigationAction) -> Transition {
        let target = self.target(action);
        if target == self.index {
            debug!(?action, index = self.index, "Navigation request ignored");
            return Transition::Unchanged;
        }

        self.index = target;
        debug!(index = self.index, "Page changed");
        Transition::Changed
    }
}
