/// In-memory view state for the popup tab list

use crate::tab_data::{HostTab, Tab, TabId};

/// The currently known tabs plus which one the host reported active at the
/// last fetch. The store is the sole owner of its records; a fetch replaces
/// the whole list rather than merging.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TabStore {
    pub tabs: Vec<Tab>,
    pub active_tab_id: Option<TabId>,
}

impl TabStore {
    pub fn new() -> Self {
        TabStore::default()
    }

    /// Replace the whole list from a host query result. Prior records are
    /// discarded, including any favorite flags the user had set.
    pub fn replace_all(&mut self, host_tabs: &[HostTab], now_ms: f64) {
        self.active_tab_id = host_tabs.iter().find(|t| t.active).map(|t| t.id);
        self.tabs = host_tabs
            .iter()
            .map(|t| Tab::from_host(t, now_ms))
            .collect();
    }

    pub fn get(&self, id: TabId) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == id)
    }

    /// Flip the favorite flag on the matching record. Returns false when the
    /// id is not in the store.
    pub fn toggle_favorite(&mut self, id: TabId) -> bool {
        self.tabs
            .iter_mut()
            .find(|t| t.id == id)
            .map(|tab| {
                tab.is_favorite = !tab.is_favorite;
            })
            .is_some()
    }

    /// Remove the matching record. Returns false when the id is not in the store.
    pub fn remove(&mut self, id: TabId) -> bool {
        let original_len = self.tabs.len();
        self.tabs.retain(|t| t.id != id);
        self.tabs.len() < original_len
    }

    /// Ids eligible for a bulk close: neither the active tab nor a favorite.
    pub fn close_all_targets(&self) -> Vec<TabId> {
        self.tabs
            .iter()
            .filter(|t| Some(t.id) != self.active_tab_id && !t.is_favorite)
            .map(|t| t.id)
            .collect()
    }

    /// Keep only active-or-favorite records.
    pub fn retain_protected(&mut self) {
        let active = self.active_tab_id;
        self.tabs.retain(|t| Some(t.id) == active || t.is_favorite);
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }
}
