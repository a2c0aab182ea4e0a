/// Tab fetch and mutation operations against the host browser

use crate::error::HostError;
use crate::host::TabHost;
use crate::store::TabStore;
use crate::tab_data::TabId;

/// Result of a single-tab close request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseOutcome {
    /// The host confirmed the close and the record was dropped from the store.
    Closed,
    /// The record is favorited; no host call was made and the store is untouched.
    Blocked,
}

/// Query the host for all open tabs and replace the store's contents,
/// recording which tab is active. On failure the store is left unchanged,
/// favorite flags included; there is no partial update.
pub async fn fetch_tabs<H: TabHost>(host: &H, store: &mut TabStore) -> Result<(), HostError> {
    let host_tabs = host.query_tabs().await?;
    store.replace_all(&host_tabs, host.now_ms());
    Ok(())
}

/// Ask the host to bring a tab to the foreground. The store is not touched;
/// the next fetch picks up the new active tab.
pub async fn activate_tab<H: TabHost>(host: &H, id: TabId) -> Result<(), HostError> {
    host.activate(id).await
}

/// Close one tab. Favorited records are protected: the request is blocked
/// before any host call. Otherwise the record is removed only after the host
/// confirms the close. Ids unknown to the store are still forwarded to the
/// host; there is simply nothing local to drop.
pub async fn close_tab<H: TabHost>(
    host: &H,
    store: &mut TabStore,
    id: TabId,
) -> Result<CloseOutcome, HostError> {
    if store.get(id).is_some_and(|tab| tab.is_favorite) {
        return Ok(CloseOutcome::Blocked);
    }

    host.remove(id).await?;
    store.remove(id);
    Ok(CloseOutcome::Closed)
}

/// Plan a bulk close of every tab that is neither active nor favorited. The
/// store is trimmed eagerly, before the host has confirmed anything; the
/// caller fires one independent close request per returned id and their
/// results never flow back into the store. A close that fails host-side
/// leaves the list stale until the next fetch.
pub fn close_all_non_favorite(store: &mut TabStore) -> Vec<TabId> {
    let targets = store.close_all_targets();
    store.retain_protected();
    targets
}
