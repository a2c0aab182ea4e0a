/// Popup UI for the Tabber extension

use patternfly_yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::actions::{activate_tab, close_all_non_favorite, close_tab, fetch_tabs, CloseOutcome};
use crate::host::{ChromeHost, TabHost};
use crate::store::TabStore;
use crate::tab_data::TabId;
use crate::ui::components::TabRow;

#[function_component(App)]
pub fn app() -> Html {
    let store = use_state(TabStore::new);

    // Fetch all tabs handler
    let on_fetch = {
        let store = store.clone();

        Callback::from(move |_| {
            let store = store.clone();

            spawn_local(async move {
                let mut next = (*store).clone();
                match fetch_tabs(&ChromeHost, &mut next).await {
                    Ok(()) => store.set(next),
                    Err(err) => log::error!("Error fetching tabs: {err}"),
                }
            });
        })
    };

    // Jump to a tab; the host reflects the change on the next fetch
    let on_activate = Callback::from(move |id: TabId| {
        spawn_local(async move {
            let _ = activate_tab(&ChromeHost, id).await;
        });
    });

    // Favorite toggle handler: local state only, no host call
    let on_toggle_favorite = {
        let store = store.clone();

        Callback::from(move |id: TabId| {
            let mut next = (*store).clone();
            if next.toggle_favorite(id) {
                store.set(next);
            }
        })
    };

    // Close one tab handler
    let on_close = {
        let store = store.clone();

        Callback::from(move |id: TabId| {
            let store = store.clone();

            spawn_local(async move {
                let mut next = (*store).clone();
                match close_tab(&ChromeHost, &mut next, id).await {
                    Ok(CloseOutcome::Closed) => store.set(next),
                    Ok(CloseOutcome::Blocked) => warn_favorite_close(),
                    Err(err) => log::error!("Error closing tab {id}: {err}"),
                }
            });
        })
    };

    // Bulk close handler: the list is trimmed before the host confirms each
    // close, so a host-side failure leaves it stale until the next fetch.
    let on_close_all = {
        let store = store.clone();

        Callback::from(move |_| {
            let mut next = (*store).clone();
            let targets = close_all_non_favorite(&mut next);
            store.set(next);

            for id in targets {
                spawn_local(async move {
                    if let Err(err) = ChromeHost.remove(id).await {
                        log::debug!("close request for tab {id} failed: {err}");
                    }
                });
            }
        })
    };

    html! {
        <div class="app">
            <h1 class="popup-title">{"Tabber"}</h1>

            if store.is_empty() {
                <p class="empty-state">{"No tabs fetched yet."}</p>
            } else {
                <ul class="tab-list">
                    {for store.tabs.iter().map(|tab| html! {
                        <TabRow
                            key={tab.id}
                            tab={tab.clone()}
                            is_active={store.active_tab_id == Some(tab.id)}
                            on_activate={on_activate.clone()}
                            on_toggle_favorite={on_toggle_favorite.clone()}
                            on_close={on_close.clone()}
                        />
                    })}
                </ul>
            }

            <div class="flex-column-gap">
                <Button onclick={on_fetch} block={true}>
                    {"Get All Tabs"}
                </Button>
                <Button onclick={on_close_all} variant={ButtonVariant::Danger} block={true}>
                    {"Close All Non-Favorite Tabs"}
                </Button>
            </div>
        </div>
    }
}

// Blocking alert matching the host browser's native warning dialog
fn warn_favorite_close() {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message("You cannot close a favorite tab!");
    }
}
