/// Reusable UI components

use yew::prelude::*;

use crate::tab_data::{Tab, TabId};

#[derive(Properties, PartialEq)]
pub struct TabRowProps {
    pub tab: Tab,
    pub is_active: bool,
    pub on_activate: Callback<TabId>,
    pub on_toggle_favorite: Callback<TabId>,
    pub on_close: Callback<TabId>,
}

/// One list row: favicon, clickable title, favorite toggle and a close
/// button that is disabled while the tab is favorited. The row's hover
/// tooltip shows the tab's URL.
#[function_component(TabRow)]
pub fn tab_row(props: &TabRowProps) -> Html {
    let tab = &props.tab;
    let id = tab.id;

    let row_class = classes!(
        "tab-item",
        tab.is_favorite.then_some("favorite"),
        props.is_active.then_some("active"),
    );

    html! {
        <li class={row_class} title={format!("URL: {}", tab.url)}>
            <img src={tab.fav_icon_url.clone()} alt="Favicon" class="tab-favicon" />
            <span class="tab-title" onclick={props.on_activate.reform(move |_| id)}>
                {&tab.title}
            </span>
            <button
                class="favorite-button"
                onclick={props.on_toggle_favorite.reform(move |_| id)}
            >
                {if tab.is_favorite { "★" } else { "☆" }}
            </button>
            <button
                class="close-button"
                onclick={props.on_close.reform(move |_| id)}
                disabled={tab.is_favorite}
            >
                {"✖"}
            </button>
        </li>
    }
}
