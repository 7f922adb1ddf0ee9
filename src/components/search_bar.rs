//! Search Bar Component
//!
//! Query input with previous/next match buttons and an `i/n` counter.
//! The buttons only show once something has been typed.

use leptos::html::Div;
use leptos::prelude::*;

use crate::context::use_page_context;
use crate::store::{store_with_session, store_with_session_mut, use_page_store};

#[component]
pub fn SearchBar(
    /// Presses inside this area do not reset the search
    area_ref: NodeRef<Div>,
) -> impl IntoView {
    let store = use_page_store();
    let label = use_page_context().item_label();

    let query = move || store_with_session(&store, |s| s.search().query().to_string());
    let has_query = move || store_with_session(&store, |s| s.search().has_query());
    let no_matches = move || store_with_session(&store, |s| s.search().matches().is_empty());
    let counter = move || store_with_session(&store, |s| s.search().counter());

    let on_prev = move |_| {
        store_with_session_mut(&store, |s| s.prev_match());
    };
    let on_next = move |_| {
        store_with_session_mut(&store, |s| s.next_match());
    };

    view! {
        <div class="search-area" node_ref=area_ref>
            <Show when=has_query>
                <button class="match-nav" on:click=on_prev disabled=no_matches>"▲"</button>
            </Show>
            <input
                type="text"
                class="search-input"
                placeholder=format!("{}検索...", label)
                aria-label=format!("{}検索", label)
                prop:value=query
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    store_with_session_mut(&store, |s| s.set_search(&text));
                }
            />
            <Show when=has_query>
                <button class="match-nav" on:click=on_next disabled=no_matches>"▼"</button>
                <span class="match-counter">{counter}</span>
            </Show>
        </div>
    }
}
