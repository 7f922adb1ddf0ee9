//! Action Bar Component
//!
//! Floating undo / redo / save controls. Hidden while the position modal
//! is open.

use leptos::prelude::*;

use crate::commands::HostSink;
use crate::dom;
use crate::store::{store_with_session, store_with_session_mut, use_page_store};

#[component]
pub fn ActionBar() -> impl IntoView {
    let store = use_page_store();

    let visible = move || store_with_session(&store, |s| s.editor().is_none());
    let can_undo = move || store_with_session(&store, |s| s.engine().can_undo());
    let can_redo = move || store_with_session(&store, |s| s.engine().can_redo());

    let on_save = move |_| {
        let saved = store_with_session_mut(&store, |s| s.save(&mut HostSink));
        log::info!("[SAVE] {} positions handed off", saved.len());
        dom::alert("並び替えを保存しました");
    };

    view! {
        <Show when=visible>
            <div class="action-bar">
                <button
                    class="history-btn"
                    title="元に戻す"
                    disabled=move || !can_undo()
                    on:click=move |_| {
                        store_with_session_mut(&store, |s| s.undo());
                    }
                >
                    "↶"
                </button>
                <button class="save-btn" on:click=on_save>"並び替えを保存"</button>
                <button
                    class="history-btn"
                    title="やり直す"
                    disabled=move || !can_redo()
                    on:click=move |_| {
                        store_with_session_mut(&store, |s| s.redo());
                    }
                >
                    "↷"
                </button>
            </div>
        </Show>
    }
}
