//! Selection Bar Component
//!
//! Shown in selection mode: selected count, group move to a position,
//! group delete, and cancel.

use leptos::prelude::*;

use reorder_core::parse_position;

use crate::components::DeleteConfirmButton;
use crate::store::{store_with_session, store_with_session_mut, use_page_store};

#[component]
pub fn SelectionBar() -> impl IntoView {
    let store = use_page_store();
    let (target, set_target) = signal(String::from("1"));

    let selecting = move || store_with_session(&store, |s| s.selection().is_selecting());
    let count = move || store_with_session(&store, |s| s.selection().count());
    let len = move || store_with_session(&store, |s| s.engine().len());

    let on_move = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let requested = parse_position(&target.get_untracked());
        match store_with_session_mut(&store, |s| s.move_selected_to(requested)) {
            Ok(outcome) => log::debug!("[SELECT] group move to {}: {:?}", requested, outcome),
            Err(e) => log::debug!("[SELECT] group move ignored: {}", e),
        }
        set_target.set(String::from("1"));
    };

    let on_delete = Callback::new(move |_| {
        if let Err(e) = store_with_session_mut(&store, |s| s.delete_selected()) {
            log::debug!("[SELECT] delete ignored: {}", e);
        }
    });

    view! {
        <Show when=selecting>
            <div class="selection-bar">
                <span class="selection-count">{move || format!("{}件選択中", count())}</span>

                <form class="group-move-form" on:submit=on_move>
                    <input
                        type="number"
                        min="1"
                        max=len
                        prop:value=move || target.get()
                        on:input=move |ev| set_target.set(event_target_value(&ev))
                    />
                    <button type="submit" disabled=move || count() == 0>"番目へ移動"</button>
                </form>

                <DeleteConfirmButton button_class="group-delete-btn" on_confirm=on_delete />

                <button
                    class="selection-cancel"
                    on:click=move |_| store_with_session_mut(&store, |s| s.cancel_selection())
                >
                    "キャンセル"
                </button>
            </div>
        </Show>
    }
}
