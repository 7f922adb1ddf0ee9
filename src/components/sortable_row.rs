//! Sortable Row Component
//!
//! One list entry: position number (opens the position modal), name, and
//! drag handle. While selecting, a click toggles the row instead.

use leptos::prelude::*;

use leptos_dragdrop::*;
use reorder_core::Item;

use crate::context::use_page_context;
use crate::dom::row_dom_id;
use crate::store::{store_with_session, store_with_session_mut, use_page_store};

#[component]
pub fn SortableRow(item: Item) -> impl IntoView {
    let store = use_page_store();
    let dnd = use_page_context().dnd;

    let id = item.id;
    let on_mousedown = make_on_mousedown(dnd, id);
    let on_mouseenter = make_on_item_mouseenter(dnd, id);

    let selecting = move || store_with_session(&store, |s| s.selection().is_selecting());
    let is_selected = move || store_with_session(&store, |s| s.selection().contains(id));
    let is_highlighted = move || store_with_session(&store, |s| s.highlighted() == Some(id));
    let is_dragging = move || dnd.dragging_id_read.get() == Some(id);
    let is_drop_slot = move || {
        dnd.over_id_read.get() == Some(id) && dnd.dragging_id_read.get().is_some_and(|d| d != id)
    };

    let row_class = move || {
        let mut c = String::from("sortable-row");
        if is_highlighted() { c.push_str(" highlight"); }
        if is_dragging() { c.push_str(" dragging"); }
        if is_drop_slot() { c.push_str(" drop-target"); }
        if is_selected() { c.push_str(" selected"); }
        c
    };

    // Toggle membership; Normal-mode clicks on the row body do nothing
    let on_row_click = move |_| {
        if click_suppressed(&dnd) || !selecting() {
            return;
        }
        if let Err(e) = store_with_session_mut(&store, |s| s.click_item(id)) {
            log::debug!("[ROW] toggle ignored: {}", e);
        }
    };

    let on_number_click = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        if click_suppressed(&dnd) {
            return;
        }
        if let Err(e) = store_with_session_mut(&store, |s| s.click_item(id)) {
            log::debug!("[ROW] click ignored: {}", e);
        }
    };

    view! {
        <div
            id=row_dom_id(id)
            class=row_class
            on:mousedown=on_mousedown
            on:mouseenter=on_mouseenter
            on:click=on_row_click
        >
            <Show when=selecting>
                <span class="select-mark">{move || if is_selected() { "☑" } else { "☐" }}</span>
            </Show>

            <div class="row-position" on:click=on_number_click>
                {item.position}
            </div>

            {item.image.clone().map(|src| view! { <img class="row-avatar" src=src alt="" /> })}

            <div class="row-name">{item.name.clone()}</div>

            <div class=move || if selecting() { "drag-handle disabled" } else { "drag-handle" }>
                "⋮⋮"
            </div>
        </div>
    }
}
