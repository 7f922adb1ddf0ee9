//! Staff Reorder Page
//!
//! Sticky header with search, the sortable list, the position modal and
//! the bottom action bar. Gestures from leptos-dragdrop are translated into
//! session calls here.

use leptos::ev;
use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use leptos_dragdrop::*;
use reorder_core::{DragEvent, ReorderResult};

use crate::components::{ActionBar, PositionModal, SearchBar, SelectionBar, SortableRow};
use crate::context::use_page_context;
use crate::dom;
use crate::store::{
    store_with_session, store_with_session_mut, store_with_session_untracked, use_page_store,
    PageStateStoreFields, PageStore,
};

fn log_result<T>(what: &str, result: ReorderResult<T>) {
    if let Err(e) = result {
        log::debug!("[DND] {} ignored: {}", what, e);
    }
}

fn handle_gesture(store: PageStore, event: SortableEvent) {
    match event {
        SortableEvent::Start(active) => {
            let result = store_with_session_mut(&store, |s| s.drag(DragEvent::Start { active }));
            log_result("drag start", result);
            if store_with_session_untracked(&store, |s| s.dragging().is_some()) {
                store.locked_scroll_y().set(Some(dom::lock_scroll()));
            }
        }
        SortableEvent::End { active, over } => {
            web_sys::console::log_1(&format!("[DND] Drop: dragged={}, over={:?}", active, over).into());
            release_scroll(store);
            let result = store_with_session_mut(&store, |s| s.drag(DragEvent::End { active, over }));
            log_result("drop", result);
        }
        SortableEvent::Cancel => {
            release_scroll(store);
            let result = store_with_session_mut(&store, |s| s.drag(DragEvent::Cancel));
            log_result("cancel", result);
        }
        SortableEvent::LongPress(id) => {
            let result = store_with_session_mut(&store, |s| s.long_press(id));
            log_result("long press", result);
        }
    }
}

fn release_scroll(store: PageStore) {
    if let Some(y) = store.locked_scroll_y().get_untracked() {
        store.locked_scroll_y().set(None);
        dom::unlock_scroll(y);
    }
}

#[component]
pub fn StaffReorderPage() -> impl IntoView {
    let store = use_page_store();
    let ctx = use_page_context();
    let dnd = ctx.dnd;
    let search_ref = NodeRef::<Div>::new();

    let options = SortableOptions {
        long_press_ms: f64::from(ctx.long_press_ms()),
    };
    bind_sortable(dnd, options, move |event| handle_gesture(store, event));

    // Sortable rows refuse to drag while selecting
    Effect::new(move |_| {
        let enabled = store_with_session(&store, |s| s.selection().drag_enabled());
        dnd.enabled_write.set(enabled);
    });

    // Bring the highlighted match on screen whenever it changes
    let highlighted = Memo::new(move |_| store_with_session(&store, |s| s.highlighted()));
    Effect::new(move |_| {
        if let Some(id) = highlighted.get() {
            dom::scroll_item_into_view(id);
        }
    });

    // Pressing anywhere outside the search area resets the search
    let _outside = window_event_listener(ev::mousedown, move |ev| {
        let inside = match (search_ref.get_untracked(), ev.target()) {
            (Some(area), Some(target)) => target
                .dyn_ref::<web_sys::Node>()
                .is_some_and(|node| area.contains(Some(node))),
            _ => false,
        };
        if !inside && store_with_session_untracked(&store, |s| s.search().has_query()) {
            store_with_session_mut(&store, |s| s.clear_search());
        }
    });

    let label = ctx.item_label();
    let rows = move || store_with_session(&store, |s| s.engine().items().to_vec());
    let is_empty = move || store_with_session(&store, |s| s.engine().is_empty());

    view! {
        <div class="reorder-page">
            <div class="reorder-header">
                <h2>{format!("{}一覧", label)}</h2>
                <SearchBar area_ref=search_ref />
            </div>

            <SelectionBar />

            <div class="sortable-list" on:mouseleave=make_on_list_mouseleave(dnd)>
                <For
                    each=rows
                    key=|item| (item.id, item.position, item.name.clone())
                    children=move |item| view! { <SortableRow item=item /> }
                />
                <Show when=is_empty>
                    <div class="empty-list">"表示する項目がありません"</div>
                </Show>
            </div>

            <PositionModal />
            <ActionBar />
        </div>
    }
}
