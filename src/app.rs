//! Staff Reorder App
//!
//! Page shell: header plus the reorder page, with the store and context
//! provided to every child.

use leptos::prelude::*;
use leptos_dragdrop::create_dnd_signals;
use reactive_stores::Store;
use reorder_core::{Item, ReorderConfig, ReorderEngine};

use crate::components::StaffReorderPage;
use crate::context::PageContext;
use crate::store::PageState;

#[component]
pub fn App(config: ReorderConfig, items: Vec<Item>) -> impl IntoView {
    let engine = ReorderEngine::with_history_limit(items, config.history_limit);
    provide_context(Store::new(PageState::new(engine)));
    provide_context(PageContext::new(config, create_dnd_signals()));

    view! {
        <div class="app-shell">
            <header class="app-header">
                <h1>"スタッフ管理システム"</h1>
                <p class="app-subtitle">"スタッフの並び替えデモ"</p>
            </header>

            <main>
                <StaffReorderPage />
            </main>
        </div>
    }
}
