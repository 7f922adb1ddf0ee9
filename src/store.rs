//! Page State Store
//!
//! Uses Leptos reactive_stores. The whole page owns exactly one
//! ReorderSession; every event goes through it.

use leptos::prelude::*;
use reactive_stores::Store;
use reorder_core::{ReorderEngine, ReorderSession};

/// Page state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct PageState {
    /// List, history, selection, search and editor
    pub session: ReorderSession,
    /// Scroll offset saved while a drag pins the page
    pub locked_scroll_y: Option<f64>,
}

impl PageState {
    pub fn new(engine: ReorderEngine) -> Self {
        Self {
            session: ReorderSession::new(engine),
            locked_scroll_y: None,
        }
    }
}

/// Type alias for the store
pub type PageStore = Store<PageState>;

/// Get the page store from context
pub fn use_page_store() -> PageStore {
    expect_context::<PageStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Run `f` against the session, notifying subscribers afterwards
pub fn store_with_session_mut<T>(store: &PageStore, f: impl FnOnce(&mut ReorderSession) -> T) -> T {
    let binding = store.session();
    let mut session = binding.write();
    f(&mut session)
}

/// Read from the session (tracked)
pub fn store_with_session<T>(store: &PageStore, f: impl FnOnce(&ReorderSession) -> T) -> T {
    store.session().with(f)
}

/// Read from the session inside event handlers
pub fn store_with_session_untracked<T>(store: &PageStore, f: impl FnOnce(&ReorderSession) -> T) -> T {
    store.session().with_untracked(f)
}
