//! Page Context
//!
//! Configuration and drag signals shared via Leptos Context API.

use leptos::prelude::*;
use leptos_dragdrop::DndSignals;
use reorder_core::ReorderConfig;

#[derive(Clone, Copy)]
pub struct PageContext {
    config: StoredValue<ReorderConfig>,
    /// Drag state for the sortable list
    pub dnd: DndSignals,
}

impl PageContext {
    pub fn new(config: ReorderConfig, dnd: DndSignals) -> Self {
        Self {
            config: StoredValue::new(config),
            dnd,
        }
    }

    /// Noun used in the header and search box, e.g. スタッフ
    pub fn item_label(&self) -> String {
        self.config.with_value(|c| c.item_label.clone())
    }

    pub fn apply_delay_ms(&self) -> u32 {
        self.config.with_value(|c| c.apply_delay_ms)
    }

    pub fn long_press_ms(&self) -> u32 {
        self.config.with_value(|c| c.long_press_ms)
    }
}

pub fn use_page_context() -> PageContext {
    use_context::<PageContext>().expect("PageContext should be provided")
}
