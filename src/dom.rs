//! DOM Side Effects
//!
//! Scroll locking during drags, scrolling matches into view, alerts.

use leptos::prelude::request_animation_frame;

/// Element id of a list row
pub fn row_dom_id(id: u32) -> String {
    format!("item-{}", id)
}

/// Pin the body in place; returns the scroll offset to restore
pub fn lock_scroll() -> f64 {
    let Some(win) = web_sys::window() else { return 0.0 };
    let y = win.scroll_y().unwrap_or(0.0);
    if let Some(body) = win.document().and_then(|d| d.body()) {
        let style = body.style();
        let _ = style.set_property("position", "fixed");
        let _ = style.set_property("top", &format!("-{}px", y));
        let _ = style.set_property("width", "100%");
        let _ = style.set_property("overflow", "hidden");
    }
    y
}

pub fn unlock_scroll(y: f64) {
    let Some(win) = web_sys::window() else { return };
    if let Some(body) = win.document().and_then(|d| d.body()) {
        let style = body.style();
        for prop in ["position", "top", "width", "overflow"] {
            let _ = style.remove_property(prop);
        }
    }
    win.scroll_to_with_x_and_y(0.0, y);
}

/// Center a row on screen after the next paint
pub fn scroll_item_into_view(id: u32) {
    request_animation_frame(move || {
        let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(&row_dom_id(id)))
        else {
            return;
        };
        let opts = web_sys::ScrollIntoViewOptions::new();
        opts.set_block(web_sys::ScrollLogicalPosition::Center);
        opts.set_behavior(web_sys::ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
    });
}

pub fn alert(message: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(message);
    }
}
