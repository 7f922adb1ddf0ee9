//! Leptos DragDrop Utilities
//!
//! Sortable-list drag-and-drop for Leptos using mouse events.
//! Uses a movement threshold to distinguish click from drag, and a timer
//! started on press to recognise a long press while the button is held.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Gesture events reported to the list owner
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortableEvent {
    /// Pointer moved past the threshold while pressing an item
    Start(u32),
    /// Released; `over` is the last item hovered, if any
    End { active: u32, over: Option<u32> },
    /// Escape pressed during a drag
    Cancel,
    /// Held still for at least the long-press time
    LongPress(u32),
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub dragging_id_read: ReadSignal<Option<u32>>,
    pub dragging_id_write: WriteSignal<Option<u32>>,
    /// Item currently under the pointer while dragging
    pub over_id_read: ReadSignal<Option<u32>>,
    pub over_id_write: WriteSignal<Option<u32>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending item id (mousedown but not yet dragging)
    pub pending_id_read: ReadSignal<Option<u32>>,
    pub pending_id_write: WriteSignal<Option<u32>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
    /// Press timestamp (ms); identifies the press a long-press timer belongs to
    pub pressed_at_read: ReadSignal<f64>,
    pub pressed_at_write: WriteSignal<f64>,
    /// Long press already reported for the current press
    pub long_pressed_read: ReadSignal<bool>,
    pub long_pressed_write: WriteSignal<bool>,
    /// Dragging is refused while false; long presses still register
    pub enabled_read: ReadSignal<bool>,
    pub enabled_write: WriteSignal<bool>,
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

/// How long a still press must last to count as a long press
#[derive(Clone, Copy, Debug)]
pub struct SortableOptions {
    pub long_press_ms: f64,
}

impl Default for SortableOptions {
    fn default() -> Self {
        Self { long_press_ms: 500.0 }
    }
}

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_id_read, dragging_id_write) = signal(None::<u32>);
    let (over_id_read, over_id_write) = signal(None::<u32>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_id_read, pending_id_write) = signal(None::<u32>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    let (pressed_at_read, pressed_at_write) = signal(0f64);
    let (long_pressed_read, long_pressed_write) = signal(false);
    let (enabled_read, enabled_write) = signal(true);
    DndSignals {
        dragging_id_read,
        dragging_id_write,
        over_id_read,
        over_id_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_id_read,
        pending_id_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
        pressed_at_read,
        pressed_at_write,
        long_pressed_read,
        long_pressed_write,
        enabled_read,
        enabled_write,
    }
}

fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

/// True for a short moment after a drag or long press, so the trailing
/// click can be ignored
pub fn click_suppressed(dnd: &DndSignals) -> bool {
    dnd.drag_just_ended_read.get_untracked()
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_id_write.set(None);
    dnd.over_id_write.set(None);
    dnd.pending_id_write.set(None);
    dnd.drag_just_ended_write.set(true);

    if let Some(win) = web_sys::window() {
        let clear = dnd.drag_just_ended_write;
        let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            clear.set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), 100);
        cb.forget();
    }
}

/// Create mousedown handler for sortable items
/// Records pending drag with start position and time
pub fn make_on_mousedown(dnd: DndSignals, item_id: u32) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Ignore if target is input or button
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
            }
            dnd.pending_id_write.set(Some(item_id));
            dnd.long_pressed_write.set(false);
            dnd.start_x_write.set(ev.client_x());
            dnd.start_y_write.set(ev.client_y());
            dnd.pressed_at_write.set(now_ms());
        }
    }
}

/// Create mouseenter handler for items (becomes the drop slot)
pub fn make_on_item_mouseenter(dnd: DndSignals, item_id: u32) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.get_untracked().is_some() {
            dnd.over_id_write.set(Some(item_id));
        }
    }
}

/// Create mouseleave handler for the list container.
/// Rows keep the last hovered slot; only leaving the list clears it.
pub fn make_on_list_mouseleave(dnd: DndSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.get_untracked().is_some() {
            dnd.over_id_write.set(None);
        }
    }
}

/// A timer armed for `armed` (item, press time) fires only if that same
/// press is still pending and has not turned into a drag
fn long_press_due(armed: (u32, f64), pending: Option<u32>, pressed_at: f64, dragging: Option<u32>) -> bool {
    pending == Some(armed.0) && pressed_at == armed.1 && dragging.is_none()
}

fn add_document_listener(event: &str, listener: &js_sys::Function) {
    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback(event, listener);
        }
    }
}

/// Bind document-level mousedown / mousemove / mouseup / keydown handlers.
/// Every recognised gesture is reported through `on_event`.
pub fn bind_sortable<F>(dnd: DndSignals, options: SortableOptions, on_event: F)
where
    F: Fn(SortableEvent) + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;

    // Arm the long-press timer; item mousedown has already recorded the press
    let on_hold = on_event.clone();
    let on_mousedown = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let Some(id) = dnd.pending_id_read.get_untracked() else { return };
        let pressed_at = dnd.pressed_at_read.get_untracked();
        let on_hold = on_hold.clone();
        let fire = Closure::once_into_js(move || {
            let due = long_press_due(
                (id, pressed_at),
                dnd.pending_id_read.get_untracked(),
                dnd.pressed_at_read.get_untracked(),
                dnd.dragging_id_read.get_untracked(),
            );
            if due {
                dnd.pending_id_write.set(None);
                dnd.long_pressed_write.set(true);
                on_hold(SortableEvent::LongPress(id));
            }
        });
        if let Some(win) = web_sys::window() {
            let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
                fire.unchecked_ref(),
                options.long_press_ms as i32,
            );
        }
    });
    add_document_listener("mousedown", on_mousedown.as_ref().unchecked_ref());
    on_mousedown.forget();

    // Start dragging once the pointer moves far enough
    let on_start = on_event.clone();
    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = dnd.pending_id_read.get_untracked();
        if let (Some(id), None) = (pending, dnd.dragging_id_read.get_untracked()) {
            let dx = (ev.client_x() - dnd.start_x_read.get_untracked()).abs();
            let dy = (ev.client_y() - dnd.start_y_read.get_untracked()).abs();
            if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
                if dnd.enabled_read.get_untracked() {
                    dnd.dragging_id_write.set(Some(id));
                    dnd.over_id_write.set(Some(id));
                    on_start(SortableEvent::Start(id));
                } else {
                    // Moved: neither a drag nor a long press
                    dnd.pending_id_write.set(None);
                }
            }
        }
    });
    add_document_listener("mousemove", on_mousemove.as_ref().unchecked_ref());
    on_mousemove.forget();

    // Drop, end of a long press, or plain click
    let on_release = on_event.clone();
    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        if let Some(active) = dnd.dragging_id_read.get_untracked() {
            let over = dnd.over_id_read.get_untracked();
            end_drag(&dnd);
            on_release(SortableEvent::End { active, over });
        } else if dnd.long_pressed_read.get_untracked() {
            // Swallow the click that follows the release
            dnd.long_pressed_write.set(false);
            end_drag(&dnd);
        } else {
            // Plain click: let the click event fire on the element
            dnd.pending_id_write.set(None);
        }
    });
    add_document_listener("mouseup", on_mouseup.as_ref().unchecked_ref());
    on_mouseup.forget();

    // Escape cancels an active drag
    let on_cancel = on_event;
    let on_keydown = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" && dnd.dragging_id_read.get_untracked().is_some() {
            end_drag(&dnd);
            on_cancel(SortableEvent::Cancel);
        }
    });
    add_document_listener("keydown", on_keydown.as_ref().unchecked_ref());
    on_keydown.forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_press_fires_while_still_held() {
        assert!(long_press_due((3, 120.0), Some(3), 120.0, None));
    }

    #[test]
    fn test_long_press_skipped_after_release_or_drag() {
        // Released (pending cleared)
        assert!(!long_press_due((3, 120.0), None, 120.0, None));
        // Moved far enough to drag
        assert!(!long_press_due((3, 120.0), Some(3), 120.0, Some(3)));
    }

    #[test]
    fn test_long_press_skipped_for_a_later_press() {
        assert!(!long_press_due((3, 120.0), Some(3), 900.0, None));
        assert!(!long_press_due((3, 120.0), Some(4), 900.0, None));
    }
}
