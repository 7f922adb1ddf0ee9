//! Save Command
//!
//! There is no backend: saved positions are logged and announced to the
//! host page as a `staff-reorder:save` event whose detail is the payload.

use reorder_core::{PositionSink, PositionUpdate};
use wasm_bindgen::JsValue;

pub const SAVE_EVENT: &str = "staff-reorder:save";

/// Fire-and-forget sink for committed positions
pub struct HostSink;

impl PositionSink for HostSink {
    fn save_positions(&mut self, positions: &[PositionUpdate]) {
        match serde_json::to_string(positions) {
            Ok(json) => web_sys::console::log_1(&format!("[SAVE] Saving positions: {}", json).into()),
            Err(e) => log::error!("[SAVE] could not serialize positions: {}", e),
        }

        let detail = match serde_wasm_bindgen::to_value(positions) {
            Ok(detail) => detail,
            Err(e) => {
                log::error!("[SAVE] could not convert positions: {}", e);
                return;
            }
        };
        if let Err(e) = dispatch(&detail) {
            log::warn!("[SAVE] {} not dispatched: {:?}", SAVE_EVENT, e);
        }
    }
}

fn dispatch(detail: &JsValue) -> Result<(), JsValue> {
    let win = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let init = web_sys::CustomEventInit::new();
    init.set_detail(detail);
    let event = web_sys::CustomEvent::new_with_event_init_dict(SAVE_EVENT, &init)?;
    win.dispatch_event(&event)?;
    Ok(())
}
