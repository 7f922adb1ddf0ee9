//! Position Modal Component
//!
//! "数値を指定して並び替え": pick a new position with step buttons, a number
//! field or a slider. Confirming shows a short "更新中..." overlay before the
//! move is applied.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use reorder_core::PositionEditor;

use crate::context::use_page_context;
use crate::store::{store_with_session, store_with_session_mut, use_page_store, PageStore};

fn read_editor<T>(store: &PageStore, f: impl FnOnce(&PositionEditor) -> T) -> Option<T> {
    store_with_session(store, |s| s.editor().map(f))
}

fn edit(store: &PageStore, f: impl FnOnce(&mut PositionEditor)) {
    store_with_session_mut(store, |s| {
        if let Some(editor) = s.editor_mut() {
            f(editor);
        }
    });
}

#[component]
pub fn PositionModal() -> impl IntoView {
    let store = use_page_store();
    let ctx = use_page_context();

    let is_open = move || store_with_session(&store, |s| s.editor().is_some());
    let name = move || read_editor(&store, |e| e.item_name().to_string()).unwrap_or_default();
    let current = move || read_editor(&store, PositionEditor::current).unwrap_or(1);
    let value = move || read_editor(&store, PositionEditor::value).unwrap_or(1);
    let max = move || read_editor(&store, PositionEditor::max).unwrap_or(1);
    let midpoint = move || read_editor(&store, PositionEditor::midpoint).unwrap_or(1);
    let applying = move || read_editor(&store, PositionEditor::is_applying).unwrap_or(false);
    let track_style = move || {
        let pct = read_editor(&store, PositionEditor::fill_percent).unwrap_or(0.0);
        format!(
            "background: linear-gradient(to right, #F59E0B 0%, #F59E0B {pct}%, #d1d5db {pct}%, #d1d5db 100%);"
        )
    };

    // Ignored while an apply is pending
    let close = move || {
        store_with_session_mut(&store, |s| s.close_editor());
    };

    let on_apply = move |_| {
        let Some(pending) = store_with_session_mut(&store, |s| s.confirm_edit()) else {
            return;
        };
        let delay = ctx.apply_delay_ms();
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            match store_with_session_mut(&store, |s| s.apply_edit(pending)) {
                Ok(outcome) => log::debug!(
                    "[MODAL] item {} to {}: {:?}",
                    pending.item_id,
                    pending.target,
                    outcome
                ),
                Err(e) => log::debug!("[MODAL] apply ignored: {}", e),
            }
        });
    };

    view! {
        <Show when=is_open>
            <div class="modal-overlay" on:mousedown=move |_| close()>
                <div class="modal-body" on:mousedown=|ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <h3>"数値を指定して並び替え"</h3>
                        <button class="modal-close" on:click=move |_| close()>"×"</button>
                    </div>

                    <div class="modal-item">
                        <div class="modal-item-name">{name}</div>
                        <div class="modal-item-current">{move || format!("現在の順番: {}", current())}</div>
                    </div>

                    <div class="modal-stepper">
                        <button on:click=move |_| edit(&store, PositionEditor::decrement)>"<"</button>
                        <input
                            type="number"
                            class="modal-value"
                            min="1"
                            max=max
                            prop:value=value
                            on:change=move |ev| {
                                let raw = event_target_value(&ev);
                                edit(&store, |e| e.set_value(&raw));
                            }
                        />
                        <button on:click=move |_| edit(&store, PositionEditor::increment)>">"</button>
                    </div>

                    <div class="modal-scale">
                        <span>"1"</span>
                        <span>{midpoint}</span>
                        <span>{max}</span>
                    </div>

                    <div class="modal-slider">
                        <input
                            type="range"
                            min="1"
                            max=max
                            prop:value=value
                            style=track_style
                            on:input=move |ev| {
                                let raw = event_target_value(&ev);
                                edit(&store, |e| e.set_value(&raw));
                            }
                        />
                    </div>

                    <div class="modal-actions">
                        <button class="modal-cancel" on:click=move |_| close()>"閉じる"</button>
                        <button class="modal-apply" on:click=on_apply>"移動する"</button>
                    </div>

                    <Show when=applying>
                        <div class="modal-feedback">"更新中..."</div>
                    </Show>
                </div>
            </div>
        </Show>
    }
}
