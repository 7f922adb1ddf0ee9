//! Reorder Session
//!
//! The one owned controller behind the page: engine, selection mode,
//! search, position editor and drag adapter. The UI keeps a single
//! instance and routes every event through it.

use crate::drag::{DragEvent, DragSession};
use crate::editor::{PendingMove, PositionEditor};
use crate::engine::{Outcome, ReorderEngine};
use crate::error::{ReorderError, ReorderResult};
use crate::item::{ItemId, PositionUpdate};
use crate::search::Search;
use crate::selection::Selection;
use crate::sink::PositionSink;

#[derive(Debug, Clone, Default)]
pub struct ReorderSession {
    engine: ReorderEngine,
    selection: Selection,
    search: Search,
    editor: Option<PositionEditor>,
    drag: DragSession,
}

impl ReorderSession {
    pub fn new(engine: ReorderEngine) -> Self {
        Self {
            engine,
            ..Default::default()
        }
    }

    pub fn engine(&self) -> &ReorderEngine {
        &self.engine
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn search(&self) -> &Search {
        &self.search
    }

    pub fn editor(&self) -> Option<&PositionEditor> {
        self.editor.as_ref()
    }

    pub fn editor_mut(&mut self) -> Option<&mut PositionEditor> {
        self.editor.as_mut()
    }

    pub fn dragging(&self) -> Option<ItemId> {
        self.drag.active()
    }

    pub fn highlighted(&self) -> Option<ItemId> {
        self.search.highlighted()
    }

    /// Keep derived state in step with the list
    fn after_change(&mut self) {
        self.search.refresh(self.engine.items());
        let engine = &self.engine;
        self.selection.retain_existing(|id| engine.contains(id));
    }

    fn settle(&mut self, result: ReorderResult<Outcome>) -> ReorderResult<Outcome> {
        if let Ok(Outcome::Applied) = result {
            self.after_change();
        }
        result
    }

    // ========================
    // Selection mode
    // ========================

    /// Long-press on an item: enter (or extend) selection mode
    pub fn long_press(&mut self, id: ItemId) -> ReorderResult<()> {
        if !self.engine.contains(id) {
            return Err(ReorderError::NotFound(id));
        }
        if self.drag.is_dragging() {
            return Ok(());
        }
        self.editor = None;
        self.selection.begin(id);
        log::debug!("[SELECT] selecting, {} chosen", self.selection.count());
        Ok(())
    }

    /// Plain click on an item: toggles membership while selecting,
    /// otherwise opens the position editor.
    pub fn click_item(&mut self, id: ItemId) -> ReorderResult<()> {
        if !self.engine.contains(id) {
            return Err(ReorderError::NotFound(id));
        }
        if self.selection.toggle(id) {
            return Ok(());
        }
        self.open_editor(id)
    }

    pub fn cancel_selection(&mut self) {
        self.selection.finish();
    }

    pub fn move_selected_to(&mut self, target: i64) -> ReorderResult<Outcome> {
        if !self.selection.is_selecting() {
            return Ok(Outcome::Unchanged);
        }
        let ids = self.selection.finish();
        let result = self.engine.move_group_to_position(&ids, target);
        self.settle(result)
    }

    pub fn delete_selected(&mut self) -> ReorderResult<Outcome> {
        if !self.selection.is_selecting() {
            return Ok(Outcome::Unchanged);
        }
        let ids = self.selection.finish();
        let result = self.engine.delete_selected(&ids);
        self.settle(result)
    }

    // ========================
    // Position editor
    // ========================

    pub fn open_editor(&mut self, id: ItemId) -> ReorderResult<()> {
        if self.editor.as_ref().is_some_and(PositionEditor::is_applying) {
            return Ok(());
        }
        let item = self.engine.get(id).ok_or(ReorderError::NotFound(id))?;
        self.editor = Some(PositionEditor::open(item, self.engine.len()));
        Ok(())
    }

    /// Start the delayed apply; None when nothing is open or one is in flight
    pub fn confirm_edit(&mut self) -> Option<PendingMove> {
        self.editor.as_mut().and_then(PositionEditor::confirm)
    }

    /// Apply a confirmed move and close the editor
    pub fn apply_edit(&mut self, pending: PendingMove) -> ReorderResult<Outcome> {
        self.editor = None;
        let result = self
            .engine
            .move_to_position(pending.item_id, pending.target as i64);
        self.settle(result)
    }

    /// Close without applying. Ignored while an apply is pending.
    pub fn close_editor(&mut self) -> bool {
        match &self.editor {
            Some(editor) if editor.is_applying() => false,
            _ => {
                self.editor = None;
                true
            }
        }
    }

    // ========================
    // Drag
    // ========================

    pub fn drag(&mut self, event: DragEvent) -> ReorderResult<Outcome> {
        if let DragEvent::Start { .. } = event {
            if !self.selection.drag_enabled() {
                return Ok(Outcome::Unchanged);
            }
            self.search.clear();
        }
        let result = self.drag.handle(&mut self.engine, event);
        self.settle(result)
    }

    // ========================
    // Search
    // ========================

    pub fn set_search(&mut self, query: &str) {
        self.search.set_query(query, self.engine.items());
    }

    pub fn next_match(&mut self) -> Option<ItemId> {
        self.search.next()
    }

    pub fn prev_match(&mut self) -> Option<ItemId> {
        self.search.prev()
    }

    pub fn clear_search(&mut self) {
        self.search.clear();
    }

    // ========================
    // History
    // ========================

    pub fn undo(&mut self) -> Outcome {
        let outcome = self.engine.undo();
        if outcome.is_applied() {
            self.after_change();
        }
        outcome
    }

    pub fn redo(&mut self) -> Outcome {
        let outcome = self.engine.redo();
        if outcome.is_applied() {
            self.after_change();
        }
        outcome
    }

    pub fn save<S: PositionSink + ?Sized>(&mut self, sink: &mut S) -> Vec<PositionUpdate> {
        self.engine.save(sink)
    }
}
