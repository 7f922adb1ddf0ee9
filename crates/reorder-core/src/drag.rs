//! Drag Adapter
//!
//! Translates the three event shapes of a gesture library into engine calls.
//! The engine never sees the library.

use crate::engine::{Outcome, ReorderEngine};
use crate::error::ReorderResult;
use crate::item::ItemId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragEvent {
    Start { active: ItemId },
    /// `over` is None when released outside any item
    End { active: ItemId, over: Option<ItemId> },
    Cancel,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragSession {
    active: Option<ItemId>,
}

impl DragSession {
    pub fn active(&self) -> Option<ItemId> {
        self.active
    }

    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    pub fn handle(&mut self, engine: &mut ReorderEngine, event: DragEvent) -> ReorderResult<Outcome> {
        match event {
            DragEvent::Start { active } => {
                self.active = Some(active);
                Ok(Outcome::Unchanged)
            }
            DragEvent::End { active, over } => {
                self.active = None;
                match over {
                    Some(over) => engine.move_by_drag(active, over),
                    None => Ok(Outcome::Unchanged),
                }
            }
            DragEvent::Cancel => {
                self.active = None;
                Ok(Outcome::Unchanged)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Item;

    fn engine() -> ReorderEngine {
        ReorderEngine::new(vec![
            Item::new(1, "A", 1),
            Item::new(2, "B", 2),
            Item::new(3, "C", 3),
        ])
    }

    #[test]
    fn test_start_end_moves() {
        let mut engine = engine();
        let mut drag = DragSession::default();

        drag.handle(&mut engine, DragEvent::Start { active: 1 }).unwrap();
        assert_eq!(drag.active(), Some(1));

        let outcome = drag
            .handle(&mut engine, DragEvent::End { active: 1, over: Some(3) })
            .unwrap();
        assert_eq!(outcome, Outcome::Applied);
        assert!(!drag.is_dragging());
        assert_eq!(engine.position_of(1), Some(3));
    }

    #[test]
    fn test_end_without_target_or_cancel_is_noop() {
        let mut engine = engine();
        let mut drag = DragSession::default();

        drag.handle(&mut engine, DragEvent::Start { active: 2 }).unwrap();
        drag.handle(&mut engine, DragEvent::End { active: 2, over: None }).unwrap();
        drag.handle(&mut engine, DragEvent::Start { active: 2 }).unwrap();
        drag.handle(&mut engine, DragEvent::Cancel).unwrap();

        assert!(!drag.is_dragging());
        assert!(!engine.can_undo());
    }
}
