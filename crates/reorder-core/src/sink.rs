//! Persistence Boundary
//!
//! Save hands `{id, position}` pairs to a sink and never reads anything back.

use crate::item::PositionUpdate;

/// Receiver of committed positions
pub trait PositionSink {
    fn save_positions(&mut self, positions: &[PositionUpdate]);
}

/// Keeps every payload it receives
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    pub saved: Vec<Vec<PositionUpdate>>,
}

impl PositionSink for RecordingSink {
    fn save_positions(&mut self, positions: &[PositionUpdate]) {
        self.saved.push(positions.to_vec());
    }
}
