//! Reorder Core
//!
//! Ordered list of items with dense 1-based positions:
//! - engine: move / group move / delete with snapshot undo/redo
//! - selection, search, editor: page state machines
//! - drag: adapter from gesture events to engine calls
//! - session: the single controller the UI owns

mod config;
mod drag;
mod editor;
mod engine;
mod error;
mod history;
mod item;
mod position;
mod search;
mod selection;
mod session;
mod sink;


pub use config::ReorderConfig;
pub use drag::{DragEvent, DragSession};
pub use editor::{PendingMove, PositionEditor};
pub use engine::{Outcome, ReorderEngine, DEFAULT_HISTORY_LIMIT};
pub use error::{ReorderError, ReorderResult};
pub use item::{load_items, sample_items, Item, ItemId, PositionUpdate};
pub use position::parse_position;
pub use search::Search;
pub use selection::Selection;
pub use session::ReorderSession;
pub use sink::{PositionSink, RecordingSink};
