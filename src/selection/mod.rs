//! Selection state: the two pending slots and the progress cursor.

mod cursor;
mod tracker;

pub use cursor::ProgressCursor;
pub use tracker::{SelectOutcome, SelectionTracker};
