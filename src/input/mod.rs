//! Host input: events, zone tracking, and avatar movement.

mod adapter;
mod event;
mod movement;

pub use adapter::{InteractOutcome, InteractionAdapter};
pub use event::{Event, Zone};
pub use movement::{Avatar, Vec2};
