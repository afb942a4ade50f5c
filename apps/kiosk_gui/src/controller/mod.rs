//! Controller layer: UI events, display state transitions, and command orchestration.

pub mod events;
pub mod orchestration;
pub mod reducer;
