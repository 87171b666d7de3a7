//! Click handling: the selection/move state machine.
//!
//! The transition itself is a pure function over [`GameState`] that reports
//! what happened as a list of [`Effect`]s. [`InteractionController`] owns the
//! current state and is the only mutator; renderers read snapshots from it.

mod effect;
mod interaction;
mod state;
mod transition;

pub use effect::Effect;
pub use interaction::InteractionController;
pub use state::{GameState, Selection};
pub use transition::{apply_click, transition};
