//! Terminal rendering of board snapshots.
//!
//! Rendering is a read-only observer: it takes a board and the current
//! selection and produces text. Nothing here mutates game state.

mod options;
pub mod palette;
mod view;

pub use options::DisplayOptions;
pub use palette::Rgb;
pub use view::BoardView;
