//! Toolkit-agnostic presentation adapter.
//!
//! Nothing in here draws. `Session` sequences the screens and the reveal,
//! and `GameView` is the snapshot a UI re-renders from.

pub mod reveal;
pub mod session;
pub mod view;

pub use reveal::{RevealOrder, RevealSequence, RevealTick};
pub use session::Session;
pub use view::{GameView, PlayerView, Screen};
