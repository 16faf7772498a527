//! # aria-gui
//!
//! Text widgets for a music-player panel: a self-sizing, auto-scrolling
//! label and the pieces it is built from.
//!
//! This crate provides the core widget logic with zero dependencies on any
//! text engine or graphics API. Measurement backends (like `aria-gui-text`)
//! and rendering are handled by separate crates; the host application owns
//! the event loop and the clock.

mod fit;
mod label;
mod marquee;
mod measure;
mod primitives;

pub use fit::*;
pub use label::*;
pub use marquee::*;
pub use measure::*;
pub use primitives::*;
