//! Player panel widgets for `aria-gui`.
//!
//! State machine and label wiring for a music-player page. The host supplies
//! button events, the file-dialog outcome, and label bounds; the panel
//! decides which controls are enabled and what its labels say. Rendering,
//! the dialog itself, and actual audio belong to the host.

mod panel;
mod state;

pub use panel::*;
pub use state::*;
