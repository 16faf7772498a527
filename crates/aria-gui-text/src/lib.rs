//! `cosmic-text` measurement backend for `aria-gui`.
//!
//! # Design goals
//! - **Backend-agnostic core**: `aria-gui` only sees the [`aria_gui::TextMeasurer`]
//!   trait; everything engine-specific lives here.
//! - **Practical**: single-line shaping with wrapping disabled, which is what
//!   a marquee label needs.
//! - **Ink-aware**: overhang metrics come from rasterizer placements, so the
//!   auto-fit scan sees where glyphs actually paint rather than just the
//!   nominal line box.
//!
//! Fonts come from the system database by default; callers can add font
//! bytes of their own for reproducible environments.

#![deny(warnings)]

#[cfg(feature = "cosmic")]
pub mod cosmic;

#[cfg(feature = "cosmic")]
pub use cosmic::CosmicMeasurer;
