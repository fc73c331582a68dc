//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the compositor and an external
//! resource. Implementations live in `src/adapters/`.

pub mod typeface;

pub use typeface::Typeface;
