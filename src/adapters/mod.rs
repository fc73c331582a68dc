//! Adapter implementations for port traits.
//!
//! - `outline`: TrueType/OpenType faces loaded from disk
//! - `bitmap`: built-in 5×7 face, always available

pub mod bitmap;
pub mod outline;
