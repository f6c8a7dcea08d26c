//! Port traits defining the synthesizer's seams.
//!
//! Each trait is a boundary between the rendering core and something that
//! varies by environment. Implementations live in `src/adapters/`.

pub mod random;
pub mod typeface;

pub use random::{choose, RandomSource};
pub use typeface::Typeface;
