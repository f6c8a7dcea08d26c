//! Adapter implementations for port traits.
//!
//! - `entropy`: `StdRng`-backed random source (OS-seeded or fixed seed)
//! - `font/`: vector font from disk and the built-in bitmap fallback
//! - `scripted`: queued random choices for tests

pub mod entropy;
pub mod font;
#[cfg(test)]
pub mod scripted;
