//! Sample Transforms
//!
//! Pure functions over in-memory sounds. Every transform borrows its input
//! and returns a freshly allocated sound.

mod transforms;

pub use transforms::{backwards, mix, pan, remove_vocals};
