//! Depth-first traversal of nested structures: the [`RecursiveEnumerator`] walks anything whose
//! items implement [`Nested`], consulting a [`Handler`] at every entrance and exit.
//!
//! Handlers come in two renditions: implement the [`Handler`] trait directly, or use the
//! subscription-based [`Events`] and attach closures through its [`Port`]s.

mod events;
mod handler;
mod walker;

mod tests;

pub use events::*;
pub use handler::*;
pub use walker::*;
