//! The enumeration protocol: cursors with an explicit lifecycle, the containers that hand them
//! out, and the adapters that compose them.
//!
//! The protocol itself is described on [`Enumerator`]; [`Engine`] drives a [`Produce`]
//! implementation through it, while [`adapt`] contains the combinators.

mod engine;
mod enumerator;
mod lifecycle;
mod source;

pub mod adapt;


pub use engine::*;
pub use enumerator::*;
pub use lifecycle::{Phase, Reset};
pub(crate) use lifecycle::Lifecycle;
pub use source::*;
