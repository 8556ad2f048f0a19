//! A layered enumeration framework built over linked containers.
//!
//! Everything iterable here hands out an [`Enumerator`](enumerate::Enumerator): a cursor with an
//! explicit lifecycle that can be stopped early, queried for its phase and, where the source
//! allows it, reset and run again. The protocol is deliberately richer than [`Iterator`]:
//! enumeration has a beginning, an end and an observable middle. It still composes the same
//! way, through adapters.
//!
//! # Layers
//! The crate is a ladder of three layers, each a cargo feature implying the one below:
//!
//! - [`enumerate`] is the protocol itself: the [`Enumerator`](enumerate::Enumerator) and
//!   [`Enumerable`](enumerate::Enumerable) traits, the [`Engine`](enumerate::Engine) that drives
//!   a producer through the full lifecycle, and the [`adapt`](enumerate::adapt) combinators.
//! - [`linked`] holds containers of separately allocated nodes: doubly linked lists (plain and
//!   counted), singly linked stacks and queues, trees, and the node handles and enumerators
//!   that walk them. Nodes are first-class: a [`NodeMut`](linked::NodeMut) handle can splice
//!   and remove without touching the list's ends.
//! - [`recursive`] adds depth-first traversal of nested structures, with per-level entry and exit
//!   hooks, cooperative cancellation and an event-driven handler variant.
//!
//! The default feature set enables all three.
//!
//! # Errors and panics
//! Fallible operations come in pairs: a `try_*` form returning [`Option`] or [`Result`], and a
//! plain form that panics with the same strongly typed error (see [`util::error`]). Enumerators
//! themselves never panic on misuse; out-of-sequence calls are defined no-ops.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "enumerate")]
pub mod enumerate;

#[cfg(feature = "linked")]
pub mod linked;

#[cfg(feature = "recursive")]
pub mod recursive;

pub mod util;
