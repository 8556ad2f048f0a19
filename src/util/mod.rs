//! Shared helpers: the crate's error types plus a few internal extension traits.

pub mod error;

pub(crate) mod option;
pub(crate) mod result;

#[cfg(test)]
pub(crate) mod alloc;
pub(crate) mod panic;
