//! Business logic layer.
//!
//! Services own transaction boundaries. Each opens its own transaction, drives
//! the repositories and the pure draw engine, and commits once every write for
//! the operation has succeeded.

pub mod chase;
pub mod objekt;
pub mod spin;

#[cfg(test)]
mod test;
