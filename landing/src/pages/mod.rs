//! Per-page initializers.

pub mod index;
pub mod success;
