//! Utility helpers shared across page modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `codes`, `layout` and `text` are pure and compile without a browser; `dom`
//! holds the `web-sys` builders used by the components.

pub mod codes;
#[cfg(feature = "hydrate")]
pub mod dom;
pub mod layout;
pub mod text;
