//! # landing
//!
//! WASM frontend for the Stardrop promotional landing page: the secret-code
//! form, the QR success page, the image marquee and wall, and the starfield
//! background (rendered by the `starfield` crate).
//!
//! Browser-independent logic (code table, layout planning, page copy, beacon
//! payload) is always compiled so it can be tested natively and shared with the
//! host. Everything that touches the DOM sits behind the `hydrate` feature.

#[cfg(feature = "hydrate")]
pub mod app;
#[cfg(feature = "hydrate")]
pub mod components;
pub mod net;
#[cfg(feature = "hydrate")]
pub mod pages;
pub mod util;
