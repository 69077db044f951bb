//! Animated starfield background for the landing page.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! drifting particle field, the occasional shooting star and the 2D canvas they
//! are painted on. The host page is responsible only for finding the container
//! element and driving [`engine::Engine::frame`] once per animation frame.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Canvas-owning engine and testable [`engine::SceneCore`] |
//! | [`particle`] | Ambient particles: drift, wraparound, pulsing alpha, links |
//! | [`star`] | Shooting stars: activation schedule and diagonal travel |
//! | [`geom`] | Points and distances in surface space |
//! | [`render`] | Paints a frame's [`engine::DrawOp`] list to a 2D context |
//! | [`consts`] | Shared numeric constants (ranges, thresholds, palette) |

pub mod consts;
pub mod engine;
pub mod geom;
pub mod particle;
pub mod render;
pub mod star;
