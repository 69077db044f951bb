use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, Element, HtmlCanvasElement};

use crate::consts::{
    DESKTOP_PARTICLE_COUNT, LINK_LINE_WIDTH, MOBILE_BREAKPOINT_PX, MOBILE_PARTICLE_COUNT, SHOOTING_STAR_COUNT,
    STAR_LINE_WIDTH,
};
use crate::geom::Point;
use crate::particle::{Particle, link_alpha};
use crate::render;
use crate::star::ShootingStar;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// One paint instruction produced by [`SceneCore::step`], in paint order.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// Filled circle.
    Dot { center: Point, radius: f64, color: &'static str, alpha: f64 },
    /// Constellation line between two nearby particles.
    Link { from: Point, to: Point, color: &'static str, alpha: f64 },
    /// Shooting star trail, opaque at `head`, transparent at `tail`.
    Streak { head: Point, tail: Point },
}

impl DrawOp {
    /// Stroke width for stroked ops. The context keeps its line width across
    /// ops and frames, so every stroke sets its own.
    #[must_use]
    pub fn line_width(&self) -> Option<f64> {
        match self {
            Self::Dot { .. } => None,
            Self::Link { .. } => Some(LINK_LINE_WIDTH),
            Self::Streak { .. } => Some(STAR_LINE_WIDTH),
        }
    }
}

/// Number of particles for a viewport `viewport_width` CSS pixels wide.
#[must_use]
pub fn particle_count_for(viewport_width: f64) -> usize {
    if viewport_width < MOBILE_BREAKPOINT_PX { MOBILE_PARTICLE_COUNT } else { DESKTOP_PARTICLE_COUNT }
}

/// Core scene state: all logic that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
/// Randomness comes from an owned, seedable generator and time is passed in,
/// so a seeded scene is fully deterministic.
pub struct SceneCore {
    pub particles: Vec<Particle>,
    pub stars: Vec<ShootingStar>,
    pub width: f64,
    pub height: f64,
    rng: ChaCha8Rng,
}

impl SceneCore {
    /// A randomized scene sized `width` × `height`, with the particle count
    /// picked from `viewport_width`.
    #[must_use]
    pub fn new(viewport_width: f64, width: f64, height: f64, seed: u64, now_ms: f64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let particles = (0..particle_count_for(viewport_width))
            .map(|_| Particle::random(&mut rng, width, height))
            .collect();
        let stars = (0..SHOOTING_STAR_COUNT)
            .map(|_| ShootingStar::random(&mut rng, width, height, now_ms))
            .collect();
        Self { particles, stars, width, height, rng }
    }

    /// A scene with hand-placed entities, for tests.
    #[cfg(test)]
    pub(crate) fn with_entities(
        width: f64,
        height: f64,
        particles: Vec<Particle>,
        stars: Vec<ShootingStar>,
        seed: u64,
    ) -> Self {
        Self { particles, stars, width, height, rng: ChaCha8Rng::seed_from_u64(seed) }
    }

    /// Adopt new surface dimensions. Entities are not rescaled; they wrap
    /// against the new bounds from the next step on.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Advance every entity by one frame and return what to paint.
    ///
    /// Each particle is updated, drawn, then linked to every higher-index
    /// particle in range. Those have not moved yet this frame, so links use
    /// their previous positions. Stars follow all particles.
    pub fn step(&mut self, now_ms: f64) -> Vec<DrawOp> {
        let (width, height) = (self.width, self.height);
        let mut ops = Vec::with_capacity(self.particles.len() * 2 + self.stars.len());

        for i in 0..self.particles.len() {
            self.particles[i].update(width, height);

            let p1 = &self.particles[i];
            let from = p1.position();
            ops.push(DrawOp::Dot { center: from, radius: p1.size, color: p1.color, alpha: p1.alpha });

            for p2 in &self.particles[i + 1..] {
                let to = p2.position();
                if let Some(alpha) = link_alpha(from.distance_to(to)) {
                    ops.push(DrawOp::Link { from, to, color: p1.color, alpha });
                }
            }
        }

        for star in &mut self.stars {
            star.update(&mut self.rng, width, height, now_ms);
            if let Some((head, tail)) = star.trail() {
                ops.push(DrawOp::Streak { head, tail });
            }
        }

        ops
    }
}

/// The full starfield. Wraps `SceneCore` and owns the canvas it paints on.
pub struct Engine {
    container: Element,
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    pub core: SceneCore,
}

impl Engine {
    /// Append a fresh canvas to `container`, size it to the container and seed
    /// a scene on it.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the canvas cannot be created, attached, or has no 2D context.
    pub fn mount(
        document: &Document,
        container: Element,
        viewport_width: f64,
        seed: u64,
        now_ms: f64,
    ) -> Result<Self, JsValue> {
        let canvas = document.create_element("canvas")?.dyn_into::<HtmlCanvasElement>()?;
        container.append_child(&canvas)?;

        let ctx = canvas
            .get_context("2d")?
            .ok_or("2d context unavailable")?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let (width, height) = fit_canvas(&container, &canvas);
        let core = SceneCore::new(viewport_width, width, height, seed, now_ms);
        Ok(Self { container, canvas, ctx, core })
    }

    /// Re-fit the canvas to the container's current size.
    ///
    /// Resizing the backing store discards its pixels; the next frame redraws
    /// everything at the new size.
    pub fn fit(&mut self) {
        let (width, height) = fit_canvas(&self.container, &self.canvas);
        self.core.resize(width, height);
    }

    /// Step the scene and paint it.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any `Canvas2D` call fails.
    pub fn frame(&mut self, now_ms: f64) -> Result<(), JsValue> {
        let ops = self.core.step(now_ms);
        render::draw(&self.ctx, self.core.width, self.core.height, &ops)
    }
}

fn fit_canvas(container: &Element, canvas: &HtmlCanvasElement) -> (f64, f64) {
    let width = container.client_width().max(0);
    let height = container.client_height().max(0);
    canvas.set_width(width.unsigned_abs());
    canvas.set_height(height.unsigned_abs());
    (f64::from(width), f64::from(height))
}
