//! Ambient particles.
//!
//! A particle drifts at a constant velocity, wraps around the surface edges
//! and pulses its opacity between [`ALPHA_MIN`] and [`ALPHA_MAX`]. Nearby
//! particles are joined by faint lines (see [`link_alpha`]).

#[cfg(test)]
#[path = "particle_test.rs"]
mod particle_test;

use rand::Rng;

use crate::consts::{
    ALPHA_MAX, ALPHA_MIN, FADE_MIN_STEP, FADE_STEP_SPREAD, INITIAL_ALPHA_SPREAD, LINK_DISTANCE, LINK_MAX_ALPHA,
    PALETTE, PARTICLE_MIN_SIZE, PARTICLE_SIZE_SPREAD, PARTICLE_VELOCITY_SPREAD,
};
use crate::geom::{Point, wrap};

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    /// Radius in pixels.
    pub size: f64,
    pub color: &'static str,
    pub alpha: f64,
    /// Alpha change per frame.
    pub fade_step: f64,
    pub fading_in: bool,
}

impl Particle {
    /// A particle with every attribute drawn from `rng`, placed inside a
    /// `width` × `height` surface.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, width: f64, height: f64) -> Self {
        let color_idx = rng.random_range(0..PALETTE.len());
        Self {
            x: rng.random::<f64>() * width,
            y: rng.random::<f64>() * height,
            vx: (rng.random::<f64>() - 0.5) * PARTICLE_VELOCITY_SPREAD,
            vy: (rng.random::<f64>() - 0.5) * PARTICLE_VELOCITY_SPREAD,
            size: rng.random::<f64>() * PARTICLE_SIZE_SPREAD + PARTICLE_MIN_SIZE,
            color: PALETTE[color_idx],
            alpha: rng.random::<f64>() * INITIAL_ALPHA_SPREAD + ALPHA_MIN,
            fade_step: rng.random::<f64>() * FADE_STEP_SPREAD + FADE_MIN_STEP,
            fading_in: rng.random_bool(0.5),
        }
    }

    /// A motionless particle at `(x, y)`, for placing links by hand in tests.
    #[cfg(test)]
    pub(crate) fn at(x: f64, y: f64, color: &'static str) -> Self {
        Self {
            x,
            y,
            vx: 0.0,
            vy: 0.0,
            size: PARTICLE_MIN_SIZE,
            color,
            alpha: ALPHA_MIN,
            fade_step: FADE_MIN_STEP,
            fading_in: true,
        }
    }

    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Advance one frame: drift, wrap against the current bounds, pulse alpha.
    pub fn update(&mut self, width: f64, height: f64) {
        self.x = wrap(self.x + self.vx, width);
        self.y = wrap(self.y + self.vy, height);

        if self.fading_in {
            self.alpha = (self.alpha + self.fade_step).min(ALPHA_MAX);
            if self.alpha >= ALPHA_MAX {
                self.fading_in = false;
            }
        } else {
            self.alpha = (self.alpha - self.fade_step).max(ALPHA_MIN);
            if self.alpha <= ALPHA_MIN {
                self.fading_in = true;
            }
        }
    }
}

/// Opacity of the line joining two particles `distance` apart, or `None` when
/// they are too far apart to be linked.
#[must_use]
pub fn link_alpha(distance: f64) -> Option<f64> {
    (distance < LINK_DISTANCE).then(|| (1.0 - distance / LINK_DISTANCE) * LINK_MAX_ALPHA)
}
