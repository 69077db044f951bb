//! Shooting stars.
//!
//! A star sleeps until its activation time, then streaks left and down at a
//! fixed angle and speed. Once it has fully left the surface it goes back to
//! sleep for a random interval.

#[cfg(test)]
#[path = "star_test.rs"]
mod star_test;

use std::f64::consts::FRAC_PI_4;

use rand::Rng;

use crate::consts::{
    STAR_ANGLE_JITTER, STAR_LEN_SPREAD, STAR_MIN_LEN, STAR_MIN_SIZE, STAR_MIN_SPEED, STAR_SIZE_SPREAD,
    STAR_SPAWN_BAND, STAR_SPEED_SPREAD, STAR_WAIT_MIN_MS, STAR_WAIT_SPREAD_MS,
};
use crate::geom::Point;

#[derive(Debug, Clone, PartialEq)]
pub struct ShootingStar {
    /// Head position. Stale while inactive.
    pub x: f64,
    pub y: f64,
    /// Trail length in pixels.
    pub len: f64,
    /// Pixels travelled per frame.
    pub speed: f64,
    pub size: f64,
    /// Launch angle in radians, measured down-left from the horizontal.
    pub angle: f64,
    pub active: bool,
    /// Wall-clock time (ms) after which an inactive star relaunches.
    pub wake_at_ms: f64,
}

impl ShootingStar {
    /// A sleeping star with fresh random attributes and a wake-up time in
    /// `[now_ms + 500, now_ms + 3500)`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, width: f64, height: f64, now_ms: f64) -> Self {
        Self {
            x: rng.random::<f64>() * width,
            y: rng.random::<f64>() * height * STAR_SPAWN_BAND,
            len: rng.random::<f64>() * STAR_LEN_SPREAD + STAR_MIN_LEN,
            speed: rng.random::<f64>() * STAR_SPEED_SPREAD + STAR_MIN_SPEED,
            size: rng.random::<f64>() * STAR_SIZE_SPREAD + STAR_MIN_SIZE,
            angle: FRAC_PI_4 + (rng.random::<f64>() - 0.5) * STAR_ANGLE_JITTER,
            active: false,
            wake_at_ms: next_wake(rng, now_ms),
        }
    }

    /// Advance one frame.
    ///
    /// Active stars move along their angle and go to sleep once they are more
    /// than one trail length past the left or bottom edge. Sleeping stars
    /// whose wake-up time has passed are re-randomized and launched.
    pub fn update<R: Rng + ?Sized>(&mut self, rng: &mut R, width: f64, height: f64, now_ms: f64) {
        if self.active {
            self.x -= self.speed * self.angle.cos();
            self.y += self.speed * self.angle.sin();

            if self.x < -self.len || self.y > height + self.len {
                self.active = false;
                self.wake_at_ms = next_wake(rng, now_ms);
            }
        } else if now_ms > self.wake_at_ms {
            *self = Self::random(rng, width, height, now_ms);
            self.active = true;
        }
    }

    /// Head and tail of the visible trail, or `None` while asleep.
    #[must_use]
    pub fn trail(&self) -> Option<(Point, Point)> {
        if !self.active {
            return None;
        }
        let head = Point::new(self.x, self.y);
        let tail = Point::new(self.x + self.len * self.angle.cos(), self.y - self.len * self.angle.sin());
        Some((head, tail))
    }
}

fn next_wake<R: Rng + ?Sized>(rng: &mut R, now_ms: f64) -> f64 {
    now_ms + rng.random::<f64>() * STAR_WAIT_SPREAD_MS + STAR_WAIT_MIN_MS
}
