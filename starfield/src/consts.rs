//! Shared numeric constants for the starfield crate.

// ── Scene ───────────────────────────────────────────────────────

/// Viewports narrower than this get the reduced particle count.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Particle count below [`MOBILE_BREAKPOINT_PX`].
pub const MOBILE_PARTICLE_COUNT: usize = 20;

/// Particle count at or above [`MOBILE_BREAKPOINT_PX`].
pub const DESKTOP_PARTICLE_COUNT: usize = 50;

/// Number of shooting stars in every scene.
pub const SHOOTING_STAR_COUNT: usize = 2;

/// Particle colors, matching the page theme.
pub const PALETTE: [&str; 4] = ["#48dbfb", "#ff9ff3", "#54a0ff", "#1dd1a1"];

// ── Particles ───────────────────────────────────────────────────

/// Full width of the per-axis velocity range, centred on zero.
pub const PARTICLE_VELOCITY_SPREAD: f64 = 0.5;

/// Smallest particle radius in pixels.
pub const PARTICLE_MIN_SIZE: f64 = 1.0;

/// Width of the particle radius range.
pub const PARTICLE_SIZE_SPREAD: f64 = 3.0;

/// Lower alpha bound; fading out stops here.
pub const ALPHA_MIN: f64 = 0.1;

/// Upper alpha bound; fading in stops here.
pub const ALPHA_MAX: f64 = 0.8;

/// Width of the initial alpha range above [`ALPHA_MIN`].
pub const INITIAL_ALPHA_SPREAD: f64 = 0.5;

/// Smallest per-frame alpha step.
pub const FADE_MIN_STEP: f64 = 0.005;

/// Width of the per-frame alpha step range.
pub const FADE_STEP_SPREAD: f64 = 0.01;

// ── Links ───────────────────────────────────────────────────────

/// Particles closer than this are joined by a line.
pub const LINK_DISTANCE: f64 = 100.0;

/// Opacity of a link between two coincident particles.
pub const LINK_MAX_ALPHA: f64 = 0.2;

/// Stroke width of a link.
pub const LINK_LINE_WIDTH: f64 = 0.5;

// ── Shooting stars ──────────────────────────────────────────────

/// Shortest trail length.
pub const STAR_MIN_LEN: f64 = 10.0;

/// Width of the trail length range.
pub const STAR_LEN_SPREAD: f64 = 80.0;

/// Slowest travel speed, in pixels per frame.
pub const STAR_MIN_SPEED: f64 = 6.0;

/// Width of the speed range.
pub const STAR_SPEED_SPREAD: f64 = 10.0;

/// Thinnest star size.
pub const STAR_MIN_SIZE: f64 = 0.1;

/// Width of the size range.
pub const STAR_SIZE_SPREAD: f64 = 1.0;

/// Full width of the random jitter around the 45° launch angle, in radians.
pub const STAR_ANGLE_JITTER: f64 = 0.5;

/// Stars spawn in the top fraction of the surface.
pub const STAR_SPAWN_BAND: f64 = 0.5;

/// Minimum delay before an inactive star relaunches, in milliseconds.
pub const STAR_WAIT_MIN_MS: f64 = 500.0;

/// Width of the relaunch delay range, in milliseconds.
pub const STAR_WAIT_SPREAD_MS: f64 = 3000.0;

/// Stroke width of a star's trail.
pub const STAR_LINE_WIDTH: f64 = 2.0;
