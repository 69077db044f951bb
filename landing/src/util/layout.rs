//! Image marquee and image wall layout.
//!
//! Pure planning: decides which images go in which scrolling track and how
//! each track animates. The DOM builders in `components` only render these
//! plans, so the layout rules are testable without a browser.
//!
//! Every track lists its images twice; the CSS keyframes scroll by half the
//! track length, which makes the loop seamless.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use rand::Rng;
use rand::seq::SliceRandom;

/// Number of game images shipped with the page (`images/1.webp` ..).
pub const IMAGE_COUNT: usize = 36;

/// Marquee rows scroll at a fixed pace.
pub const MARQUEE_DURATION_S: f64 = 60.0;

/// Image wall columns pick a duration in `[WALL_MIN_DURATION_S, WALL_MIN_DURATION_S + WALL_DURATION_SPREAD_S)`.
pub const WALL_MIN_DURATION_S: f64 = 40.0;
pub const WALL_DURATION_SPREAD_S: f64 = 20.0;

const PHONE_MAX_WIDTH: f64 = 480.0;
const MOBILE_MAX_WIDTH: f64 = 768.0;

/// Coarse device class derived from the viewport width at load time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceClass {
    Phone,
    Mobile,
    Desktop,
}

impl DeviceClass {
    #[must_use]
    pub fn from_viewport(width: f64) -> Self {
        if width < PHONE_MAX_WIDTH {
            Self::Phone
        } else if width < MOBILE_MAX_WIDTH {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollDirection {
    Left,
    Right,
    Up,
    Down,
}

impl ScrollDirection {
    /// Name of the matching CSS keyframes.
    #[must_use]
    pub fn keyframes(self) -> &'static str {
        match self {
            Self::Left => "scroll-left",
            Self::Right => "scroll-right",
            Self::Up => "scroll-up",
            Self::Down => "scroll-down",
        }
    }
}

/// One scrolling strip of images.
#[derive(Clone, Debug, PartialEq)]
pub struct Track {
    pub images: Vec<String>,
    pub direction: ScrollDirection,
    pub duration_s: f64,
}

impl Track {
    /// Value for the track's CSS `animation` property.
    #[must_use]
    pub fn animation(&self) -> String {
        format!("{} {}s linear infinite", self.direction.keyframes(), self.duration_s)
    }
}

/// Column geometry of the image wall for one device class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WallShape {
    pub columns: usize,
    pub images_per_column: usize,
    pub gap_px: u32,
}

impl WallShape {
    #[must_use]
    pub fn for_device(device: DeviceClass) -> Self {
        match device {
            DeviceClass::Phone => Self { columns: 1, images_per_column: 22, gap_px: 12 },
            DeviceClass::Mobile => Self { columns: 2, images_per_column: 20, gap_px: 12 },
            DeviceClass::Desktop => Self { columns: 4, images_per_column: 18, gap_px: 18 },
        }
    }
}

/// `images/1.webp` through `images/36.webp`, in order.
#[must_use]
pub fn image_sources() -> Vec<String> {
    (1..=IMAGE_COUNT).map(|i| format!("images/{i}.webp")).collect()
}

/// A marquee row showing every image once per loop.
#[must_use]
pub fn marquee_track(images: &[String], direction: ScrollDirection) -> Track {
    Track { images: doubled(images), direction, duration_s: MARQUEE_DURATION_S }
}

/// Plan every image wall column for `device`.
///
/// The image list is shuffled once; column `c` takes the next
/// `images_per_column` entries starting at `c * images_per_column`, cycling
/// through the list. Columns alternate up/down and each gets its own pace.
pub fn wall_tracks<R: Rng + ?Sized>(images: &[String], device: DeviceClass, rng: &mut R) -> Vec<Track> {
    if images.is_empty() {
        return Vec::new();
    }

    let mut shuffled = images.to_vec();
    shuffled.shuffle(rng);

    let shape = WallShape::for_device(device);
    (0..shape.columns)
        .map(|col| {
            let column: Vec<String> = (0..shape.images_per_column)
                .map(|j| shuffled[(col * shape.images_per_column + j) % shuffled.len()].clone())
                .collect();
            let direction = if col % 2 == 0 { ScrollDirection::Up } else { ScrollDirection::Down };
            let duration_s = WALL_MIN_DURATION_S + rng.random::<f64>() * WALL_DURATION_SPREAD_S;
            Track { images: doubled(&column), direction, duration_s }
        })
        .collect()
}

fn doubled(images: &[String]) -> Vec<String> {
    images.iter().chain(images).cloned().collect()
}
