#![allow(clippy::float_cmp)]

use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::*;

fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

// =============================================================
// Device classes
// =============================================================

#[test]
fn device_class_breakpoints() {
    assert_eq!(DeviceClass::from_viewport(320.0), DeviceClass::Phone);
    assert_eq!(DeviceClass::from_viewport(479.9), DeviceClass::Phone);
    assert_eq!(DeviceClass::from_viewport(480.0), DeviceClass::Mobile);
    assert_eq!(DeviceClass::from_viewport(767.0), DeviceClass::Mobile);
    assert_eq!(DeviceClass::from_viewport(768.0), DeviceClass::Desktop);
    assert_eq!(DeviceClass::from_viewport(1920.0), DeviceClass::Desktop);
}

#[test]
fn wall_shape_per_device() {
    assert_eq!(WallShape::for_device(DeviceClass::Phone), WallShape { columns: 1, images_per_column: 22, gap_px: 12 });
    assert_eq!(WallShape::for_device(DeviceClass::Mobile), WallShape { columns: 2, images_per_column: 20, gap_px: 12 });
    assert_eq!(WallShape::for_device(DeviceClass::Desktop), WallShape { columns: 4, images_per_column: 18, gap_px: 18 });
}

// =============================================================
// Sources and marquee
// =============================================================

#[test]
fn image_sources_are_numbered_from_one() {
    let images = image_sources();
    assert_eq!(images.len(), IMAGE_COUNT);
    assert_eq!(images[0], "images/1.webp");
    assert_eq!(images[35], "images/36.webp");
}

#[test]
fn marquee_track_repeats_images_once() {
    let images = image_sources();
    let track = marquee_track(&images, ScrollDirection::Right);
    assert_eq!(track.images.len(), 72);
    assert_eq!(track.images[..36], images[..]);
    assert_eq!(track.images[36..], images[..]);
}

#[test]
fn marquee_animation_css() {
    let track = marquee_track(&image_sources(), ScrollDirection::Left);
    assert_eq!(track.animation(), "scroll-left 60s linear infinite");
}

// =============================================================
// Image wall
// =============================================================

#[test]
fn desktop_wall_has_four_alternating_columns() {
    let tracks = wall_tracks(&image_sources(), DeviceClass::Desktop, &mut rng(1));
    assert_eq!(tracks.len(), 4);
    let directions: Vec<_> = tracks.iter().map(|t| t.direction).collect();
    assert_eq!(
        directions,
        [ScrollDirection::Up, ScrollDirection::Down, ScrollDirection::Up, ScrollDirection::Down]
    );
}

#[test]
fn wall_columns_hold_doubled_images() {
    for (device, per_column) in [(DeviceClass::Phone, 22), (DeviceClass::Mobile, 20), (DeviceClass::Desktop, 18)] {
        for track in wall_tracks(&image_sources(), device, &mut rng(2)) {
            assert_eq!(track.images.len(), per_column * 2);
            assert_eq!(track.images[..per_column], track.images[per_column..]);
        }
    }
}

#[test]
fn wall_durations_stay_in_range() {
    let mut rng = rng(3);
    for _ in 0..50 {
        for track in wall_tracks(&image_sources(), DeviceClass::Desktop, &mut rng) {
            assert!((40.0..60.0).contains(&track.duration_s), "duration = {}", track.duration_s);
        }
    }
}

#[test]
fn desktop_wall_shows_every_image() {
    let tracks = wall_tracks(&image_sources(), DeviceClass::Desktop, &mut rng(4));
    let shown: HashSet<_> = tracks.iter().flat_map(|t| t.images.iter()).collect();
    assert_eq!(shown.len(), IMAGE_COUNT);
}

#[test]
fn adjacent_columns_continue_the_shuffled_sequence() {
    let tracks = wall_tracks(&image_sources(), DeviceClass::Mobile, &mut rng(5));
    let first: HashSet<_> = tracks[0].images[..20].iter().collect();
    let second: Vec<_> = tracks[1].images[..20].iter().collect();
    // Column 1 starts at shuffled[20]; only shuffled[0..4] reappear after wrapping past 36.
    let repeats = second.iter().filter(|img| first.contains(*img)).count();
    assert_eq!(repeats, 4);
}

#[test]
fn wall_layout_is_shuffled() {
    let ordered = image_sources();
    let tracks = wall_tracks(&ordered, DeviceClass::Phone, &mut rng(6));
    assert_ne!(tracks[0].images[..22], ordered[..22]);
}

#[test]
fn wall_without_images_is_empty() {
    assert!(wall_tracks(&[], DeviceClass::Desktop, &mut rng(7)).is_empty());
}

#[test]
fn wall_animation_css_uses_vertical_keyframes() {
    let tracks = wall_tracks(&image_sources(), DeviceClass::Mobile, &mut rng(8));
    assert!(tracks[0].animation().starts_with("scroll-up "));
    assert!(tracks[1].animation().starts_with("scroll-down "));
    assert!(tracks[1].animation().ends_with("s linear infinite"));
}
