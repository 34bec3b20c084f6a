// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Long gesture sequences against the clamp in `ViewportState::commit`.

use kurbo::{Point, Vec2};
use understory_chart_viewport::{ViewportConfig, ViewportState};

struct Lcg(u64);

impl Lcg {
    fn next_unit(&mut self) -> f64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        f64::from((self.0 >> 40) as u32) / f64::from(1_u32 << 24)
    }

    fn range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_unit() * (max - min)
    }
}

fn viewport(config: ViewportConfig) -> ViewportState {
    let mut vp = ViewportState::with_config(config);
    vp.set_dimensions(900.0, 500.0);
    vp.restrain(50.0, 20.0, 30.0, 40.0);
    vp
}

fn assert_within_limits(vp: &ViewportState) {
    let s = vp.scale_state();
    assert!(
        s.scale_x >= s.min_scale_x && s.scale_x <= s.max_scale_x,
        "scale x {} outside [{}, {}]",
        s.scale_x,
        s.min_scale_x,
        s.max_scale_x
    );
    assert!(
        s.scale_y >= s.min_scale_y && s.scale_y <= s.max_scale_y,
        "scale y {} outside [{}, {}]",
        s.scale_y,
        s.min_scale_y,
        s.max_scale_y
    );

    let max_x = -vp.content_width() * (s.scale_x - 1.0);
    assert!(
        s.translate_x >= max_x - s.drag_offset_x - 1e-9 && s.translate_x <= s.drag_offset_x,
        "translate x {} outside [{}, {}]",
        s.translate_x,
        max_x - s.drag_offset_x,
        s.drag_offset_x
    );
    let max_y = vp.content_height() * (s.scale_y - 1.0);
    assert!(
        s.translate_y >= -s.drag_offset_y && s.translate_y <= max_y + s.drag_offset_y + 1e-9,
        "translate y {} outside [{}, {}]",
        s.translate_y,
        -s.drag_offset_y,
        max_y + s.drag_offset_y
    );
}

#[test_log::test]
fn random_gestures_stay_within_limits() {
    let mut rng = Lcg(0xC0FF_EE00_0000_0001);
    let config = ViewportConfig::default()
        .with_scale_limits_x(1.0, 20.0)
        .with_scale_limits_y(1.0, 6.0)
        .with_drag_offsets(25.0, 0.0);
    let mut vp = viewport(config);

    for step in 0..500 {
        let candidate = match step % 3 {
            0 => {
                let pivot = Point::new(rng.range(0.0, 820.0), rng.range(-440.0, 0.0));
                vp.zoom_by(rng.range(0.2, 3.0), rng.range(0.2, 3.0), pivot)
            }
            1 => vp.pan_by(Vec2::new(rng.range(-600.0, 600.0), rng.range(-600.0, 600.0))),
            _ => vp.zoom(rng.range(0.5, 2.0), rng.range(0.5, 2.0)),
        };
        vp.commit(candidate, None);
        assert_within_limits(&vp);
    }
}

#[test_log::test]
fn commit_is_idempotent() {
    let mut rng = Lcg(0x1DE0_0000_0000_0002);
    let mut vp = viewport(ViewportConfig::default().with_drag_offsets(10.0, 10.0));

    for _ in 0..200 {
        let pivot = Point::new(rng.range(-100.0, 900.0), rng.range(-500.0, 100.0));
        let candidate = vp.zoom_by(rng.range(0.1, 5.0), rng.range(0.1, 5.0), pivot);

        let mut twice = vp.clone();
        let once = vp.commit(candidate, None);
        twice.commit(candidate, None);
        let again = twice.commit(candidate, None);
        assert_eq!(once, again);
        assert_eq!(vp.scale_state(), twice.scale_state());

        // Re-committing the clamped result changes nothing either.
        assert_eq!(vp.commit(once, None), once);
    }
}

#[test_log::test]
fn limits_tightened_mid_gesture_reclamp() {
    let mut vp = viewport(ViewportConfig::default());
    vp.commit(vp.zoom_by(12.0, 12.0, Point::new(400.0, -200.0)), None);
    assert_within_limits(&vp);

    vp.set_scale_limits_x(2.0, 5.0);
    vp.set_scale_limits_y(1.0, 3.0);
    assert_eq!(vp.scale_x(), 5.0);
    assert_eq!(vp.scale_y(), 3.0);
    assert_within_limits(&vp);

    vp.fit_screen(None);
    assert!(vp.is_fully_zoomed_out());
    assert_eq!(vp.scale_state().min_scale_x, 1.0);
}

#[test_log::test]
fn resizing_reclamps_translation() {
    let mut vp = viewport(ViewportConfig::default());
    vp.commit(vp.zoom(2.0, 1.0), None);
    vp.commit(vp.pan_by(Vec2::new(-10_000.0, 0.0)), None);
    assert_eq!(vp.translate_x(), -vp.content_width());

    // A narrower surface shrinks the legal pan range.
    vp.set_dimensions(400.0, 500.0);
    assert_eq!(vp.translate_x(), -vp.content_width());
    assert_within_limits(&vp);
}
