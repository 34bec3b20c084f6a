// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Zoom and drag limits applied by [`ViewportState`](crate::ViewportState).
///
/// Values are normalized when applied: a minimum scale below `1.0` is raised
/// to `1.0`, a maximum scale of `0.0` means unbounded, and negative drag
/// offsets are treated as zero.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportConfig {
    /// Smallest horizontal scale factor.
    pub min_scale_x: f64,
    /// Largest horizontal scale factor.
    pub max_scale_x: f64,
    /// Smallest vertical scale factor.
    pub min_scale_y: f64,
    /// Largest vertical scale factor.
    pub max_scale_y: f64,
    /// Pixels the content may be dragged past its left and right edges.
    pub drag_offset_x: f64,
    /// Pixels the content may be dragged past its top and bottom edges.
    pub drag_offset_y: f64,
}

impl ViewportConfig {
    /// Returns the config with horizontal scale limits.
    #[must_use]
    pub fn with_scale_limits_x(mut self, min: f64, max: f64) -> Self {
        self.min_scale_x = min;
        self.max_scale_x = max;
        self
    }

    /// Returns the config with vertical scale limits.
    #[must_use]
    pub fn with_scale_limits_y(mut self, min: f64, max: f64) -> Self {
        self.min_scale_y = min;
        self.max_scale_y = max;
        self
    }

    /// Returns the config with drag offsets for both axes.
    #[must_use]
    pub fn with_drag_offsets(mut self, x: f64, y: f64) -> Self {
        self.drag_offset_x = x;
        self.drag_offset_y = y;
        self
    }
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            min_scale_x: 1.0,
            max_scale_x: f64::MAX,
            min_scale_y: 1.0,
            max_scale_y: f64::MAX,
            drag_offset_x: 0.0,
            drag_offset_y: 0.0,
        }
    }
}

pub(crate) fn normalize_min_scale(scale: f64) -> f64 {
    // `max` also maps NaN to 1.0.
    scale.max(1.0)
}

pub(crate) fn normalize_max_scale(scale: f64) -> f64 {
    if scale == 0.0 || scale.is_nan() {
        f64::MAX
    } else {
        scale
    }
}

pub(crate) fn normalize_drag_offset(offset: f64) -> f64 {
    offset.max(0.0)
}
