// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::config::{
    ViewportConfig, normalize_drag_offset, normalize_max_scale, normalize_min_scale,
};

/// Scale factor applied by [`ViewportState::zoom_in`].
pub const ZOOM_IN_FACTOR: f64 = 1.4;

/// Scale factor applied by [`ViewportState::zoom_out`].
pub const ZOOM_OUT_FACTOR: f64 = 0.7;

/// Something that can be asked to redraw after the viewport changes.
///
/// Closures implement this, so a test or a host without a surface type can
/// pass `&mut || { ... }`.
pub trait RedrawTarget {
    /// Schedules a redraw of the surface.
    fn request_redraw(&mut self);
}

impl<F: FnMut()> RedrawTarget for F {
    fn request_redraw(&mut self) {
        (*self)();
    }
}

/// Clamped scale and translation of the pointer transform, with its limits.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScaleState {
    /// Current horizontal scale factor.
    pub scale_x: f64,
    /// Current vertical scale factor.
    pub scale_y: f64,
    /// Current horizontal translation in pixels.
    pub translate_x: f64,
    /// Current vertical translation in pixels.
    pub translate_y: f64,
    /// Smallest allowed horizontal scale.
    pub min_scale_x: f64,
    /// Largest allowed horizontal scale.
    pub max_scale_x: f64,
    /// Smallest allowed vertical scale.
    pub min_scale_y: f64,
    /// Largest allowed vertical scale.
    pub max_scale_y: f64,
    /// Horizontal overscroll allowance in pixels.
    pub drag_offset_x: f64,
    /// Vertical overscroll allowance in pixels.
    pub drag_offset_y: f64,
}

impl ScaleState {
    fn from_config(config: &ViewportConfig) -> Self {
        Self {
            scale_x: 1.0,
            scale_y: 1.0,
            translate_x: 0.0,
            translate_y: 0.0,
            min_scale_x: normalize_min_scale(config.min_scale_x),
            max_scale_x: normalize_max_scale(config.max_scale_x),
            min_scale_y: normalize_min_scale(config.min_scale_y),
            max_scale_y: normalize_max_scale(config.max_scale_y),
            drag_offset_x: normalize_drag_offset(config.drag_offset_x),
            drag_offset_y: normalize_drag_offset(config.drag_offset_y),
        }
    }
}

impl Default for ScaleState {
    fn default() -> Self {
        Self::from_config(&ViewportConfig::default())
    }
}

/// Authoritative pan/zoom state of a chart surface.
///
/// `ViewportState` owns the content rectangle (the surface minus its margins)
/// and the pointer transform that gestures manipulate. Gesture helpers such as
/// [`zoom_by`](Self::zoom_by) and [`pan_by`](Self::pan_by) only compute
/// candidate transforms; [`commit`](Self::commit) is the one mutator, and it
/// always clamps the candidate against the configured scale limits and the
/// content size before storing it.
///
/// The pointer transform operates in pointer space: pixels relative to the
/// bottom-left corner of the content rectangle. Pivots passed to the zoom
/// helpers are in that space; see
/// [`TransformPipeline::pixel_to_pointer_space`](crate::TransformPipeline::pixel_to_pointer_space).
#[derive(Clone, Debug)]
pub struct ViewportState {
    content: Rect,
    chart_width: f64,
    chart_height: f64,
    pointer: Affine,
    scale: ScaleState,
}

impl ViewportState {
    /// Creates a viewport with default limits and no dimensions.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(ViewportConfig::default())
    }

    /// Creates a viewport with the given limits and no dimensions.
    #[must_use]
    pub fn with_config(config: ViewportConfig) -> Self {
        Self {
            content: Rect::ZERO,
            chart_width: 0.0,
            chart_height: 0.0,
            pointer: Affine::IDENTITY,
            scale: ScaleState::from_config(&config),
        }
    }

    /// Sets the surface size, keeping the current margins.
    pub fn set_dimensions(&mut self, width: f64, height: f64) {
        let left = self.offset_left();
        let top = self.offset_top();
        let right = self.offset_right();
        let bottom = self.offset_bottom();

        self.chart_width = width;
        self.chart_height = height;
        self.restrain(left, top, right, bottom);
    }

    /// Sets the margins between the surface edges and the content rectangle.
    pub fn restrain(&mut self, left: f64, top: f64, right: f64, bottom: f64) {
        self.content = Rect::new(
            left,
            top,
            self.chart_width - right,
            self.chart_height - bottom,
        );
        // The translation bound depends on the content size.
        self.pointer = self.clamp(self.pointer);
    }

    /// Whether the surface has a non-zero size.
    #[must_use]
    pub fn has_chart_dimensions(&self) -> bool {
        self.chart_width > 0.0 && self.chart_height > 0.0
    }

    /// Surface width in pixels.
    #[must_use]
    pub fn chart_width(&self) -> f64 {
        self.chart_width
    }

    /// Surface height in pixels.
    #[must_use]
    pub fn chart_height(&self) -> f64 {
        self.chart_height
    }

    /// The drawable area in pixels.
    #[must_use]
    pub fn content_rect(&self) -> Rect {
        self.content
    }

    /// Width of the content rectangle.
    #[must_use]
    pub fn content_width(&self) -> f64 {
        self.content.width()
    }

    /// Height of the content rectangle.
    #[must_use]
    pub fn content_height(&self) -> f64 {
        self.content.height()
    }

    /// Center of the content rectangle.
    #[must_use]
    pub fn content_center(&self) -> Point {
        self.content.center()
    }

    /// The shorter side of the content rectangle.
    #[must_use]
    pub fn smallest_content_extent(&self) -> f64 {
        self.content.width().min(self.content.height())
    }

    /// Left margin.
    #[must_use]
    pub fn offset_left(&self) -> f64 {
        self.content.x0
    }

    /// Top margin.
    #[must_use]
    pub fn offset_top(&self) -> f64 {
        self.content.y0
    }

    /// Right margin.
    #[must_use]
    pub fn offset_right(&self) -> f64 {
        self.chart_width - self.content.x1
    }

    /// Bottom margin.
    #[must_use]
    pub fn offset_bottom(&self) -> f64 {
        self.chart_height - self.content.y1
    }

    /// The live, clamped pointer transform.
    #[must_use]
    pub fn pointer_transform(&self) -> Affine {
        self.pointer
    }

    /// Current scale, translation, and limits.
    #[must_use]
    pub fn scale_state(&self) -> ScaleState {
        self.scale
    }

    /// Current horizontal scale factor.
    #[must_use]
    pub fn scale_x(&self) -> f64 {
        self.scale.scale_x
    }

    /// Current vertical scale factor.
    #[must_use]
    pub fn scale_y(&self) -> f64 {
        self.scale.scale_y
    }

    /// Current horizontal translation.
    #[must_use]
    pub fn translate_x(&self) -> f64 {
        self.scale.translate_x
    }

    /// Current vertical translation.
    #[must_use]
    pub fn translate_y(&self) -> f64 {
        self.scale.translate_y
    }

    // --- Candidates -------------------------------------------------------

    /// Candidate that scales the current transform about `pivot`.
    #[must_use]
    pub fn zoom_by(&self, scale_x: f64, scale_y: f64, pivot: Point) -> Affine {
        let pivot = pivot.to_vec2();
        Affine::translate(pivot)
            * Affine::scale_non_uniform(scale_x, scale_y)
            * Affine::translate(-pivot)
            * self.pointer
    }

    /// Candidate that translates the current transform by `delta`.
    #[must_use]
    pub fn pan_by(&self, delta: Vec2) -> Affine {
        Affine::translate(delta) * self.pointer
    }

    /// Candidate that zooms in by [`ZOOM_IN_FACTOR`] about `pivot`.
    #[must_use]
    pub fn zoom_in(&self, pivot: Point) -> Affine {
        self.zoom_by(ZOOM_IN_FACTOR, ZOOM_IN_FACTOR, pivot)
    }

    /// Candidate that zooms out by [`ZOOM_OUT_FACTOR`] about `pivot`.
    #[must_use]
    pub fn zoom_out(&self, pivot: Point) -> Affine {
        self.zoom_by(ZOOM_OUT_FACTOR, ZOOM_OUT_FACTOR, pivot)
    }

    /// Candidate that scales the current transform about the pointer-space origin.
    #[must_use]
    pub fn zoom(&self, scale_x: f64, scale_y: f64) -> Affine {
        Affine::scale_non_uniform(scale_x, scale_y) * self.pointer
    }

    /// Candidate with an absolute scale about `pivot`, discarding the current pan.
    #[must_use]
    pub fn set_zoom(&self, scale_x: f64, scale_y: f64, pivot: Point) -> Affine {
        let pivot = pivot.to_vec2();
        Affine::translate(pivot)
            * Affine::scale_non_uniform(scale_x, scale_y)
            * Affine::translate(-pivot)
    }

    /// Candidate with no zoom and no pan.
    #[must_use]
    pub fn reset_zoom(&self) -> Affine {
        Affine::IDENTITY
    }

    // --- Commit -----------------------------------------------------------

    /// Clamps `candidate` and makes it the live pointer transform.
    ///
    /// Scale is clamped first, then the translation bound is derived from the
    /// clamped scale and the content size. If `redraw` is given, it is asked
    /// to redraw afterwards. Returns the stored transform.
    pub fn commit(&mut self, candidate: Affine, redraw: Option<&mut dyn RedrawTarget>) -> Affine {
        let clamped = self.clamp(candidate);
        if clamped != candidate {
            log::trace!("clamped pointer transform {candidate:?} to {clamped:?}");
        }
        self.pointer = clamped;
        if let Some(target) = redraw {
            target.request_redraw();
        }
        clamped
    }

    /// Lowers both minimum scales to `1.0` and commits the identity transform.
    pub fn fit_screen(&mut self, redraw: Option<&mut dyn RedrawTarget>) -> Affine {
        self.scale.min_scale_x = 1.0;
        self.scale.min_scale_y = 1.0;
        self.commit(Affine::IDENTITY, redraw)
    }

    /// Decomposes `candidate` and writes the clamped components into the
    /// scale state. Skew is discarded.
    fn clamp(&mut self, candidate: Affine) -> Affine {
        let [a, _, _, d, e, f] = candidate.as_coeffs();
        let s = &mut self.scale;

        // `max` then `min` keeps NaN out and lets the maximum win when the
        // limits cross.
        s.scale_x = a.max(s.min_scale_x).min(s.max_scale_x);
        s.scale_y = d.max(s.min_scale_y).min(s.max_scale_y);

        let max_translate_x = -self.content.width() * (s.scale_x - 1.0);
        s.translate_x = e
            .max(max_translate_x - s.drag_offset_x)
            .min(s.drag_offset_x);

        let max_translate_y = self.content.height() * (s.scale_y - 1.0);
        s.translate_y = f
            .min(max_translate_y + s.drag_offset_y)
            .max(-s.drag_offset_y);

        Affine::new([s.scale_x, 0.0, 0.0, s.scale_y, s.translate_x, s.translate_y])
    }

    // --- Limits -----------------------------------------------------------

    /// Sets the smallest horizontal scale; values below `1.0` become `1.0`.
    pub fn set_min_scale_x(&mut self, scale: f64) {
        self.scale.min_scale_x = normalize_min_scale(scale);
        self.limits_changed();
    }

    /// Sets the largest horizontal scale; `0.0` means unbounded.
    pub fn set_max_scale_x(&mut self, scale: f64) {
        self.scale.max_scale_x = normalize_max_scale(scale);
        self.limits_changed();
    }

    /// Sets the smallest vertical scale; values below `1.0` become `1.0`.
    pub fn set_min_scale_y(&mut self, scale: f64) {
        self.scale.min_scale_y = normalize_min_scale(scale);
        self.limits_changed();
    }

    /// Sets the largest vertical scale; `0.0` means unbounded.
    pub fn set_max_scale_y(&mut self, scale: f64) {
        self.scale.max_scale_y = normalize_max_scale(scale);
        self.limits_changed();
    }

    /// Sets both horizontal scale limits.
    pub fn set_scale_limits_x(&mut self, min: f64, max: f64) {
        self.scale.min_scale_x = normalize_min_scale(min);
        self.scale.max_scale_x = normalize_max_scale(max);
        self.limits_changed();
    }

    /// Sets both vertical scale limits.
    pub fn set_scale_limits_y(&mut self, min: f64, max: f64) {
        self.scale.min_scale_y = normalize_min_scale(min);
        self.scale.max_scale_y = normalize_max_scale(max);
        self.limits_changed();
    }

    /// Sets the horizontal overscroll allowance in pixels.
    pub fn set_drag_offset_x(&mut self, offset: f64) {
        self.scale.drag_offset_x = normalize_drag_offset(offset);
        self.limits_changed();
    }

    /// Sets the vertical overscroll allowance in pixels.
    pub fn set_drag_offset_y(&mut self, offset: f64) {
        self.scale.drag_offset_y = normalize_drag_offset(offset);
        self.limits_changed();
    }

    /// Whether neither axis allows overscroll.
    #[must_use]
    pub fn has_no_drag_offset(&self) -> bool {
        self.scale.drag_offset_x <= 0.0 && self.scale.drag_offset_y <= 0.0
    }

    fn limits_changed(&mut self) {
        log::debug!(
            "viewport limits: scale x [{}, {}], y [{}, {}], drag ({}, {})",
            self.scale.min_scale_x,
            self.scale.max_scale_x,
            self.scale.min_scale_y,
            self.scale.max_scale_y,
            self.scale.drag_offset_x,
            self.scale.drag_offset_y,
        );
        self.pointer = self.clamp(self.pointer);
    }

    // --- Zoom predicates --------------------------------------------------

    /// Whether the horizontal axis shows the whole fitted range.
    #[must_use]
    pub fn is_fully_zoomed_out_x(&self) -> bool {
        !(self.scale.scale_x > self.scale.min_scale_x || self.scale.min_scale_x > 1.0)
    }

    /// Whether the vertical axis shows the whole fitted range.
    #[must_use]
    pub fn is_fully_zoomed_out_y(&self) -> bool {
        !(self.scale.scale_y > self.scale.min_scale_y || self.scale.min_scale_y > 1.0)
    }

    /// Whether both axes are fully zoomed out.
    #[must_use]
    pub fn is_fully_zoomed_out(&self) -> bool {
        self.is_fully_zoomed_out_x() && self.is_fully_zoomed_out_y()
    }

    /// Whether the horizontal scale is below its maximum.
    #[must_use]
    pub fn can_zoom_in_more_x(&self) -> bool {
        self.scale.scale_x < self.scale.max_scale_x
    }

    /// Whether the vertical scale is below its maximum.
    #[must_use]
    pub fn can_zoom_in_more_y(&self) -> bool {
        self.scale.scale_y < self.scale.max_scale_y
    }

    /// Whether the horizontal scale is above its minimum.
    #[must_use]
    pub fn can_zoom_out_more_x(&self) -> bool {
        self.scale.scale_x > self.scale.min_scale_x
    }

    /// Whether the vertical scale is above its minimum.
    #[must_use]
    pub fn can_zoom_out_more_y(&self) -> bool {
        self.scale.scale_y > self.scale.min_scale_y
    }

    // --- Bounds predicates ------------------------------------------------

    /// Whether `x` is not left of the content, with one pixel of slack.
    #[must_use]
    pub fn is_in_bounds_left(&self, x: f64) -> bool {
        self.content.x0 <= x + 1.0
    }

    /// Whether `x`, truncated to hundredths, is not right of the content.
    #[must_use]
    pub fn is_in_bounds_right(&self, x: f64) -> bool {
        self.content.x1 >= truncate_hundredths(x)
    }

    /// Whether `y` is not above the content, with one pixel of slack.
    #[must_use]
    pub fn is_in_bounds_top(&self, y: f64) -> bool {
        self.content.y0 <= y + 1.0
    }

    /// Whether `y`, truncated to hundredths, is not below the content.
    #[must_use]
    pub fn is_in_bounds_bottom(&self, y: f64) -> bool {
        self.content.y1 >= truncate_hundredths(y)
    }

    /// Whether `x` is horizontally inside the content.
    #[must_use]
    pub fn is_in_bounds_x(&self, x: f64) -> bool {
        self.is_in_bounds_left(x) && self.is_in_bounds_right(x)
    }

    /// Whether `y` is vertically inside the content.
    #[must_use]
    pub fn is_in_bounds_y(&self, y: f64) -> bool {
        self.is_in_bounds_top(y) && self.is_in_bounds_bottom(y)
    }

    /// Whether `pt` is inside the content on both axes.
    #[must_use]
    pub fn is_in_bounds(&self, pt: Point) -> bool {
        self.is_in_bounds_x(pt.x) && self.is_in_bounds_y(pt.y)
    }

    /// Snapshot of the current state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewportDebugInfo {
        ViewportDebugInfo {
            chart_size: Size::new(self.chart_width, self.chart_height),
            content_rect: self.content,
            pointer_transform: self.pointer,
            scale: self.scale,
            fully_zoomed_out: self.is_fully_zoomed_out(),
        }
    }
}

impl Default for ViewportState {
    fn default() -> Self {
        Self::new()
    }
}

/// Drops digits past the second decimal place, toward zero.
#[expect(
    clippy::cast_possible_truncation,
    reason = "pixel coordinates are far inside the i64 range after scaling by 100"
)]
fn truncate_hundredths(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    (value * 100.0) as i64 as f64 / 100.0
}

/// Debug snapshot of a [`ViewportState`].
#[derive(Clone, Copy, Debug)]
pub struct ViewportDebugInfo {
    /// Surface size in pixels.
    pub chart_size: Size,
    /// Drawable area in pixels.
    pub content_rect: Rect,
    /// Live pointer transform.
    pub pointer_transform: Affine,
    /// Scale, translation, and limits.
    pub scale: ScaleState,
    /// Whether both axes are fully zoomed out.
    pub fully_zoomed_out: bool,
}
