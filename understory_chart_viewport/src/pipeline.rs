// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::ops::Range;

use kurbo::{Affine, Point, Rect};
use understory_pool::{PoolError, PoolHandle};

use crate::scratch::GeometryScratch;
use crate::viewport::ViewportState;

/// One of the matrices a [`TransformPipeline`] has to prepare.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    /// The value-to-pixel matrix, built from the visible value range.
    ValueToPixel,
    /// The offset matrix, built from the chart margins.
    Offset,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ValueToPixel => "value-to-pixel",
            Self::Offset => "offset",
        })
    }
}

/// Errors reported by [`TransformPipeline`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TransformError {
    /// A mapping was requested before the named matrix was prepared.
    #[error("{0} matrix has not been prepared")]
    NotPrepared(Stage),
    /// A pooled variant could not store its result.
    #[error(transparent)]
    Pool(#[from] PoolError),
}

/// The value-to-pixel matrix and an inverse that tolerates collapsed axes.
#[derive(Clone, Copy, Debug, PartialEq)]
struct ValueMapping {
    forward: Affine,
    inverse: Affine,
}

/// Maps between value space and pixel space for one axis pairing.
///
/// The effective transform is built from three stages, applied in order:
///
/// 1. value-to-pixel: the visible value range stretched over the content
///    size, with y flipped so values grow upward;
/// 2. the viewport's pointer transform (pan and zoom);
/// 3. offset: moves the origin to the content's bottom-left corner, or flips
///    again for an inverted axis.
///
/// Stages 1 and 3 are prepared explicitly with
/// [`prepare_value_to_pixel`](Self::prepare_value_to_pixel) and
/// [`prepare_offset`](Self::prepare_offset). Stage 2 is read from the
/// [`ViewportState`] on every call, so the composition is never stale.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TransformPipeline {
    value_to_pixel: Option<ValueMapping>,
    offset: Option<Affine>,
}

impl TransformPipeline {
    /// Creates a pipeline with no prepared stages.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether both explicit stages have been prepared.
    #[must_use]
    pub fn is_prepared(&self) -> bool {
        self.value_to_pixel.is_some() && self.offset.is_some()
    }

    /// Rebuilds the value-to-pixel stage for the visible value range.
    ///
    /// A non-finite scale factor (for example from a zero range) is replaced
    /// by zero, collapsing that axis onto a single line. The inverse of a
    /// collapsed axis maps every pixel back to that axis's minimum.
    pub fn prepare_value_to_pixel(
        &mut self,
        viewport: &ViewportState,
        min_x: f64,
        range_x: f64,
        range_y: f64,
        min_y: f64,
    ) {
        let scale_x = finite_or_zero(viewport.content_width() / range_x, "x scale");
        let scale_y = finite_or_zero(viewport.content_height() / range_y, "y scale");
        let min_x = finite_or_zero(min_x, "x minimum");
        let min_y = finite_or_zero(min_y, "y minimum");

        let forward = Affine::scale_non_uniform(scale_x, -scale_y)
            * Affine::translate((-min_x, -min_y));
        let inverse = Affine::translate((min_x, min_y))
            * Affine::scale_non_uniform(reciprocal_or_zero(scale_x), -reciprocal_or_zero(scale_y));
        self.value_to_pixel = Some(ValueMapping { forward, inverse });
    }

    /// Rebuilds the offset stage from the viewport's margins.
    pub fn prepare_offset(&mut self, viewport: &ViewportState, inverted: bool) {
        let offset = if inverted {
            Affine::scale_non_uniform(1.0, -1.0)
                * Affine::translate((viewport.offset_left(), -viewport.offset_top()))
        } else {
            Affine::translate((
                viewport.offset_left(),
                viewport.chart_height() - viewport.offset_bottom(),
            ))
        };
        self.offset = Some(offset);
    }

    fn forward_stage(&self) -> Result<Affine, TransformError> {
        self.value_to_pixel
            .map(|m| m.forward)
            .ok_or(TransformError::NotPrepared(Stage::ValueToPixel))
    }

    fn inverse_stage(&self) -> Result<Affine, TransformError> {
        self.value_to_pixel
            .map(|m| m.inverse)
            .ok_or(TransformError::NotPrepared(Stage::ValueToPixel))
    }

    fn offset_stage(&self) -> Result<Affine, TransformError> {
        self.offset.ok_or(TransformError::NotPrepared(Stage::Offset))
    }

    /// The prepared value-to-pixel stage on its own.
    pub fn value_to_pixel_matrix(&self) -> Result<Affine, TransformError> {
        self.forward_stage()
    }

    /// The prepared offset stage on its own.
    pub fn offset_matrix(&self) -> Result<Affine, TransformError> {
        self.offset_stage()
    }

    /// The full value-to-pixel composition for the viewport's current pan and zoom.
    pub fn effective_matrix(&self, viewport: &ViewportState) -> Result<Affine, TransformError> {
        let value_to_pixel = self.forward_stage()?;
        let offset = self.offset_stage()?;
        Ok(offset * viewport.pointer_transform() * value_to_pixel)
    }

    /// The inverse of [`effective_matrix`](Self::effective_matrix).
    pub fn pixel_to_value_matrix(&self, viewport: &ViewportState) -> Result<Affine, TransformError> {
        let pixel_to_value = self.inverse_stage()?;
        let offset = self.offset_stage()?;
        Ok(pixel_to_value * viewport.pointer_transform().inverse() * offset.inverse())
    }

    /// Maps value-space points to pixels in place.
    pub fn map_points_to_pixel(
        &self,
        viewport: &ViewportState,
        points: &mut [Point],
    ) -> Result<(), TransformError> {
        let matrix = self.effective_matrix(viewport)?;
        for pt in points {
            *pt = matrix * *pt;
        }
        Ok(())
    }

    /// Maps pixels to value-space points in place.
    pub fn map_points_to_value(
        &self,
        viewport: &ViewportState,
        points: &mut [Point],
    ) -> Result<(), TransformError> {
        let matrix = self.pixel_to_value_matrix(viewport)?;
        for pt in points {
            *pt = matrix * *pt;
        }
        Ok(())
    }

    /// Pixel position of one value-space point.
    pub fn pixel_for_value(
        &self,
        viewport: &ViewportState,
        value: Point,
    ) -> Result<Point, TransformError> {
        Ok(self.effective_matrix(viewport)? * value)
    }

    /// Value-space point under one pixel.
    pub fn value_for_pixel(
        &self,
        viewport: &ViewportState,
        pixel: Point,
    ) -> Result<Point, TransformError> {
        Ok(self.pixel_to_value_matrix(viewport)? * pixel)
    }

    /// Pixel bounding box of a value-space rectangle.
    pub fn map_rect_to_pixel(
        &self,
        viewport: &ViewportState,
        rect: Rect,
    ) -> Result<Rect, TransformError> {
        Ok(self.effective_matrix(viewport)?.transform_rect_bbox(rect))
    }

    /// Value-space bounding box of a pixel rectangle.
    pub fn map_rect_to_value(
        &self,
        viewport: &ViewportState,
        rect: Rect,
    ) -> Result<Rect, TransformError> {
        Ok(self.pixel_to_value_matrix(viewport)?.transform_rect_bbox(rect))
    }

    /// Like [`pixel_for_value`](Self::pixel_for_value), storing the result in `scratch`.
    pub fn pixel_for_value_pooled(
        &self,
        viewport: &ViewportState,
        value: Point,
        scratch: &mut GeometryScratch,
    ) -> Result<PoolHandle<Point>, TransformError> {
        let pixel = self.pixel_for_value(viewport, value)?;
        Ok(scratch.store_point(pixel)?)
    }

    /// Like [`value_for_pixel`](Self::value_for_pixel), storing the result in `scratch`.
    pub fn value_for_pixel_pooled(
        &self,
        viewport: &ViewportState,
        pixel: Point,
        scratch: &mut GeometryScratch,
    ) -> Result<PoolHandle<Point>, TransformError> {
        let value = self.value_for_pixel(viewport, pixel)?;
        Ok(scratch.store_point(value)?)
    }

    /// Like [`map_rect_to_pixel`](Self::map_rect_to_pixel), storing the result in `scratch`.
    pub fn map_rect_to_pixel_pooled(
        &self,
        viewport: &ViewportState,
        rect: Rect,
        scratch: &mut GeometryScratch,
    ) -> Result<PoolHandle<Rect>, TransformError> {
        let mapped = self.map_rect_to_pixel(viewport, rect)?;
        Ok(scratch.store_rect(mapped)?)
    }

    /// Like [`effective_matrix`](Self::effective_matrix), storing the result in `scratch`.
    pub fn effective_matrix_pooled(
        &self,
        viewport: &ViewportState,
        scratch: &mut GeometryScratch,
    ) -> Result<PoolHandle<Affine>, TransformError> {
        let matrix = self.effective_matrix(viewport)?;
        Ok(scratch.store_transform(matrix)?)
    }

    /// Converts a surface pixel into pointer space, where zoom pivots live.
    pub fn pixel_to_pointer_space(&self, pixel: Point) -> Result<Point, TransformError> {
        Ok(self.offset_stage()?.inverse() * pixel)
    }

    /// Candidate pan that moves `value` to the content's top-left corner.
    pub fn move_view_to(
        &self,
        viewport: &ViewportState,
        value: Point,
    ) -> Result<Affine, TransformError> {
        let content = viewport.content_rect();
        self.pan_value_to(viewport, value, Point::new(content.x0, content.y0))
    }

    /// Candidate pan that moves `value` to the content's center.
    pub fn center_view_on(
        &self,
        viewport: &ViewportState,
        value: Point,
    ) -> Result<Affine, TransformError> {
        self.pan_value_to(viewport, value, viewport.content_center())
    }

    fn pan_value_to(
        &self,
        viewport: &ViewportState,
        value: Point,
        target: Point,
    ) -> Result<Affine, TransformError> {
        let pixel = self.pixel_for_value(viewport, value)?;
        let to_pointer = self.offset_stage()?.inverse();
        let delta = (to_pointer * target) - (to_pointer * pixel);
        Ok(viewport.pan_by(delta))
    }

    /// Visible horizontal value range, ascending.
    ///
    /// Read from the content edges when the viewport is zoomed in
    /// horizontally and the content is wider than ten pixels; `fallback`
    /// otherwise.
    pub fn visible_x_range(
        &self,
        viewport: &ViewportState,
        fallback: Range<f64>,
    ) -> Result<Range<f64>, TransformError> {
        let matrix = self.pixel_to_value_matrix(viewport)?;
        if !zoomed_in_enough(viewport, viewport.is_fully_zoomed_out_x()) {
            return Ok(fallback);
        }
        let content = viewport.content_rect();
        let left = (matrix * Point::new(content.x0, content.y0)).x;
        let right = (matrix * Point::new(content.x1, content.y0)).x;
        Ok(ascending(left, right))
    }

    /// Visible vertical value range, ascending.
    ///
    /// Read from the content edges when the viewport is zoomed in
    /// vertically and the content is wider than ten pixels; `fallback`
    /// otherwise.
    pub fn visible_y_range(
        &self,
        viewport: &ViewportState,
        fallback: Range<f64>,
    ) -> Result<Range<f64>, TransformError> {
        let matrix = self.pixel_to_value_matrix(viewport)?;
        if !zoomed_in_enough(viewport, viewport.is_fully_zoomed_out_y()) {
            return Ok(fallback);
        }
        let content = viewport.content_rect();
        let top = (matrix * Point::new(content.x0, content.y0)).y;
        let bottom = (matrix * Point::new(content.x0, content.y1)).y;
        Ok(ascending(top, bottom))
    }
}

fn zoomed_in_enough(viewport: &ViewportState, fully_zoomed_out: bool) -> bool {
    viewport.content_width() > 10.0 && !fully_zoomed_out
}

fn ascending(a: f64, b: f64) -> Range<f64> {
    if a <= b { a..b } else { b..a }
}

fn finite_or_zero(value: f64, what: &str) -> f64 {
    if value.is_finite() {
        value
    } else {
        log::debug!("non-finite {what} {value} collapsed to 0");
        0.0
    }
}

fn reciprocal_or_zero(scale: f64) -> f64 {
    if scale == 0.0 { 0.0 } else { 1.0 / scale }
}
