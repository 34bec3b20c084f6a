// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_chart_viewport --heading-base-level=0

//! Understory Chart Viewport: pan/zoom state and value/pixel transforms for 2D charts.
//!
//! This crate provides the headless core a chart renderer needs between its
//! data and its drawing surface:
//! - [`ViewportState`]: the surface size, the content rectangle inside the
//!   chart margins, and the pan/zoom "pointer" transform, with scale and
//!   translation limits enforced on every change.
//! - [`TransformPipeline`]: maps value-space points and rectangles to pixels
//!   and back through three explicit stages.
//! - [`GeometryScratch`]: pooled points, rectangles and matrices for
//!   renderers that want to reuse scratch geometry between frames.
//!
//! It does **not** draw, classify gestures, or own chart data. Callers are
//! expected to:
//! - Turn touch or mouse input into scale factors, pivots, and deltas.
//! - Feed the visible value range into a tick planner such as
//!   `understory_axis` and draw the resulting labels.
//!
//! ## Gestures go through `commit`
//!
//! Gesture helpers return candidate transforms; only
//! [`ViewportState::commit`] changes the live transform, and it clamps first.
//!
//! ```rust
//! use kurbo::Point;
//! use understory_chart_viewport::{ViewportConfig, ViewportState};
//!
//! let config = ViewportConfig::default().with_scale_limits_x(1.0, 4.0);
//! let mut viewport = ViewportState::with_config(config);
//! viewport.set_dimensions(800.0, 600.0);
//! viewport.restrain(60.0, 20.0, 20.0, 40.0);
//!
//! // Pinch far past the limit; the committed scale stops at 4.
//! let candidate = viewport.zoom_by(10.0, 1.0, Point::ZERO);
//! viewport.commit(candidate, None);
//! assert_eq!(viewport.scale_x(), 4.0);
//! assert!(viewport.can_zoom_out_more_x());
//! ```
//!
//! ## Mapping values to pixels
//!
//! ```rust
//! use kurbo::Point;
//! use understory_chart_viewport::{TransformPipeline, ViewportState};
//!
//! let mut viewport = ViewportState::new();
//! viewport.set_dimensions(400.0, 300.0);
//!
//! // x in [0, 100], y in [0, 10], y growing upward.
//! let mut pipeline = TransformPipeline::new();
//! pipeline.prepare_value_to_pixel(&viewport, 0.0, 100.0, 10.0, 0.0);
//! pipeline.prepare_offset(&viewport, false);
//!
//! let pixel = pipeline.pixel_for_value(&viewport, Point::new(50.0, 10.0)).unwrap();
//! assert_eq!(pixel, Point::new(200.0, 0.0));
//!
//! let value = pipeline.value_for_pixel(&viewport, pixel).unwrap();
//! assert!((value - Point::new(50.0, 10.0)).hypot() < 1e-9);
//! ```
//!
//! Mapping before both stages are prepared fails with
//! [`TransformError::NotPrepared`] instead of falling back to identity.
//!
//! This crate is `no_std` + `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod dependency;
mod pipeline;
mod scratch;
mod viewport;

pub use config::ViewportConfig;
pub use dependency::{AxisDependency, AxisTransforms};
pub use pipeline::{Stage, TransformError, TransformPipeline};
pub use scratch::GeometryScratch;
pub use viewport::{
    RedrawTarget, ScaleState, ViewportDebugInfo, ViewportState, ZOOM_IN_FACTOR, ZOOM_OUT_FACTOR,
};
