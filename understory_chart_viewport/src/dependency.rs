// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::pipeline::TransformPipeline;
use crate::viewport::ViewportState;

/// Which vertical axis a data series is plotted against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AxisDependency {
    /// The left axis.
    #[default]
    Left,
    /// The right axis.
    Right,
}

/// One [`TransformPipeline`] per [`AxisDependency`], sharing a viewport.
///
/// Both pipelines read the same pointer transform, so a gesture pans and
/// zooms both axes together while each keeps its own value range.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AxisTransforms {
    left: TransformPipeline,
    right: TransformPipeline,
}

impl AxisTransforms {
    /// Creates unprepared pipelines for both axes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The pipeline for `axis`.
    #[must_use]
    pub fn get(&self, axis: AxisDependency) -> &TransformPipeline {
        match axis {
            AxisDependency::Left => &self.left,
            AxisDependency::Right => &self.right,
        }
    }

    /// The pipeline for `axis`, mutably.
    pub fn get_mut(&mut self, axis: AxisDependency) -> &mut TransformPipeline {
        match axis {
            AxisDependency::Left => &mut self.left,
            AxisDependency::Right => &mut self.right,
        }
    }

    /// Rebuilds both offset stages; call after the margins change.
    pub fn prepare_offsets(
        &mut self,
        viewport: &ViewportState,
        left_inverted: bool,
        right_inverted: bool,
    ) {
        self.left.prepare_offset(viewport, left_inverted);
        self.right.prepare_offset(viewport, right_inverted);
    }
}
