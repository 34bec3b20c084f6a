// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

/// Result of planning ticks for one value range.
///
/// Ticks are ascending. When centered labels are enabled, [`TickPlan::centered`]
/// holds one entry per tick, each shifted by the same offset.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickPlan {
    pub(crate) ticks: Vec<f64>,
    pub(crate) centered: Vec<f64>,
    pub(crate) has_centered: bool,
    pub(crate) decimals: usize,
    pub(crate) interval: f64,
}

impl TickPlan {
    /// Creates an empty plan.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tick values in ascending order.
    #[must_use]
    pub fn ticks(&self) -> &[f64] {
        &self.ticks
    }

    /// The centered sequence, if centered labels were requested.
    #[must_use]
    pub fn centered(&self) -> Option<&[f64]> {
        self.has_centered.then_some(self.centered.as_slice())
    }

    /// Decimal places shared by every label in this plan.
    #[must_use]
    pub fn decimals(&self) -> usize {
        self.decimals
    }

    /// Spacing between consecutive ticks; `0.0` for an empty plan.
    #[must_use]
    pub fn interval(&self) -> f64 {
        self.interval
    }

    /// Number of ticks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ticks.len()
    }

    /// Whether the plan has no ticks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }

    /// Empties the plan, keeping its storage.
    pub(crate) fn clear(&mut self) {
        self.ticks.clear();
        self.centered.clear();
        self.has_centered = false;
        self.decimals = 0;
        self.interval = 0.0;
    }
}
