// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// How the centered tick sequence is offset from the regular ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CenterMode {
    /// Offset every tick by half the interval (cartesian axes).
    #[default]
    HalfInterval,
    /// Offset every tick by half the gap between the first two ticks.
    ///
    /// Used by radial and other center-origin axes, whose first gap can differ
    /// from the nominal interval.
    HalfFirstGap,
}

/// Inputs that shape a [`TickPlan`](crate::TickPlan) besides the range itself.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickPolicy {
    /// Approximate number of labels. Zero disables ticks entirely.
    ///
    /// Planning uses at most [`MAX_LABEL_COUNT`](Self::MAX_LABEL_COUNT).
    pub label_count: usize,
    /// Minimum interval between ticks, if enforced.
    pub granularity: Option<f64>,
    /// Place exactly `label_count` evenly spaced ticks from min to max.
    pub force_label_count: bool,
    /// Also produce the centered tick sequence.
    pub center_labels: bool,
    /// Offset used for the centered sequence.
    pub center_mode: CenterMode,
}

impl TickPolicy {
    /// Default number of labels.
    pub const DEFAULT_LABEL_COUNT: usize = 6;

    /// Largest label count the planner honours.
    pub const MAX_LABEL_COUNT: usize = 25;

    /// Returns the policy with a different label count, capped at
    /// [`MAX_LABEL_COUNT`](Self::MAX_LABEL_COUNT).
    #[must_use]
    pub fn with_label_count(mut self, label_count: usize) -> Self {
        self.label_count = label_count.min(Self::MAX_LABEL_COUNT);
        self
    }

    /// Returns the policy with a minimum interval enforced.
    #[must_use]
    pub fn with_granularity(mut self, granularity: f64) -> Self {
        self.granularity = Some(granularity);
        self
    }

    /// Returns the policy without a minimum interval.
    #[must_use]
    pub fn without_granularity(mut self) -> Self {
        self.granularity = None;
        self
    }

    /// Returns the policy with forced label count enabled or disabled.
    #[must_use]
    pub fn with_forced_label_count(mut self, force: bool) -> Self {
        self.force_label_count = force;
        self
    }

    /// Returns the policy with centered labels enabled or disabled.
    #[must_use]
    pub fn with_centered_labels(mut self, center: bool) -> Self {
        self.center_labels = center;
        self
    }

    /// Returns the policy with a different center mode.
    #[must_use]
    pub fn with_center_mode(mut self, mode: CenterMode) -> Self {
        self.center_mode = mode;
        self
    }
}

impl Default for TickPolicy {
    fn default() -> Self {
        Self {
            label_count: Self::DEFAULT_LABEL_COUNT,
            granularity: None,
            force_label_count: false,
            center_labels: false,
            center_mode: CenterMode::default(),
        }
    }
}
