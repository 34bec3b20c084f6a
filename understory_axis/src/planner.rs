// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::nice::{decimals_for_interval, nice_interval, normalize_magnitude};
use crate::plan::TickPlan;
use crate::policy::{CenterMode, TickPolicy};

/// Chooses tick positions for a value range according to a [`TickPolicy`].
///
/// The planner holds no per-range state: every call recomputes the plan from
/// scratch.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TickPlanner {
    policy: TickPolicy,
}

impl TickPlanner {
    /// Creates a planner with the given policy.
    #[must_use]
    pub fn new(policy: TickPolicy) -> Self {
        Self { policy }
    }

    /// Returns the current policy.
    #[must_use]
    pub fn policy(&self) -> &TickPolicy {
        &self.policy
    }

    /// Replaces the policy.
    pub fn set_policy(&mut self, policy: TickPolicy) {
        self.policy = policy;
    }

    /// Plans ticks for `[min, max]`.
    #[must_use]
    pub fn plan(&self, min: f64, max: f64) -> TickPlan {
        let mut plan = TickPlan::new();
        self.plan_into(min, max, &mut plan);
        plan
    }

    /// Plans ticks for `[min, max]` into `plan`, reusing its storage.
    ///
    /// Swapped bounds are reordered. A zero label count, an empty range, or a
    /// non-finite range leaves `plan` empty. Label counts above
    /// [`TickPolicy::MAX_LABEL_COUNT`] are capped.
    pub fn plan_into(&self, min: f64, max: f64, plan: &mut TickPlan) {
        plan.clear();

        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        let range = max - min;
        let count = self.policy.label_count.min(TickPolicy::MAX_LABEL_COUNT);
        if count == 0 || !(range > 0.0) || !range.is_finite() {
            log::trace!("no ticks for range [{min}, {max}] with {count} labels");
            return;
        }

        let raw = range / count as f64;
        let mut interval = nice_interval(raw);
        if let Some(granularity) = self.policy.granularity {
            interval = interval.max(granularity);
        }
        interval = normalize_magnitude(interval);

        if self.policy.force_label_count {
            interval = fill_forced(min, max, count, plan);
        } else if !fill_stepped(min, max, interval, self.policy.center_labels, plan) {
            return;
        }

        plan.interval = interval;
        plan.decimals = decimals_for_interval(interval);

        if self.policy.center_labels {
            let offset = match self.policy.center_mode {
                CenterMode::HalfInterval => interval / 2.0,
                CenterMode::HalfFirstGap => match plan.ticks.as_slice() {
                    [first, second, ..] => (second - first) / 2.0,
                    _ => interval / 2.0,
                },
            };
            let TickPlan {
                ticks, centered, ..
            } = plan;
            centered.extend(ticks.iter().map(|t| t + offset));
            plan.has_centered = true;
        }
    }
}

/// Spaces exactly `count` ticks from `min` to `max`; returns the interval.
///
/// Fewer ticks are emitted when the range is too narrow for its magnitude to
/// represent `count` distinct values.
fn fill_forced(min: f64, max: f64, count: usize, plan: &mut TickPlan) -> f64 {
    if count == 1 {
        plan.ticks.push(positive_zero(min));
        return max - min;
    }
    let interval = (max - min) / (count - 1) as f64;
    plan.ticks.reserve(count);
    for i in 0..count - 1 {
        push_ascending(plan, min + i as f64 * interval);
    }
    if plan.ticks.last().is_some_and(|&prev| max <= prev) {
        plan.ticks.pop();
    }
    plan.ticks.push(positive_zero(max));
    interval
}

/// Emits every multiple of `interval` within `[min, max]`.
///
/// In centered mode the first tick is moved one interval below the minimum so
/// that a centered label straddles it. Returns `false` if `interval` cannot
/// produce ticks.
fn fill_stepped(
    min: f64,
    max: f64,
    interval: f64,
    center_labels: bool,
    plan: &mut TickPlan,
) -> bool {
    if !(interval > 0.0) || !interval.is_finite() {
        return false;
    }
    let mut first = libm::ceil(min / interval) * interval;
    if center_labels {
        first -= interval;
    }
    // A maximum that sits exactly on a multiple must survive the `<=` below.
    let last = (libm::floor(max / interval) * interval).next_up();

    let mut i = 0_u32;
    loop {
        let value = first + f64::from(i) * interval;
        if value > last {
            break;
        }
        push_ascending(plan, value);
        i += 1;
    }
    true
}

/// Pushes `value` unless rounding made it collide with the previous tick.
fn push_ascending(plan: &mut TickPlan, value: f64) {
    if plan.ticks.last().is_some_and(|&prev| value <= prev) {
        return;
    }
    plan.ticks.push(positive_zero(value));
}

fn positive_zero(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}
