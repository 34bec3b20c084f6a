// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Relative slack when comparing a ladder step against the raw interval.
///
/// `range / count` often lands a few ulps above a ladder value (for example
/// `0.20000000000000004`), which must still round to that value.
const LADDER_TOLERANCE: f64 = 1e-9;

/// Rounds `raw` up to the nearest step of the form `{1, 2, 5, 10} * 10^k`.
///
/// Non-positive and non-finite inputs are returned unchanged.
#[must_use]
pub fn nice_interval(raw: f64) -> f64 {
    if !(raw > 0.0) || !raw.is_finite() {
        return raw;
    }
    let magnitude = libm::pow(10.0, libm::floor(libm::log10(raw)));
    let floor = raw * (1.0 - LADDER_TOLERANCE);
    for m in [1.0_f64, 2.0, 5.0] {
        let step = m * magnitude;
        if step >= floor {
            return step;
        }
    }
    10.0 * magnitude
}

/// Number of fractional digits needed to tell ticks `interval` apart.
///
/// `ceil(-log10(interval))` for intervals below one, zero otherwise.
#[must_use]
#[expect(
    clippy::cast_possible_truncation,
    reason = "a positive finite f64 below one has at most ~324 fractional digits"
)]
pub fn decimals_for_interval(interval: f64) -> usize {
    if !(interval > 0.0) || interval >= 1.0 || !interval.is_finite() {
        return 0;
    }
    libm::ceil(-libm::log10(interval) - LADDER_TOLERANCE).max(0.0) as usize
}

/// Bumps intervals whose leading digit exceeds five to the next power of ten.
///
/// Intervals like `0.7` or `90` read awkwardly; they become `1` and `100`. The
/// bump is skipped when it would truncate to zero.
///
/// The magnitude is taken from `floor(log10)`, not a truncation toward zero,
/// so sub-unit intervals are bumped too: `0.7` becomes `1` rather than
/// staying `0.7`.
pub(crate) fn normalize_magnitude(interval: f64) -> f64 {
    let magnitude = nice_interval(libm::pow(10.0, libm::floor(libm::log10(interval))));
    let leading = libm::trunc(interval / magnitude);
    if leading > 5.0 {
        let bumped = libm::floor(10.0 * magnitude);
        if bumped != 0.0 {
            return bumped;
        }
    }
    interval
}
