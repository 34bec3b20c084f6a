// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_axis --heading-base-level=0

//! Understory Axis: headless tick planning for numeric chart axes.
//!
//! Given a visible value range, [`TickPlanner`] chooses a small set of
//! human-friendly tick positions. It does not format labels or draw anything;
//! an axis renderer turns each entry of the resulting [`TickPlan`] into a
//! gridline and a label.
//!
//! Planning is driven by a [`TickPolicy`]:
//! - `label_count`: the approximate number of labels wanted.
//! - `granularity`: an optional lower bound on the interval, so that zooming
//!   in far does not produce labels that round to the same text.
//! - `force_label_count`: space exactly `label_count` ticks from min to max
//!   instead of picking a nice interval.
//! - `center_labels` / `center_mode`: additionally produce a sequence shifted
//!   between gridlines, for labels drawn between two lines.
//!
//! ## Example
//!
//! ```rust
//! use understory_axis::{TickPlanner, TickPolicy};
//!
//! let planner = TickPlanner::new(TickPolicy::default().with_label_count(5));
//! let plan = planner.plan(0.0, 100.0);
//!
//! assert_eq!(plan.ticks(), &[0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
//! assert_eq!(plan.interval(), 20.0);
//! assert_eq!(plan.decimals(), 0);
//! ```
//!
//! Degenerate ranges never fail; they produce an empty plan:
//!
//! ```rust
//! use understory_axis::{TickPlanner, TickPolicy};
//!
//! let planner = TickPlanner::new(TickPolicy::default().with_label_count(5));
//! assert!(planner.plan(5.0, 5.0).is_empty());
//! assert!(planner.plan(0.0, f64::INFINITY).is_empty());
//! ```
//!
//! For per-frame use, [`TickPlanner::plan_into`] reuses the storage of an
//! existing plan.
//!
//! This crate is `no_std` + `alloc`.

#![no_std]

extern crate alloc;

mod nice;
mod plan;
mod planner;
mod policy;

pub use nice::{decimals_for_interval, nice_interval};
pub use plan::TickPlan;
pub use planner::TickPlanner;
pub use policy::{CenterMode, TickPolicy};
