// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=marquee_gestures --heading-base-level=0

//! Marquee Gestures: a `no_std` touch/drag interpreter for the carousel.
//!
//! ## Overview
//!
//! This crate turns a touch-based drag into one of three things: a live
//! visual preview of the pending transition, a committed navigation, or a
//! snap-back to the current slide. It holds only the transient gesture
//! sample — start point and last move point, as [`kurbo::Point`]s — and
//! performs no rendering and no navigation itself. The caller dispatches
//! the returned [`DragUpdate`](crate::swipe::DragUpdate) /
//! [`DragOutcome`](crate::swipe::DragOutcome) values against the
//! controller, keeping the interpreter testable with synthetic points.
//!
//! ## Rules
//!
//! - Dominance is strict: a move or release with `|dx| > |dy|` is
//!   horizontal; ties and zero-deltas are not, so a degenerate tap can
//!   never navigate.
//! - A horizontal move previews at `dx / viewport_width * slide_step`
//!   percent, to be rendered un-eased on top of the resting offset.
//! - A horizontal release with `|dx| >= min_swipe_distance` commits:
//!   rightward reveals the previous slide, leftward the next.
//! - Everything else snaps back — an explicit eased re-render of the
//!   resting position, since the preview may have moved the track.
//! - The sample resets on every release, whatever the outcome.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use marquee_core::types::Direction;
//! use marquee_gestures::swipe::{DragOutcome, SwipeConfig, SwipeTracker};
//!
//! let mut tracker = SwipeTracker::new(SwipeConfig::for_slide_count(11));
//! tracker.begin(Point::new(200.0, 100.0));
//! let _update = tracker.drag(Point::new(140.0, 105.0), 1000.0);
//! assert_eq!(tracker.finish(), DragOutcome::Commit(Direction::Forward));
//! ```
//!
//! This crate is `no_std` and allocation-free.

#![no_std]

pub mod swipe;

pub use swipe::{DragOutcome, DragUpdate, SwipeConfig, SwipeTracker};
