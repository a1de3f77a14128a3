// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=marquee_core --heading-base-level=0

//! Marquee Core: a deterministic, `no_std` carousel navigation core.
//!
//! ## Overview
//!
//! This crate is the decision-making part of a slide carousel: a two-state
//! navigation machine (`Idle` / `Animating`) over a fixed slide count, with
//! wraparound indexing and an animation lock that drops — never queues —
//! requests arriving mid-transition. It performs no rendering and owns no
//! timers. Outputs flow through two small sink traits
//! ([`TrackSurface`](crate::surface::TrackSurface),
//! [`StatusSurface`](crate::surface::StatusSurface)) and timing flows back
//! in through explicit host callbacks, so the whole machine can be driven
//! synthetically with plain method calls.
//!
//! ## State
//!
//! [`Carousel`](crate::controller::Carousel) owns `current_index` (always
//! in `[0, total_slides)`) and the animation-lock flag, nothing else. The
//! lock is a rate-limit on visual transitions, not a mutual-exclusion lock:
//! it exists to prevent overlapping animations on a single-threaded event
//! loop where handlers already run to completion.
//!
//! ## Workflow
//!
//! 1) Construct a [`Carousel`](crate::controller::Carousel) with a
//!    [`CarouselConfig`](crate::types::CarouselConfig) and the host's two
//!    render sinks, then call
//!    [`present`](crate::controller::Carousel::present) for the initial
//!    sync.
//! 2) Feed it navigation calls — from buttons, keys, wheel ticks, or the
//!    gesture interpreter. A [`NavOutcome::Moved`](crate::types::NavOutcome)
//!    return means the sinks were already notified and the host must arm a
//!    one-shot timer for
//!    [`transition_duration_ms`](crate::types::CarouselConfig::transition_duration_ms).
//! 3) When that timer fires, call
//!    [`finish_transition`](crate::controller::Carousel::finish_transition)
//!    to release the lock. At most one unlock is ever pending, so there is
//!    no cancellation path.
//!
//! ## Minimal example
//!
//! ```
//! use marquee_core::controller::Carousel;
//! use marquee_core::surface::{NullStatus, NullTrack};
//! use marquee_core::types::{CarouselConfig, NavOutcome};
//!
//! let mut carousel = Carousel::new(CarouselConfig::new(11), NullTrack, NullStatus);
//! carousel.present();
//!
//! // Backward wrap from slide 0.
//! assert_eq!(carousel.previous(), NavOutcome::Moved { from: 0, to: 10 });
//!
//! // The lock drops a second request until the host's timer releases it.
//! assert_eq!(carousel.next(), NavOutcome::Blocked);
//! carousel.finish_transition();
//! assert_eq!(carousel.next(), NavOutcome::Moved { from: 10, to: 0 });
//! ```
//!
//! ## Auto-advance
//!
//! [`AutoAdvance`](crate::autoplay::AutoAdvance) is an optional periodic
//! driver for the same `next()` entry point, answering lifecycle calls with
//! [`TimerCommand`](crate::autoplay::TimerCommand) effects the host applies
//! to its repeating timer. It is disabled by default and pauses on page
//! hide; resumption is governed by
//! [`ResumePolicy`](crate::autoplay::ResumePolicy).
//!
//! This crate is `no_std` and allocation-free.

#![no_std]

#[cfg(test)]
extern crate alloc;

pub mod autoplay;
pub mod controller;
pub mod surface;
pub mod types;

pub use autoplay::{AutoAdvance, ResumePolicy, TimerCommand};
pub use controller::Carousel;
pub use surface::{NullStatus, NullTrack, StatusSurface, TrackSurface};
pub use types::{CarouselConfig, Direction, NavError, NavOutcome};
