// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carousel controller: the Idle/Animating navigation state machine.
//!
//! ## Overview
//!
//! [`Carousel`] owns exactly two pieces of state: the current slide index
//! and the animation lock. Navigation requests either commit a transition
//! (state changes, both render sinks are notified synchronously, the caller
//! is told to arm the unlock timer) or are dropped whole. There is no
//! queueing: a request arriving while the lock is held is rejected, not
//! deferred.
//!
//! ## Timing contract
//!
//! The controller schedules nothing itself. When a navigation call returns
//! [`NavOutcome::Moved`], the host arms a single one-shot timer for
//! [`CarouselConfig::transition_duration_ms`] and calls
//! [`Carousel::finish_transition`] when it fires. Because navigation is
//! impossible while the lock is held, at most one unlock is ever pending
//! and no cancellation path is needed.
//!
//! ## Invariants
//!
//! - `0 <= current_index < total_slides`, always. Index arithmetic wraps
//!   modulo `total_slides` and never panics.
//! - Render sinks are driven only by successful transitions (and by the
//!   explicit re-sync entry points used for resize and snap-back).

use crate::surface::{StatusSurface, TrackSurface};
use crate::types::{CarouselConfig, NavError, NavOutcome};

/// The carousel navigation state machine.
///
/// Generic over its two render sinks so it can be driven synthetically in
/// tests and wired to any host toolkit. See the crate docs for the
/// host-side timing contract.
pub struct Carousel<T: TrackSurface, S: StatusSurface> {
    config: CarouselConfig,
    current: usize,
    animating: bool,
    track: T,
    status: S,
}

impl<T: TrackSurface, S: StatusSurface> core::fmt::Debug for Carousel<T, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Carousel")
            .field("config", &self.config)
            .field("current", &self.current)
            .field("animating", &self.animating)
            .finish_non_exhaustive()
    }
}

impl<T: TrackSurface, S: StatusSurface> Carousel<T, S> {
    /// Create a controller at slide 0 with the lock released.
    ///
    /// Nothing is rendered yet; call [`Carousel::present`] once the host
    /// surfaces are ready.
    ///
    /// # Panics
    ///
    /// Panics if `config.total_slides` is zero.
    #[must_use]
    pub fn new(config: CarouselConfig, track: T, status: S) -> Self {
        assert!(
            config.total_slides > 0,
            "a carousel needs at least one slide"
        );
        Self {
            config,
            current: 0,
            animating: false,
            track,
            status,
        }
    }

    /// The configuration this controller was built with.
    #[must_use]
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Current slide index, in `[0, total_slides)`.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Number of slides in the rotation.
    #[must_use]
    pub fn total_slides(&self) -> usize {
        self.config.total_slides
    }

    /// True while a transition animation holds the lock.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// The resting track offset for the current index, in percent.
    #[must_use]
    pub fn resting_offset_percent(&self) -> f64 {
        self.current as f64 * -self.config.slide_step_percent()
    }

    /// Borrow the track sink.
    #[must_use]
    pub fn track(&self) -> &T {
        &self.track
    }

    /// Borrow the status sink.
    #[must_use]
    pub fn status(&self) -> &S {
        &self.status
    }

    /// Initial render sync: resting position, active indicator, counter.
    pub fn present(&mut self) {
        self.track.set_offset(self.resting_offset_percent(), true);
        self.status.set_active_indicator(self.current);
        self.status
            .set_counter(self.current + 1, self.config.total_slides);
    }

    /// Advance to the next slide, wrapping past the end.
    pub fn next(&mut self) -> NavOutcome {
        if self.animating {
            return NavOutcome::Blocked;
        }
        let from = self.current;
        self.current = (self.current + 1) % self.config.total_slides;
        self.commit_transition(from)
    }

    /// Step back to the previous slide, wrapping past the start.
    pub fn previous(&mut self) -> NavOutcome {
        if self.animating {
            return NavOutcome::Blocked;
        }
        let from = self.current;
        self.current = if self.current == 0 {
            self.config.total_slides - 1
        } else {
            self.current - 1
        };
        self.commit_transition(from)
    }

    /// Jump directly to `index`.
    ///
    /// An out-of-range index is a contract violation and returns
    /// [`NavError::IndexOutOfRange`] without touching state or renders. A
    /// same-index request or one arriving under the lock is an ordinary
    /// [`NavOutcome::Blocked`] no-op.
    pub fn go_to(&mut self, index: usize) -> Result<NavOutcome, NavError> {
        if index >= self.config.total_slides {
            return Err(NavError::IndexOutOfRange {
                index,
                total_slides: self.config.total_slides,
            });
        }
        if self.animating || index == self.current {
            return Ok(NavOutcome::Blocked);
        }
        let from = self.current;
        self.current = index;
        Ok(self.commit_transition(from))
    }

    /// Release the animation lock.
    ///
    /// Called by the host's one-shot timer `transition_duration_ms` after a
    /// `Moved` outcome. Idempotent; never issues renders.
    pub fn finish_transition(&mut self) {
        self.animating = false;
    }

    /// Re-render the eased resting position for the unchanged index.
    ///
    /// Used on viewport resize (the offset is a percentage of the live
    /// width) and for gesture snap-back, where the live preview has moved
    /// the track away from its resting position without a navigation.
    pub fn sync_position(&mut self) {
        self.track.set_offset(self.resting_offset_percent(), true);
    }

    /// Pin the track, un-eased, at the resting position for a drag start.
    ///
    /// Suppresses any in-progress easing so the live preview that follows
    /// tracks the pointer exactly.
    pub fn begin_drag(&mut self) {
        self.track.set_offset(self.resting_offset_percent(), false);
    }

    /// Render a live drag preview at `resting + offset_percent`, un-eased.
    pub fn preview_drag(&mut self, offset_percent: f64) {
        self.track
            .set_offset(self.resting_offset_percent() + offset_percent, false);
    }

    // Shared tail of every successful navigation: take the lock and drive
    // both sinks with the new index before returning to the caller.
    fn commit_transition(&mut self, from: usize) -> NavOutcome {
        self.animating = true;
        self.track.set_offset(self.resting_offset_percent(), true);
        self.status.set_active_indicator(self.current);
        self.status
            .set_counter(self.current + 1, self.config.total_slides);
        NavOutcome::Moved {
            from,
            to: self.current,
        }
    }
}
