// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types: configuration, navigation outcomes, directions, and errors.

/// Immutable carousel configuration, fixed at construction.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CarouselConfig {
    /// Number of slides in the rotation. Must be at least 1.
    pub total_slides: usize,
    /// How long the transition animation holds the lock, in milliseconds.
    ///
    /// The host arms a one-shot timer for this duration after every
    /// successful navigation and then calls
    /// [`Carousel::finish_transition`](crate::controller::Carousel::finish_transition).
    pub transition_duration_ms: u32,
}

impl CarouselConfig {
    /// Default transition duration (milliseconds).
    pub const DEFAULT_TRANSITION_DURATION_MS: u32 = 300;

    /// Configuration for `total_slides` slides with the default transition
    /// duration.
    #[must_use]
    pub const fn new(total_slides: usize) -> Self {
        Self {
            total_slides,
            transition_duration_ms: Self::DEFAULT_TRANSITION_DURATION_MS,
        }
    }

    /// Same configuration with a different transition duration.
    #[must_use]
    pub const fn with_transition_duration(mut self, ms: u32) -> Self {
        self.transition_duration_ms = ms;
        self
    }

    /// Percentage width of one slide within the track: `100 / total_slides`.
    ///
    /// The resting offset for slide `i` is `i * -slide_step_percent()`.
    #[must_use]
    pub fn slide_step_percent(&self) -> f64 {
        100.0 / self.total_slides as f64
    }
}

/// Direction of travel through the rotation.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Direction {
    /// Toward the next slide (index increases, wrapping to 0).
    Forward,
    /// Toward the previous slide (index decreases, wrapping to the last).
    Back,
}

/// Result of a navigation request.
///
/// `Moved` means state changed and the render sinks were notified; the host
/// must now arm the unlock timer for
/// [`CarouselConfig::transition_duration_ms`]. `Blocked` means the request
/// was dropped (animation lock held, or a same-index `go_to`) and nothing
/// was rendered.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum NavOutcome {
    /// The carousel moved from one slide to another.
    Moved {
        /// Index before the transition.
        from: usize,
        /// Index after the transition.
        to: usize,
    },
    /// The request was dropped; state and renders are untouched.
    Blocked,
}

impl NavOutcome {
    /// True when the request produced a transition.
    #[must_use]
    pub fn did_move(&self) -> bool {
        matches!(self, Self::Moved { .. })
    }
}

/// Navigation contract violations.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum NavError {
    /// `go_to` was called with an index outside `[0, total_slides)`.
    ///
    /// The index is neither wrapped nor clamped; the caller owns indicator
    /// handles and is expected to pass a valid one.
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The configured slide count.
        total_slides: usize,
    },
}

impl core::fmt::Display for NavError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::IndexOutOfRange {
                index,
                total_slides,
            } => write!(
                f,
                "slide index {index} out of range for {total_slides} slides"
            ),
        }
    }
}

impl core::error::Error for NavError {}
