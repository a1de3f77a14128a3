// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Optional auto-advance driver, disabled by default.
//!
//! [`AutoAdvance`] owns no timer. It tracks whether periodic advancing is
//! wanted and answers every lifecycle call with a [`TimerCommand`] the host
//! executes against its own repeating timer. Each timer firing goes through
//! [`AutoAdvance::tick`], which funnels into the controller's ordinary
//! [`next`](crate::controller::Carousel::next) entry point and is therefore
//! subject to the identical animation-lock gating as user input.
//!
//! Hiding the page pauses the driver. Whether it resumes when the page
//! becomes visible again is a caller decision via [`ResumePolicy`]; the
//! default is [`ResumePolicy::Manual`], which never re-arms on its own.

use crate::controller::Carousel;
use crate::surface::{StatusSurface, TrackSurface};
use crate::types::NavOutcome;

/// Default auto-advance interval (milliseconds).
pub const DEFAULT_AUTO_ADVANCE_INTERVAL_MS: u32 = 3_000;

/// What the host should do with its repeating timer.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TimerCommand {
    /// Replace any existing repeating timer with one at this interval.
    Arm {
        /// Interval between `tick` calls, in milliseconds.
        interval_ms: u32,
    },
    /// Clear the repeating timer if one exists.
    Cancel,
    /// Leave the timer as it is.
    Keep,
}

/// Policy for [`AutoAdvance::page_visible`].
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum ResumePolicy {
    /// Stay paused until the caller explicitly starts again.
    #[default]
    Manual,
    /// Re-arm with the last interval when the page becomes visible.
    Automatic,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum AutoState {
    Stopped,
    Running,
    /// Paused by a page-hide; remembers that the caller wanted advancing.
    Paused,
}

/// Periodic auto-advance state, driven entirely by host callbacks.
#[derive(Copy, Clone, Debug)]
pub struct AutoAdvance {
    state: AutoState,
    interval_ms: u32,
    resume: ResumePolicy,
}

impl Default for AutoAdvance {
    fn default() -> Self {
        Self::new(ResumePolicy::Manual)
    }
}

impl AutoAdvance {
    /// A stopped driver with the given visibility-resume policy.
    #[must_use]
    pub const fn new(resume: ResumePolicy) -> Self {
        Self {
            state: AutoState::Stopped,
            interval_ms: DEFAULT_AUTO_ADVANCE_INTERVAL_MS,
            resume,
        }
    }

    /// True while ticks are expected.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == AutoState::Running
    }

    /// The interval the timer is (or would be) armed with.
    #[must_use]
    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Start advancing every `interval_ms`. Starting while already running
    /// re-arms with the new interval.
    pub fn start(&mut self, interval_ms: u32) -> TimerCommand {
        self.interval_ms = interval_ms;
        self.state = AutoState::Running;
        TimerCommand::Arm { interval_ms }
    }

    /// Stop advancing. Idempotent; stopping a stopped driver keeps the
    /// (nonexistent) timer untouched.
    pub fn stop(&mut self) -> TimerCommand {
        match self.state {
            AutoState::Stopped => TimerCommand::Keep,
            AutoState::Running | AutoState::Paused => {
                self.state = AutoState::Stopped;
                TimerCommand::Cancel
            }
        }
    }

    /// The hosting page became hidden: pause a running driver.
    pub fn page_hidden(&mut self) -> TimerCommand {
        match self.state {
            AutoState::Running => {
                self.state = AutoState::Paused;
                TimerCommand::Cancel
            }
            AutoState::Stopped | AutoState::Paused => TimerCommand::Keep,
        }
    }

    /// The hosting page became visible again. Only resumes a paused driver,
    /// and only under [`ResumePolicy::Automatic`].
    pub fn page_visible(&mut self) -> TimerCommand {
        match (self.state, self.resume) {
            (AutoState::Paused, ResumePolicy::Automatic) => {
                self.state = AutoState::Running;
                TimerCommand::Arm {
                    interval_ms: self.interval_ms,
                }
            }
            _ => TimerCommand::Keep,
        }
    }

    /// One repeating-timer firing: advance the carousel.
    ///
    /// Competes for the same `next()` entry point as user input, so a tick
    /// landing inside an animation-lock window is dropped like any other
    /// request. Ticks arriving after a pause or stop (a host timer that
    /// outlived its `Cancel`) are ignored.
    pub fn tick<T: TrackSurface, S: StatusSurface>(
        &self,
        carousel: &mut Carousel<T, S>,
    ) -> NavOutcome {
        if self.state != AutoState::Running {
            return NavOutcome::Blocked;
        }
        carousel.next()
    }
}
