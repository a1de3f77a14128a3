// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render-sink seams: the passive outputs the controller drives.
//!
//! Both sinks are pure side-effect consumers of `current_index`; they hold
//! no decision logic. A DOM host maps [`TrackSurface::set_offset`] onto a
//! `translateX` transform and [`StatusSurface`] onto indicator elements and
//! a text counter, but nothing here assumes a DOM.

/// The horizontally translated slide track.
pub trait TrackSurface {
    /// Apply a horizontal translation in percent of the track width.
    ///
    /// `eased` selects the transition style: `true` for the committed
    /// animated move, `false` for the un-eased live preview during a drag
    /// (an eased preview would visibly lag the pointer).
    fn set_offset(&mut self, percent: f64, eased: bool);
}

/// Position indicators and the "current / total" counter.
pub trait StatusSurface {
    /// Mark exactly the indicator at `index` active.
    fn set_active_indicator(&mut self, index: usize);

    /// Display a 1-based counter label, e.g. `3 / 11`.
    fn set_counter(&mut self, current: usize, total: usize);
}

/// A no-op track for hosts without a translatable surface (tests, probes).
#[derive(Copy, Clone, Debug, Default)]
pub struct NullTrack;

impl TrackSurface for NullTrack {
    #[inline]
    fn set_offset(&mut self, _percent: f64, _eased: bool) {}
}

/// A no-op status sink for hosts without indicators or a counter.
#[derive(Copy, Clone, Debug, Default)]
pub struct NullStatus;

impl StatusSurface for NullStatus {
    #[inline]
    fn set_active_indicator(&mut self, _index: usize) {}

    #[inline]
    fn set_counter(&mut self, _current: usize, _total: usize) {}
}
