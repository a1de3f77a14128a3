// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touch binding: wires the swipe interpreter to the controller.
//!
//! [`TouchBinding`] owns the [`SwipeTracker`] and the live viewport width,
//! and translates the host's touch callbacks into controller calls: pin the
//! track un-eased on start, preview on horizontal moves, commit or snap
//! back on release. The host keeps the width current through
//! [`TouchBinding::set_viewport_width`] (typically from the same resize
//! handler that calls [`handle_resize`](crate::input::handle_resize)).

use kurbo::Point;
use marquee_core::controller::Carousel;
use marquee_core::surface::{StatusSurface, TrackSurface};
use marquee_core::types::Direction;
use marquee_gestures::swipe::{DragOutcome, DragUpdate, SwipeConfig, SwipeTracker};

use crate::input::InputResponse;

/// Glue between host touch events and the carousel.
#[derive(Copy, Clone, Debug)]
pub struct TouchBinding {
    tracker: SwipeTracker,
    viewport_width: f64,
}

impl TouchBinding {
    /// A binding for the given swipe rules and initial viewport width.
    #[must_use]
    pub const fn new(config: SwipeConfig, viewport_width: f64) -> Self {
        Self {
            tracker: SwipeTracker::new(config),
            viewport_width,
        }
    }

    /// Update the width horizontal travel is measured against.
    pub fn set_viewport_width(&mut self, width: f64) {
        self.viewport_width = width;
    }

    /// True while a touch interaction is in progress.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.tracker.is_tracking()
    }

    /// A touch came down: start the sample and pin the track un-eased so
    /// the live preview will not lag the finger.
    pub fn on_touch_start<T: TrackSurface, S: StatusSurface>(
        &mut self,
        carousel: &mut Carousel<T, S>,
        point: Point,
    ) {
        self.tracker.begin(point);
        carousel.begin_drag();
    }

    /// A touch moved. Horizontal moves preview and are consumed; vertical
    /// moves pass through so native scrolling proceeds.
    pub fn on_touch_move<T: TrackSurface, S: StatusSurface>(
        &mut self,
        carousel: &mut Carousel<T, S>,
        point: Point,
    ) -> InputResponse {
        match self.tracker.drag(point, self.viewport_width) {
            DragUpdate::Preview { offset_percent } => {
                carousel.preview_drag(offset_percent);
                InputResponse::CONSUMED
            }
            DragUpdate::PassThrough => InputResponse::empty(),
        }
    }

    /// The touch lifted: commit a cleared swipe, otherwise snap back.
    ///
    /// Either path re-renders eased, which also re-enables the transition
    /// style the drag start suppressed. A commit that the animation lock
    /// drops still snaps back, so the preview never dangles off-rest.
    pub fn on_touch_end<T: TrackSurface, S: StatusSurface>(
        &mut self,
        carousel: &mut Carousel<T, S>,
    ) -> InputResponse {
        match self.tracker.finish() {
            DragOutcome::Commit(direction) => {
                let outcome = match direction {
                    Direction::Forward => carousel.next(),
                    Direction::Back => carousel.previous(),
                };
                if outcome.did_move() {
                    InputResponse::NAVIGATED
                } else {
                    log::debug!("swipe commit dropped: transition in flight");
                    carousel.sync_position();
                    InputResponse::empty()
                }
            }
            DragOutcome::SnapBack => {
                carousel.sync_position();
                InputResponse::empty()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;
    use marquee_core::surface::NullStatus;
    use marquee_core::types::CarouselConfig;

    #[derive(Clone, Default)]
    struct RecTrack(Rc<RefCell<Vec<(f64, bool)>>>);

    impl TrackSurface for RecTrack {
        fn set_offset(&mut self, percent: f64, eased: bool) {
            self.0.borrow_mut().push((percent, eased));
        }
    }

    fn rig() -> (Carousel<RecTrack, NullStatus>, RecTrack, TouchBinding) {
        let track = RecTrack::default();
        let carousel = Carousel::new(CarouselConfig::new(11), track.clone(), NullStatus);
        let binding = TouchBinding::new(SwipeConfig::for_slide_count(11), 1_000.0);
        (carousel, track, binding)
    }

    #[test]
    fn swipe_left_commits_a_next_navigation() {
        let (mut c, _, mut b) = rig();
        b.on_touch_start(&mut c, Point::new(200.0, 100.0));
        b.on_touch_move(&mut c, Point::new(140.0, 105.0));
        let r = b.on_touch_end(&mut c);
        assert_eq!(r, InputResponse::NAVIGATED);
        assert_eq!(c.current_index(), 1);
        assert!(c.is_animating());
    }

    #[test]
    fn swipe_right_commits_a_previous_navigation() {
        let (mut c, _, mut b) = rig();
        b.on_touch_start(&mut c, Point::new(200.0, 100.0));
        b.on_touch_move(&mut c, Point::new(260.0, 105.0));
        b.on_touch_end(&mut c);
        assert_eq!(c.current_index(), 10, "rightward drag reveals previous");
    }

    // Start pins un-eased; horizontal moves preview un-eased and consume.
    #[test]
    fn drag_renders_an_uneased_preview() {
        let (mut c, track, mut b) = rig();
        b.on_touch_start(&mut c, Point::new(100.0, 100.0));
        let r = b.on_touch_move(&mut c, Point::new(80.0, 102.0));
        assert_eq!(r, InputResponse::CONSUMED);

        let offsets = track.0.borrow();
        assert_eq!(offsets.len(), 2);
        assert_eq!(offsets[0], (0.0, false), "start pins at rest, un-eased");
        assert!(!offsets[1].1, "preview must not be eased");
        assert!(offsets[1].0 < 0.0, "leftward drag previews negative");
    }

    #[test]
    fn vertical_move_passes_through_untouched() {
        let (mut c, track, mut b) = rig();
        b.on_touch_start(&mut c, Point::new(100.0, 100.0));
        let before = track.0.borrow().len();
        let r = b.on_touch_move(&mut c, Point::new(104.0, 180.0));
        assert_eq!(r, InputResponse::empty());
        assert_eq!(track.0.borrow().len(), before, "no preview on vertical");
    }

    // Below-threshold release re-renders the resting position, eased.
    #[test]
    fn short_drag_snaps_back() {
        let (mut c, track, mut b) = rig();
        b.on_touch_start(&mut c, Point::new(200.0, 100.0));
        b.on_touch_move(&mut c, Point::new(160.0, 105.0));
        let r = b.on_touch_end(&mut c);
        assert_eq!(r, InputResponse::empty());
        assert_eq!(c.current_index(), 0);

        let offsets = track.0.borrow();
        let last = offsets.last().unwrap();
        assert_eq!(*last, (0.0, true), "snap-back re-renders rest, eased");
    }

    #[test]
    fn tap_without_movement_snaps_back() {
        let (mut c, _, mut b) = rig();
        b.on_touch_start(&mut c, Point::new(300.0, 200.0));
        let r = b.on_touch_end(&mut c);
        assert_eq!(r, InputResponse::empty());
        assert_eq!(c.current_index(), 0);
        assert!(!b.is_tracking());
    }

    // A commit landing inside the lock window must not leave the track at
    // the preview offset.
    #[test]
    fn blocked_commit_still_snaps_back() {
        let (mut c, track, mut b) = rig();
        c.next(); // lock held
        b.on_touch_start(&mut c, Point::new(200.0, 100.0));
        b.on_touch_move(&mut c, Point::new(120.0, 100.0));
        let r = b.on_touch_end(&mut c);
        assert_eq!(r, InputResponse::empty());
        assert_eq!(c.current_index(), 1, "lock drops the commit");

        let offsets = track.0.borrow();
        let step = 100.0 / 11.0;
        let last = offsets.last().unwrap();
        assert!((last.0 + step).abs() < 1e-9 && last.1, "back at rest, eased");
    }

    #[test]
    fn viewport_width_scales_the_preview() {
        let (mut c, track, mut b) = rig();
        b.set_viewport_width(500.0);
        b.on_touch_start(&mut c, Point::new(100.0, 100.0));
        b.on_touch_move(&mut c, Point::new(50.0, 100.0));
        let offsets = track.0.borrow();
        let expected = -50.0 / 500.0 * (100.0 / 11.0);
        assert!((offsets[1].0 - expected).abs() < 1e-9);
    }
}
