// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipe tracking: one transient gesture sample and the rules that turn it
//! into a preview, a commit, or a snap-back.

use kurbo::Point;
use marquee_core::types::Direction;

/// Thresholds and geometry for swipe interpretation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SwipeConfig {
    /// Minimum horizontal travel, in pixels, for a gesture to commit.
    pub min_swipe_distance: f64,
    /// Percentage width of one slide (`100 / total_slides`); scales the
    /// live-preview offset.
    pub slide_step_percent: f64,
}

impl SwipeConfig {
    /// Default commit threshold (pixels).
    pub const DEFAULT_MIN_SWIPE_DISTANCE: f64 = 50.0;

    /// Configuration for a carousel of `total_slides` slides with the
    /// default commit threshold.
    #[must_use]
    pub fn for_slide_count(total_slides: usize) -> Self {
        Self {
            min_swipe_distance: Self::DEFAULT_MIN_SWIPE_DISTANCE,
            slide_step_percent: 100.0 / total_slides as f64,
        }
    }

    /// Same configuration with a different commit threshold.
    #[must_use]
    pub const fn with_min_swipe_distance(mut self, px: f64) -> Self {
        self.min_swipe_distance = px;
        self
    }
}

/// Per-move interpretation of an active drag.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DragUpdate {
    /// Horizontally dominant: suppress the platform default and render the
    /// track at `resting + offset_percent`, un-eased.
    Preview {
        /// Signed offset in percent of the track width, proportional to the
        /// horizontal drag distance.
        offset_percent: f64,
    },
    /// Vertically dominant (or no gesture in progress): let the platform
    /// scroll natively and leave the preview untouched.
    PassThrough,
}

/// Final interpretation when a gesture ends.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DragOutcome {
    /// The swipe cleared the threshold: navigate. A rightward drag reveals
    /// the previous slide ([`Direction::Back`]), a leftward drag the next.
    Commit(Direction),
    /// Not a committed swipe: re-render the eased resting position for the
    /// unchanged index. This is an explicit re-sync, not a no-op — the live
    /// preview may have moved the track away from rest.
    SnapBack,
}

/// Tracks a single touch interaction from start to end.
///
/// Owns the transient gesture sample (start point plus the most recent move
/// point) and nothing else; the sample is cleared on every
/// [`finish`](SwipeTracker::finish) regardless of outcome. Ties and
/// zero-deltas never navigate: dominance is `|dx| > dy`, strictly.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SwipeTracker {
    config: SwipeConfig,
    start: Option<Point>,
    last: Option<Point>,
}

impl SwipeTracker {
    /// An idle tracker.
    #[must_use]
    pub const fn new(config: SwipeConfig) -> Self {
        Self {
            config,
            start: None,
            last: None,
        }
    }

    /// The configuration this tracker applies.
    #[must_use]
    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    /// True between [`begin`](SwipeTracker::begin) and
    /// [`finish`](SwipeTracker::finish).
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }

    /// A touch came down: record the start point.
    ///
    /// The caller should also pin the track un-eased at its resting
    /// position so the preview that follows does not lag the finger.
    pub fn begin(&mut self, point: Point) {
        self.start = Some(point);
        self.last = None;
    }

    /// A touch moved. `viewport_width` is the live width in pixels the
    /// horizontal travel is measured against.
    pub fn drag(&mut self, point: Point, viewport_width: f64) -> DragUpdate {
        let Some(start) = self.start else {
            // Stray move without a start; nothing to interpret.
            return DragUpdate::PassThrough;
        };
        self.last = Some(point);

        let dx = point.x - start.x;
        let dy = (point.y - start.y).abs();
        if dx.abs() > dy {
            DragUpdate::Preview {
                offset_percent: dx / viewport_width * self.config.slide_step_percent,
            }
        } else {
            DragUpdate::PassThrough
        }
    }

    /// The touch lifted: decide commit or snap-back and clear the sample.
    ///
    /// With no prior move sample (a degenerate tap) both deltas are zero,
    /// which fails the strict dominance test and snaps back.
    pub fn finish(&mut self) -> DragOutcome {
        let (dx, dy) = match (self.start, self.last) {
            (Some(start), Some(last)) => (last.x - start.x, (last.y - start.y).abs()),
            _ => (0.0, 0.0),
        };
        self.start = None;
        self.last = None;

        if dx.abs() > dy && dx.abs() >= self.config.min_swipe_distance {
            DragOutcome::Commit(if dx > 0.0 {
                Direction::Back
            } else {
                Direction::Forward
            })
        } else {
            DragOutcome::SnapBack
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: f64 = 1_000.0;

    fn tracker() -> SwipeTracker {
        SwipeTracker::new(SwipeConfig::for_slide_count(11))
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    // Leftward swipe past the threshold commits a forward navigation.
    #[test]
    fn leftward_swipe_commits_forward() {
        let mut t = tracker();
        t.begin(Point::new(200.0, 100.0));
        t.drag(Point::new(140.0, 105.0), VIEWPORT);
        assert_eq!(t.finish(), DragOutcome::Commit(Direction::Forward));
    }

    // Rightward swipe reveals the previous slide.
    #[test]
    fn rightward_swipe_commits_back() {
        let mut t = tracker();
        t.begin(Point::new(200.0, 100.0));
        t.drag(Point::new(260.0, 105.0), VIEWPORT);
        assert_eq!(t.finish(), DragOutcome::Commit(Direction::Back));
    }

    #[test]
    fn below_threshold_snaps_back() {
        let mut t = tracker();
        t.begin(Point::new(200.0, 100.0));
        let update = t.drag(Point::new(160.0, 105.0), VIEWPORT);
        assert!(matches!(update, DragUpdate::Preview { .. }));
        assert_eq!(t.finish(), DragOutcome::SnapBack);
    }

    #[test]
    fn threshold_is_inclusive() {
        let mut t = tracker();
        t.begin(Point::new(200.0, 100.0));
        t.drag(Point::new(150.0, 100.0), VIEWPORT);
        assert_eq!(t.finish(), DragOutcome::Commit(Direction::Forward));
    }

    // Vertically dominant travel never previews and never commits, even
    // when the horizontal distance alone would clear the threshold.
    #[test]
    fn vertical_dominance_is_ignored_entirely() {
        let mut t = tracker();
        t.begin(Point::new(200.0, 100.0));
        assert_eq!(
            t.drag(Point::new(140.0, 170.0), VIEWPORT),
            DragUpdate::PassThrough
        );
        assert_eq!(t.finish(), DragOutcome::SnapBack);
    }

    // Equal horizontal and vertical travel fails the strict dominance test.
    #[test]
    fn diagonal_tie_goes_to_pass_through() {
        let mut t = tracker();
        t.begin(Point::new(0.0, 0.0));
        assert_eq!(
            t.drag(Point::new(60.0, 60.0), VIEWPORT),
            DragUpdate::PassThrough
        );
        assert_eq!(t.finish(), DragOutcome::SnapBack);
    }

    #[test]
    fn preview_offset_is_proportional_to_drag() {
        let mut t = tracker();
        t.begin(Point::new(100.0, 100.0));
        let DragUpdate::Preview { offset_percent } = t.drag(Point::new(80.0, 105.0), VIEWPORT)
        else {
            panic!("horizontal drag must preview");
        };
        // -20 px over a 1000 px viewport, scaled by one 11th-slide step.
        assert!(approx(offset_percent, -20.0 / VIEWPORT * (100.0 / 11.0)));
    }

    // A tap with no move sample has zero deltas and must not navigate.
    #[test]
    fn degenerate_tap_snaps_back() {
        let mut t = tracker();
        t.begin(Point::new(300.0, 200.0));
        assert_eq!(t.finish(), DragOutcome::SnapBack);
    }

    #[test]
    fn finish_clears_the_sample_every_time() {
        let mut t = tracker();
        t.begin(Point::new(200.0, 100.0));
        t.drag(Point::new(100.0, 100.0), VIEWPORT);
        assert!(t.is_tracking());
        assert_eq!(t.finish(), DragOutcome::Commit(Direction::Forward));
        assert!(!t.is_tracking());

        // The stale sample is gone: an immediate second finish is a tap.
        assert_eq!(t.finish(), DragOutcome::SnapBack);
    }

    #[test]
    fn stray_move_without_begin_passes_through() {
        let mut t = tracker();
        assert_eq!(
            t.drag(Point::new(500.0, 0.0), VIEWPORT),
            DragUpdate::PassThrough
        );
        assert_eq!(t.finish(), DragOutcome::SnapBack);
    }

    #[test]
    fn custom_threshold_is_honored() {
        let config = SwipeConfig::for_slide_count(11).with_min_swipe_distance(80.0);
        let mut t = SwipeTracker::new(config);
        t.begin(Point::new(200.0, 100.0));
        t.drag(Point::new(130.0, 100.0), VIEWPORT);
        // 70 px is a swipe at the default threshold but not at 80 px.
        assert_eq!(t.finish(), DragOutcome::SnapBack);
    }
}
