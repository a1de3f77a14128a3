// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Discrete-input adapters: keyboard, wheel, pointer controls, resize.
//!
//! Each adapter is a one-shot translation from a host event to controller
//! calls, returning [`InputResponse`] flags so the host knows whether to
//! suppress the platform default and whether state actually changed. None
//! of them hold state; the only gating beyond the controller's own lock is
//! the wheel adapter's explicit animation check.

use marquee_core::controller::Carousel;
use marquee_core::surface::{StatusSurface, TrackSurface};
use marquee_core::types::{NavError, NavOutcome};

bitflags::bitflags! {
    /// What the host must do after handing an event to an adapter.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct InputResponse: u8 {
        /// Suppress the platform's default action (page scroll, etc.).
        const CONSUMED  = 0b0000_0001;
        /// The carousel state changed and renders were issued.
        const NAVIGATED = 0b0000_0010;
    }
}

/// The keys the carousel reacts to.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Key {
    /// Step to the previous slide.
    ArrowLeft,
    /// Step to the next slide.
    ArrowRight,
    /// Also steps to the next slide.
    Space,
    /// Jump to the first slide.
    Home,
    /// Jump to the last slide.
    End,
}

impl Key {
    /// Map a DOM-style `KeyboardEvent.key` name onto a carousel key.
    ///
    /// Returns `None` for keys the carousel ignores; the host should let
    /// those proceed untouched.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ArrowLeft" => Some(Self::ArrowLeft),
            "ArrowRight" => Some(Self::ArrowRight),
            " " => Some(Self::Space),
            "Home" => Some(Self::Home),
            "End" => Some(Self::End),
            _ => None,
        }
    }
}

/// Handle a key press.
///
/// Mapped keys are always [`CONSUMED`](InputResponse::CONSUMED) — the
/// default action is suppressed whether or not the navigation call got past
/// the animation lock.
pub fn handle_key<T: TrackSurface, S: StatusSurface>(
    carousel: &mut Carousel<T, S>,
    key: Key,
) -> InputResponse {
    let outcome = match key {
        Key::ArrowLeft => carousel.previous(),
        Key::ArrowRight | Key::Space => carousel.next(),
        // Indexes derived from the slide count cannot be out of range.
        Key::Home => carousel.go_to(0).unwrap_or(NavOutcome::Blocked),
        Key::End => {
            let last = carousel.total_slides() - 1;
            carousel.go_to(last).unwrap_or(NavOutcome::Blocked)
        }
    };
    respond(InputResponse::CONSUMED, outcome)
}

/// Handle a vertical wheel tick.
///
/// Always consumed — the page must not scroll over the carousel — but no
/// navigation is even attempted while a transition is animating.
pub fn handle_wheel<T: TrackSurface, S: StatusSurface>(
    carousel: &mut Carousel<T, S>,
    delta_y: f64,
) -> InputResponse {
    if carousel.is_animating() {
        log::debug!("wheel tick dropped: transition in flight");
        return InputResponse::CONSUMED;
    }
    let outcome = if delta_y > 0.0 {
        carousel.next()
    } else if delta_y < 0.0 {
        carousel.previous()
    } else {
        NavOutcome::Blocked
    };
    respond(InputResponse::CONSUMED, outcome)
}

/// A pointer event on one of the carousel's own controls.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ControlEvent {
    /// The previous-slide button.
    PrevButton,
    /// The next-slide button.
    NextButton,
    /// The indicator dot for the given slide index.
    Indicator(usize),
}

/// Handle a control click: a one-to-one mapping onto the state machine with
/// no extra gating.
///
/// Controls have no default action to suppress, so the response never
/// carries [`CONSUMED`](InputResponse::CONSUMED). An indicator wired to an
/// out-of-range index surfaces the contract violation to the caller.
pub fn handle_control<T: TrackSurface, S: StatusSurface>(
    carousel: &mut Carousel<T, S>,
    event: ControlEvent,
) -> Result<InputResponse, NavError> {
    let outcome = match event {
        ControlEvent::PrevButton => carousel.previous(),
        ControlEvent::NextButton => carousel.next(),
        ControlEvent::Indicator(index) => carousel.go_to(index)?,
    };
    Ok(respond(InputResponse::empty(), outcome))
}

/// Handle a viewport resize: re-apply the resting render for the current
/// index. No state changes; the offset is a percentage of the live width,
/// so the host re-renders to keep the slide aligned.
pub fn handle_resize<T: TrackSurface, S: StatusSurface>(carousel: &mut Carousel<T, S>) {
    carousel.sync_position();
}

fn respond(base: InputResponse, outcome: NavOutcome) -> InputResponse {
    if outcome.did_move() {
        base | InputResponse::NAVIGATED
    } else {
        base
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_core::surface::{NullStatus, NullTrack};
    use marquee_core::types::CarouselConfig;

    fn carousel() -> Carousel<NullTrack, NullStatus> {
        Carousel::new(CarouselConfig::new(11), NullTrack, NullStatus)
    }

    #[test]
    fn arrow_keys_step_and_consume() {
        let mut c = carousel();
        let r = handle_key(&mut c, Key::ArrowRight);
        assert_eq!(r, InputResponse::CONSUMED | InputResponse::NAVIGATED);
        assert_eq!(c.current_index(), 1);
        c.finish_transition();

        let r = handle_key(&mut c, Key::ArrowLeft);
        assert!(r.contains(InputResponse::NAVIGATED));
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn space_advances_like_arrow_right() {
        let mut c = carousel();
        assert!(handle_key(&mut c, Key::Space).contains(InputResponse::NAVIGATED));
        assert_eq!(c.current_index(), 1);
    }

    // Home and End jump to the rotation's endpoints from any state.
    #[test]
    fn home_and_end_jump_to_endpoints() {
        let mut c = carousel();
        assert!(handle_key(&mut c, Key::End).contains(InputResponse::NAVIGATED));
        assert_eq!(c.current_index(), 10);
        c.finish_transition();
        assert!(handle_key(&mut c, Key::Home).contains(InputResponse::NAVIGATED));
        assert_eq!(c.current_index(), 0);
    }

    // Default suppression does not depend on the navigation getting through.
    #[test]
    fn blocked_key_is_still_consumed() {
        let mut c = carousel();
        handle_key(&mut c, Key::ArrowRight);
        let r = handle_key(&mut c, Key::ArrowRight);
        assert_eq!(r, InputResponse::CONSUMED);
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn key_names_map_like_the_dom() {
        assert_eq!(Key::from_name("ArrowLeft"), Some(Key::ArrowLeft));
        assert_eq!(Key::from_name(" "), Some(Key::Space));
        assert_eq!(Key::from_name("End"), Some(Key::End));
        assert_eq!(Key::from_name("PageDown"), None);
        assert_eq!(Key::from_name("Space"), None, "DOM sends a literal space");
    }

    #[test]
    fn wheel_direction_maps_to_navigation() {
        let mut c = carousel();
        assert!(handle_wheel(&mut c, 3.0).contains(InputResponse::NAVIGATED));
        assert_eq!(c.current_index(), 1);
        c.finish_transition();
        assert!(handle_wheel(&mut c, -3.0).contains(InputResponse::NAVIGATED));
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn wheel_is_suppressed_entirely_while_animating() {
        let mut c = carousel();
        c.next();
        let r = handle_wheel(&mut c, 3.0);
        assert_eq!(r, InputResponse::CONSUMED);
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn zero_wheel_delta_consumes_without_navigating() {
        let mut c = carousel();
        assert_eq!(handle_wheel(&mut c, 0.0), InputResponse::CONSUMED);
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn buttons_and_indicators_map_one_to_one() {
        let mut c = carousel();
        let r = handle_control(&mut c, ControlEvent::NextButton).unwrap();
        assert_eq!(r, InputResponse::NAVIGATED);
        c.finish_transition();

        handle_control(&mut c, ControlEvent::Indicator(7)).unwrap();
        assert_eq!(c.current_index(), 7);
        c.finish_transition();

        handle_control(&mut c, ControlEvent::PrevButton).unwrap();
        assert_eq!(c.current_index(), 6);
    }

    #[test]
    fn out_of_range_indicator_surfaces_the_error() {
        let mut c = carousel();
        let err = handle_control(&mut c, ControlEvent::Indicator(11)).unwrap_err();
        assert_eq!(
            err,
            NavError::IndexOutOfRange {
                index: 11,
                total_slides: 11
            }
        );
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn blocked_button_reports_nothing() {
        let mut c = carousel();
        c.next();
        let r = handle_control(&mut c, ControlEvent::NextButton).unwrap();
        assert_eq!(r, InputResponse::empty());
    }
}
