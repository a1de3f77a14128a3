// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Auto-advance lifecycle.
//!
//! Shows the timer-command protocol: the driver never owns a timer, it
//! answers `start`/`stop`/visibility calls with commands the host applies.
//! Ticks funnel into the same `next()` entry point as user input and are
//! dropped by the animation lock like any other request.
//!
//! Run:
//! - `cargo run -p marquee_demos --example carousel_autoplay`

use marquee_core::autoplay::{AutoAdvance, ResumePolicy};
use marquee_core::controller::Carousel;
use marquee_core::surface::{NullStatus, NullTrack};
use marquee_core::types::CarouselConfig;

fn main() {
    let mut carousel = Carousel::new(CarouselConfig::new(11), NullTrack, NullStatus);

    println!("== manual resume policy (the default) ==");
    let mut auto = AutoAdvance::default();
    println!("  start(3000)   → {:?}", auto.start(3_000));
    println!("  tick          → {:?}", auto.tick(&mut carousel));
    println!("  tick (locked) → {:?}", auto.tick(&mut carousel));
    carousel.finish_transition();
    println!("  page_hidden   → {:?}", auto.page_hidden());
    println!("  page_visible  → {:?} (stays paused)", auto.page_visible());
    println!("  stop          → {:?}", auto.stop());
    println!("  stop again    → {:?} (idempotent)", auto.stop());

    println!("== automatic resume policy ==");
    let mut auto = AutoAdvance::new(ResumePolicy::Automatic);
    println!("  start(2000)   → {:?}", auto.start(2_000));
    println!("  page_hidden   → {:?}", auto.page_hidden());
    println!("  page_visible  → {:?} (re-arms)", auto.page_visible());

    println!("  index after the demo: {}", carousel.current_index());
}
