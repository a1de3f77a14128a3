// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipe interpretation.
//!
//! Feeds synthetic touch sequences through the touch binding: a committed
//! leftward swipe, a short drag that snaps back, and a vertical scroll that
//! passes through untouched.
//!
//! Run:
//! - `cargo run -p marquee_demos --example carousel_swipe`

use kurbo::Point;
use marquee_adapters::touch::TouchBinding;
use marquee_core::controller::Carousel;
use marquee_core::surface::{NullStatus, TrackSurface};
use marquee_core::types::CarouselConfig;
use marquee_gestures::swipe::SwipeConfig;

struct PrintTrack;

impl TrackSurface for PrintTrack {
    fn set_offset(&mut self, percent: f64, eased: bool) {
        let style = if eased { "eased" } else { "live" };
        println!("  track → translateX({percent:.3}%)  [{style}]");
    }
}

fn main() {
    let mut carousel = Carousel::new(CarouselConfig::new(11), PrintTrack, NullStatus);
    let mut touch = TouchBinding::new(SwipeConfig::for_slide_count(11), 1024.0);

    println!("== leftward swipe past the 50 px threshold commits ==");
    touch.on_touch_start(&mut carousel, Point::new(500.0, 300.0));
    touch.on_touch_move(&mut carousel, Point::new(460.0, 303.0));
    touch.on_touch_move(&mut carousel, Point::new(420.0, 305.0));
    let response = touch.on_touch_end(&mut carousel);
    println!("  response: {response:?}  index={}", carousel.current_index());
    carousel.finish_transition();

    println!("== 30 px drag is below the threshold: snap back ==");
    touch.on_touch_start(&mut carousel, Point::new(500.0, 300.0));
    touch.on_touch_move(&mut carousel, Point::new(470.0, 300.0));
    let response = touch.on_touch_end(&mut carousel);
    println!("  response: {response:?}  index={}", carousel.current_index());

    println!("== vertical scroll is not intercepted ==");
    touch.on_touch_start(&mut carousel, Point::new(500.0, 300.0));
    let response = touch.on_touch_move(&mut carousel, Point::new(505.0, 420.0));
    println!("  move response: {response:?} (native scrolling proceeds)");
    touch.on_touch_end(&mut carousel);
    println!("  index={}", carousel.current_index());
}
