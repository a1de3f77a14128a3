// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carousel basics.
//!
//! This minimal example drives the navigation state machine with buttons
//! and keys, printing every render-sink call so the synchronous
//! notification order is visible.
//!
//! Run:
//! - `cargo run -p marquee_demos --example carousel_basics`

use marquee_adapters::input::{self, ControlEvent, Key};
use marquee_core::controller::Carousel;
use marquee_core::surface::{StatusSurface, TrackSurface};
use marquee_core::types::CarouselConfig;

struct PrintTrack;

impl TrackSurface for PrintTrack {
    fn set_offset(&mut self, percent: f64, eased: bool) {
        println!("  track  → translateX({percent:.2}%)  eased={eased}");
    }
}

struct PrintStatus;

impl StatusSurface for PrintStatus {
    fn set_active_indicator(&mut self, index: usize) {
        println!("  status → indicator {index} active");
    }

    fn set_counter(&mut self, current: usize, total: usize) {
        println!("  status → counter {current} / {total}");
    }
}

fn main() {
    let mut carousel = Carousel::new(CarouselConfig::new(11), PrintTrack, PrintStatus);

    println!("== present ==");
    carousel.present();

    println!("== next button ==");
    let _ = input::handle_control(&mut carousel, ControlEvent::NextButton);
    carousel.finish_transition();

    println!("== End key (jump to last slide) ==");
    let response = input::handle_key(&mut carousel, Key::End);
    println!("  response: {response:?}");
    carousel.finish_transition();

    println!("== previous wraps past the start ==");
    let _ = input::handle_control(&mut carousel, ControlEvent::PrevButton);
    carousel.finish_transition();
    let _ = input::handle_control(&mut carousel, ControlEvent::PrevButton);

    println!("== a second click inside the lock window is dropped ==");
    let response = input::handle_control(&mut carousel, ControlEvent::NextButton).unwrap();
    println!("  response: {response:?}  index={}", carousel.current_index());
}
