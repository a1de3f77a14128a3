// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=marquee_adapters --heading-base-level=0

//! Marquee Adapters: host-facing glue for the carousel core.
//!
//! ## Overview
//!
//! The controller in [`marquee_core`] is deliberately ignorant of any event
//! dispatch mechanism. This crate supplies the thin translators a host
//! wires its events into:
//!
//! - [`input`]: keyboard, wheel, control buttons/indicators, and resize —
//!   each a stateless function returning
//!   [`InputResponse`](crate::input::InputResponse) flags that say whether
//!   to suppress the platform default and whether state changed.
//! - [`touch`]: [`TouchBinding`](crate::touch::TouchBinding), the stateful
//!   bridge from touch start/move/end callbacks through the
//!   [`marquee_gestures`] interpreter to controller calls.
//! - [`media`]: the image-fallback collaborator — probe outcomes in,
//!   original-or-placeholder sources out. Load failures stay local.
//! - [`diagnostics`]: the global error observer; logs and returns.
//!
//! Adapters log through the [`log`] facade; install whatever logger the
//! host prefers. The navigation core itself stays dependency-free.
//!
//! ## Wiring sketch
//!
//! ```no_run
//! use kurbo::Point;
//! use marquee_adapters::input::{self, Key};
//! use marquee_adapters::touch::TouchBinding;
//! use marquee_core::controller::Carousel;
//! use marquee_core::surface::{NullStatus, NullTrack};
//! use marquee_core::types::CarouselConfig;
//! use marquee_gestures::swipe::SwipeConfig;
//!
//! let mut carousel = Carousel::new(CarouselConfig::new(11), NullTrack, NullStatus);
//! let mut touch = TouchBinding::new(SwipeConfig::for_slide_count(11), 1024.0);
//! carousel.present();
//!
//! // Host keydown handler:
//! if let Some(key) = Key::from_name("ArrowRight") {
//!     let _response = input::handle_key(&mut carousel, key);
//!     // _response.contains(InputResponse::CONSUMED) → preventDefault()
//!     // _response.contains(InputResponse::NAVIGATED) → arm the unlock timer
//! }
//!
//! // Host touch handlers:
//! touch.on_touch_start(&mut carousel, Point::new(200.0, 100.0));
//! let _ = touch.on_touch_move(&mut carousel, Point::new(150.0, 102.0));
//! let _ = touch.on_touch_end(&mut carousel);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod diagnostics;
pub mod input;
pub mod media;
pub mod touch;

pub use input::{ControlEvent, InputResponse, Key};
pub use media::{ImageSource, LoadOutcome};
pub use touch::TouchBinding;
