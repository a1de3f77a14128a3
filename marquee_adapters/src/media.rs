// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Image-fallback collaborator.
//!
//! Each slide image is eagerly probed by the host; the result lands here.
//! A failed load is recovered locally and silently: the image source is
//! replaced with a generated placeholder — fixed 400×300, dark background,
//! centered 1-based `이미지 N` label — emitted as an embeddable
//! `data:image/svg+xml;base64` payload. Nothing from this module ever
//! reaches the navigation core; failures are terminal-and-substituted, so
//! there is no retry policy. On success or fallback alike the host marks
//! the image "loaded" for styling.

use alloc::format;
use alloc::string::String;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

/// Placeholder width in pixels.
pub const PLACEHOLDER_WIDTH: u32 = 400;
/// Placeholder height in pixels.
pub const PLACEHOLDER_HEIGHT: u32 = 300;

const PLACEHOLDER_BACKGROUND: &str = "#2a2a2a";
const PLACEHOLDER_FOREGROUND: &str = "#ffffff";
const PLACEHOLDER_FONT_SIZE: u32 = 24;

/// What the host's eager probe observed for one slide image.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum LoadOutcome {
    /// The image decoded; keep its original source.
    Loaded,
    /// The load failed; substitute the generated placeholder.
    Failed,
}

/// The source the host should display for a probed slide image.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ImageSource {
    /// Keep the slide's original source untouched.
    Original,
    /// Replace the source with this embeddable data payload.
    Placeholder(String),
}

/// Resolve a probe result for the slide at `slide_index` (0-based).
///
/// Either way the image is considered loaded afterwards; a substitution is
/// logged for diagnostics but never propagated as an error.
#[must_use]
pub fn resolve_probe(slide_index: usize, outcome: LoadOutcome) -> ImageSource {
    match outcome {
        LoadOutcome::Loaded => ImageSource::Original,
        LoadOutcome::Failed => {
            log::debug!(
                "image for slide {} failed to load; substituting placeholder",
                slide_index + 1
            );
            ImageSource::Placeholder(placeholder_data_url(slide_index + 1))
        }
    }
}

/// Build the placeholder payload for `slide_number` (1-based): a 400×300
/// dark panel with a centered `이미지 N` label, as a base64 SVG data URL.
#[must_use]
pub fn placeholder_data_url(slide_number: usize) -> String {
    let w = PLACEHOLDER_WIDTH;
    let h = PLACEHOLDER_HEIGHT;
    let svg = format!(
        "<svg xmlns='http://www.w3.org/2000/svg' width='{w}' height='{h}' \
         viewBox='0 0 {w} {h}'>\
         <rect width='{w}' height='{h}' fill='{PLACEHOLDER_BACKGROUND}'/>\
         <text x='50%' y='50%' fill='{PLACEHOLDER_FOREGROUND}' \
         font-family='Arial' font-size='{PLACEHOLDER_FONT_SIZE}' \
         text-anchor='middle' dominant-baseline='middle'>\
         이미지 {slide_number}</text></svg>"
    );
    format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg))
}
