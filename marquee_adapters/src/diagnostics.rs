// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Global error observer.
//!
//! Uncaught runtime errors anywhere in the widget are funneled here for
//! diagnostic logging only. Reporting never halts navigation: slides
//! unaffected by the error keep working, and the caller resumes normally
//! after the call returns.

/// Record a widget error against the `log` facade.
///
/// `context` names the subsystem or handler the error escaped from.
pub fn report_widget_error(context: &str, error: &dyn core::fmt::Display) {
    log::error!("carousel error in {context}: {error}");
}
