//! Loading spinner overlay

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use log::debug;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use crate::config::{attributes, labels};

const TICK_STRINGS: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

#[derive(Default)]
struct OverlayState {
    bar: Option<ProgressBar>,
    visible: bool,
}

/// The single loading overlay of a page
///
/// The spinner is created on the first request to show it and reused from
/// then on; hiding clears it from the terminal but keeps it around.
pub struct SpinnerOverlay {
    quiet: bool,
    state: Mutex<OverlayState>,
    suspended: AtomicUsize,
}

impl SpinnerOverlay {
    /// Create an overlay; a quiet one keeps state but never draws
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            state: Mutex::new(OverlayState::default()),
            suspended: AtomicUsize::new(0),
        }
    }

    /// Show or hide the overlay
    pub fn show_spinner(&self, show: bool) {
        let mut state = self.lock();

        if state.bar.is_none() && show {
            debug!("Creating {} overlay", attributes::SPINNER_CLASS);
            state.bar = Some(self.create_bar());
        }

        let Some(bar) = state.bar.clone() else {
            return;
        };

        if show && !state.visible {
            bar.reset();
            bar.enable_steady_tick(Duration::from_millis(100));
        } else if !show && state.visible {
            bar.finish_and_clear();
        }
        state.visible = show;
    }

    /// Whether the overlay has been created
    pub fn is_created(&self) -> bool {
        self.lock().bar.is_some()
    }

    /// Whether the overlay is currently shown
    pub fn is_visible(&self) -> bool {
        self.lock().visible
    }

    /// Stable class name stylesheets may target
    pub fn class_name(&self) -> &'static str {
        attributes::SPINNER_CLASS
    }

    /// Label next to the spinner, once created
    pub fn label(&self) -> Option<String> {
        self.lock().bar.as_ref().map(|bar| bar.message())
    }

    /// Run `f` with the spinner temporarily cleared from the terminal
    pub fn suspend<F: FnOnce() -> R, R>(&self, f: F) -> R {
        let bar = self.lock().bar.clone();
        self.suspended.fetch_add(1, Ordering::SeqCst);
        let result = match bar {
            Some(bar) => bar.suspend(f),
            None => f(),
        };
        self.suspended.fetch_sub(1, Ordering::SeqCst);
        result
    }

    /// Whether a [`SpinnerOverlay::suspend`] call is in progress
    pub fn is_suspended(&self) -> bool {
        self.suspended.load(Ordering::SeqCst) > 0
    }

    #[cfg(test)]
    fn handle(&self) -> Option<ProgressBar> {
        self.lock().bar.clone()
    }

    fn create_bar(&self) -> ProgressBar {
        let bar = if self.quiet {
            ProgressBar::with_draw_target(None, ProgressDrawTarget::hidden())
        } else {
            ProgressBar::new_spinner()
        };
        let style = ProgressStyle::default_spinner()
            .tick_strings(TICK_STRINGS)
            .template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        bar.set_style(style);
        bar.set_message(labels::LOADING);
        bar
    }

    fn lock(&self) -> MutexGuard<'_, OverlayState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
