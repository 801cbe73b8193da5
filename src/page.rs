//! Page-lifetime composition root
//!
//! A [`Page`] owns the dialog service, the spinner overlay and the
//! registered controls. Build one at start-up, call [`Page::init`] once,
//! then hand out `&Page` to whatever needs the helpers.

use log::{debug, info};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::task::JoinHandle;

use crate::api::{self, ApiError};
use crate::ui::{confirm_click, ClickOutcome, Control, Dialogs, SpinnerOverlay};

/// Dialogs that clear the spinner line while they draw
///
/// Notifications can arrive from a spawned task long after the caller
/// returned, so the suspend has to happen here and not at the call site.
struct SuspendingDialogs {
    inner: Arc<dyn Dialogs>,
    overlay: Arc<SpinnerOverlay>,
}

impl Dialogs for SuspendingDialogs {
    fn confirm(&self, message: &str) -> bool {
        self.overlay.suspend(|| self.inner.confirm(message))
    }

    fn notify(&self, message: &str) {
        self.overlay.suspend(|| self.inner.notify(message));
    }
}

pub struct Page {
    dialogs: Arc<dyn Dialogs>,
    overlay: Arc<SpinnerOverlay>,
    controls: BTreeMap<String, Control>,
    confirm_installed: bool,
}

impl Page {
    /// Create a page; `quiet` keeps the spinner off the terminal
    pub fn new(dialogs: Arc<dyn Dialogs>, quiet: bool) -> Self {
        Self::with_overlay(dialogs, Arc::new(SpinnerOverlay::new(quiet)))
    }

    /// Create a page around an existing overlay
    pub fn with_overlay(dialogs: Arc<dyn Dialogs>, overlay: Arc<SpinnerOverlay>) -> Self {
        let dialogs: Arc<dyn Dialogs> = Arc::new(SuspendingDialogs {
            inner: dialogs,
            overlay: overlay.clone(),
        });
        Self {
            dialogs,
            overlay,
            controls: BTreeMap::new(),
            confirm_installed: false,
        }
    }

    /// Install confirmation interception and hide the spinner
    ///
    /// Interception is delegated: the confirmation attribute is read on
    /// every click, so controls registered later are covered as well.
    /// Repeated calls do not stack prompts.
    pub fn init(&mut self) {
        let tagged = self
            .controls
            .values()
            .filter(|c| c.confirm_message().is_some())
            .count();
        debug!("Page init: {} control(s) require confirmation", tagged);

        self.confirm_installed = true;
        self.show_spinner(false);
    }

    /// Add or replace a control
    pub fn register(&mut self, control: Control) {
        self.controls.insert(control.id().to_string(), control);
    }

    pub fn control(&self, id: &str) -> Option<&Control> {
        self.controls.get(id)
    }

    pub fn control_mut(&mut self, id: &str) -> Option<&mut Control> {
        self.controls.get_mut(id)
    }

    /// Click a control, running `default_action` unless the user declines
    ///
    /// Unknown ids and untagged controls run the action directly, as does
    /// everything before [`Page::init`].
    pub fn click<F, R>(&self, id: &str, default_action: F) -> ClickOutcome<R>
    where
        F: FnOnce() -> R,
    {
        if self.confirm_installed {
            if let Some(control) = self.controls.get(id) {
                if !confirm_click(self.dialogs.as_ref(), control) {
                    return ClickOutcome::Cancelled;
                }
            }
        }
        ClickOutcome::Proceeded(default_action())
    }

    /// Show (`true`) or hide (`false`) the loading overlay
    pub fn show_spinner(&self, show: bool) {
        self.overlay.show_spinner(show);
    }

    pub fn overlay(&self) -> &SpinnerOverlay {
        &self.overlay
    }

    /// Report an API error through this page's dialogs
    ///
    /// See [`api::handle_api_error`]; the returned handle is `Some` only when
    /// the response body is still being read.
    pub fn handle_api_error(
        &self,
        error: ApiError,
        default_message: Option<&str>,
    ) -> Option<JoinHandle<()>> {
        info!("Reporting API error to user");
        api::handle_api_error(self.dialogs.clone(), error, default_message)
    }
}
