//! Confirmation prompts for destructive actions

use log::debug;
use std::collections::BTreeMap;

use crate::config::attributes;
use crate::ui::Dialogs;

/// An interactive element that can trigger an action
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Control {
    id: String,
    attributes: BTreeMap<String, String>,
}

impl Control {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            attributes: BTreeMap::new(),
        }
    }

    /// Tag the control so clicks ask `message` first
    pub fn with_confirm(self, message: impl Into<String>) -> Self {
        self.with_attribute(attributes::CONFIRM, message)
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    pub fn remove_attribute(&mut self, name: &str) -> Option<String> {
        self.attributes.remove(name)
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Text of the confirmation prompt, if the control is tagged
    pub fn confirm_message(&self) -> Option<&str> {
        self.attribute(attributes::CONFIRM)
    }
}

/// Result of clicking a control
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome<R> {
    /// The default action ran and produced this value
    Proceeded(R),
    /// The user declined; the default action did not run
    Cancelled,
}

impl<R> ClickOutcome<R> {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, ClickOutcome::Cancelled)
    }

    pub fn proceeded(self) -> Option<R> {
        match self {
            ClickOutcome::Proceeded(value) => Some(value),
            ClickOutcome::Cancelled => None,
        }
    }
}

/// Decide whether a click on `control` may proceed
///
/// Untagged controls always proceed. Tagged controls block on the dialog
/// service until the user answers.
pub fn confirm_click(dialogs: &dyn Dialogs, control: &Control) -> bool {
    let Some(message) = control.confirm_message() else {
        return true;
    };

    let accepted = dialogs.confirm(message);
    if !accepted {
        debug!("Click on '{}' cancelled by user", control.id());
    }
    accepted
}
