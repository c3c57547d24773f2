//! Open/closed and selection capabilities shared by interactive primitives.
//!
//! Each stateful primitive exposes its state through one of two traits so
//! components compose behavior instead of re-deriving it: [`Openable`] for
//! things with a trigger and content that shows or hides, [`Selectable`] for
//! things that pick among values.

use serde::{Deserialize, Serialize};

/// State with an open/closed flag driven by a trigger.
pub trait Openable {
    /// Whether the content is shown.
    fn is_open(&self) -> bool;

    /// Shows or hides the content.
    fn set_open(&mut self, open: bool);

    /// Flips the flag. Returns the new value.
    fn toggle(&mut self) -> bool {
        let next = !self.is_open();
        self.set_open(next);
        next
    }
}

/// State that selects among values.
pub trait Selectable {
    /// Selectable value type.
    type Value;

    /// Whether `value` is currently selected.
    fn is_selected(&self, value: &Self::Value) -> bool;

    /// Applies a user selection of `value`. Returns whether the state changed.
    fn select(&mut self, value: Self::Value) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Collapsible section state.
pub struct DisclosureState {
    /// Whether the body is shown.
    pub open: bool,
}

impl Openable for DisclosureState {
    fn is_open(&self) -> bool {
        self.open
    }

    fn set_open(&mut self, open: bool) {
        self.open = open;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Dialog state.
pub struct ModalState {
    /// Whether the dialog is shown.
    pub open: bool,
}

impl Openable for ModalState {
    fn is_open(&self) -> bool {
        self.open
    }

    fn set_open(&mut self, open: bool) {
        self.open = open;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Two-state switch.
pub struct SwitchState {
    /// Whether the switch is on.
    pub checked: bool,
}

impl Selectable for SwitchState {
    type Value = bool;

    fn is_selected(&self, value: &bool) -> bool {
        self.checked == *value
    }

    fn select(&mut self, value: bool) -> bool {
        let changed = self.checked != value;
        self.checked = value;
        changed
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Tab strip with one active tab.
pub struct TabsState {
    tabs: Vec<String>,
    active: Option<String>,
}

impl TabsState {
    /// Creates a strip with the first tab active.
    pub fn new(tabs: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let tabs: Vec<String> = tabs.into_iter().map(Into::into).collect();
        let active = tabs.first().cloned();
        Self { tabs, active }
    }

    /// Tab ids in order.
    pub fn tabs(&self) -> &[String] {
        &self.tabs
    }

    /// Active tab id.
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Activates the tab after the active one, wrapping around.
    pub fn select_next(&mut self) -> bool {
        self.step(1)
    }

    /// Activates the tab before the active one, wrapping around.
    pub fn select_previous(&mut self) -> bool {
        self.step(self.tabs.len().saturating_sub(1))
    }

    /// Applies a roving-focus key from the tab list. Returns whether the
    /// active tab changed.
    pub fn apply_key(&mut self, key: &str) -> bool {
        match key {
            "ArrowRight" | "ArrowDown" => self.select_next(),
            "ArrowLeft" | "ArrowUp" => self.select_previous(),
            "Home" => match self.tabs.first().cloned() {
                Some(first) => self.select(first),
                None => false,
            },
            "End" => match self.tabs.last().cloned() {
                Some(last) => self.select(last),
                None => false,
            },
            _ => false,
        }
    }

    fn step(&mut self, offset: usize) -> bool {
        if self.tabs.is_empty() {
            return false;
        }
        let current = self
            .active
            .as_ref()
            .and_then(|active| self.tabs.iter().position(|tab| tab == active))
            .unwrap_or(0);
        let next = self.tabs[(current + offset) % self.tabs.len()].clone();
        self.select(next)
    }
}

impl Selectable for TabsState {
    type Value = String;

    fn is_selected(&self, value: &String) -> bool {
        self.active.as_ref() == Some(value)
    }

    fn select(&mut self, value: String) -> bool {
        if !self.tabs.contains(&value) || self.is_selected(&value) {
            return false;
        }
        self.active = Some(value);
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// How many accordion items may be open at once.
pub enum AccordionMode {
    /// At most one item; opening one closes the others.
    #[default]
    Single,
    /// Any number of items.
    Multiple,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Accordion open-item set.
pub struct AccordionState {
    mode: AccordionMode,
    open: Vec<String>,
}

impl AccordionState {
    /// Creates a state with every item closed.
    pub fn new(mode: AccordionMode) -> Self {
        Self {
            mode,
            open: Vec::new(),
        }
    }

    /// Open item ids, in the order they were opened.
    pub fn open_items(&self) -> &[String] {
        &self.open
    }
}

impl Selectable for AccordionState {
    type Value = String;

    fn is_selected(&self, value: &String) -> bool {
        self.open.contains(value)
    }

    /// Selecting an open item closes it; selecting a closed one opens it.
    fn select(&mut self, value: String) -> bool {
        if let Some(position) = self.open.iter().position(|item| *item == value) {
            self.open.remove(position);
            return true;
        }
        if self.mode == AccordionMode::Single {
            self.open.clear();
        }
        self.open.push(value);
        true
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn openable_toggle_flips_state() {
        let mut disclosure = DisclosureState::default();
        assert!(disclosure.toggle());
        assert!(disclosure.is_open());
        assert!(!disclosure.toggle());

        let mut modal = ModalState { open: true };
        modal.set_open(false);
        assert!(!modal.is_open());
    }

    #[test]
    fn switch_reports_changes_only() {
        let mut switch = SwitchState::default();
        assert!(switch.select(true));
        assert!(!switch.select(true));
        assert!(switch.is_selected(&true));
    }

    #[test]
    fn tabs_select_known_ids_and_wrap() {
        let mut tabs = TabsState::new(["general", "billing", "audit"]);
        assert_eq!(tabs.active(), Some("general"));
        assert!(!tabs.select("missing".to_string()));
        assert!(tabs.select_previous());
        assert_eq!(tabs.active(), Some("audit"));
        assert!(tabs.select_next());
        assert_eq!(tabs.active(), Some("general"));
    }

    #[test]
    fn tab_keys_move_the_active_tab() {
        let mut tabs = TabsState::new(["general", "billing", "audit"]);
        assert!(tabs.apply_key("End"));
        assert_eq!(tabs.active(), Some("audit"));
        assert!(!tabs.apply_key("End"));
        assert!(tabs.apply_key("ArrowRight"));
        assert_eq!(tabs.active(), Some("general"));
        assert!(!tabs.apply_key("Enter"));
        assert!(!TabsState::default().apply_key("ArrowLeft"));
    }

    #[test]
    fn single_accordion_keeps_one_item_open() {
        let mut accordion = AccordionState::new(AccordionMode::Single);
        accordion.select("a".to_string());
        accordion.select("b".to_string());
        assert_eq!(accordion.open_items(), ["b".to_string()]);
        accordion.select("b".to_string());
        assert!(accordion.open_items().is_empty());
    }

    #[test]
    fn multiple_accordion_keeps_items_independent() {
        let mut accordion = AccordionState::new(AccordionMode::Multiple);
        accordion.select("a".to_string());
        accordion.select("b".to_string());
        accordion.select("a".to_string());
        assert_eq!(accordion.open_items(), ["b".to_string()]);
    }
}
