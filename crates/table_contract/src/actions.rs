//! Per-row action descriptors and interaction routing.

use std::rc::Rc;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Colour token for an action button.
pub enum ActionTone {
    /// Neutral action.
    #[default]
    Standard,
    /// Primary emphasized action.
    Primary,
    /// Accent action.
    Accent,
    /// Destructive action.
    Danger,
}

impl ActionTone {
    /// Stable token for data attributes.
    pub fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Primary => "primary",
            Self::Accent => "accent",
            Self::Danger => "danger",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
/// Marker attached to a row action.
pub enum NotificationIndicator {
    /// Badge showing literal content, typically a count.
    Badge {
        /// Content rendered inside the badge.
        content: String,
    },
    /// Presence dot, optionally animated.
    Dot {
        /// Whether the dot pulses.
        ping: bool,
    },
}

impl NotificationIndicator {
    /// Badge with `content`.
    pub fn badge(content: impl ToString) -> Self {
        Self::Badge {
            content: content.to_string(),
        }
    }

    /// Static dot.
    pub fn dot() -> Self {
        Self::Dot { ping: false }
    }

    /// Pulsing dot.
    pub fn ping() -> Self {
        Self::Dot { ping: true }
    }
}

/// Click handler receiving the full row.
pub type RowHandler<T> = Rc<dyn Fn(&T)>;

/// Per-row notification predicate.
pub type NotificationPredicate<T> = Rc<dyn Fn(&T) -> Option<NotificationIndicator>>;

/// An interactive affordance repeated on every row.
///
/// `I` is the renderer's icon type.
pub struct RowAction<T, I> {
    /// Stable action id.
    pub id: String,
    /// Accessible label.
    pub label: String,
    /// Colour token.
    pub tone: ActionTone,
    /// Icon shown in the button.
    pub icon: I,
    /// Click handler.
    pub on_click: RowHandler<T>,
    /// Optional notification predicate, evaluated per row.
    pub has_notification: Option<NotificationPredicate<T>>,
}

impl<T, I: Clone> Clone for RowAction<T, I> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            label: self.label.clone(),
            tone: self.tone,
            icon: self.icon.clone(),
            on_click: Rc::clone(&self.on_click),
            has_notification: self.has_notification.clone(),
        }
    }
}

impl<T, I> RowAction<T, I> {
    /// Creates an action with a click handler.
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        icon: I,
        on_click: impl Fn(&T) + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            tone: ActionTone::Standard,
            icon,
            on_click: Rc::new(on_click),
            has_notification: None,
        }
    }

    /// Sets the colour token.
    pub fn tone(mut self, tone: ActionTone) -> Self {
        self.tone = tone;
        self
    }

    /// Sets the notification predicate.
    pub fn notification(
        mut self,
        predicate: impl Fn(&T) -> Option<NotificationIndicator> + 'static,
    ) -> Self {
        self.has_notification = Some(Rc::new(predicate));
        self
    }

    /// Evaluates the notification predicate for `row`.
    pub fn indicator_for(&self, row: &T) -> Option<NotificationIndicator> {
        self.has_notification
            .as_ref()
            .and_then(|predicate| predicate(row))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// What a single user interaction landed on.
pub enum InteractionTarget {
    /// The row body.
    Row,
    /// The action at this index in the action list.
    Action(usize),
}

/// Routes one interaction on a row to exactly one handler.
///
/// Action clicks never reach the row handler, so row-click and action-click
/// are mutually exclusive per interaction.
pub struct RowEventRouter<T, I> {
    on_row_click: Option<RowHandler<T>>,
    actions: Rc<Vec<RowAction<T, I>>>,
}

impl<T, I> Clone for RowEventRouter<T, I> {
    fn clone(&self) -> Self {
        Self {
            on_row_click: self.on_row_click.clone(),
            actions: Rc::clone(&self.actions),
        }
    }
}

impl<T, I> RowEventRouter<T, I> {
    /// Creates a router over the row handler and action list.
    pub fn new(on_row_click: Option<RowHandler<T>>, actions: Rc<Vec<RowAction<T, I>>>) -> Self {
        Self {
            on_row_click,
            actions,
        }
    }

    /// Actions in display order.
    pub fn actions(&self) -> &[RowAction<T, I>] {
        &self.actions
    }

    /// Whether rows are clickable.
    pub fn has_row_handler(&self) -> bool {
        self.on_row_click.is_some()
    }

    /// Dispatches the interaction. Returns whether a handler ran.
    pub fn dispatch(&self, row: &T, target: InteractionTarget) -> bool {
        match target {
            InteractionTarget::Row => match self.on_row_click.as_ref() {
                Some(handler) => {
                    handler(row);
                    true
                }
                None => false,
            },
            InteractionTarget::Action(index) => match self.actions.get(index) {
                Some(action) => {
                    (action.on_click)(row);
                    true
                }
                None => false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Ticket {
        id: u32,
        unread: u32,
    }

    fn recorder() -> Rc<RefCell<Vec<String>>> {
        Rc::new(RefCell::new(Vec::new()))
    }

    #[test]
    fn action_click_does_not_trigger_row_click() {
        let log = recorder();
        let row_log = Rc::clone(&log);
        let action_log = Rc::clone(&log);
        let router = RowEventRouter::new(
            Some(Rc::new(move |t: &Ticket| {
                row_log.borrow_mut().push(format!("row:{}", t.id))
            }) as RowHandler<Ticket>),
            Rc::new(vec![RowAction::new("edit", "Edit", "pencil", move |t: &Ticket| {
                action_log.borrow_mut().push(format!("edit:{}", t.id))
            })]),
        );
        let ticket = Ticket { id: 7, unread: 0 };

        assert!(router.dispatch(&ticket, InteractionTarget::Action(0)));
        assert_eq!(*log.borrow(), vec!["edit:7".to_string()]);

        assert!(router.dispatch(&ticket, InteractionTarget::Row));
        assert_eq!(*log.borrow(), vec!["edit:7".to_string(), "row:7".to_string()]);
    }

    #[test]
    fn missing_handlers_report_no_dispatch() {
        let router: RowEventRouter<Ticket, &str> = RowEventRouter::new(None, Rc::new(Vec::new()));
        let ticket = Ticket { id: 1, unread: 0 };
        assert!(!router.dispatch(&ticket, InteractionTarget::Row));
        assert!(!router.dispatch(&ticket, InteractionTarget::Action(3)));
    }

    #[test]
    fn notification_predicate_runs_per_row() {
        let action = RowAction::new("inbox", "Inbox", "bell", |_: &Ticket| {}).notification(
            |t: &Ticket| (t.unread > 0).then(|| NotificationIndicator::badge(t.unread)),
        );
        assert_eq!(action.indicator_for(&Ticket { id: 1, unread: 0 }), None);
        assert_eq!(
            action.indicator_for(&Ticket { id: 2, unread: 1 }),
            Some(NotificationIndicator::Badge {
                content: "1".to_string()
            })
        );
        let plain = RowAction::new("view", "View", "eye", |_: &Ticket| {});
        assert_eq!(plain.indicator_for(&Ticket { id: 2, unread: 1 }), None);
    }

    #[test]
    fn indicator_serializes_with_kind_tag() {
        assert_eq!(
            serde_json::to_value(NotificationIndicator::ping()).unwrap(),
            json!({"kind": "dot", "ping": true})
        );
    }
}
