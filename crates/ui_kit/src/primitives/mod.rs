//! Shared control, data-display, navigation, and overlay primitives.

use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::*;
use table_contract::{merge_classes, ActionTone};

use crate::{Icon, IconName, IconSize};

mod controls;
mod data_display;
mod navigation;
mod overlays;

pub use controls::{Button, IconButton, SelectField, SelectOption, Switch};
pub use data_display::{Badge, EmptyState, NotificationDot, Text};
pub use navigation::{Accordion, AccordionItem, DisclosurePanel, Tab, TabList};
pub use overlays::Modal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared button variants.
pub enum ButtonVariant {
    /// Standard action button.
    #[default]
    Standard,
    /// Primary emphasized action button.
    Primary,
    /// Quiet/toggle style button.
    Quiet,
    /// Accent/emphasized button.
    Accent,
    /// Danger/destructive button.
    Danger,
    /// Icon-only button.
    Icon,
}

impl ButtonVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Primary => "primary",
            Self::Quiet => "quiet",
            Self::Accent => "accent",
            Self::Danger => "danger",
            Self::Icon => "icon",
        }
    }
}

impl From<ActionTone> for ButtonVariant {
    fn from(tone: ActionTone) -> Self {
        match tone {
            ActionTone::Standard => Self::Icon,
            ActionTone::Primary => Self::Primary,
            ActionTone::Accent => Self::Accent,
            ActionTone::Danger => Self::Danger,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared button sizing tokens.
pub enum ButtonSize {
    /// Dense button.
    Sm,
    /// Default button.
    #[default]
    Md,
    /// Large button.
    Lg,
}

impl ButtonSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared button shape tokens.
pub enum ButtonShape {
    /// Rounded rectangle.
    #[default]
    Standard,
    /// Fully rounded pill.
    Pill,
    /// Circle (icon buttons).
    Circle,
}

impl ButtonShape {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Pill => "pill",
            Self::Circle => "circle",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared text roles.
pub enum TextRole {
    /// Body text.
    #[default]
    Body,
    /// Label text.
    Label,
    /// Caption text.
    Caption,
    /// Title text.
    Title,
}

impl TextRole {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Body => "body",
            Self::Label => "label",
            Self::Caption => "caption",
            Self::Title => "title",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared text tone.
pub enum TextTone {
    /// Primary text.
    #[default]
    Primary,
    /// Secondary text.
    Secondary,
    /// Accent text.
    Accent,
    /// Success/status tone.
    Success,
    /// Warning tone.
    Warning,
    /// Danger tone.
    Danger,
}

impl TextTone {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Accent => "accent",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&str>) -> String {
    merge_classes([Some(base), layout_class])
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn layout_class_appends_and_dedupes() {
        assert_eq!(merge_layout_class("ui-button", None), "ui-button");
        assert_eq!(merge_layout_class("ui-button", Some("")), "ui-button");
        assert_eq!(
            merge_layout_class("ui-button", Some("wide ui-button")),
            "ui-button wide"
        );
    }

    #[test]
    fn action_tones_map_onto_button_variants() {
        assert_eq!(ButtonVariant::from(ActionTone::Danger).token(), "danger");
        assert_eq!(ButtonVariant::from(ActionTone::Standard), ButtonVariant::Icon);
    }
}
