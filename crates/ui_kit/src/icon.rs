//! Semantic icon catalog rendered as inline SVG.
//!
//! Components reference icons by [`IconName`] so no primitive embeds raw SVG
//! markup. Directional chevrons share one path and differ by rotation.

use leptos::*;

const CHEVRON_DOWN_PATH: &str = r#"<path d="M4.22 8.47c.3-.3.77-.3 1.06 0L12 15.19l6.72-6.72a.75.75 0 1 1 1.06 1.06l-7.25 7.25c-.3.3-.77.3-1.06 0L4.22 9.53a.75.75 0 0 1 0-1.06Z"/>"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Semantic icon identifiers used by shared primitives and table actions.
pub enum IconName {
    /// Downward chevron (expand, descending).
    ChevronDown,
    /// Upward chevron (collapse, ascending).
    ChevronUp,
    /// Left chevron (previous page).
    ChevronLeft,
    /// Right chevron (next page, collapsed row).
    ChevronRight,
    /// Stacked chevrons for an unsorted sortable header.
    ChevronUpDown,
    /// Double left chevron (first page).
    ChevronDoubleLeft,
    /// Double right chevron (last page).
    ChevronDoubleRight,
    /// Checkmark.
    Checkmark,
    /// Dismiss/close.
    Dismiss,
    /// Edit/pencil.
    Edit,
    /// Delete/trash.
    Delete,
    /// View/eye.
    Eye,
    /// Alert/bell.
    Alert,
    /// Overflow (three dots).
    More,
}

impl IconName {
    /// Stable token used for CSS hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::ChevronDown => "chevron-down",
            Self::ChevronUp => "chevron-up",
            Self::ChevronLeft => "chevron-left",
            Self::ChevronRight => "chevron-right",
            Self::ChevronUpDown => "chevron-up-down",
            Self::ChevronDoubleLeft => "chevron-double-left",
            Self::ChevronDoubleRight => "chevron-double-right",
            Self::Checkmark => "checkmark",
            Self::Dismiss => "dismiss",
            Self::Edit => "edit",
            Self::Delete => "delete",
            Self::Eye => "eye",
            Self::Alert => "alert",
            Self::More => "more",
        }
    }

    fn svg_body(self) -> String {
        match self {
            Self::ChevronDown => CHEVRON_DOWN_PATH.to_string(),
            Self::ChevronUp => rotated(180),
            Self::ChevronLeft => rotated(90),
            Self::ChevronRight => rotated(-90),
            Self::ChevronUpDown => format!(
                r#"<g transform="translate(0 4) scale(1 .6)">{CHEVRON_DOWN_PATH}</g><g transform="translate(0 -4) rotate(180 12 12) translate(0 -8) scale(1 .6)">{CHEVRON_DOWN_PATH}</g>"#
            ),
            Self::ChevronDoubleLeft => format!(
                r#"<g transform="translate(-3 0) rotate(90 12 12)">{CHEVRON_DOWN_PATH}</g><g transform="translate(3 0) rotate(90 12 12)">{CHEVRON_DOWN_PATH}</g>"#
            ),
            Self::ChevronDoubleRight => format!(
                r#"<g transform="translate(-3 0) rotate(-90 12 12)">{CHEVRON_DOWN_PATH}</g><g transform="translate(3 0) rotate(-90 12 12)">{CHEVRON_DOWN_PATH}</g>"#
            ),
            Self::Checkmark => r#"<path d="M4.53 12.97a.75.75 0 0 0-1.06 1.06l4.5 4.5c.3.3.77.3 1.06 0l11-11a.75.75 0 0 0-1.06-1.06L8.5 16.94l-3.97-3.97Z"/>"#.to_string(),
            Self::Dismiss => r#"<path d="m4.4 4.55.07-.08a.75.75 0 0 1 .98-.07l.08.07L12 10.94l6.47-6.47a.75.75 0 1 1 1.06 1.06L13.06 12l6.47 6.47c.27.27.3.68.07.98l-.07.08a.75.75 0 0 1-.98.07l-.08-.07L12 13.06l-6.47 6.47a.75.75 0 0 1-1.06-1.06L10.94 12 4.47 5.53a.75.75 0 0 1-.07-.98l.07-.08-.07.08Z"/>"#.to_string(),
            Self::Edit => r#"<path d="M15.5 3.5 20.5 8.5 9 20H4v-5L15.5 3.5Zm0 2.12-10 10v2.88h2.88l10-10-2.88-2.88Z"/>"#.to_string(),
            Self::Delete => r#"<path d="M9 3h6l1 2h4v1.5H4V5h4l1-2ZM6 8h12l-1 12.5c-.05.85-.75 1.5-1.6 1.5H8.6c-.85 0-1.55-.65-1.6-1.5L6 8Zm1.6 1.5.9 11h7l.9-11H7.6Z"/>"#.to_string(),
            Self::Eye => r#"<path d="M12 5c5 0 9 4.5 10 7-1 2.5-5 7-10 7S3 14.5 2 12c1-2.5 5-7 10-7Zm0 1.5c-3.9 0-7.1 3.3-8.4 5.5 1.3 2.2 4.5 5.5 8.4 5.5s7.1-3.3 8.4-5.5C19.1 9.8 15.9 6.5 12 6.5ZM12 9a3 3 0 1 1 0 6 3 3 0 0 1 0-6Z"/>"#.to_string(),
            Self::Alert => r#"<path d="M12 2.5a6 6 0 0 1 6 6v4.2l1.8 3.3H4.2L6 12.7V8.5a6 6 0 0 1 6-6ZM12 4a4.5 4.5 0 0 0-4.5 4.5v4.6l-.8 1.4h10.6l-.8-1.4V8.5A4.5 4.5 0 0 0 12 4ZM9.5 18h5a2.5 2.5 0 0 1-5 0Z"/>"#.to_string(),
            Self::More => r#"<path d="M5 10.25a1.75 1.75 0 1 1 0 3.5 1.75 1.75 0 0 1 0-3.5Zm7 0a1.75 1.75 0 1 1 0 3.5 1.75 1.75 0 0 1 0-3.5Zm7 0a1.75 1.75 0 1 1 0 3.5 1.75 1.75 0 0 1 0-3.5Z"/>"#.to_string(),
        }
    }
}

fn rotated(degrees: i16) -> String {
    format!(r#"<g transform="rotate({degrees} 12 12)">{CHEVRON_DOWN_PATH}</g>"#)
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
/// Standardized icon sizes.
pub enum IconSize {
    /// 14px compact icon (dense controls, sort arrows).
    Xs,
    /// 16px standard icon (buttons).
    #[default]
    Sm,
    /// 20px medium icon (icon buttons).
    Md,
    /// 24px large icon.
    Lg,
}

impl IconSize {
    /// Pixel size for the icon.
    pub const fn px(self) -> u16 {
        match self {
            Self::Xs => 14,
            Self::Sm => 16,
            Self::Md => 20,
            Self::Lg => 24,
        }
    }

    /// Stable size token used for CSS hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[component]
/// Renders an icon from the catalog.
pub fn Icon(
    /// Semantic icon identifier.
    icon: IconName,
    /// Standardized icon size token.
    #[prop(default = IconSize::Sm)]
    size: IconSize,
) -> impl IntoView {
    let size_px = size.px().to_string();

    view! {
        <svg
            class="ui-icon"
            data-icon=icon.token()
            data-size=size.token()
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            width=size_px.clone()
            height=size_px
            fill="currentColor"
            focusable="false"
            aria-hidden="true"
            inner_html=icon.svg_body()
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directional_chevrons_reuse_the_down_path() {
        for icon in [
            IconName::ChevronUp,
            IconName::ChevronLeft,
            IconName::ChevronRight,
            IconName::ChevronDoubleLeft,
        ] {
            assert!(icon.svg_body().contains(CHEVRON_DOWN_PATH), "{}", icon.token());
        }
        assert!(IconName::ChevronUp.svg_body().contains("rotate(180 12 12)"));
    }
}
