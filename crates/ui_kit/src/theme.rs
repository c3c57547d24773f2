//! Explicit theme context threaded through rendering.
//!
//! The active theme is a reactive context value provided by [`ThemeScope`]
//! and read with [`use_theme`]; no component toggles ancestor classes or
//! reads ambient global state.

use leptos::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Colour scheme.
pub enum ThemeMode {
    /// Light scheme.
    #[default]
    Light,
    /// Dark scheme.
    Dark,
}

impl ThemeMode {
    /// Stable token used for `data-ui-theme`.
    pub fn token(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The opposite scheme.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Spacing density.
pub enum Density {
    /// Tight rows and controls.
    Compact,
    /// Default spacing.
    #[default]
    Comfortable,
}

impl Density {
    /// Stable token used for `data-ui-density`.
    pub fn token(self) -> &'static str {
        match self {
            Self::Compact => "compact",
            Self::Comfortable => "comfortable",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Theme value provided to every component below a [`ThemeScope`].
pub struct Theme {
    /// Colour scheme.
    pub mode: ThemeMode,
    /// Spacing density.
    pub density: Density,
}

#[derive(Clone, Copy)]
struct ThemeContext(Signal<Theme>);

/// Provides `theme` to descendants of the current reactive owner.
pub fn provide_theme(theme: Signal<Theme>) {
    provide_context(ThemeContext(theme));
}

/// Reads the nearest provided theme, falling back to [`Theme::default`].
pub fn use_theme() -> Signal<Theme> {
    use_context::<ThemeContext>()
        .map(|ThemeContext(theme)| theme)
        .unwrap_or_else(|| Signal::derive(Theme::default))
}

#[component]
/// Root element that provides a theme and exposes it as data attributes.
pub fn ThemeScope(
    #[prop(into)] theme: MaybeSignal<Theme>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let theme = Signal::derive(move || theme.get());
    provide_theme(theme);

    view! {
        <div
            class=crate::primitives::merge_layout_class("ui-theme-scope", layout_class)
            data-ui-primitive="true"
            data-ui-kind="theme-scope"
            data-ui-theme=move || theme.get().mode.token()
            data-ui-density=move || theme.get().density.token()
        >
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn mode_toggles_between_schemes() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled().token(), "light");
    }

    #[test]
    fn theme_round_trips_through_lowercase_tokens() {
        let theme = Theme {
            mode: ThemeMode::Dark,
            density: Density::Compact,
        };
        assert_eq!(
            serde_json::to_value(theme).unwrap(),
            json!({"mode": "dark", "density": "compact"})
        );
    }
}
