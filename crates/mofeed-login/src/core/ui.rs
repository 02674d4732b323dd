//! Login form UI state.

use crate::i18n::{DEFAULT_LANGUAGE, Direction, Language};

/// Rendering mode of the password field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PasswordVisibility {
    /// Masked input (`type="password"`).
    #[default]
    Obscured,
    /// Plain text input (`type="text"`).
    Plain,
}

impl PasswordVisibility {
    /// The opposite mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Obscured => Self::Plain,
            Self::Plain => Self::Obscured,
        }
    }

    /// Input `type` attribute for this mode.
    #[must_use]
    pub const fn input_type(self) -> &'static str {
        match self {
            Self::Obscured => "password",
            Self::Plain => "text",
        }
    }

    /// Icon class shown on the toggle: the eye offers to reveal, the slashed eye to hide.
    #[must_use]
    pub const fn icon_class(self) -> &'static str {
        match self {
            Self::Obscured => "fa-eye",
            Self::Plain => "fa-eye-slash",
        }
    }
}

/// Mutable state owned by the login controller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiState {
    /// A submission is in flight; further submits are ignored.
    pub is_loading: bool,
    /// Message currently shown in the error container.
    pub error_text: Option<String>,
    /// Active layout direction.
    pub direction: Direction,
    /// Active language.
    pub language: Language,
    /// Password field rendering.
    pub password_visibility: PasswordVisibility,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            is_loading: false,
            error_text: None,
            direction: DEFAULT_LANGUAGE.direction(),
            language: DEFAULT_LANGUAGE,
            password_visibility: PasswordVisibility::Obscured,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visibility_toggle_round_trips() {
        let start = PasswordVisibility::default();
        assert_eq!(start.input_type(), "password");
        assert_eq!(start.icon_class(), "fa-eye");
        let flipped = start.toggled();
        assert_eq!(flipped.input_type(), "text");
        assert_eq!(flipped.icon_class(), "fa-eye-slash");
        assert_eq!(flipped.toggled(), start);
    }

    #[test]
    fn default_state_is_idle_english() {
        let state = UiState::default();
        assert!(!state.is_loading);
        assert!(state.error_text.is_none());
        assert_eq!(state.direction, Direction::Ltr);
        assert_eq!(state.language, Language::En);
    }
}
