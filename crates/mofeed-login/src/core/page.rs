//! Element set of the login page and its rendering of controller state.

use crate::core::ports::UiElement;
use crate::core::ui::PasswordVisibility;
use crate::i18n::Direction;

/// Element ids rendered by the login page template.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageIds {
    /// Outer form container carrying `dir`.
    pub wrapper: &'static str,
    /// The `<form>` element.
    pub form: &'static str,
    /// Language `<select>`.
    pub language: &'static str,
    /// Username input.
    pub username: &'static str,
    /// Password input.
    pub password: &'static str,
    /// Visibility toggle button.
    pub toggle: &'static str,
    /// Icon inside the toggle button.
    pub toggle_icon: &'static str,
    /// Submit button.
    pub submit: &'static str,
    /// Error container.
    pub error: &'static str,
}

impl Default for PageIds {
    fn default() -> Self {
        Self {
            wrapper: "mofeed-login-wrapper",
            form: "mofeed-login-form",
            language: "language_select",
            username: "login_email",
            password: "login_password",
            toggle: "toggle-password",
            toggle_icon: "toggle-password-icon",
            submit: "mofeed-login-btn",
            error: "login-error",
        }
    }
}

/// Output side of the login controller.
pub trait LoginView {
    /// Apply `dir` to the container and document root and `lang` to the root.
    fn apply_direction(&self, direction: Direction, language: &str);
    /// Render the password field and toggle icon for `visibility`.
    fn set_password_visibility(&self, visibility: PasswordVisibility);
    /// Disable the submit control and mark it busy, or restore it.
    fn set_loading(&self, loading: bool);
    /// Show `message` in the error container.
    fn show_error(&self, message: &str);
    /// Empty and hide the error container.
    fn clear_error(&self);
}

/// Bound elements of the login page.
#[derive(Clone, Debug)]
pub struct LoginPage<E> {
    /// Document root (`<html>`).
    pub root: E,
    /// Form container.
    pub wrapper: E,
    /// Form element.
    pub form: E,
    /// Language selector.
    pub language: E,
    /// Username input.
    pub username: E,
    /// Password input.
    pub password: E,
    /// Visibility toggle.
    pub toggle: E,
    /// Visibility toggle icon.
    pub toggle_icon: E,
    /// Submit control.
    pub submit: E,
    /// Error container.
    pub error: E,
}

impl<E: UiElement> LoginView for LoginPage<E> {
    fn apply_direction(&self, direction: Direction, language: &str) {
        self.wrapper.set_attribute("dir", direction.as_str());
        self.root.set_attribute("dir", direction.as_str());
        self.root.set_attribute("lang", language);
    }

    fn set_password_visibility(&self, visibility: PasswordVisibility) {
        self.password.set_attribute("type", visibility.input_type());
        let toggled = visibility.toggled();
        self.toggle_icon.set_class(toggled.icon_class(), false);
        self.toggle_icon.set_class(visibility.icon_class(), true);
    }

    fn set_loading(&self, loading: bool) {
        self.submit.set_disabled(loading);
        self.submit.set_class("loading", loading);
    }

    fn show_error(&self, message: &str) {
        self.error.set_text(message);
        self.error.set_visible(true);
        self.error.scroll_into_view();
    }

    fn clear_error(&self) {
        self.error.set_text("");
        self.error.set_visible(false);
    }
}
