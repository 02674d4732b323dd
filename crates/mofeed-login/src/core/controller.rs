//! Login flow controller.
//!
//! # Design
//! - One submission at a time: `is_loading` gates `submit` until the round trip resolves.
//! - Every transport failure becomes a visible, localized message and re-enables the form.
//! - Language persistence after login is detached; its result is logged and dropped.
//! - State borrows never span an `.await`.

use crate::config::LoginConfig;
use crate::core::auth::{AuthOutcome, CredentialSubmission};
use crate::core::csrf::resolve_csrf_token;
use crate::core::errors::parse_error;
use crate::core::page::LoginView;
use crate::core::ports::{
    AuthTransport, HostContext, LoginRequest, PreferenceStore, SetValuePayload, SetValueRequest,
    TaskSpawner,
};
use crate::core::redirect::{query_param, resolve_redirect_target};
use crate::core::ui::UiState;
use crate::i18n::{Direction, InitialLanguageHints, Language, MessageKey, localize};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, warn};

/// Query parameter that preselects the page language.
pub const LANGUAGE_QUERY_PARAM: &str = "lang";

/// Collaborators injected into [`LoginController`].
#[derive(Clone)]
pub struct Collaborators {
    /// Host page and runtime access.
    pub host: Rc<dyn HostContext>,
    /// HTTP client for host endpoints.
    pub transport: Rc<dyn AuthTransport>,
    /// Runner for detached tasks.
    pub spawner: Rc<dyn TaskSpawner>,
    /// Session language preference storage.
    pub preferences: Rc<dyn PreferenceStore>,
}

/// Result of a single call to [`LoginController::submit`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Another submission was in flight; nothing happened.
    Ignored,
    /// Local validation failed before any request was made.
    Rejected(String),
    /// Login succeeded and the browser was sent to the target.
    Redirected(String),
    /// Login failed; the localized message is on screen.
    Failed(String),
}

/// Drives the login form from user intent to redirect or visible error.
pub struct LoginController<V> {
    config: LoginConfig,
    host: Rc<dyn HostContext>,
    transport: Rc<dyn AuthTransport>,
    spawner: Rc<dyn TaskSpawner>,
    preferences: Rc<dyn PreferenceStore>,
    view: V,
    state: RefCell<UiState>,
}

impl<V: LoginView> LoginController<V> {
    /// Build a controller over `view`.
    #[must_use]
    pub fn new(config: LoginConfig, collaborators: Collaborators, view: V) -> Self {
        Self {
            config,
            host: collaborators.host,
            transport: collaborators.transport,
            spawner: collaborators.spawner,
            preferences: collaborators.preferences,
            view,
            state: RefCell::new(UiState::default()),
        }
    }

    /// Snapshot of the current UI state.
    #[must_use]
    pub fn state(&self) -> UiState {
        self.state.borrow().clone()
    }

    /// View driven by this controller.
    #[must_use]
    pub const fn view(&self) -> &V {
        &self.view
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &LoginConfig {
        &self.config
    }

    /// Start a detached task on the page event loop.
    pub fn spawn(&self, task: impl Future<Output = ()> + 'static) {
        self.spawner.spawn_detached(Box::pin(task));
    }

    /// Pick the opening language from the URL, session, selector and browser, then apply it.
    #[must_use]
    pub fn initialize(&self, selector_value: Option<&str>) -> Language {
        let query = query_param(&self.host.location_search(), LANGUAGE_QUERY_PARAM);
        let stored = self.preferences.load_language();
        let browser = self.host.browser_language();
        let language = InitialLanguageHints {
            query: query.as_deref(),
            stored: stored.as_deref(),
            selector: selector_value,
            browser: browser.as_deref(),
        }
        .resolve();
        debug!(language = language.code(), "initial login language resolved");
        self.set_direction(language.code());
        language
    }

    /// Apply the text direction for `language` to the page.
    ///
    /// Arabic and Kurdish render right-to-left; everything else left-to-right.
    pub fn set_direction(&self, language: &str) {
        let direction = Direction::for_code(language);
        {
            let mut state = self.state.borrow_mut();
            state.direction = direction;
            if let Some(parsed) = Language::from_code(language) {
                state.language = parsed;
            }
        }
        self.view.apply_direction(direction, language);
    }

    /// Selector change: apply the direction and remember the choice for this session.
    pub fn change_language(&self, language: &str) {
        self.set_direction(language);
        if let Err(err) = self.preferences.store_language(language) {
            warn!(error = %err, "could not save login language preference");
        }
    }

    /// Flip the password field between masked and plain text.
    pub fn toggle_password_visibility(&self) {
        let visibility = {
            let mut state = self.state.borrow_mut();
            state.password_visibility = state.password_visibility.toggled();
            state.password_visibility
        };
        self.view.set_password_visibility(visibility);
    }

    /// Validate and submit credentials, then redirect or show a localized error.
    ///
    /// Calls made while a previous submission is in flight return
    /// [`SubmitOutcome::Ignored`] without touching the network.
    pub async fn submit(&self, submission: CredentialSubmission) -> SubmitOutcome {
        if self.state.borrow().is_loading {
            debug!("login submission ignored while another is in flight");
            return SubmitOutcome::Ignored;
        }
        self.clear_error();
        if !submission.is_complete() {
            let message = localize(MessageKey::PleaseFillFields, submission.language);
            self.show_error(&message);
            return SubmitOutcome::Rejected(message);
        }

        self.set_loading(true);
        match self.authenticate(&submission).await {
            AuthOutcome::Success { redirect_target } => {
                debug!(redirect = %redirect_target, "login succeeded");
                self.persist_language(submission.language);
                // Loading stays set: the page is unloading and must not accept another submit.
                self.host.navigate(&redirect_target);
                SubmitOutcome::Redirected(redirect_target)
            }
            AuthOutcome::Failure { raw_message } => {
                let message = parse_error(&raw_message, submission.language);
                self.set_loading(false);
                self.show_error(&message);
                SubmitOutcome::Failed(message)
            }
        }
    }

    /// Redirect target for the current URL.
    #[must_use]
    pub fn redirect_target(&self) -> String {
        resolve_redirect_target(
            &self.host.location_search(),
            &self.config.redirect_param,
            &self.config.home_path,
        )
    }

    async fn authenticate(&self, submission: &CredentialSubmission) -> AuthOutcome {
        let (csrf_token, source) = resolve_csrf_token(&*self.host, &self.config.csrf_cookie);
        debug!(?source, "csrf token resolved");
        let request = LoginRequest {
            url: self.config.endpoint(&self.config.login_path),
            body: submission.form_body(),
            csrf_header: self.config.csrf_header.clone(),
            csrf_token,
        };
        match self.transport.login(request).await {
            Ok(()) => AuthOutcome::Success {
                redirect_target: self.redirect_target(),
            },
            Err(err) => {
                debug!(error = %err, "login request failed");
                AuthOutcome::Failure {
                    raw_message: err.raw_message().to_string(),
                }
            }
        }
    }

    fn persist_language(&self, language: Language) {
        let (csrf_token, _) = resolve_csrf_token(&*self.host, &self.config.csrf_cookie);
        let request = SetValueRequest {
            url: self.config.endpoint(&self.config.set_value_path),
            csrf_header: self.config.csrf_header.clone(),
            csrf_token,
            payload: SetValuePayload {
                doctype: self.config.user_doctype.clone(),
                name: self.host.current_user().unwrap_or_default(),
                fieldname: self.config.language_field.clone(),
                value: language.code().to_string(),
            },
        };
        let transport = Rc::clone(&self.transport);
        self.spawn(async move {
            if let Err(err) = transport.set_value(request).await {
                warn!(error = %err, "user language preference not persisted");
            }
        });
    }

    fn set_loading(&self, loading: bool) {
        self.state.borrow_mut().is_loading = loading;
        self.view.set_loading(loading);
    }

    fn show_error(&self, message: &str) {
        self.state.borrow_mut().error_text = Some(message.to_string());
        self.view.show_error(message);
    }

    fn clear_error(&self) {
        self.state.borrow_mut().error_text = None;
        self.view.clear_error();
    }
}
