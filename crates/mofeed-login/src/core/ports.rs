//! Seams between the DOM-free controller and the browser.
//!
//! # Design
//! - Host globals (meta tags, the framework runtime object, cookies, location) are read
//!   through [`HostContext`] instead of ambient lookups, so tests inject fakes.
//! - Elements expose a small capability set; handler registration is explicit.
//! - Detached work goes through [`TaskSpawner`] so the fire-and-forget contract is visible.

use crate::error::{PreferenceError, TransportError};
use async_trait::async_trait;
use futures_util::future::LocalBoxFuture;
use serde::Serialize;

/// Read-mostly view of the host page and framework runtime.
pub trait HostContext {
    /// CSRF token rendered into the page head, if any.
    fn meta_csrf_token(&self) -> Option<String>;
    /// CSRF token held by the host framework's client runtime, if any.
    fn runtime_csrf_token(&self) -> Option<String>;
    /// Raw `document.cookie` string.
    fn cookie_header(&self) -> String;
    /// User bound to the current session, if the runtime knows one.
    fn current_user(&self) -> Option<String>;
    /// Query string of the current URL, with or without the leading `?`.
    fn location_search(&self) -> String;
    /// Preferred browser language tag.
    fn browser_language(&self) -> Option<String> {
        None
    }
    /// Navigate the browser to `target`. Ends the page lifecycle.
    fn navigate(&self, target: &str);
}

/// Authentication request for the host login endpoint.
#[derive(Clone, PartialEq, Eq)]
pub struct LoginRequest {
    /// Endpoint URL.
    pub url: String,
    /// Form-encoded `usr`/`pwd` body.
    pub body: String,
    /// CSRF header name.
    pub csrf_header: String,
    /// CSRF token value, possibly empty.
    pub csrf_token: String,
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("url", &self.url)
            .field("body", &"<redacted>")
            .field("csrf_header", &self.csrf_header)
            .finish_non_exhaustive()
    }
}

/// JSON payload of the host "set value" call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SetValuePayload {
    /// Record type.
    pub doctype: String,
    /// Record name (the session user).
    pub name: String,
    /// Field to update.
    pub fieldname: String,
    /// New value.
    pub value: String,
}

/// Request persisting a single field on a host record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SetValueRequest {
    /// Endpoint URL.
    pub url: String,
    /// CSRF header name.
    pub csrf_header: String,
    /// CSRF token value, possibly empty.
    pub csrf_token: String,
    /// JSON body.
    pub payload: SetValuePayload,
}

/// HTTP client for the host endpoints.
#[async_trait(?Send)]
pub trait AuthTransport {
    /// Submit credentials. `Ok` means a 2xx response.
    async fn login(&self, request: LoginRequest) -> Result<(), TransportError>;
    /// Persist a field on a host record.
    async fn set_value(&self, request: SetValueRequest) -> Result<(), TransportError>;
}

/// Runs futures that nobody awaits.
pub trait TaskSpawner {
    /// Start `task` on the local event loop and return immediately.
    fn spawn_detached(&self, task: LocalBoxFuture<'static, ()>);
}

/// Language preference kept for the browser session.
pub trait PreferenceStore {
    /// Previously stored language code.
    fn load_language(&self) -> Option<String>;
    /// Remember `code` for later visits in this session.
    ///
    /// # Errors
    /// Returns [`PreferenceError`] when storage is unavailable or full.
    fn store_language(&self, code: &str) -> Result<(), PreferenceError>;
}

/// Callback without arguments.
pub type Handler = Box<dyn Fn()>;
/// Callback receiving the element's current value.
pub type ValueHandler = Box<dyn Fn(String)>;

/// Capabilities the login page needs from a single element.
pub trait UiElement {
    /// Register a handler for value changes.
    fn on_change(&self, handler: ValueHandler);
    /// Register a click handler.
    fn on_click(&self, handler: Handler);
    /// Register a submit handler; the default browser submission is suppressed.
    fn on_submit(&self, handler: Handler);
    /// Current value of an input or select; empty for other elements.
    fn get_value(&self) -> String;
    /// Replace the value of an input or select.
    fn set_value(&self, value: &str);
    /// Replace the text content.
    fn set_text(&self, text: &str);
    /// Show or hide the element.
    fn set_visible(&self, visible: bool);
    /// Set an attribute.
    fn set_attribute(&self, name: &str, value: &str);
    /// Add or remove a CSS class.
    fn set_class(&self, class: &str, enabled: bool);
    /// Enable or disable the control.
    fn set_disabled(&self, disabled: bool);
    /// Move keyboard focus here.
    fn focus(&self);
    /// Scroll the element into view.
    fn scroll_into_view(&self);
}
