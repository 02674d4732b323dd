//! Login page configuration with host defaults.
//!
//! # Design
//! - Every field has a default matching the stock Frappe desk, so an empty document is valid.
//! - Pages may embed a partial JSON document to override paths and names.
//! - Validation is explicit; decoding alone never rejects odd-but-parseable values.

use crate::error::{ConfigError, ConfigResult};
use serde::Deserialize;

/// Element id of the embedded JSON configuration document.
pub const CONFIG_ELEMENT_ID: &str = "mofeed-login-config";

/// Endpoint paths and host names used by the login controller.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoginConfig {
    /// Origin prefix for API calls; empty means same-origin.
    pub base_url: String,
    /// Authentication endpoint.
    pub login_path: String,
    /// Host "set value" endpoint used to persist the language preference.
    pub set_value_path: String,
    /// Fallback redirect target after login.
    pub home_path: String,
    /// Query parameter carrying the post-login redirect target.
    pub redirect_param: String,
    /// Request header carrying the CSRF token.
    pub csrf_header: String,
    /// `name` of the meta tag holding the CSRF token.
    pub csrf_meta_name: String,
    /// Cookie holding the CSRF token.
    pub csrf_cookie: String,
    /// Session storage key for the selected language.
    pub language_storage_key: String,
    /// Doctype whose record stores the user language.
    pub user_doctype: String,
    /// Field on the user record holding the language.
    pub language_field: String,
}

impl Default for LoginConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            login_path: "/api/method/login".to_string(),
            set_value_path: "/api/method/frappe.client.set_value".to_string(),
            home_path: "/app".to_string(),
            redirect_param: "redirect-to".to_string(),
            csrf_header: "X-Frappe-CSRF-Token".to_string(),
            csrf_meta_name: "csrf_token".to_string(),
            csrf_cookie: "csrf_token".to_string(),
            language_storage_key: "mofeed_login_lang".to_string(),
            user_doctype: "User".to_string(),
            language_field: "language".to_string(),
        }
    }
}

impl LoginConfig {
    /// Decode and validate a JSON configuration document.
    ///
    /// # Errors
    /// Returns [`ConfigError::Decode`] for malformed JSON or unknown fields and
    /// [`ConfigError::InvalidField`] when validation fails.
    pub fn from_json(raw: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(raw).map_err(|err| ConfigError::Decode {
            detail: err.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check paths and names for values the controller cannot use.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidField`] naming the first offending field.
    pub fn validate(&self) -> ConfigResult<()> {
        for (field, value) in [
            ("login_path", &self.login_path),
            ("set_value_path", &self.set_value_path),
            ("home_path", &self.home_path),
        ] {
            if !value.starts_with('/') {
                return Err(ConfigError::InvalidField {
                    field,
                    reason: "must start with '/'",
                });
            }
        }
        for (field, value) in [
            ("redirect_param", &self.redirect_param),
            ("csrf_header", &self.csrf_header),
            ("csrf_cookie", &self.csrf_cookie),
            ("language_storage_key", &self.language_storage_key),
            ("user_doctype", &self.user_doctype),
            ("language_field", &self.language_field),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::InvalidField {
                    field,
                    reason: "must not be empty",
                });
            }
        }
        if self.csrf_header.contains(char::is_whitespace) {
            return Err(ConfigError::InvalidField {
                field: "csrf_header",
                reason: "must be a valid header name",
            });
        }
        Ok(())
    }

    /// Absolute or same-origin URL for `path`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}
