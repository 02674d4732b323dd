//! Credential submission and authentication outcomes.
//!
//! # Design
//! - Submissions are plain data built from form values and dropped after the request.
//! - Emptiness is checked on raw values; whitespace-only fields count as filled,
//!   leaving their rejection to the server.
//! - Outcomes carry only what the controller needs to drive the next UI transition.

use crate::i18n::Language;

/// Credentials and language captured from the login form on submit.
#[derive(Clone, PartialEq, Eq)]
pub struct CredentialSubmission {
    /// Username or email.
    pub username: String,
    /// Password.
    pub password: String,
    /// Language selected when the form was submitted.
    pub language: Language,
}

impl std::fmt::Debug for CredentialSubmission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialSubmission")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("language", &self.language)
            .finish()
    }
}

impl CredentialSubmission {
    /// Build a submission from raw form values.
    #[must_use]
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        language: Language,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            language,
        }
    }

    /// Whether both username and password were provided.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }

    /// Form-encoded `usr`/`pwd` body for the authentication endpoint.
    #[must_use]
    pub fn form_body(&self) -> String {
        format!(
            "usr={}&pwd={}",
            urlencoding::encode(&self.username),
            urlencoding::encode(&self.password)
        )
    }
}

/// Interpreted result of the authentication round trip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthOutcome {
    /// Server accepted the credentials.
    Success {
        /// Path the browser navigates to next.
        redirect_target: String,
    },
    /// Server or transport rejected the attempt.
    Failure {
        /// Unlocalized error text as received.
        raw_message: String,
    },
}
