#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Al-Mofeed HIS login page.
//!
//! The DOM-free controller (`core`), translations (`i18n`) and configuration build and
//! test natively; the browser shell that binds them to the rendered page is wasm-only.

pub mod config;
pub mod core;
pub mod error;
pub mod i18n;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod services;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;

pub use crate::config::LoginConfig;
pub use crate::core::auth::{AuthOutcome, CredentialSubmission};
pub use crate::core::controller::{Collaborators, LoginController, SubmitOutcome};
pub use crate::core::errors::parse_error;
pub use crate::i18n::{Direction, Language, MessageKey, localize};
