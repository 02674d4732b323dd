//! HTTP client helpers for the host endpoints.

pub(crate) mod api;
