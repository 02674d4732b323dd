//! DOM-free login flow: state, classification and the controller.

pub mod auth;
pub mod binding;
pub mod controller;
pub mod csrf;
pub mod errors;
pub mod page;
pub mod ports;
pub mod redirect;
pub mod ui;

#[cfg(test)]
pub(crate) mod fakes;
