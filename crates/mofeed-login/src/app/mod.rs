//! Browser shell: binds the controller to the rendered login page.

use crate::config::{CONFIG_ELEMENT_ID, LoginConfig};
use crate::core::binding::mount;
use crate::core::controller::{Collaborators, LoginController};
use crate::core::page::PageIds;
use crate::core::ports::TaskSpawner;
use crate::services::api::HttpTransport;
use dom::{DomHost, find_page};
use futures_util::future::LocalBoxFuture;
use gloo::console;
use gloo::events::EventListener;
use gloo::utils::document;
use preferences::SessionPreferences;
use std::rc::Rc;

mod dom;
mod preferences;

/// Runs detached tasks on the browser microtask queue.
struct LocalSpawner;

impl TaskSpawner for LocalSpawner {
    fn spawn_detached(&self, task: LocalBoxFuture<'static, ()>) {
        wasm_bindgen_futures::spawn_local(task);
    }
}

/// Mount the login controller once the document has been parsed.
pub fn run_app() {
    console_error_panic_hook::set_once();
    let document = document();
    if document.ready_state() == "loading" {
        EventListener::once(&document, "DOMContentLoaded", |_| start()).forget();
    } else {
        start();
    }
}

fn start() {
    if let Err(err) = try_start() {
        console::error!("login page failed to initialize", err.to_string());
    }
}

fn try_start() -> anyhow::Result<()> {
    let config = load_config();
    let Some(page) = find_page(&PageIds::default())? else {
        return Ok(());
    };
    let collaborators = Collaborators {
        host: Rc::new(DomHost::new(&config)),
        transport: Rc::new(HttpTransport),
        spawner: Rc::new(LocalSpawner),
        preferences: Rc::new(SessionPreferences::new(&config.language_storage_key)),
    };
    let controller = Rc::new(LoginController::new(config, collaborators, page));
    mount(&controller);
    Ok(())
}

fn load_config() -> LoginConfig {
    let Some(raw) = document()
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content())
    else {
        return LoginConfig::default();
    };
    LoginConfig::from_json(&raw).unwrap_or_else(|err| {
        console::warn!("ignoring embedded login config", err.to_string());
        LoginConfig::default()
    })
}
