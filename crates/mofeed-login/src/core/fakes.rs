//! In-memory collaborators for controller and binding tests.

use crate::config::LoginConfig;
use crate::core::controller::{Collaborators, LoginController};
use crate::core::page::LoginPage;
use crate::core::ports::{
    AuthTransport, Handler, HostContext, LoginRequest, PreferenceStore, SetValueRequest,
    TaskSpawner, UiElement, ValueHandler,
};
use crate::error::{PreferenceError, TransportError};
use async_trait::async_trait;
use futures_util::future::LocalBoxFuture;
use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::rc::Rc;
use tokio::sync::oneshot;

#[derive(Default)]
pub(crate) struct FakeHost {
    pub(crate) meta_token: Option<String>,
    pub(crate) runtime_token: Option<String>,
    pub(crate) cookies: String,
    pub(crate) user: Option<String>,
    pub(crate) search: String,
    pub(crate) browser: Option<String>,
    pub(crate) navigated: RefCell<Vec<String>>,
}

impl FakeHost {
    pub(crate) fn navigations(&self) -> Vec<String> {
        self.navigated.borrow().clone()
    }
}

impl HostContext for FakeHost {
    fn meta_csrf_token(&self) -> Option<String> {
        self.meta_token.clone()
    }

    fn runtime_csrf_token(&self) -> Option<String> {
        self.runtime_token.clone()
    }

    fn cookie_header(&self) -> String {
        self.cookies.clone()
    }

    fn current_user(&self) -> Option<String> {
        self.user.clone()
    }

    fn location_search(&self) -> String {
        self.search.clone()
    }

    fn browser_language(&self) -> Option<String> {
        self.browser.clone()
    }

    fn navigate(&self, target: &str) {
        self.navigated.borrow_mut().push(target.to_string());
    }
}

#[derive(Default)]
pub(crate) struct FakeTransport {
    login_responses: RefCell<VecDeque<Result<(), TransportError>>>,
    set_value_error: RefCell<Option<TransportError>>,
    gate: RefCell<Option<oneshot::Receiver<()>>>,
    logins: RefCell<Vec<LoginRequest>>,
    set_values: RefCell<Vec<SetValueRequest>>,
}

impl FakeTransport {
    /// Queue a response for the next login; unqueued logins succeed.
    pub(crate) fn respond_login(&self, response: Result<(), TransportError>) {
        self.login_responses.borrow_mut().push_back(response);
    }

    pub(crate) fn fail_set_value(&self, error: TransportError) {
        *self.set_value_error.borrow_mut() = Some(error);
    }

    /// Park the next login until `gate` fires.
    pub(crate) fn hold_next_login(&self, gate: oneshot::Receiver<()>) {
        *self.gate.borrow_mut() = Some(gate);
    }

    pub(crate) fn login_calls(&self) -> usize {
        self.logins.borrow().len()
    }

    pub(crate) fn set_value_calls(&self) -> usize {
        self.set_values.borrow().len()
    }

    pub(crate) fn last_login(&self) -> Option<LoginRequest> {
        self.logins.borrow().last().cloned()
    }

    pub(crate) fn last_set_value(&self) -> Option<SetValueRequest> {
        self.set_values.borrow().last().cloned()
    }
}

#[async_trait(?Send)]
impl AuthTransport for FakeTransport {
    async fn login(&self, request: LoginRequest) -> Result<(), TransportError> {
        self.logins.borrow_mut().push(request);
        let gate = self.gate.borrow_mut().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        self.login_responses
            .borrow_mut()
            .pop_front()
            .unwrap_or(Ok(()))
    }

    async fn set_value(&self, request: SetValueRequest) -> Result<(), TransportError> {
        self.set_values.borrow_mut().push(request);
        self.set_value_error
            .borrow()
            .clone()
            .map_or(Ok(()), Err)
    }
}

/// Collects detached tasks so tests decide when, and whether, they run.
#[derive(Default)]
pub(crate) struct ManualSpawner {
    tasks: RefCell<Vec<LocalBoxFuture<'static, ()>>>,
}

impl ManualSpawner {
    pub(crate) fn pending(&self) -> usize {
        self.tasks.borrow().len()
    }

    /// Drive queued tasks, including ones spawned while draining.
    pub(crate) async fn run_all(&self) {
        loop {
            let batch = std::mem::take(&mut *self.tasks.borrow_mut());
            if batch.is_empty() {
                break;
            }
            for task in batch {
                task.await;
            }
        }
    }
}

impl TaskSpawner for ManualSpawner {
    fn spawn_detached(&self, task: LocalBoxFuture<'static, ()>) {
        self.tasks.borrow_mut().push(task);
    }
}

#[derive(Default)]
pub(crate) struct FakePreferences {
    stored: RefCell<Option<String>>,
    fail: Cell<bool>,
}

impl FakePreferences {
    pub(crate) fn stored(&self) -> Option<String> {
        self.stored.borrow().clone()
    }

    pub(crate) fn seed(&self, code: &str) {
        *self.stored.borrow_mut() = Some(code.to_string());
    }

    pub(crate) fn fail_writes(&self) {
        self.fail.set(true);
    }
}

impl PreferenceStore for FakePreferences {
    fn load_language(&self) -> Option<String> {
        self.stored()
    }

    fn store_language(&self, code: &str) -> Result<(), PreferenceError> {
        if self.fail.get() {
            return Err(PreferenceError {
                detail: "QuotaExceededError".to_string(),
            });
        }
        self.seed(code);
        Ok(())
    }
}

#[derive(Default)]
struct ElementState {
    value: String,
    text: String,
    visible: bool,
    disabled: bool,
    focused: bool,
    scrolls: usize,
    attributes: BTreeMap<String, String>,
    classes: BTreeSet<String>,
}

#[derive(Default)]
struct ElementHandlers {
    change: Vec<ValueHandler>,
    click: Vec<Handler>,
    submit: Vec<Handler>,
}

/// Shared-handle element recording every call, like a DOM node reference.
#[derive(Clone, Default)]
pub(crate) struct FakeElement {
    state: Rc<RefCell<ElementState>>,
    handlers: Rc<RefCell<ElementHandlers>>,
}

impl std::fmt::Debug for FakeElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FakeElement")
            .field("value", &self.state.borrow().value)
            .finish_non_exhaustive()
    }
}

impl FakeElement {
    pub(crate) fn attribute(&self, name: &str) -> Option<String> {
        self.state.borrow().attributes.get(name).cloned()
    }

    pub(crate) fn has_class(&self, class: &str) -> bool {
        self.state.borrow().classes.contains(class)
    }

    pub(crate) fn is_disabled(&self) -> bool {
        self.state.borrow().disabled
    }

    pub(crate) fn is_visible(&self) -> bool {
        self.state.borrow().visible
    }

    pub(crate) fn is_focused(&self) -> bool {
        self.state.borrow().focused
    }

    pub(crate) fn text(&self) -> String {
        self.state.borrow().text.clone()
    }

    pub(crate) fn scroll_count(&self) -> usize {
        self.state.borrow().scrolls
    }

    /// Simulate the user picking `value` and the browser firing `change`.
    pub(crate) fn fire_change(&self, value: &str) {
        self.set_value(value);
        for handler in &self.handlers.borrow().change {
            handler(value.to_string());
        }
    }

    pub(crate) fn fire_click(&self) {
        for handler in &self.handlers.borrow().click {
            handler();
        }
    }

    pub(crate) fn fire_submit(&self) {
        for handler in &self.handlers.borrow().submit {
            handler();
        }
    }
}

impl UiElement for FakeElement {
    fn on_change(&self, handler: ValueHandler) {
        self.handlers.borrow_mut().change.push(handler);
    }

    fn on_click(&self, handler: Handler) {
        self.handlers.borrow_mut().click.push(handler);
    }

    fn on_submit(&self, handler: Handler) {
        self.handlers.borrow_mut().submit.push(handler);
    }

    fn get_value(&self) -> String {
        self.state.borrow().value.clone()
    }

    fn set_value(&self, value: &str) {
        self.state.borrow_mut().value = value.to_string();
    }

    fn set_text(&self, text: &str) {
        self.state.borrow_mut().text = text.to_string();
    }

    fn set_visible(&self, visible: bool) {
        self.state.borrow_mut().visible = visible;
    }

    fn set_attribute(&self, name: &str, value: &str) {
        self.state
            .borrow_mut()
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    fn set_class(&self, class: &str, enabled: bool) {
        let mut state = self.state.borrow_mut();
        if enabled {
            state.classes.insert(class.to_string());
        } else {
            state.classes.remove(class);
        }
    }

    fn set_disabled(&self, disabled: bool) {
        self.state.borrow_mut().disabled = disabled;
    }

    fn focus(&self) {
        self.state.borrow_mut().focused = true;
    }

    fn scroll_into_view(&self) {
        self.state.borrow_mut().scrolls += 1;
    }
}

pub(crate) fn fake_page() -> LoginPage<FakeElement> {
    LoginPage {
        root: FakeElement::default(),
        wrapper: FakeElement::default(),
        form: FakeElement::default(),
        language: FakeElement::default(),
        username: FakeElement::default(),
        password: FakeElement::default(),
        toggle: FakeElement::default(),
        toggle_icon: FakeElement::default(),
        submit: FakeElement::default(),
        error: FakeElement::default(),
    }
}

pub(crate) struct Harness {
    pub(crate) controller: Rc<LoginController<LoginPage<FakeElement>>>,
    pub(crate) host: Rc<FakeHost>,
    pub(crate) transport: Rc<FakeTransport>,
    pub(crate) spawner: Rc<ManualSpawner>,
    pub(crate) preferences: Rc<FakePreferences>,
}

/// Route controller `tracing` output to the test harness; `RUST_LOG` selects the level.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub(crate) fn controller_with(host: FakeHost, transport: FakeTransport) -> Harness {
    init_tracing();
    let host = Rc::new(host);
    let transport = Rc::new(transport);
    let spawner = Rc::new(ManualSpawner::default());
    let preferences = Rc::new(FakePreferences::default());
    let collaborators = Collaborators {
        host: host.clone(),
        transport: transport.clone(),
        spawner: spawner.clone(),
        preferences: preferences.clone(),
    };
    let controller = Rc::new(LoginController::new(
        LoginConfig::default(),
        collaborators,
        fake_page(),
    ));
    Harness {
        controller,
        host,
        transport,
        spawner,
        preferences,
    }
}
