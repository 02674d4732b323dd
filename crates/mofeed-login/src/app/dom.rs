//! `web-sys` implementations of the host and element seams.

use crate::config::LoginConfig;
use crate::core::page::{LoginPage, PageIds};
use crate::core::ports::{Handler, HostContext, UiElement, ValueHandler};
use anyhow::{Context, anyhow};
use gloo::console;
use gloo::events::{EventListener, EventListenerOptions};
use gloo::utils::{document, window};
use js_sys::Reflect;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    HtmlDocument, HtmlElement, HtmlInputElement, HtmlSelectElement, ScrollBehavior,
    ScrollIntoViewOptions, ScrollLogicalPosition,
};

/// Handle to a page element; listeners live as long as any clone of the handle.
#[derive(Clone)]
pub(crate) struct DomElement {
    element: HtmlElement,
    listeners: Rc<RefCell<Vec<EventListener>>>,
}

impl DomElement {
    fn new(element: HtmlElement) -> Self {
        Self {
            element,
            listeners: Rc::new(RefCell::new(Vec::new())),
        }
    }

    fn listen(&self, listener: EventListener) {
        self.listeners.borrow_mut().push(listener);
    }
}

fn element_value(element: &HtmlElement) -> String {
    if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        return select.value();
    }
    element
        .dyn_ref::<HtmlInputElement>()
        .map(HtmlInputElement::value)
        .unwrap_or_default()
}

fn log_dom_error(operation: &'static str, err: &JsValue) {
    console::warn!("dom operation failed", operation, err.clone());
}

impl UiElement for DomElement {
    fn on_change(&self, handler: ValueHandler) {
        let element = self.element.clone();
        self.listen(EventListener::new(&self.element, "change", move |_| {
            handler(element_value(&element));
        }));
    }

    fn on_click(&self, handler: Handler) {
        self.listen(EventListener::new(&self.element, "click", move |_| handler()));
    }

    fn on_submit(&self, handler: Handler) {
        self.listen(EventListener::new_with_options(
            &self.element,
            "submit",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                event.prevent_default();
                handler();
            },
        ));
    }

    fn get_value(&self) -> String {
        element_value(&self.element)
    }

    fn set_value(&self, value: &str) {
        if let Some(select) = self.element.dyn_ref::<HtmlSelectElement>() {
            select.set_value(value);
        } else if let Some(input) = self.element.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
        }
    }

    fn set_text(&self, text: &str) {
        self.element.set_text_content(Some(text));
    }

    fn set_visible(&self, visible: bool) {
        let display = if visible { "block" } else { "none" };
        if let Err(err) = self.element.style().set_property("display", display) {
            log_dom_error("style.display", &err);
        }
    }

    fn set_attribute(&self, name: &str, value: &str) {
        if let Err(err) = self.element.set_attribute(name, value) {
            log_dom_error("set_attribute", &err);
        }
    }

    fn set_class(&self, class: &str, enabled: bool) {
        if let Err(err) = self.element.class_list().toggle_with_force(class, enabled) {
            log_dom_error("class_list.toggle", &err);
        }
    }

    fn set_disabled(&self, disabled: bool) {
        let result = if disabled {
            self.element.set_attribute("disabled", "")
        } else {
            self.element.remove_attribute("disabled")
        };
        if let Err(err) = result {
            log_dom_error("disabled", &err);
        }
    }

    fn focus(&self) {
        if let Err(err) = self.element.focus() {
            log_dom_error("focus", &err);
        }
    }

    fn scroll_into_view(&self) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Nearest);
        self.element
            .scroll_into_view_with_scroll_into_view_options(&options);
    }
}

fn by_id(id: &str) -> anyhow::Result<DomElement> {
    document()
        .get_element_by_id(id)
        .with_context(|| format!("missing login page element #{id}"))?
        .dyn_into::<HtmlElement>()
        .map(DomElement::new)
        .map_err(|_| anyhow!("#{id} is not an HTML element"))
}

/// Resolve the login page elements. `Ok(None)` when this page has no login form.
pub(crate) fn find_page(ids: &PageIds) -> anyhow::Result<Option<LoginPage<DomElement>>> {
    if document().get_element_by_id(ids.form).is_none() {
        return Ok(None);
    }
    let root = document()
        .document_element()
        .context("document has no root element")?
        .dyn_into::<HtmlElement>()
        .map(DomElement::new)
        .map_err(|_| anyhow!("document root is not an HTML element"))?;
    Ok(Some(LoginPage {
        root,
        wrapper: by_id(ids.wrapper)?,
        form: by_id(ids.form)?,
        language: by_id(ids.language)?,
        username: by_id(ids.username)?,
        password: by_id(ids.password)?,
        toggle: by_id(ids.toggle)?,
        toggle_icon: by_id(ids.toggle_icon)?,
        submit: by_id(ids.submit)?,
        error: by_id(ids.error)?,
    }))
}

/// Live page, cookie jar and `frappe` runtime object.
pub(crate) struct DomHost {
    csrf_meta_name: String,
}

impl DomHost {
    pub(crate) fn new(config: &LoginConfig) -> Self {
        Self {
            csrf_meta_name: config.csrf_meta_name.clone(),
        }
    }
}

/// Walk `frappe.<path>` on the global object, returning a string leaf.
fn runtime_string(path: &[&str]) -> Option<String> {
    let mut node: JsValue = Reflect::get(&window(), &JsValue::from_str("frappe")).ok()?;
    for segment in path {
        if !node.is_object() {
            return None;
        }
        node = Reflect::get(&node, &JsValue::from_str(segment)).ok()?;
    }
    node.as_string()
}

impl HostContext for DomHost {
    fn meta_csrf_token(&self) -> Option<String> {
        let selector = format!("meta[name=\"{}\"]", self.csrf_meta_name);
        document()
            .query_selector(&selector)
            .ok()
            .flatten()
            .and_then(|meta| meta.get_attribute("content"))
    }

    fn runtime_csrf_token(&self) -> Option<String> {
        runtime_string(&["csrf_token"])
    }

    fn cookie_header(&self) -> String {
        document()
            .dyn_into::<HtmlDocument>()
            .ok()
            .and_then(|html| html.cookie().ok())
            .unwrap_or_default()
    }

    fn current_user(&self) -> Option<String> {
        runtime_string(&["session", "user"])
    }

    fn location_search(&self) -> String {
        window().location().search().unwrap_or_default()
    }

    fn browser_language(&self) -> Option<String> {
        window().navigator().language()
    }

    fn navigate(&self, target: &str) {
        if let Err(err) = window().location().set_href(target) {
            log_dom_error("location.href", &err);
        }
    }
}
