//! Wires page elements to the controller.
//!
//! Handlers hold an `Rc` of the controller, which in turn owns the elements, so the
//! controller lives until the page unloads.

use crate::core::auth::CredentialSubmission;
use crate::core::controller::LoginController;
use crate::core::page::LoginPage;
use crate::core::ports::UiElement;
use crate::i18n::Language;
use std::rc::Rc;

/// Initialize the page and register every handler.
pub fn mount<E>(controller: &Rc<LoginController<LoginPage<E>>>)
where
    E: UiElement + 'static,
{
    let page = controller.view();
    let selected = page.language.get_value();
    let language = controller.initialize(Some(selected.as_str()));
    if selected != language.code() {
        page.language.set_value(language.code());
    }
    bind(controller);
    page.username.focus();
}

/// Register change, click and submit handlers on the page elements.
pub fn bind<E>(controller: &Rc<LoginController<LoginPage<E>>>)
where
    E: UiElement + 'static,
{
    let page = controller.view();

    let on_language = Rc::clone(controller);
    page.language
        .on_change(Box::new(move |value: String| on_language.change_language(&value)));

    let on_toggle = Rc::clone(controller);
    page.toggle
        .on_click(Box::new(move || on_toggle.toggle_password_visibility()));

    let on_submit = Rc::clone(controller);
    page.form.on_submit(Box::new(move || {
        let submission = read_submission(&on_submit);
        let task = Rc::clone(&on_submit);
        on_submit.spawn(async move {
            task.submit(submission).await;
        });
    }));
}

/// Current form values as a submission. An unrecognised selector value keeps the
/// controller's active language.
pub fn read_submission<E: UiElement>(
    controller: &LoginController<LoginPage<E>>,
) -> CredentialSubmission {
    let page = controller.view();
    let language = Language::from_code(&page.language.get_value())
        .unwrap_or_else(|| controller.state().language);
    CredentialSubmission::new(
        page.username.get_value(),
        page.password.get_value(),
        language,
    )
}
