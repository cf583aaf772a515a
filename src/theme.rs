use std::cell::Cell;
use std::rc::Rc;

use folio_core::theme::LIGHT_CLASS;
use folio_core::{KeyValueStore, PreferenceStore, ThemePreference};
use gloo::events::EventListener;
use web_sys::{Document, Element};

use crate::dom;
use crate::page_runtime;
use crate::persisted_store;

const TOGGLE_ID: &str = "theme-toggle";

pub(crate) struct ThemeController<S> {
    root: Element,
    toggle: Element,
    prefs: PreferenceStore<S>,
    current: Cell<ThemePreference>,
}

impl<S: KeyValueStore + 'static> ThemeController<S> {
    /// Reads the stored theme and paints it. `None` when the page has no toggle.
    pub(crate) fn attach(document: &Document, prefs: PreferenceStore<S>) -> Option<Rc<Self>> {
        let toggle = dom::by_id(document, TOGGLE_ID)?;
        let root = document.document_element()?;
        let current = prefs.get();
        let controller = Rc::new(Self {
            root,
            toggle,
            prefs,
            current: Cell::new(current),
        });
        controller.render();
        Some(controller)
    }

    pub(crate) fn current(&self) -> ThemePreference {
        self.current.get()
    }

    pub(crate) fn toggle(&self) -> ThemePreference {
        let next = self.current.get().toggled();
        self.current.set(next);
        self.render();
        if let Err(err) = self.prefs.set(next) {
            gloo::console::warn!("theme: preference not saved", err.to_string());
        }
        next
    }

    pub(crate) fn listen(self: &Rc<Self>) -> EventListener {
        let controller = Rc::clone(self);
        EventListener::new(&self.toggle, "click", move |_event| {
            controller.toggle();
        })
    }

    fn render(&self) {
        let theme = self.current.get();
        let view = theme.control_view();
        let _ = self
            .root
            .class_list()
            .toggle_with_force(LIGHT_CLASS, theme.is_light());
        let _ = self.toggle.set_attribute("aria-pressed", view.aria_pressed);
        let _ = self.toggle.set_attribute("aria-label", view.aria_label);
        self.toggle.set_text_content(Some(view.text));
    }
}

pub(crate) fn install(document: &Document) -> Result<(), String> {
    let Some(controller) = ThemeController::attach(document, persisted_store::preference_store())
    else {
        return Ok(());
    };
    gloo::console::log!("theme: ready", controller.current().as_str());
    page_runtime::retain(controller.listen());
    Ok(())
}
