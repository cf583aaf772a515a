use std::cell::Cell;
use std::rc::Rc;

use folio_core::nav::NAV_OPEN_CLASS;
use folio_core::{fragment_id, NavState};
use gloo::events::{EventListener, EventListenerOptions};
use web_sys::{Document, Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::dom;
use crate::page_runtime;

const NAV_TOGGLE_ID: &str = "nav-toggle";
const NAV_MENU_ID: &str = "main-nav";
pub(crate) const NAV_LINK_SELECTOR: &str = ".nav-link";

pub(crate) struct NavController {
    toggle: Element,
    menu: Element,
    state: Cell<NavState>,
}

impl NavController {
    pub(crate) fn attach(document: &Document) -> Option<Rc<Self>> {
        let toggle = dom::by_id(document, NAV_TOGGLE_ID)?;
        let menu = dom::by_id(document, NAV_MENU_ID)?;
        let controller = Rc::new(Self {
            toggle,
            menu,
            state: Cell::new(NavState::new()),
        });
        controller.render();
        Some(controller)
    }

    #[cfg(all(test, target_arch = "wasm32"))]
    pub(crate) fn is_open(&self) -> bool {
        self.state.get().is_open()
    }

    pub(crate) fn toggle(&self) -> bool {
        let mut state = self.state.get();
        let open = state.toggle();
        self.state.set(state);
        self.render();
        open
    }

    pub(crate) fn close(&self) {
        let mut state = self.state.get();
        state.close();
        self.state.set(state);
        self.render();
    }

    fn render(&self) {
        let state = self.state.get();
        let _ = self
            .menu
            .class_list()
            .toggle_with_force(NAV_OPEN_CLASS, state.is_open());
        let _ = self.toggle.set_attribute("aria-expanded", state.aria_expanded());
    }

    pub(crate) fn listen(self: &Rc<Self>, links: &[Element]) -> Vec<EventListener> {
        let mut listeners = Vec::with_capacity(links.len() + 1);
        let controller = Rc::clone(self);
        listeners.push(EventListener::new(&self.toggle, "click", move |_event| {
            controller.toggle();
        }));
        for link in links {
            let controller = Rc::clone(self);
            listeners.push(EventListener::new(link, "click", move |_event| {
                controller.close();
            }));
        }
        listeners
    }
}

/// Fragment links scroll smoothly instead of jumping. Other hrefs navigate normally.
pub(crate) fn smooth_anchor_listeners(document: &Document, links: &[Element]) -> Vec<EventListener> {
    let options = EventListenerOptions::enable_prevent_default();
    links
        .iter()
        .map(|link| {
            let document = document.clone();
            let link_for_cb = link.clone();
            EventListener::new_with_options(link, "click", options, move |event| {
                let Some(href) = link_for_cb.get_attribute("href") else {
                    return;
                };
                let Some(id) = fragment_id(&href) else {
                    return;
                };
                event.prevent_default();
                if let Some(target) = dom::by_id(&document, id) {
                    scroll_into_view(&target);
                }
            })
        })
        .collect()
}

fn scroll_into_view(target: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

pub(crate) fn install(document: &Document) -> Result<(), String> {
    let links = dom::query_all(document, NAV_LINK_SELECTOR);
    page_runtime::retain_listeners(smooth_anchor_listeners(document, &links));
    let Some(controller) = NavController::attach(document) else {
        return Ok(());
    };
    page_runtime::retain_listeners(controller.listen(&links));
    gloo::console::log!("nav: ready", links.len());
    Ok(())
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::HtmlElement;

    wasm_bindgen_test_configure!(run_in_browser);

    struct Fixture {
        toggle: Element,
        menu: Element,
        link: Element,
    }

    impl Drop for Fixture {
        fn drop(&mut self) {
            self.toggle.remove();
            self.menu.remove();
        }
    }

    fn fixture(document: &Document) -> Fixture {
        let body = document.body().expect("body available");
        let toggle = document.create_element("button").expect("create toggle");
        toggle.set_id(NAV_TOGGLE_ID);
        let menu = document.create_element("nav").expect("create menu");
        menu.set_id(NAV_MENU_ID);
        let link = document.create_element("a").expect("create link");
        link.set_class_name("nav-link");
        link.set_attribute("href", "#nav-test-target").expect("set href");
        menu.append_child(&link).expect("append link");
        body.append_child(&toggle).expect("append toggle");
        body.append_child(&menu).expect("append menu");
        Fixture { toggle, menu, link }
    }

    fn click(element: &Element) {
        element
            .dyn_ref::<HtmlElement>()
            .expect("html element")
            .click();
    }

    #[wasm_bindgen_test]
    fn starts_closed_with_expanded_false() {
        let document = dom::document().expect("document available");
        let fx = fixture(&document);
        let controller = NavController::attach(&document).expect("hooks present");
        assert!(!controller.is_open());
        assert_eq!(fx.toggle.get_attribute("aria-expanded").as_deref(), Some("false"));
    }

    #[wasm_bindgen_test]
    fn toggle_and_link_click() {
        let document = dom::document().expect("document available");
        let fx = fixture(&document);
        let controller = NavController::attach(&document).expect("hooks present");
        let _listeners = controller.listen(&[fx.link.clone()]);

        click(&fx.toggle);
        assert!(controller.is_open());
        assert!(fx.menu.class_list().contains(NAV_OPEN_CLASS));
        assert_eq!(fx.toggle.get_attribute("aria-expanded").as_deref(), Some("true"));

        click(&fx.link);
        assert!(!controller.is_open());
        assert!(!fx.menu.class_list().contains(NAV_OPEN_CLASS));

        click(&fx.link);
        assert!(!controller.is_open());
        assert_eq!(fx.toggle.get_attribute("aria-expanded").as_deref(), Some("false"));
    }
}
