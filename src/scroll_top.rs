use folio_core::ScrollTopButton;
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::dom;
use crate::page_runtime;

const BUTTON_ID: &str = "topBtn";

pub(crate) fn sync_visibility(button: &HtmlElement, policy: ScrollTopButton, scroll_y: f64) {
    dom::set_style(button, "display", policy.display(scroll_y));
}

fn scroll_to_origin(window: &Window) {
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

pub(crate) fn install(document: &Document, window: &Window) -> Result<(), String> {
    let Some(button) = dom::by_id(document, BUTTON_ID) else {
        return Ok(());
    };
    let button = button
        .dyn_into::<HtmlElement>()
        .map_err(|_| format!("#{BUTTON_ID} is not an html element"))?;
    let policy = ScrollTopButton::default();
    sync_visibility(&button, policy, 0.0);

    let window_for_scroll = window.clone();
    let button_for_scroll = button.clone();
    let on_scroll = EventListener::new(window, "scroll", move |_event| {
        let scroll_y = window_for_scroll.scroll_y().unwrap_or(0.0);
        sync_visibility(&button_for_scroll, policy, scroll_y);
    });

    let window_for_click = window.clone();
    let on_click = EventListener::new(&button, "click", move |_event| {
        scroll_to_origin(&window_for_click);
    });

    page_runtime::retain_listeners([on_scroll, on_click]);
    Ok(())
}
