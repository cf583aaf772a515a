use std::cell::RefCell;
use std::rc::Rc;

use folio_core::scroll_spy::{link_selector, ACTIVE_CLASS};
use folio_core::{FocusBand, LinkUpdate, ScrollSpy};
use web_sys::Document;

use crate::dom;
use crate::intersection::{IntersectionChange, IntersectionWatcher, WatchOptions};
use crate::page_runtime;

/// Feeds one observer report into `spy` and repaints the matching nav link.
pub(crate) fn on_change(document: &Document, spy: &mut ScrollSpy, change: &IntersectionChange) {
    if let Some(update) = spy.observe(&change.target.id(), change.intersecting) {
        paint_link(document, &update);
    }
}

fn paint_link(document: &Document, update: &LinkUpdate) {
    let Some(link) = dom::query(document, &link_selector(&update.href)) else {
        return;
    };
    let _ = link
        .class_list()
        .toggle_with_force(ACTIVE_CLASS, update.active);
}

pub(crate) fn install(document: &Document) -> Result<(), String> {
    let spy = ScrollSpy::default();
    let sections: Vec<_> = spy
        .region_ids()
        .filter_map(|id| dom::by_id(document, id))
        .collect();
    if sections.is_empty() {
        return Ok(());
    }

    let spy = Rc::new(RefCell::new(spy));
    let document_for_cb = document.clone();
    let margin = FocusBand::default().root_margin();
    let watcher = IntersectionWatcher::new(
        WatchOptions {
            root_margin: Some(&margin),
            threshold: 0.0,
        },
        move |_observer, change| {
            on_change(&document_for_cb, &mut spy.borrow_mut(), &change);
        },
    )?;
    for section in &sections {
        watcher.watch(section);
    }
    gloo::console::log!("scroll spy: watching", sections.len());
    page_runtime::retain(watcher);
    Ok(())
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use web_sys::Element;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    struct Fixture {
        section: Element,
        other: Element,
        link: Element,
        other_link: Element,
    }

    impl Drop for Fixture {
        fn drop(&mut self) {
            self.section.remove();
            self.other.remove();
            self.link.remove();
            self.other_link.remove();
        }
    }

    fn fixture(document: &Document) -> Fixture {
        let body = document.body().expect("body available");
        let element = |tag: &str| document.create_element(tag).expect("create element");
        let section = element("section");
        section.set_id("spy-test-about");
        let other = element("section");
        other.set_id("spy-test-skills");
        let link = element("a");
        link.set_class_name("nav-link");
        link.set_attribute("href", "#spy-test-about").expect("set href");
        let other_link = element("a");
        other_link.set_class_name("nav-link");
        other_link
            .set_attribute("href", "#spy-test-skills")
            .expect("set href");
        for node in [&section, &other, &link, &other_link] {
            body.append_child(node).expect("append fixture");
        }
        Fixture {
            section,
            other,
            link,
            other_link,
        }
    }

    fn report(target: &Element, intersecting: bool) -> IntersectionChange {
        IntersectionChange {
            target: target.clone(),
            intersecting,
        }
    }

    #[wasm_bindgen_test]
    fn link_follows_its_section() {
        let document = dom::document().expect("document available");
        let fx = fixture(&document);
        let mut spy = ScrollSpy::new(["spy-test-about", "spy-test-skills"]);

        on_change(&document, &mut spy, &report(&fx.section, true));
        assert!(fx.link.class_list().contains(ACTIVE_CLASS));
        assert!(!fx.other_link.class_list().contains(ACTIVE_CLASS));

        on_change(&document, &mut spy, &report(&fx.other, true));
        assert!(fx.link.class_list().contains(ACTIVE_CLASS));
        assert!(fx.other_link.class_list().contains(ACTIVE_CLASS));

        on_change(&document, &mut spy, &report(&fx.section, false));
        assert!(!fx.link.class_list().contains(ACTIVE_CLASS));
        assert!(fx.other_link.class_list().contains(ACTIVE_CLASS));
    }

    #[wasm_bindgen_test]
    fn untracked_section_leaves_links_alone() {
        let document = dom::document().expect("document available");
        let fx = fixture(&document);
        let mut spy = ScrollSpy::new(["spy-test-skills"]);

        on_change(&document, &mut spy, &report(&fx.section, true));
        assert!(!fx.link.class_list().contains(ACTIVE_CLASS));
    }
}
