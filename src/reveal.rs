use std::cell::RefCell;
use std::rc::Rc;

use folio_core::reveal::{
    parse_percent, width_value, CONTENT_HIDDEN_OPACITY, CONTENT_HIDDEN_TRANSFORM,
    CONTENT_SHOWN_OPACITY, CONTENT_SHOWN_TRANSFORM, CONTENT_TRANSITION, PROGRESS_FILL_SELECTOR,
    PROGRESS_PERCENT_ATTR, PROGRESS_TRANSITION,
};
use folio_core::{RevealKind, RevealSet};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Node};

use crate::dom;
use crate::intersection::{IntersectionChange, IntersectionWatcher, WatchOptions};
use crate::page_runtime;

/// Targets of one reveal kind and which of them already fired.
pub(crate) struct RevealGroup {
    kind: RevealKind,
    targets: Vec<Element>,
    state: RevealSet,
}

impl RevealGroup {
    pub(crate) fn collect(document: &Document, kind: RevealKind) -> Self {
        Self::new(kind, dom::query_all(document, kind.selector()))
    }

    pub(crate) fn new(kind: RevealKind, targets: Vec<Element>) -> Self {
        let state = RevealSet::new(targets.len());
        Self {
            kind,
            targets,
            state,
        }
    }

    pub(crate) fn targets(&self) -> &[Element] {
        &self.targets
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub(crate) fn prepare(&self) {
        for target in &self.targets {
            match self.kind {
                RevealKind::ProgressBar => {
                    if let Some(fill) = dom::query_html(target, PROGRESS_FILL_SELECTOR) {
                        dom::set_style(&fill, "width", "0%");
                    }
                }
                RevealKind::Content => {
                    if let Some(element) = target.dyn_ref::<HtmlElement>() {
                        dom::set_style(element, "opacity", CONTENT_HIDDEN_OPACITY);
                        dom::set_style(element, "transform", CONTENT_HIDDEN_TRANSFORM);
                        dom::set_style(element, "transition", CONTENT_TRANSITION);
                    }
                }
            }
        }
    }

    /// Applies the reveal on the first intersecting report for a target.
    /// Returns true when it did, and the caller should stop observing it.
    pub(crate) fn on_change(&mut self, change: &IntersectionChange) -> bool {
        let node: &Node = &change.target;
        let Some(index) = self
            .targets
            .iter()
            .position(|target| target.is_same_node(Some(node)))
        else {
            return false;
        };
        if !self.state.on_intersection(index, change.intersecting) {
            return false;
        }
        self.reveal(&self.targets[index]);
        true
    }

    fn reveal(&self, target: &Element) {
        match self.kind {
            RevealKind::ProgressBar => {
                let percent = parse_percent(target.get_attribute(PROGRESS_PERCENT_ATTR).as_deref());
                if let Some(fill) = dom::query_html(target, PROGRESS_FILL_SELECTOR) {
                    dom::set_style(&fill, "transition", PROGRESS_TRANSITION);
                    dom::set_style(&fill, "width", &width_value(percent));
                }
            }
            RevealKind::Content => {
                if let Some(element) = target.dyn_ref::<HtmlElement>() {
                    dom::set_style(element, "opacity", CONTENT_SHOWN_OPACITY);
                    dom::set_style(element, "transform", CONTENT_SHOWN_TRANSFORM);
                }
            }
        }
    }
}

pub(crate) fn install(document: &Document, kind: RevealKind) -> Result<(), String> {
    let group = RevealGroup::collect(document, kind);
    if group.is_empty() {
        return Ok(());
    }
    group.prepare();

    let targets = group.targets().to_vec();
    let group = Rc::new(RefCell::new(group));
    let watcher = IntersectionWatcher::new(
        WatchOptions {
            root_margin: None,
            threshold: kind.threshold(),
        },
        move |observer, change| {
            if group.borrow_mut().on_change(&change) {
                observer.unobserve(&change.target);
            }
        },
    )?;
    for target in &targets {
        watcher.watch(target);
    }
    gloo::console::log!("reveal: watching", kind.label(), targets.len());
    page_runtime::retain(watcher);
    Ok(())
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn html(document: &Document, tag: &str) -> HtmlElement {
        document
            .create_element(tag)
            .expect("create element")
            .dyn_into::<HtmlElement>()
            .expect("html element")
    }

    fn style(element: &HtmlElement, property: &str) -> String {
        element
            .style()
            .get_property_value(property)
            .expect("style readable")
    }

    #[wasm_bindgen_test]
    fn progress_bar_fills_once() {
        let document = dom::document().expect("document available");
        let bar = html(&document, "div");
        bar.set_attribute(PROGRESS_PERCENT_ATTR, "85").expect("set percent");
        let fill = html(&document, "span");
        bar.append_child(&fill).expect("append fill");

        let mut group = RevealGroup::new(RevealKind::ProgressBar, vec![bar.clone().into()]);
        group.prepare();
        assert_eq!(style(&fill, "width"), "0%");

        let change = IntersectionChange {
            target: bar.clone().into(),
            intersecting: true,
        };
        assert!(group.on_change(&change));
        assert_eq!(style(&fill, "width"), "85%");

        dom::set_style(&fill, "width", "10%");
        assert!(!group.on_change(&change));
        assert_eq!(style(&fill, "width"), "10%");
    }

    #[wasm_bindgen_test]
    fn content_waits_for_intersection() {
        let document = dom::document().expect("document available");
        let card = html(&document, "p");
        let mut group = RevealGroup::new(RevealKind::Content, vec![card.clone().into()]);
        group.prepare();
        assert_eq!(style(&card, "opacity"), "0");

        let leaving = IntersectionChange {
            target: card.clone().into(),
            intersecting: false,
        };
        assert!(!group.on_change(&leaving));
        assert_eq!(style(&card, "opacity"), "0");

        let entering = IntersectionChange {
            target: card.clone().into(),
            intersecting: true,
        };
        assert!(group.on_change(&entering));
        assert_eq!(style(&card, "opacity"), "1");
        assert_ne!(style(&card, "transform"), CONTENT_HIDDEN_TRANSFORM);
    }

    #[wasm_bindgen_test]
    fn unknown_target_is_ignored() {
        let document = dom::document().expect("document available");
        let tracked = html(&document, "h2");
        let stranger = html(&document, "h2");
        let mut group = RevealGroup::new(RevealKind::Content, vec![tracked.into()]);
        let change = IntersectionChange {
            target: stranger.into(),
            intersecting: true,
        };
        assert!(!group.on_change(&change));
    }
}
