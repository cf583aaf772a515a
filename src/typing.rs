use std::cell::RefCell;
use std::rc::{Rc, Weak};

use folio_core::TypingAnimator;
use gloo::timers::callback::Timeout;
use web_sys::{Document, Element};

use crate::dom;
use crate::page_runtime;

const TYPING_SELECTOR: &str = ".typing";

/// Drives a [`TypingAnimator`] from browser timeouts.
///
/// Only the next pending timeout is held. Dropping it (through [`TypingRuntime::cancel`]
/// or dropping the runtime) stops the loop.
pub(crate) struct TypingRuntime {
    element: Element,
    animator: RefCell<TypingAnimator>,
    pending: RefCell<Option<Timeout>>,
}

impl TypingRuntime {
    pub(crate) fn new(element: Element, animator: TypingAnimator) -> Rc<Self> {
        Rc::new(Self {
            element,
            animator: RefCell::new(animator),
            pending: RefCell::new(None),
        })
    }

    pub(crate) fn start(self: &Rc<Self>) {
        self.tick();
    }

    #[cfg(all(test, target_arch = "wasm32"))]
    pub(crate) fn is_running(&self) -> bool {
        self.pending.borrow().is_some()
    }

    #[allow(dead_code)]
    pub(crate) fn cancel(&self) {
        self.pending.borrow_mut().take();
    }

    fn tick(self: &Rc<Self>) {
        let step = self.animator.borrow_mut().step();
        self.element.set_text_content(Some(&step.text));
        let weak: Weak<Self> = Rc::downgrade(self);
        let timeout = Timeout::new(step.delay_ms, move || {
            if let Some(runtime) = weak.upgrade() {
                runtime.tick();
            }
        });
        *self.pending.borrow_mut() = Some(timeout);
    }
}

pub(crate) fn install(document: &Document) -> Result<(), String> {
    let Some(element) = dom::query(document, TYPING_SELECTOR) else {
        return Ok(());
    };
    let Some(animator) = TypingAnimator::site_default() else {
        return Ok(());
    };
    let runtime = TypingRuntime::new(element, animator);
    runtime.start();
    gloo::console::log!("typing: started");
    page_runtime::retain(runtime);
    Ok(())
}
