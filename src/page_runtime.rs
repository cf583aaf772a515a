use std::any::Any;
use std::cell::RefCell;

use gloo::events::EventListener;

thread_local! {
    static RETAINED: RefCell<Vec<Box<dyn Any>>> = RefCell::new(Vec::new());
}

/// Keeps a listener, observer or timer owner alive until the page unloads.
pub(crate) fn retain<T: 'static>(value: T) {
    RETAINED.with(|slot| {
        slot.borrow_mut().push(Box::new(value));
    });
}

pub(crate) fn retain_listeners(listeners: impl IntoIterator<Item = EventListener>) {
    for listener in listeners {
        retain(listener);
    }
}

pub(crate) fn retained_count() -> usize {
    RETAINED.with(|slot| slot.borrow().len())
}
