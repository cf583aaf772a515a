//! Thin owner around `IntersectionObserver`.
//!
//! The observer keeps a JS callback that must live as long as the observer
//! does, so both are held together. Dropping the watcher disconnects it.

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::dom::js_err;

#[derive(Clone, Debug)]
pub(crate) struct IntersectionChange {
    pub(crate) target: Element,
    pub(crate) intersecting: bool,
}

pub(crate) struct WatchOptions<'a> {
    pub(crate) root_margin: Option<&'a str>,
    pub(crate) threshold: f64,
}

pub(crate) struct IntersectionWatcher {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl IntersectionWatcher {
    pub(crate) fn new<F>(options: WatchOptions<'_>, mut on_change: F) -> Result<Self, String>
    where
        F: FnMut(&IntersectionObserver, IntersectionChange) + 'static,
    {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    on_change(
                        &observer,
                        IntersectionChange {
                            target: entry.target(),
                            intersecting: entry.is_intersecting(),
                        },
                    );
                }
            },
        );
        let init = IntersectionObserverInit::new();
        if let Some(margin) = options.root_margin {
            init.set_root_margin(margin);
        }
        init.set_threshold(&JsValue::from_f64(options.threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(js_err)?;
        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub(crate) fn watch(&self, target: &Element) {
        self.observer.observe(target);
    }
}

impl Drop for IntersectionWatcher {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
