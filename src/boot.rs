//! Startup wiring. Every component installs on its own; a failure is logged
//! and the remaining components still install.

use folio_core::RevealKind;

use crate::contact;
use crate::dom;
use crate::nav;
use crate::page_runtime;
use crate::reveal;
use crate::scroll_spy;
use crate::scroll_top;
use crate::theme;
use crate::typing;
use crate::year;

fn guarded(name: &str, result: Result<(), String>) {
    if let Err(err) = result {
        gloo::console::warn!("boot: component failed", name, err);
    }
}

pub(crate) fn start() {
    let (window, document) = match (dom::window(), dom::document()) {
        (Ok(window), Ok(document)) => (window, document),
        (Err(err), _) | (_, Err(err)) => {
            gloo::console::warn!("boot: no page to enhance", err);
            return;
        }
    };

    guarded("theme", theme::install(&document));
    guarded("nav", nav::install(&document));
    guarded("scroll spy", scroll_spy::install(&document));
    guarded("typing", typing::install(&document));
    guarded(
        "progress bars",
        reveal::install(&document, RevealKind::ProgressBar),
    );
    guarded("scroll top", scroll_top::install(&document, &window));
    guarded("year", year::install(&document));
    guarded("contact", contact::install(&document, &window));
    guarded("fade-in", reveal::install(&document, RevealKind::Content));

    gloo::console::log!("boot: ready", page_runtime::retained_count());
}
