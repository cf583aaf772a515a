mod boot;
mod contact;
mod dom;
mod intersection;
mod nav;
mod page_runtime;
mod persisted_store;
mod reveal;
mod scroll_spy;
mod scroll_top;
mod theme;
mod typing;
mod year;

fn main() {
    console_error_panic_hook::set_once();
    boot::start();
}
