mod app_config;
mod blob_view;
mod boot;
mod contact_view;
mod dom;
mod input;
mod links;
mod motion;
mod particle_view;
mod persisted_store;
mod pointer_view;
mod runtime;
mod scroll_view;
mod theme_view;

fn main() {
    console_error_panic_hook::set_once();
    runtime::run();
}
