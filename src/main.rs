//! Sortboard Frontend Entry Point

mod app;
mod components;
mod context;
mod ids;
mod models;
mod resolver;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
