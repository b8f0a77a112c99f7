//! Leptos Starter Frontend Entry Point

mod app;
mod components;
mod models;
mod sortable;
mod store;
mod theme;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
