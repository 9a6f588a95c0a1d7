pub mod api;
pub mod components;
pub mod dispatch;
pub mod forms;
pub mod net;
pub mod state;

use components::app::App;
use leptos::prelude::*;

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    mount_to_body(App);
}
