pub mod api;
pub mod app;
pub mod components;
pub mod environment;
pub mod logging;
pub mod persist;
pub mod prelude;
pub mod session;
pub mod settings;
pub mod storage;
pub mod store;

pub use session::{Field, Session};
pub use settings::Settings;
pub use store::{Subscription, Writable};

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    logging::init();
    leptos::mount_to_body(app::App);
}
