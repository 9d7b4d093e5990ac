use dioxus::prelude::*;
use personal_web::utils::use_store_provider;
use personal_web::Route;

const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        personal_web::configs::init_env();
        env_logger::init();
    }

    #[cfg(target_arch = "wasm32")]
    {
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger was already initialized".into());
        }
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let (theme, _) = use_store_provider();
    let current = theme.read().current_theme();

    rsx! {
        div {
            class: current.map(|t| t.class).unwrap_or_default(),
            style: current.map(|t| t.css_variables()).unwrap_or_default(),
            document::Link { rel: "stylesheet", href: MAIN_CSS }
            Router::<Route> {}
        }
    }
}
