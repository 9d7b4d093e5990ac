use dioxus::prelude::*;
use crate::routes::Route;
use crate::stores::DARK_THEME;
use crate::utils::{ use_theme_store, use_web_info_store };

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

#[component(no_case_check)]
pub fn Navbar() -> Element {
    let mut theme = use_theme_store();
    let web_info = use_web_info_store();
    let current = theme.read().current_theme();
    let is_dark = current.is_some();
    let title = match current {
        Some(descriptor) => format!("Leave {}", descriptor.label()),
        None => format!("Switch to {}", DARK_THEME.label()),
    };

    rsx! {
        div {
            document::Link { rel: "stylesheet", href: NAVBAR_CSS }

            nav {
                id: "navbar",
                Link {
                    class: "brand",
                    to: Route::Home,
                    "{web_info.read().web_info().name}"
                }
                button {
                    class: "theme-toggle",
                    title: title,
                    onclick: move |_| theme.write().toggle_theme(),
                    if is_dark {
                        "🌞"
                    } else {
                        "🌙"
                    }
                }
            }
            Outlet::<Route> {}
        }
    }
}
