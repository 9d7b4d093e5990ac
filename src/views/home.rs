use dioxus::prelude::*;
use crate::utils::use_web_info_store;

#[component]
pub fn Home() -> Element {
    let mut web_info = use_web_info_store();

    // Runs once after mount; writing does not subscribe the effect
    use_effect(move || web_info.write().users_add());

    let store = web_info.read();
    let info = store.web_info();
    let links = &info.social_links;

    rsx! {
        main {
            class: "container",
            h1 { "{info.name}" }
            p {
                a { href: "{info.url}", "{info.url}" }
            }
            p {
                "Contact: "
                a { href: "mailto:{info.email}", "{info.email}" }
            }
            ul {
                class: "social-links",
                li { a { href: "{links.github}", "GitHub" } }
                li { a { href: "{links.linkedin}", "LinkedIn" } }
                li { a { href: "{links.twitter}", "Twitter" } }
            }
            footer {
                class: "visits",
                span { "Visits: {store.users()}" }
                button {
                    class: "button",
                    onclick: move |_| web_info.write().users_reset(),
                    "Reset"
                }
            }
        }
    }
}
