use dioxus::prelude::*;
use crate::persist::default_storage;
use crate::stores::{ ThemeStore, WebInfoStore };

/// Build both stores against the platform storage and provide them to the
/// component tree. Call once, from the root component.
pub fn use_store_provider() -> (Signal<ThemeStore>, Signal<WebInfoStore>) {
    let storage = use_hook(default_storage);

    let theme = use_signal({
        let storage = storage.clone();
        move || ThemeStore::new(storage)
    });
    let web_info = use_signal(move || WebInfoStore::new(storage));

    use_context_provider(|| theme);
    use_context_provider(|| web_info);

    (theme, web_info)
}

pub fn use_theme_store() -> Signal<ThemeStore> {
    use_context::<Signal<ThemeStore>>()
}

pub fn use_web_info_store() -> Signal<WebInfoStore> {
    use_context::<Signal<WebInfoStore>>()
}
