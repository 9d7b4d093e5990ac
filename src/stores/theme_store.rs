use std::rc::Rc;
use serde::{ Deserialize, Serialize };
use crate::persist::{ KeyValueStorage, PersistPaths, PersistedStore };

pub const THEME_STORE_ID: &str = "theme";

/// A named set of colors applied over the default (light) look.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeDescriptor {
    pub name: &'static str,
    /// Class put on the root element so the stylesheet can switch palettes.
    pub class: &'static str,
    pub body_color: &'static str,
    pub card_color: &'static str,
    pub text_color: &'static str,
    pub primary_color: &'static str,
}

pub const DARK_THEME: ThemeDescriptor = ThemeDescriptor {
    name: "dark",
    class: "dark",
    body_color: "#101014",
    card_color: "#18181c",
    text_color: "rgba(255, 255, 255, 0.82)",
    primary_color: "#63e2b7",
};

impl ThemeDescriptor {
    pub fn label(&self) -> String {
        format!("{} theme", self.name)
    }

    /// Inline `style` value overriding the stylesheet's color variables.
    pub fn css_variables(&self) -> String {
        format!(
            "--body-color: {}; --card-color: {}; --text-color: {}; --primary-color: {};",
            self.body_color,
            self.card_color,
            self.text_color,
            self.primary_color
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeState {
    pub is_dark_theme: bool,
}

impl ThemeState {
    /// `None` means no override: the light defaults apply.
    pub fn current_theme(&self) -> Option<&'static ThemeDescriptor> {
        if self.is_dark_theme { Some(&DARK_THEME) } else { None }
    }
}

/// Dark-mode preference. The whole state is persisted under `theme`.
pub struct ThemeStore {
    inner: PersistedStore<ThemeState>,
}

impl ThemeStore {
    pub fn new(storage: Rc<dyn KeyValueStorage>) -> Self {
        Self {
            inner: PersistedStore::new(THEME_STORE_ID, storage, PersistPaths::All),
        }
    }

    pub fn state(&self) -> &ThemeState {
        self.inner.state()
    }

    pub fn is_dark_theme(&self) -> bool {
        self.state().is_dark_theme
    }

    pub fn current_theme(&self) -> Option<&'static ThemeDescriptor> {
        self.state().current_theme()
    }

    pub fn toggle_theme(&mut self) {
        let is_dark = self.inner.update(|state| {
            state.is_dark_theme = !state.is_dark_theme;
            state.is_dark_theme
        });
        log::debug!("Theme toggled, dark: {}", is_dark);
    }

    pub fn set_dark_theme(&mut self, value: bool) {
        self.inner.update(|state| state.is_dark_theme = value);
        log::debug!("Theme set, dark: {}", value);
    }
}
