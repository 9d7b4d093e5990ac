mod theme_store;
mod web_info_store;

pub use theme_store::{ ThemeDescriptor, ThemeState, ThemeStore, DARK_THEME, THEME_STORE_ID };
pub use web_info_store::{
    SocialLinks,
    WebInfo,
    WebInfoPatch,
    WebInfoState,
    WebInfoStore,
    WEB_INFO_PERSISTED_FIELDS,
    WEB_INFO_STORE_ID,
};
